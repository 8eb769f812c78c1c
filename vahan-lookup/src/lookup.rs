//! The lookup pipeline: fetch the result page, then parse it.

use tracing::{info, warn};

use crate::domain::{NOT_AVAILABLE, RegistrationNumber, VehicleRecord};
use crate::parivahan::{ParivahanClient, parse_response};

/// Look up the vehicle details for `registration`.
///
/// Every failure after validation ends up in the returned record's `error`
/// field rather than as an `Err`, so the caller always has something to
/// report.
pub async fn lookup(
    client: &ParivahanClient,
    registration: &RegistrationNumber,
) -> VehicleRecord {
    match client.fetch_result_page(registration).await {
        Ok(body) => {
            let record = parse_response(&body);
            if record.has_error() {
                warn!(
                    registration = registration.as_str(),
                    "lookup finished with a parsing error"
                );
            } else {
                info!(
                    registration = registration.as_str(),
                    state = registration.state_code(),
                    rto = registration.rto_code(),
                    found = record.registration_no != NOT_AVAILABLE,
                    "lookup finished"
                );
            }
            record
        }
        Err(e) => {
            warn!(registration = registration.as_str(), error = %e, "lookup failed");
            VehicleRecord::from_error(e.to_string())
        }
    }
}
