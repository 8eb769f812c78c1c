//! Text report for a lookup result.

use askama::Template;

use crate::domain::VehicleRecord;

/// Printed before the lookup starts.
pub const BANNER: &str = "Fetching vehicle details (ethical use only)...";

/// Printed after every report.
pub const DISCLAIMER: &str = "Note: Always verify through official channels for critical use cases";

/// The fixed report layout. Escaping is off (`txt`), values are printed as
/// scraped.
#[derive(Template)]
#[template(
    ext = "txt",
    source = "Registration No: {{ record.registration_no }}
State: {{ record.state }} | RTO: {{ record.rto }}
Vehicle: {{ record.vehicle }}
Class: {{ record.class }}
Fuel: {{ record.fuel }}
Registration Date: {{ record.registration_date }}
Engine: {{ record.engine }}
Chassis: {{ record.chassis }}
Insurance Valid Until: {{ record.insurance_valid_until }}
Pollution Check: {{ record.pollution_check }}"
)]
struct ReportTemplate<'a> {
    record: &'a VehicleRecord,
}

/// Render `record` as the multi-line text report.
///
/// An error carried by the record is appended as a final `Error:` line.
pub fn render(record: &VehicleRecord) -> Result<String, askama::Error> {
    let mut report = ReportTemplate { record }.render()?;

    if let Some(error) = &record.error {
        report.push_str("\nError: ");
        report.push_str(error);
    }

    Ok(report)
}
