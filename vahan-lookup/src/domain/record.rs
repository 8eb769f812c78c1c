//! The vehicle details record produced by a lookup.

use serde::Serialize;

use super::regions::{rto_name, state_name};

/// Placeholder for any field the lookup could not fill.
pub const NOT_AVAILABLE: &str = "N/A";

/// Values at most this long are shown unmasked.
const MASK_THRESHOLD: usize = 8;

/// Characters kept at each end of a masked value.
const MASK_KEEP: usize = 4;

/// Non-sensitive vehicle details for one registration number.
///
/// Every field is always present and starts out as [`NOT_AVAILABLE`], so a
/// record can be rendered no matter how much of the lookup succeeded. Owner
/// details are deliberately not part of the record.
///
/// Serializes with the same labels the report uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VehicleRecord {
    #[serde(rename = "Registration No")]
    pub registration_no: String,
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "RTO")]
    pub rto: String,
    #[serde(rename = "Vehicle")]
    pub vehicle: String,
    #[serde(rename = "Class")]
    pub class: String,
    #[serde(rename = "Fuel")]
    pub fuel: String,
    #[serde(rename = "Registration Date")]
    pub registration_date: String,
    /// Engine number, masked by [`mask_identifier`].
    #[serde(rename = "Engine")]
    pub engine: String,
    /// Chassis number, masked by [`mask_identifier`].
    #[serde(rename = "Chassis")]
    pub chassis: String,
    #[serde(rename = "Insurance Valid Until")]
    pub insurance_valid_until: String,
    #[serde(rename = "Pollution Check")]
    pub pollution_check: String,
    /// Set when the lookup hit a recoverable problem.
    #[serde(rename = "Error", skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Default for VehicleRecord {
    fn default() -> Self {
        let na = || NOT_AVAILABLE.to_string();
        Self {
            registration_no: na(),
            state: na(),
            rto: na(),
            vehicle: na(),
            class: na(),
            fuel: na(),
            registration_date: na(),
            engine: na(),
            chassis: na(),
            insurance_valid_until: na(),
            pollution_check: na(),
            error: None,
        }
    }
}

impl VehicleRecord {
    /// A record carrying only an error; every other field is [`NOT_AVAILABLE`].
    pub fn from_error(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::default()
        }
    }

    /// Fill in `state` and `rto` from the captured registration number.
    ///
    /// The site formats the number with spaces (`"KL07 CN 3645"`), so only
    /// the first whitespace-separated token is used. Its first two characters
    /// are the state code and the next two the RTO code.
    pub fn derive_region(&mut self) {
        let Some(first) = self.registration_no.split_whitespace().next() else {
            return;
        };
        let state_code: String = first.chars().take(2).collect();
        let rto_code: String = first.chars().skip(2).take(2).collect();

        self.state = state_name(&state_code).to_string();
        self.rto = rto_name(&state_code, &rto_code).to_string();
    }

    /// Whether the record carries an error.
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Hide the middle of an engine or chassis number.
///
/// Values longer than eight characters keep their first and last four
/// characters with `****` in between; shorter values are returned as is.
///
/// ```
/// use vahan_lookup::domain::mask_identifier;
///
/// assert_eq!(mask_identifier("ABCD12345678"), "ABCD****5678");
/// assert_eq!(mask_identifier("AB1234"), "AB1234");
/// ```
pub fn mask_identifier(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= MASK_THRESHOLD {
        return value.to_string();
    }

    let head: String = chars[..MASK_KEEP].iter().collect();
    let tail: String = chars[chars.len() - MASK_KEEP..].iter().collect();
    format!("{head}****{tail}")
}
