//! State and RTO display names.
//!
//! Only a handful of codes are known; anything else displays as
//! [`NOT_AVAILABLE`](super::NOT_AVAILABLE).

use std::collections::HashMap;
use std::sync::LazyLock;

use super::NOT_AVAILABLE;

/// State code → state name.
static STATES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("KL", "Kerala"),
        ("DL", "Delhi"),
        ("MH", "Maharashtra"),
        ("KA", "Karnataka"),
        ("TN", "Tamil Nadu"),
    ])
});

/// State code followed by RTO code → RTO name.
static RTOS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("KL07", "Ernakulam"),
        ("DL04", "West Delhi"),
        ("MH01", "Mumbai Central"),
        ("KA03", "Bangalore East"),
    ])
});

/// Look up the display name of a state code such as `"KL"`.
pub fn state_name(state_code: &str) -> &'static str {
    STATES.get(state_code).copied().unwrap_or(NOT_AVAILABLE)
}

/// Look up the display name of an RTO, e.g. `("KL", "07")` → `"Ernakulam"`.
pub fn rto_name(state_code: &str, rto_code: &str) -> &'static str {
    let key = format!("{state_code}{rto_code}");
    RTOS.get(key.as_str()).copied().unwrap_or(NOT_AVAILABLE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_states() {
        assert_eq!(state_name("KL"), "Kerala");
        assert_eq!(state_name("DL"), "Delhi");
        assert_eq!(state_name("MH"), "Maharashtra");
        assert_eq!(state_name("KA"), "Karnataka");
        assert_eq!(state_name("TN"), "Tamil Nadu");
    }

    #[test]
    fn known_rtos() {
        assert_eq!(rto_name("KL", "07"), "Ernakulam");
        assert_eq!(rto_name("DL", "04"), "West Delhi");
        assert_eq!(rto_name("MH", "01"), "Mumbai Central");
        assert_eq!(rto_name("KA", "03"), "Bangalore East");
    }

    #[test]
    fn unknown_codes_are_not_available() {
        assert_eq!(state_name("XY"), "N/A");
        assert_eq!(rto_name("XY", "99"), "N/A");
        // Known state, unknown office
        assert_eq!(rto_name("TN", "01"), "N/A");
        assert_eq!(state_name(""), "N/A");
        assert_eq!(state_name("kl"), "N/A");
    }
}
