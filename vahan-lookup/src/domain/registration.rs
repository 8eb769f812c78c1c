//! Vehicle registration number type.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Two state letters, two RTO digits, a one or two letter series, then a
/// one to four digit number.
static REGISTRATION_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2}[0-9]{2}[A-Z]{1,2}[0-9]{1,4}$").unwrap());

/// Error returned when a registration number does not have the expected shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid registration number format: {input:?}")]
pub struct InvalidRegistration {
    input: String,
}

/// A validated Indian vehicle registration number, e.g. `KL07CN3645`.
///
/// The value is stored exactly as supplied: no case folding and no removal
/// of spaces or dashes. Input that is not already in the compact uppercase
/// form is rejected.
///
/// # Examples
///
/// ```
/// use vahan_lookup::domain::RegistrationNumber;
///
/// let reg = RegistrationNumber::parse("KL07CN3645").unwrap();
/// assert_eq!(reg.state_code(), "KL");
/// assert_eq!(reg.rto_code(), "07");
/// assert_eq!(reg.form_parts(), ("KL07", "CN3645"));
///
/// assert!(RegistrationNumber::parse("kl07cn3645").is_err());
/// assert!(RegistrationNumber::parse("KL 07 CN 3645").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct RegistrationNumber(String);

impl RegistrationNumber {
    /// Parse a registration number.
    pub fn parse(s: &str) -> Result<Self, InvalidRegistration> {
        if REGISTRATION_SHAPE.is_match(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(InvalidRegistration {
                input: s.to_string(),
            })
        }
    }

    /// Returns the registration number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The two-letter state code.
    pub fn state_code(&self) -> &str {
        // Validated as ASCII, so byte offsets are char boundaries.
        &self.0[..2]
    }

    /// The two-digit RTO code within the state.
    pub fn rto_code(&self) -> &str {
        &self.0[2..4]
    }

    /// The number split the way the lookup form expects it: state and RTO
    /// code in the first field, series and number in the second.
    pub fn form_parts(&self) -> (&str, &str) {
        self.0.split_at(4)
    }
}

impl fmt::Debug for RegistrationNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RegistrationNumber({})", self.0)
    }
}

impl fmt::Display for RegistrationNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Anything with the documented shape parses and is stored unchanged
        #[test]
        fn valid_always_parses(s in "[A-Z]{2}[0-9]{2}[A-Z]{1,2}[0-9]{1,4}") {
            let reg = RegistrationNumber::parse(&s).unwrap();
            prop_assert_eq!(reg.as_str(), s.as_str());
        }

        /// The two form fields always rejoin to the original number
        #[test]
        fn form_parts_rejoin(s in "[A-Z]{2}[0-9]{2}[A-Z]{1,2}[0-9]{1,4}") {
            let reg = RegistrationNumber::parse(&s).unwrap();
            let (first, rest) = reg.form_parts();
            prop_assert_eq!(first.len(), 4);
            prop_assert_eq!(format!("{first}{rest}"), s);
        }

        /// Lowercase input is never accepted
        #[test]
        fn lowercase_rejected(s in "[a-z]{2}[0-9]{2}[a-z]{1,2}[0-9]{1,4}") {
            prop_assert!(RegistrationNumber::parse(&s).is_err());
        }

        /// Numbers longer than the longest valid shape are rejected
        #[test]
        fn too_long_rejected(s in "[A-Z0-9]{11,20}") {
            prop_assert!(RegistrationNumber::parse(&s).is_err());
        }
    }
}
