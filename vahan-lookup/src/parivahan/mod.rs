//! Parivahan RC status client.
//!
//! This module scrapes the public "Know your vehicle details" search on
//! parivahan.gov.in, the front end of the national Vahan registry.
//!
//! Key characteristics of the site:
//! - It is a JSF application: the search is an AJAX partial-page update
//!   that must echo back the view-state token and reuse the session cookie
//!   from the search page
//! - The result comes back as a `partial-response` XML document whose
//!   updates carry HTML fragments
//! - There is no versioned API; any markup change can break the lookup, in
//!   which case [`LookupError::StructureChanged`] is reported

mod client;
mod error;
mod form;
mod parse;
mod partial;

pub use client::{ParivahanClient, ParivahanConfig};
pub use error::LookupError;
pub use form::SearchForm;
pub use parse::parse_response;
pub use partial::ParseError;
