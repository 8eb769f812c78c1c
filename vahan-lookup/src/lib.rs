//! Vehicle registration lookup.
//!
//! A command-line tool that answers: "what does the national registry say
//! about this number plate?" It runs the public RC status search on
//! parivahan.gov.in and reports a few non-sensitive details. Owner details
//! are never extracted.

pub mod domain;
pub mod lookup;
pub mod parivahan;
pub mod report;
