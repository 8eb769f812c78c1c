//! Domain types for vehicle registration lookups.
//!
//! Registration numbers are validated at construction time, so code that
//! receives a [`RegistrationNumber`] can trust its shape. The
//! [`VehicleRecord`] always has every field present.

mod record;
mod regions;
mod registration;

pub use record::{NOT_AVAILABLE, VehicleRecord, mask_identifier};
pub use regions::{rto_name, state_name};
pub use registration::{InvalidRegistration, RegistrationNumber};
