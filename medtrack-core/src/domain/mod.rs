//! Core domain entities
//!
//! All business entities are defined here. These are pure data structures
//! with validation logic - no I/O or external dependencies.

mod medication;
pub mod result;
mod route;
mod session;

pub use medication::{Medication, MedicationForm, REQUIRED_FIELDS_MESSAGE};
pub use route::Route;
pub use session::{UserSession, SESSION_KEY};
