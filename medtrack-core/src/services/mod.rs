//! Service layer - business logic orchestration
//!
//! Services coordinate domain logic and port interactions. Each service
//! focuses on a specific use case or feature area.

pub mod medication;
mod router;
mod session;

pub use medication::{medications_key, MedicationService, MedicationView, MEDICATIONS_KEY_PREFIX};
pub use router::{Navigation, Router};
pub use session::{Access, SessionGuard, SessionService};
