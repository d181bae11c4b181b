//! Medtrack Core - Business logic for personal medication tracking
//!
//! This crate implements the core domain logic following hexagonal architecture:
//!
//! - **domain**: Core entities (Medication, UserSession, Route)
//! - **ports**: Trait definitions for external dependencies (KeyValueStore)
//! - **services**: Business logic orchestration (sessions, medications, routing)
//! - **adapters**: Concrete implementations (JSON file, in-memory)

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use adapters::json_file::JsonFileStore;
use config::Config;
use ports::KeyValueStore;
use services::*;

// Re-export commonly used types at crate root
pub use config::SessionPolicy;
pub use domain::result::{Error, OperationResult};
pub use domain::{Medication, MedicationForm, Route, UserSession};

/// Main context for Medtrack operations
///
/// This is the primary entry point for all business logic. It holds
/// the local store, configuration, and all services.
pub struct MedtrackContext {
    pub config: Config,
    pub store: Arc<dyn KeyValueStore>,
    pub session_service: SessionService,
    pub medication_service: MedicationService,
    pub router: Router,
}

impl MedtrackContext {
    /// Create a context backed by the JSON store in `medtrack_dir`
    pub fn new(medtrack_dir: &Path) -> Result<Self> {
        let config = Config::load(medtrack_dir)?;
        let store: Arc<dyn KeyValueStore> =
            Arc::new(JsonFileStore::new(&config.store_path(medtrack_dir))?);
        Ok(Self::with_store(config, store))
    }

    /// Create a context over an existing store
    pub fn with_store(config: Config, store: Arc<dyn KeyValueStore>) -> Self {
        let session_service = SessionService::new(Arc::clone(&store));
        let medication_service = MedicationService::new(Arc::clone(&store));
        let router = Router::new(SessionGuard::new(Arc::clone(&store), config.session_policy));

        Self {
            config,
            store,
            session_service,
            medication_service,
            router,
        }
    }

    /// Enter a guarded view: the current user's email, or [`Error::Unauthorized`]
    ///
    /// The guard decides access under the configured policy. A session that
    /// passes the guard but carries no usable email still can't scope data.
    pub fn require_user(&self) -> std::result::Result<String, Error> {
        self.router.guard().require()?;
        self.session_service.require_email()
    }

    /// Open the medications view for the logged-in user
    pub fn medications_view(&self) -> std::result::Result<MedicationView<'_>, Error> {
        let email = self.require_user()?;
        let mut view = self.medication_service.view(email);
        view.activate()?;
        Ok(view)
    }
}
