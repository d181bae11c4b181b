//! Medication service - per-user medication lists
//!
//! Each user's list is a JSON array stored under `medications_<email>`.
//! Saves always write the whole list.

use std::sync::Arc;

use crate::domain::result::{Error, Result};
use crate::domain::{Medication, MedicationForm};
use crate::ports::KeyValueStore;

/// Prefix of the per-user medication key
pub const MEDICATIONS_KEY_PREFIX: &str = "medications_";

/// Store key holding `user_email`'s list
pub fn medications_key(user_email: &str) -> String {
    format!("{}{}", MEDICATIONS_KEY_PREFIX, user_email)
}

/// Loads and saves medication lists
pub struct MedicationService {
    store: Arc<dyn KeyValueStore>,
}

impl MedicationService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Load a user's list. Absent or corrupt data reads as an empty list.
    ///
    /// Corrupt data is logged as a warning; use [`load_strict`](Self::load_strict)
    /// to get it as an error instead. Store failures are always returned.
    pub fn load(&self, user_email: &str) -> Result<Vec<Medication>> {
        match self.load_strict(user_email) {
            Err(Error::Deserialization { key, message }) => {
                tracing::warn!("Ignoring unreadable medication list under {}: {}", key, message);
                Ok(Vec::new())
            }
            other => other,
        }
    }

    /// Load a user's list, reporting corrupt data as [`Error::Deserialization`]
    pub fn load_strict(&self, user_email: &str) -> Result<Vec<Medication>> {
        let key = medications_key(user_email);
        let medications = match self.store.get_item(&key)? {
            Some(raw) => serde_json::from_str(&raw).map_err(|e| Error::deserialization(&key, e))?,
            None => Vec::new(),
        };

        tracing::debug!(count = medications.len(), "Loaded medications");
        Ok(medications)
    }

    /// Replace the stored list with `medications`
    pub fn save(&self, user_email: &str, medications: &[Medication]) -> Result<()> {
        let raw = serde_json::to_string(medications)?;
        self.store.set_item(&medications_key(user_email), &raw)?;
        tracing::debug!(count = medications.len(), "Saved medications");
        Ok(())
    }

    /// Start a view over `user_email`'s list. Nothing is read until activation.
    pub fn view(&self, user_email: impl Into<String>) -> MedicationView<'_> {
        MedicationView {
            service: self,
            user_email: user_email.into(),
            loaded: None,
            form: MedicationForm::default(),
        }
    }
}

/// The medications screen for one user: the loaded list plus the add form
///
/// Loads once on [`activate`](Self::activate). Only successful adds are
/// persisted; loading never writes.
pub struct MedicationView<'a> {
    service: &'a MedicationService,
    user_email: String,
    /// `None` until the first activation
    loaded: Option<Vec<Medication>>,
    pub form: MedicationForm,
}

impl<'a> MedicationView<'a> {
    pub fn user_email(&self) -> &str {
        &self.user_email
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.is_some()
    }

    /// Load the list if this is the first activation
    pub fn activate(&mut self) -> Result<&[Medication]> {
        let medications = self.loaded_mut()?;
        Ok(medications.as_slice())
    }

    /// Records in insertion order. Empty until activated.
    pub fn medications(&self) -> &[Medication] {
        self.loaded.as_deref().unwrap_or_default()
    }

    fn loaded_mut(&mut self) -> Result<&mut Vec<Medication>> {
        let medications = match self.loaded.take() {
            Some(medications) => medications,
            None => self.service.load(&self.user_email)?,
        };
        Ok(self.loaded.insert(medications))
    }

    /// Submit the form
    ///
    /// On success the record is appended, the whole list saved and the form
    /// cleared. An incomplete form leaves the list untouched, saves nothing
    /// and sets the form's inline error. A failed save rolls the append back
    /// and keeps the form inputs.
    pub fn add_record(&mut self) -> Result<Medication> {
        let medications = match self.loaded.take() {
            Some(medications) => medications,
            None => self.service.load(&self.user_email)?,
        };
        let medications = self.loaded.insert(medications);

        let medication = match self.form.to_medication() {
            Ok(medication) => medication,
            Err(e) => {
                self.form.error = Some(e.to_string());
                return Err(e);
            }
        };

        medications.push(medication.clone());
        if let Err(e) = self.service.save(&self.user_email, medications) {
            medications.pop();
            return Err(e);
        }

        self.form.clear();
        Ok(medication)
    }

    /// Fill the form and submit it in one step
    pub fn add(&mut self, name: &str, dosage: &str, frequency: &str) -> Result<Medication> {
        self.form = MedicationForm::new(name, dosage, frequency);
        self.add_record()
    }
}
