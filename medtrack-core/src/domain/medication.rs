//! Medication domain model

use serde::{Deserialize, Serialize};

use super::result::{Error, Result};

/// Inline message shown when the add form is submitted incomplete
pub const REQUIRED_FIELDS_MESSAGE: &str = "All fields are required.";

/// A single medication entry. List position is its only handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Medication {
    pub name: String,
    pub dosage: String,
    pub frequency: String,
}

impl Medication {
    /// Build a record, requiring all three fields to be non-empty
    pub fn new(
        name: impl Into<String>,
        dosage: impl Into<String>,
        frequency: impl Into<String>,
    ) -> Result<Self> {
        let medication = Self {
            name: name.into(),
            dosage: dosage.into(),
            frequency: frequency.into(),
        };

        if medication.name.is_empty()
            || medication.dosage.is_empty()
            || medication.frequency.is_empty()
        {
            return Err(Error::validation(REQUIRED_FIELDS_MESSAGE));
        }

        Ok(medication)
    }
}

/// Input state of the "Add Medication" form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MedicationForm {
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    /// Inline error from the last submit, if any
    pub error: Option<String>,
}

impl MedicationForm {
    pub fn new(
        name: impl Into<String>,
        dosage: impl Into<String>,
        frequency: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            dosage: dosage.into(),
            frequency: frequency.into(),
            error: None,
        }
    }

    /// Build a record from the current inputs without touching form state
    pub fn to_medication(&self) -> Result<Medication> {
        Medication::new(&self.name, &self.dosage, &self.frequency)
    }

    /// Reset inputs and error after a successful submit
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_clear(&self) -> bool {
        self == &Self::default()
    }
}
