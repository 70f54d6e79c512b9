use serde::{Deserialize, Serialize};

use super::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicationData {
    pub(super) id: u32,
    pub(super) name: String,
    pub(super) class_name: String,
    #[serde(default)]
    pub(super) description: String,
    #[serde(default)]
    pub(super) uses: Vec<String>,
    #[serde(default)]
    pub(super) side_effects: Vec<String>,
    pub(super) dosing: String,
    #[serde(default)]
    pub(super) contraindications: Vec<String>,
    #[serde(default)]
    pub(super) specialty_ids: Vec<u32>,
}

/// A wrapper around a medication.
#[derive(Clone, Copy)]
pub struct Medication<'catalog> {
    pub(super) catalog: &'catalog Catalog,
    pub(super) data: &'catalog MedicationData,
}

impl<'catalog> Medication<'catalog> {
    /// The medication id.
    pub fn id(&self) -> u32 {
        self.data.id
    }

    /// The medication name.
    pub fn name(&self) -> &'catalog str {
        &self.data.name
    }

    /// The drug class, e.g. "Beta blocker".
    pub fn class_name(&self) -> &'catalog str {
        &self.data.class_name
    }

    /// The description, which may be empty for older records.
    pub fn description(&self) -> &'catalog str {
        &self.data.description
    }

    pub fn uses(&self) -> &'catalog [String] {
        &self.data.uses
    }

    pub fn side_effects(&self) -> &'catalog [String] {
        &self.data.side_effects
    }

    pub fn dosing(&self) -> &'catalog str {
        &self.data.dosing
    }

    pub fn contraindications(&self) -> &'catalog [String] {
        &self.data.contraindications
    }

    pub fn specialty_ids(&self) -> &'catalog [u32] {
        &self.data.specialty_ids
    }

    pub fn specialties(&self) -> impl Iterator<Item = Specialty<'catalog>> + 'catalog {
        let catalog = self.catalog;
        self.data
            .specialty_ids
            .iter()
            .filter_map(move |&id| catalog.specialty(id).ok())
    }

    /// Conditions that list this medication as a treatment.
    pub fn conditions(&self) -> impl Iterator<Item = Condition<'catalog>> + 'catalog {
        let id = self.data.id;
        self.catalog
            .conditions()
            .filter(move |c| c.data.medication_ids.contains(&id))
    }
}
