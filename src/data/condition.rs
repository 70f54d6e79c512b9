use serde::{Deserialize, Serialize};

use super::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConditionData {
    pub(super) id: u32,
    pub(super) name: String,
    pub(super) description: String,
    #[serde(default)]
    pub(super) symptoms: Vec<String>,
    #[serde(default)]
    pub(super) treatments: Vec<String>,
    #[serde(default)]
    pub(super) specialty_id: Option<u32>,
    #[serde(default)]
    pub(super) medication_ids: Vec<u32>,
}

/// A wrapper around a condition.
#[derive(Clone, Copy)]
pub struct Condition<'catalog> {
    pub(super) catalog: &'catalog Catalog,
    pub(super) data: &'catalog ConditionData,
}

impl<'catalog> Condition<'catalog> {
    /// The condition id.
    pub fn id(&self) -> u32 {
        self.data.id
    }

    /// The condition name.
    pub fn name(&self) -> &'catalog str {
        &self.data.name
    }

    pub fn description(&self) -> &'catalog str {
        &self.data.description
    }

    pub fn symptoms(&self) -> &'catalog [String] {
        &self.data.symptoms
    }

    pub fn treatments(&self) -> &'catalog [String] {
        &self.data.treatments
    }

    pub fn specialty_id(&self) -> Option<u32> {
        self.data.specialty_id
    }

    /// The specialty this condition is filed under, if any.
    pub fn specialty(&self) -> Option<Specialty<'catalog>> {
        self.data
            .specialty_id
            .and_then(|id| self.catalog.specialty(id).ok())
    }

    /// Medications used to treat this condition.
    pub fn medications(&self) -> impl Iterator<Item = Medication<'catalog>> + 'catalog {
        let catalog = self.catalog;
        self.data
            .medication_ids
            .iter()
            .filter_map(move |&id| catalog.medication(id).ok())
    }
}
