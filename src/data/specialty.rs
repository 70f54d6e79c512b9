use serde::{Deserialize, Serialize};

use super::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecialtyData {
    pub(super) id: u32,
    pub(super) name: String,
    #[serde(default)]
    pub(super) description: String,
}

/// A wrapper around a specialty.
#[derive(Clone, Copy)]
pub struct Specialty<'catalog> {
    pub(super) catalog: &'catalog Catalog,
    pub(super) data: &'catalog SpecialtyData,
}

impl<'catalog> Specialty<'catalog> {
    /// The specialty id.
    pub fn id(&self) -> u32 {
        self.data.id
    }

    /// The specialty name.
    pub fn name(&self) -> &'catalog str {
        &self.data.name
    }

    pub fn description(&self) -> &'catalog str {
        &self.data.description
    }

    /// Conditions filed under this specialty.
    pub fn conditions(&self) -> impl Iterator<Item = Condition<'catalog>> + 'catalog {
        let id = self.data.id;
        self.catalog
            .conditions()
            .filter(move |c| c.specialty_id() == Some(id))
    }

    /// Medications associated with this specialty.
    pub fn medications(&self) -> impl Iterator<Item = Medication<'catalog>> + 'catalog {
        let id = self.data.id;
        self.catalog
            .medications()
            .filter(move |m| m.specialty_ids().contains(&id))
    }
}
