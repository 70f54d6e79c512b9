use std::{fs, path::Path};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::*;

const SEED: &str = include_str!("seed.json");

#[derive(Serialize, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    specialties: Vec<SpecialtyData>,
    #[serde(default)]
    conditions: Vec<ConditionData>,
    #[serde(default)]
    medications: Vec<MedicationData>,
}

/// Wrapper around all reference data.
///
/// Records keep the order they were declared in, which is the order browse
/// listings and search results use.
#[derive(Debug)]
pub struct Catalog {
    specialties: IndexMap<u32, SpecialtyData>,
    conditions: IndexMap<u32, ConditionData>,
    medications: IndexMap<u32, MedicationData>,
}

impl Catalog {
    /// Read a catalog file from the filesystem.
    pub fn load(path: impl AsRef<Path>) -> DataResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// The catalog bundled with the binary.
    pub fn seeded() -> DataResult<Self> {
        Self::from_json(SEED)
    }

    pub fn from_json(contents: &str) -> DataResult<Self> {
        let file: CatalogFile = serde_json::from_str(contents)?;

        let specialties = keyed("specialty", file.specialties, |s| s.id)?;
        let conditions = keyed("condition", file.conditions, |c| c.id)?;
        let medications = keyed("medication", file.medications, |m| m.id)?;

        // Every cross reference must resolve.
        for condition in conditions.values() {
            if let Some(id) = condition.specialty_id {
                if !specialties.contains_key(&id) {
                    return Err(DataError::MissingResource("specialty", id));
                }
            }
            if let Some(&id) = condition
                .medication_ids
                .iter()
                .find(|id| !medications.contains_key(*id))
            {
                return Err(DataError::MissingResource("medication", id));
            }
        }
        for medication in medications.values() {
            if let Some(&id) = medication
                .specialty_ids
                .iter()
                .find(|id| !specialties.contains_key(*id))
            {
                return Err(DataError::MissingResource("specialty", id));
            }
        }

        Ok(Catalog {
            specialties,
            conditions,
            medications,
        })
    }

    /// Get the condition with the specified id.
    pub fn condition(&self, id: u32) -> DataResult<Condition> {
        self.conditions
            .get(&id)
            .map(|data| Condition {
                catalog: self,
                data,
            })
            .ok_or(DataError::MissingResource("condition", id))
    }

    /// Get all the conditions.
    pub fn conditions(&self) -> impl Iterator<Item = Condition> {
        self.conditions.values().map(|data| Condition {
            catalog: self,
            data,
        })
    }

    /// Get the medication with the specified id.
    pub fn medication(&self, id: u32) -> DataResult<Medication> {
        self.medications
            .get(&id)
            .map(|data| Medication {
                catalog: self,
                data,
            })
            .ok_or(DataError::MissingResource("medication", id))
    }

    /// Get all the medications.
    pub fn medications(&self) -> impl Iterator<Item = Medication> {
        self.medications.values().map(|data| Medication {
            catalog: self,
            data,
        })
    }

    /// Get the specialty with the specified id.
    pub fn specialty(&self, id: u32) -> DataResult<Specialty> {
        self.specialties
            .get(&id)
            .map(|data| Specialty {
                catalog: self,
                data,
            })
            .ok_or(DataError::MissingResource("specialty", id))
    }

    /// Get all the specialties.
    pub fn specialties(&self) -> impl Iterator<Item = Specialty> {
        self.specialties.values().map(|data| Specialty {
            catalog: self,
            data,
        })
    }

    /// Record counts as (conditions, medications, specialties).
    pub fn counts(&self) -> (usize, usize, usize) {
        (
            self.conditions.len(),
            self.medications.len(),
            self.specialties.len(),
        )
    }
}

fn keyed<T>(
    kind: &'static str,
    records: Vec<T>,
    id: impl Fn(&T) -> u32,
) -> DataResult<IndexMap<u32, T>> {
    let mut map = IndexMap::with_capacity(records.len());
    for record in records {
        let key = id(&record);
        if map.insert(key, record).is_some() {
            return Err(DataError::DuplicateId(kind, key));
        }
    }
    Ok(map)
}
