use std::io;

pub use catalog::Catalog;
use condition::ConditionData;
pub use condition::Condition;
use medication::MedicationData;
pub use medication::Medication;
use specialty::SpecialtyData;
pub use specialty::Specialty;

/// The catalog binding all the reference records together.
pub mod catalog;

/// Data structures for medical conditions.
pub mod condition;

/// Data structures for medications.
pub mod medication;

/// Data structures for medical specialties.
pub mod specialty;

#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("error reading catalog file: {0}")]
    Io(#[from] io::Error),

    #[error("catalog file invalid json: {0}")]
    Json(#[from] serde_json::Error),

    /// Wraps the resource type and the id that appears more than once.
    #[error("duplicate {0} id {1}")]
    DuplicateId(&'static str, u32),

    /// Wraps the resource type and the id of the resource that does not exist.
    #[error("no {0} with id {1}")]
    MissingResource(&'static str, u32),
}

pub type DataResult<T> = Result<T, DataError>;

