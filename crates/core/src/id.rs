//! Entity identifiers.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{DomainError, DomainResult, INVALID_UUID_MESSAGE};

/// Identity token of one entity instance.
///
/// Always holds a syntactically valid UUID string. The string is kept exactly as
/// supplied (after validation) so round-tripping an externally issued id never
/// changes its casing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UniqueEntityId {
    id: String,
    uuid: Uuid,
}

impl UniqueEntityId {
    /// Create a fresh random (v4) identifier.
    pub fn new() -> Self {
        let uuid = Uuid::new_v4();
        tracing::trace!(id = %uuid, "generated entity id");
        Self::from_uuid(uuid)
    }

    /// Validate and wrap an externally supplied identifier.
    pub fn parse(value: &str) -> DomainResult<Self> {
        let uuid =
            Uuid::parse_str(value).map_err(|_| DomainError::invalid_id(INVALID_UUID_MESSAGE))?;
        Ok(Self {
            id: value.to_string(),
            uuid,
        })
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self {
            id: uuid.hyphenated().to_string(),
            uuid,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn as_uuid(&self) -> Uuid {
        self.uuid
    }
}

impl Default for UniqueEntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for UniqueEntityId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.id)
    }
}

impl From<Uuid> for UniqueEntityId {
    fn from(value: Uuid) -> Self {
        Self::from_uuid(value)
    }
}

impl FromStr for UniqueEntityId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for UniqueEntityId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<UniqueEntityId> for String {
    fn from(value: UniqueEntityId) -> Self {
        value.id
    }
}

impl crate::value_object::ValueObject for UniqueEntityId {}

/// Source of new entity identifiers.
///
/// Constructors take one of these so tests can pin identifiers instead of
/// relying on randomness.
pub trait IdGenerator {
    fn generate(&self) -> UniqueEntityId;
}

/// Random v4 identifiers; one fresh value per call.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn generate(&self) -> UniqueEntityId {
        UniqueEntityId::new()
    }
}
