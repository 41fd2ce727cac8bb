//! `seedwork-core`: domain modeling kernel.
//!
//! Identity-bearing entities, structurally compared value objects and the
//! validation rule chain that guards their construction. **Pure domain**: no IO,
//! no persistence, no shared process state.

pub mod clock;
pub mod entity;
pub mod error;
pub mod id;
pub mod rules;
pub mod validator;
pub mod value_object;

pub use clock::{Clock, FixedClock, SystemClock};
pub use entity::{Entity, EntityRecord};
pub use error::{DomainError, DomainResult, INVALID_UUID_MESSAGE};
pub use id::{IdGenerator, RandomIdGenerator, UniqueEntityId};
pub use rules::ValidatorRules;
pub use validator::{ErrorFields, ValidatorFields, ValidatorFieldsState};
pub use value_object::ValueObject;
