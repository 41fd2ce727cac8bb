//! Entity trait: identity + continuity across state changes.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{DomainError, DomainResult};
use crate::id::{IdGenerator, RandomIdGenerator, UniqueEntityId};

/// Entity marker + minimal interface.
pub trait Entity {
    /// Domain fields of the entity.
    type Props: Serialize;

    fn unique_entity_id(&self) -> &UniqueEntityId;

    fn props(&self) -> &Self::Props;

    /// Always equal to `unique_entity_id().id()`.
    fn id(&self) -> &str {
        self.unique_entity_id().id()
    }

    /// Flatten the entity into `id` followed by every props field.
    ///
    /// The identifier object itself never appears; a props field named `id` is
    /// shadowed by the entity's own id.
    fn to_dict(&self) -> DomainResult<Map<String, Value>> {
        let props = serde_json::to_value(self.props())
            .map_err(|e| DomainError::invariant(format!("entity props failed to serialize: {e}")))?;
        let Value::Object(fields) = props else {
            return Err(DomainError::invariant("entity props must serialize to an object"));
        };

        let mut dict = Map::with_capacity(fields.len() + 1);
        dict.insert("id".to_string(), Value::String(self.id().to_string()));
        dict.extend(fields.into_iter().filter(|(name, _)| name != "id"));
        Ok(dict)
    }
}

/// Frozen record backing an entity: an identifier plus its props.
///
/// Props are never written in place from outside. [`set`](Self::set) and
/// [`rebuild`](Self::rebuild) are the only update path; both keep the identifier.
///
/// Two records are equal when their identifiers are equal, whatever their props;
/// use [`same_state`](Self::same_state) for a structural comparison.
#[derive(Debug, Clone)]
pub struct EntityRecord<P> {
    unique_entity_id: UniqueEntityId,
    props: P,
}

impl<P> EntityRecord<P> {
    /// Wrap `props` under a freshly generated identifier.
    pub fn new(props: P) -> Self {
        Self::generated_by(&RandomIdGenerator, props)
    }

    pub fn generated_by<G: IdGenerator + ?Sized>(ids: &G, props: P) -> Self {
        Self::with_id(ids.generate(), props)
    }

    pub fn with_id(unique_entity_id: UniqueEntityId, props: P) -> Self {
        Self {
            unique_entity_id,
            props,
        }
    }

    pub fn unique_entity_id(&self) -> &UniqueEntityId {
        &self.unique_entity_id
    }

    pub fn id(&self) -> &str {
        self.unique_entity_id.id()
    }

    pub fn props(&self) -> &P {
        &self.props
    }

    pub fn into_props(self) -> P {
        self.props
    }

    /// Consume the record and return it with `update` applied to its props.
    ///
    /// Chainable: `record.set(|p| p.a = x).set(|p| p.b = y)`.
    pub fn set(mut self, update: impl FnOnce(&mut P)) -> Self {
        update(&mut self.props);
        tracing::trace!(id = %self.unique_entity_id, "entity props updated");
        self
    }
}

impl<P: Clone> EntityRecord<P> {
    /// Copy of this record with `update` applied to its props.
    pub fn rebuild(&self, update: impl FnOnce(&mut P)) -> Self {
        self.clone().set(update)
    }
}

impl<P: PartialEq> EntityRecord<P> {
    /// Same identifier and same props.
    pub fn same_state(&self, other: &Self) -> bool {
        self.unique_entity_id == other.unique_entity_id && self.props == other.props
    }
}

impl<P> PartialEq for EntityRecord<P> {
    fn eq(&self, other: &Self) -> bool {
        self.unique_entity_id == other.unique_entity_id
    }
}

impl<P> Eq for EntityRecord<P> {}

impl<P> core::hash::Hash for EntityRecord<P> {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.unique_entity_id.hash(state);
    }
}

impl<P: Serialize> Entity for EntityRecord<P> {
    type Props = P;

    fn unique_entity_id(&self) -> &UniqueEntityId {
        &self.unique_entity_id
    }

    fn props(&self) -> &P {
        &self.props
    }
}
