use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use seedwork_core::{
    Clock, DomainResult, Entity, EntityRecord, IdGenerator, RandomIdGenerator, SystemClock,
    UniqueEntityId, ValidatorRules,
};

/// Longest accepted category name, in characters.
pub const MAX_NAME_LENGTH: usize = 255;

/// Validated category fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryProps {
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Input for [`Category::new`].
///
/// Fields are loosely typed on purpose: whatever the caller hands in is checked by
/// the rule chain, so a number passed as a name is reported as
/// "The field name must be a string." instead of being unrepresentable.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCategory {
    name: Value,
    description: Value,
    is_active: Value,
    created_at: Option<DateTime<Utc>>,
    id: Option<UniqueEntityId>,
}

impl NewCategory {
    pub fn named(name: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            description: Value::Null,
            is_active: Value::Null,
            created_at: None,
            id: None,
        }
    }

    pub fn description(mut self, description: impl Into<Value>) -> Self {
        self.description = description.into();
        self
    }

    /// Defaults to `true` when left unset (or set to null).
    pub fn is_active(mut self, is_active: impl Into<Value>) -> Self {
        self.is_active = is_active.into();
        self
    }

    /// Defaults to the clock's current time.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Defaults to a freshly generated identifier.
    pub fn id(mut self, id: UniqueEntityId) -> Self {
        self.id = Some(id);
        self
    }
}

/// Entity: Category.
///
/// Equality follows identity: a category stays equal to itself across updates.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Category {
    record: EntityRecord<CategoryProps>,
}

impl Category {
    /// Validate `input` and build a category, reading the system clock and a
    /// random identifier for any defaults.
    pub fn new(input: NewCategory) -> DomainResult<Self> {
        Self::new_with(input, &SystemClock, &RandomIdGenerator)
    }

    pub fn new_with<C, G>(input: NewCategory, clock: &C, ids: &G) -> DomainResult<Self>
    where
        C: Clock + ?Sized,
        G: IdGenerator + ?Sized,
    {
        let name = validate_name(input.name)?;
        let description = validate_description(input.description)?;
        let is_active = ValidatorRules::values(input.is_active, "is_active")
            .boolean()?
            .into_bool()
            .unwrap_or(true);

        let props = CategoryProps {
            name,
            description,
            is_active,
            created_at: input.created_at.unwrap_or_else(|| clock.now()),
        };
        let record = match input.id {
            Some(id) => EntityRecord::with_id(id, props),
            None => EntityRecord::generated_by(ids, props),
        };

        tracing::debug!(id = %record.unique_entity_id(), "category created");
        Ok(Self { record })
    }

    pub fn name(&self) -> &str {
        &self.record.props().name
    }

    pub fn description(&self) -> Option<&str> {
        self.record.props().description.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.record.props().is_active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.record.props().created_at
    }

    /// Replace name and description.
    ///
    /// Both values go through the same rules as construction before anything is
    /// written; on error the category is left as it was.
    pub fn update(
        &mut self,
        name: impl Into<Value>,
        description: impl Into<Value>,
    ) -> DomainResult<()> {
        let name = validate_name(name.into())?;
        let description = validate_description(description.into())?;

        self.record = self.record.rebuild(|props| {
            props.name = name;
            props.description = description;
        });
        tracing::debug!(id = %self.record.unique_entity_id(), "category updated");
        Ok(())
    }

    pub fn activate(&mut self) {
        self.record = self.record.rebuild(|props| props.is_active = true);
    }

    pub fn deactivate(&mut self) {
        self.record = self.record.rebuild(|props| props.is_active = false);
    }

    /// Same identifier and same field values.
    pub fn same_state(&self, other: &Self) -> bool {
        self.record.same_state(&other.record)
    }
}

impl Entity for Category {
    type Props = CategoryProps;

    fn unique_entity_id(&self) -> &UniqueEntityId {
        self.record.unique_entity_id()
    }

    fn props(&self) -> &CategoryProps {
        self.record.props()
    }
}

fn validate_name(name: Value) -> DomainResult<String> {
    Ok(ValidatorRules::values(name, "name")
        .required()?
        .string()?
        .max_length(MAX_NAME_LENGTH)?
        .into_string()
        .unwrap_or_default())
}

fn validate_description(description: Value) -> DomainResult<Option<String>> {
    Ok(ValidatorRules::values(description, "description")
        .string()?
        .into_string())
}
