//! Fluent, short-circuiting field validation.
//!
//! A [`ValidatorRules`] chain is bound to one `(value, prop)` pair. Every rule
//! either hands the chain back or fails with a [`DomainError::Validation`] whose
//! message is the only payload; the first failing rule ends the chain.
//!
//! ```ignore
//! let name = ValidatorRules::values(input, "name")
//!     .required()?
//!     .string()?
//!     .max_length(255)?
//!     .into_string();
//! ```
//!
//! Every rule except `required` treats a null value as valid, so optional fields
//! simply leave `required` out.

use serde_json::Value;

use crate::error::{DomainError, DomainResult};

#[derive(Debug, Clone, PartialEq)]
pub struct ValidatorRules {
    value: Value,
    prop: String,
}

impl ValidatorRules {
    /// Start a chain for one field.
    pub fn values(value: impl Into<Value>, prop: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            prop: prop.into(),
        }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn prop(&self) -> &str {
        &self.prop
    }

    /// Fails on null and on the empty string. `0` and `false` are present values.
    pub fn required(self) -> DomainResult<Self> {
        let missing = match &self.value {
            Value::Null => true,
            Value::String(s) => s.is_empty(),
            _ => false,
        };
        if missing {
            return Err(self.fail("required", format!("The field {} is required.", self.prop)));
        }
        Ok(self)
    }

    pub fn string(self) -> DomainResult<Self> {
        if !matches!(self.value, Value::Null | Value::String(_)) {
            return Err(self.fail("string", format!("The field {} must be a string.", self.prop)));
        }
        Ok(self)
    }

    /// Strings are measured in characters, arrays in items; other values have no
    /// length and pass.
    pub fn max_length(self, max: usize) -> DomainResult<Self> {
        let len = match &self.value {
            Value::String(s) => Some(s.chars().count()),
            Value::Array(items) => Some(items.len()),
            _ => None,
        };
        if len.is_some_and(|len| len > max) {
            return Err(self.fail(
                "max_length",
                format!("The field {} cannot exceed {} characters.", self.prop, max),
            ));
        }
        Ok(self)
    }

    /// Only real booleans pass; `0`, `1` and `""` do not.
    pub fn boolean(self) -> DomainResult<Self> {
        if !matches!(self.value, Value::Null | Value::Bool(_)) {
            return Err(self.fail("boolean", format!("The field {} must be a boolean.", self.prop)));
        }
        Ok(self)
    }

    pub fn into_value(self) -> Value {
        self.value
    }

    /// The validated string, or `None` for a null value.
    pub fn into_string(self) -> Option<String> {
        match self.value {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// The validated boolean, or `None` for a null value.
    pub fn into_bool(self) -> Option<bool> {
        self.value.as_bool()
    }

    fn fail(&self, rule: &'static str, message: String) -> DomainError {
        tracing::debug!(prop = %self.prop, rule, "validation failed");
        DomainError::validation(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn message(err: DomainError) -> String {
        match err {
            DomainError::Validation(msg) => msg,
            other => panic!("Expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn values_binds_value_and_prop() {
        let validator = ValidatorRules::values("value", "prop");
        assert_eq!(validator.value(), &json!("value"));
        assert_eq!(validator.prop(), "prop");
    }

    #[test]
    fn rule_required() {
        for value in [Value::Null, json!("")] {
            let err = ValidatorRules::values(value.clone(), "prop").required().unwrap_err();
            assert_eq!(message(err), "The field prop is required.", "value: {value}");
        }

        for value in [json!("test"), json!(5), json!(0), json!(false)] {
            assert!(
                ValidatorRules::values(value.clone(), "prop").required().is_ok(),
                "value: {value}"
            );
        }
    }

    #[test]
    fn rule_string() {
        for value in [json!(5), json!(true), json!({})] {
            let err = ValidatorRules::values(value.clone(), "prop").string().unwrap_err();
            assert_eq!(message(err), "The field prop must be a string.", "value: {value}");
        }

        for value in [Value::Null, json!(""), json!("some value")] {
            assert!(
                ValidatorRules::values(value.clone(), "prop").string().is_ok(),
                "value: {value}"
            );
        }
    }

    #[test]
    fn rule_max_length() {
        let err = ValidatorRules::values("t".repeat(5), "prop").max_length(4).unwrap_err();
        assert_eq!(message(err), "The field prop cannot exceed 4 characters.");

        for value in ["t".repeat(4), "t".to_string(), String::new()] {
            assert!(ValidatorRules::values(value.clone(), "prop").max_length(4).is_ok());
        }
        assert!(ValidatorRules::values(Value::Null, "prop").max_length(4).is_ok());
    }

    #[test]
    fn max_length_counts_characters_not_bytes() {
        assert!(ValidatorRules::values("ñandú", "prop").max_length(5).is_ok());
        assert!(ValidatorRules::values("ñandú!", "prop").max_length(5).is_err());
    }

    #[test]
    fn rule_boolean() {
        for value in [json!(""), json!(5), json!(5.0), json!(0), json!(1), json!({})] {
            let err = ValidatorRules::values(value.clone(), "prop").boolean().unwrap_err();
            assert_eq!(message(err), "The field prop must be a boolean.", "value: {value}");
        }

        for value in [json!(true), json!(false), Value::Null] {
            assert!(ValidatorRules::values(value, "prop").boolean().is_ok());
        }
    }

    #[test]
    fn first_failing_rule_wins_when_combined() {
        let max_len = 5;
        let chain = |value: Value| -> DomainResult<ValidatorRules> {
            ValidatorRules::values(value, "prop")
                .required()?
                .string()?
                .max_length(max_len)
        };

        assert_eq!(message(chain(Value::Null).unwrap_err()), "The field prop is required.");
        assert_eq!(message(chain(json!(5)).unwrap_err()), "The field prop must be a string.");
        assert_eq!(
            message(chain(json!("a".repeat(6))).unwrap_err()),
            "The field prop cannot exceed 5 characters."
        );

        let err = ValidatorRules::values(Value::Null, "prop")
            .required()
            .and_then(ValidatorRules::boolean)
            .unwrap_err();
        assert_eq!(message(err), "The field prop is required.");

        let err = ValidatorRules::values("a", "prop")
            .required()
            .and_then(ValidatorRules::boolean)
            .unwrap_err();
        assert_eq!(message(err), "The field prop must be a boolean.");
    }

    #[test]
    fn valid_combinations_between_rules() -> DomainResult<()> {
        ValidatorRules::values("test", "prop").required()?.string()?;
        ValidatorRules::values("t".repeat(5), "prop").required()?.string()?.max_length(5)?;
        ValidatorRules::values(true, "prop").required()?.boolean()?;
        ValidatorRules::values(false, "prop").required()?.boolean()?;
        Ok(())
    }

    #[test]
    fn typed_extraction_after_validation() -> DomainResult<()> {
        let name = ValidatorRules::values("Movie", "name").required()?.string()?.into_string();
        assert_eq!(name.as_deref(), Some("Movie"));

        let missing = ValidatorRules::values(Value::Null, "description").string()?.into_string();
        assert_eq!(missing, None);

        let flag = ValidatorRules::values(false, "is_active").boolean()?.into_bool();
        assert_eq!(flag, Some(false));
        Ok(())
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: max_length passes exactly when the char count fits.
            #[test]
            fn max_length_matches_char_count(value in "\\PC{0,40}", max in 0usize..40) {
                let fits = value.chars().count() <= max;
                prop_assert_eq!(ValidatorRules::values(value, "prop").max_length(max).is_ok(), fits);
            }

            /// Property: numbers are never strings nor booleans, but always present.
            #[test]
            fn numbers_are_present_but_mistyped(n in any::<i64>()) {
                prop_assert!(ValidatorRules::values(n, "prop").required().is_ok());
                prop_assert!(ValidatorRules::values(n, "prop").string().is_err());
                prop_assert!(ValidatorRules::values(n, "prop").boolean().is_err());
            }
        }
    }
}
