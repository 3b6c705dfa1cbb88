//! Caller-supplied parameter bags.
//!
//! A [`ParameterBag`] carries the name→value pairs one execution resolves
//! its placeholders against. Bags are built per call and never persisted.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::core::{Result, SqlError, Value};

/// Name → [`Value`] mapping matched against a statement's placeholders.
///
/// # Examples
///
/// ```
/// use namedsql::{ParameterBag, Value};
///
/// let params = ParameterBag::new().with("Id", 4).with("City", "Nice");
/// assert_eq!(params.get("Id"), Some(&Value::Integer(4)));
/// assert!(params.contains("City"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ParameterBag {
    values: HashMap<String, Value>,
}

impl ParameterBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Build a bag from a JSON object of scalars.
    ///
    /// Nested arrays and objects are rejected, as is any non-object root.
    pub fn from_json(json: &JsonValue) -> Result<Self> {
        let object = json
            .as_object()
            .ok_or_else(|| SqlError::InvalidParameter("expected a JSON object".into()))?;

        let mut bag = Self::new();
        for (name, value) in object {
            bag.values.insert(name.clone(), json_scalar(name, value)?);
        }
        Ok(bag)
    }

    /// Build a bag from any `Serialize` type whose fields are scalars.
    ///
    /// The struct-literal counterpart of an inline parameter object:
    ///
    /// ```
    /// use namedsql::ParameterBag;
    /// use serde::Serialize;
    ///
    /// #[derive(Serialize)]
    /// struct Lookup {
    ///     #[serde(rename = "Id")]
    ///     id: i64,
    /// }
    ///
    /// # fn main() -> namedsql::Result<()> {
    /// let params = ParameterBag::from_serialize(&Lookup { id: 4 })?;
    /// assert!(params.contains("Id"));
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_serialize<T: Serialize>(params: &T) -> Result<Self> {
        let json = serde_json::to_value(params)
            .map_err(|e| SqlError::InvalidParameter(e.to_string()))?;
        Self::from_json(&json)
    }
}

impl<S: Into<String>, V: Into<Value>> FromIterator<(S, V)> for ParameterBag {
    fn from_iter<I: IntoIterator<Item = (S, V)>>(iter: I) -> Self {
        let mut bag = Self::new();
        for (name, value) in iter {
            bag.insert(name, value);
        }
        bag
    }
}

fn json_scalar(name: &str, value: &JsonValue) -> Result<Value> {
    match value {
        JsonValue::Null => Ok(Value::Null),
        JsonValue::Bool(b) => Ok(Value::Boolean(*b)),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Integer(i))
            } else if let Some(f) = n.as_f64() {
                Ok(Value::Float(f))
            } else {
                Err(SqlError::InvalidParameter(format!(
                    "number {} for '{}' is out of range",
                    n, name
                )))
            }
        }
        JsonValue::String(s) => Ok(Value::Text(s.clone())),
        JsonValue::Array(_) | JsonValue::Object(_) => Err(SqlError::InvalidParameter(format!(
            "'{}' must be a scalar value",
            name
        ))),
    }
}
