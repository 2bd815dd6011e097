use crate::{ThisError, prelude::*, types::PropertyType};
use serde_json::Value as JsonValue;
use std::{collections::HashMap, sync::Arc};

///
/// EnumMap
/// Externally constructed enum lookup, forwarded unvalidated to property
/// resolution.
///

pub type EnumMap = HashMap<String, Arc<EnumModel>>;

/// Value type assumed when a definition omits `valueType`.
pub const DEFAULT_ENUM_VALUE_TYPE: PropertyType = PropertyType::Uint16;

///
/// EnumError
///

#[derive(Debug, ThisError)]
pub enum EnumError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("enum '{id}' has unknown value type '{value_type}'")]
    UnknownValueType { id: String, value_type: String },

    #[error("enum '{id}' value type {value_type} is not an integer type")]
    NonIntegerValueType {
        id: String,
        value_type: PropertyType,
    },
}

///
/// EnumModel
/// A resolved, named set of value/name pairs that enum properties reference.
///

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumModel {
    id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,

    value_type: PropertyType,

    /// Definition-order value list; lookups resolve duplicates to the later
    /// entry, all entries stay iterable.
    values: Vec<EnumValueModel>,

    #[serde(skip)]
    by_name: HashMap<String, i64>,

    #[serde(skip)]
    by_value: HashMap<i64, usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    extras: Option<JsonValue>,
}

impl EnumModel {
    pub fn new(id: impl Into<String>, definition: &EnumDefinition) -> Result<Self, EnumError> {
        let id = id.into();
        if id.is_empty() {
            return Err(EnumError::InvalidArgument(
                "enum id must be a non-empty string".to_string(),
            ));
        }

        let value_type = match &definition.value_type {
            Some(raw) => raw
                .parse::<PropertyType>()
                .map_err(|_| EnumError::UnknownValueType {
                    id: id.clone(),
                    value_type: raw.clone(),
                })?,
            None => DEFAULT_ENUM_VALUE_TYPE,
        };
        if !value_type.is_integer() {
            return Err(EnumError::NonIntegerValueType { id, value_type });
        }

        let values: Vec<EnumValueModel> = definition
            .values
            .iter()
            .map(|value| EnumValueModel {
                name: value.name.clone(),
                value: value.value,
                description: value.description.clone(),
            })
            .collect();

        let mut by_name = HashMap::with_capacity(values.len());
        let mut by_value = HashMap::with_capacity(values.len());
        for (index, value) in values.iter().enumerate() {
            by_name.insert(value.name.clone(), value.value);
            by_value.insert(value.value, index);
        }

        Ok(Self {
            id,
            name: definition.name.clone(),
            description: definition.description.clone(),
            value_type,
            values,
            by_name,
            by_value,
            extras: definition.extras.clone(),
        })
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub const fn value_type(&self) -> PropertyType {
        self.value_type
    }

    #[must_use]
    pub fn values(&self) -> &[EnumValueModel] {
        &self.values
    }

    /// Resolve a value name to its integer value.
    #[must_use]
    pub fn value_for(&self, name: &str) -> Option<i64> {
        self.by_name.get(name).copied()
    }

    /// Resolve an integer value back to its name.
    #[must_use]
    pub fn name_for(&self, value: i64) -> Option<&str> {
        self.by_value
            .get(&value)
            .map(|&index| self.values[index].name.as_str())
    }

    #[must_use]
    pub fn extras(&self) -> Option<&JsonValue> {
        self.extras.as_ref()
    }
}

///
/// EnumValueModel
///

#[derive(Clone, Debug, Serialize)]
pub struct EnumValueModel {
    pub name: String,
    pub value: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
