use crate::{
    ThisError,
    prelude::*,
    types::{PropertyType, UnknownTypeError},
};
use serde_json::Value as JsonValue;
use std::{ops::Not, sync::Arc};

///
/// PropertyError
///

#[derive(Debug, ThisError)]
pub enum PropertyError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("property '{id}': {source}")]
    UnknownType { id: String, source: UnknownTypeError },

    #[error("array property '{id}' is missing a component type")]
    MissingComponentType { id: String },

    #[error("array property '{id}' declares a nested array component")]
    NestedArray { id: String },

    #[error("array property '{id}' declares a zero component count")]
    InvalidComponentCount { id: String },

    #[error("enum property '{id}' is missing an enum type")]
    MissingEnumType { id: String },

    #[error("property '{id}' references unknown enum '{enum_id}'")]
    UnresolvedEnum { id: String, enum_id: String },

    #[error("property '{id}' is normalized but {value_type} does not support normalization")]
    InvalidNormalization {
        id: String,
        value_type: PropertyType,
    },
}

///
/// PropertyModel
/// A fully resolved property descriptor: type, optional enum reference,
/// optional semantic tag.
///

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyModel {
    id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,

    #[serde(rename = "type")]
    ty: PropertyType,

    #[serde(skip_serializing_if = "Option::is_none")]
    component_type: Option<PropertyType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    component_count: Option<u32>,

    #[serde(skip)]
    enum_model: Option<Arc<EnumModel>>,

    #[serde(skip_serializing_if = "Not::not")]
    normalized: bool,

    #[serde(skip_serializing_if = "Not::not")]
    optional: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    default: Option<JsonValue>,

    #[serde(skip_serializing_if = "Option::is_none")]
    semantic: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    extras: Option<JsonValue>,
}

impl PropertyModel {
    pub fn new(
        id: impl Into<String>,
        definition: &PropertyDefinition,
        enums: &EnumMap,
    ) -> Result<Self, PropertyError> {
        let id = id.into();
        if id.is_empty() {
            return Err(PropertyError::InvalidArgument(
                "property id must be a non-empty string".to_string(),
            ));
        }

        let ty = definition
            .ty
            .parse::<PropertyType>()
            .map_err(|source| PropertyError::UnknownType {
                id: id.clone(),
                source,
            })?;

        // componentType/componentCount carry no meaning outside ARRAY
        let (component_type, component_count) = if ty == PropertyType::Array {
            let raw = definition
                .component_type
                .as_ref()
                .ok_or_else(|| PropertyError::MissingComponentType { id: id.clone() })?;
            let component =
                raw.parse::<PropertyType>()
                    .map_err(|source| PropertyError::UnknownType {
                        id: id.clone(),
                        source,
                    })?;
            if component == PropertyType::Array {
                return Err(PropertyError::NestedArray { id });
            }
            if definition.component_count == Some(0) {
                return Err(PropertyError::InvalidComponentCount { id });
            }
            (Some(component), definition.component_count)
        } else {
            (None, None)
        };

        let value_type = component_type.unwrap_or(ty);

        let enum_model = if value_type == PropertyType::Enum {
            let enum_id = definition
                .enum_type
                .as_ref()
                .ok_or_else(|| PropertyError::MissingEnumType { id: id.clone() })?;
            let model = enums
                .get(enum_id)
                .ok_or_else(|| PropertyError::UnresolvedEnum {
                    id: id.clone(),
                    enum_id: enum_id.clone(),
                })?;
            Some(Arc::clone(model))
        } else {
            // a stray enumType on a non-enum property carries no meaning
            None
        };

        if definition.normalized && !value_type.supports_normalization() {
            return Err(PropertyError::InvalidNormalization { id, value_type });
        }

        Ok(Self {
            id,
            name: definition.name.clone(),
            description: definition.description.clone(),
            ty,
            component_type,
            component_count,
            enum_model,
            normalized: definition.normalized,
            optional: definition.optional,
            default: definition.default.clone(),
            semantic: definition.semantic.clone(),
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
    pub const fn ty(&self) -> PropertyType {
        self.ty
    }

    #[must_use]
    pub const fn component_type(&self) -> Option<PropertyType> {
        self.component_type
    }

    #[must_use]
    pub const fn component_count(&self) -> Option<u32> {
        self.component_count
    }

    /// The type a single value of this property carries: the component type
    /// for arrays, the property type itself otherwise.
    #[must_use]
    pub const fn value_type(&self) -> PropertyType {
        match self.component_type {
            Some(component) => component,
            None => self.ty,
        }
    }

    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self.ty, PropertyType::Array)
    }

    #[must_use]
    pub const fn is_enum(&self) -> bool {
        matches!(self.value_type(), PropertyType::Enum)
    }

    /// The resolved enum for properties whose value type is ENUM.
    #[must_use]
    pub const fn enum_model(&self) -> Option<&Arc<EnumModel>> {
        self.enum_model.as_ref()
    }

    #[must_use]
    pub const fn normalized(&self) -> bool {
        self.normalized
    }

    #[must_use]
    pub const fn optional(&self) -> bool {
        self.optional
    }

    /// Uncoerced default value, exactly as declared.
    #[must_use]
    pub fn default_value(&self) -> Option<&JsonValue> {
        self.default.as_ref()
    }

    /// Declared semantic tag, verbatim; may be empty.
    #[must_use]
    pub fn semantic(&self) -> Option<&str> {
        self.semantic.as_deref()
    }

    #[must_use]
    pub fn extras(&self) -> Option<&JsonValue> {
        self.extras.as_ref()
    }
}
