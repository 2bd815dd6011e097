use crate::{Error, ThisError, prelude::*};
use serde_json::Value as JsonValue;
use std::{collections::HashMap, sync::Arc};

///
/// ClassError
///

#[derive(Debug, ThisError)]
pub enum ClassError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("malformed class definition: {0}")]
    Definition(#[from] serde_json::Error),
}

///
/// ClassModel
/// An immutable, queryable class: one resolved property per definition
/// entry, indexed by id and by semantic tag.
///

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassModel {
    id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,

    /// Definition-order property list; ids are unique within the class.
    properties: Vec<Arc<PropertyModel>>,

    /// Derived index; every entry aliases an entry of `properties`.
    #[serde(skip)]
    by_semantic: HashMap<String, Arc<PropertyModel>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    extras: Option<JsonValue>,
}

impl ClassModel {
    /// Build a class model from a typed definition and an externally
    /// supplied enum lookup. Fails atomically: the first property that does
    /// not resolve aborts the whole class, and its error passes through
    /// unchanged.
    pub fn new(
        id: impl Into<String>,
        definition: &ClassDefinition,
        enums: &EnumMap,
    ) -> Result<Self, Error> {
        let id = id.into();
        if id.is_empty() {
            return Err(
                ClassError::InvalidArgument("class id must be a non-empty string".to_string())
                    .into(),
            );
        }

        let mut properties = Vec::with_capacity(definition.properties.len());
        let mut by_semantic = HashMap::new();

        for (property_id, property_definition) in &definition.properties {
            let property = Arc::new(PropertyModel::new(
                property_id.clone(),
                property_definition,
                enums,
            )?);

            // a later property with the same semantic takes the slot
            if let Some(semantic) = property.semantic().filter(|s| !s.is_empty()) {
                by_semantic.insert(semantic.to_string(), Arc::clone(&property));
            }
            properties.push(property);
        }

        Ok(Self {
            id,
            name: definition.name.clone(),
            description: definition.description.clone(),
            properties,
            by_semantic,
            extras: definition.extras.clone(),
        })
    }

    /// Build a class model straight from a JSON value. The value must be an
    /// object; beyond that, only the definition's own shape is checked.
    pub fn from_json(
        id: impl Into<String>,
        definition: &JsonValue,
        enums: &EnumMap,
    ) -> Result<Self, Error> {
        if !definition.is_object() {
            return Err(ClassError::InvalidArgument(
                "class definition must be a JSON object".to_string(),
            )
            .into());
        }

        let definition = ClassDefinition::deserialize(definition).map_err(ClassError::Definition)?;

        Self::new(id, &definition, enums)
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

    /// The class properties in definition order.
    #[must_use]
    pub fn properties(&self) -> &[Arc<PropertyModel>] {
        &self.properties
    }

    /// Look up a property by its identifier.
    #[must_use]
    pub fn property(&self, id: &str) -> Option<&Arc<PropertyModel>> {
        self.properties.iter().find(|p| p.id() == id)
    }

    /// Look up a property by its semantic tag. When two properties declare
    /// the same semantic, the later one in definition order answers.
    #[must_use]
    pub fn property_with_semantic(&self, semantic: &str) -> Option<&Arc<PropertyModel>> {
        self.by_semantic.get(semantic)
    }

    #[must_use]
    pub fn property_count(&self) -> usize {
        self.properties.len()
    }

    #[must_use]
    pub fn extras(&self) -> Option<&JsonValue> {
        self.extras.as_ref()
    }
}
