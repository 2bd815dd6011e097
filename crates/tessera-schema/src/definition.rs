use crate::prelude::*;
use serde_json::Value as JsonValue;
use std::ops::Not;

///
/// ClassDefinition
/// Raw JSON shape of a class, prior to model resolution.
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Property definitions keyed by property id, in document order.
    #[serde(default, with = "ordered_map", skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<(String, PropertyDefinition)>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extras: Option<JsonValue>,
}

///
/// PropertyDefinition
/// The `type` and `componentType` labels stay raw here; resolution happens
/// during model construction.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "type")]
    pub ty: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_count: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enum_type: Option<String>,

    #[serde(default, skip_serializing_if = "Not::not")]
    pub normalized: bool,

    #[serde(default, skip_serializing_if = "Not::not")]
    pub optional: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<JsonValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semantic: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extras: Option<JsonValue>,
}

///
/// EnumDefinition
///

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,

    pub values: Vec<EnumValueDefinition>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extras: Option<JsonValue>,
}

///
/// EnumValueDefinition
///

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumValueDefinition {
    pub name: String,
    pub value: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extras: Option<JsonValue>,
}

///
/// ordered_map
/// (De)serializes a JSON object as a Vec of (key, value) pairs in document
/// order. A duplicate key keeps its first position and takes the last value,
/// matching JSON-object assignment semantics.
///

pub(crate) mod ordered_map {
    use serde::{
        Deserialize, Deserializer, Serialize, Serializer,
        de::{MapAccess, Visitor},
        ser::SerializeMap,
    };
    use std::{fmt, marker::PhantomData};

    pub fn serialize<S, V>(entries: &[(String, V)], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        V: Serialize,
    {
        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for (key, value) in entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }

    pub fn deserialize<'de, D, V>(deserializer: D) -> Result<Vec<(String, V)>, D::Error>
    where
        D: Deserializer<'de>,
        V: Deserialize<'de>,
    {
        struct Entries<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for Entries<V> {
            type Value = Vec<(String, V)>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map with string keys")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries: Vec<(String, V)> =
                    Vec::with_capacity(access.size_hint().unwrap_or(0));

                while let Some((key, value)) = access.next_entry::<String, V>()? {
                    if let Some(slot) = entries.iter_mut().find(|(k, _)| *k == key) {
                        slot.1 = value;
                    } else {
                        entries.push((key, value));
                    }
                }

                Ok(entries)
            }
        }

        deserializer.deserialize_map(Entries(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn properties_preserve_document_order() {
        let definition: ClassDefinition = serde_json::from_value(json!({
            "properties": {
                "zulu": { "type": "STRING" },
                "alpha": { "type": "FLOAT32" },
                "mike": { "type": "BOOLEAN" }
            }
        }))
        .unwrap();

        let ids: Vec<&str> = definition
            .properties
            .iter()
            .map(|(id, _)| id.as_str())
            .collect();
        assert_eq!(ids, ["zulu", "alpha", "mike"]);
    }

    #[test]
    fn duplicate_keys_keep_first_position_and_last_value() {
        let raw = r#"{
            "properties": {
                "a": { "type": "STRING" },
                "b": { "type": "BOOLEAN" },
                "a": { "type": "FLOAT64" }
            }
        }"#;
        let definition: ClassDefinition = serde_json::from_str(raw).unwrap();

        let ids: Vec<&str> = definition
            .properties
            .iter()
            .map(|(id, _)| id.as_str())
            .collect();
        assert_eq!(ids, ["a", "b"], "duplicate key keeps its first position");
        assert_eq!(
            definition.properties[0].1.ty, "FLOAT64",
            "duplicate key takes the last value"
        );
    }

    #[test]
    fn missing_properties_deserializes_empty() {
        let definition: ClassDefinition =
            serde_json::from_value(json!({ "name": "Empty" })).unwrap();

        assert_eq!(definition.name.as_deref(), Some("Empty"));
        assert!(definition.properties.is_empty());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let definition: ClassDefinition = serde_json::from_value(json!({
            "name": "Tree",
            "class": "ignored-upstream-key",
            "properties": { "age": { "type": "UINT8", "noData": 255 } }
        }))
        .unwrap();

        assert_eq!(definition.properties.len(), 1);
    }

    #[test]
    fn serializes_properties_back_as_a_map() {
        let definition: ClassDefinition = serde_json::from_value(json!({
            "properties": {
                "alpha": { "type": "FLOAT32" },
                "beta": { "type": "STRING", "semantic": "NAME" }
            }
        }))
        .unwrap();

        let value = serde_json::to_value(&definition).unwrap();
        assert_eq!(value["properties"]["alpha"]["type"], "FLOAT32");
        assert_eq!(value["properties"]["beta"]["semantic"], "NAME");
    }

    #[test]
    fn property_definition_reads_camel_case_fields() {
        let definition: PropertyDefinition = serde_json::from_value(json!({
            "type": "ARRAY",
            "componentType": "ENUM",
            "componentCount": 3,
            "enumType": "species",
            "normalized": false,
            "optional": true,
            "default": [0, 0, 0],
            "semantic": "SPECIES"
        }))
        .unwrap();

        assert_eq!(definition.ty, "ARRAY");
        assert_eq!(definition.component_type.as_deref(), Some("ENUM"));
        assert_eq!(definition.component_count, Some(3));
        assert_eq!(definition.enum_type.as_deref(), Some("species"));
        assert!(definition.optional);
        assert_eq!(definition.default, Some(json!([0, 0, 0])));
    }

    proptest! {
        #[test]
        fn arbitrary_key_sets_preserve_order(keys in proptest::collection::hash_set("[a-z]{1,8}", 1..16)) {
            let keys: Vec<String> = keys.into_iter().collect();

            let mut object = serde_json::Map::new();
            for key in &keys {
                object.insert(key.clone(), json!({ "type": "STRING" }));
            }

            let definition: ClassDefinition =
                serde_json::from_value(json!({ "properties": object })).unwrap();

            let ids: Vec<&str> = definition
                .properties
                .iter()
                .map(|(id, _)| id.as_str())
                .collect();
            let expected: Vec<&str> = keys.iter().map(String::as_str).collect();
            prop_assert_eq!(ids, expected);
        }
    }
}
