//! HAL representation: attributes, `_links` and `_embedded`

use super::link::Links;
use crate::error::{HalError, HalResult};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

const LINKS_KEY: &str = "_links";
const EMBEDDED_KEY: &str = "_embedded";

/// The value stored under one embedded name.
#[derive(Debug, Clone, PartialEq)]
pub enum EmbeddedEntry {
    Single(Box<Representation>),
    List(Vec<Representation>),
}

impl Serialize for EmbeddedEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Single(item) => item.serialize(serializer),
            Self::List(items) => items.serialize(serializer),
        }
    }
}

/// Ordered embedded sub-resources of one representation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Embedded {
    entries: Vec<(String, EmbeddedEntry)>,
}

impl Embedded {
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(&mut self, name: &str, entry: EmbeddedEntry) -> HalResult<()> {
        if self.contains(name) {
            return Err(HalError::DuplicateEmbedded(name.to_string()));
        }
        self.entries.push((name.to_string(), entry));
        Ok(())
    }

    pub fn insert_single(&mut self, name: &str, item: Representation) -> HalResult<()> {
        self.insert(name, EmbeddedEntry::Single(Box::new(item)))
    }

    /// Embed a list. An empty list is kept and serializes as `[]`.
    pub fn insert_list(&mut self, name: &str, items: Vec<Representation>) -> HalResult<()> {
        self.insert(name, EmbeddedEntry::List(items))
    }

    pub fn get(&self, name: &str) -> Option<&EmbeddedEntry> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, e)| e)
    }

    /// Items under `name`; a single embed yields one item.
    pub fn items(&self, name: &str) -> Vec<&Representation> {
        match self.get(name) {
            Some(EmbeddedEntry::Single(item)) => vec![item.as_ref()],
            Some(EmbeddedEntry::List(items)) => items.iter().collect(),
            None => Vec::new(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Embedded {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, entry) in &self.entries {
            map.serialize_entry(name, entry)?;
        }
        map.end()
    }
}

/// The outgoing document for one entity or collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Representation {
    attributes: Map<String, Value>,
    links: Links,
    embedded: Embedded,
}

impl Representation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a representation whose attributes are the fields of `dto`.
    ///
    /// The DTO must serialize to a JSON object. Null fields are dropped so
    /// absent values never show up as placeholders.
    pub fn from_dto<T: Serialize>(dto: &T) -> HalResult<Self> {
        match serde_json::to_value(dto)? {
            Value::Object(fields) => {
                let mut repr = Self::new();
                for (key, value) in fields {
                    if !value.is_null() {
                        repr.set_attribute(key, value)?;
                    }
                }
                Ok(repr)
            }
            other => Err(HalError::InvalidRepresentation(format!(
                "expected an object, got {}",
                other
            ))),
        }
    }

    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    pub fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }

    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<Value>) -> HalResult<()> {
        let key = key.into();
        if key == LINKS_KEY || key == EMBEDDED_KEY {
            return Err(HalError::InvalidRepresentation(format!(
                "attribute name {} is reserved",
                key
            )));
        }
        self.attributes.insert(key, value.into());
        Ok(())
    }

    pub fn links(&self) -> &Links {
        &self.links
    }

    pub fn links_mut(&mut self) -> &mut Links {
        &mut self.links
    }

    pub fn embedded(&self) -> &Embedded {
        &self.embedded
    }

    pub fn embedded_mut(&mut self) -> &mut Embedded {
        &mut self.embedded
    }

    pub fn to_value(&self) -> HalResult<Value> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn to_json(&self) -> HalResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> HalResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Serialize for Representation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (key, value) in &self.attributes {
            map.serialize_entry(key, value)?;
        }
        if !self.links.is_empty() {
            map.serialize_entry(LINKS_KEY, &self.links)?;
        }
        if !self.embedded.is_empty() {
            map.serialize_entry(EMBEDDED_KEY, &self.embedded)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hal::Link;
    use serde::Serialize;

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct SampleDto {
        branch_name: String,
        changesets_ahead: Option<u32>,
    }

    #[test]
    fn from_dto_copies_fields_in_order() {
        let dto = SampleDto {
            branch_name: "master".to_string(),
            changesets_ahead: Some(42),
        };
        let repr = Representation::from_dto(&dto).unwrap();
        let keys: Vec<_> = repr.attributes().keys().cloned().collect();
        assert_eq!(keys, vec!["branchName", "changesetsAhead"]);
    }

    #[test]
    fn absent_optional_field_is_omitted() {
        let dto = SampleDto {
            branch_name: "develop".to_string(),
            changesets_ahead: None,
        };
        let repr = Representation::from_dto(&dto).unwrap();
        assert!(repr.attribute("changesetsAhead").is_none());
        assert_eq!(repr.to_json().unwrap(), r#"{"branchName":"develop"}"#);
    }

    #[test]
    fn from_dto_rejects_non_objects() {
        assert!(matches!(
            Representation::from_dto(&vec![1, 2]),
            Err(HalError::InvalidRepresentation(_))
        ));
    }

    #[test]
    fn reserved_attribute_names_are_rejected() {
        let mut repr = Representation::new();
        assert!(repr.set_attribute("_links", 1).is_err());
        assert!(repr.set_attribute("_embedded", 1).is_err());
    }

    #[test]
    fn empty_embedded_list_is_serialized() {
        let mut repr = Representation::new();
        repr.links_mut()
            .insert_single("self", Link::new("/v2/repositories/a/b/branch-details/"))
            .unwrap();
        repr.embedded_mut().insert_list("branchDetails", Vec::new()).unwrap();
        assert_eq!(
            repr.to_json().unwrap(),
            r#"{"_links":{"self":{"href":"/v2/repositories/a/b/branch-details/"}},"_embedded":{"branchDetails":[]}}"#
        );
    }

    #[test]
    fn duplicate_embedded_name_is_rejected() {
        let mut repr = Representation::new();
        repr.embedded_mut().insert_list("members", Vec::new()).unwrap();
        assert!(matches!(
            repr.embedded_mut().insert_single("members", Representation::new()),
            Err(HalError::DuplicateEmbedded(_))
        ));
    }
}
