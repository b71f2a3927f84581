//! Core types for JSON:API document deserialization.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Reference to a resource by `(type, id)`.
///
/// Used as relationship linkage and to locate full resources in a
/// document's included list. Equality is structural on both fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceIdentifier {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
}

impl ResourceIdentifier {
    pub fn new(kind: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            id: id.into(),
        }
    }

    /// True when `resource` carries this identifier's type and id.
    pub fn matches(&self, resource: &Resource) -> bool {
        self.kind == resource.kind && self.id == resource.id
    }
}

/// One resource object: identity plus attributes and named relationships.
///
/// `attributes` and `relationships` are optional in the wire format; absent
/// maps parse as empty. Unknown members (`links`, `meta`, ...) are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub attributes: Map<String, Value>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub relationships: IndexMap<String, Relationship>,
}

/// One named relationship entry.
///
/// `data` is `None` both when the member is absent and when it is an
/// explicit `null`; either way the relationship has no linkage and is
/// skipped during resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<IdentifierData>,
}

/// To-one vs. to-many linkage.
///
/// The shape is fixed per relationship name within one resource and decides
/// whether the resolved value is a single object or an ordered array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IdentifierData {
    One(ResourceIdentifier),
    Many(Vec<ResourceIdentifier>),
}

/// Primary data of a document: a single resource or an ordered collection.
///
/// The shape decides whether the overall deserialization result is one
/// plain object or an array of plain objects, mirroring input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrimaryData {
    One(Resource),
    Many(Vec<Resource>),
}

/// A parsed JSON:API document: primary data plus the optional side list of
/// fully-described related resources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub data: PrimaryData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub included: Option<Vec<Resource>>,
}

impl Document {
    /// Linear scan of the included list for `identifier`.
    ///
    /// Returns the first match; a document may legally contain at most one
    /// resource per identity, but duplicates are not rejected here. Returns
    /// `None` when `included` is absent or nothing matches.
    pub fn find_included(&self, identifier: &ResourceIdentifier) -> Option<&Resource> {
        self.included
            .as_ref()?
            .iter()
            .find(|resource| identifier.matches(resource))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn single_document_parses() {
        let document: Document = serde_json::from_value(json!({
            "data": {
                "type": "users",
                "id": "1",
                "attributes": { "name": "Ann" }
            }
        }))
        .unwrap();

        let PrimaryData::One(resource) = &document.data else {
            panic!("expected single primary data");
        };
        assert_eq!(resource.kind, "users");
        assert_eq!(resource.id, "1");
        assert_eq!(resource.attributes["name"], json!("Ann"));
        assert!(resource.relationships.is_empty());
        assert!(document.included.is_none());
    }

    #[test]
    fn collection_document_parses() {
        let document: Document = serde_json::from_value(json!({
            "data": [
                { "type": "users", "id": "1" },
                { "type": "users", "id": "2" }
            ]
        }))
        .unwrap();

        let PrimaryData::Many(resources) = &document.data else {
            panic!("expected collection primary data");
        };
        assert_eq!(resources.len(), 2);
        assert_eq!(resources[0].id, "1");
        assert_eq!(resources[1].id, "2");
    }

    #[test]
    fn to_one_and_to_many_linkage_parse() {
        let resource: Resource = serde_json::from_value(json!({
            "type": "users",
            "id": "1",
            "relationships": {
                "address": { "data": { "type": "addresses", "id": "9" } },
                "books": { "data": [
                    { "type": "books", "id": "2" },
                    { "type": "books", "id": "3" }
                ] }
            }
        }))
        .unwrap();

        assert!(matches!(
            resource.relationships["address"].data,
            Some(IdentifierData::One(_))
        ));
        match &resource.relationships["books"].data {
            Some(IdentifierData::Many(identifiers)) => {
                assert_eq!(identifiers.len(), 2);
                assert_eq!(identifiers[0], ResourceIdentifier::new("books", "2"));
            }
            other => panic!("expected to-many linkage, got {:?}", other),
        }
    }

    #[test]
    fn null_and_absent_linkage_parse_as_none() {
        let resource: Resource = serde_json::from_value(json!({
            "type": "users",
            "id": "1",
            "relationships": {
                "address": { "data": null },
                "employer": {}
            }
        }))
        .unwrap();

        assert_eq!(resource.relationships["address"].data, None);
        assert_eq!(resource.relationships["employer"].data, None);
    }

    #[test]
    fn resource_missing_id_is_rejected() {
        let result: Result<Resource, _> =
            serde_json::from_value(json!({ "type": "users" }));
        assert!(result.is_err());
    }

    #[test]
    fn find_included_returns_first_match() {
        let document: Document = serde_json::from_value(json!({
            "data": { "type": "users", "id": "1" },
            "included": [
                { "type": "addresses", "id": "9", "attributes": { "city": "X" } },
                { "type": "addresses", "id": "9", "attributes": { "city": "Y" } }
            ]
        }))
        .unwrap();

        let found = document
            .find_included(&ResourceIdentifier::new("addresses", "9"))
            .unwrap();
        assert_eq!(found.attributes["city"], json!("X"));
    }

    #[test]
    fn find_included_without_included_list() {
        let document: Document = serde_json::from_value(json!({
            "data": { "type": "users", "id": "1" }
        }))
        .unwrap();

        assert!(document
            .find_included(&ResourceIdentifier::new("addresses", "9"))
            .is_none());
    }
}
