//! JSON:API Deserializer
//!
//! Async denormalization of [JSON:API](https://jsonapi.org) documents.
//!
//! This library turns the normalized resource/relationship/included
//! representation of a JSON:API document into plain, fully-nested JSON
//! objects: each primary resource becomes its attributes plus `id`, with
//! every relationship recursively expanded from the document's included
//! list.
//!
//! # Example
//!
//! ```
//! use jsonapi_deserializer::{deserialize, DeserializerConfig, Document};
//! use serde_json::json;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let document: Document = serde_json::from_value(json!({
//!     "data": {
//!         "type": "users",
//!         "id": "1",
//!         "attributes": { "name": "Ann" },
//!         "relationships": {
//!             "address": { "data": { "type": "addr", "id": "9" } }
//!         }
//!     },
//!     "included": [
//!         { "type": "addr", "id": "9", "attributes": { "city": "X" } }
//!     ]
//! })).unwrap();
//!
//! let resolved = deserialize(&document, &DeserializerConfig::default())
//!     .await
//!     .unwrap();
//!
//! assert_eq!(resolved, json!({
//!     "id": "1",
//!     "name": "Ann",
//!     "address": { "id": "9", "city": "X" }
//! }));
//! # }
//! ```
//!
//! # Resolution Rules
//!
//! | Relationship linkage | Resolved output |
//! |----------------------|-----------------|
//! | to-one, found in `included` | the recursively expanded object |
//! | to-one, not found | key omitted |
//! | to-many | array matching the linkage's length and order, with `null` slots for unresolved targets |
//! | `data: null` or absent | key omitted |
//!
//! A [`RelationshipResolver`] registered for a resource type replaces the
//! included-list lookup entirely for every target of that type, so
//! relationship data can be sourced from elsewhere (another store, a
//! service call) without appearing in `included`.
//!
//! The engine never validates documents against the JSON:API specification
//! and does not guard against cyclic relationship graphs by default; see
//! [`DeserializerConfig::with_max_depth`].

mod config;
mod deserializer;
mod error;
mod loader;
mod types;

pub use config::{DeserializerConfig, RelationshipResolver};
pub use deserializer::deserialize;
pub use error::{BoxError, DeserializeError};
pub use loader::{load_document, load_document_auto, load_document_str};
pub use types::{
    Document, IdentifierData, PrimaryData, Relationship, Resource, ResourceIdentifier,
};

#[cfg(feature = "remote")]
pub use loader::load_document_url;
