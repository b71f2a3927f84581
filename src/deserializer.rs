//! The resolution engine: document dispatch, resource resolution, and
//! recursive relationship resolution.

use futures_util::future::{try_join_all, BoxFuture};
use serde_json::Value;

use crate::config::DeserializerConfig;
use crate::error::DeserializeError;
use crate::types::{
    Document, IdentifierData, PrimaryData, Relationship, Resource, ResourceIdentifier,
};

/// Deserialize a JSON:API document into plain JSON.
///
/// A collection document produces a `Value::Array` with one plain object per
/// primary resource, resolved concurrently and returned in input order. A
/// single-resource document produces the plain object directly. Each object
/// carries the resource's `id`, its attributes copied verbatim, and every
/// relationship that resolved to a non-null value, recursively expanded from
/// the document's included list (or from a per-type override in `config`).
///
/// The input document is never mutated and no result is cached between
/// occurrences of the same relationship target. Resolution is fail-fast: the
/// first error anywhere in the fan-out fails the whole call with no partial
/// result.
///
/// The engine does not validate the document against the JSON:API
/// specification; shape violations are caller error with best-effort output.
/// Cyclic relationship graphs recurse without bound unless
/// [`DeserializerConfig::with_max_depth`] is set.
///
/// # Errors
///
/// Fails with [`DeserializeError::Resolver`] when an override hook fails,
/// or [`DeserializeError::DepthExceeded`] when a configured depth limit is
/// hit. Structural absence (missing `included`, unmatched identifiers,
/// missing `relationships`) is not an error.
pub async fn deserialize(
    document: &Document,
    config: &DeserializerConfig,
) -> Result<Value, DeserializeError> {
    match &document.data {
        PrimaryData::Many(resources) => {
            let resolved = try_join_all(
                resources
                    .iter()
                    .map(|resource| resolve_resource(resource, document, config, 0)),
            )
            .await?;
            Ok(Value::Array(resolved))
        }
        PrimaryData::One(resource) => resolve_resource(resource, document, config, 0).await,
    }
}

/// Resolve one resource into a plain object.
///
/// Builds a fresh map: attribute keys copied as-is, then `id`, then the
/// resolved relationships overlaid (a relationship name wins a collision
/// with an attribute key).
fn resolve_resource<'a>(
    resource: &'a Resource,
    document: &'a Document,
    config: &'a DeserializerConfig,
    depth: usize,
) -> BoxFuture<'a, Result<Value, DeserializeError>> {
    Box::pin(async move {
        if let Some(limit) = config.max_depth() {
            if depth > limit {
                return Err(DeserializeError::DepthExceeded { limit });
            }
        }

        let mut object = resource.attributes.clone();
        object.insert("id".to_string(), Value::String(resource.id.clone()));

        for (name, value) in resolve_relationships(resource, document, config, depth).await? {
            object.insert(name, value);
        }

        Ok(Value::Object(object))
    })
}

/// Resolve every linked relationship of `resource`, concurrently, preserving
/// the relationship map's key order in the result. Only relationships that
/// resolved to a value appear in the output.
async fn resolve_relationships(
    resource: &Resource,
    document: &Document,
    config: &DeserializerConfig,
    depth: usize,
) -> Result<Vec<(String, Value)>, DeserializeError> {
    let pending = resource
        .relationships
        .iter()
        .map(|(name, relationship)| async move {
            let value = resolve_linkage(relationship, document, config, depth).await?;
            Ok::<_, DeserializeError>((name.clone(), value))
        });

    let resolved = try_join_all(pending).await?;
    Ok(resolved
        .into_iter()
        .filter_map(|(name, value)| value.map(|value| (name, value)))
        .collect())
}

/// Resolve one relationship's linkage to its output value, or `None` when
/// the relationship should be omitted.
///
/// A to-many linkage always produces an array once resolved, even when it is
/// empty, and keeps a null slot for every target that resolved to nothing so
/// positions correspond to the input identifiers. A to-one linkage produces
/// its value only when non-null. No linkage (`data` null or absent) produces
/// nothing.
async fn resolve_linkage(
    relationship: &Relationship,
    document: &Document,
    config: &DeserializerConfig,
    depth: usize,
) -> Result<Option<Value>, DeserializeError> {
    match &relationship.data {
        None => Ok(None),
        Some(IdentifierData::Many(identifiers)) => {
            let values = try_join_all(
                identifiers
                    .iter()
                    .map(|identifier| resolve_one(identifier, document, config, depth)),
            )
            .await?;
            Ok(Some(Value::Array(values)))
        }
        Some(IdentifierData::One(identifier)) => {
            let value = resolve_one(identifier, document, config, depth).await?;
            Ok((!value.is_null()).then_some(value))
        }
    }
}

/// Resolve a single relationship target.
///
/// Looks the identifier up in the included list and recursively expands the
/// match; a configured per-type override then fully replaces that value,
/// whatever it returns.
async fn resolve_one(
    identifier: &ResourceIdentifier,
    document: &Document,
    config: &DeserializerConfig,
    depth: usize,
) -> Result<Value, DeserializeError> {
    let included = match document.find_included(identifier) {
        Some(resource) => Some(resolve_resource(resource, document, config, depth + 1).await?),
        None => None,
    };

    match config.resolver_for(&identifier.kind) {
        Some(resolver) => resolver
            .resolve(identifier, included)
            .await
            .map_err(|source| DeserializeError::Resolver {
                kind: identifier.kind.clone(),
                source,
            }),
        None => Ok(included.unwrap_or(Value::Null)),
    }
}
