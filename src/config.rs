//! Deserialization configuration and per-type resolution overrides.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::BoxError;
use crate::types::ResourceIdentifier;

/// Caller-supplied resolution hook for one resource type.
///
/// When registered for a type, the hook fully replaces the default
/// included-list lookup for every relationship target of that type,
/// anywhere in the document, top-level or nested. `included` carries the
/// recursively resolved included value when the target was found in the
/// document, `None` otherwise; the hook is free to ignore it and source the
/// value from elsewhere (a cache, a database, another service).
///
/// Returning `Value::Null` means "no value": the relationship key is omitted
/// for a to-one target, and the null slot is kept in place for a to-many
/// target. An error fails the entire deserialization call.
#[async_trait]
pub trait RelationshipResolver: Send + Sync {
    async fn resolve(
        &self,
        identifier: &ResourceIdentifier,
        included: Option<Value>,
    ) -> Result<Value, BoxError>;
}

/// Configuration for one deserialization call.
///
/// Holds the [`RelationshipResolver`] overrides keyed by resource type name,
/// plus an optional recursion depth limit. The default configuration resolves
/// every relationship from the document's included list with no depth limit.
///
/// The configuration is read-only during a call and may be shared across
/// concurrent deserializations.
#[derive(Default, Clone)]
pub struct DeserializerConfig {
    resolvers: HashMap<String, Arc<dyn RelationshipResolver>>,
    max_depth: Option<usize>,
}

impl DeserializerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an override resolver for a resource type.
    ///
    /// Replaces any resolver previously registered for the same type.
    pub fn with_resolver(
        mut self,
        kind: impl Into<String>,
        resolver: Arc<dyn RelationshipResolver>,
    ) -> Self {
        self.resolvers.insert(kind.into(), resolver);
        self
    }

    /// Cap relationship recursion depth.
    ///
    /// The engine does not detect cyclic relationship graphs: a document
    /// where resource A relates (directly or transitively) back to A
    /// recurses without bound. Setting a limit turns that into a
    /// [`DepthExceeded`] failure instead. The limit counts relationship
    /// levels expanded below the primary resources, so acyclic documents
    /// nested no deeper than `limit` are unaffected. Unset by default.
    ///
    /// [`DepthExceeded`]: crate::DeserializeError::DepthExceeded
    pub fn with_max_depth(mut self, limit: usize) -> Self {
        self.max_depth = Some(limit);
        self
    }

    pub(crate) fn resolver_for(&self, kind: &str) -> Option<&dyn RelationshipResolver> {
        self.resolvers.get(kind).map(|resolver| resolver.as_ref())
    }

    pub(crate) fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }
}

impl fmt::Debug for DeserializerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeserializerConfig")
            .field("resolvers", &self.resolvers.keys().collect::<Vec<_>>())
            .field("max_depth", &self.max_depth)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NullResolver;

    #[async_trait]
    impl RelationshipResolver for NullResolver {
        async fn resolve(
            &self,
            _identifier: &ResourceIdentifier,
            _included: Option<Value>,
        ) -> Result<Value, BoxError> {
            Ok(Value::Null)
        }
    }

    #[test]
    fn resolver_lookup_by_type() {
        let config = DeserializerConfig::new().with_resolver("addresses", Arc::new(NullResolver));

        assert!(config.resolver_for("addresses").is_some());
        assert!(config.resolver_for("users").is_none());
    }

    #[test]
    fn default_config_has_no_depth_limit() {
        let config = DeserializerConfig::default();
        assert_eq!(config.max_depth(), None);

        let config = config.with_max_depth(4);
        assert_eq!(config.max_depth(), Some(4));
    }
}
