use crate::FieldError;
use crate::Value;
use crate::types::Argument;
use crate::types::GraphQLType;
use indexmap::IndexMap;
use libgraphql_deferred::ResolverReturn;
use std::sync::Arc;

/// Produces the value of a field given its parent (source) value and its
/// coerced argument values.
pub type FieldResolver = Arc<
    dyn Fn(&Value, &IndexMap<String, Value>) -> ResolverReturn<Value, FieldError>
        + Send
        + Sync,
>;

/// Represents a field on an [`ObjectType`](crate::types::ObjectType) or
/// [`InterfaceType`](crate::types::InterfaceType).
///
/// A [`Field`] is named by the key it is registered under in its parent
/// type's field map.
#[derive(Clone)]
pub struct Field {
    pub(super) args: IndexMap<String, Argument>,
    pub(super) deprecation_reason: Option<String>,
    pub(super) description: Option<String>,
    pub(super) graphql_type: GraphQLType,
    pub(super) name: String,
    pub(super) resolver: Option<FieldResolver>,
}
impl Field {
    pub fn new(graphql_type: impl Into<GraphQLType>) -> Self {
        Self {
            args: IndexMap::new(),
            deprecation_reason: None,
            description: None,
            graphql_type: graphql_type.into(),
            name: String::new(),
            resolver: None,
        }
    }

    pub fn with_argument(mut self, name: impl Into<String>, arg: Argument) -> Self {
        self.args.insert(name.into(), arg);
        self
    }

    pub fn with_arguments(mut self, args: IndexMap<String, Argument>) -> Self {
        self.args = args;
        self
    }

    pub fn with_deprecation_reason(mut self, reason: impl Into<String>) -> Self {
        self.deprecation_reason = Some(reason.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_resolver<F>(mut self, resolver: F) -> Self
    where
        F: Fn(&Value, &IndexMap<String, Value>) -> ResolverReturn<Value, FieldError>
            + Send
            + Sync
            + 'static,
    {
        self.resolver = Some(Arc::new(resolver));
        self
    }

    /// The arguments accepted by this field, in declaration order.
    pub fn args(&self) -> &IndexMap<String, Argument> {
        &self.args
    }

    pub fn deprecation_reason(&self) -> Option<&str> {
        self.deprecation_reason.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn graphql_type(&self) -> &GraphQLType {
        &self.graphql_type
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecation_reason.is_some()
    }

    /// The name of this field. Empty until the field map it belongs to has
    /// been resolved.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn resolver(&self) -> Option<&FieldResolver> {
        self.resolver.as_ref()
    }
}
impl std::fmt::Debug for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("graphql_type", &self.graphql_type)
            .field("args", &self.args)
            .field("deprecation_reason", &self.deprecation_reason)
            .field("has_resolver", &self.resolver.is_some())
            .finish()
    }
}
