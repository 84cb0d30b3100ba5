use crate::Value;
use crate::types::ObjectType;
use crate::types::PossibleTypes;
use crate::types::ResolveTypeFn;
use crate::types::UnionTypeBuilder;
use std::sync::Arc;

/// Represents a
/// [union type](https://spec.graphql.org/October2021/#sec-Unions).
#[derive(Clone)]
pub struct UnionType(pub(super) Arc<UnionTypeData>);

pub(super) struct UnionTypeData {
    pub(super) description: Option<String>,
    pub(super) name: String,
    pub(super) possible_types: PossibleTypes,
    pub(super) resolve_type: Option<ResolveTypeFn>,
}

impl UnionType {
    pub fn builder(name: impl Into<String>) -> UnionTypeBuilder {
        UnionTypeBuilder::new(name)
    }

    pub fn description(&self) -> Option<&str> {
        self.0.description.as_deref()
    }

    pub fn has_resolve_type(&self) -> bool {
        self.0.resolve_type.is_some()
    }

    /// Whether `type_` is one of the member types of this union (compared by
    /// name).
    pub fn is_possible_type(&self, type_: &ObjectType) -> bool {
        self.0.possible_types.contains(type_)
    }

    pub fn name(&self) -> &str {
        self.0.name.as_str()
    }

    /// The member types of this union, in declaration order.
    pub fn possible_types(&self) -> &[ObjectType] {
        self.0.possible_types.as_slice()
    }

    pub(crate) fn possible_type_set(&self) -> &PossibleTypes {
        &self.0.possible_types
    }

    pub fn ptr_eq(&self, other: &UnionType) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Determine which member type `value` is a value of.
    ///
    /// Uses this union's `resolve_type` function if it has one. Otherwise, the
    /// first member (in declaration order) whose `is_type_of` accepts `value`
    /// wins.
    pub fn resolve_type(&self, value: &Value) -> Option<ObjectType> {
        match &self.0.resolve_type {
            Some(resolve_type) => resolve_type(value),
            None => self.0.possible_types.find_type_of(value),
        }
    }

    pub(crate) fn resolve_type_fn(&self) -> Option<&ResolveTypeFn> {
        self.0.resolve_type.as_ref()
    }
}

impl std::fmt::Debug for UnionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("UnionType").field(&self.name()).finish()
    }
}

impl std::fmt::Display for UnionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
