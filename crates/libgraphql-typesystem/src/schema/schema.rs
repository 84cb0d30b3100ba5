use crate::Value;
use crate::schema::SchemaBuilder;
use crate::types::AbstractType;
use crate::types::GraphQLType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::PossibleTypes;
use indexmap::IndexMap;
use std::collections::HashMap;

/// Represents a fully validated and immutable GraphQL schema.
#[derive(Debug)]
pub struct Schema {
    pub(crate) implementations: HashMap<String, PossibleTypes>,
    pub(crate) mutation_type: Option<ObjectType>,
    pub(crate) query_type: ObjectType,
    pub(crate) types: IndexMap<String, GraphQLType>,
}
impl Schema {
    /// Helper function that just delegates to [`SchemaBuilder::new()`].
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    /// Look up a named type reachable from this [`Schema`].
    pub fn get_type(&self, type_name: &str) -> Option<&GraphQLType> {
        self.types.get(type_name)
    }

    /// The object types that declare they implement `interface`, in the order
    /// they were discovered while building this [`Schema`].
    pub fn implementations(&self, interface: &InterfaceType) -> &[ObjectType] {
        self.implementations
            .get(interface.name())
            .map(PossibleTypes::as_slice)
            .unwrap_or_default()
    }

    /// Whether `type_` is a possible runtime type of `abstract_type` (compared
    /// by name).
    pub fn is_possible_type(
        &self,
        abstract_type: &AbstractType,
        type_: &ObjectType,
    ) -> bool {
        self.possible_type_set(abstract_type)
            .is_some_and(|possible_types| possible_types.contains(type_))
    }

    /// Returns this [`Schema`]'s Mutation root operation type (if one was
    /// defined).
    pub fn mutation_type(&self) -> Option<&ObjectType> {
        self.mutation_type.as_ref()
    }

    /// The object types values of `abstract_type` may have at runtime: the
    /// implementations of an interface, or the members of a union.
    pub fn possible_types<'a>(
        &'a self,
        abstract_type: &'a AbstractType,
    ) -> &'a [ObjectType] {
        self.possible_type_set(abstract_type)
            .map(PossibleTypes::as_slice)
            .unwrap_or_default()
    }

    /// Returns this [`Schema`]'s Query root operation type.
    pub fn query_type(&self) -> &ObjectType {
        &self.query_type
    }

    /// Determine the concrete [`ObjectType`] of `value`, a value of
    /// `abstract_type`.
    ///
    /// If `abstract_type` provides a `resolve_type` function, its answer is
    /// final. Otherwise, the first possible type (in order) whose
    /// `is_type_of` accepts `value` is returned. `None` means `value` could
    /// not be resolved.
    pub fn resolve_type(
        &self,
        abstract_type: &AbstractType,
        value: &Value,
    ) -> Option<ObjectType> {
        if let Some(resolve_type) = abstract_type.resolve_type_fn() {
            return resolve_type(value);
        }
        self.possible_type_set(abstract_type)?.find_type_of(value)
    }

    /// A map from TypeName -> [`GraphQLType`] of every named type reachable
    /// from this [`Schema`], in the order the types were discovered.
    pub fn type_map(&self) -> &IndexMap<String, GraphQLType> {
        &self.types
    }

    fn possible_type_set<'a>(
        &'a self,
        abstract_type: &'a AbstractType,
    ) -> Option<&'a PossibleTypes> {
        match abstract_type {
            AbstractType::Interface(iface) => self.implementations.get(iface.name()),
            AbstractType::Union(union) => Some(union.possible_type_set()),
        }
    }
}
