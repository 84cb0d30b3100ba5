use crate::schema::RootOperation;
use crate::schema::Schema;
use crate::schema::SchemaBuildError;
use crate::schema::TypesMapBuilder;
use crate::types::GraphQLType;
use crate::types::ObjectType;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Utility for building a [`Schema`] from its root operation types.
///
/// Every named type reachable from the root types (through fields,
/// arguments, input fields, interfaces and union members) becomes part of the
/// [`Schema`]. Types that are not reachable that way (e.g. an object type that
/// only shows up as an implementation of an interface) can be registered
/// explicitly with [`SchemaBuilder::add_type()`].
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    additional_types: Vec<GraphQLType>,
    mutation_type: Option<GraphQLType>,
    query_type: Option<GraphQLType>,
}
impl SchemaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_type(mut self, type_: impl Into<GraphQLType>) -> Self {
        self.additional_types.push(type_.into());
        self
    }

    pub fn mutation(mut self, mutation_type: impl Into<GraphQLType>) -> Self {
        self.mutation_type = Some(mutation_type.into());
        self
    }

    pub fn query(mut self, query_type: impl Into<GraphQLType>) -> Self {
        self.query_type = Some(query_type.into());
        self
    }

    /// Assemble and validate the [`Schema`].
    ///
    /// Validation stops at the first problem found; no partially-built
    /// [`Schema`] is ever returned.
    pub fn build(self) -> Result<Schema> {
        log::debug!("Building schema...");
        let Some(query_type) = self.query_type else {
            return Err(SchemaBuildError::NoQueryOperationTypeDefined);
        };
        let query_type = Self::root_operation_type(RootOperation::Query, query_type)?;
        let mutation_type = self.mutation_type
            .map(|mutation_type| {
                Self::root_operation_type(RootOperation::Mutation, mutation_type)
            })
            .transpose()?;

        let mut types_map_builder = TypesMapBuilder::new();
        types_map_builder.visit(&GraphQLType::Object(query_type.clone()))?;
        if let Some(mutation_type) = &mutation_type {
            types_map_builder.visit(&GraphQLType::Object(mutation_type.clone()))?;
        }
        for type_ in &self.additional_types {
            types_map_builder.visit(type_)?;
        }
        let (types, implementations) = types_map_builder.into_types_map()?;

        log::debug!("Built schema with {} named type(s).", types.len());
        Ok(Schema {
            implementations,
            mutation_type,
            query_type,
            types,
        })
    }

    fn root_operation_type(
        operation: RootOperation,
        type_: GraphQLType,
    ) -> Result<ObjectType> {
        match type_ {
            GraphQLType::Object(obj_type) => Ok(obj_type),
            _ => Err(SchemaBuildError::InvalidRootOperationType {
                operation,
                received_type: type_.to_string(),
            }),
        }
    }
}
