mod interface_implementation_validator;
#[allow(clippy::module_inception)]
mod schema;
mod schema_build_error;
mod schema_builder;
mod types_map_builder;

use interface_implementation_validator::InterfaceImplementationValidator;
pub use schema::Schema;
pub use schema_build_error::RootOperation;
pub use schema_build_error::SchemaBuildError;
pub use schema_build_error::SchemaBuildErrorKind;
pub use schema_builder::SchemaBuilder;
use types_map_builder::TypesMapBuilder;

#[cfg(test)]
mod tests;
