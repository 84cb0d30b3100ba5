//! The type system of a GraphQL schema: declaration of scalar, object,
//! interface, union, enum, input-object, list and non-null types, assembly
//! of those types into a validated [`Schema`](schema::Schema), and the
//! protocol for resolving the concrete object type behind an interface or
//! union value at runtime.
//!
//! ```ignore
//! let query = ObjectType::builder("Query")
//!     .field("hello", Field::new(builtin_scalars::string()))
//!     .build()?;
//! let schema = SchemaBuilder::new().query(query).build()?;
//! ```

pub mod ast;
mod field_error;
pub mod schema;
pub mod types;
mod value;

pub use field_error::FieldError;
pub use value::Value;

#[cfg(test)]
mod test_utils;
