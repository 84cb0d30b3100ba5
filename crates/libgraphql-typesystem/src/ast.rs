//! Aliases for the literal AST nodes handed to
//! [`ScalarType::parse_literal()`](crate::types::ScalarType::parse_literal)
//! and [`EnumType::parse_literal()`](crate::types::EnumType::parse_literal).
//!
//! Parsing documents is the job of `graphql_parser`; this crate only consumes
//! the resulting literal values.

pub type Number = graphql_parser::query::Number;
pub type Value = graphql_parser::query::Value<'static, String>;
