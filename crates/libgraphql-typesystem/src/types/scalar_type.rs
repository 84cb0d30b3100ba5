use crate::Value;
use crate::ast;
use crate::types::ScalarTypeBuilder;
use std::sync::Arc;

/// Coerces an internal value into its serialized output form.
pub type SerializeFn = Arc<dyn Fn(&Value) -> Option<Value> + Send + Sync>;

/// Coerces an externally-provided input value (e.g. a variable) into its
/// internal form.
pub type ParseValueFn = Arc<dyn Fn(&Value) -> Option<Value> + Send + Sync>;

/// Coerces a literal from a parsed document into its internal form.
pub type ParseLiteralFn = Arc<dyn Fn(&ast::Value) -> Option<Value> + Send + Sync>;

/// Represents a
/// [scalar type](https://spec.graphql.org/October2021/#sec-Scalars).
///
/// Every scalar can be serialized. Only scalars that provide both
/// `parse_value` and `parse_literal` can be parsed from input.
#[derive(Clone)]
pub struct ScalarType(pub(super) Arc<ScalarTypeData>);

pub(super) struct ScalarTypeData {
    pub(super) description: Option<String>,
    pub(super) name: String,
    pub(super) parse_literal: Option<ParseLiteralFn>,
    pub(super) parse_value: Option<ParseValueFn>,
    pub(super) serialize: SerializeFn,
}

impl ScalarType {
    pub fn builder(name: impl Into<String>) -> ScalarTypeBuilder {
        ScalarTypeBuilder::new(name)
    }

    pub fn description(&self) -> Option<&str> {
        self.0.description.as_deref()
    }

    pub fn is_parseable(&self) -> bool {
        self.0.parse_value.is_some()
    }

    pub fn name(&self) -> &str {
        self.0.name.as_str()
    }

    /// `None` if the literal is invalid for this scalar, or if this scalar is
    /// output-only.
    pub fn parse_literal(&self, literal: &ast::Value) -> Option<Value> {
        self.0.parse_literal
            .as_ref()
            .and_then(|parse_literal| parse_literal(literal))
    }

    /// `None` if the value is invalid for this scalar, or if this scalar is
    /// output-only.
    pub fn parse_value(&self, value: &Value) -> Option<Value> {
        self.0.parse_value
            .as_ref()
            .and_then(|parse_value| parse_value(value))
    }

    pub fn ptr_eq(&self, other: &ScalarType) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    pub fn serialize(&self, value: &Value) -> Option<Value> {
        (self.0.serialize)(value)
    }
}

impl std::fmt::Debug for ScalarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ScalarType").field(&self.name()).finish()
    }
}

impl std::fmt::Display for ScalarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
