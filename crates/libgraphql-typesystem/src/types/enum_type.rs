use crate::Value;
use crate::ast;
use crate::schema::SchemaBuildError;
use crate::types::EnumTypeBuilder;
use crate::types::EnumValue;
use crate::types::LazyDefinition;
use crate::types::field_map;
use indexmap::IndexMap;
use std::sync::Arc;

type Result<T> = std::result::Result<T, SchemaBuildError>;
type EnumValueMap = IndexMap<String, EnumValue>;

/// Represents an
/// [enum type](https://spec.graphql.org/October2021/#sec-Enums).
///
/// Each [`EnumValue`] maps a public name to an internal [`Value`]. Resolvers
/// produce internal values; [`EnumType::serialize()`] turns them into names and
/// [`EnumType::parse_value()`] / [`EnumType::parse_literal()`] turn names back
/// into internal values.
#[derive(Clone)]
pub struct EnumType(pub(super) Arc<EnumTypeData>);

pub(super) struct EnumTypeData {
    pub(super) description: Option<String>,
    pub(super) name: String,
    pub(super) values: LazyDefinition<EnumValueMap, EnumValueMap>,
}

impl EnumType {
    pub fn builder(name: impl Into<String>) -> EnumTypeBuilder {
        EnumTypeBuilder::new(name)
    }

    pub fn description(&self) -> Option<&str> {
        self.0.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.0.name.as_str()
    }

    /// Coerce an external name (given as a string or enum value) into the
    /// corresponding internal value.
    pub fn parse_value(&self, value: &Value) -> Option<Value> {
        match value {
            Value::Enum(name) | Value::String(name) => self.internal_value_of(name),
            _ => None,
        }
    }

    /// Coerce an enum literal from a parsed document into the corresponding
    /// internal value.
    pub fn parse_literal(&self, literal: &ast::Value) -> Option<Value> {
        match literal {
            ast::Value::Enum(name) => self.internal_value_of(name),
            _ => None,
        }
    }

    pub fn ptr_eq(&self, other: &EnumType) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Coerce an internal value into the name of the [`EnumValue`] it belongs
    /// to.
    pub fn serialize(&self, value: &Value) -> Option<Value> {
        self.values()
            .ok()?
            .values()
            .find(|enum_value| enum_value.value() == Some(value))
            .map(|enum_value| Value::String(enum_value.name().to_string()))
    }

    /// Look up a single [`EnumValue`] by name.
    pub fn value(&self, name: &str) -> Result<Option<&EnumValue>> {
        Ok(self.values()?.get(name))
    }

    /// The values of this enum, keyed by name, in declaration order.
    pub fn values(&self) -> Result<&IndexMap<String, EnumValue>> {
        let data = &self.0;
        data.values.get_or_define(|values| {
            field_map::define_enum_value_map(data.name.as_str(), values)
        })
    }

    fn internal_value_of(&self, name: &str) -> Option<Value> {
        self.values()
            .ok()?
            .get(name)
            .and_then(|enum_value| enum_value.value().cloned())
    }
}

impl std::fmt::Debug for EnumType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("EnumType").field(&self.name()).finish()
    }
}

impl std::fmt::Display for EnumType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
