use crate::Value;
use crate::ast;
use crate::schema::SchemaBuildError;
use crate::types::ParseLiteralFn;
use crate::types::ParseValueFn;
use crate::types::ScalarType;
use crate::types::ScalarTypeData;
use crate::types::SerializeFn;
use crate::types::names;
use std::sync::Arc;

type Result<T> = std::result::Result<T, SchemaBuildError>;

pub struct ScalarTypeBuilder {
    description: Option<String>,
    name: String,
    parse_literal: Option<ParseLiteralFn>,
    parse_value: Option<ParseValueFn>,
    serialize: Option<SerializeFn>,
}

impl ScalarTypeBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            description: None,
            name: name.into(),
            parse_literal: None,
            parse_value: None,
            serialize: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn parse_literal(
        mut self,
        parse_literal: impl Fn(&ast::Value) -> Option<Value> + Send + Sync + 'static,
    ) -> Self {
        self.parse_literal = Some(Arc::new(parse_literal));
        self
    }

    pub fn parse_value(
        mut self,
        parse_value: impl Fn(&Value) -> Option<Value> + Send + Sync + 'static,
    ) -> Self {
        self.parse_value = Some(Arc::new(parse_value));
        self
    }

    pub fn serialize(
        mut self,
        serialize: impl Fn(&Value) -> Option<Value> + Send + Sync + 'static,
    ) -> Self {
        self.serialize = Some(Arc::new(serialize));
        self
    }

    pub fn build(self) -> Result<ScalarType> {
        names::validate_type_name(&self.name)?;
        let Some(serialize) = self.serialize else {
            return Err(SchemaBuildError::ScalarMissingSerialize {
                type_name: self.name,
            });
        };
        if self.parse_value.is_some() != self.parse_literal.is_some() {
            return Err(SchemaBuildError::ScalarIncompleteParseFunctions {
                type_name: self.name,
            });
        }
        log::trace!("Built scalar type `{}`.", self.name);

        Ok(ScalarType(Arc::new(ScalarTypeData {
            description: self.description,
            name: self.name,
            parse_literal: self.parse_literal,
            parse_value: self.parse_value,
            serialize,
        })))
    }
}
