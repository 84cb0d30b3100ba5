use crate::schema::SchemaBuildError;
use crate::types::InputField;
use crate::types::InputObjectTypeBuilder;
use crate::types::LazyDefinition;
use crate::types::field_map;
use indexmap::IndexMap;
use std::sync::Arc;

type Result<T> = std::result::Result<T, SchemaBuildError>;
type InputFieldMap = IndexMap<String, InputField>;

/// Represents an
/// [input object type](https://spec.graphql.org/October2021/#sec-Input-Objects).
#[derive(Clone)]
pub struct InputObjectType(pub(super) Arc<InputObjectTypeData>);

pub(super) struct InputObjectTypeData {
    pub(super) description: Option<String>,
    pub(super) fields: LazyDefinition<InputFieldMap, InputFieldMap>,
    pub(super) name: String,
}

impl InputObjectType {
    pub fn builder(name: impl Into<String>) -> InputObjectTypeBuilder {
        InputObjectTypeBuilder::new(name)
    }

    pub fn description(&self) -> Option<&str> {
        self.0.description.as_deref()
    }

    pub fn field(&self, field_name: &str) -> Result<Option<&InputField>> {
        Ok(self.fields()?.get(field_name))
    }

    /// The fields of this input object, keyed by name, in declaration order.
    ///
    /// Fails if any field is not of an input type.
    pub fn fields(&self) -> Result<&IndexMap<String, InputField>> {
        let data = &self.0;
        data.fields.get_or_define(|fields| {
            field_map::define_input_field_map(data.name.as_str(), fields)
        })
    }

    pub fn name(&self) -> &str {
        self.0.name.as_str()
    }

    pub fn ptr_eq(&self, other: &InputObjectType) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl std::fmt::Debug for InputObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("InputObjectType").field(&self.name()).finish()
    }
}

impl std::fmt::Display for InputObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
