use crate::schema::SchemaBuildError;
use crate::types::Field;
use crate::types::LazyDefinition;
use crate::types::ObjectOrInterfaceTypeTrait;
use crate::types::Thunk;
use crate::types::field_map;
use indexmap::IndexMap;
use inherent::inherent;

type FieldMap = IndexMap<String, Field>;

#[derive(Debug)]
pub(super) struct ObjectOrInterfaceTypeData {
    pub(super) description: Option<String>,
    pub(super) fields: LazyDefinition<FieldMap, FieldMap>,
    pub(super) name: String,
}
impl ObjectOrInterfaceTypeData {
    pub(super) fn new(
        name: String,
        description: Option<String>,
        fields: Thunk<FieldMap>,
    ) -> Self {
        Self {
            description,
            fields: LazyDefinition::new(fields),
            name,
        }
    }
}

#[inherent]
impl ObjectOrInterfaceTypeTrait for ObjectOrInterfaceTypeData {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn field(&self, field_name: &str) -> Result<Option<&Field>, SchemaBuildError> {
        Ok(self.fields()?.get(field_name))
    }

    pub fn fields(&self) -> Result<&FieldMap, SchemaBuildError> {
        self.fields.get_or_define(|fields| {
            field_map::define_field_map(self.name.as_str(), fields)
        })
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
