use crate::schema::SchemaBuildError;
use crate::types::InputField;
use crate::types::InputObjectType;
use crate::types::InputObjectTypeData;
use crate::types::LazyDefinition;
use crate::types::Thunk;
use crate::types::names;
use crate::types::thunk;
use indexmap::IndexMap;
use std::sync::Arc;

type Result<T> = std::result::Result<T, SchemaBuildError>;

pub struct InputObjectTypeBuilder {
    description: Option<String>,
    fields: Option<Thunk<IndexMap<String, InputField>>>,
    name: String,
}

impl InputObjectTypeBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            description: None,
            fields: None,
            name: name.into(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn field(mut self, name: impl Into<String>, field: InputField) -> Self {
        thunk::insert_direct_entry(&mut self.fields, name.into(), field);
        self
    }

    pub fn fields(mut self, fields: IndexMap<String, InputField>) -> Self {
        self.fields = Some(Thunk::Direct(fields));
        self
    }

    pub fn fields_with(
        mut self,
        producer: impl FnOnce() -> IndexMap<String, InputField> + Send + 'static,
    ) -> Self {
        self.fields = Some(Thunk::producer(producer));
        self
    }

    pub fn build(self) -> Result<InputObjectType> {
        names::validate_type_name(&self.name)?;
        let Some(fields) = self.fields else {
            return Err(SchemaBuildError::InvalidFieldMap {
                type_name: self.name,
            });
        };
        log::trace!("Built input object type `{}`.", self.name);

        Ok(InputObjectType(Arc::new(InputObjectTypeData {
            description: self.description,
            fields: LazyDefinition::new(fields),
            name: self.name,
        })))
    }
}
