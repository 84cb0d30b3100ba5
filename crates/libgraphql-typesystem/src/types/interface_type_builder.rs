use crate::Value;
use crate::schema::SchemaBuildError;
use crate::types::Field;
use crate::types::InterfaceType;
use crate::types::InterfaceTypeData;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectType;
use crate::types::ResolveTypeFn;
use crate::types::Thunk;
use crate::types::names;
use crate::types::thunk;
use indexmap::IndexMap;
use std::sync::Arc;

type Result<T> = std::result::Result<T, SchemaBuildError>;

pub struct InterfaceTypeBuilder {
    description: Option<String>,
    fields: Option<Thunk<IndexMap<String, Field>>>,
    name: String,
    resolve_type: Option<ResolveTypeFn>,
}

impl InterfaceTypeBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            description: None,
            fields: None,
            name: name.into(),
            resolve_type: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn field(mut self, name: impl Into<String>, field: Field) -> Self {
        thunk::insert_direct_entry(&mut self.fields, name.into(), field);
        self
    }

    pub fn fields(mut self, fields: IndexMap<String, Field>) -> Self {
        self.fields = Some(Thunk::Direct(fields));
        self
    }

    pub fn fields_with(
        mut self,
        producer: impl FnOnce() -> IndexMap<String, Field> + Send + 'static,
    ) -> Self {
        self.fields = Some(Thunk::producer(producer));
        self
    }

    /// Without a `resolve_type` function, every implementing object type
    /// must provide an `is_type_of` function.
    pub fn resolve_type(
        mut self,
        resolve_type: impl Fn(&Value) -> Option<ObjectType> + Send + Sync + 'static,
    ) -> Self {
        self.resolve_type = Some(Arc::new(resolve_type));
        self
    }

    pub fn build(self) -> Result<InterfaceType> {
        names::validate_type_name(&self.name)?;
        let Some(fields) = self.fields else {
            return Err(SchemaBuildError::InvalidFieldMap {
                type_name: self.name,
            });
        };
        log::trace!("Built interface type `{}`.", self.name);

        Ok(InterfaceType(Arc::new(InterfaceTypeData {
            base: ObjectOrInterfaceTypeData::new(
                self.name,
                self.description,
                fields,
            ),
            resolve_type: self.resolve_type,
        })))
    }
}
