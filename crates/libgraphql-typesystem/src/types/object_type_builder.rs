use crate::Value;
use crate::schema::SchemaBuildError;
use crate::types::Field;
use crate::types::InterfaceType;
use crate::types::LazyDefinition;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectType;
use crate::types::ObjectTypeData;
use crate::types::Thunk;
use crate::types::IsTypeOfFn;
use crate::types::names;
use crate::types::thunk;
use indexmap::IndexMap;
use std::sync::Arc;

type Result<T> = std::result::Result<T, SchemaBuildError>;

pub struct ObjectTypeBuilder {
    description: Option<String>,
    fields: Option<Thunk<IndexMap<String, Field>>>,
    interfaces: Thunk<Vec<InterfaceType>>,
    is_type_of: Option<IsTypeOfFn>,
    name: String,
}

impl ObjectTypeBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            description: None,
            fields: None,
            interfaces: Thunk::Direct(vec![]),
            is_type_of: None,
            name: name.into(),
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

    /// Provide the fields through a producer that runs the first time the
    /// fields are needed. This allows fields to refer to types which are
    /// constructed after this one.
    pub fn fields_with(
        mut self,
        producer: impl FnOnce() -> IndexMap<String, Field> + Send + 'static,
    ) -> Self {
        self.fields = Some(Thunk::producer(producer));
        self
    }

    pub fn interfaces(mut self, interfaces: Vec<InterfaceType>) -> Self {
        self.interfaces = Thunk::Direct(interfaces);
        self
    }

    pub fn interfaces_with(
        mut self,
        producer: impl FnOnce() -> Vec<InterfaceType> + Send + 'static,
    ) -> Self {
        self.interfaces = Thunk::producer(producer);
        self
    }

    pub fn is_type_of(
        mut self,
        is_type_of: impl Fn(&Value) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.is_type_of = Some(Arc::new(is_type_of));
        self
    }

    /// Validate the name of this type and construct it.
    ///
    /// A directly supplied interface list is checked here. Fields, and
    /// interfaces supplied by a producer, are validated lazily when they are
    /// first accessed (at the latest when a schema containing this type is
    /// built).
    pub fn build(self) -> Result<ObjectType> {
        names::validate_type_name(&self.name)?;
        let Some(fields) = self.fields else {
            return Err(SchemaBuildError::InvalidFieldMap {
                type_name: self.name,
            });
        };
        let interfaces_are_produced = self.interfaces.is_producer();

        let obj_type = ObjectType(Arc::new(ObjectTypeData {
            base: ObjectOrInterfaceTypeData::new(
                self.name,
                self.description,
                fields,
            ),
            interfaces: LazyDefinition::new(self.interfaces),
            is_type_of: self.is_type_of,
        }));
        if !interfaces_are_produced {
            obj_type.interfaces()?;
        }
        log::trace!("Built object type `{}`.", obj_type.name());
        Ok(obj_type)
    }
}
