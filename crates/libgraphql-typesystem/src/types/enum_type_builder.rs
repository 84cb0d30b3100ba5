use crate::schema::SchemaBuildError;
use crate::types::EnumType;
use crate::types::EnumTypeData;
use crate::types::EnumValue;
use crate::types::LazyDefinition;
use crate::types::Thunk;
use crate::types::names;
use crate::types::thunk;
use indexmap::IndexMap;
use std::sync::Arc;

type Result<T> = std::result::Result<T, SchemaBuildError>;

pub struct EnumTypeBuilder {
    description: Option<String>,
    name: String,
    values: Option<Thunk<IndexMap<String, EnumValue>>>,
}

impl EnumTypeBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            description: None,
            name: name.into(),
            values: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn value(mut self, name: impl Into<String>, value: EnumValue) -> Self {
        thunk::insert_direct_entry(&mut self.values, name.into(), value);
        self
    }

    pub fn values(mut self, values: IndexMap<String, EnumValue>) -> Self {
        self.values = Some(Thunk::Direct(values));
        self
    }

    pub fn values_with(
        mut self,
        producer: impl FnOnce() -> IndexMap<String, EnumValue> + Send + 'static,
    ) -> Self {
        self.values = Some(Thunk::producer(producer));
        self
    }

    /// Construct the enum. Directly-supplied values are validated right away;
    /// values supplied by a producer are validated on first access.
    pub fn build(self) -> Result<EnumType> {
        names::validate_type_name(&self.name)?;
        let Some(values) = self.values else {
            return Err(SchemaBuildError::InvalidEnumValueMap {
                type_name: self.name,
            });
        };
        let is_producer = values.is_producer();

        let enum_type = EnumType(Arc::new(EnumTypeData {
            description: self.description,
            name: self.name,
            values: LazyDefinition::new(values),
        }));
        if !is_producer {
            enum_type.values()?;
        }
        log::trace!("Built enum type `{}`.", enum_type.name());
        Ok(enum_type)
    }
}
