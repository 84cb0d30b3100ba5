use crate::schema::SchemaBuildError;
use crate::types::Field;
use crate::types::InterfaceTypeBuilder;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectOrInterfaceTypeTrait;
use crate::types::ResolveTypeFn;
use indexmap::IndexMap;
use inherent::inherent;
use std::sync::Arc;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Represents an
/// [interface type](https://spec.graphql.org/October2021/#sec-Interfaces).
///
/// An [`InterfaceType`] does not know which object types implement it; that
/// index is built by the [`Schema`](crate::schema::Schema) it belongs to.
#[derive(Clone)]
pub struct InterfaceType(pub(super) Arc<InterfaceTypeData>);

pub(super) struct InterfaceTypeData {
    pub(super) base: ObjectOrInterfaceTypeData,
    pub(super) resolve_type: Option<ResolveTypeFn>,
}

impl InterfaceType {
    pub fn builder(name: impl Into<String>) -> InterfaceTypeBuilder {
        InterfaceTypeBuilder::new(name)
    }

    pub fn has_resolve_type(&self) -> bool {
        self.0.resolve_type.is_some()
    }

    pub fn ptr_eq(&self, other: &InterfaceType) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn resolve_type_fn(&self) -> Option<&ResolveTypeFn> {
        self.0.resolve_type.as_ref()
    }
}

#[inherent]
impl ObjectOrInterfaceTypeTrait for InterfaceType {
    pub fn description(&self) -> Option<&str> {
        self.0.base.description()
    }

    pub fn field(&self, field_name: &str) -> Result<Option<&Field>> {
        self.0.base.field(field_name)
    }

    /// A map from FieldName -> [`Field`] for all fields defined on this
    /// [`InterfaceType`], in declaration order.
    pub fn fields(&self) -> Result<&IndexMap<String, Field>> {
        self.0.base.fields()
    }

    pub fn name(&self) -> &str {
        self.0.base.name()
    }
}

impl std::fmt::Debug for InterfaceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("InterfaceType").field(&self.name()).finish()
    }
}

impl std::fmt::Display for InterfaceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
