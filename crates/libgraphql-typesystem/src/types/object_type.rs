use crate::Value;
use crate::schema::SchemaBuildError;
use crate::types::Field;
use crate::types::InterfaceType;
use crate::types::LazyDefinition;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectOrInterfaceTypeTrait;
use crate::types::ObjectTypeBuilder;
use indexmap::IndexMap;
use inherent::inherent;
use std::sync::Arc;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Decides whether a runtime value is a value of a given [`ObjectType`].
pub type IsTypeOfFn = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

/// Represents an
/// [object type](https://spec.graphql.org/October2021/#sec-Objects).
///
/// [`ObjectType`] is a cheap handle: clones refer to the same underlying type
/// definition (see [`ObjectType::ptr_eq()`]).
#[derive(Clone)]
pub struct ObjectType(pub(super) Arc<ObjectTypeData>);

pub(super) struct ObjectTypeData {
    pub(super) base: ObjectOrInterfaceTypeData,
    pub(super) interfaces: LazyDefinition<Vec<InterfaceType>, Vec<InterfaceType>>,
    pub(super) is_type_of: Option<IsTypeOfFn>,
}

impl ObjectType {
    pub fn builder(name: impl Into<String>) -> ObjectTypeBuilder {
        ObjectTypeBuilder::new(name)
    }

    pub fn has_is_type_of(&self) -> bool {
        self.0.is_type_of.is_some()
    }

    /// Whether this type declares that it implements `interface` (compared
    /// by name).
    pub fn implements_interface(&self, interface: &InterfaceType) -> Result<bool> {
        Ok(self.interfaces()?
            .iter()
            .any(|iface| iface.name() == interface.name()))
    }

    /// The interfaces this type implements, in declaration order.
    ///
    /// If the interfaces were provided by a producer function, the producer is
    /// invoked on first access. Fails if any interface cannot be resolved to
    /// this type during execution: i.e. the interface has no `resolve_type`
    /// and this type has no `is_type_of`.
    pub fn interfaces(&self) -> Result<&[InterfaceType]> {
        let data = &self.0;
        data.interfaces
            .get_or_define(|interfaces| {
                log::trace!(
                    "Defining {} interface(s) of `{}`.",
                    interfaces.len(),
                    data.base.name(),
                );
                for iface in &interfaces {
                    if !iface.has_resolve_type() && data.is_type_of.is_none() {
                        return Err(SchemaBuildError::UnresolvableInterfaceImplementor {
                            interface_name: iface.name().to_string(),
                            type_name: data.base.name().to_string(),
                        });
                    }
                }
                Ok(interfaces)
            })
            .map(Vec::as_slice)
    }

    /// Whether `value` is a value of this type according to its `is_type_of`
    /// function. Always `false` for types without one.
    pub fn is_type_of(&self, value: &Value) -> bool {
        self.0.is_type_of
            .as_ref()
            .is_some_and(|is_type_of| is_type_of(value))
    }

    /// Whether both handles refer to the same type instance.
    pub fn ptr_eq(&self, other: &ObjectType) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

#[inherent]
impl ObjectOrInterfaceTypeTrait for ObjectType {
    /// The description of this [`ObjectType`], if one was provided.
    pub fn description(&self) -> Option<&str> {
        self.0.base.description()
    }

    /// Look up a single [`Field`] by name.
    pub fn field(&self, field_name: &str) -> Result<Option<&Field>> {
        self.0.base.field(field_name)
    }

    /// A map from FieldName -> [`Field`] for all fields defined on this
    /// [`ObjectType`].
    ///
    /// This returns an [`IndexMap`] to guarantee that map entries retain the
    /// order in which fields were declared. If the fields were provided by a
    /// producer function, the producer is invoked (exactly once) on first
    /// access and its validated result is memoized.
    pub fn fields(&self) -> Result<&IndexMap<String, Field>> {
        self.0.base.fields()
    }

    /// The name of this [`ObjectType`].
    pub fn name(&self) -> &str {
        self.0.base.name()
    }
}

impl std::fmt::Debug for ObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ObjectType").field(&self.name()).finish()
    }
}

impl std::fmt::Display for ObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
