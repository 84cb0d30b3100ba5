use crate::Value;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::UnionType;
use std::sync::Arc;

/// Determines the concrete [`ObjectType`] of a runtime value. Returning
/// `None` means the value could not be resolved.
pub type ResolveTypeFn = Arc<dyn Fn(&Value) -> Option<ObjectType> + Send + Sync>;

/// A type whose runtime values may be of one of several object types.
///
/// See [`Schema::resolve_type()`](crate::schema::Schema::resolve_type).
#[derive(Clone, Debug)]
pub enum AbstractType {
    Interface(InterfaceType),
    Union(UnionType),
}
impl AbstractType {
    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Interface(iface) => iface.description(),
            Self::Union(union) => union.description(),
        }
    }

    pub fn has_resolve_type(&self) -> bool {
        self.resolve_type_fn().is_some()
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Interface(iface) => iface.name(),
            Self::Union(union) => union.name(),
        }
    }

    pub(crate) fn resolve_type_fn(&self) -> Option<&ResolveTypeFn> {
        match self {
            Self::Interface(iface) => iface.resolve_type_fn(),
            Self::Union(union) => union.resolve_type_fn(),
        }
    }
}
impl std::convert::From<InterfaceType> for AbstractType {
    fn from(value: InterfaceType) -> Self {
        Self::Interface(value)
    }
}
impl std::convert::From<UnionType> for AbstractType {
    fn from(value: UnionType) -> Self {
        Self::Union(value)
    }
}
