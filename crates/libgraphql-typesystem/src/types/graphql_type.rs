use crate::schema::SchemaBuildError;
use crate::types::AbstractType;
use crate::types::EnumType;
use crate::types::GraphQLTypeKind;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::UnionType;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Represents a GraphQL type: one of the six named type kinds, or a
/// [list](GraphQLType::List) / [non-null](GraphQLType::NonNull) wrapper
/// around another type.
///
/// Named variants hold cheap, shareable handles. Two handles may describe
/// structurally identical types while still being distinct instances; see
/// [`GraphQLType::is_same_type()`] and [`GraphQLType::ptr_eq()`].
#[derive(Clone)]
pub enum GraphQLType {
    Enum(EnumType),
    InputObject(InputObjectType),
    Interface(InterfaceType),
    List(Box<GraphQLType>),
    NonNull(Box<GraphQLType>),
    Object(ObjectType),
    Scalar(ScalarType),
    Union(UnionType),
}
impl GraphQLType {
    pub fn list(of_type: impl Into<GraphQLType>) -> Self {
        Self::List(Box::new(of_type.into()))
    }

    /// Wrap `of_type` in a non-null modifier.
    ///
    /// Fails if `of_type` is itself non-null.
    pub fn non_null(of_type: impl Into<GraphQLType>) -> Result<Self> {
        let of_type = of_type.into();
        if let Self::NonNull(_) = of_type {
            return Err(SchemaBuildError::NestedNonNull {
                type_string: of_type.to_string(),
            });
        }
        Ok(Self::NonNull(Box::new(of_type)))
    }

    pub fn as_abstract(&self) -> Option<AbstractType> {
        match self {
            Self::Interface(iface) => Some(AbstractType::Interface(iface.clone())),
            Self::Union(union) => Some(AbstractType::Union(union.clone())),
            _ => None,
        }
    }

    pub fn as_enum(&self) -> Option<&EnumType> {
        if let Self::Enum(type_) = self { Some(type_) } else { None }
    }

    pub fn as_input_object(&self) -> Option<&InputObjectType> {
        if let Self::InputObject(type_) = self { Some(type_) } else { None }
    }

    pub fn as_interface(&self) -> Option<&InterfaceType> {
        if let Self::Interface(type_) = self { Some(type_) } else { None }
    }

    pub fn as_object(&self) -> Option<&ObjectType> {
        if let Self::Object(type_) = self { Some(type_) } else { None }
    }

    pub fn as_scalar(&self) -> Option<&ScalarType> {
        if let Self::Scalar(type_) = self { Some(type_) } else { None }
    }

    pub fn as_union(&self) -> Option<&UnionType> {
        if let Self::Union(type_) = self { Some(type_) } else { None }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Enum(type_) => type_.description(),
            Self::InputObject(type_) => type_.description(),
            Self::Interface(type_) => type_.description(),
            Self::List(_) | Self::NonNull(_) => None,
            Self::Object(type_) => type_.description(),
            Self::Scalar(type_) => type_.description(),
            Self::Union(type_) => type_.description(),
        }
    }

    /// Abstract types are [interfaces](GraphQLType::Interface) and
    /// [unions](GraphQLType::Union), or lists and non-nulls of them.
    pub fn is_abstract_type(&self) -> bool {
        matches!(self.named_type(), Self::Interface(_) | Self::Union(_))
    }

    /// Composite types are [objects](GraphQLType::Object),
    /// [interfaces](GraphQLType::Interface) and [unions](GraphQLType::Union),
    /// or lists and non-nulls of them.
    pub fn is_composite_type(&self) -> bool {
        matches!(
            self.named_type(),
            Self::Interface(_) | Self::Object(_) | Self::Union(_),
        )
    }

    /// Whether this type may be used for arguments and input-object fields.
    pub fn is_input_type(&self) -> bool {
        match self.named_type() {
            Self::Enum(_) | Self::InputObject(_) | Self::Scalar(_) => true,

            Self::Interface(_) | Self::Object(_) | Self::Union(_) => false,

            Self::List(_) | Self::NonNull(_) =>
                unreachable!("named_type() never returns a wrapping type"),
        }
    }

    /// Leaf types are [scalars](GraphQLType::Scalar) and
    /// [enums](GraphQLType::Enum), or lists and non-nulls of them.
    pub fn is_leaf_type(&self) -> bool {
        matches!(self.named_type(), Self::Enum(_) | Self::Scalar(_))
    }

    /// Whether this type may be used for fields of objects and interfaces.
    pub fn is_output_type(&self) -> bool {
        match self.named_type() {
            Self::Enum(_)
            | Self::Interface(_)
            | Self::Object(_)
            | Self::Scalar(_)
            | Self::Union(_) => true,

            Self::InputObject(_) => false,

            Self::List(_) | Self::NonNull(_) =>
                unreachable!("named_type() never returns a wrapping type"),
        }
    }

    /// Structural equality: same kind, same name (for named types), and
    /// structurally equal wrapped types (for lists and non-nulls).
    ///
    /// This is the equality interface conformance is checked with.
    pub fn is_same_type(&self, other: &GraphQLType) -> bool {
        match (self, other) {
            (Self::List(a), Self::List(b))
            | (Self::NonNull(a), Self::NonNull(b)) => a.is_same_type(b),

            (Self::List(_) | Self::NonNull(_), _)
            | (_, Self::List(_) | Self::NonNull(_)) => false,

            _ => self.kind() == other.kind() && self.name() == other.name(),
        }
    }

    pub fn kind(&self) -> GraphQLTypeKind {
        self.into()
    }

    /// The name of this type, or `None` for list and non-null wrappers.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Enum(type_) => Some(type_.name()),
            Self::InputObject(type_) => Some(type_.name()),
            Self::Interface(type_) => Some(type_.name()),
            Self::List(_) | Self::NonNull(_) => None,
            Self::Object(type_) => Some(type_.name()),
            Self::Scalar(type_) => Some(type_.name()),
            Self::Union(type_) => Some(type_.name()),
        }
    }

    /// This type with every list and non-null wrapper stripped off.
    pub fn named_type(&self) -> &GraphQLType {
        match self {
            Self::List(of_type) | Self::NonNull(of_type) => of_type.named_type(),
            _ => self,
        }
    }

    /// This type with a single outer non-null wrapper (if any) stripped off.
    pub fn nullable_type(&self) -> &GraphQLType {
        match self {
            Self::NonNull(of_type) => of_type,
            _ => self,
        }
    }

    /// The type wrapped by a list or non-null modifier.
    pub fn of_type(&self) -> Option<&GraphQLType> {
        match self {
            Self::List(of_type) | Self::NonNull(of_type) => Some(of_type),
            _ => None,
        }
    }

    /// Identity comparison: whether both types refer to the very same named
    /// type instances (under the same wrappers).
    pub fn ptr_eq(&self, other: &GraphQLType) -> bool {
        match (self, other) {
            (Self::Enum(a), Self::Enum(b)) => a.ptr_eq(b),
            (Self::InputObject(a), Self::InputObject(b)) => a.ptr_eq(b),
            (Self::Interface(a), Self::Interface(b)) => a.ptr_eq(b),
            (Self::List(a), Self::List(b)) => a.ptr_eq(b),
            (Self::NonNull(a), Self::NonNull(b)) => a.ptr_eq(b),
            (Self::Object(a), Self::Object(b)) => a.ptr_eq(b),
            (Self::Scalar(a), Self::Scalar(b)) => a.ptr_eq(b),
            (Self::Union(a), Self::Union(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}
impl std::fmt::Debug for GraphQLType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Named types may be recursive, so only ever print names.
        write!(f, "GraphQLType::{}({self})", self.kind().name())
    }
}
impl std::fmt::Display for GraphQLType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Enum(type_) => f.write_str(type_.name()),
            Self::InputObject(type_) => f.write_str(type_.name()),
            Self::Interface(type_) => f.write_str(type_.name()),
            Self::List(of_type) => write!(f, "[{of_type}]"),
            Self::NonNull(of_type) => write!(f, "{of_type}!"),
            Self::Object(type_) => f.write_str(type_.name()),
            Self::Scalar(type_) => f.write_str(type_.name()),
            Self::Union(type_) => f.write_str(type_.name()),
        }
    }
}
impl std::convert::From<EnumType> for GraphQLType {
    fn from(value: EnumType) -> Self {
        Self::Enum(value)
    }
}
impl std::convert::From<InputObjectType> for GraphQLType {
    fn from(value: InputObjectType) -> Self {
        Self::InputObject(value)
    }
}
impl std::convert::From<InterfaceType> for GraphQLType {
    fn from(value: InterfaceType) -> Self {
        Self::Interface(value)
    }
}
impl std::convert::From<ObjectType> for GraphQLType {
    fn from(value: ObjectType) -> Self {
        Self::Object(value)
    }
}
impl std::convert::From<ScalarType> for GraphQLType {
    fn from(value: ScalarType) -> Self {
        Self::Scalar(value)
    }
}
impl std::convert::From<UnionType> for GraphQLType {
    fn from(value: UnionType) -> Self {
        Self::Union(value)
    }
}
impl std::convert::From<AbstractType> for GraphQLType {
    fn from(value: AbstractType) -> Self {
        match value {
            AbstractType::Interface(iface) => Self::Interface(iface),
            AbstractType::Union(union) => Self::Union(union),
        }
    }
}
impl std::convert::From<&GraphQLType> for GraphQLType {
    fn from(value: &GraphQLType) -> Self {
        value.clone()
    }
}
