mod abstract_type;
mod argument;
pub mod builtin_scalars;
mod enum_type;
mod enum_type_builder;
mod enum_value;
mod field;
mod field_map;
mod graphql_type;
mod graphql_type_kind;
mod input_field;
mod input_object_type;
mod input_object_type_builder;
mod interface_type;
mod interface_type_builder;
mod names;
mod object_or_interface_type_data;
mod object_or_interface_type_trait;
mod object_type;
mod object_type_builder;
mod possible_types;
mod scalar_type;
mod scalar_type_builder;
mod thunk;
mod union_type;
mod union_type_builder;

pub use abstract_type::AbstractType;
pub use abstract_type::ResolveTypeFn;
pub use argument::Argument;
pub use enum_type::EnumType;
use enum_type::EnumTypeData;
pub use enum_type_builder::EnumTypeBuilder;
pub use enum_value::EnumValue;
pub use field::Field;
pub use field::FieldResolver;
pub use graphql_type::GraphQLType;
pub use graphql_type_kind::GraphQLTypeKind;
pub use input_field::InputField;
pub use input_object_type::InputObjectType;
use input_object_type::InputObjectTypeData;
pub use input_object_type_builder::InputObjectTypeBuilder;
pub use interface_type::InterfaceType;
use interface_type::InterfaceTypeData;
pub use interface_type_builder::InterfaceTypeBuilder;
use object_or_interface_type_data::ObjectOrInterfaceTypeData;
use object_or_interface_type_trait::ObjectOrInterfaceTypeTrait;
pub use object_type::IsTypeOfFn;
pub use object_type::ObjectType;
use object_type::ObjectTypeData;
pub use object_type_builder::ObjectTypeBuilder;
pub(crate) use possible_types::PossibleTypes;
pub use scalar_type::ParseLiteralFn;
pub use scalar_type::ParseValueFn;
pub use scalar_type::ScalarType;
use scalar_type::ScalarTypeData;
pub use scalar_type::SerializeFn;
pub use scalar_type_builder::ScalarTypeBuilder;
pub(crate) use thunk::LazyDefinition;
pub use thunk::Thunk;
pub use union_type::UnionType;
use union_type::UnionTypeData;
pub use union_type_builder::UnionTypeBuilder;

#[cfg(test)]
mod tests;
