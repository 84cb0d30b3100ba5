use thiserror::Error;

/// The category a [`SchemaBuildError`] falls into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub enum SchemaBuildErrorKind {
    /// A field, input field or argument has a type of the wrong category.
    Classification,

    /// An object type does not correctly implement one of its interfaces.
    Conformance,

    /// A single type definition is malformed.
    Definition,

    /// A root operation type is invalid, missing, or a type name is bound to
    /// more than one type.
    Identity,
}

/// The root operation a [`SchemaBuildError::InvalidRootOperationType`] refers
/// to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub enum RootOperation {
    Mutation,
    Query,
}
impl std::fmt::Display for RootOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Mutation => "mutation",
            Self::Query => "query",
        })
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SchemaBuildError {
    #[error(
        "Schema must contain unique named types but contains multiple types \
        named \"{type_name}\"."
    )]
    DuplicateTypeName {
        type_name: String,
    },

    #[error("Must provide types for Union {type_name}.")]
    EmptyUnionTypes {
        type_name: String,
    },

    #[error(
        "{type_name}.{field_name}({argument_name}:) argument type must be \
        Input Type but got: {argument_type}."
    )]
    InvalidArgumentType {
        argument_name: String,
        argument_type: String,
        field_name: String,
        type_name: String,
    },

    #[error("{type_name} values must be an mapping (dict) with value names as keys.")]
    InvalidEnumValueMap {
        type_name: String,
    },

    #[error(
        "{type_name} fields must be an mapping (dict) with field names as keys \
        or a function which returns such an mapping."
    )]
    InvalidFieldMap {
        type_name: String,
    },

    #[error(
        "{type_name}.{field_name} field type must be Input Type but got: \
        {field_type}"
    )]
    InvalidInputFieldType {
        field_name: String,
        field_type: String,
        type_name: String,
    },

    #[error(
        "{interface_name}.{field_name}({argument_name}:) expects type \
        \"{expected_type}\" but {type_name}.{field_name}({argument_name}:) \
        provides type \"{provided_type}\"."
    )]
    InvalidInterfaceFieldArgumentType {
        argument_name: String,
        expected_type: String,
        field_name: String,
        interface_name: String,
        provided_type: String,
        type_name: String,
    },

    #[error(
        "{interface_name}.{field_name} expects type \"{expected_type}\" but \
        {type_name}.{field_name} provides type \"{provided_type}\"."
    )]
    InvalidInterfaceFieldType {
        expected_type: String,
        field_name: String,
        interface_name: String,
        provided_type: String,
        type_name: String,
    },

    #[error("Names must match /^[_a-zA-Z][_a-zA-Z0-9]*$/ but \"{name}\" does not.")]
    InvalidName {
        name: String,
    },

    #[error(
        "{type_name}.{field_name} field type must be Output Type but got: \
        {field_type}"
    )]
    InvalidOutputFieldType {
        field_name: String,
        field_type: String,
        type_name: String,
    },

    #[error("Schema {operation} must be Object Type but got: {received_type}.")]
    InvalidRootOperationType {
        operation: RootOperation,
        received_type: String,
    },

    #[error(
        "\"{interface_name}\" expects field \"{field_name}\" but \
        \"{type_name}\" does not provide it."
    )]
    MissingInterfaceField {
        field_name: String,
        interface_name: String,
        type_name: String,
    },

    #[error(
        "{interface_name}.{field_name} expects argument \"{argument_name}\" \
        but {type_name}.{field_name} does not provide it."
    )]
    MissingInterfaceFieldArgument {
        argument_name: String,
        field_name: String,
        interface_name: String,
        type_name: String,
    },

    #[error("Type must be named.")]
    MissingTypeName,

    #[error("Can only create NonNull of a Nullable GraphQLType but got: {type_string}.")]
    NestedNonNull {
        type_string: String,
    },

    #[error("Must provide schema definition with query type.")]
    NoQueryOperationTypeDefined,

    #[error(
        "{type_name} must provide both \"parse_value\" and \"parse_literal\" \
        functions."
    )]
    ScalarIncompleteParseFunctions {
        type_name: String,
    },

    #[error(
        "{type_name} must provide \"serialize\" function. If this custom \
        Scalar is also used as an input type, ensure \"parse_value\" and \
        \"parse_literal\" functions are also provided."
    )]
    ScalarMissingSerialize {
        type_name: String,
    },

    #[error(
        "{interface_name}.{field_name} does not define argument \
        \"{argument_name}\" but {type_name}.{field_name} provides it."
    )]
    UnexpectedInterfaceFieldArgument {
        argument_name: String,
        field_name: String,
        interface_name: String,
        type_name: String,
    },

    #[error(
        "Interface Type {interface_name} does not provide a \"resolve_type\" \
        function and implementing Type {type_name} does not provide a \
        \"is_type_of\" function. There is no way to resolve this implementing \
        type during execution."
    )]
    UnresolvableInterfaceImplementor {
        interface_name: String,
        type_name: String,
    },

    #[error(
        "Union Type {union_name} does not provide a \"resolve_type\" function \
        and possible Type {type_name} does not provide a \"is_type_of\" \
        function. There is no way to resolve this possible type during \
        execution."
    )]
    UnresolvableUnionMember {
        type_name: String,
        union_name: String,
    },
}
impl SchemaBuildError {
    pub fn kind(&self) -> SchemaBuildErrorKind {
        match self {
            Self::InvalidArgumentType { .. }
            | Self::InvalidInputFieldType { .. }
            | Self::InvalidOutputFieldType { .. }
                => SchemaBuildErrorKind::Classification,

            Self::InvalidInterfaceFieldArgumentType { .. }
            | Self::InvalidInterfaceFieldType { .. }
            | Self::MissingInterfaceField { .. }
            | Self::MissingInterfaceFieldArgument { .. }
            | Self::UnexpectedInterfaceFieldArgument { .. }
                => SchemaBuildErrorKind::Conformance,

            Self::EmptyUnionTypes { .. }
            | Self::InvalidEnumValueMap { .. }
            | Self::InvalidFieldMap { .. }
            | Self::InvalidName { .. }
            | Self::MissingTypeName
            | Self::NestedNonNull { .. }
            | Self::ScalarIncompleteParseFunctions { .. }
            | Self::ScalarMissingSerialize { .. }
            | Self::UnresolvableInterfaceImplementor { .. }
            | Self::UnresolvableUnionMember { .. }
                => SchemaBuildErrorKind::Definition,

            Self::DuplicateTypeName { .. }
            | Self::InvalidRootOperationType { .. }
            | Self::NoQueryOperationTypeDefined
                => SchemaBuildErrorKind::Identity,
        }
    }
}
