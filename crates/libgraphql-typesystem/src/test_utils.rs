use crate::Value;
use crate::schema::Schema;
use crate::schema::SchemaBuildError;
use crate::types::EnumType;
use crate::types::EnumValue;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InputField;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::UnionType;
use crate::types::builtin_scalars;
use std::sync::Once;
use std::sync::OnceLock;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::WARN;

/// Route `log` records emitted by the crate to the test output. The level is
/// taken from the `LOG_LEVEL` environment variable.
pub(crate) fn setup_logger() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let env_val =
            std::env::var("LOG_LEVEL")
                .map(|s| s.trim().to_string());

        let log_level = match env_val.as_deref() {
            Ok("DEBUG" | "debug") => tracing::Level::DEBUG,
            Ok("INFO" | "info") => tracing::Level::INFO,
            Ok("TRACE" | "trace") => tracing::Level::TRACE,
            Ok("VERBOSE" | "verbose") => tracing::Level::DEBUG,
            _ => DEFAULT_LOG_LEVEL,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

fn shared<T: Clone>(cell: &'static OnceLock<T>, init: impl FnOnce() -> T) -> T {
    cell.get_or_init(init).clone()
}

pub(crate) fn string_field() -> Field {
    Field::new(builtin_scalars::string())
}

pub(crate) fn some_scalar_type() -> ScalarType {
    static TYPE: OnceLock<ScalarType> = OnceLock::new();
    shared(&TYPE, || {
        ScalarType::builder("SomeScalar")
            .serialize(|_| None)
            .parse_value(|_| None)
            .parse_literal(|_| None)
            .build()
            .unwrap()
    })
}

pub(crate) fn some_object_type() -> ObjectType {
    static TYPE: OnceLock<ObjectType> = OnceLock::new();
    shared(&TYPE, || {
        ObjectType::builder("SomeObject")
            .field("f", string_field())
            .build()
            .unwrap()
    })
}

pub(crate) fn object_with_is_type_of() -> ObjectType {
    static TYPE: OnceLock<ObjectType> = OnceLock::new();
    shared(&TYPE, || {
        ObjectType::builder("ObjectWithIsTypeOf")
            .field("f", string_field())
            .is_type_of(|_| true)
            .build()
            .unwrap()
    })
}

pub(crate) fn some_union_type() -> UnionType {
    static TYPE: OnceLock<UnionType> = OnceLock::new();
    shared(&TYPE, || {
        UnionType::builder("SomeUnion")
            .resolve_type(|_| None)
            .member(some_object_type())
            .build()
            .unwrap()
    })
}

pub(crate) fn some_interface_type() -> InterfaceType {
    static TYPE: OnceLock<InterfaceType> = OnceLock::new();
    shared(&TYPE, || {
        InterfaceType::builder("SomeInterface")
            .field("f", string_field())
            .resolve_type(|_| None)
            .build()
            .unwrap()
    })
}

pub(crate) fn some_enum_type() -> EnumType {
    static TYPE: OnceLock<EnumType> = OnceLock::new();
    shared(&TYPE, || {
        EnumType::builder("SomeEnum")
            .value("ONLY", EnumValue::new())
            .build()
            .unwrap()
    })
}

pub(crate) fn some_input_object_type() -> InputObjectType {
    static TYPE: OnceLock<InputObjectType> = OnceLock::new();
    shared(&TYPE, || {
        InputObjectType::builder("SomeInputObject")
            .field(
                "val",
                InputField::new(builtin_scalars::string())
                    .with_default_value(Value::from("hello")),
            )
            .build()
            .unwrap()
    })
}

/// Each of `types`, plus each wrapped in a list, a non-null, and a non-null
/// list.
pub(crate) fn with_modifiers(types: Vec<GraphQLType>) -> Vec<GraphQLType> {
    let mut modified = types.clone();
    modified.extend(types.iter().map(GraphQLType::list));
    modified.extend(types.iter().map(|t| GraphQLType::non_null(t).unwrap()));
    modified.extend(
        types.iter().map(|t| GraphQLType::non_null(GraphQLType::list(t)).unwrap()),
    );
    modified
}

pub(crate) fn output_types() -> Vec<GraphQLType> {
    with_modifiers(vec![
        builtin_scalars::string().into(),
        some_scalar_type().into(),
        some_enum_type().into(),
        some_object_type().into(),
        some_union_type().into(),
        some_interface_type().into(),
    ])
}

pub(crate) fn not_output_types() -> Vec<GraphQLType> {
    with_modifiers(vec![some_input_object_type().into()])
}

pub(crate) fn input_types() -> Vec<GraphQLType> {
    with_modifiers(vec![
        builtin_scalars::string().into(),
        some_scalar_type().into(),
        some_enum_type().into(),
        some_input_object_type().into(),
    ])
}

pub(crate) fn not_input_types() -> Vec<GraphQLType> {
    with_modifiers(vec![
        some_object_type().into(),
        some_union_type().into(),
        some_interface_type().into(),
    ])
}

/// A schema whose query type has a single field `f` of type `type_`.
pub(crate) fn schema_with_field_type(
    type_: impl Into<GraphQLType>,
) -> Result<Schema, SchemaBuildError> {
    let query = ObjectType::builder("Query")
        .field("f", Field::new(type_))
        .build()?;
    Schema::builder().query(query).build()
}
