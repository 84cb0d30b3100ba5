use crate::FieldError;
use crate::Value;
use crate::schema::Schema;
use crate::schema::SchemaBuildError;
use crate::test_utils;
use crate::types::Argument;
use crate::types::Field;
use crate::types::ObjectType;
use crate::types::builtin_scalars;
use indexmap::IndexMap;
use libgraphql_deferred::MaybeDeferred;
use libgraphql_deferred::ResolverReturn;
use libgraphql_deferred::TokioExecutionMiddleware;

type Result<T> = std::result::Result<T, SchemaBuildError>;

fn greeting_schema() -> Result<Schema> {
    let query = ObjectType::builder("Query")
        .field(
            "hello",
            Field::new(builtin_scalars::string())
                .with_argument("name", Argument::new(builtin_scalars::string()))
                .with_resolver(|_source, args| {
                    let name = args.get("name").and_then(Value::as_str).unwrap_or("world");
                    ResolverReturn::Ready(Value::String(format!("Hello, {name}!")))
                }),
        )
        .field(
            "later",
            Field::new(builtin_scalars::string()).with_resolver(|_source, _args| {
                ResolverReturn::future(async { Ok(Value::from("eventually")) })
            }),
        )
        .field(
            "broken",
            Field::new(builtin_scalars::string()).with_resolver(|_source, _args| {
                ResolverReturn::future(async { Err(FieldError::new("no luck")) })
            }),
        )
        .build()?;
    Schema::builder().query(query).build()
}

#[tokio::test]
async fn synchronous_resolver_returns_ready_value() -> Result<()> {
    test_utils::setup_logger();
    let schema = greeting_schema()?;
    let field = schema.query_type().field("hello")?.unwrap();
    let resolver = field.resolver().unwrap();
    let args = IndexMap::from([("name".to_string(), Value::from("Ada"))]);

    let result = TokioExecutionMiddleware::new()
        .run_resolve_fn(|| resolver(&Value::Null, &args));

    assert_eq!(result.as_ready(), Some(&Value::from("Hello, Ada!")));
    Ok(())
}

#[tokio::test]
async fn asynchronous_resolver_settles_through_the_bridge() -> Result<()> {
    test_utils::setup_logger();
    let schema = greeting_schema()?;
    let middleware = TokioExecutionMiddleware::new();

    let field = schema.query_type().field("later")?.unwrap();
    let resolver = field.resolver().unwrap();
    let result = middleware.run_resolve_fn(|| resolver(&Value::Null, &IndexMap::new()));
    assert!(result.is_deferred());

    let execution = result.into_deferred();
    let outcome = middleware
        .execution_result(move || MaybeDeferred::Deferred(execution))
        .await;
    assert_eq!(outcome, Ok(Value::from("eventually")));
    Ok(())
}

#[tokio::test]
async fn asynchronous_resolver_failure_settles_as_field_error() -> Result<()> {
    test_utils::setup_logger();
    let schema = greeting_schema()?;
    let field = schema.query_type().field("broken")?.unwrap();
    let resolver = field.resolver().unwrap();

    let outcome = TokioExecutionMiddleware::new()
        .run_resolve_fn(|| resolver(&Value::Null, &IndexMap::new()))
        .into_deferred()
        .into_future()
        .await;

    assert_eq!(outcome, Err(FieldError::new("no luck")));
    assert_eq!(outcome.unwrap_err().to_string(), "no luck");
    Ok(())
}

#[test]
fn fields_without_resolvers_have_none() -> Result<()> {
    let schema = test_utils::schema_with_field_type(builtin_scalars::string())?;

    assert!(schema.query_type().field("f")?.unwrap().resolver().is_none());
    Ok(())
}
