//! The scalar types every GraphQL schema has available: `Int`, `Float`,
//! `String`, `Boolean` and `ID`.
//!
//! Each function returns a handle to a process-wide singleton, so every call
//! yields the same instance (see [`ScalarType::ptr_eq()`]).

use crate::Value;
use crate::ast;
use crate::types::ScalarType;
use std::sync::OnceLock;

const MAX_INT: i64 = i32::MAX as i64;
const MIN_INT: i64 = i32::MIN as i64;

fn builtin(
    cell: &'static OnceLock<ScalarType>,
    init: fn() -> ScalarType,
) -> ScalarType {
    cell.get_or_init(init).clone()
}

fn builtin_scalar(
    name: &str,
    description: &str,
    serialize: fn(&Value) -> Option<Value>,
    parse_value: fn(&Value) -> Option<Value>,
    parse_literal: fn(&ast::Value) -> Option<Value>,
) -> ScalarType {
    match ScalarType::builder(name)
        .description(description)
        .serialize(serialize)
        .parse_value(parse_value)
        .parse_literal(parse_literal)
        .build()
    {
        Ok(scalar) => scalar,
        Err(err) => unreachable!("built-in scalar `{name}` is invalid: {err}"),
    }
}

/// All five built-in scalars.
pub fn all() -> [ScalarType; 5] {
    [int(), float(), string(), boolean(), id()]
}

/// Whether `scalar` is one of the built-in scalar instances.
pub fn is_builtin(scalar: &ScalarType) -> bool {
    all().iter().any(|builtin| builtin.ptr_eq(scalar))
}

pub fn boolean() -> ScalarType {
    static BOOLEAN: OnceLock<ScalarType> = OnceLock::new();
    builtin(&BOOLEAN, || builtin_scalar(
        "Boolean",
        "The `Boolean` scalar type represents `true` or `false`.",
        |value| match value {
            Value::Boolean(b) => Some(Value::Boolean(*b)),
            Value::Float(f) => Some(Value::Boolean(*f != 0.0)),
            Value::Int(i) => Some(Value::Boolean(*i != 0)),
            Value::String(s) => Some(Value::Boolean(!s.is_empty())),
            _ => None,
        },
        |value| value.as_bool().map(Value::Boolean),
        |literal| match literal {
            ast::Value::Boolean(b) => Some(Value::Boolean(*b)),
            _ => None,
        },
    ))
}

pub fn float() -> ScalarType {
    static FLOAT: OnceLock<ScalarType> = OnceLock::new();
    builtin(&FLOAT, || builtin_scalar(
        "Float",
        "The `Float` scalar type represents signed double-precision fractional \
        values as specified by \
        [IEEE 754](http://en.wikipedia.org/wiki/IEEE_floating_point).",
        |value| match value {
            Value::Boolean(b) => Some(Value::Float(if *b { 1.0 } else { 0.0 })),
            Value::Float(f) => Some(Value::Float(*f)),
            Value::Int(i) => Some(Value::Float(*i as f64)),
            Value::String(s) => s.trim().parse::<f64>().ok().map(Value::Float),
            _ => None,
        },
        |value| value.as_f64().map(Value::Float),
        |literal| match literal {
            ast::Value::Float(f) => Some(Value::Float(*f)),
            ast::Value::Int(number) =>
                number.as_i64().map(|i| Value::Float(i as f64)),
            _ => None,
        },
    ))
}

pub fn id() -> ScalarType {
    static ID: OnceLock<ScalarType> = OnceLock::new();
    builtin(&ID, || builtin_scalar(
        "ID",
        "The `ID` scalar type represents a unique identifier, often used to \
        refetch an object or as key for a cache.",
        |value| match value {
            Value::Int(i) => Some(Value::String(i.to_string())),
            Value::String(s) => Some(Value::String(s.clone())),
            _ => None,
        },
        |value| match value {
            Value::Int(i) => Some(Value::String(i.to_string())),
            Value::String(s) => Some(Value::String(s.clone())),
            _ => None,
        },
        |literal| match literal {
            ast::Value::Int(number) =>
                number.as_i64().map(|i| Value::String(i.to_string())),
            ast::Value::String(s) => Some(Value::String(s.clone())),
            _ => None,
        },
    ))
}

fn coerce_int(value: i64) -> Option<Value> {
    (MIN_INT..=MAX_INT).contains(&value).then_some(Value::Int(value))
}

pub fn int() -> ScalarType {
    static INT: OnceLock<ScalarType> = OnceLock::new();
    builtin(&INT, || builtin_scalar(
        "Int",
        "The `Int` scalar type represents non-fractional signed whole numeric \
        values. Int can represent values between -(2^31) and 2^31 - 1.",
        |value| match value {
            Value::Boolean(b) => Some(Value::Int(i64::from(*b))),
            Value::Float(f) if f.fract() == 0.0 => {
                if (MIN_INT as f64..=MAX_INT as f64).contains(f) {
                    Some(Value::Int(*f as i64))
                } else {
                    None
                }
            },
            Value::Int(i) => coerce_int(*i),
            Value::String(s) => s.trim().parse::<i64>().ok().and_then(coerce_int),
            _ => None,
        },
        |value| value.as_i64().and_then(coerce_int),
        |literal| match literal {
            ast::Value::Int(number) => number.as_i64().and_then(coerce_int),
            _ => None,
        },
    ))
}

pub fn string() -> ScalarType {
    static STRING: OnceLock<ScalarType> = OnceLock::new();
    builtin(&STRING, || builtin_scalar(
        "String",
        "The `String` scalar type represents textual data, represented as \
        UTF-8 character sequences.",
        |value| match value {
            Value::Boolean(b) => Some(Value::String(b.to_string())),
            Value::Enum(s) | Value::String(s) => Some(Value::String(s.clone())),
            Value::Float(f) => Some(Value::String(f.to_string())),
            Value::Int(i) => Some(Value::String(i.to_string())),
            _ => None,
        },
        |value| value.as_str().map(|s| Value::String(s.to_string())),
        |literal| match literal {
            ast::Value::String(s) => Some(Value::String(s.clone())),
            _ => None,
        },
    ))
}
