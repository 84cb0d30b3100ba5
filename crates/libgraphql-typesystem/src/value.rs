use crate::ast;
use indexmap::IndexMap;

/// A runtime value flowing through resolvers, scalar and enum coercion, and
/// the polymorphic type-resolution hooks.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum Value {
    Boolean(bool),
    Enum(String),
    Float(f64),
    Int(i64),
    List(Vec<Value>),
    Null,
    Object(IndexMap<String, Value>),
    String(String),
}

impl Value {
    pub fn as_bool(&self) -> Option<bool> {
        if let Self::Boolean(value) = self {
            Some(*value)
        } else {
            None
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(value) => Some(*value),
            Self::Int(value) => Some(*value as f64),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        if let Self::Int(value) = self {
            Some(*value)
        } else {
            None
        }
    }

    pub fn as_object(&self) -> Option<&IndexMap<String, Value>> {
        if let Self::Object(entries) = self {
            Some(entries)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(value) = self {
            Some(value.as_str())
        } else {
            None
        }
    }

    /// Look up `key` on an [`Value::Object`].
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|entries| entries.get(key))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Convert a constant literal from a parsed document into a [`Value`].
    ///
    /// Returns `None` if the literal is (or contains) a variable reference,
    /// since those can only be resolved by the execution engine.
    pub fn from_literal(literal: &ast::Value) -> Option<Self> {
        Some(match literal {
            ast::Value::Boolean(value) => Self::Boolean(*value),
            ast::Value::Enum(name) => Self::Enum(name.clone()),
            ast::Value::Float(value) => Self::Float(*value),
            ast::Value::Int(number) => Self::Int(number.as_i64()?),
            ast::Value::List(items) =>
                Self::List(
                    items.iter()
                        .map(Self::from_literal)
                        .collect::<Option<Vec<_>>>()?,
                ),
            ast::Value::Null => Self::Null,
            ast::Value::Object(entries) =>
                Self::Object(
                    entries.iter()
                        .map(|(key, value)| {
                            Self::from_literal(value).map(|value| (key.clone(), value))
                        })
                        .collect::<Option<IndexMap<_, _>>>()?,
                ),
            ast::Value::String(value) => Self::String(value.clone()),
            ast::Value::Variable(_) => return None,
        })
    }
}

impl std::convert::From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl std::convert::From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl std::convert::From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl std::convert::From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl std::convert::From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl std::convert::From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl<V: Into<Value>> std::convert::From<Vec<V>> for Value {
    fn from(value: Vec<V>) -> Self {
        Self::List(value.into_iter().map(Into::into).collect())
    }
}
