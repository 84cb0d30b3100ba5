use crate::Value;

/// One of the values of an [`EnumType`](crate::types::EnumType).
///
/// The internal `value` is what resolvers produce and what input coercion
/// yields. It defaults to the value's name (as a [`Value::String`]).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EnumValue {
    pub(super) deprecation_reason: Option<String>,
    pub(super) description: Option<String>,
    pub(super) name: String,
    pub(super) value: Option<Value>,
}
impl EnumValue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_deprecation_reason(mut self, reason: impl Into<String>) -> Self {
        self.deprecation_reason = Some(reason.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn deprecation_reason(&self) -> Option<&str> {
        self.deprecation_reason.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecation_reason.is_some()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The internal value. For a value that has not yet been defined on its
    /// enum (and was given no explicit value), this is `None`.
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }
}
