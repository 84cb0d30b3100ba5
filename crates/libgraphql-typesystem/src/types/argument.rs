use crate::Value;
use crate::types::GraphQLType;

/// An argument accepted by a [`Field`](crate::types::Field).
#[derive(Clone, Debug)]
pub struct Argument {
    pub(super) default_value: Option<Value>,
    pub(super) description: Option<String>,
    pub(super) graphql_type: GraphQLType,
    pub(super) name: String,
}
impl Argument {
    pub fn new(graphql_type: impl Into<GraphQLType>) -> Self {
        Self {
            default_value: None,
            description: None,
            graphql_type: graphql_type.into(),
            name: String::new(),
        }
    }

    pub fn with_default_value(mut self, default_value: impl Into<Value>) -> Self {
        self.default_value = Some(default_value.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn graphql_type(&self) -> &GraphQLType {
        &self.graphql_type
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
