use crate::Value;
use crate::types::ObjectType;
use std::collections::HashSet;
use std::sync::OnceLock;

/// The object types an abstract type may resolve to, with a lazily-built
/// name index for membership checks.
#[derive(Debug)]
pub(crate) struct PossibleTypes {
    names: OnceLock<HashSet<String>>,
    types: Vec<ObjectType>,
}
impl PossibleTypes {
    pub fn new(types: Vec<ObjectType>) -> Self {
        Self {
            names: OnceLock::new(),
            types,
        }
    }

    pub fn as_slice(&self) -> &[ObjectType] {
        self.types.as_slice()
    }

    pub fn contains(&self, type_: &ObjectType) -> bool {
        self.names
            .get_or_init(|| {
                self.types
                    .iter()
                    .map(|possible_type| possible_type.name().to_string())
                    .collect()
            })
            .contains(type_.name())
    }

    /// The first possible type (in declaration order) whose `is_type_of`
    /// accepts `value`.
    pub fn find_type_of(&self, value: &Value) -> Option<ObjectType> {
        self.types
            .iter()
            .find(|possible_type| possible_type.is_type_of(value))
            .cloned()
    }
}
