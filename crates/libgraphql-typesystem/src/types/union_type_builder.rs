use crate::Value;
use crate::schema::SchemaBuildError;
use crate::types::ObjectType;
use crate::types::PossibleTypes;
use crate::types::ResolveTypeFn;
use crate::types::UnionType;
use crate::types::UnionTypeData;
use crate::types::names;
use std::sync::Arc;

type Result<T> = std::result::Result<T, SchemaBuildError>;

pub struct UnionTypeBuilder {
    description: Option<String>,
    name: String,
    resolve_type: Option<ResolveTypeFn>,
    types: Vec<ObjectType>,
}

impl UnionTypeBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            description: None,
            name: name.into(),
            resolve_type: None,
            types: vec![],
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn resolve_type(
        mut self,
        resolve_type: impl Fn(&Value) -> Option<ObjectType> + Send + Sync + 'static,
    ) -> Self {
        self.resolve_type = Some(Arc::new(resolve_type));
        self
    }

    pub fn member(mut self, type_: ObjectType) -> Self {
        self.types.push(type_);
        self
    }

    pub fn types(mut self, types: Vec<ObjectType>) -> Self {
        self.types = types;
        self
    }

    /// Construct the union, verifying that it has at least one member and
    /// that every member can be told apart at runtime.
    pub fn build(self) -> Result<UnionType> {
        names::validate_type_name(&self.name)?;
        if self.types.is_empty() {
            return Err(SchemaBuildError::EmptyUnionTypes {
                type_name: self.name,
            });
        }
        if self.resolve_type.is_none() {
            let unresolvable_member = self.types
                .iter()
                .find(|member| !member.has_is_type_of());
            if let Some(member) = unresolvable_member {
                return Err(SchemaBuildError::UnresolvableUnionMember {
                    type_name: member.name().to_string(),
                    union_name: self.name,
                });
            }
        }
        log::trace!(
            "Built union type `{}` with {} member(s).",
            self.name,
            self.types.len(),
        );

        Ok(UnionType(Arc::new(UnionTypeData {
            description: self.description,
            name: self.name,
            possible_types: PossibleTypes::new(self.types),
            resolve_type: self.resolve_type,
        })))
    }
}
