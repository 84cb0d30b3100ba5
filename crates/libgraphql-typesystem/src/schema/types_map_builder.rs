use crate::schema::InterfaceImplementationValidator;
use crate::schema::SchemaBuildError;
use crate::types::GraphQLType;
use crate::types::ObjectType;
use crate::types::PossibleTypes;
use indexmap::IndexMap;
use std::collections::HashMap;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Collects every named type reachable from a set of starting types into a
/// name-indexed map, verifying along the way that each name is bound to only
/// one type instance.
#[derive(Debug, Default)]
pub(super) struct TypesMapBuilder {
    types: IndexMap<String, GraphQLType>,
}
impl TypesMapBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `type_` (unwrapped of any list/non-null modifiers) and every type
    /// reachable from it.
    ///
    /// Reaching a type resolves its lazily-defined fields, interfaces and
    /// values, so any definition error surfaces here.
    pub fn visit(&mut self, type_: &GraphQLType) -> Result<()> {
        let named_type = type_.named_type();
        if !self.add_new_type(named_type)? {
            return Ok(());
        }
        log::trace!("Collecting types reachable from `{named_type}`.");

        match named_type {
            GraphQLType::Enum(enum_type) => {
                enum_type.values()?;
            },

            GraphQLType::InputObject(input_type) => {
                for field in input_type.fields()?.values() {
                    self.visit(field.graphql_type())?;
                }
            },

            GraphQLType::Interface(iface) => {
                for field in iface.fields()?.values() {
                    for arg in field.args().values() {
                        self.visit(arg.graphql_type())?;
                    }
                    self.visit(field.graphql_type())?;
                }
            },

            GraphQLType::Object(obj_type) => {
                for iface in obj_type.interfaces()? {
                    self.visit(&GraphQLType::Interface(iface.clone()))?;
                }
                for field in obj_type.fields()?.values() {
                    for arg in field.args().values() {
                        self.visit(arg.graphql_type())?;
                    }
                    self.visit(field.graphql_type())?;
                }
            },

            GraphQLType::Scalar(_) => (),

            GraphQLType::Union(union_type) => {
                for member in union_type.possible_types() {
                    self.visit(&GraphQLType::Object(member.clone()))?;
                }
            },

            GraphQLType::List(_) | GraphQLType::NonNull(_) =>
                unreachable!("named_type() never returns a wrapping type"),
        }

        Ok(())
    }

    /// Returns `Ok(false)` if this exact type instance was already recorded.
    fn add_new_type(&mut self, type_: &GraphQLType) -> Result<bool> {
        let Some(type_name) = type_.name() else {
            unreachable!("only named types are recorded");
        };

        if let Some(existing_type) = self.types.get(type_name) {
            if existing_type.ptr_eq(type_) {
                return Ok(false);
            }
            return Err(SchemaBuildError::DuplicateTypeName {
                type_name: type_name.to_string(),
            });
        }

        self.types.insert(type_name.to_string(), type_.clone());
        Ok(true)
    }

    /// Verify that every object type correctly implements its interfaces, then
    /// return the collected types along with an index from interface name to
    /// implementing object types.
    pub fn into_types_map(
        self,
    ) -> Result<(IndexMap<String, GraphQLType>, HashMap<String, PossibleTypes>)> {
        let mut implementations = HashMap::<String, Vec<ObjectType>>::new();
        for type_ in self.types.values() {
            match type_ {
                GraphQLType::Interface(iface) => {
                    implementations.entry(iface.name().to_string()).or_default();
                },

                GraphQLType::Object(obj_type) => {
                    for iface in obj_type.interfaces()? {
                        InterfaceImplementationValidator::new(obj_type, iface)
                            .validate()?;
                        implementations
                            .entry(iface.name().to_string())
                            .or_default()
                            .push(obj_type.clone());
                    }
                },

                GraphQLType::Enum(_)
                | GraphQLType::InputObject(_)
                | GraphQLType::List(_)
                | GraphQLType::NonNull(_)
                | GraphQLType::Scalar(_)
                | GraphQLType::Union(_) => (),
            }
        }

        let implementations = implementations
            .into_iter()
            .map(|(iface_name, types)| (iface_name, PossibleTypes::new(types)))
            .collect();
        Ok((self.types, implementations))
    }
}
