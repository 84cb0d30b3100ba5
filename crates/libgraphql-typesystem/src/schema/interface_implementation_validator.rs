use crate::schema::SchemaBuildError;
use crate::types::InterfaceType;
use crate::types::ObjectType;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Verifies that an [`ObjectType`] correctly implements one of the interfaces
/// it declares.
///
/// Field and argument types must match the interface's exactly (no covariant
/// field types), and implementing fields may not accept arguments the
/// interface field does not define.
pub(super) struct InterfaceImplementationValidator<'a> {
    interface: &'a InterfaceType,
    type_: &'a ObjectType,
}
impl<'a> InterfaceImplementationValidator<'a> {
    pub fn new(type_: &'a ObjectType, interface: &'a InterfaceType) -> Self {
        Self {
            interface,
            type_,
        }
    }

    pub fn validate(self) -> Result<()> {
        let iface_name = self.interface.name();
        let type_name = self.type_.name();
        let type_fields = self.type_.fields()?;

        for (field_name, iface_field) in self.interface.fields()? {
            let Some(type_field) = type_fields.get(field_name) else {
                return Err(SchemaBuildError::MissingInterfaceField {
                    field_name: field_name.to_string(),
                    interface_name: iface_name.to_string(),
                    type_name: type_name.to_string(),
                });
            };

            if !type_field.graphql_type().is_same_type(iface_field.graphql_type()) {
                return Err(SchemaBuildError::InvalidInterfaceFieldType {
                    expected_type: iface_field.graphql_type().to_string(),
                    field_name: field_name.to_string(),
                    interface_name: iface_name.to_string(),
                    provided_type: type_field.graphql_type().to_string(),
                    type_name: type_name.to_string(),
                });
            }

            // Every argument the interface field defines must be defined
            // identically on the implementing field.
            for (arg_name, iface_arg) in iface_field.args() {
                let Some(type_arg) = type_field.args().get(arg_name) else {
                    return Err(SchemaBuildError::MissingInterfaceFieldArgument {
                        argument_name: arg_name.to_string(),
                        field_name: field_name.to_string(),
                        interface_name: iface_name.to_string(),
                        type_name: type_name.to_string(),
                    });
                };

                if !type_arg.graphql_type().is_same_type(iface_arg.graphql_type()) {
                    return Err(SchemaBuildError::InvalidInterfaceFieldArgumentType {
                        argument_name: arg_name.to_string(),
                        expected_type: iface_arg.graphql_type().to_string(),
                        field_name: field_name.to_string(),
                        interface_name: iface_name.to_string(),
                        provided_type: type_arg.graphql_type().to_string(),
                        type_name: type_name.to_string(),
                    });
                }
            }

            // ...and the implementing field may not define any others.
            let extra_arg_name = type_field.args()
                .keys()
                .find(|arg_name| !iface_field.args().contains_key(arg_name.as_str()));
            if let Some(arg_name) = extra_arg_name {
                return Err(SchemaBuildError::UnexpectedInterfaceFieldArgument {
                    argument_name: arg_name.to_string(),
                    field_name: field_name.to_string(),
                    interface_name: iface_name.to_string(),
                    type_name: type_name.to_string(),
                });
            }
        }

        Ok(())
    }
}
