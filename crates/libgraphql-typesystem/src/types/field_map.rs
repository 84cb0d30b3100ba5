use crate::Value;
use crate::schema::SchemaBuildError;
use crate::types::EnumValue;
use crate::types::Field;
use crate::types::InputField;
use crate::types::names;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Validate the fields of an object or interface type and name each field
/// (and each of its arguments) after its map key.
pub(super) fn define_field_map(
    type_name: &str,
    fields: IndexMap<String, Field>,
) -> Result<IndexMap<String, Field>> {
    log::trace!("Defining {} field(s) of `{type_name}`.", fields.len());
    if fields.is_empty() {
        return Err(SchemaBuildError::InvalidFieldMap {
            type_name: type_name.to_string(),
        });
    }

    let mut field_map = IndexMap::with_capacity(fields.len());
    for (field_name, mut field) in fields {
        names::validate_name(&field_name)?;
        if !field.graphql_type.is_output_type() {
            return Err(SchemaBuildError::InvalidOutputFieldType {
                field_name,
                field_type: field.graphql_type.to_string(),
                type_name: type_name.to_string(),
            });
        }

        for (arg_name, arg) in field.args.iter_mut() {
            names::validate_name(arg_name)?;
            if !arg.graphql_type.is_input_type() {
                return Err(SchemaBuildError::InvalidArgumentType {
                    argument_name: arg_name.to_string(),
                    argument_type: arg.graphql_type.to_string(),
                    field_name,
                    type_name: type_name.to_string(),
                });
            }
            arg.name = arg_name.to_string();
        }

        field.name = field_name.clone();
        field_map.insert(field_name, field);
    }
    Ok(field_map)
}

/// Validate the fields of an input object type and name each field after its
/// map key.
pub(super) fn define_input_field_map(
    type_name: &str,
    fields: IndexMap<String, InputField>,
) -> Result<IndexMap<String, InputField>> {
    log::trace!("Defining {} input field(s) of `{type_name}`.", fields.len());
    if fields.is_empty() {
        return Err(SchemaBuildError::InvalidFieldMap {
            type_name: type_name.to_string(),
        });
    }

    let mut field_map = IndexMap::with_capacity(fields.len());
    for (field_name, mut field) in fields {
        names::validate_name(&field_name)?;
        if !field.graphql_type.is_input_type() {
            return Err(SchemaBuildError::InvalidInputFieldType {
                field_name,
                field_type: field.graphql_type.to_string(),
                type_name: type_name.to_string(),
            });
        }
        field.name = field_name.clone();
        field_map.insert(field_name, field);
    }
    Ok(field_map)
}

/// Validate the values of an enum type, name each value after its map key and
/// fill in the internal value of those that were given none.
pub(super) fn define_enum_value_map(
    type_name: &str,
    values: IndexMap<String, EnumValue>,
) -> Result<IndexMap<String, EnumValue>> {
    log::trace!("Defining {} value(s) of `{type_name}`.", values.len());
    if values.is_empty() {
        return Err(SchemaBuildError::InvalidEnumValueMap {
            type_name: type_name.to_string(),
        });
    }

    let mut value_map = IndexMap::with_capacity(values.len());
    for (value_name, mut value) in values {
        names::validate_name(&value_name)?;
        if value.value.is_none() {
            value.value = Some(Value::String(value_name.clone()));
        }
        value.name = value_name.clone();
        value_map.insert(value_name, value);
    }
    Ok(value_map)
}
