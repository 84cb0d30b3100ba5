use crate::schema::SchemaBuildError;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Whether `name` matches `/^[_a-zA-Z][_a-zA-Z0-9]*$/`.
pub(crate) fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first == '_' || first.is_ascii_alphabetic())
        && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

pub(crate) fn validate_name(name: &str) -> Result<()> {
    if is_valid_name(name) {
        Ok(())
    } else {
        Err(SchemaBuildError::InvalidName {
            name: name.to_string(),
        })
    }
}

pub(crate) fn validate_type_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(SchemaBuildError::MissingTypeName);
    }
    validate_name(name)
}
