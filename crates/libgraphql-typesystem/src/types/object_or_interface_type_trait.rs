use crate::schema::SchemaBuildError;
use crate::types::Field;
use indexmap::IndexMap;

pub(super) trait ObjectOrInterfaceTypeTrait {
    fn description(&self) -> Option<&str>;
    fn field(&self, field_name: &str) -> Result<Option<&Field>, SchemaBuildError>;
    fn fields(&self) -> Result<&IndexMap<String, Field>, SchemaBuildError>;
    fn name(&self) -> &str;
}
