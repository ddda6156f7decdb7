//! Lookups of fields and options within a board schema.
//!
//! All lookups are case-sensitive and return the first match in list order.

use crate::model::schema::{Field, FieldOption, Schema};

pub fn find_field<'a>(schema: &'a Schema, name: &str) -> Option<&'a Field> {
    schema.fields.iter().find(|f| f.name == name)
}

pub fn find_option_by_name<'a>(field: Option<&'a Field>, name: &str) -> Option<&'a FieldOption> {
    field?.options.iter().find(|o| o.name == name)
}

/// Used for user-supplied identifiers that may abbreviate the option label,
/// e.g. `Rocket` for `Rocket Team`.
pub fn find_option_by_prefix<'a>(
    field: Option<&'a Field>,
    prefix: &str,
) -> Option<&'a FieldOption> {
    field?.options.iter().find(|o| o.name.starts_with(prefix))
}

/// Number of options in `field` starting with `prefix`.
pub fn count_prefix_matches(field: Option<&Field>, prefix: &str) -> usize {
    field.map_or(0, |f| {
        f.options
            .iter()
            .filter(|o| o.name.starts_with(prefix))
            .count()
    })
}
