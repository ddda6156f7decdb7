//! Cross-checks the source board schema against the roadmap schema and
//! resolves everything the migration will write before any item is touched.

use super::resolver::{
    count_prefix_matches, find_field, find_option_by_name, find_option_by_prefix,
};
use super::{BoardKind, AREA, FUNCTION, MIRRORED_FIELDS, START_DATE, TARGET_DATE};
use crate::error::{MigrationError, ValidationErrors};
use crate::model::schema::{Field, Schema};

/// What the user asked to stamp on every migrated item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingRequest {
    pub kind: BoardKind,
    pub name: String,
    pub area: Option<String>,
    pub function: Option<String>,
}

/// A single-select value resolved against the roadmap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectValue {
    pub field_id: String,
    pub field_name: String,
    pub option_id: String,
    pub option_name: String,
}

/// A prefix that matched more than one roadmap option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ambiguity {
    pub field_name: String,
    pub prefix: String,
    pub chosen: String,
    pub matches: usize,
}

/// The roadmap side of the migration, resolved once per run.
#[derive(Debug, Clone)]
pub struct RoadmapPlan {
    pub group: SelectValue,
    pub area: Option<SelectValue>,
    pub function: Option<SelectValue>,
    pub status: Field,
    pub kind: Field,
    pub workstream: Field,
    pub start_date: Option<Field>,
    pub target_date: Option<Field>,
    pub ambiguities: Vec<Ambiguity>,
}

impl RoadmapPlan {
    /// Fixed values applied to every item, in edit order.
    pub fn fixed_values(&self) -> impl Iterator<Item = &SelectValue> {
        std::iter::once(&self.group)
            .chain(self.area.as_ref())
            .chain(self.function.as_ref())
    }
}

/// Validates both schemas and the request, collecting every problem before
/// reporting.
pub fn validate(
    project: &Schema,
    roadmap: &Schema,
    request: &MappingRequest,
) -> Result<RoadmapPlan, MigrationError> {
    let mut errors = ValidationErrors::default();
    let mut ambiguities = Vec::new();

    let [status, kind, workstream] =
        MIRRORED_FIELDS.map(|name| check_mirrored(project, roadmap, name, &mut errors));

    let group = resolve_prefix(
        roadmap,
        request.kind.field_name(),
        &request.name,
        &mut ambiguities,
    );
    if group.is_none() {
        errors.push(format!(
            "{} '{}' not found in roadmap",
            request.kind.label(),
            request.name
        ));
    }

    let area = resolve_optional(
        roadmap,
        AREA,
        request.area.as_deref(),
        &mut errors,
        &mut ambiguities,
    );
    let function = resolve_optional(
        roadmap,
        FUNCTION,
        request.function.as_deref(),
        &mut errors,
        &mut ambiguities,
    );

    match (status, kind, workstream, group) {
        (Some(status), Some(kind), Some(workstream), Some(group)) if errors.is_empty() => {
            Ok(RoadmapPlan {
                group,
                area,
                function,
                status,
                kind,
                workstream,
                start_date: find_field(roadmap, START_DATE).cloned(),
                target_date: find_field(roadmap, TARGET_DATE).cloned(),
                ambiguities,
            })
        }
        _ => Err(MigrationError::Validation(errors)),
    }
}

/// Returns the roadmap field when it exists on both boards and carries every
/// source option.
fn check_mirrored(
    project: &Schema,
    roadmap: &Schema,
    name: &str,
    errors: &mut ValidationErrors,
) -> Option<Field> {
    let project_field = find_field(project, name);
    let roadmap_field = find_field(roadmap, name);
    if project_field.is_none() {
        errors.push(format!("{name} field missing in project"));
    }
    if roadmap_field.is_none() {
        errors.push(format!("{name} field missing in roadmap"));
    }
    let (project_field, roadmap_field) = (project_field?, roadmap_field?);

    let before = errors.messages().len();
    for option in &project_field.options {
        if find_option_by_name(Some(roadmap_field), &option.name).is_none() {
            errors.push(format!(
                "Project's {name} '{}' doesn't exist in roadmap",
                option.name
            ));
        }
    }
    (errors.messages().len() == before).then(|| roadmap_field.clone())
}

fn resolve_prefix(
    roadmap: &Schema,
    field_name: &str,
    prefix: &str,
    ambiguities: &mut Vec<Ambiguity>,
) -> Option<SelectValue> {
    let field = find_field(roadmap, field_name);
    let option = find_option_by_prefix(field, prefix)?;
    let field = field?;

    let matches = count_prefix_matches(Some(field), prefix);
    if matches > 1 {
        ambiguities.push(Ambiguity {
            field_name: field.name.clone(),
            prefix: prefix.to_string(),
            chosen: option.name.clone(),
            matches,
        });
    }

    Some(SelectValue {
        field_id: field.id.clone(),
        field_name: field.name.clone(),
        option_id: option.id.clone(),
        option_name: option.name.clone(),
    })
}

fn resolve_optional(
    roadmap: &Schema,
    field_name: &str,
    prefix: Option<&str>,
    errors: &mut ValidationErrors,
    ambiguities: &mut Vec<Ambiguity>,
) -> Option<SelectValue> {
    let prefix = prefix.filter(|p| !p.is_empty())?;
    let resolved = resolve_prefix(roadmap, field_name, prefix, ambiguities);
    if resolved.is_none() {
        errors.push(format!("{field_name} '{prefix}' not found in roadmap"));
    }
    resolved
}
