use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub id: String,
    pub number: u64,
}

/// `gh project list` has emitted both a wrapped object and a bare array
/// across versions.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ProjectList {
    Wrapped { projects: Vec<Project> },
    Bare(Vec<Project>),
}

impl ProjectList {
    pub fn into_projects(self) -> Vec<Project> {
        match self {
            ProjectList::Wrapped { projects } => projects,
            ProjectList::Bare(projects) => projects,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FieldOption {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Field {
    pub id: String,
    pub name: String,
    /// Empty for date and text fields.
    #[serde(default)]
    pub options: Vec<FieldOption>,
}

/// The field list of one board, as returned by `gh project field-list`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Schema {
    #[serde(default)]
    pub fields: Vec<Field>,
}
