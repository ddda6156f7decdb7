pub mod resolver;
pub mod validator;

use clap::ValueEnum;

/// Which roadmap field identifies the owning group of migrated items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BoardKind {
    #[value(name = "team")]
    Team,
    #[value(name = "sig")]
    Sig,
    #[value(name = "wg")]
    WorkingGroup,
}

impl BoardKind {
    pub fn field_name(self) -> &'static str {
        match self {
            BoardKind::Team => "Team",
            BoardKind::Sig => "SIG",
            BoardKind::WorkingGroup => "Working Group",
        }
    }

    /// Short label used in messages.
    pub fn label(self) -> &'static str {
        match self {
            BoardKind::Team => "Team",
            BoardKind::Sig => "SIG",
            BoardKind::WorkingGroup => "WG",
        }
    }
}

pub const STATUS: &str = "Status";
pub const KIND: &str = "Kind";
pub const WORKSTREAM: &str = "Workstream";
pub const AREA: &str = "Area";
pub const FUNCTION: &str = "Function";
pub const START_DATE: &str = "Start Date";
pub const TARGET_DATE: &str = "Target Date";

/// Fields whose source options must all exist on the roadmap.
pub const MIRRORED_FIELDS: [&str; 3] = [STATUS, KIND, WORKSTREAM];
