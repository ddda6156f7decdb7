use std::path::PathBuf;

use clap::Parser;

use crate::config::AppConfig;
use crate::mapping::validator::MappingRequest;
use crate::mapping::BoardKind;
use crate::migration::{MigrationParams, Roadmap};

#[derive(Debug, Parser)]
#[command(
    name = "roadmap-migrate",
    version,
    about = "Move the items of a project board onto the roadmap board"
)]
pub struct Cli {
    /// Project number (eg 301)
    #[arg(short = 'p', long = "project")]
    pub project: u64,
    /// Which roadmap field names the owner
    #[arg(short = 't', long = "type", value_enum)]
    pub kind: BoardKind,
    /// Name of the Team, SIG or WG, a prefix of the roadmap option (eg Rocket)
    #[arg(short = 'n', long)]
    pub name: String,
    /// Area (eg KaaS)
    #[arg(short = 'a', long)]
    pub area: Option<String>,
    /// Function (eg 'Product Strategy')
    #[arg(short = 'f', long)]
    pub function: Option<String>,
    /// Add and label items on the roadmap but leave the source items unarchived
    #[arg(short = 'd', long)]
    pub dry_run: bool,
    /// Log every gh invocation
    #[arg(short = 'v', long)]
    pub verbose: bool,
    /// Organisation owning the boards
    #[arg(long)]
    pub owner: Option<String>,
    /// Roadmap board number
    #[arg(long)]
    pub roadmap: Option<u64>,
    /// Config file (default ~/.roadmap-migrate/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(owner) = &self.owner {
            config.owner = owner.clone();
        }
        if let Some(roadmap) = self.roadmap {
            if roadmap != config.roadmap {
                // A configured id belongs to the configured roadmap.
                config.roadmap_project_id = None;
            }
            config.roadmap = roadmap;
        }
    }

    pub fn params(&self) -> MigrationParams {
        MigrationParams {
            source_project: self.project,
            mapping: MappingRequest {
                kind: self.kind,
                name: self.name.clone(),
                area: non_blank(&self.area),
                function: non_blank(&self.function),
            },
            dry_run: self.dry_run,
        }
    }
}

pub fn roadmap(config: &AppConfig) -> Roadmap {
    Roadmap {
        number: config.roadmap,
        project_id: config.roadmap_project_id.clone(),
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.trim().is_empty()).cloned()
}
