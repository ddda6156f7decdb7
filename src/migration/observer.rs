use crate::mapping::validator::Ambiguity;

use super::{ItemOutcome, MigrationReport};

/// Progress of a migration run, reported as it happens.
#[derive(Debug)]
pub enum MigrationEvent<'a> {
    Started {
        source: u64,
        roadmap: u64,
        dry_run: bool,
    },
    AmbiguousPrefix(&'a Ambiguity),
    ItemsLoaded {
        count: usize,
    },
    SkippedDraft {
        title: &'a str,
    },
    Adding {
        title: &'a str,
    },
    CreateFailed {
        title: &'a str,
        error: String,
    },
    FieldSet {
        item_id: &'a str,
        field: &'a str,
        value: &'a str,
    },
    EditFailed {
        item_id: &'a str,
        field: &'a str,
        error: String,
    },
    /// The item's value has no same-named option on the roadmap.
    OptionMissing {
        field: &'a str,
        value: &'a str,
    },
    DateFieldMissing {
        field: &'a str,
    },
    Archived {
        item_id: &'a str,
    },
    ArchiveFailed {
        item_id: &'a str,
        error: String,
    },
    ItemFinished {
        title: &'a str,
        outcome: ItemOutcome,
    },
    Finished(&'a MigrationReport),
}

pub trait MigrationObserver: Send + Sync {
    fn on_event(&self, event: &MigrationEvent<'_>);
}

/// Forwards events to `tracing`.
pub struct TracingObserver;

impl MigrationObserver for TracingObserver {
    fn on_event(&self, event: &MigrationEvent<'_>) {
        match event {
            MigrationEvent::Started {
                source,
                roadmap,
                dry_run,
            } => tracing::info!(source, roadmap, dry_run, "Starting migration"),
            MigrationEvent::AmbiguousPrefix(a) => tracing::warn!(
                field = %a.field_name,
                prefix = %a.prefix,
                chosen = %a.chosen,
                matches = a.matches,
                "Prefix matches several roadmap options, using the first"
            ),
            MigrationEvent::ItemsLoaded { count } => {
                tracing::info!(count, "Loaded items from source project")
            }
            MigrationEvent::SkippedDraft { title } => tracing::info!(title, "Skipping draft"),
            MigrationEvent::Adding { title } => {
                tracing::info!(title, "Adding issue to roadmap board")
            }
            MigrationEvent::CreateFailed { title, error } => {
                tracing::error!(title, error = %error, "Error adding item")
            }
            MigrationEvent::FieldSet {
                item_id,
                field,
                value,
            } => tracing::debug!(item_id, field, value, "Field set"),
            MigrationEvent::EditFailed {
                item_id,
                field,
                error,
            } => tracing::error!(item_id, field, error = %error, "Error editing field"),
            MigrationEvent::OptionMissing { field, value } => {
                tracing::warn!(field, value, "Value not found in roadmap")
            }
            MigrationEvent::DateFieldMissing { field } => {
                tracing::debug!(field, "Roadmap has no such date field, skipping")
            }
            MigrationEvent::Archived { item_id } => {
                tracing::debug!(item_id, "Archived source item")
            }
            MigrationEvent::ArchiveFailed { item_id, error } => {
                tracing::error!(item_id, error = %error, "Error archiving item")
            }
            MigrationEvent::ItemFinished { title, outcome } => {
                tracing::debug!(title, outcome = ?outcome, "Item finished")
            }
            MigrationEvent::Finished(report) => tracing::info!(
                migrated = report.migrated,
                skipped = report.skipped,
                failed = report.failed,
                edit_failures = report.edit_failures,
                archived = report.archived,
                dry_run = report.dry_run,
                "Migration finished"
            ),
        }
    }
}
