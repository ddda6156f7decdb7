//! Copies items from a source board onto the roadmap board.
//!
//! The run is sequential: fetch both schemas, validate, fetch the items, then
//! migrate one item at a time. Schema and lookup problems abort the run before
//! anything is written; failures while migrating an item are reported to the
//! observer and the run carries on.

pub mod observer;

use std::future::Future;

use serde::de::DeserializeOwned;

use crate::error::MigrationError;
use crate::mapping::resolver::find_option_by_name;
use crate::mapping::validator::{self, MappingRequest, RoadmapPlan};
use crate::mapping::{START_DATE, TARGET_DATE};
use crate::model::item::{AddedItem, Item, ItemList};
use crate::model::schema::{Field, Project, ProjectList, Schema};
use crate::providers::ProjectGateway;
use observer::{MigrationEvent, MigrationObserver};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationParams {
    pub source_project: u64,
    pub mapping: MappingRequest,
    /// Leave source items in place instead of archiving them.
    pub dry_run: bool,
}

impl MigrationParams {
    fn check(&self, roadmap: u64) -> Result<(), MigrationError> {
        if self.mapping.name.trim().is_empty() {
            return Err(MigrationError::Config("name is missing".into()));
        }
        if self.source_project == roadmap {
            return Err(MigrationError::Config(format!(
                "source project {roadmap} is the roadmap itself"
            )));
        }
        Ok(())
    }
}

/// The destination board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roadmap {
    pub number: u64,
    pub project_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemOutcome {
    Migrated,
    Skipped,
    Failed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MigrationReport {
    pub migrated: usize,
    pub skipped: usize,
    pub failed: usize,
    pub edit_failures: usize,
    pub archived: usize,
    pub dry_run: bool,
}

impl MigrationReport {
    fn record(&mut self, outcome: ItemOutcome) {
        match outcome {
            ItemOutcome::Migrated => self.migrated += 1,
            ItemOutcome::Skipped => self.skipped += 1,
            ItemOutcome::Failed => self.failed += 1,
        }
    }
}

pub struct Migrator<'a> {
    gateway: &'a dyn ProjectGateway,
    observer: &'a dyn MigrationObserver,
    roadmap: Roadmap,
}

impl<'a> Migrator<'a> {
    pub fn new(
        gateway: &'a dyn ProjectGateway,
        observer: &'a dyn MigrationObserver,
        roadmap: Roadmap,
    ) -> Self {
        Self {
            gateway,
            observer,
            roadmap,
        }
    }

    pub async fn run(&self, params: &MigrationParams) -> Result<MigrationReport, MigrationError> {
        params.check(self.roadmap.number)?;
        self.emit(MigrationEvent::Started {
            source: params.source_project,
            roadmap: self.roadmap.number,
            dry_run: params.dry_run,
        });

        let listing: ProjectList = self
            .fetch("project list", self.gateway.list_projects())
            .await?;
        let projects = listing.into_projects();
        find_project(&projects, params.source_project)?;
        let roadmap_id = match &self.roadmap.project_id {
            Some(id) => id.clone(),
            None => find_project(&projects, self.roadmap.number)?.id.clone(),
        };

        let source_fields: Schema = self
            .fetch("project fields", self.gateway.list_fields(params.source_project))
            .await?;
        let roadmap_fields: Schema = self
            .fetch("roadmap fields", self.gateway.list_fields(self.roadmap.number))
            .await?;
        let plan = validator::validate(&source_fields, &roadmap_fields, &params.mapping)?;
        for ambiguity in &plan.ambiguities {
            self.emit(MigrationEvent::AmbiguousPrefix(ambiguity));
        }

        let items: ItemList = self
            .fetch("items", self.gateway.list_items(params.source_project))
            .await?;
        self.emit(MigrationEvent::ItemsLoaded {
            count: items.items.len(),
        });

        let mut report = MigrationReport {
            dry_run: params.dry_run,
            ..MigrationReport::default()
        };
        for item in &items.items {
            let outcome = self
                .migrate_item(item, &plan, &roadmap_id, params, &mut report)
                .await;
            report.record(outcome);
            self.emit(MigrationEvent::ItemFinished {
                title: &item.title,
                outcome,
            });
        }

        self.emit(MigrationEvent::Finished(&report));
        Ok(report)
    }

    async fn migrate_item(
        &self,
        item: &Item,
        plan: &RoadmapPlan,
        roadmap_id: &str,
        params: &MigrationParams,
        report: &mut MigrationReport,
    ) -> ItemOutcome {
        if item.is_draft() {
            self.emit(MigrationEvent::SkippedDraft {
                title: &item.content.title,
            });
            return ItemOutcome::Skipped;
        }

        self.emit(MigrationEvent::Adding { title: &item.title });
        let added = match self
            .gateway
            .create_item(self.roadmap.number, &item.content.url)
            .await
            .and_then(|raw| Ok(serde_json::from_str::<AddedItem>(&raw)?))
        {
            Ok(added) => added,
            Err(err) => {
                self.emit(MigrationEvent::CreateFailed {
                    title: &item.title,
                    error: format!("{err:#}"),
                });
                return ItemOutcome::Failed;
            }
        };
        let edit = ItemEdit {
            migrator: self,
            project_id: roadmap_id,
            item_id: &added.id,
        };

        for value in plan.fixed_values() {
            if !edit
                .select(&value.field_id, &value.field_name, &value.option_id, &value.option_name)
                .await
            {
                report.edit_failures += 1;
            }
        }

        let mirrored = [
            (&plan.status, item.status()),
            (&plan.kind, item.kind()),
            (&plan.workstream, item.workstream()),
        ];
        for (field, value) in mirrored {
            let Some(value) = value else { continue };
            match find_option_by_name(Some(field), value) {
                Some(option) => {
                    if !edit.select(&field.id, &field.name, &option.id, &option.name).await {
                        report.edit_failures += 1;
                    }
                }
                None => self.emit(MigrationEvent::OptionMissing {
                    field: &field.name,
                    value,
                }),
            }
        }

        let dates: [(&str, Option<&Field>, Option<&str>); 2] = [
            (START_DATE, plan.start_date.as_ref(), item.start_date()),
            (TARGET_DATE, plan.target_date.as_ref(), item.target_date()),
        ];
        for (name, field, date) in dates {
            let Some(date) = date else { continue };
            match field {
                Some(field) => {
                    if !edit.date(&field.id, &field.name, date).await {
                        report.edit_failures += 1;
                    }
                }
                None => self.emit(MigrationEvent::DateFieldMissing { field: name }),
            }
        }

        if !params.dry_run {
            match self
                .gateway
                .archive_item(params.source_project, &item.id)
                .await
            {
                Ok(()) => {
                    report.archived += 1;
                    self.emit(MigrationEvent::Archived { item_id: &item.id });
                }
                Err(err) => self.emit(MigrationEvent::ArchiveFailed {
                    item_id: &item.id,
                    error: format!("{err:#}"),
                }),
            }
        }

        ItemOutcome::Migrated
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        what: &'static str,
        call: impl Future<Output = anyhow::Result<String>>,
    ) -> Result<T, MigrationError> {
        let raw = call.await.map_err(|source| MigrationError::Gateway {
            operation: what,
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| MigrationError::Parse { what, source })
    }

    fn emit(&self, event: MigrationEvent<'_>) {
        self.observer.on_event(&event);
    }
}

/// Field edits against one newly added roadmap item. Each edit reports its
/// own failure and returns whether it succeeded.
struct ItemEdit<'m, 'a> {
    migrator: &'m Migrator<'a>,
    project_id: &'m str,
    item_id: &'m str,
}

impl ItemEdit<'_, '_> {
    async fn select(&self, field_id: &str, field: &str, option_id: &str, option: &str) -> bool {
        let result = self
            .migrator
            .gateway
            .set_single_select_field(self.project_id, self.item_id, field_id, option_id)
            .await;
        self.report(field, option, result)
    }

    async fn date(&self, field_id: &str, field: &str, date: &str) -> bool {
        let result = self
            .migrator
            .gateway
            .set_date_field(self.project_id, self.item_id, field_id, date)
            .await;
        self.report(field, date, result)
    }

    fn report(&self, field: &str, value: &str, result: anyhow::Result<()>) -> bool {
        match result {
            Ok(()) => {
                self.migrator.emit(MigrationEvent::FieldSet {
                    item_id: self.item_id,
                    field,
                    value,
                });
                true
            }
            Err(err) => {
                self.migrator.emit(MigrationEvent::EditFailed {
                    item_id: self.item_id,
                    field,
                    error: format!("{err:#}"),
                });
                false
            }
        }
    }
}

fn find_project(projects: &[Project], number: u64) -> Result<&Project, MigrationError> {
    projects
        .iter()
        .find(|p| p.number == number)
        .ok_or(MigrationError::ProjectNotFound(number))
}

pub async fn run_migration(
    gateway: &dyn ProjectGateway,
    observer: &dyn MigrationObserver,
    roadmap: Roadmap,
    params: &MigrationParams,
) -> Result<MigrationReport, MigrationError> {
    Migrator::new(gateway, observer, roadmap).run(params).await
}
