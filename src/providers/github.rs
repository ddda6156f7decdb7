use anyhow::{Context, Result};
use async_trait::async_trait;

use super::ProjectGateway;
use crate::config::AppConfig;

/// Talks to GitHub Projects through the `gh` CLI.
pub struct GhCliGateway {
    program: String,
    owner: String,
    limit: u32,
}

impl GhCliGateway {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            program: config.gh_path.clone(),
            owner: config.owner.clone(),
            limit: config.item_limit,
        }
    }

    fn listing_args(&self, subcommand: &str, project: Option<u64>) -> Vec<String> {
        let mut args = vec!["project".to_string(), subcommand.to_string()];
        if let Some(project) = project {
            args.push(project.to_string());
        }
        args.extend([
            "--owner".to_string(),
            self.owner.clone(),
            "-L".to_string(),
            self.limit.to_string(),
            "--format".to_string(),
            "json".to_string(),
        ]);
        args
    }

    fn item_add_args(&self, project: u64, url: &str) -> Vec<String> {
        let project = project.to_string();
        [
            "project",
            "item-add",
            project.as_str(),
            "--owner",
            self.owner.as_str(),
            "--format",
            "json",
            "--url",
            url,
        ]
        .map(String::from)
        .to_vec()
    }

    fn item_edit_args(
        project_id: &str,
        item_id: &str,
        field_id: &str,
        value_flag: &str,
        value: &str,
    ) -> Vec<String> {
        [
            "project",
            "item-edit",
            "--project-id",
            project_id,
            "--id",
            item_id,
            "--field-id",
            field_id,
            value_flag,
            value,
        ]
        .map(String::from)
        .to_vec()
    }

    fn item_archive_args(&self, project: u64, item_id: &str) -> Vec<String> {
        let project = project.to_string();
        [
            "project",
            "item-archive",
            project.as_str(),
            "--id",
            item_id,
            "--owner",
            self.owner.as_str(),
        ]
        .map(String::from)
        .to_vec()
    }

    async fn run(&self, args: &[String]) -> Result<String> {
        tracing::debug!(cmd = %format!("{} {}", self.program, args.join(" ")), "Executing command");

        let output = tokio::process::Command::new(&self.program)
            .args(args)
            .output()
            .await
            .with_context(|| format!("Failed to run {}", self.program))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!(
                "{} {} failed: {}",
                self.program,
                args.get(1).map(String::as_str).unwrap_or_default(),
                stderr.trim()
            );
        }

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        tracing::trace!(output = %stdout, "Command output");
        Ok(stdout)
    }
}

#[async_trait]
impl ProjectGateway for GhCliGateway {
    async fn list_projects(&self) -> Result<String> {
        self.run(&self.listing_args("list", None)).await
    }

    async fn list_fields(&self, project: u64) -> Result<String> {
        self.run(&self.listing_args("field-list", Some(project))).await
    }

    async fn list_items(&self, project: u64) -> Result<String> {
        self.run(&self.listing_args("item-list", Some(project))).await
    }

    async fn create_item(&self, project: u64, url: &str) -> Result<String> {
        self.run(&self.item_add_args(project, url)).await
    }

    async fn set_single_select_field(
        &self,
        project_id: &str,
        item_id: &str,
        field_id: &str,
        option_id: &str,
    ) -> Result<()> {
        let args = Self::item_edit_args(
            project_id,
            item_id,
            field_id,
            "--single-select-option-id",
            option_id,
        );
        self.run(&args).await.map(drop)
    }

    async fn set_date_field(
        &self,
        project_id: &str,
        item_id: &str,
        field_id: &str,
        date: &str,
    ) -> Result<()> {
        let args = Self::item_edit_args(project_id, item_id, field_id, "--date", date);
        self.run(&args).await.map(drop)
    }

    async fn archive_item(&self, project: u64, item_id: &str) -> Result<()> {
        self.run(&self.item_archive_args(project, item_id)).await.map(drop)
    }
}
