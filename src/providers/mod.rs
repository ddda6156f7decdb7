pub mod github;

use anyhow::Result;
use async_trait::async_trait;

/// Access to the project boards. Every call returns the raw JSON printed by
/// the backing tool; decoding is left to the caller.
#[async_trait]
pub trait ProjectGateway: Send + Sync {
    async fn list_projects(&self) -> Result<String>;
    async fn list_fields(&self, project: u64) -> Result<String>;
    async fn list_items(&self, project: u64) -> Result<String>;
    /// Adds the issue or pull request at `url` to `project`.
    async fn create_item(&self, project: u64, url: &str) -> Result<String>;
    async fn set_single_select_field(
        &self,
        project_id: &str,
        item_id: &str,
        field_id: &str,
        option_id: &str,
    ) -> Result<()>;
    async fn set_date_field(
        &self,
        project_id: &str,
        item_id: &str,
        field_id: &str,
        date: &str,
    ) -> Result<()>;
    async fn archive_item(&self, project: u64, item_id: &str) -> Result<()>;
}
