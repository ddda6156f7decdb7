use serde::Deserialize;

pub const DRAFT_ISSUE: &str = "DraftIssue";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemContent {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Item {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: ItemContent,
    pub status: Option<String>,
    pub kind: Option<String>,
    pub workstream: Option<String>,
    #[serde(rename = "start Date")]
    pub start_date: Option<String>,
    #[serde(rename = "target Date")]
    pub target_date: Option<String>,
}

impl Item {
    /// Drafts have no linked issue or pull request to add elsewhere.
    pub fn is_draft(&self) -> bool {
        self.content.kind == DRAFT_ISSUE
    }

    pub fn status(&self) -> Option<&str> {
        non_blank(self.status.as_deref())
    }

    pub fn kind(&self) -> Option<&str> {
        non_blank(self.kind.as_deref())
    }

    pub fn workstream(&self) -> Option<&str> {
        non_blank(self.workstream.as_deref())
    }

    pub fn start_date(&self) -> Option<&str> {
        date_value(self.start_date.as_deref())
    }

    pub fn target_date(&self) -> Option<&str> {
        date_value(self.target_date.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

// gh renders unset dates as the literal string "null".
fn date_value(value: Option<&str>) -> Option<&str> {
    non_blank(value).filter(|v| *v != "null")
}

#[derive(Debug, Default, Deserialize)]
pub struct ItemList {
    #[serde(default)]
    pub items: Vec<Item>,
}

/// Response of `gh project item-add`.
#[derive(Debug, Deserialize)]
pub struct AddedItem {
    pub id: String,
}
