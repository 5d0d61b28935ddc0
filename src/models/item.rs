use serde::Deserialize;
use serde_json::{Number, Value};

use super::Connection;
use crate::logging::log_debug;

/// One row of a project board.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectItem {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub content: Option<ItemContent>,
    #[serde(default)]
    pub field_values: Connection<RawFieldValue>,
}

impl ProjectItem {
    /// Decode one item node from an items page.
    ///
    /// Null nodes are skipped. A node that does not decode keeps only its id,
    /// so a malformed item loses columns instead of failing the export.
    pub fn from_node(node: Value) -> Option<Self> {
        if node.is_null() {
            return None;
        }

        match serde_json::from_value::<ProjectItem>(node.clone()) {
            Ok(item) => Some(item),
            Err(e) => {
                let id = node
                    .get("id")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string();
                log_debug(&format!("Item {} could not be decoded, keeping id only: {}", id, e));
                Some(ProjectItem {
                    id,
                    ..ProjectItem::default()
                })
            }
        }
    }
}

/// What a project item points at.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawContent")]
pub enum ItemContent {
    DraftIssue,
    Issue(IssueContent),
    PullRequest(IssueContent),
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct IssueContent {
    pub number: Option<u64>,
    pub url: Option<String>,
    pub labels: Vec<String>,
}

impl ItemContent {
    pub fn number(&self) -> Option<u64> {
        self.details().and_then(|details| details.number)
    }

    pub fn url(&self) -> Option<&str> {
        self.details().and_then(|details| details.url.as_deref())
    }

    pub fn labels(&self) -> &[String] {
        self.details().map(|details| details.labels.as_slice()).unwrap_or_default()
    }

    fn details(&self) -> Option<&IssueContent> {
        match self {
            ItemContent::Issue(details) | ItemContent::PullRequest(details) => Some(details),
            ItemContent::DraftIssue | ItemContent::Unknown => None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawContent {
    #[serde(rename = "__typename")]
    typename: Option<String>,
    title: Option<String>,
    number: Option<u64>,
    url: Option<String>,
    labels: Option<Connection<Label>>,
}

#[derive(Debug, Deserialize)]
struct Label {
    name: String,
}

impl From<RawContent> for ItemContent {
    fn from(raw: RawContent) -> Self {
        let labels = raw
            .labels
            .map(|connection| connection.nodes.into_iter().map(|label| label.name).collect())
            .unwrap_or_default();
        let details = IssueContent {
            number: raw.number,
            url: raw.url,
            labels,
        };

        match raw.typename.as_deref() {
            Some("DraftIssue") => ItemContent::DraftIssue,
            Some("Issue") => ItemContent::Issue(details),
            Some("PullRequest") => ItemContent::PullRequest(details),
            Some(_) => ItemContent::Unknown,
            // Without a typename, fall back to the shape of the payload
            None if details.number.is_some() || details.url.is_some() => ItemContent::Issue(details),
            None if raw.title.is_some() => ItemContent::DraftIssue,
            None => ItemContent::Unknown,
        }
    }
}

/// A field value node as GitHub returns it: every slot a fragment may
/// populate, plus the field it belongs to.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawFieldValue {
    pub text: Option<String>,
    pub number: Option<Number>,
    pub title: Option<String>,
    pub name: Option<String>,
    pub milestone: Option<TitleRef>,
    pub repository: Option<NameRef>,
    pub users: Option<Connection<LoginRef>>,
    pub date: Option<String>,
    pub field: Option<NameRef>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TitleRef {
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NameRef {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginRef {
    pub login: Option<String>,
}

impl RawFieldValue {
    pub fn field_name(&self) -> Option<&str> {
        self.field.as_ref().and_then(|field| field.name.as_deref())
    }
}

/// The single scalar carried by a field value node.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(Number),
    Iteration(String),
    SingleSelect(String),
    Milestone(String),
    Repository(String),
    User(String),
    Date(String),
    Empty,
}

impl FieldValue {
    /// Pick the populated slot of a raw node.
    ///
    /// Slots are checked in a fixed order (text, number, iteration title,
    /// single-select name, milestone, repository, first user, date) and the
    /// first present one wins.
    pub fn from_raw(raw: &RawFieldValue) -> Self {
        if let Some(text) = &raw.text {
            return FieldValue::Text(text.clone());
        }
        if let Some(number) = &raw.number {
            return FieldValue::Number(number.clone());
        }
        if let Some(title) = &raw.title {
            return FieldValue::Iteration(title.clone());
        }
        if let Some(name) = &raw.name {
            return FieldValue::SingleSelect(name.clone());
        }
        if let Some(title) = raw.milestone.as_ref().and_then(|m| m.title.as_ref()) {
            return FieldValue::Milestone(title.clone());
        }
        if let Some(name) = raw.repository.as_ref().and_then(|r| r.name.as_ref()) {
            return FieldValue::Repository(name.clone());
        }
        let first_login = raw
            .users
            .as_ref()
            .and_then(|users| users.nodes.first())
            .and_then(|user| user.login.as_ref());
        if let Some(login) = first_login {
            return FieldValue::User(login.clone());
        }
        if let Some(date) = &raw.date {
            return FieldValue::Date(date.clone());
        }
        FieldValue::Empty
    }

    pub fn into_scalar(self) -> Option<String> {
        match self {
            FieldValue::Text(value)
            | FieldValue::Iteration(value)
            | FieldValue::SingleSelect(value)
            | FieldValue::Milestone(value)
            | FieldValue::Repository(value)
            | FieldValue::User(value)
            | FieldValue::Date(value) => Some(value),
            FieldValue::Number(number) => Some(number.to_string()),
            FieldValue::Empty => None,
        }
    }
}
