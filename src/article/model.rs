//! Article entity, request shapes and their constraint tables

use crate::core::validation::{Constrained, Constraint, ConstraintSet, FieldRules, WireName};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Singular resource name used in errors and logs
pub const ARTICLE: &str = "article";

/// Accepted status values, in the order they are reported
pub const ARTICLE_STATUSES: &[&str] = &["publish", "draft", "thrash"];

/// Publication state of an article
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleStatus {
    Publish,
    Draft,
    Thrash,
}

impl ArticleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleStatus::Publish => "publish",
            ArticleStatus::Draft => "draft",
            ArticleStatus::Thrash => "thrash",
        }
    }
}

impl fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown article status '{0}'")]
pub struct UnknownStatus(pub String);

impl FromStr for ArticleStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "publish" => Ok(ArticleStatus::Publish),
            "draft" => Ok(ArticleStatus::Draft),
            "thrash" => Ok(ArticleStatus::Thrash),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

impl TryFrom<String> for ArticleStatus {
    type Error = UnknownStatus;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A stored article
///
/// `id`, `created_at` and `updated_at` are assigned by storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "mysql", derive(sqlx::FromRow))]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub category: String,
    #[cfg_attr(feature = "mysql", sqlx(try_from = "String"))]
    pub status: ArticleStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Field values for an insert or a full-row update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleFields {
    pub title: String,
    pub content: String,
    pub category: String,
    pub status: ArticleStatus,
}

impl From<&Article> for ArticleFields {
    fn from(article: &Article) -> Self {
        Self {
            title: article.title.clone(),
            content: article.content.clone(),
            category: article.category.clone(),
            status: article.status,
        }
    }
}

// ---------------------------------------------------------------------------
// Request shapes
// ---------------------------------------------------------------------------

static CREATE_TITLE: &[Constraint] = &[Constraint::Required, Constraint::Min(20)];
static CREATE_CONTENT: &[Constraint] = &[Constraint::Required, Constraint::Min(200)];
static CREATE_CATEGORY: &[Constraint] = &[Constraint::Required, Constraint::Min(3)];
static CREATE_STATUS: &[Constraint] = &[Constraint::Required, Constraint::OneOf(ARTICLE_STATUSES)];

static CREATE_FIELDS: &[FieldRules] = &[
    FieldRules::new("Title", WireName::Named("title"), CREATE_TITLE),
    FieldRules::new("Content", WireName::Named("content"), CREATE_CONTENT),
    FieldRules::new("Category", WireName::Named("category"), CREATE_CATEGORY),
    FieldRules::new("Status", WireName::Named("status"), CREATE_STATUS),
];

/// Rules for `POST /articles`
pub static CREATE_ARTICLE_RULES: ConstraintSet =
    ConstraintSet::new("CreateArticleRequest", CREATE_FIELDS);

static UPDATE_TITLE: &[Constraint] = &[Constraint::Min(20)];
static UPDATE_CONTENT: &[Constraint] = &[Constraint::Min(200)];
static UPDATE_CATEGORY: &[Constraint] = &[Constraint::Min(3)];
static UPDATE_STATUS: &[Constraint] = &[Constraint::OneOf(ARTICLE_STATUSES)];

static UPDATE_FIELDS: &[FieldRules] = &[
    FieldRules::optional("Title", WireName::Named("title"), UPDATE_TITLE),
    FieldRules::optional("Content", WireName::Named("content"), UPDATE_CONTENT),
    FieldRules::optional("Category", WireName::Named("category"), UPDATE_CATEGORY),
    FieldRules::optional("Status", WireName::Named("status"), UPDATE_STATUS),
];

/// Rules for `PUT /articles/{id}`; every field may be left out
pub static UPDATE_ARTICLE_RULES: ConstraintSet =
    ConstraintSet::new("UpdateArticleRequest", UPDATE_FIELDS);

/// Body of a create request
///
/// Fields are optional at the serde level so a missing field surfaces as a
/// `required` violation rather than a parse failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateArticleRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl Constrained for CreateArticleRequest {
    fn constraint_set() -> &'static ConstraintSet {
        &CREATE_ARTICLE_RULES
    }

    fn field_value(&self, field: &str) -> Option<&str> {
        match field {
            "Title" => self.title.as_deref(),
            "Content" => self.content.as_deref(),
            "Category" => self.category.as_deref(),
            "Status" => self.status.as_deref(),
            _ => None,
        }
    }
}

/// Body of a partial update; empty fields mean "leave unchanged"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateArticleRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl Constrained for UpdateArticleRequest {
    fn constraint_set() -> &'static ConstraintSet {
        &UPDATE_ARTICLE_RULES
    }

    fn field_value(&self, field: &str) -> Option<&str> {
        match field {
            "Title" => self.title.as_deref(),
            "Content" => self.content.as_deref(),
            "Category" => self.category.as_deref(),
            "Status" => self.status.as_deref(),
            _ => None,
        }
    }
}

/// List filter; every part is optional and parts combine with AND
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilter {
    /// Case-insensitive substring of the title
    pub title: Option<String>,
    /// Exact category
    pub category: Option<String>,
    /// Exact status
    pub status: Option<ArticleStatus>,
}

impl ListFilter {
    /// Lower-cased, trimmed title needle; `None` when it would match everything
    pub fn title_needle(&self) -> Option<String> {
        self.title
            .as_deref()
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty())
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }

    /// Whether an article passes every filter that is set
    pub fn matches(&self, article: &Article) -> bool {
        self.title_needle()
            .is_none_or(|needle| article.title.to_lowercase().contains(&needle))
            && self.category().is_none_or(|c| article.category == c)
            && self.status.is_none_or(|s| article.status == s)
    }
}

/// One page of articles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse {
    pub items: Vec<Article>,
    pub meta: crate::core::query::PaginationMeta,
}
