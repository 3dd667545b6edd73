use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Deserializer, Serialize};
use std::borrow::Cow;
use strum::{Display, EnumString};
use utoipa::ToSchema;
use validator::{Validate, ValidationError, ValidationErrors};

pub const TITLE_REQUIRED: &str = "Title is required and cannot be empty";
pub const TITLE_EMPTY: &str = "Title cannot be empty";
pub const PRIORITY_INVALID: &str = "Priority must be one of: Low, Medium, High";
pub const DEADLINE_INVALID: &str = "Deadline must be a valid ISO 8601 date";

/// Task priority levels
///
/// Stored and serialized as the exact strings `Low`, `Medium`, `High`;
/// parsing is case-sensitive.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    DeriveActiveEnum,
    EnumIter,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum TaskPriority {
    #[sea_orm(string_value = "Low")]
    Low,
    #[sea_orm(string_value = "Medium")]
    Medium,
    #[sea_orm(string_value = "High")]
    High,
}

/// A persisted task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// System-assigned, never reused
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    /// Free-form grouping label
    pub category: Option<String>,
    pub priority: TaskPriority,
    pub deadline: DateTime<Utc>,
    /// Set once at creation
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /tasks`
///
/// Fields stay textual until validated so that every violated rule can be
/// reported at once. Unknown fields are ignored; `null` reads as absent.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateTask {
    #[schema(example = "Write quarterly report")]
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    #[schema(example = "High")]
    pub priority: Option<String>,
    #[schema(example = "2026-01-01T00:00:00.000Z")]
    pub deadline: Option<String>,
}

/// Body of `PUT /tasks/{id}`
///
/// The outer `Option` says whether the key was sent at all. An explicit
/// `null` clears `description` or `category` and fails the rule of any
/// other field.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateTask {
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub category: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub priority: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>, example = "2026-01-01")]
    pub deadline: Option<Option<String>>,
}

/// A create payload that passed validation, ready to persist.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub priority: TaskPriority,
    pub deadline: DateTime<Utc>,
}

/// The fields an update will overwrite; `None` leaves a column untouched.
///
/// `Some(None)` on `description` or `category` sets the column to NULL.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskChanges {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub category: Option<Option<String>>,
    pub priority: Option<TaskPriority>,
    pub deadline: Option<DateTime<Utc>>,
}

impl TaskChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.priority.is_none()
            && self.deadline.is_none()
    }
}

impl CreateTask {
    /// Checks every rule and returns the normalised task, or all violations.
    pub fn to_new_task(&self) -> Result<NewTask, ValidationErrors> {
        let mut violations = Violations::new();

        let title = violations.check("title", TITLE_REQUIRED, non_empty(self.title.as_deref()));
        let priority = violations.check(
            "priority",
            PRIORITY_INVALID,
            self.priority.as_deref().and_then(parse_priority),
        );
        let deadline = violations.check(
            "deadline",
            DEADLINE_INVALID,
            self.deadline.as_deref().and_then(parse_deadline),
        );

        match (title, priority, deadline) {
            (Some(title), Some(priority), Some(deadline)) => Ok(NewTask {
                title: title.to_string(),
                description: self.description.clone(),
                category: self.category.clone(),
                priority,
                deadline,
            }),
            // each missing value above recorded its violation
            _ => Err(violations.into_errors()),
        }
    }
}

impl UpdateTask {
    /// Checks the fields that were sent and returns the resulting changes.
    pub fn to_changes(&self) -> Result<TaskChanges, ValidationErrors> {
        let mut violations = Violations::new();

        let title = self
            .title
            .as_ref()
            .map(|title| violations.check("title", TITLE_EMPTY, non_empty(title.as_deref())));
        let priority = self.priority.as_ref().map(|priority| {
            violations.check(
                "priority",
                PRIORITY_INVALID,
                priority.as_deref().and_then(parse_priority),
            )
        });
        let deadline = self.deadline.as_ref().map(|deadline| {
            violations.check(
                "deadline",
                DEADLINE_INVALID,
                deadline.as_deref().and_then(parse_deadline),
            )
        });

        violations.into_result()?;

        Ok(TaskChanges {
            title: title.flatten().map(str::to_string),
            description: self.description.clone(),
            category: self.category.clone(),
            priority: priority.flatten(),
            deadline: deadline.flatten(),
        })
    }
}

impl Validate for CreateTask {
    fn validate(&self) -> Result<(), ValidationErrors> {
        self.to_new_task().map(|_| ())
    }
}

impl Validate for UpdateTask {
    fn validate(&self) -> Result<(), ValidationErrors> {
        self.to_changes().map(|_| ())
    }
}

impl TryFrom<CreateTask> for NewTask {
    type Error = ValidationErrors;

    fn try_from(input: CreateTask) -> Result<Self, Self::Error> {
        input.to_new_task()
    }
}

impl TryFrom<UpdateTask> for TaskChanges {
    type Error = ValidationErrors;

    fn try_from(input: UpdateTask) -> Result<Self, Self::Error> {
        input.to_changes()
    }
}

/// Parses the accepted deadline formats into UTC.
///
/// - RFC 3339 with offset: `2026-01-01T10:00:00+02:00`, `2026-01-01T00:00:00.000Z`
/// - date-time without offset, read as UTC: `2026-01-01T10:00:00`
/// - calendar date, read as midnight UTC: `2026-01-01`
pub fn parse_deadline(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Rule violations gathered across all fields before failing.
struct Violations {
    errors: ValidationErrors,
}

impl Violations {
    fn new() -> Self {
        Self {
            errors: ValidationErrors::new(),
        }
    }

    /// Records `message` against `field` when `value` is `None`.
    fn check<T>(&mut self, field: &'static str, message: &'static str, value: Option<T>) -> Option<T> {
        if value.is_none() {
            self.errors.add(field, rule_violation(field, message));
        }
        value
    }

    fn into_errors(self) -> ValidationErrors {
        self.errors
    }

    fn into_result(self) -> Result<(), ValidationErrors> {
        if self.errors.errors().is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

fn rule_violation(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn parse_priority(value: &str) -> Option<TaskPriority> {
    value.parse().ok()
}

/// Deserializes a key that may be sent as `null`: absent stays `None`
/// (via `#[serde(default)]`), present becomes `Some(value or None)`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
