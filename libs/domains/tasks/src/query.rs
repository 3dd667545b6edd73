//! Translates list parameters into a filter and ordering over `tasks`.
//!
//! Only whitelisted columns are ever filtered or sorted on, and values are
//! bound as parameters, never spliced into SQL.

use sea_orm::{ColumnTrait, QueryFilter, QueryOrder, Select};
use serde::Deserialize;
use std::collections::HashMap;
use utoipa::IntoParams;

use crate::entity;
use crate::models::TaskPriority;

/// Query string accepted by `GET /tasks`
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListTasksParams {
    /// Exact category match
    pub category: Option<String>,
    /// `Low`, `Medium` or `High`; any other value is ignored
    pub priority: Option<String>,
    /// `deadline` (ascending) or `createdAt` (newest first)
    pub sort_by: Option<String>,
}

/// Collects raw query pairs. A key sent more than once names no single
/// value and is treated as absent; unknown keys are dropped.
impl FromIterator<(String, String)> for ListTasksParams {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut values: HashMap<String, Option<String>> = HashMap::new();
        for (key, value) in pairs {
            values
                .entry(key)
                .and_modify(|existing| *existing = None)
                .or_insert(Some(value));
        }

        let mut take = |key: &str| values.remove(key).flatten();
        ListTasksParams {
            category: take("category"),
            priority: take("priority"),
            sort_by: take("sortBy"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskSort {
    DeadlineAsc,
    CreatedAtDesc,
}

impl TaskSort {
    /// Maps a `sortBy` value; unknown keys give `None` (datastore order).
    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "deadline" => Some(TaskSort::DeadlineAsc),
            "createdAt" => Some(TaskSort::CreatedAtDesc),
            _ => None,
        }
    }
}

/// Conjunctive filter plus optional ordering for listing tasks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskQuery {
    category: Option<String>,
    priority: Option<TaskPriority>,
    sort: Option<TaskSort>,
}

impl TaskQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn sorted_by(mut self, sort: TaskSort) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn priority(&self) -> Option<TaskPriority> {
        self.priority
    }

    pub fn sort(&self) -> Option<TaskSort> {
        self.sort
    }

    pub fn is_unfiltered(&self) -> bool {
        self.category.is_none() && self.priority.is_none()
    }

    /// Adds the WHERE and ORDER BY clauses to `select`.
    pub fn apply(self, mut select: Select<entity::Entity>) -> Select<entity::Entity> {
        if let Some(category) = self.category {
            select = select.filter(entity::Column::Category.eq(category));
        }

        if let Some(priority) = self.priority {
            select = select.filter(entity::Column::Priority.eq(priority));
        }

        match self.sort {
            Some(TaskSort::DeadlineAsc) => select.order_by_asc(entity::Column::Deadline),
            Some(TaskSort::CreatedAtDesc) => select.order_by_desc(entity::Column::CreatedAt),
            None => select,
        }
    }
}

impl From<ListTasksParams> for TaskQuery {
    fn from(params: ListTasksParams) -> Self {
        let non_empty = |value: Option<String>| value.filter(|v| !v.is_empty());

        TaskQuery {
            category: non_empty(params.category),
            priority: non_empty(params.priority).and_then(|p| p.parse().ok()),
            sort: params.sort_by.as_deref().and_then(TaskSort::from_param),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DbBackend, EntityTrait, QueryTrait};

    fn params(category: Option<&str>, priority: Option<&str>, sort_by: Option<&str>) -> ListTasksParams {
        ListTasksParams {
            category: category.map(String::from),
            priority: priority.map(String::from),
            sort_by: sort_by.map(String::from),
        }
    }

    fn sql(query: TaskQuery) -> String {
        query
            .apply(entity::Entity::find())
            .build(DbBackend::Postgres)
            .to_string()
    }

    #[test]
    fn test_no_params_is_unfiltered_and_unordered() {
        let query = TaskQuery::from(ListTasksParams::default());
        assert!(query.is_unfiltered());
        assert_eq!(query.sort(), None);

        let sql = sql(query);
        assert!(!sql.contains("WHERE"));
        assert!(!sql.contains("ORDER BY"));
    }

    #[test]
    fn test_unknown_priority_is_ignored() {
        let query = TaskQuery::from(params(None, Some("Urgent"), None));
        assert_eq!(query.priority(), None);

        let query = TaskQuery::from(params(None, Some("high"), None));
        assert_eq!(query.priority(), None);
    }

    #[test]
    fn test_empty_strings_count_as_absent() {
        let query = TaskQuery::from(params(Some(""), Some(""), Some("")));
        assert!(query.is_unfiltered());
        assert_eq!(query.sort(), None);
    }

    #[test]
    fn test_filters_are_conjunctive() {
        let query = TaskQuery::from(params(Some("work"), Some("High"), None));
        assert_eq!(query.category(), Some("work"));
        assert_eq!(query.priority(), Some(TaskPriority::High));

        let sql = sql(query);
        assert!(sql.contains(r#""tasks"."category" = 'work'"#));
        assert!(sql.contains(" AND "));
        assert!(sql.contains(r#""tasks"."priority" = 'High'"#));
    }

    #[test]
    fn test_sort_keys() {
        assert_eq!(
            TaskQuery::from(params(None, None, Some("deadline"))).sort(),
            Some(TaskSort::DeadlineAsc)
        );
        assert_eq!(
            TaskQuery::from(params(None, None, Some("createdAt"))).sort(),
            Some(TaskSort::CreatedAtDesc)
        );
        assert_eq!(TaskQuery::from(params(None, None, Some("title"))).sort(), None);
    }

    #[test]
    fn test_sort_renders_order_clause() {
        let sql_deadline = sql(TaskQuery::new().sorted_by(TaskSort::DeadlineAsc));
        assert!(sql_deadline.contains(r#"ORDER BY "tasks"."deadline" ASC"#));

        let sql_created = sql(TaskQuery::new().sorted_by(TaskSort::CreatedAtDesc));
        assert!(sql_created.contains(r#"ORDER BY "tasks"."created_at" DESC"#));
    }

    fn pairs(raw: &[(&str, &str)]) -> ListTasksParams {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_pairs_map_to_params() {
        let params = pairs(&[("category", "work"), ("priority", "High"), ("sortBy", "deadline"), ("owner", "x")]);
        assert_eq!(params.category.as_deref(), Some("work"));
        assert_eq!(params.priority.as_deref(), Some("High"));
        assert_eq!(params.sort_by.as_deref(), Some("deadline"));
    }

    #[test]
    fn test_repeated_key_is_ignored() {
        let params = pairs(&[("priority", "Low"), ("category", "work"), ("priority", "High")]);
        assert_eq!(params.priority, None);
        assert_eq!(params.category.as_deref(), Some("work"));

        let query = TaskQuery::from(params);
        assert_eq!(query.priority(), None);
        assert_eq!(query.category(), Some("work"));

        let params = pairs(&[("sortBy", "deadline"), ("sortBy", "deadline"), ("sortBy", "createdAt")]);
        assert_eq!(TaskQuery::from(params).sort(), None);
    }

    #[test]
    fn test_category_is_bound_not_spliced() {
        let query = TaskQuery::new().with_category("x' OR '1'='1");
        let statement = query.apply(entity::Entity::find()).build(DbBackend::Postgres);
        assert!(statement.sql.contains("$1"));
        assert!(!statement.sql.contains("OR '1'='1"));
    }
}
