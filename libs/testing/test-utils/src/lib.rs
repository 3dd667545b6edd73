//! Shared test utilities for domain testing
//!
//! This crate provides reusable test infrastructure for all domain crates:
//! - `TestDatabase`: in-memory SQLite, one private database per instance (always available)
//! - `TestPostgres`: PostgreSQL container with automatic cleanup (feature: "postgres")
//! - `TestDataBuilder`: Deterministic test data generation (always available)
//! - `assertions`: Custom assertion helpers (always available)
//!
//! # Features
//!
//! - `postgres`: Enables PostgreSQL test infrastructure (needs Docker)
//!
//! # Usage
//!
//! ```rust,no_run
//! use test_utils::{TestDatabase, TestDataBuilder};
//!
//! #[tokio::test]
//! async fn my_test() {
//!     let db = TestDatabase::new().await;
//!     let builder = TestDataBuilder::from_test_name("my_test");
//!
//!     let title = builder.name("task", "main");
//! }
//! ```

mod sqlite;

#[cfg(feature = "postgres")]
mod postgres;

pub use sqlite::TestDatabase;

#[cfg(feature = "postgres")]
pub use postgres::TestPostgres;

/// Builder for test data with deterministic randomization
///
/// This ensures tests are reproducible by using seeded data.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    /// Create a new builder with a seed (for deterministic tests)
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (generates seed from test name hash)
    ///
    /// # Example
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_task");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Generate a unique name for testing
    ///
    /// # Arguments
    ///
    /// * `prefix` - The type of resource (e.g., "task", "category")
    /// * `suffix` - A unique identifier within the test (e.g., "main", "backup")
    ///
    /// # Example
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("my_test");
    /// let name = builder.name("task", "main");
    /// assert!(name.starts_with("test-task-"));
    /// assert!(name.ends_with("-main"));
    /// ```
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }

    /// An ISO 8601 date `days` days after 2030-01-01, for deadlines that
    /// sort predictably.
    pub fn date(&self, days: u32) -> String {
        let day = days % 28 + 1;
        let month = (days / 28) % 12 + 1;
        format!("2030-{:02}-{:02}", month, day)
    }
}

/// Test assertion helpers
pub mod assertions {
    /// Assert that an optional value is Some
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }

    /// Assert that `items` are in non-decreasing order of `key`
    pub fn assert_sorted_by<T, K, F>(items: &[T], key: F, context: &str)
    where
        K: PartialOrd + std::fmt::Debug,
        F: Fn(&T) -> K,
    {
        for (index, pair) in items.windows(2).enumerate() {
            let (left, right) = (key(&pair[0]), key(&pair[1]));
            assert!(
                left <= right,
                "{}: items {} and {} out of order ({:?} > {:?})",
                context,
                index,
                index + 1,
                left,
                right
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_builder_deterministic() {
        let builder1 = TestDataBuilder::new(42);
        let builder2 = TestDataBuilder::new(42);

        assert_eq!(builder1.name("task", "test"), builder2.name("task", "test"));
    }

    #[test]
    fn test_data_builder_different_names() {
        let builder1 = TestDataBuilder::from_test_name("test1");
        let builder2 = TestDataBuilder::from_test_name("test2");

        // Different test names should generate different data
        assert_ne!(builder1.name("task", "a"), builder2.name("task", "a"));
    }

    #[test]
    fn test_dates_sort_with_offset() {
        let builder = TestDataBuilder::new(1);
        assert_eq!(builder.date(0), "2030-01-01");
        assert_eq!(builder.date(27), "2030-01-28");
        assert_eq!(builder.date(28), "2030-02-01");
        assert!(builder.date(3) < builder.date(40));
    }

    #[test]
    fn test_assert_sorted_by_accepts_ties() {
        assertions::assert_sorted_by(&[1, 2, 2, 5], |n| *n, "ints");
    }

    #[test]
    #[should_panic(expected = "out of order")]
    fn test_assert_sorted_by_rejects_descending() {
        assertions::assert_sorted_by(&[3, 1], |n| *n, "ints");
    }
}
