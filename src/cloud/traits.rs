//! Common traits for cloud resources

/// Common trait for listable resources (projects, regions, volumes, stacks)
///
/// Gives commands one way to identify, filter and look up records
/// regardless of whether the service uses numeric or string IDs.
pub trait CloudResource {
    /// Get the resource ID as a string
    fn resource_id(&self) -> String;

    /// Get the human-readable name
    fn name(&self) -> &str;

    /// Check if the resource matches by name or ID
    ///
    /// Default implementation checks for exact match on either field.
    fn matches(&self, input: &str) -> bool {
        self.resource_id() == input || self.name() == input
    }

    /// Case-insensitive substring match on the name
    fn name_contains(&self, filter: &str) -> bool {
        self.name().to_lowercase().contains(&filter.to_lowercase())
    }
}

/// Keep only records whose name contains `filter`
pub fn apply_name_filter<T: CloudResource>(records: &mut Vec<T>, filter: Option<&str>) {
    if let Some(filter) = filter {
        records.retain(|r| r.name_contains(filter));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestResource {
        id: u64,
        name: String,
    }

    impl CloudResource for TestResource {
        fn resource_id(&self) -> String {
            self.id.to_string()
        }

        fn name(&self) -> &str {
            &self.name
        }
    }

    fn resource(id: u64, name: &str) -> TestResource {
        TestResource {
            id,
            name: name.to_string(),
        }
    }

    #[test]
    fn test_matches_by_id() {
        assert!(resource(76, "Luxembourg").matches("76"));
    }

    #[test]
    fn test_matches_by_name() {
        assert!(resource(76, "Luxembourg").matches("Luxembourg"));
    }

    #[test]
    fn test_no_match() {
        assert!(!resource(76, "Luxembourg").matches("other"));
    }

    #[test]
    fn test_name_contains_is_case_insensitive() {
        assert!(resource(1, "Frankfurt-2").name_contains("frank"));
        assert!(!resource(1, "Frankfurt-2").name_contains("paris"));
    }

    #[test]
    fn test_apply_name_filter() {
        let mut records = vec![resource(1, "data-1"), resource(2, "boot"), resource(3, "DATA-2")];
        apply_name_filter(&mut records, Some("data"));
        let ids: Vec<u64> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_apply_name_filter_none_keeps_all() {
        let mut records = vec![resource(1, "a"), resource(2, "b")];
        apply_name_filter(&mut records, None);
        assert_eq!(records.len(), 2);
    }
}
