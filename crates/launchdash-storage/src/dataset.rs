//! The immutable, in-memory launch dataset.

use launchdash_core::LaunchRecord;

use crate::options::SelectionOptions;

/// Ordered launch records plus the selection options derived from them.
///
/// Fields are private: once constructed, neither the records nor the derived
/// options can change. Share it behind an `Arc` and pass `&Dataset` around.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Vec<LaunchRecord>,
    options: SelectionOptions,
}

impl Dataset {
    /// Build from already-parsed records. Record order is kept as given.
    /// No validation is performed here; see [`crate::read_csv`] for that.
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        let options = SelectionOptions::derive(&records);
        Self { records, options }
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LaunchRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct sites and payload bounds, computed once at construction.
    pub fn options(&self) -> &SelectionOptions {
        &self.options
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a LaunchRecord;
    type IntoIter = std::slice::Iter<'a, LaunchRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use launchdash_core::{Outcome, PayloadRange};

    #[test]
    fn test_from_records_keeps_order_and_derives_options() {
        let dataset = Dataset::from_records(vec![
            LaunchRecord::new("B", 800.0, Outcome::Success, "v2"),
            LaunchRecord::new("A", 500.0, Outcome::Success, "v1"),
            LaunchRecord::new("A", 1500.0, Outcome::Failure, "v1"),
        ]);
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.records()[0].site, "B");
        assert_eq!(dataset.options().sites(), ["A".to_string(), "B".to_string()]);
        assert_eq!(
            dataset.options().payload_bounds(),
            Some(PayloadRange::new(500.0, 1500.0))
        );
    }

    #[test]
    fn test_empty_dataset_has_no_bounds() {
        let dataset = Dataset::from_records(Vec::new());
        assert!(dataset.is_empty());
        assert!(dataset.options().sites().is_empty());
        assert_eq!(dataset.options().payload_bounds(), None);
    }
}
