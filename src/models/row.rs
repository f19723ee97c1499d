use super::category::ExceptionCategory;
use std::collections::BTreeSet;

/// One exception-bearing row of the payroll review sheet.
///
/// Two rows with the same field values are still two different rows: the
/// aggregation layer keys them by [`RowId`], never by content.
#[derive(Debug, Clone, Default)]
pub struct RowRecord {
    pub comm_code: String,
    pub department: String,
    pub associate_name: String,
    pub associate_id: String,
    pub categories: BTreeSet<ExceptionCategory>, // triggered upstream ("x" flags)
}

impl RowRecord {
    pub fn new(department: &str, associate_name: &str, associate_id: &str) -> Self {
        Self {
            comm_code: String::new(),
            department: department.to_string(),
            associate_name: associate_name.to_string(),
            associate_id: associate_id.to_string(),
            categories: BTreeSet::new(),
        }
    }

    /// Builder-style helper used by ingestion and tests.
    pub fn with_categories<I>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = ExceptionCategory>,
    {
        self.categories.extend(categories);
        self
    }

    pub fn triggers(&self, category: ExceptionCategory) -> bool {
        self.categories.contains(&category)
    }
}

/// Opaque handle to a row occurrence inside an [`ExceptionBook`].
///
/// Handles order by ingestion sequence.
///
/// [`ExceptionBook`]: crate::core::book::ExceptionBook
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowId(pub(crate) usize);
