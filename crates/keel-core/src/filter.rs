//! Transaction list filtering
//!
//! The expense view's search box and category dropdown, as a pure
//! predicate over the transaction list.

use crate::models::Transaction;

/// Filter for the transaction list
///
/// `search` matches case-insensitively against merchant and description;
/// `category` must match exactly. `None` means "no restriction" (the
/// dropdown's "all" entry).
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    pub search: Option<String>,
    pub category: Option<String>,
}

impl TransactionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search term
    pub fn search(mut self, term: Option<String>) -> Self {
        self.search = term;
        self
    }

    /// Set the category restriction
    pub fn category(mut self, category: Option<String>) -> Self {
        self.category = category;
        self
    }

    /// Whether a transaction passes the filter
    pub fn matches(&self, tx: &Transaction) -> bool {
        let matches_search = match &self.search {
            Some(term) => {
                let term = term.to_lowercase();
                tx.merchant.to_lowercase().contains(&term)
                    || tx
                        .description
                        .as_ref()
                        .is_some_and(|d| d.to_lowercase().contains(&term))
            }
            None => true,
        };
        let matches_category = match &self.category {
            Some(category) => tx.category == *category,
            None => true,
        };
        matches_search && matches_category
    }

    /// Apply the filter, preserving order
    pub fn apply<'a>(&self, transactions: &'a [Transaction]) -> Vec<&'a Transaction> {
        transactions.iter().filter(|tx| self.matches(tx)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample;

    #[test]
    fn test_empty_filter_passes_everything() {
        let ledger = sample::demo_ledger();
        let filter = TransactionFilter::new();
        assert_eq!(filter.apply(&ledger.transactions).len(), ledger.transactions.len());
    }

    #[test]
    fn test_search_matches_merchant_case_insensitively() {
        let ledger = sample::demo_ledger();
        let filter = TransactionFilter::new().search(Some("uber".to_string()));
        let hits = filter.apply(&ledger.transactions);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].merchant, "Uber");
    }

    #[test]
    fn test_search_matches_description() {
        let ledger = sample::demo_ledger();
        let filter = TransactionFilter::new().search(Some("electric bill".to_string()));
        let hits = filter.apply(&ledger.transactions);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].merchant, "Electric Company");
    }

    #[test]
    fn test_category_must_match_exactly() {
        let ledger = sample::demo_ledger();
        let filter = TransactionFilter::new().category(Some("Food & Dining".to_string()));
        let hits = filter.apply(&ledger.transactions);
        assert_eq!(hits.len(), 1);

        let filter = TransactionFilter::new().category(Some("Food".to_string()));
        assert!(filter.apply(&ledger.transactions).is_empty());
    }

    #[test]
    fn test_search_and_category_combine() {
        let ledger = sample::demo_ledger();
        let filter = TransactionFilter::new()
            .search(Some("coffee".to_string()))
            .category(Some("Transportation".to_string()));
        assert!(filter.apply(&ledger.transactions).is_empty());
    }
}
