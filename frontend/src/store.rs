//! Read-only application state shared with the statistics screen.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::StoreError;
use crate::model::{Category, Transaction, User};

const BUNDLED_SNAPSHOT: &str = include_str!("../data/store.json");

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub categories: Option<Vec<Category>>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub total_balance: Decimal,
}

impl Store {
    pub fn from_snapshot(raw: &str) -> Result<Self, StoreError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// The snapshot compiled into the bundle.
    pub fn bundled() -> Result<Self, StoreError> {
        Self::from_snapshot(BUNDLED_SNAPSHOT)
    }
}

pub fn select_transactions(store: &Store) -> &[Transaction] {
    &store.transactions
}

pub fn select_transaction_categories(store: &Store) -> Option<&[Category]> {
    store.categories.as_deref()
}

pub fn select_user(store: &Store) -> Option<&User> {
    store.user.as_ref()
}

pub fn select_total_balance(store: &Store) -> Decimal {
    store.total_balance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_snapshot_decodes() {
        let store = Store::bundled().unwrap();
        assert!(!select_transactions(&store).is_empty());
        assert!(select_transaction_categories(&store).is_some());
        assert_eq!(select_user(&store).map(|u| u.username.as_str()), Some("Olena"));
        assert_eq!(select_total_balance(&store), Decimal::new(240005, 1));
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let store = Store::from_snapshot("{}").unwrap();
        assert!(select_transactions(&store).is_empty());
        assert_eq!(select_transaction_categories(&store), None);
        assert_eq!(select_user(&store), None);
        assert_eq!(select_total_balance(&store), Decimal::ZERO);
    }

    #[test]
    fn null_comment_keeps_the_rest_of_the_snapshot() {
        let raw = r#"{"transactions":[
            {"id":"a","amount":-40,"type":"EXPENSE","categoryId":"c1","transactionDate":"2025-09-03","comment":"bus"},
            {"id":"b","amount":-60,"type":"EXPENSE","categoryId":"c1","transactionDate":"2025-09-04","comment":null}
        ]}"#;
        let store = Store::from_snapshot(raw).unwrap();
        let transactions = select_transactions(&store);
        assert_eq!(transactions.len(), 2);
        assert_eq!(transactions[0].comment, "bus");
        assert!(transactions[1].comment.is_empty());
    }

    #[test]
    fn store_equality_is_total() {
        // `Rc<T: Eq>` compares by pointer first, which keeps memo deps cheap.
        fn assert_eq_impl<T: Eq>() {}
        assert_eq_impl::<Store>();
    }

    #[test]
    fn malformed_snapshot_is_an_error() {
        assert!(matches!(
            Store::from_snapshot(r#"{"transactions": 3}"#),
            Err(StoreError::Decode(_))
        ));
    }
}
