use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod expense {
    use super::*;

    /// A single spending event as held by the remote collection.
    ///
    /// The record set is always a direct reflection of the last successful
    /// fetch: a full list replaces the prior list, there is no client-side
    /// merge.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct Expense {
        /// Opaque identifier assigned by the store on creation.
        ///
        /// Stable for the record's lifetime; never produced client-side.
        #[serde(rename = "_id")]
        pub id: String,
        pub title: String,
        /// Decimal amount, never negative.
        pub amount: f64,
        /// Open label set: the client knows eight categories but the store
        /// accepts any string.
        pub category: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub description: Option<String>,
        /// RFC3339 timestamp; the store defaults it to creation time.
        pub date: DateTime<Utc>,
    }

    /// Request body for creating an expense.
    ///
    /// The store assigns `_id` and, when `date` is absent, stamps the record
    /// with its own creation time.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct ExpenseNew {
        pub title: String,
        pub amount: f64,
        pub category: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub description: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub date: Option<DateTime<Utc>>,
    }
}

#[cfg(test)]
mod tests {
    use super::expense::{Expense, ExpenseNew};

    #[test]
    fn expense_deserializes_store_shape() {
        let body = r#"{
            "_id": "68a1f0c2b7",
            "title": "Uber ride",
            "amount": 12.5,
            "category": "Transport",
            "date": "2026-08-20T10:15:00Z"
        }"#;

        let expense: Expense = serde_json::from_str(body).unwrap();
        assert_eq!(expense.id, "68a1f0c2b7");
        assert_eq!(expense.amount, 12.5);
        assert_eq!(expense.description, None);
    }

    #[test]
    fn expense_new_omits_absent_fields() {
        let draft = ExpenseNew {
            title: "Dinner".to_string(),
            amount: 30.0,
            category: "Food".to_string(),
            description: None,
            date: None,
        };

        let body = serde_json::to_value(&draft).unwrap();
        assert!(body.get("description").is_none());
        assert!(body.get("date").is_none());
        assert!(body.get("_id").is_none());
    }
}
