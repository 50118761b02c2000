//! Record filtering for the list views.
//!
//! Filtering never reorders: the output is a subsequence of the input, so
//! the store's descending-date contract carries through unchanged.

use api_types::expense::Expense;

/// Category side of the list filter: everything, or one exact label.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Category(label) => label.as_str(),
        }
    }

    #[must_use]
    pub fn matches(&self, expense: &Expense) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(label) => expense.category == *label,
        }
    }
}

/// Selects the records matching the category filter AND the search term.
///
/// The search is a case-insensitive substring match over title and
/// description, taken verbatim: surrounding whitespace in the term is
/// significant. An absent description simply never matches. An empty search
/// term matches everything, so `All` plus an empty term is the identity.
#[must_use]
pub fn filter<'a>(
    expenses: &'a [Expense],
    category: &CategoryFilter,
    search: &str,
) -> Vec<&'a Expense> {
    let needle = search.to_lowercase();
    expenses
        .iter()
        .filter(|expense| category.matches(expense) && matches_search(expense, &needle))
        .collect()
}

/// The first `n` records in store order. The engine never re-sorts; stable
/// recency is the store's responsibility.
#[must_use]
pub fn recent(expenses: &[Expense], n: usize) -> &[Expense] {
    &expenses[..n.min(expenses.len())]
}

fn matches_search(expense: &Expense, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    if expense.title.to_lowercase().contains(needle) {
        return true;
    }
    expense
        .description
        .as_deref()
        .is_some_and(|d| d.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn expense(title: &str, category: &str, description: Option<&str>) -> Expense {
        Expense {
            id: format!("id-{title}"),
            title: title.to_string(),
            amount: 10.0,
            category: category.to_string(),
            description: description.map(str::to_string),
            date: Utc::now(),
        }
    }

    #[test]
    fn all_and_empty_search_is_identity() {
        let records = vec![
            expense("Uber ride", "Transport", None),
            expense("Dinner", "Food", Some("with friends")),
        ];

        let out = filter(&records, &CategoryFilter::All, "");
        let titles: Vec<_> = out.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Uber ride", "Dinner"]);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let records = vec![
            expense("Uber ride", "Transport", None),
            expense("Dinner", "Food", None),
        ];

        let out = filter(&records, &CategoryFilter::All, "uber");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].title, "Uber ride");
    }

    #[test]
    fn search_term_is_taken_verbatim() {
        let records = vec![expense("Uber ride", "Transport", None)];

        // "uber " (with the space) is a substring of the title as given.
        assert_eq!(filter(&records, &CategoryFilter::All, "uber ").len(), 1);
        // A leading space is part of the term, not noise to strip.
        assert!(filter(&records, &CategoryFilter::All, " uber").is_empty());
        assert!(filter(&records, &CategoryFilter::All, "ride ").is_empty());
    }

    #[test]
    fn search_also_covers_description() {
        let records = vec![
            expense("Groceries", "Food", Some("weekly Costco run")),
            expense("Cinema", "Entertainment", None),
        ];

        let out = filter(&records, &CategoryFilter::All, "costco");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].title, "Groceries");
    }

    #[test]
    fn missing_description_does_not_match_or_panic() {
        let records = vec![expense("Cinema", "Entertainment", None)];
        assert!(filter(&records, &CategoryFilter::All, "popcorn").is_empty());
    }

    #[test]
    fn category_filter_is_exact() {
        let records = vec![
            expense("Bus", "Transport", None),
            expense("Lunch", "Food", None),
        ];

        let food = CategoryFilter::Category("Food".to_string());
        let out = filter(&records, &food, "");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].category, "Food");
    }

    #[test]
    fn filtering_is_idempotent() {
        let records = vec![
            expense("Uber ride", "Transport", None),
            expense("Dinner", "Food", None),
            expense("Metro card", "Transport", None),
        ];

        let category = CategoryFilter::Category("Transport".to_string());
        let once: Vec<Expense> = filter(&records, &category, "ride")
            .into_iter()
            .cloned()
            .collect();
        let twice = filter(&once, &category, "ride");

        assert_eq!(once.len(), twice.len());
        assert!(once.iter().zip(twice).all(|(a, b)| a == b));
    }

    #[test]
    fn recent_takes_store_order_head() {
        let records = vec![
            expense("a", "Food", None),
            expense("b", "Food", None),
            expense("c", "Food", None),
        ];

        assert_eq!(recent(&records, 2).len(), 2);
        assert_eq!(recent(&records, 2)[0].title, "a");
        assert_eq!(recent(&records, 10).len(), 3);
    }
}
