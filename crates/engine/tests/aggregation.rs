use chrono::{TimeZone, Utc};

use api_types::expense::Expense;
use engine::{
    CategoryFilter, Currency, MoneyCents, Summary, budget_usage, category_breakdown,
    category_totals, export, filter, remaining_budget, total_spent,
};

fn expense(id: &str, title: &str, amount: f64, category: &str) -> Expense {
    Expense {
        id: id.to_string(),
        title: title.to_string(),
        amount,
        category: category.to_string(),
        description: None,
        date: Utc.with_ymd_and_hms(2026, 8, 20, 12, 0, 0).unwrap(),
    }
}

#[test]
fn worked_example_food_and_transport() {
    let records = vec![
        expense("1", "Groceries", 500.0, "Food"),
        expense("2", "Metro card", 300.0, "Transport"),
    ];
    let budget = MoneyCents::from_major(1000.0);

    let summary = Summary::compute(&records, budget);
    assert_eq!(summary.total_spent.format(Currency::Inr), "₹800.00");
    assert_eq!(summary.remaining_budget.format(Currency::Inr), "₹200.00");
    assert!((summary.usage_percent - 80.0).abs() < 1e-9);
    assert_eq!(summary.transactions, 2);

    let totals = category_totals(&records);
    assert_eq!(totals.len(), 2);
    assert_eq!(totals[0].category, "Food");
    assert_eq!(totals[0].total, MoneyCents::from_major(500.0));
    assert!((totals[0].percent - 62.5).abs() < 1e-9);
    assert_eq!(totals[1].category, "Transport");
    assert_eq!(totals[1].total, MoneyCents::from_major(300.0));
    assert!((totals[1].percent - 37.5).abs() < 1e-9);
}

#[test]
fn worked_example_empty_set() {
    let records: Vec<Expense> = Vec::new();
    let budget = MoneyCents::from_major(5000.0);

    let summary = Summary::compute(&records, budget);
    assert_eq!(summary.total_spent, MoneyCents::ZERO);
    assert_eq!(summary.total_spent.to_string(), "0.00");
    assert_eq!(summary.remaining_budget, budget);
    assert_eq!(summary.usage_percent, 0.0);
    assert!(category_totals(&records).is_empty());
}

#[test]
fn category_totals_sum_to_total_spend() {
    let records = vec![
        expense("1", "Lunch", 12.3, "Food"),
        expense("2", "Bus", 2.5, "Transport"),
        expense("3", "Dinner", 31.07, "Food"),
        expense("4", "Socks", 9.99, "Shopping"),
        expense("5", "Power bill", 44.44, "Bills"),
    ];

    let total = total_spent(&records);
    let by_category = category_totals(&records)
        .into_iter()
        .fold(MoneyCents::ZERO, |acc, entry| acc + entry.total);
    assert_eq!(by_category, total);
}

#[test]
fn category_percentages_sum_to_one_hundred() {
    let records = vec![
        expense("1", "Lunch", 19.0, "Food"),
        expense("2", "Bus", 7.0, "Transport"),
        expense("3", "Movie", 11.0, "Entertainment"),
    ];

    let percent_sum: f64 = category_totals(&records).iter().map(|c| c.percent).sum();
    assert!((percent_sum - 100.0).abs() < 1e-6);
}

#[test]
fn zero_spend_reports_zero_percent_per_category() {
    let records = vec![
        expense("1", "Freebie", 0.0, "Food"),
        expense("2", "Voucher", 0.0, "Shopping"),
    ];

    let totals = category_totals(&records);
    assert_eq!(totals.len(), 2);
    assert!(totals.iter().all(|c| c.percent == 0.0));
}

#[test]
fn breakdown_sorts_largest_first_and_keeps_unknown_labels() {
    let records = vec![
        expense("1", "Bus", 5.0, "Transport"),
        expense("2", "Llama rental", 90.0, "Llamas"),
        expense("3", "Lunch", 20.0, "Food"),
    ];

    let breakdown = category_breakdown(&records);
    let order: Vec<_> = breakdown.iter().map(|c| c.category.as_str()).collect();
    assert_eq!(order, vec!["Llamas", "Food", "Transport"]);
}

#[test]
fn zero_budget_yields_defined_usage() {
    let total = MoneyCents::from_major(120.0);
    let budget = MoneyCents::ZERO;

    // Documented sentinel: 0.0, never a division fault.
    assert_eq!(budget_usage(total, budget), 0.0);
    // Remaining budget still reflects the overspend.
    assert_eq!(remaining_budget(budget, total), -total);
}

#[test]
fn filter_search_matches_title_case_insensitively() {
    let records = vec![
        expense("1", "Uber ride", 12.0, "Transport"),
        expense("2", "Dinner", 30.0, "Food"),
    ];

    let out = filter(&records, &CategoryFilter::All, "uber");
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].id, "1");
}

#[test]
fn export_snapshot_carries_records_and_summary() {
    let records = vec![
        expense("1", "Lunch", 12.5, "Food"),
        expense("2", "Bus", 2.5, "Transport"),
    ];
    let now = Utc.with_ymd_and_hms(2026, 8, 23, 9, 30, 0).unwrap();

    let snapshot = export::snapshot(&records, now);
    assert_eq!(snapshot.expenses.len(), 2);
    assert_eq!(snapshot.summary.total_transactions, 2);
    assert!((snapshot.summary.total_spent - 15.0).abs() < 1e-9);
    assert_eq!(export::file_name(now), "expenses-2026-08-23.json");

    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["summary"]["total_transactions"], 2);
    assert_eq!(json["expenses"][0]["_id"], "1");
}
