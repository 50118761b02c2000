//! Derived metrics over the fetched record set.
//!
//! Everything here is a pure function of the record slice and the configured
//! budget: no mutation, no IO, no error paths. The records are read in the
//! order the store returned them.

use api_types::expense::Expense;

use crate::MoneyCents;

/// Headline figures for the dashboard stat cards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Summary {
    pub total_spent: MoneyCents,
    pub remaining_budget: MoneyCents,
    /// Percentage of the budget consumed. 0.0 when the budget is zero.
    pub usage_percent: f64,
    pub transactions: usize,
}

impl Summary {
    #[must_use]
    pub fn compute(expenses: &[Expense], budget: MoneyCents) -> Self {
        let total = total_spent(expenses);
        Self {
            total_spent: total,
            remaining_budget: remaining_budget(budget, total),
            usage_percent: budget_usage(total, budget),
            transactions: expenses.len(),
        }
    }
}

/// Total of one category, plus its share of the overall spend.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryTotal {
    /// Raw category label as seen on the record, known to the client or not.
    pub category: String,
    pub total: MoneyCents,
    /// Share of total spend; 0.0 for every category when total spend is 0.
    pub percent: f64,
}

/// Sum of `amount` over the full record set. Empty input yields 0.
#[must_use]
pub fn total_spent(expenses: &[Expense]) -> MoneyCents {
    expenses
        .iter()
        .map(|e| MoneyCents::from_major(e.amount))
        .fold(MoneyCents::ZERO, |acc, amount| acc + amount)
}

/// `budget - total`. Negative means overspend, which is data, not an error.
#[must_use]
pub fn remaining_budget(budget: MoneyCents, total: MoneyCents) -> MoneyCents {
    budget - total
}

/// `total / budget * 100`.
///
/// A zero budget yields 0.0 rather than a division fault; the undefined
/// ratio collapses to "no usable gauge" and callers render it as such.
#[must_use]
pub fn budget_usage(total: MoneyCents, budget: MoneyCents) -> f64 {
    if budget.is_zero() {
        return 0.0;
    }
    total.cents() as f64 / budget.cents() as f64 * 100.0
}

/// Groups records by their raw category string and sums each group.
///
/// Keys appear in first-seen order; categories absent from the input yield
/// no entry at all. Percentages are relative to total spend and all 0.0 when
/// total spend is 0.
#[must_use]
pub fn category_totals(expenses: &[Expense]) -> Vec<CategoryTotal> {
    let mut totals: Vec<(String, MoneyCents)> = Vec::new();

    for expense in expenses {
        let amount = MoneyCents::from_major(expense.amount);
        match totals.iter_mut().find(|(label, _)| *label == expense.category) {
            Some((_, sum)) => *sum += amount,
            None => totals.push((expense.category.clone(), amount)),
        }
    }

    let total = total_spent(expenses);
    totals
        .into_iter()
        .map(|(category, sum)| CategoryTotal {
            category,
            percent: if total.is_zero() {
                0.0
            } else {
                sum.cents() as f64 / total.cents() as f64 * 100.0
            },
            total: sum,
        })
        .collect()
}

/// Category totals sorted by amount, largest first. The analytics view
/// order.
#[must_use]
pub fn category_breakdown(expenses: &[Expense]) -> Vec<CategoryTotal> {
    let mut totals = category_totals(expenses);
    totals.sort_by(|a, b| b.total.cmp(&a.total));
    totals
}

/// Average daily spend assuming a 30-day month.
#[must_use]
pub fn average_daily_spend(total: MoneyCents) -> MoneyCents {
    MoneyCents::new(total.cents() / 30)
}
