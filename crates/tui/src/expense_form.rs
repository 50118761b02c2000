//! The add-expense form buffer and its client-side validation.
//!
//! Validation happens before any network call: a draft with an empty title
//! or an unparsable/negative amount is rejected locally and no request is
//! issued.

use api_types::expense::ExpenseNew;
use chrono::{DateTime, Utc};
use engine::{Category, MoneyCents};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Amount,
    Category,
    Description,
}

#[derive(Debug)]
pub struct ExpenseForm {
    pub title: String,
    pub amount: String,
    pub category_idx: usize,
    pub description: String,
    pub focus: FormField,
}

impl Default for ExpenseForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            amount: String::new(),
            category_idx: 0,
            description: String::new(),
            focus: FormField::Title,
        }
    }
}

impl ExpenseForm {
    #[must_use]
    pub fn category(&self) -> Category {
        Category::ALL[self.category_idx % Category::ALL.len()]
    }

    pub fn next_field(&mut self) {
        self.focus = match self.focus {
            FormField::Title => FormField::Amount,
            FormField::Amount => FormField::Category,
            FormField::Category => FormField::Description,
            FormField::Description => FormField::Title,
        };
    }

    pub fn cycle_category(&mut self, forward: bool) {
        let len = Category::ALL.len();
        self.category_idx = if forward {
            (self.category_idx + 1) % len
        } else {
            (self.category_idx + len - 1) % len
        };
    }

    pub fn input(&mut self, ch: char) {
        match self.focus {
            FormField::Title => self.title.push(ch),
            FormField::Amount => self.amount.push(ch),
            // The category field cycles with arrows instead of taking text.
            FormField::Category => {}
            FormField::Description => self.description.push(ch),
        }
    }

    pub fn backspace(&mut self) {
        match self.focus {
            FormField::Title => {
                self.title.pop();
            }
            FormField::Amount => {
                self.amount.pop();
            }
            FormField::Category => {}
            FormField::Description => {
                self.description.pop();
            }
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Validates the buffer and shapes the create payload.
    ///
    /// The date is always stamped client-side so the record reflects when
    /// the user submitted it, not when the store processed it.
    pub fn build(&self, now: DateTime<Utc>) -> Result<ExpenseNew, String> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err("Please fill title and amount.".to_string());
        }

        let amount: MoneyCents = self
            .amount
            .parse()
            .map_err(|_| "Amount is not a valid number.".to_string())?;
        if amount.is_negative() {
            return Err("Amount must not be negative.".to_string());
        }

        let description = self.description.trim();
        Ok(ExpenseNew {
            title: title.to_string(),
            amount: amount.to_major(),
            category: self.category().label().to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
            date: Some(now),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(title: &str, amount: &str) -> ExpenseForm {
        ExpenseForm {
            title: title.to_string(),
            amount: amount.to_string(),
            ..ExpenseForm::default()
        }
    }

    #[test]
    fn empty_title_is_rejected_locally() {
        let err = form("   ", "12.50").build(Utc::now()).unwrap_err();
        assert_eq!(err, "Please fill title and amount.");
    }

    #[test]
    fn unparsable_amount_is_rejected_locally() {
        assert!(form("Lunch", "").build(Utc::now()).is_err());
        assert!(form("Lunch", "12.5.0").build(Utc::now()).is_err());
        assert!(form("Lunch", "abc").build(Utc::now()).is_err());
    }

    #[test]
    fn negative_amount_is_rejected_locally() {
        let err = form("Refund?", "-3").build(Utc::now()).unwrap_err();
        assert_eq!(err, "Amount must not be negative.");
    }

    #[test]
    fn valid_buffer_builds_a_draft() {
        let mut f = form("Uber ride", "12,50");
        f.cycle_category(true); // Food -> Transport
        let draft = f.build(Utc::now()).unwrap();

        assert_eq!(draft.title, "Uber ride");
        assert_eq!(draft.amount, 12.5);
        assert_eq!(draft.category, "Transport");
        assert_eq!(draft.description, None);
        assert!(draft.date.is_some());
    }

    #[test]
    fn category_cycle_wraps_both_ways() {
        let mut f = ExpenseForm::default();
        f.cycle_category(false);
        assert_eq!(f.category().label(), "Other");
        f.cycle_category(true);
        assert_eq!(f.category().label(), "Food");
    }
}
