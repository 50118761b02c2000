pub use categories::{Category, glyph_for};
pub use currency::Currency;
pub use error::EngineError;
pub use filter::{CategoryFilter, filter, recent};
pub use money::MoneyCents;
pub use summary::{
    CategoryTotal, Summary, average_daily_spend, budget_usage, category_breakdown,
    category_totals, remaining_budget, total_spent,
};

mod categories;
mod currency;
pub mod dates;
mod error;
pub mod export;
mod filter;
mod money;
mod summary;
