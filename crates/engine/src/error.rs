//! Errors raised while turning user input into engine values.
//!
//! The aggregation functions themselves are total over well-typed input and
//! never fail; errors only arise at the boundary where free text becomes an
//! amount or a currency code.

use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug, PartialEq)]
pub enum EngineError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),
}
