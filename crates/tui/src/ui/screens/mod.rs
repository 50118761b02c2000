pub mod analytics;
pub mod dashboard;
pub mod expenses;
pub mod settings;
