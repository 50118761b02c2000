pub mod card;
pub mod charts;
pub mod confirm;
pub mod money;
pub mod tabs;
pub mod toast;
