//! The category vocabulary the dashboard knows how to style.
//!
//! The store treats `category` as an open string: records may carry labels
//! this client has never seen. Parsing to [`Category`] is therefore
//! display-only; grouping and filtering always key on the raw string so
//! unknown labels survive a round trip untouched.

/// One of the eight labels the client ships styling for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Food,
    Transport,
    Shopping,
    Bills,
    Entertainment,
    Healthcare,
    Education,
    Other,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Food,
        Category::Transport,
        Category::Shopping,
        Category::Bills,
        Category::Entertainment,
        Category::Healthcare,
        Category::Education,
        Category::Other,
    ];

    /// Canonical label as stored on the wire.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Shopping => "Shopping",
            Category::Bills => "Bills",
            Category::Entertainment => "Entertainment",
            Category::Healthcare => "Healthcare",
            Category::Education => "Education",
            Category::Other => "Other",
        }
    }

    /// Glyph shown next to the label.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Category::Food => "🍕",
            Category::Transport => "🚗",
            Category::Shopping => "🛍",
            Category::Bills => "📄",
            Category::Entertainment => "🎬",
            Category::Healthcare => "🏥",
            Category::Education => "📚",
            Category::Other => "📦",
        }
    }

    /// Matches a raw label against the known set (exact, case-sensitive,
    /// mirroring the store's labels). Returns `None` for anything else.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Category> {
        Category::ALL.iter().copied().find(|c| c.label() == label)
    }
}

/// Glyph for an arbitrary raw label, falling back to a default marker for
/// categories the client does not recognize.
#[must_use]
pub fn glyph_for(label: &str) -> &'static str {
    Category::from_label(label).map_or("📌", Category::glyph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_labels_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_label(category.label()), Some(category));
        }
    }

    #[test]
    fn unknown_label_falls_back() {
        assert_eq!(Category::from_label("Groceries"), None);
        assert_eq!(glyph_for("Groceries"), "📌");
        assert_eq!(glyph_for("Food"), "🍕");
    }
}
