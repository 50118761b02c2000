use ratatui::style::Color;

/// Color palette; two variants backing the settings theme toggle.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub text_muted: Color,
    pub dim: Color,
    pub accent: Color,
    pub border: Color,
    pub border_focused: Color,
    pub positive: Color,
    pub negative: Color,
    pub warning: Color,
    pub error: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(8, 12, 16),
            surface: Color::Rgb(20, 26, 32),
            text: Color::Rgb(220, 220, 220),
            text_muted: Color::Rgb(170, 170, 170),
            dim: Color::Rgb(140, 140, 140),
            accent: Color::Rgb(80, 160, 160),
            border: Color::Rgb(60, 70, 80),
            border_focused: Color::Rgb(80, 160, 160),
            positive: Color::Rgb(78, 205, 196),
            negative: Color::Rgb(255, 107, 107),
            warning: Color::Rgb(254, 202, 87),
            error: Color::Rgb(200, 80, 80),
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color::Rgb(248, 249, 250),
            surface: Color::Rgb(255, 255, 255),
            text: Color::Rgb(51, 51, 51),
            text_muted: Color::Rgb(102, 102, 102),
            dim: Color::Rgb(150, 150, 150),
            accent: Color::Rgb(0, 123, 255),
            border: Color::Rgb(200, 205, 210),
            border_focused: Color::Rgb(0, 123, 255),
            positive: Color::Rgb(68, 160, 141),
            negative: Color::Rgb(231, 76, 60),
            warning: Color::Rgb(230, 126, 34),
            error: Color::Rgb(196, 77, 88),
        }
    }

    /// Fixed per-category accent; unrecognized labels get a neutral gray.
    pub fn category_color(label: &str) -> Color {
        match label {
            "Food" => Color::Rgb(255, 107, 107),
            "Transport" => Color::Rgb(78, 205, 196),
            "Shopping" => Color::Rgb(69, 183, 209),
            "Bills" => Color::Rgb(150, 206, 180),
            "Entertainment" => Color::Rgb(254, 202, 87),
            "Healthcare" => Color::Rgb(207, 159, 255),
            "Education" => Color::Rgb(255, 159, 243),
            "Other" => Color::Rgb(119, 139, 235),
            _ => Color::Rgb(153, 153, 153),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
