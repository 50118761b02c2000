/// Creates a percentage bar with label.
///
/// Returns something like `████████░░ 80%`
#[must_use]
pub fn percentage_bar(percentage: u16, width: usize) -> String {
    let filled = ((percentage as usize * width) / 100).min(width);
    let empty = width.saturating_sub(filled);
    format!(
        "{}{} {:>3}%",
        "█".repeat(filled),
        "░".repeat(empty),
        percentage
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_fill_tracks_the_percentage() {
        assert_eq!(percentage_bar(0, 4), "░░░░   0%");
        assert_eq!(percentage_bar(50, 4), "██░░  50%");
        assert_eq!(percentage_bar(100, 4), "████ 100%");
    }

    #[test]
    fn bar_never_overflows_its_width() {
        assert_eq!(percentage_bar(250, 4), "████ 250%");
    }
}
