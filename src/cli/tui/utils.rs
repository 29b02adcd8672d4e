//! Shared helpers for TUI views

use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// Shortens `s` to at most `max_len` characters, ending in `…` when cut
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    if max_len == 0 {
        return String::new();
    }
    let mut out: String = s.chars().take(max_len - 1).collect();
    out.push('…');
    out
}

/// A `width` x `height` rectangle centered in `area`, clipped to it
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_strings_are_untouched() {
        assert_eq!(truncate_str("Fix", 10), "Fix");
        assert_eq!(truncate_str("Fix", 3), "Fix");
        assert_eq!(truncate_str("", 5), "");
    }

    #[test]
    fn long_strings_end_in_ellipsis() {
        assert_eq!(truncate_str("Production down", 8), "Product…");
        assert_eq!(truncate_str("Backend", 1), "…");
        assert_eq!(truncate_str("Backend", 0), "");
    }

    #[test]
    fn counts_characters_not_bytes() {
        assert_eq!(truncate_str("Готово", 6), "Готово");
        assert_eq!(truncate_str("Готово", 4), "Гот…");
    }

    #[test]
    fn centered_rect_sits_in_the_middle() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(area, 50, 10);

        assert_eq!(rect, Rect::new(25, 15, 50, 10));
    }

    #[test]
    fn centered_rect_is_clipped_to_area() {
        let area = Rect::new(0, 0, 20, 5);
        let rect = centered_rect(area, 50, 10);

        assert_eq!(rect.width, 20);
        assert_eq!(rect.height, 5);
    }
}
