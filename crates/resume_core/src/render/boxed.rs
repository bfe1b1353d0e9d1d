//! Bordered box layout.
//!
//! # Invariants
//! - Inner width is at least `MIN_INNER_WIDTH` and fits the longest header or
//!   content line, unless clamped by a caller-supplied display width.
//! - Every row between the side borders is exactly `inner_width` chars wide.
//! - Over-long text is truncated, never wrapped.

use crate::model::timeline::Timeline;

/// Smallest inner width of any box.
pub const MIN_INNER_WIDTH: usize = 30;
/// Smallest inner width a display-width clamp can produce.
pub const MIN_CLAMPED_INNER_WIDTH: usize = 20;
/// Columns taken by `║ ` and ` ║` around each row.
pub const BORDER_COLUMNS: usize = 4;
/// Placeholder content for a timeline with no records.
pub const EMPTY_PLACEHOLDER: &str = "No jobs registered.";

const HEAVY: char = '═';
const LIGHT: char = '─';

/// Header text shown centered at the top of the box.
pub fn header_line(timeline: &Timeline) -> String {
    format!("Resume for {}", timeline.owner())
}

/// Content rows before padding: two per record, or the placeholder.
pub fn content_lines(timeline: &Timeline) -> Vec<String> {
    if timeline.is_empty() {
        return vec![EMPTY_PLACEHOLDER.to_string()];
    }
    timeline
        .iter()
        .flat_map(|record| {
            [
                format!("{} @ {}", record.role(), record.organization()),
                format!("Years: {}", record.range()),
            ]
        })
        .collect()
}

/// Computes the inner width for `timeline`.
///
/// With `max_width = Some(columns)` the width is clamped to
/// `max(MIN_CLAMPED_INNER_WIDTH, columns - BORDER_COLUMNS)`.
pub fn inner_width(timeline: &Timeline, max_width: Option<usize>) -> usize {
    let header = header_line(timeline);
    let longest = content_lines(timeline)
        .iter()
        .map(|line| text_width(line))
        .max()
        .unwrap_or(0);
    let natural = MIN_INNER_WIDTH.max(text_width(&header)).max(longest);
    clamp_width(natural, max_width)
}

/// Renders the box, one string per terminal row.
pub fn render_boxed(timeline: &Timeline, max_width: Option<usize>) -> Vec<String> {
    let header = header_line(timeline);
    let content = content_lines(timeline);
    let width = inner_width(timeline, max_width);

    let heavy = border(HEAVY, width);
    let light = border(LIGHT, width);

    let mut lines = Vec::with_capacity(content.len() * 2 + 4);
    lines.push(format!("╔{heavy}╗"));
    lines.push(format!("║ {} ║", center(&header, width)));
    lines.push(format!("╠{heavy}╣"));

    let last = content.len().saturating_sub(1);
    for (index, line) in content.iter().enumerate() {
        lines.push(format!("║ {} ║", pad_right(line, width)));
        // Each record spans two rows; separate blocks but not after the final row.
        if index % 2 == 1 && index != last {
            lines.push(format!("╟{light}╢"));
        }
    }

    lines.push(format!("╚{heavy}╝"));
    lines
}

/// Centers `text` in `width`; extra space goes to the right.
pub fn center(text: &str, width: usize) -> String {
    let len = text_width(text);
    if len >= width {
        return truncate(text, width);
    }
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{text}{}", " ".repeat(left), " ".repeat(right))
}

/// Left-justifies `text` in `width`.
pub fn pad_right(text: &str, width: usize) -> String {
    let len = text_width(text);
    if len >= width {
        return truncate(text, width);
    }
    format!("{text}{}", " ".repeat(width - len))
}

fn truncate(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}

fn clamp_width(natural: usize, max_width: Option<usize>) -> usize {
    match max_width {
        Some(columns) => {
            let bound = columns
                .saturating_sub(BORDER_COLUMNS)
                .max(MIN_CLAMPED_INNER_WIDTH);
            natural.min(bound)
        }
        None => natural,
    }
}

fn border(fill: char, width: usize) -> String {
    // +2 for the spaces beside the side borders.
    fill.to_string().repeat(width + 2)
}

fn text_width(text: &str) -> usize {
    text.chars().count()
}

#[cfg(test)]
mod tests {
    use super::{center, clamp_width, pad_right, render_boxed};
    use crate::model::record::Record;
    use crate::model::timeline::Timeline;

    #[test]
    fn center_puts_extra_space_on_the_right() {
        assert_eq!(center("ab", 5), " ab  ");
        assert_eq!(center("abc", 5), " abc ");
    }

    #[test]
    fn center_and_pad_truncate_long_text() {
        assert_eq!(center("abcdef", 4), "abcd");
        assert_eq!(pad_right("abcdef", 4), "abcd");
        assert_eq!(pad_right("abcd", 4), "abcd");
    }

    #[test]
    fn pad_counts_chars_not_bytes() {
        let padded = pad_right("2020–2022", 12);
        assert_eq!(padded.chars().count(), 12);
        assert!(padded.ends_with("   "));
    }

    #[test]
    fn clamp_never_goes_below_floor() {
        assert_eq!(clamp_width(50, None), 50);
        assert_eq!(clamp_width(50, Some(44)), 40);
        assert_eq!(clamp_width(50, Some(10)), 20);
        assert_eq!(clamp_width(30, Some(200)), 30);
        assert_eq!(clamp_width(30, Some(0)), 20);
    }

    #[test]
    fn exact_layout_for_single_record() {
        let mut timeline = Timeline::new("Jo").unwrap();
        timeline
            .add_record(Record::new("Acme", "Engineer", 2020, 2022).unwrap())
            .unwrap();

        let lines = render_boxed(&timeline, None);
        let bar = "═".repeat(32);
        assert_eq!(
            lines,
            vec![
                format!("╔{bar}╗"),
                format!("║ {}Resume for Jo{} ║", " ".repeat(8), " ".repeat(9)),
                format!("╠{bar}╣"),
                format!("║ Engineer @ Acme{} ║", " ".repeat(15)),
                format!("║ Years: 2020–2022{} ║", " ".repeat(14)),
                format!("╚{bar}╝"),
            ]
        );
    }
}
