//! Plain list layout.

use crate::model::timeline::Timeline;

/// Owner header followed by one `role @ organization (start–end)` line per record.
pub fn render_simple(timeline: &Timeline) -> Vec<String> {
    let mut lines = Vec::with_capacity(timeline.len() + 1);
    lines.push(format!("Resume for: {}", timeline.owner()));
    lines.extend(timeline.iter().map(ToString::to_string));
    lines
}
