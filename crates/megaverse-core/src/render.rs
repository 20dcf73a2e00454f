//! Console rendering of a goal grid, one glyph per cell.

use crate::decode::decode;
use crate::types::Grid;

const SPACE_GLYPH: &str = "🌌";
const UNKNOWN_GLYPH: &str = "❓";

/// Glyph for a single label.
pub fn glyph(label: &str) -> &'static str {
    match decode(label) {
        Ok(Some(entity)) => entity.kind().symbol(),
        Ok(None) => SPACE_GLYPH,
        Err(_) => UNKNOWN_GLYPH,
    }
}

/// Render the grid as space-separated glyphs, one line per row.
pub fn render(grid: &Grid) -> String {
    let mut out = String::new();
    for row in grid {
        let line: Vec<&str> = row.iter().map(|label| glyph(label)).collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out
}
