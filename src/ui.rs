/// UI rendering: text grid, status line, and SVG export of a drawing session
use crate::announce::Messages;
use crate::config::UiConfig;
use crate::draw::CellAddress;
use crate::input::DrawingSession;
use std::fmt::Write;

// ============================================================================
// Text grid glyphs (not configurable)
// ============================================================================

const GLYPH_EMPTY: char = '.';
const GLYPH_PAINTED: char = '#';
const GLYPH_CURSOR: char = '@';
const GLYPH_CURSOR_PAINTED: char = '*';

/// Render the grid as text, one line per row.
///
/// Painted cells are `#`, empty cells `.`, and the keyboard cursor `@`
/// (`*` when the cursor sits on a painted cell).
pub fn render_grid(session: &DrawingSession) -> String {
    let grid = session.grid();
    let cursor = session.cursor();
    let painted = session.painted();

    let mut out = String::with_capacity(grid.rows * (grid.cols + 1));
    for row in 0..grid.rows {
        for col in 0..grid.cols {
            let cell = CellAddress::new(row, col);
            let glyph = match (cell == cursor, painted.contains(cell)) {
                (true, true) => GLYPH_CURSOR_PAINTED,
                (true, false) => GLYPH_CURSOR,
                (false, true) => GLYPH_PAINTED,
                (false, false) => GLYPH_EMPTY,
            };
            out.push(glyph);
        }
        out.push('\n');
    }
    out
}

/// Render a one-line status summary: mode, cursor, stroke state and counts.
pub fn render_status_line(session: &DrawingSession, messages: &Messages) -> String {
    let stroke_state = match session.active_stroke() {
        Some(stroke) => format!("drawing ({} points)", stroke.len()),
        None => "idle".to_string(),
    };

    format!(
        "{} | {} | {} | strokes: {} | painted: {}",
        messages.mode_name(session.mode()),
        messages.cell_label(session.cursor()),
        stroke_state,
        session.strokes().len(),
        session.painted().len(),
    )
}

/// Render the session as a standalone SVG document.
///
/// Painted cells are drawn as filled squares underneath one smoothed path
/// per renderable stroke. The active stroke is included so a live preview
/// matches what will be committed.
pub fn render_svg(session: &DrawingSession, alpha: f64, style: &UiConfig) -> String {
    let grid = session.grid();
    let size = grid.cell_size;
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        grid.width(),
        grid.height(),
        grid.width(),
        grid.height(),
    );

    if style.show_painted_cells {
        let fill = style.painted_color.to_svg();
        for cell in session.painted().iter() {
            let _ = writeln!(
                out,
                r#"  <rect x="{}" y="{}" width="{size}" height="{size}" fill="{fill}"/>"#,
                cell.col as f64 * size,
                cell.row as f64 * size,
            );
        }
    }

    let stroke_color = style.stroke_color.to_svg();
    let strokes = session.strokes().iter().chain(session.active_stroke());
    for stroke in strokes.filter(|stroke| stroke.is_renderable()) {
        let _ = writeln!(
            out,
            r#"  <path d="{}" fill="none" stroke="{stroke_color}" stroke-width="{}" stroke-linecap="round" stroke-linejoin="round"/>"#,
            stroke.path_data(alpha),
            style.stroke_width,
        );
    }

    out.push_str("</svg>\n");
    out
}
