//! GameView: maps a [`Session`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::engine::Session;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Mode, Pos, Tile};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const PANEL_WIDTH: u16 = 46;
const PANEL_GAP: u16 = 3;

const TEXT: Rgb = Rgb::new(230, 232, 238);
const MUTED: Rgb = Rgb::new(154, 163, 178);
const ACCENT: Rgb = Rgb::new(255, 196, 87);
const BACKDROP: Rgb = Rgb::new(11, 14, 22);

/// A lightweight terminal renderer for the puzzle grid and its status panel.
pub struct GameView {
    /// Grid cell width in terminal columns (at least 3: side, glyph, side).
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            cell_w: 3,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(3),
            cell_h: cell_h.max(1),
        }
    }

    /// Render the session. `marker` is the stabilize target, if one is being chosen.
    pub fn render(&self, session: &Session, marker: Option<Pos>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let size = session.state().size() as u16;
        let frame_w = size * self.cell_w + 2;
        let frame_h = size * self.cell_h + 2;
        let total_w = frame_w + PANEL_GAP + PANEL_WIDTH;
        let total_h = frame_h.max(PANEL_ROWS);

        let start_x = viewport.width.saturating_sub(total_w) / 2;
        let start_y = viewport.height.saturating_sub(total_h) / 2;

        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h);
        self.draw_grid(&mut fb, session, marker, start_x + 1, start_y + 1);
        draw_panel(&mut fb, session, start_x + frame_w + PANEL_GAP, start_y);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let style = CellStyle::new(MUTED, BACKDROP);
        let right = x + w - 1;
        let bottom = y + h - 1;
        for cx in x + 1..right {
            fb.put_char(cx, y, '─', style);
            fb.put_char(cx, bottom, '─', style);
        }
        for cy in y + 1..bottom {
            fb.put_char(x, cy, '│', style);
            fb.put_char(right, cy, '│', style);
        }
        fb.put_char(x, y, '┌', style);
        fb.put_char(right, y, '┐', style);
        fb.put_char(x, bottom, '└', style);
        fb.put_char(right, bottom, '┘', style);
    }

    fn draw_grid(&self, fb: &mut FrameBuffer, session: &Session, marker: Option<Pos>, ox: u16, oy: u16) {
        let state = session.state();
        let snap = state.snapshot();
        let grid = snap.grid();

        for (i, &tile) in grid.tiles().iter().enumerate() {
            let pos = grid.pos_of(i);
            let x = ox + pos.x as u16 * self.cell_w;
            let y = oy + pos.y as u16 * self.cell_h;

            let style = tile_style(tile);
            fb.fill_rect(x, y, self.cell_w, self.cell_h, ' ', style);

            let glyph = match (snap.goals()[i], snap.activated()[i]) {
                (true, true) => '◆',
                (true, false) => '◇',
                _ => tile_glyph(tile),
            };
            let mid_x = x + self.cell_w / 2;
            let mid_y = y + self.cell_h / 2;
            let glyph_style = if snap.goals()[i] { style.bold() } else { style };
            fb.put_char(mid_x, mid_y, glyph, glyph_style);

            let brackets = if marker == Some(pos) {
                Some(('<', '>', CellStyle::new(ACCENT, style.bg).bold()))
            } else if state.cursor() == pos {
                Some(('[', ']', CellStyle::new(TEXT, style.bg).bold()))
            } else {
                None
            };
            if let Some((open, close, bracket_style)) = brackets {
                fb.put_char(x, mid_y, open, bracket_style);
                fb.put_char(x + self.cell_w - 1, mid_y, close, bracket_style);
            }
        }
    }
}

/// Glyph drawn for a non-goal tile.
pub fn tile_glyph(tile: Tile) -> char {
    match tile {
        Tile::Stable => '·',
        Tile::Cracked => '╱',
        Tile::Fractured => '╳',
        Tile::Locked => '█',
    }
}

fn tile_style(tile: Tile) -> CellStyle {
    match tile {
        Tile::Stable => CellStyle::new(Rgb::new(90, 98, 120), Rgb::new(15, 20, 32)),
        Tile::Cracked => CellStyle::new(TEXT, Rgb::new(32, 40, 62)),
        Tile::Fractured => CellStyle::new(ACCENT, Rgb::new(60, 36, 30)),
        Tile::Locked => CellStyle::new(Rgb::new(40, 44, 56), Rgb::new(8, 10, 16)),
    }
}

const PANEL_ROWS: u16 = 16;

fn draw_panel(fb: &mut FrameBuffer, session: &Session, x: u16, y: u16) {
    let status = session.status();
    let report = session.state().generation();
    let label = CellStyle::new(MUTED, BACKDROP);
    let value = CellStyle::new(TEXT, BACKDROP).bold();

    fb.put_str(x, y, "FRACTURE GRID", CellStyle::new(ACCENT, BACKDROP).bold());

    let (score, rank) = match status.result {
        Some(result) => (result.score.to_string(), result.rank.as_str().to_string()),
        None => ("-".to_string(), "-".to_string()),
    };
    let rows = [
        ("Seed", status.seed.to_string()),
        ("Goals", format!("{}/{}", status.goals_done, status.goals_total)),
        ("Moves", status.moves.to_string()),
        ("Score", score),
        ("Rank", rank),
        ("Mode", status.mode.as_str().to_string()),
    ];
    for (row, (name, text)) in rows.iter().enumerate() {
        let ry = y + 2 + row as u16;
        fb.put_str(x, ry, name, label);
        fb.put_str(x + 8, ry, text, value);
    }

    let hint = match (status.mode, status.result.is_some()) {
        (Mode::StabilizePick, _) => "PICK: choose a cracked tile, Enter to repair",
        (Mode::Normal, true) => "All goals activated!",
        (Mode::Normal, false) => "Activate every goal",
    };
    fb.put_str(x, y + 8, hint, CellStyle::new(ACCENT, BACKDROP));

    let b = report.breakdown;
    fb.put_str(
        x,
        y + 10,
        &format!(
            "gen retries {} fallback {}",
            report.retries_used,
            if report.fallback_accepted { "yes" } else { "no" }
        ),
        label,
    );
    fb.put_str(
        x,
        y + 11,
        &format!(
            "difficulty {} = goals {} locks {} spread {}",
            b.total, b.goal_count, b.locked_count, b.goal_distance
        ),
        label,
    );

    fb.put_str(x, y + 13, "move arrows  activate space  stabilize x", label);
    fb.put_str(x, y + 14, "cancel esc  undo u  reset r  new n", label);
    fb.put_str(x, y + 15, "quit q", label);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GeneratorConfig;

    #[test]
    fn test_render_small_viewport_does_not_panic() {
        let session = Session::new(12345, GeneratorConfig::default());
        let fb = GameView::default().render(&session, None, Viewport::new(10, 4));
        assert_eq!(fb.width(), 10);
        assert_eq!(fb.height(), 4);
    }

    #[test]
    fn test_panel_shows_mode() {
        let mut session = Session::new(12345, GeneratorConfig::default());
        let view = GameView::default();
        let vp = Viewport::new(80, 24);
        assert!(view.render(&session, None, vp).text().contains("Mode    normal"));

        session.apply(crate::types::Command::Stabilize);
        assert!(view.render(&session, None, vp).text().contains("Mode    stabilize"));
    }

    #[test]
    fn test_tile_glyphs_are_distinct() {
        let glyphs: Vec<char> = Tile::ALL.iter().map(|&t| tile_glyph(t)).collect();
        for (i, g) in glyphs.iter().enumerate() {
            assert!(!glyphs[i + 1..].contains(g));
        }
    }
}
