use flow_placer_core::{Layout, Rect};

const GLYPHS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
/// Preview grids wider/taller than this are scaled down.
const MAX_COLS: u64 = 160;
const MAX_ROWS: u64 = 80;

/// Renders a layout as a character grid. Item `i` is drawn with `GLYPHS[i % len]`, the
/// available area is outlined with `.` where the content does not cover it.
pub fn render_ascii(layout: &Layout<String>, cell: u32) -> String {
    let extent_w = layout.size.w.max(layout.available.w) as u64;
    let extent_h = layout.size.h.max(layout.available.h) as u64;
    let mut cw = cell.max(1) as u64;
    while extent_w.div_ceil(cw) > MAX_COLS {
        cw *= 2;
    }
    let mut ch = cw * 2;
    while extent_h.div_ceil(ch) > MAX_ROWS {
        ch *= 2;
    }
    let cols = extent_w.div_ceil(cw) as usize;
    let rows = extent_h.div_ceil(ch) as usize;

    let avail_cols = (layout.available.w as u64).div_ceil(cw) as usize;
    let avail_rows = (layout.available.h as u64).div_ceil(ch) as usize;
    let mut grid = vec![vec![b' '; cols]; rows];
    for line in grid.iter_mut().take(avail_rows) {
        for cell in line.iter_mut().take(avail_cols) {
            *cell = b'.';
        }
    }

    for (i, placed) in layout.items.iter().enumerate() {
        let Some((c0, c1, r0, r1)) = cell_span(&placed.frame, cw, ch) else {
            continue;
        };
        let glyph = GLYPHS[i % GLYPHS.len()];
        for row in grid.iter_mut().take(r1.min(rows)).skip(r0) {
            for cell in row.iter_mut().take(c1.min(cols)).skip(c0) {
                *cell = glyph;
            }
        }
    }

    let mut out = String::with_capacity((cols + 1) * rows + 128);
    for row in &grid {
        out.push_str(std::str::from_utf8(row).unwrap_or(""));
        out.push('\n');
    }
    out.push_str(&format!(
        "size {}x{} in {}x{} ({} lines, 1 char = {}x{} px)\n",
        layout.size.w,
        layout.size.h,
        layout.available.w,
        layout.available.h,
        layout.lines.len(),
        cw,
        ch
    ));
    for (i, placed) in layout.items.iter().enumerate() {
        out.push_str(&format!(
            "  {} {} @ ({}, {}) {}x{}\n",
            GLYPHS[i % GLYPHS.len()] as char,
            placed.key,
            placed.frame.x,
            placed.frame.y,
            placed.frame.w,
            placed.frame.h
        ));
    }
    out
}

/// Half-open column/row span covered by `r`; every non-empty rect covers at least one cell.
fn cell_span(r: &Rect, cw: u64, ch: u64) -> Option<(usize, usize, usize, usize)> {
    if r.w == 0 || r.h == 0 {
        return None;
    }
    let c0 = r.x as u64 / cw;
    let r0 = r.y as u64 / ch;
    let c1 = (r.x as u64 + r.w as u64).div_ceil(cw).max(c0 + 1);
    let r1 = (r.y as u64 + r.h as u64).div_ceil(ch).max(r0 + 1);
    Some((c0 as usize, c1 as usize, r0 as usize, r1 as usize))
}
