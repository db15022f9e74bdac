//! Pure layout math shared by the grid, label, and branding passes.

/// Size of one grid cell: ceiling division so the grid always covers the
/// canvas. The last row/column may be a pixel or two larger than the rest.
pub fn cell_size(card_width: u32, card_height: u32, grid_size: u32) -> (u32, u32) {
    (card_width.div_ceil(grid_size), card_height.div_ceil(grid_size))
}

/// Map a linear cell index to its (row, col) grid location, row-major.
pub fn cell_location(index: u32, grid_size: u32) -> (u32, u32) {
    (index / grid_size, index % grid_size)
}

/// Row (and column) of the center cell.
pub fn center_cell(grid_size: u32) -> u32 {
    grid_size / 2
}

/// Whether the primary font is too wide for a cell and the small font
/// should be used instead.
pub fn needs_small_font(text_width: u32, cell_width: u32, nudge: u32) -> bool {
    text_width > cell_width.saturating_sub(nudge)
}

/// Top-left draw origin that centers a text block of the measured size
/// within its cell. Can go negative when the text overflows the cell;
/// that overflow is drawn clipped rather than corrected.
pub fn cell_origin(
    location: (u32, u32),
    cell: (u32, u32),
    text: (u32, u32),
) -> (i32, i32) {
    let (row, col) = location;
    let (cell_w, cell_h) = cell;
    let (text_w, text_h) = text;

    let left = (col * cell_w) as i32 + cell_w as i32 / 2 - text_w as i32 / 2;
    let top = (row * cell_h) as i32 + cell_h as i32 / 2 - text_h as i32 / 2;
    (left, top)
}

/// Logo dimensions after resizing to the target width with the source
/// aspect ratio preserved.
pub fn scaled_logo_size(orig_width: u32, orig_height: u32, target_width: u32) -> (u32, u32) {
    let aspect = orig_width as f32 / orig_height as f32;
    let height = (target_width as f32 / aspect).floor() as u32;
    (target_width, height.max(1))
}
