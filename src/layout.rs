/// Screen layout and hit-testing for the quiz screens
///
/// Everything here is plain rectangle arithmetic on `sdl2::rect::Rect`, so it
/// needs no SDL context and is tested directly.
///
/// # Grid
///
/// Choices fill a fixed number of columns left to right, top to bottom. The
/// whole block (cells plus padding between them) is centered on the screen:
///
/// ```text
/// rows    = ceil(n / cols)
/// total_w = cols * w + (cols - 1) * pad
/// total_h = rows * h + (rows - 1) * pad
/// cell(i) = (start_x + (i % cols) * (w + pad), start_y + (i / cols) * (h + pad))
/// ```
use sdl2::rect::Rect;

/// Size that is `fraction` of the screen on each axis
pub fn fraction_of(screen: (u32, u32), fraction: f32) -> (u32, u32) {
    (
        ((screen.0 as f32 * fraction) as u32).max(1),
        ((screen.1 as f32 * fraction) as u32).max(1),
    )
}

/// Rectangle of `size` centered on the screen
pub fn centered_rect(screen: (u32, u32), size: (u32, u32)) -> Rect {
    Rect::from_center(
        (screen.0 as i32 / 2, screen.1 as i32 / 2),
        size.0,
        size.1,
    )
}

/// Same center, each side multiplied by `scale` (used for the hover effect)
pub fn scaled_about_center(rect: Rect, scale: f32) -> Rect {
    let width = ((rect.width() as f32 * scale).round() as u32).max(1);
    let height = ((rect.height() as f32 * scale).round() as u32).max(1);
    Rect::from_center(rect.center(), width, height)
}

/// Positions of the choice images for one question
#[derive(Debug, Clone, PartialEq)]
pub struct GridLayout {
    cells: Vec<Rect>,
}

impl GridLayout {
    /// Lay out `count` cells of `cell` size in `columns` columns, centered on `screen`
    pub fn new(screen: (u32, u32), count: usize, columns: u32, cell: (u32, u32), padding: u32) -> Self {
        let columns = columns.max(1) as i32;
        let count_i = count as i32;
        let rows = (count_i + columns - 1) / columns;
        // A short grid is still as wide as its column count
        let used_columns = columns.min(count_i);

        let (w, h) = (cell.0 as i32, cell.1 as i32);
        let pad = padding as i32;

        let total_width = used_columns * w + (used_columns - 1).max(0) * pad;
        let total_height = rows * h + (rows - 1).max(0) * pad;
        let start_x = (screen.0 as i32 - total_width) / 2;
        let start_y = (screen.1 as i32 - total_height) / 2;

        let cells = (0..count_i)
            .map(|i| {
                let row = i / columns;
                let col = i % columns;
                Rect::new(
                    start_x + col * (w + pad),
                    start_y + row * (h + pad),
                    cell.0,
                    cell.1,
                )
            })
            .collect();

        GridLayout { cells }
    }

    pub fn cells(&self) -> &[Rect] {
        &self.cells
    }

    /// Index of the first cell containing the point, in layout order
    pub fn hit_test(&self, x: i32, y: i32) -> Option<usize> {
        self.cells.iter().position(|cell| cell.contains_point((x, y)))
    }
}
