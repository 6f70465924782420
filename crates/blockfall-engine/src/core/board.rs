use arrayvec::ArrayVec;

use super::{piece::Piece, shape::Color};

/// Canvas width in pixels of the reference display.
pub const SCREEN_WIDTH: usize = 300;
/// Canvas height in pixels of the reference display.
pub const SCREEN_HEIGHT: usize = 600;
/// Edge length of one grid cell in pixels.
pub const GRID_SIZE: usize = 30;

/// Number of board columns (10).
pub const COLS: usize = SCREEN_WIDTH / GRID_SIZE;
/// Number of board rows (20).
pub const ROWS: usize = SCREEN_HEIGHT / GRID_SIZE;

/// A single board cell: empty, or locked with the color of the piece that filled it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Filled(Color),
}

impl Cell {
    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    #[must_use]
    pub fn color(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Filled(color) => Some(color),
        }
    }
}

type BoardRow = [Cell; COLS];

const EMPTY_ROW: BoardRow = [Cell::Empty; COLS];

fn is_row_full(row: &BoardRow) -> bool {
    row.iter().all(|cell| !cell.is_empty())
}

/// The grid of locked cells, `ROWS × COLS`, row 0 at the top.
///
/// The board knows nothing about the falling piece beyond what is passed in.
/// It answers collision queries, freezes pieces, and clears full rows.
///
/// # Example
///
/// ```
/// use blockfall_engine::{Board, Piece, ShapeKind};
///
/// let mut board = Board::EMPTY;
/// let piece = Piece::spawn(ShapeKind::O).moved(0, 18);
///
/// assert!(!board.collides(&piece, 0, 0));
/// assert!(board.collides(&piece, 0, 1)); // floor
///
/// board.freeze(&piece);
/// assert!(board.collides(&Piece::spawn(ShapeKind::O).moved(0, 17), 0, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: [BoardRow; ROWS],
}

impl Default for Board {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Board {
    pub const EMPTY: Self = Self {
        rows: [EMPTY_ROW; ROWS],
    };

    /// Returns all rows, top to bottom.
    #[must_use]
    pub fn rows(&self) -> &[[Cell; COLS]; ROWS] {
        &self.rows
    }

    /// # Panics
    ///
    /// Panics if (`x`, `y`) is outside the board.
    #[must_use]
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        self.rows[y][x]
    }

    /// # Panics
    ///
    /// Panics if (`x`, `y`) is outside the board.
    pub fn set_cell(&mut self, x: usize, y: usize, cell: Cell) {
        self.rows[y][x] = cell;
    }

    fn cell_mut(&mut self, x: i32, y: i32) -> Option<&mut Cell> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        self.rows.get_mut(y)?.get_mut(x)
    }

    /// Tests whether `piece` shifted by (`dx`, `dy`) would collide.
    ///
    /// A shifted cell collides when its column is outside `[0, COLS)`, its
    /// row is at or below `ROWS`, or its row is on the board and the cell
    /// there is filled. Rows above the board (`y < 0`) are only checked
    /// for columns, never for occupancy, so a piece may hang over the top.
    #[must_use]
    pub fn collides(&self, piece: &Piece, dx: i32, dy: i32) -> bool {
        piece.occupied_cells().any(|(x, y)| {
            let Ok(x) = usize::try_from(x + dx) else {
                return true;
            };
            if x >= COLS {
                return true;
            }
            let Ok(y) = usize::try_from(y + dy) else {
                return false;
            };
            y >= ROWS || !self.rows[y][x].is_empty()
        })
    }

    /// Locks the piece's cells into the board with the piece's color.
    ///
    /// Cells that fall outside the board (only possible above row 0 after a
    /// collision check) have no storage and are dropped.
    pub fn freeze(&mut self, piece: &Piece) {
        let cell = Cell::Filled(piece.color());
        for (x, y) in piece.occupied_cells() {
            if let Some(slot) = self.cell_mut(x, y) {
                *slot = cell;
            }
        }
    }

    /// Removes every full row and returns how many were removed.
    ///
    /// Full rows are collected from the board as it is before any removal.
    /// Each one is then deleted and an empty row is inserted at the top, so
    /// the remaining rows keep their relative order and the height stays
    /// `ROWS`.
    pub fn clear_full_lines(&mut self) -> usize {
        let full_rows = (0..ROWS)
            .filter(|&y| is_row_full(&self.rows[y]))
            .collect::<ArrayVec<usize, ROWS>>();
        // Ascending order: removing row y only shifts rows above it, so the
        // indices still to be processed stay valid.
        for &y in &full_rows {
            self.rows.copy_within(..y, 1);
            self.rows[0] = EMPTY_ROW;
        }
        full_rows.len()
    }
}
