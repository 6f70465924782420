use super::{
    board::COLS,
    shape::{Color, ShapeKind, ShapeMatrix},
};

/// A falling piece: a shape matrix anchored on the grid.
///
/// The anchor is the top-left corner of the matrix's bounding box, in grid
/// cells. Rows may be negative (above the visible board) and nothing here
/// checks bounds or collisions; that is the board's job.
///
/// # Example
///
/// ```
/// use blockfall_engine::{Piece, PiecePosition, ShapeKind};
///
/// let piece = Piece::spawn(ShapeKind::I);
/// assert_eq!(piece.position(), PiecePosition::new(3, 0));
///
/// let cells: Vec<_> = piece.occupied_cells().collect();
/// assert_eq!(cells, [(3, 0), (4, 0), (5, 0), (6, 0)]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    kind: ShapeKind,
    shape: ShapeMatrix,
    position: PiecePosition,
}

impl Piece {
    /// Creates a piece horizontally centered on the top row.
    ///
    /// The anchor column is `COLS / 2 - width / 2` using integer division.
    #[must_use]
    pub fn spawn(kind: ShapeKind) -> Self {
        let shape = kind.matrix();
        #[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        let x = (COLS / 2 - shape.cols() / 2) as i32;
        Self {
            kind,
            shape,
            position: PiecePosition::new(x, 0),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    #[must_use]
    pub fn shape(&self) -> &ShapeMatrix {
        &self.shape
    }

    #[must_use]
    pub fn position(&self) -> PiecePosition {
        self.position
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.kind.color()
    }

    /// Replaces the shape with its clockwise rotation.
    pub fn rotate(&mut self) {
        self.shape = self.shape.rotated();
    }

    #[must_use]
    pub fn rotated(&self) -> Self {
        let mut piece = *self;
        piece.rotate();
        piece
    }

    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.position = self.position.offset(dx, dy);
    }

    #[must_use]
    pub fn moved(&self, dx: i32, dy: i32) -> Self {
        let mut piece = *self;
        piece.translate(dx, dy);
        piece
    }

    /// Absolute `(x, y)` grid cells covered by the piece.
    ///
    /// Computed from the current shape and anchor on every call.
    pub fn occupied_cells(&self) -> impl Iterator<Item = (i32, i32)> + use<> {
        let PiecePosition { x, y } = self.position;
        self.shape
            .occupied_offsets()
            .map(move |(dx, dy)| (x + dx, y + dy))
    }
}

/// Anchor of a piece in grid cells. `x` grows rightward, `y` downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PiecePosition {
    x: i32,
    y: i32,
}

impl PiecePosition {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub const fn x(self) -> i32 {
        self.x
    }

    #[must_use]
    pub const fn y(self) -> i32 {
        self.y
    }

    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}
