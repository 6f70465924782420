use rand::{
    Rng,
    distr::{Distribution, StandardUniform},
};

/// Largest bounding box of any catalog shape, in either direction.
const MAX_SIZE: usize = 4;

/// An RGB color used for locked cells and the falling piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const CYAN: Self = Self::new(0, 255, 255);
    pub const PURPLE: Self = Self::new(160, 32, 240);
    pub const YELLOW: Self = Self::new(255, 255, 0);
    pub const RED: Self = Self::new(255, 0, 0);
    pub const GREEN: Self = Self::new(0, 255, 0);
    pub const ORANGE: Self = Self::new(255, 165, 0);
    pub const BLUE: Self = Self::new(0, 0, 255);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// The seven catalog shapes.
///
/// Each kind carries both its spawn geometry ([`ShapeKind::matrix`]) and its
/// color ([`ShapeKind::color`]), so a piece never has to look its color up by
/// comparing matrices.
///
/// # Example
///
/// ```
/// use blockfall_engine::{Color, ShapeKind};
///
/// let t = ShapeKind::T;
/// assert_eq!(t.color(), Color::PURPLE);
/// assert_eq!((t.matrix().rows(), t.matrix().cols()), (2, 3));
/// assert_eq!(t.to_string(), "T");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[repr(u8)]
pub enum ShapeKind {
    #[display("I")]
    I = 0,
    #[display("T")]
    T = 1,
    #[display("O")]
    O = 2,
    #[display("Z")]
    Z = 3,
    #[display("S")]
    S = 4,
    #[display("L")]
    L = 5,
    #[display("J")]
    J = 6,
}

/// Uniform choice over the catalog. Repeats are possible; there is no bag.
impl Distribution<ShapeKind> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> ShapeKind {
        ShapeKind::ALL[rng.random_range(0..ShapeKind::LEN)]
    }
}

impl ShapeKind {
    /// Number of shape kinds (7).
    pub const LEN: usize = 7;

    /// All kinds in catalog order.
    pub const ALL: [Self; Self::LEN] = [
        Self::I,
        Self::T,
        Self::O,
        Self::Z,
        Self::S,
        Self::L,
        Self::J,
    ];

    /// Returns a fresh copy of the spawn-orientation matrix.
    #[must_use]
    pub const fn matrix(self) -> ShapeMatrix {
        SHAPE_MATRICES[self as usize]
    }

    #[must_use]
    pub const fn color(self) -> Color {
        SHAPE_COLORS[self as usize]
    }

    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::I => 'I',
            Self::T => 'T',
            Self::O => 'O',
            Self::Z => 'Z',
            Self::S => 'S',
            Self::L => 'L',
            Self::J => 'J',
        }
    }

    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'I' => Some(Self::I),
            'T' => Some(Self::T),
            'O' => Some(Self::O),
            'Z' => Some(Self::Z),
            'S' => Some(Self::S),
            'L' => Some(Self::L),
            'J' => Some(Self::J),
            _ => None,
        }
    }
}

/// A rectangular matrix of occupied flags, at most 4×4.
///
/// `ShapeMatrix` is a plain value: rotating produces a new matrix and the
/// catalog templates are never touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeMatrix {
    cells: [[bool; MAX_SIZE]; MAX_SIZE],
    rows: u8,
    cols: u8,
}

impl ShapeMatrix {
    /// Builds a matrix from rows of `0`/`1` flags.
    ///
    /// # Panics
    ///
    /// Panics if the rows are empty, ragged, or larger than 4×4.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub const fn from_flags(flags: &[&[u8]]) -> Self {
        assert!(!flags.is_empty() && flags.len() <= MAX_SIZE);
        let cols = flags[0].len();
        assert!(cols > 0 && cols <= MAX_SIZE);

        let mut cells = [[false; MAX_SIZE]; MAX_SIZE];
        let mut r = 0;
        while r < flags.len() {
            assert!(flags[r].len() == cols, "shape rows must have equal length");
            let mut c = 0;
            while c < cols {
                cells[r][c] = flags[r][c] != 0;
                c += 1;
            }
            r += 1;
        }

        Self {
            cells,
            rows: flags.len() as u8,
            cols: cols as u8,
        }
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        usize::from(self.rows)
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        usize::from(self.cols)
    }

    /// Returns whether the cell at (`row`, `col`) is occupied.
    ///
    /// Positions outside the matrix are reported as unoccupied.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> bool {
        row < self.rows() && col < self.cols() && self.cells[row][col]
    }

    /// Rotates 90° clockwise: `new[c][rows - 1 - r] = old[r][c]`.
    #[must_use]
    pub fn rotated(&self) -> Self {
        let rows = self.rows();
        let mut cells = [[false; MAX_SIZE]; MAX_SIZE];
        for (r, row) in self.cells[..rows].iter().enumerate() {
            for (c, &cell) in row[..self.cols()].iter().enumerate() {
                cells[c][rows - 1 - r] = cell;
            }
        }
        Self {
            cells,
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Returns `(dx, dy)` offsets of occupied cells, row by row.
    pub fn occupied_offsets(self) -> impl Iterator<Item = (i32, i32)> {
        (0..self.rows).flat_map(move |r| {
            (0..self.cols).filter_map(move |c| {
                self.cells[usize::from(r)][usize::from(c)]
                    .then_some((i32::from(c), i32::from(r)))
            })
        })
    }
}

const SHAPE_MATRICES: [ShapeMatrix; ShapeKind::LEN] = [
    // I
    ShapeMatrix::from_flags(&[&[1, 1, 1, 1]]),
    // T
    ShapeMatrix::from_flags(&[&[1, 1, 1], &[0, 1, 0]]),
    // O
    ShapeMatrix::from_flags(&[&[1, 1], &[1, 1]]),
    // Z
    ShapeMatrix::from_flags(&[&[1, 1, 0], &[0, 1, 1]]),
    // S
    ShapeMatrix::from_flags(&[&[0, 1, 1], &[1, 1, 0]]),
    // L
    ShapeMatrix::from_flags(&[&[1, 1, 1], &[1, 0, 0]]),
    // J
    ShapeMatrix::from_flags(&[&[1, 1, 1], &[0, 0, 1]]),
];

const SHAPE_COLORS: [Color; ShapeKind::LEN] = [
    Color::CYAN,
    Color::PURPLE,
    Color::YELLOW,
    Color::RED,
    Color::GREEN,
    Color::ORANGE,
    Color::BLUE,
];

#[cfg(test)]
mod tests {
    use rand::{Rng as _, SeedableRng as _};
    use rand_pcg::Pcg32;

    use super::*;

    fn flags(matrix: &ShapeMatrix) -> Vec<Vec<u8>> {
        (0..matrix.rows())
            .map(|r| {
                (0..matrix.cols())
                    .map(|c| u8::from(matrix.get(r, c)))
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_catalog_matrices() {
        assert_eq!(flags(&ShapeKind::I.matrix()), [vec![1, 1, 1, 1]]);
        assert_eq!(flags(&ShapeKind::T.matrix()), [vec![1, 1, 1], vec![0, 1, 0]]);
        assert_eq!(flags(&ShapeKind::O.matrix()), [vec![1, 1], vec![1, 1]]);
        assert_eq!(flags(&ShapeKind::Z.matrix()), [vec![1, 1, 0], vec![0, 1, 1]]);
        assert_eq!(flags(&ShapeKind::S.matrix()), [vec![0, 1, 1], vec![1, 1, 0]]);
        assert_eq!(flags(&ShapeKind::L.matrix()), [vec![1, 1, 1], vec![1, 0, 0]]);
        assert_eq!(flags(&ShapeKind::J.matrix()), [vec![1, 1, 1], vec![0, 0, 1]]);
    }

    #[test]
    fn test_catalog_colors() {
        let colors = ShapeKind::ALL.map(ShapeKind::color);
        assert_eq!(
            colors,
            [
                Color::CYAN,
                Color::PURPLE,
                Color::YELLOW,
                Color::RED,
                Color::GREEN,
                Color::ORANGE,
                Color::BLUE,
            ]
        );
        assert_eq!(Color::ORANGE, Color::new(255, 165, 0));
        assert_eq!(Color::PURPLE, Color::new(160, 32, 240));
    }

    #[test]
    fn test_every_shape_has_four_cells() {
        for kind in ShapeKind::ALL {
            assert_eq!(
                kind.matrix().occupied_offsets().count(),
                4,
                "{kind} should cover 4 cells"
            );
        }
    }

    #[test]
    fn test_rotate_t_clockwise() {
        let rotated = ShapeKind::T.matrix().rotated();
        assert_eq!(flags(&rotated), [vec![0, 1], vec![1, 1], vec![0, 1]]);
    }

    #[test]
    fn test_rotate_i_becomes_vertical() {
        let rotated = ShapeKind::I.matrix().rotated();
        assert_eq!((rotated.rows(), rotated.cols()), (4, 1));
        assert!((0..4).all(|r| rotated.get(r, 0)));
    }

    #[test]
    fn test_rotate_l_clockwise() {
        // [[1,1,1],[1,0,0]] -> reverse rows then transpose
        let rotated = ShapeKind::L.matrix().rotated();
        assert_eq!(flags(&rotated), [vec![1, 1], vec![0, 1], vec![0, 1]]);
    }

    #[test]
    fn test_four_rotations_is_identity() {
        for kind in ShapeKind::ALL {
            let original = kind.matrix();
            let mut matrix = original;
            for _ in 0..4 {
                matrix = matrix.rotated();
            }
            assert_eq!(matrix, original, "{kind} should return to its spawn matrix");
        }
    }

    #[test]
    fn test_rotation_leaves_catalog_untouched() {
        for kind in ShapeKind::ALL {
            let _ = kind.matrix().rotated();
            assert_eq!(kind.matrix(), SHAPE_MATRICES[kind as usize]);
        }
    }

    #[test]
    fn test_get_out_of_range() {
        let o = ShapeKind::O.matrix();
        assert!(!o.get(2, 0));
        assert!(!o.get(0, 2));
    }

    #[test]
    fn test_shape_kind_char_conversion() {
        for kind in ShapeKind::ALL {
            assert_eq!(ShapeKind::from_char(kind.as_char()), Some(kind));
            assert_eq!(kind.to_string(), kind.as_char().to_string());
        }
        assert_eq!(ShapeKind::from_char('X'), None);
        assert_eq!(ShapeKind::from_char('t'), None);
    }

    #[test]
    fn test_random_kind_covers_catalog() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut seen = [0_usize; ShapeKind::LEN];
        for _ in 0..7000 {
            let kind: ShapeKind = rng.random();
            seen[kind as usize] += 1;
        }
        for (kind, count) in ShapeKind::ALL.iter().zip(seen) {
            assert!(
                (700..1300).contains(&count),
                "{kind} drawn {count} times out of 7000"
            );
        }
    }
}
