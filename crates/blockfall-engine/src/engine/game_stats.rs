/// Points awarded per cleared line.
pub const LINE_CLEAR_SCORE: usize = 100;

/// Running totals for one game.
///
/// The score is `LINE_CLEAR_SCORE` per line, with no multi-line bonus, so
/// clearing two lines at once is worth exactly as much as clearing them one
/// at a time.
///
/// # Example
///
/// ```
/// use blockfall_engine::GameStats;
///
/// let mut stats = GameStats::new();
/// stats.complete_piece_lock(0);
/// stats.complete_piece_lock(2);
///
/// assert_eq!(stats.score(), 200);
/// assert_eq!(stats.locked_pieces(), 2);
/// assert_eq!(stats.cleared_lines(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameStats {
    score: usize,
    locked_pieces: usize,
    cleared_lines: usize,
}

impl GameStats {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            score: 0,
            locked_pieces: 0,
            cleared_lines: 0,
        }
    }

    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    /// Number of pieces frozen into the board so far.
    #[must_use]
    pub const fn locked_pieces(&self) -> usize {
        self.locked_pieces
    }

    #[must_use]
    pub const fn cleared_lines(&self) -> usize {
        self.cleared_lines
    }

    /// Records one lock that cleared `cleared_lines` rows.
    pub const fn complete_piece_lock(&mut self, cleared_lines: usize) {
        self.locked_pieces += 1;
        self.cleared_lines += cleared_lines;
        self.score += cleared_lines * LINE_CLEAR_SCORE;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_zero() {
        let stats = GameStats::new();
        assert_eq!(stats, GameStats::default());
        assert_eq!(stats.score(), 0);
        assert_eq!(stats.locked_pieces(), 0);
        assert_eq!(stats.cleared_lines(), 0);
    }

    #[test]
    fn test_score_is_linear_in_lines() {
        for lines in 0..=4 {
            let mut stats = GameStats::new();
            stats.complete_piece_lock(lines);
            assert_eq!(stats.score(), 100 * lines);
        }
    }

    #[test]
    fn test_lock_without_clear_keeps_score() {
        let mut stats = GameStats::new();
        stats.complete_piece_lock(1);
        stats.complete_piece_lock(0);
        assert_eq!(stats.score(), 100);
        assert_eq!(stats.locked_pieces(), 2);
    }
}
