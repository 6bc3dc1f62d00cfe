//! Stroke-by-stroke drawing of marks.
//!
//! An X is two diagonal strokes, the second starting after a delay. An O
//! is traced clockwise from the top. Glyphs are 5 columns by 3 rows and
//! depend only on elapsed time, so rendering never touches game state.

use std::collections::HashMap;
use std::time::{Duration, Instant};
use tictactoe_rules::Mark;
use tracing::{debug, instrument};

use crate::config::AnimationConfig;

/// Glyph width in columns.
pub const GLYPH_WIDTH: usize = 5;
/// Glyph height in rows.
pub const GLYPH_HEIGHT: usize = 3;

type Segment = (usize, usize, char);

const BACK_STROKE: [Segment; 3] = [(0, 0, '\\'), (1, 2, '\\'), (2, 4, '\\')];
const FORWARD_STROKE: [Segment; 3] = [(0, 4, '/'), (1, 2, '/'), (2, 0, '/')];
const CIRCLE: [Segment; 8] = [
    (0, 2, '-'),
    (0, 3, '.'),
    (1, 4, ')'),
    (2, 3, '\''),
    (2, 2, '-'),
    (2, 1, '\''),
    (1, 0, '('),
    (0, 1, '.'),
];

/// Fraction of `total` covered by `elapsed`, clamped to `0.0..=1.0`.
fn fraction(elapsed: Duration, total: Duration) -> f64 {
    if total.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f64() / total.as_secs_f64()).clamp(0.0, 1.0)
}

/// Number of segments visible at `progress`.
fn visible(progress: f64, segments: usize) -> usize {
    (progress * segments as f64).ceil() as usize
}

/// Renders a mark after `elapsed` time of animation.
pub fn mark_glyph(mark: Mark, elapsed: Duration, config: &AnimationConfig) -> [String; GLYPH_HEIGHT] {
    let mut grid = [[' '; GLYPH_WIDTH]; GLYPH_HEIGHT];

    match mark {
        Mark::X => {
            let first = visible(fraction(elapsed, config.stroke()), BACK_STROKE.len());
            let second = visible(
                fraction(
                    elapsed.saturating_sub(config.second_stroke_delay()),
                    config.stroke(),
                ),
                FORWARD_STROKE.len(),
            );
            for &(row, col, ch) in BACK_STROKE.iter().take(first) {
                grid[row][col] = ch;
            }
            for &(row, col, ch) in FORWARD_STROKE.iter().take(second) {
                grid[row][col] = if grid[row][col] == '\\' { 'X' } else { ch };
            }
        }
        Mark::O => {
            let shown = visible(fraction(elapsed, config.circle()), CIRCLE.len());
            for &(row, col, ch) in CIRCLE.iter().take(shown) {
                grid[row][col] = ch;
            }
        }
    }

    grid.map(|row| row.iter().collect())
}

/// Total time until a mark is fully drawn.
pub fn duration(mark: Mark, config: &AnimationConfig) -> Duration {
    match mark {
        Mark::X => config.cross_total(),
        Mark::O => config.circle(),
    }
}

/// Start times of the marks on the board.
#[derive(Debug, Clone, Default)]
pub struct MarkAnimations {
    config: AnimationConfig,
    started: HashMap<usize, Instant>,
}

impl MarkAnimations {
    /// Creates an empty tracker.
    pub fn new(config: AnimationConfig) -> Self {
        Self {
            config,
            started: HashMap::new(),
        }
    }

    /// Starts animating the mark in cell `index` at `at`.
    #[instrument(skip(self))]
    pub fn start(&mut self, index: usize, at: Instant) {
        debug!(index, "Starting mark animation");
        self.started.insert(index, at);
    }

    /// Forgets all animations, e.g. after the board is cleared.
    pub fn clear(&mut self) {
        self.started.clear();
    }

    /// Elapsed animation time for `index` at `now`.
    ///
    /// Untracked cells count as finished; cells scheduled in the future
    /// count as not started.
    pub fn elapsed(&self, index: usize, now: Instant) -> Duration {
        match self.started.get(&index) {
            Some(start) => now.saturating_duration_since(*start),
            None => Duration::MAX,
        }
    }

    /// Glyph for `mark` in cell `index` at `now`.
    pub fn glyph(&self, index: usize, mark: Mark, now: Instant) -> [String; GLYPH_HEIGHT] {
        mark_glyph(mark, self.elapsed(index, now), &self.config)
    }

    /// Time until `mark` finishes drawing.
    pub fn duration(&self, mark: Mark) -> Duration {
        duration(mark, &self.config)
    }
}
