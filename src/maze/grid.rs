//! The maze grid: generation, queries and wall shifting.

use super::config::{MazeConfig, MAX_EXITS, MAX_SIZE, MIN_EXITS, MIN_SIZE};
use super::types::{Cell, Move, Position};
use crate::error::ConfigurationError;
use crate::random::rng_from_option;
use log::debug;
use rand::rngs::StdRng;
use rand::seq::index;
use rand::Rng;
use std::collections::HashSet;
use std::fmt;

/// Mazes larger than this are summarised instead of drawn by `Display`.
const RENDER_LIMIT: usize = 20;

/// An N×N grid maze with one real exit, several decoys and movable walls.
///
/// The grid only stores wall/free state. The start is always `(0, 0)` and
/// always free. Exits live on the bottom row or right column and are kept
/// as coordinates beside the grid, so an exit may coincide with a wall; such
/// an exit is impassable and therefore unreachable.
///
/// # Examples
///
/// ```
/// use maze_escape::maze::Maze;
///
/// let maze = Maze::new(20, 0.25, 4, 0.1, Some(42)).unwrap();
/// assert_eq!(maze.size(), 20);
/// assert_eq!(maze.exits().len(), 4);
/// assert!(maze.exits().contains(&maze.real_exit()));
/// ```
#[derive(Debug, Clone)]
pub struct Maze {
    size: usize,
    walls: Vec<bool>,
    start: Position,
    exits: Vec<Position>,
    exit_set: HashSet<Position>,
    real_exit: Position,
    wall_density: f64,
    wall_shift_probability: f64,
    rng: StdRng,
}

impl Maze {
    /// Generates a maze.
    ///
    /// Identical `(size, wall_density, exit_count, seed)` inputs produce
    /// identical grids, exits and real exit.
    pub fn new(
        size: usize,
        wall_density: f64,
        exit_count: usize,
        wall_shift_probability: f64,
        seed: Option<u64>,
    ) -> Result<Self, ConfigurationError> {
        let config = MazeConfig {
            size,
            wall_density,
            exit_count,
            wall_shift_probability,
            seed,
        };
        Self::from_config(&config)
    }

    /// Generates a maze from a validated [`MazeConfig`].
    pub fn from_config(config: &MazeConfig) -> Result<Self, ConfigurationError> {
        config.validate()?;

        let mut rng = rng_from_option(config.seed);
        let size = config.size;
        let start = Position::new(0, 0);

        let mut walls = Vec::with_capacity(size * size);
        for row in 0..size {
            for col in 0..size {
                let is_start = row == start.row && col == start.col;
                walls.push(!is_start && rng.random_range(0.0..1.0) < config.wall_density);
            }
        }

        let candidates = exit_candidates(size);
        let count = config.exit_count.min(candidates.len());
        let exits: Vec<Position> = index::sample(&mut rng, candidates.len(), count)
            .into_iter()
            .map(|i| candidates[i])
            .collect();
        let real_exit = exits[rng.random_range(0..exits.len())];

        let maze = Self {
            size,
            walls,
            start,
            exit_set: exits.iter().copied().collect(),
            exits,
            real_exit,
            wall_density: config.wall_density,
            wall_shift_probability: config.wall_shift_probability,
            rng,
        };

        debug!(
            "generated {}x{} maze: {} walls, {} exits, real exit {}",
            size,
            size,
            maze.wall_count(),
            maze.exits.len(),
            maze.real_exit
        );
        Ok(maze)
    }

    /// Builds a maze from a drawn layout.
    ///
    /// Uses the rendering alphabet: `/` free, `#` wall, `&` real exit,
    /// `?` decoy exit, `0` start. Whitespace between glyphs is ignored and
    /// blank lines are skipped. The start glyph is optional but, if present,
    /// must be at `(0, 0)`. Exits must sit on the bottom row or right column.
    ///
    /// The resulting maze never shifts walls until
    /// [`with_wall_shift_probability`](Self::with_wall_shift_probability)
    /// is called.
    ///
    /// ```
    /// use maze_escape::maze::Maze;
    ///
    /// let layout = "\
    ///     0 / / / / / / / / /
    ///     / / / / / / / / / /
    ///     / / / / / / / / / /
    ///     / / / / / / / / / /
    ///     / / / / / / / / / /
    ///     / / / / / / / / / /
    ///     / / / / / / / / / /
    ///     / / / / / / / / / /
    ///     / / / / / / / / / ?
    ///     / / / / / / / / / &";
    /// let maze = Maze::from_ascii(layout).unwrap();
    /// assert_eq!(maze.real_exit().row, 9);
    /// ```
    pub fn from_ascii(layout: &str) -> Result<Self, ConfigurationError> {
        let rows: Vec<Vec<char>> = layout
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();

        let size = rows.len();
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return Err(ConfigurationError::SizeOutOfRange(size));
        }

        let start = Position::new(0, 0);
        let mut walls = Vec::with_capacity(size * size);
        let mut exits = Vec::new();
        let mut real_exit = None;

        for (row, glyphs) in rows.iter().enumerate() {
            if glyphs.len() != size {
                return Err(ConfigurationError::RaggedLayout {
                    row,
                    expected: size,
                    found: glyphs.len(),
                });
            }
            for (col, &glyph) in glyphs.iter().enumerate() {
                let position = Position::new(row, col);
                let cell = Cell::from_glyph(glyph)
                    .ok_or(ConfigurationError::UnknownGlyph { glyph, position })?;

                match cell {
                    Cell::Wall if position == start => {
                        return Err(ConfigurationError::BlockedStart)
                    }
                    Cell::Start if position != start => {
                        return Err(ConfigurationError::MisplacedStart(position))
                    }
                    Cell::RealExit | Cell::DecoyExit => {
                        if row != size - 1 && col != size - 1 {
                            return Err(ConfigurationError::ExitOffBoundary(position));
                        }
                        if cell == Cell::RealExit {
                            if real_exit.is_some() {
                                return Err(ConfigurationError::MultipleRealExits);
                            }
                            real_exit = Some(position);
                        }
                        exits.push(position);
                    }
                    _ => {}
                }
                walls.push(cell == Cell::Wall);
            }
        }

        let real_exit = real_exit.ok_or(ConfigurationError::MissingRealExit)?;
        if !(MIN_EXITS..=MAX_EXITS).contains(&exits.len()) {
            return Err(ConfigurationError::ExitCountOutOfRange(exits.len()));
        }

        let wall_total = walls.iter().filter(|&&w| w).count();
        Ok(Self {
            size,
            walls,
            start,
            exit_set: exits.iter().copied().collect(),
            exits,
            real_exit,
            wall_density: wall_total as f64 / (size * size - 1) as f64,
            wall_shift_probability: 0.0,
            rng: rng_from_option(None),
        })
    }

    /// Sets the probability used by [`shift_walls`](Self::shift_walls).
    pub fn with_wall_shift_probability(
        mut self,
        probability: f64,
    ) -> Result<Self, ConfigurationError> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(ConfigurationError::WallShiftProbabilityOutOfRange(probability));
        }
        self.wall_shift_probability = probability;
        Ok(self)
    }

    /// Reseeds the generator used by [`shift_walls`](Self::shift_walls).
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = crate::random::create_rng(seed);
        self
    }

    // ---- Queries ----

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn start(&self) -> Position {
        self.start
    }

    /// All exits, real and decoy, in sampling order.
    pub fn exits(&self) -> &[Position] {
        &self.exits
    }

    pub fn real_exit(&self) -> Position {
        self.real_exit
    }

    pub fn decoy_exits(&self) -> impl Iterator<Item = Position> + '_ {
        self.exits.iter().copied().filter(move |&p| p != self.real_exit)
    }

    /// Density the maze was generated with (measured density for drawn mazes).
    pub fn wall_density(&self) -> f64 {
        self.wall_density
    }

    pub fn wall_shift_probability(&self) -> f64 {
        self.wall_shift_probability
    }

    pub fn wall_count(&self) -> usize {
        self.walls.iter().filter(|&&w| w).count()
    }

    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    /// In bounds and not a wall. Exits that coincide with walls are not free.
    pub fn is_free(&self, pos: Position) -> bool {
        self.is_in_bounds(pos) && !self.walls[self.index(pos)]
    }

    pub fn is_wall(&self, pos: Position) -> bool {
        self.is_in_bounds(pos) && self.walls[self.index(pos)]
    }

    pub fn is_any_exit(&self, pos: Position) -> bool {
        self.exit_set.contains(&pos)
    }

    pub fn is_real_exit(&self, pos: Position) -> bool {
        pos == self.real_exit
    }

    /// The free, in-bounds cells one step from `pos`, in east, south, west,
    /// north order.
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        Move::ALL
            .into_iter()
            .filter_map(move |m| m.apply(pos, self.size))
            .filter(move |&p| self.is_free(p))
    }

    /// Where `mv` leads from `pos`, if that cell is free.
    pub fn step(&self, pos: Position, mv: Move) -> Option<Position> {
        mv.apply(pos, self.size).filter(|&p| self.is_free(p))
    }

    /// The rendered state of a cell, with exits and start overlaid.
    ///
    /// Returns `None` when `pos` is out of bounds.
    pub fn cell(&self, pos: Position) -> Option<Cell> {
        if !self.is_in_bounds(pos) {
            return None;
        }
        let cell = if pos == self.start {
            Cell::Start
        } else if pos == self.real_exit {
            Cell::RealExit
        } else if self.is_any_exit(pos) {
            Cell::DecoyExit
        } else if self.walls[self.index(pos)] {
            Cell::Wall
        } else {
            Cell::Free
        };
        Some(cell)
    }

    // ---- Mutation ----

    /// Relocates walls in place and returns how many moved.
    ///
    /// Each wall, with probability `wall_shift_probability`, picks a uniformly
    /// random target cell. If the target is free (and is not the start), the
    /// two cells swap; otherwise the wall stays. The total wall count never
    /// changes.
    pub fn shift_walls(&mut self) -> usize {
        let cells = self.size * self.size;
        let start_idx = self.index(self.start);
        let mut moved = 0;

        for idx in 0..cells {
            if !self.walls[idx] || self.rng.random_range(0.0..1.0) >= self.wall_shift_probability
            {
                continue;
            }
            let row = self.rng.random_range(0..self.size);
            let col = self.rng.random_range(0..self.size);
            let target = row * self.size + col;
            if target != start_idx && !self.walls[target] {
                self.walls[target] = true;
                self.walls[idx] = false;
                moved += 1;
            }
        }

        debug!("shifted {moved} of {} walls", self.wall_count());
        moved
    }

    /// The grid as rows of glyphs separated by spaces, without a header.
    ///
    /// The output parses back with [`from_ascii`](Self::from_ascii) as long as
    /// no exit sits on a wall.
    pub fn render_grid(&self) -> String {
        let mut out = String::with_capacity(self.size * self.size * 2);
        for row in 0..self.size {
            for col in 0..self.size {
                if col > 0 {
                    out.push(' ');
                }
                if let Some(cell) = self.cell(Position::new(row, col)) {
                    out.push(cell.glyph());
                }
            }
            out.push('\n');
        }
        out
    }

    fn index(&self, pos: Position) -> usize {
        pos.row * self.size + pos.col
    }
}

/// Right column then bottom row, each cell once, minus the start.
fn exit_candidates(size: usize) -> Vec<Position> {
    let last = size - 1;
    (0..size)
        .map(|row| Position::new(row, last))
        .chain((0..last).map(|col| Position::new(last, col)))
        .filter(|&p| p != Position::new(0, 0))
        .collect()
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.size;
        if n > RENDER_LIMIT {
            writeln!(f, "Maze {n}x{n} (too large to draw)")?;
            writeln!(f, "Real exit: {}", self.real_exit)?;
            return writeln!(f, "Total exits: {}", self.exits.len());
        }
        writeln!(f, "Maze {n}x{n} - real exit: {}", self.real_exit)?;
        f.write_str(&self.render_grid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_layout(real: Position, decoy: Position) -> String {
        let mut out = String::new();
        for row in 0..10 {
            for col in 0..10 {
                let p = Position::new(row, col);
                let glyph = if p == Position::new(0, 0) {
                    '0'
                } else if p == real {
                    '&'
                } else if p == decoy {
                    '?'
                } else {
                    '/'
                };
                out.push(glyph);
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_new_rejects_bad_config() {
        assert_eq!(
            Maze::new(5, 0.2, 3, 0.1, None).unwrap_err(),
            ConfigurationError::SizeOutOfRange(5)
        );
        assert_eq!(
            Maze::new(10, 0.2, 3, 2.0, None).unwrap_err(),
            ConfigurationError::WallShiftProbabilityOutOfRange(2.0)
        );
    }

    #[test]
    fn test_start_always_free() {
        for seed in 0..20 {
            let maze = Maze::new(10, 1.0, 2, 0.0, Some(seed)).unwrap();
            assert!(maze.is_free(maze.start()));
            assert_eq!(maze.wall_count(), 99);
        }
    }

    #[test]
    fn test_zero_density_has_no_walls() {
        let maze = Maze::new(15, 0.0, 4, 0.1, Some(3)).unwrap();
        assert_eq!(maze.wall_count(), 0);
    }

    #[test]
    fn test_seed_reproducibility() {
        let a = Maze::new(25, 0.3, 6, 0.1, Some(1234)).unwrap();
        let b = Maze::new(25, 0.3, 6, 0.1, Some(1234)).unwrap();
        assert_eq!(a.walls, b.walls);
        assert_eq!(a.exits, b.exits);
        assert_eq!(a.real_exit, b.real_exit);
    }

    #[test]
    fn test_exits_on_boundary_and_distinct() {
        let maze = Maze::new(10, 0.2, 19, 0.1, Some(9)).unwrap();
        assert_eq!(maze.exits().len(), 19);
        assert_eq!(maze.exit_set.len(), 19);
        for &e in maze.exits() {
            assert!(e.row == 9 || e.col == 9, "exit {e} off boundary");
            assert_ne!(e, maze.start());
        }
        assert!(maze.is_any_exit(maze.real_exit()));
        assert!(maze.is_real_exit(maze.real_exit()));
        assert_eq!(maze.decoy_exits().count(), 18);
    }

    #[test]
    fn test_exit_candidates_unique() {
        let candidates = exit_candidates(10);
        assert_eq!(candidates.len(), 19);
        let unique: HashSet<_> = candidates.iter().collect();
        assert_eq!(unique.len(), 19);
    }

    // ---- Queries ----

    #[test]
    fn test_neighbor_order() {
        let maze = Maze::new(10, 0.0, 2, 0.0, Some(1)).unwrap();
        let around: Vec<_> = maze.neighbors(Position::new(5, 5)).collect();
        assert_eq!(
            around,
            vec![
                Position::new(5, 6),
                Position::new(6, 5),
                Position::new(5, 4),
                Position::new(4, 5),
            ]
        );
        let corner: Vec<_> = maze.neighbors(Position::new(0, 0)).collect();
        assert_eq!(corner, vec![Position::new(0, 1), Position::new(1, 0)]);
    }

    #[test]
    fn test_neighbors_skip_walls() {
        let mut layout = open_layout(Position::new(9, 9), Position::new(9, 0));
        // wall at (0, 1)
        layout.replace_range(1..2, "#");
        let maze = Maze::from_ascii(&layout).unwrap();
        let around: Vec<_> = maze.neighbors(Position::new(0, 0)).collect();
        assert_eq!(around, vec![Position::new(1, 0)]);
        assert!(!maze.is_free(Position::new(0, 1)));
        assert!(!maze.is_free(Position::new(10, 0)));
        assert!(!maze.is_in_bounds(Position::new(0, 10)));
    }

    // ---- Drawn layouts ----

    #[test]
    fn test_from_ascii() {
        let maze = Maze::from_ascii(&open_layout(Position::new(4, 9), Position::new(9, 2))).unwrap();
        assert_eq!(maze.size(), 10);
        assert_eq!(maze.real_exit(), Position::new(4, 9));
        assert_eq!(maze.exits().len(), 2);
        assert_eq!(maze.wall_count(), 0);
        assert_eq!(maze.cell(Position::new(9, 2)), Some(Cell::DecoyExit));
        assert_eq!(maze.cell(Position::new(0, 0)), Some(Cell::Start));
    }

    #[test]
    fn test_from_ascii_errors() {
        let base = open_layout(Position::new(9, 9), Position::new(9, 0));

        let mut blocked = base.clone();
        blocked.replace_range(0..1, "#");
        assert_eq!(Maze::from_ascii(&blocked).unwrap_err(), ConfigurationError::BlockedStart);

        let no_real = base.replace('&', "/");
        assert_eq!(Maze::from_ascii(&no_real).unwrap_err(), ConfigurationError::MissingRealExit);

        let two_real = base.replace('?', "&");
        assert_eq!(Maze::from_ascii(&two_real).unwrap_err(), ConfigurationError::MultipleRealExits);

        let mut inner_exit = base.clone();
        inner_exit.replace_range(12..13, "?");
        assert_eq!(
            Maze::from_ascii(&inner_exit).unwrap_err(),
            ConfigurationError::ExitOffBoundary(Position::new(1, 1))
        );

        let mut second_start = base.clone();
        second_start.replace_range(13..14, "0");
        assert_eq!(
            Maze::from_ascii(&second_start).unwrap_err(),
            ConfigurationError::MisplacedStart(Position::new(1, 2))
        );

        let lone = base.replace('?', "/");
        assert_eq!(Maze::from_ascii(&lone).unwrap_err(), ConfigurationError::ExitCountOutOfRange(1));

        let mut ragged = base.clone();
        ragged.replace_range(0..1, "");
        assert!(matches!(
            Maze::from_ascii(&ragged).unwrap_err(),
            ConfigurationError::RaggedLayout { row: 0, .. }
        ));

        let unknown = base.replacen('/', "x", 1);
        assert!(matches!(
            Maze::from_ascii(&unknown).unwrap_err(),
            ConfigurationError::UnknownGlyph { glyph: 'x', .. }
        ));
    }

    #[test]
    fn test_render_roundtrip() {
        let maze = Maze::new(12, 0.3, 4, 0.1, Some(77)).unwrap();
        // exits may sit on walls in a generated maze; only compare when none do
        if maze.exits().iter().all(|&e| maze.is_free(e)) {
            let parsed = Maze::from_ascii(&maze.render_grid()).unwrap();
            assert_eq!(parsed.walls, maze.walls);
            assert_eq!(parsed.real_exit(), maze.real_exit());
        }
    }

    #[test]
    fn test_display() {
        let small = Maze::new(10, 0.2, 3, 0.1, Some(1)).unwrap();
        let text = small.to_string();
        assert!(text.starts_with("Maze 10x10 - real exit:"));
        assert_eq!(text.lines().count(), 11);

        let large = Maze::new(30, 0.2, 3, 0.1, Some(1)).unwrap();
        let text = large.to_string();
        assert!(text.contains("too large"));
        assert!(text.contains("Total exits: 3"));
    }

    // ---- Wall shifting ----

    #[test]
    fn test_shift_preserves_wall_count() {
        let mut maze = Maze::new(30, 0.35, 5, 0.5, Some(11)).unwrap();
        let before = maze.wall_count();
        for _ in 0..10 {
            maze.shift_walls();
            assert_eq!(maze.wall_count(), before);
            assert!(maze.is_free(maze.start()));
        }
    }

    #[test]
    fn test_shift_with_zero_probability_is_noop() {
        let mut maze = Maze::new(20, 0.3, 3, 0.0, Some(5)).unwrap();
        let walls = maze.walls.clone();
        assert_eq!(maze.shift_walls(), 0);
        assert_eq!(maze.walls, walls);
    }

    #[test]
    fn test_shift_moves_walls() {
        let mut maze = Maze::new(30, 0.2, 3, 1.0, Some(5)).unwrap();
        let walls = maze.walls.clone();
        let moved = maze.shift_walls();
        assert!(moved > 0);
        assert_ne!(maze.walls, walls);
    }

    #[test]
    fn test_drawn_maze_shift_probability() {
        let maze = Maze::from_ascii(&open_layout(Position::new(9, 9), Position::new(9, 0))).unwrap();
        assert!(maze.clone().with_wall_shift_probability(1.2).is_err());
        let maze = maze.with_wall_shift_probability(0.4).unwrap().with_seed(3);
        assert!((maze.wall_shift_probability() - 0.4).abs() < 1e-12);
    }
}
