use rand::Rng;

/// A cell address on the grid. Identity is purely positional; the mutable
/// state lives in the [`Grid`], so a `Position` stays valid as a lookup key
/// across state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }
}

/// The role/visitation state of one cell.
///
/// `Visited` is a transient search marker and is cleared by
/// [`Grid::reset_visited`] after every run. `Current` and `Path` are display
/// states owned by the replay consumer; no search strategy ever sets them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Unvisited,
    Visited,
    Start,
    Destination,
    Wall,
    Current,
    Path,
}

/// A fixed-size rectangular board of cells, row-major.
///
/// Adjacency is wired once at construction: for every cell, the in-bounds
/// 4-directional neighbors in the order right, up, left, down. Wall cells are
/// filtered out of [`Grid::neighbors`] at query time, so toggling a wall
/// changes connectivity immediately without rewiring anything.
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<CellState>,
    wiring: Vec<Vec<Position>>,
}

impl Grid {
    /// Creates a `rows` x `cols` grid with every cell `Unvisited`.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "grid dimensions must be positive");

        let mut wiring = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                let mut wired = Vec::with_capacity(4);
                // Wiring order is right, up, left, down; every strategy
                // inherits its neighbor expansion order from this.
                if col + 1 < cols {
                    wired.push(Position::new(row, col + 1));
                }
                if row > 0 {
                    wired.push(Position::new(row - 1, col));
                }
                if col > 0 {
                    wired.push(Position::new(row, col - 1));
                }
                if row + 1 < rows {
                    wired.push(Position::new(row + 1, col));
                }
                wiring.push(wired);
            }
        }

        Grid {
            rows,
            cols,
            cells: vec![CellState::Unvisited; rows * cols],
            wiring,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Flat row-major index of `pos`, usable as a stable per-cell key.
    pub fn index(&self, pos: Position) -> usize {
        debug_assert!(pos.row < self.rows && pos.col < self.cols);
        pos.row * self.cols + pos.col
    }

    pub fn state(&self, pos: Position) -> CellState {
        self.cells[self.index(pos)]
    }

    /// Sets one cell's state. Global invariants (at most one `Start`, at most
    /// one `Destination`, walls never placed on either) are the caller's
    /// responsibility.
    pub fn set_state(&mut self, pos: Position, state: CellState) {
        let idx = self.index(pos);
        self.cells[idx] = state;
    }

    /// The wired neighbors of `pos` that are not currently walls, in wiring
    /// order. Recomputed on every call so live wall edits are reflected.
    pub fn neighbors(&self, pos: Position) -> Vec<Position> {
        self.wiring[self.index(pos)]
            .iter()
            .copied()
            .filter(|&n| self.state(n) != CellState::Wall)
            .collect()
    }

    /// Scans for the first cell (row-major) in the given state.
    pub fn find(&self, state: CellState) -> Option<Position> {
        self.cells
            .iter()
            .position(|&s| s == state)
            .map(|idx| Position::new(idx / self.cols, idx % self.cols))
    }

    /// Clears all transient `Visited` markers back to `Unvisited` and
    /// restores the start cell to `Start`, leaving the grid ready for
    /// another search. Walls and the destination are untouched.
    pub fn reset_visited(&mut self, start: Position) {
        for state in self.cells.iter_mut() {
            if *state == CellState::Visited {
                *state = CellState::Unvisited;
            }
        }
        let start_idx = self.index(start);
        self.cells[start_idx] = CellState::Start;
    }

    /// Places up to `count` walls on random `Unvisited` cells, leaving
    /// `Start` and `Destination` untouched. Attempts are bounded so a
    /// crowded grid terminates instead of spinning. Returns the number of
    /// walls actually placed.
    pub fn scatter_walls<R: Rng>(&mut self, count: usize, rng: &mut R) -> usize {
        let mut placed = 0;
        let mut attempts = 0;
        while placed < count && attempts < count * 3 {
            let pos = Position::new(rng.gen_range(0..self.rows), rng.gen_range(0..self.cols));
            if self.state(pos) == CellState::Unvisited {
                self.set_state(pos, CellState::Wall);
                placed += 1;
            }
            attempts += 1;
        }
        placed
    }

    /// Print a visual representation of the grid.
    pub fn print_grid(&self) {
        println!("Legend: S=Start, D=Destination, #=Wall, o=Visited, @=Current, x=Path, .=Unvisited");

        // Column numbers header
        print!("   ");
        for col in 0..self.cols {
            print!("{:2}", col % 10);
        }
        println!();

        for row in 0..self.rows {
            print!("{:2} ", row);
            for col in 0..self.cols {
                let c = match self.state(Position::new(row, col)) {
                    CellState::Unvisited => '.',
                    CellState::Visited => 'o',
                    CellState::Start => 'S',
                    CellState::Destination => 'D',
                    CellState::Wall => '#',
                    CellState::Current => '@',
                    CellState::Path => 'x',
                };
                print!("{} ", c);
            }
            println!();
        }
        println!();
    }
}
