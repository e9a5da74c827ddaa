use std::fmt;

use super::types::Mark;

pub const BOARD_SIDE: usize = 9;
pub const SECTOR_SIDE: usize = 3;
pub const BOARD_CELLS: usize = BOARD_SIDE * BOARD_SIDE;
pub const SECTOR_CELLS: usize = SECTOR_SIDE * SECTOR_SIDE;

pub const CENTER_OFFSET: usize = 4;
pub const CORNER_OFFSETS: [usize; 4] = [0, 2, 6, 8];

/// One of the nine sub-boards, addressed by its row and column in the 3x3
/// arrangement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Sector {
    pub row: usize,
    pub col: usize,
}

impl Sector {
    pub fn new(row: usize, col: usize) -> Self {
        assert!(
            row < SECTOR_SIDE && col < SECTOR_SIDE,
            "sector ({}, {}) is out of range",
            row,
            col
        );
        Self { row, col }
    }

    /// The sector that contains the given global cell.
    pub fn containing(index: usize) -> Self {
        let coords = CellCoords::from_index(index);
        Self::new(coords.sector_row, coords.sector_col)
    }

    pub fn all() -> impl Iterator<Item = Sector> {
        (0..SECTOR_SIDE).flat_map(|row| (0..SECTOR_SIDE).map(move |col| Sector::new(row, col)))
    }

    /// Global index of the cell at `offset` (0-8, row-major) inside this sector.
    pub fn cell(&self, offset: usize) -> usize {
        assert!(offset < SECTOR_CELLS, "local offset {} is out of range", offset);
        CellCoords {
            sector_row: self.row,
            sector_col: self.col,
            local_row: offset / SECTOR_SIDE,
            local_col: offset % SECTOR_SIDE,
        }
        .to_index()
    }

    /// Global indices of the sector's cells in local-offset order.
    pub fn cells(&self) -> [usize; SECTOR_CELLS] {
        std::array::from_fn(|offset| self.cell(offset))
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A global index split into sector and local coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellCoords {
    pub sector_row: usize,
    pub sector_col: usize,
    pub local_row: usize,
    pub local_col: usize,
}

impl CellCoords {
    pub fn from_index(index: usize) -> Self {
        check_index(index);
        Self {
            sector_row: index / 27,
            sector_col: (index % BOARD_SIDE) / SECTOR_SIDE,
            local_row: (index / BOARD_SIDE) % SECTOR_SIDE,
            local_col: index % SECTOR_SIDE,
        }
    }

    pub fn to_index(&self) -> usize {
        (self.sector_row * SECTOR_SIDE + self.local_row) * BOARD_SIDE
            + (self.sector_col * SECTOR_SIDE + self.local_col)
    }

    pub fn sector(&self) -> Sector {
        Sector::new(self.sector_row, self.sector_col)
    }

    pub fn local_offset(&self) -> usize {
        self.local_row * SECTOR_SIDE + self.local_col
    }
}

fn check_index(index: usize) {
    assert!(
        index < BOARD_CELLS,
        "cell index {} is out of range (must be 0-{})",
        index,
        BOARD_CELLS - 1
    );
}

pub fn is_valid_index(index: usize) -> bool {
    index < BOARD_CELLS
}

/// The 81-cell grid. It is `Copy`, so search explores futures on snapshots
/// and never touches the caller's board.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Mark; BOARD_CELLS],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; BOARD_CELLS],
        }
    }

    #[cfg(test)]
    pub fn from_marks(marks: &[(usize, Mark)]) -> Self {
        let mut board = Self::new();
        for &(index, mark) in marks {
            board.place(index, mark);
        }
        board
    }

    pub fn get(&self, index: usize) -> Mark {
        check_index(index);
        self.cells[index]
    }

    pub fn is_empty_cell(&self, index: usize) -> bool {
        self.get(index) == Mark::Empty
    }

    /// Writes `mark` into an empty cell. Callers check legality first, so an
    /// occupied target is a bug.
    pub fn place(&mut self, index: usize, mark: Mark) {
        check_index(index);
        assert!(mark != Mark::Empty, "cannot place an empty mark at {}", index);
        assert!(
            self.cells[index] == Mark::Empty,
            "cell {} is already occupied by {:?}",
            index,
            self.cells[index]
        );
        self.cells[index] = mark;
    }

    pub fn with_mark(&self, index: usize, mark: Mark) -> Board {
        let mut next = *self;
        next.place(index, mark);
        next
    }

    pub fn empty_cells_in(&self, sector: Sector) -> Vec<usize> {
        sector
            .cells()
            .into_iter()
            .filter(|&index| self.cells[index] == Mark::Empty)
            .collect()
    }

    pub fn empty_cells(&self) -> Vec<usize> {
        (0..BOARD_CELLS)
            .filter(|&index| self.cells[index] == Mark::Empty)
            .collect()
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&m| m != Mark::Empty).count()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\n{})", self)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIDE {
            if row > 0 && row % SECTOR_SIDE == 0 {
                writeln!(f, "------+-------+------")?;
            }
            for col in 0..BOARD_SIDE {
                if col > 0 && col % SECTOR_SIDE == 0 {
                    write!(f, "| ")?;
                }
                let symbol = match self.cells[row * BOARD_SIDE + col] {
                    Mark::Empty => '.',
                    mark => mark.symbol(),
                };
                write!(f, "{}", symbol)?;
                if col + 1 < BOARD_SIDE {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
