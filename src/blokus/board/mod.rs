pub(crate) mod adjacency;
pub(crate) mod board_cell;
pub(crate) mod indexing;
pub(crate) mod pretty;

use super::prelude::*;

pub use adjacency::AdjacencyIndex;
pub use board_cell::BoardCell;

/// The three-way answer to "who owns this cell". Off-board is its own case so it
/// can never be mistaken for an empty cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellOwner {
    Empty,
    Player(PlayerId),
    OutOfBounds,
}

/// The grid of cells on a Blokus board, sized for the largest mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Grid(pub [[BoardCell; MAX_BOARD_SIZE]; MAX_BOARD_SIZE]);

/// Ground truth of cell ownership, plus the per-player adjacency indices derived from it.
#[derive(Clone, Debug)]
pub struct Board {
    /// The playable extent; cells at or beyond `size` in either axis are off-board.
    size: usize,

    /// A grid of squares on the board, each empty or owned by one player.
    cells: Grid,

    /// One index per seat. A placement only ever dirties the placing player's index.
    adjacency: [AdjacencyIndex; NUM_PLAYERS],
}

impl Board {
    /// Returns a new, empty board of the given size.
    pub fn new(size: usize) -> Result<Board> {
        if size == 0 || size > MAX_BOARD_SIZE {
            return Err(anyhow!("board size must be between 1 and {MAX_BOARD_SIZE}, received {size}"));
        }
        Ok(Board {
            size,
            cells: Grid::default(),
            adjacency: Default::default(),
        })
    }

    /// The side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Determines the owner of a cell. Never panics; negative or oversized
    /// coordinates answer `OutOfBounds`.
    pub fn cell_owner(&self, row: isize, col: isize) -> CellOwner {
        self.owner_at(&OffsetCoord::new(row, col))
    }

    /// As `cell_owner`, for an offset coordinate.
    pub fn owner_at(&self, coord: &OffsetCoord) -> CellOwner {
        match self.get(coord) {
            None       => CellOwner::OutOfBounds,
            Some(cell) => cell.owner().map_or(CellOwner::Empty, CellOwner::Player),
        }
    }

    /// Whether the cell is on the board and nobody owns it.
    pub fn is_empty_at(&self, coord: &OffsetCoord) -> bool {
        self.owner_at(coord) == CellOwner::Empty
    }

    /// Places cells for a player. All-or-nothing: any off-board cell fails with
    /// `OutOfBounds`, otherwise any owned cell fails with `CellOccupied`, and in
    /// either case the board is untouched.
    ///
    /// This is the only way ownership changes. It dirties the placing player's
    /// adjacency index and no other.
    pub fn place(&mut self, cells: &[OffsetCoord], player: PlayerId) -> Result<(), GameError> {
        if cells.iter().any(|c| !c.in_bounds_signed(self.size)) {
            return Err(GameError::OutOfBounds);
        }
        if cells.iter().any(|c| !self.is_empty_at(c)) {
            return Err(GameError::CellOccupied);
        }

        cells.iter().for_each(|c| {
            self.set_owner_unchecked(&c.coerce(), player);
        });
        self.adjacency[player.index()].invalidate(cells.iter().map(|c| c.coerce()));
        Ok(())
    }

    /// Clears every cell and every index.
    pub fn reset(&mut self) {
        self.cells = Grid::default();
        self.adjacency = Default::default();
    }

    /// Brings a player's adjacency index up to date with the board.
    pub fn ensure_fresh(&mut self, player: PlayerId) {
        let size = self.size;
        self.adjacency[player.index()].ensure_fresh(size);
    }

    /// Brings every player's adjacency index up to date.
    pub fn ensure_all_fresh(&mut self) {
        PlayerId::all().into_iter().for_each(|p| self.ensure_fresh(p));
    }

    /// Gets a player's adjacency index. Call `ensure_fresh` after placing first.
    pub fn adjacency(&self, player: PlayerId) -> &AdjacencyIndex {
        let index = &self.adjacency[player.index()];
        debug_assert!(!index.is_dirty(), "adjacency index for player {player} read while stale");
        index
    }

    /// A cell is a valid corner for a player if it is a cached corner candidate and
    /// is still empty on the live board (an opponent may have taken it since).
    pub fn is_valid_corner(&self, player: PlayerId, cell: &OffsetCoord) -> bool {
        self.adjacency(player).is_corner_candidate(cell) && self.is_empty_at(cell)
    }

    /// Whether any of the cells shares an edge with the player's own pieces.
    pub fn touches_forbidden_edge(&self, player: PlayerId, cells: &[OffsetCoord]) -> bool {
        self.adjacency(player).touches_forbidden_edge(cells)
    }

    /// Counts the owned cells on the board.
    pub fn count_occupied(&self) -> usize {
        self.coords().filter(|c| !self.get_unchecked(c).is_empty()).count()
    }

    /// Scans the grid for the cells a player owns. Prefer the adjacency index on hot paths.
    pub fn cells_of(&self, player: PlayerId) -> CoordSet {
        self.coords().filter(|c| self.get_unchecked(c).owner() == Some(player)).collect()
    }

    /// The grid as rows of snapshot values (0 empty, 1-4 owner).
    pub fn grid_values(&self) -> Vec<Vec<u8>> {
        (0..self.size).map(|row| {
            (0..self.size).map(|col| self.cells.0[row][col].grid_value()).collect()
        }).collect()
    }

    /// Builds a board from rows of snapshot values, deriving every index from scratch.
    pub fn from_grid_values(rows: &[Vec<u8>]) -> Result<Board> {
        let mut board = Board::new(rows.len())?;
        for (r, row) in rows.iter().enumerate() {
            if row.len() != board.size {
                return Err(anyhow!("grid row {r} has {} cells, expected {}", row.len(), board.size));
            }
            for (c, value) in row.iter().enumerate() {
                board.cells.0[r][c] = BoardCell::from_grid_value(*value).with_context(|| format!("at cell ({r}, {c})"))?;
            }
        }
        for player in PlayerId::all() {
            let occupied = board.cells_of(player);
            let size = board.size;
            board.adjacency[player.index()].rebuild(&occupied, size);
        }
        Ok(board)
    }

    /// Every on-board coordinate, row-major.
    fn coords(&self) -> impl Iterator<Item = Coord> + use<> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Coord::new(row, col)))
    }
}
