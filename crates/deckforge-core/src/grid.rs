//! Cell vocabulary and the row-major deck grid.

use serde::{Deserialize, Serialize};

/// What occupies a single grid cell.
///
/// `Floor` is transient: by the time a deck finishes generating, every Floor
/// cell has become a room cell, Corridor, Turbolift, or Bulkhead. `Wall` and
/// `Door` are part of the closed vocabulary but are never emitted by the
/// generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellType {
    Empty,
    Hull,
    Floor,
    Wall,
    Door,
    Bridge,
    Engineering,
    Cargo,
    Quarters,
    Medbay,
    Airlock,
    Corridor,
    Turbolift,
    Bulkhead,
}

impl CellType {
    /// Room-bearing cell types. Cells of these types carry a room id.
    pub fn is_room(self) -> bool {
        matches!(
            self,
            CellType::Bridge
                | CellType::Engineering
                | CellType::Cargo
                | CellType::Quarters
                | CellType::Medbay
                | CellType::Airlock
        )
    }
}

/// One cell of a deck grid.
///
/// `room_id` is meaningful iff `kind.is_room()`. `deck` is set once the cell
/// has been attributed to a deck; after assembly every non-Empty cell has it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub kind: CellType,
    pub room_id: Option<u32>,
    pub deck: Option<u32>,
}

impl Cell {
    /// A cell of the given type with no room or deck attribution.
    pub fn of(kind: CellType) -> Self {
        Self {
            kind,
            room_id: None,
            deck: None,
        }
    }

    pub fn empty() -> Self {
        Self::of(CellType::Empty)
    }
}

/// A coordinate on a deck grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPos {
    pub x: usize,
    pub y: usize,
}

/// Row-major 2D grid of cells. Every deck of one ship shares identical
/// dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// A width x height grid of Empty cells.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::empty(); width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, x: isize, y: isize) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Panics if (x, y) is out of bounds.
    pub fn get(&self, x: usize, y: usize) -> &Cell {
        &self.cells[y * self.width + x]
    }

    /// Panics if (x, y) is out of bounds.
    pub fn get_mut(&mut self, x: usize, y: usize) -> &mut Cell {
        &mut self.cells[y * self.width + x]
    }

    /// Panics if (x, y) is out of bounds.
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        self.cells[y * self.width + x] = cell;
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// (position, cell) pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (GridPos, &Cell)> {
        self.cells.iter().enumerate().map(move |(i, cell)| {
            (
                GridPos {
                    x: i % self.width,
                    y: i / self.width,
                },
                cell,
            )
        })
    }
}
