//! Room placement onto a hull-carved deck grid.
//!
//! Rooms come from a fixed catalog, processed in priority order: earlier
//! entries claim floor space first, shrinking what is available to later
//! ones. A spec that cannot fit is skipped, never an error. Whatever floor
//! is left after every spec has run becomes corridor space.

use serde::{Deserialize, Serialize};

use crate::grid::{Cell, CellType, Grid, GridPos};
use crate::noise::NoiseField;

/// Horizontal placement preference of a room spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XPreference {
    Front,
    Back,
    Center,
    Any,
}

/// Coarse vertical classification of a deck's position among all decks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckBand {
    Top,
    Bottom,
    Middle,
    Any,
}

impl DeckBand {
    /// Whether a deck at `deck_index` of `total_decks` falls inside this
    /// band. Position 0 is the top deck, 1 the bottom deck.
    pub fn allows(self, deck_index: usize, total_decks: usize) -> bool {
        let span = total_decks.saturating_sub(1).max(1);
        let position = deck_index as f64 / span as f64;
        match self {
            DeckBand::Any => true,
            DeckBand::Top => position < 0.4,
            DeckBand::Bottom => position > 0.6,
            DeckBand::Middle => (0.3..=0.7).contains(&position),
        }
    }
}

/// One entry of the fixed room catalog.
#[derive(Debug, Clone, Copy)]
pub struct RoomSpec {
    pub kind: CellType,
    pub name: &'static str,
    pub min_size: usize,
    pub max_size: usize,
    pub preferred_x: XPreference,
    pub preferred_band: DeckBand,
}

/// Catalog order is priority order.
pub static ROOM_CATALOG: &[RoomSpec] = &[
    RoomSpec {
        kind: CellType::Bridge,
        name: "Bridge",
        min_size: 4,
        max_size: 8,
        preferred_x: XPreference::Front,
        preferred_band: DeckBand::Top,
    },
    RoomSpec {
        kind: CellType::Engineering,
        name: "Engineering",
        min_size: 6,
        max_size: 12,
        preferred_x: XPreference::Back,
        preferred_band: DeckBand::Bottom,
    },
    RoomSpec {
        kind: CellType::Cargo,
        name: "Cargo Bay",
        min_size: 8,
        max_size: 16,
        preferred_x: XPreference::Center,
        preferred_band: DeckBand::Bottom,
    },
    RoomSpec {
        kind: CellType::Medbay,
        name: "Medbay",
        min_size: 3,
        max_size: 6,
        preferred_x: XPreference::Center,
        preferred_band: DeckBand::Middle,
    },
    RoomSpec {
        kind: CellType::Quarters,
        name: "Crew Quarters",
        min_size: 4,
        max_size: 8,
        preferred_x: XPreference::Center,
        preferred_band: DeckBand::Middle,
    },
    RoomSpec {
        kind: CellType::Airlock,
        name: "Airlock",
        min_size: 2,
        max_size: 3,
        preferred_x: XPreference::Any,
        preferred_band: DeckBand::Any,
    },
];

/// A placed room: a named, typed, non-empty set of claimed cells on one deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Unique across the whole ship, monotonic in placement order.
    pub id: u32,
    pub kind: CellType,
    pub name: String,
    /// 1-based deck number.
    pub deck: u32,
    pub cells: Vec<GridPos>,
}

/// Stamp catalog rooms onto the Floor cells of one deck, then seal the
/// leftover floor into corridors.
///
/// Room ids are allocated from `id_offset + 1` upward; pass the number of
/// rooms already placed on earlier decks to keep ids unique ship-wide.
pub fn place_rooms(
    grid: &mut Grid,
    noise: &NoiseField,
    deck_index: usize,
    total_decks: usize,
    id_offset: u32,
) -> Vec<Room> {
    let deck_number = deck_index as u32 + 1;
    let mut next_id = id_offset + 1;
    let mut rooms = Vec::new();

    for spec in ROOM_CATALOG {
        if !spec.preferred_band.allows(deck_index, total_decks) {
            continue;
        }
        match place_spec(grid, noise, spec, deck_number, next_id) {
            Some(room) => {
                next_id += 1;
                rooms.push(room);
            }
            None => {
                log::debug!("deck {deck_number}: no fit for {}", spec.name);
            }
        }
    }

    seal_corridors(grid);
    rooms
}

/// Place a single spec: pick the best-scoring candidate center and fill a
/// noise-sized square footprint around it. None when no candidate exists or
/// the fill claims no cells.
fn place_spec(
    grid: &mut Grid,
    noise: &NoiseField,
    spec: &RoomSpec,
    deck_number: u32,
    id: u32,
) -> Option<Room> {
    let center = best_candidate(grid, noise, spec)?;
    fill_room(grid, noise, spec, center, deck_number, id)
}

/// Scan every interior Floor cell that can center a minimum-size footprint,
/// keeping the highest-scoring one. The strict comparison keeps the first
/// candidate in row-major scan order on an exact score tie.
fn best_candidate(grid: &Grid, noise: &NoiseField, spec: &RoomSpec) -> Option<GridPos> {
    let mut best: Option<(f64, GridPos)> = None;

    for y in 1..grid.height().saturating_sub(1) {
        for x in 1..grid.width().saturating_sub(1) {
            if grid.get(x, y).kind != CellType::Floor {
                continue;
            }
            if !fits_at(grid, x, y, spec.min_size) {
                continue;
            }
            let score = score_position(grid, noise, x, y, spec.preferred_x);
            if best.map_or(true, |(s, _)| score > s) {
                best = Some((score, GridPos { x, y }));
            }
        }
    }

    best.map(|(_, pos)| pos)
}

/// Whether a square footprint of side `size`, centered on (x, y), lies
/// entirely within Floor cells. Out of bounds disqualifies.
fn fits_at(grid: &Grid, x: usize, y: usize, size: usize) -> bool {
    let half = (size / 2) as isize;
    for dy in -half..=half {
        for dx in -half..=half {
            let nx = x as isize + dx;
            let ny = y as isize + dy;
            if !grid.in_bounds(nx, ny) {
                return false;
            }
            if grid.get(nx as usize, ny as usize).kind != CellType::Floor {
                return false;
            }
        }
    }
    true
}

fn score_position(grid: &Grid, noise: &NoiseField, x: usize, y: usize, pref: XPreference) -> f64 {
    let normalized_x = x as f64 / grid.width() as f64;
    let n = noise.normalized(x as f64, y as f64, 0.2);

    let x_term = match pref {
        XPreference::Front => normalized_x,
        XPreference::Back => 1.0 - normalized_x,
        XPreference::Center => 1.0 - (0.5 - normalized_x).abs(),
        XPreference::Any => n,
    };

    x_term + n * 0.5
}

/// Claim a square footprint around `center`. The realized size is drawn from
/// noise between the spec's min and max; cells no longer Floor are silently
/// skipped, so the realized room can be smaller than its nominal footprint.
fn fill_room(
    grid: &mut Grid,
    noise: &NoiseField,
    spec: &RoomSpec,
    center: GridPos,
    deck_number: u32,
    id: u32,
) -> Option<Room> {
    let span = (spec.max_size - spec.min_size) as f64;
    let size = spec.min_size
        + (noise.normalized(center.x as f64, center.y as f64, 0.5) * span).floor() as usize;
    let half = (size / 2) as isize;

    let mut cells = Vec::new();
    for dy in -half..=half {
        for dx in -half..=half {
            let nx = center.x as isize + dx;
            let ny = center.y as isize + dy;
            if !grid.in_bounds(nx, ny) {
                continue;
            }
            let (ux, uy) = (nx as usize, ny as usize);
            if grid.get(ux, uy).kind != CellType::Floor {
                continue;
            }
            grid.set(
                ux,
                uy,
                Cell {
                    kind: spec.kind,
                    room_id: Some(id),
                    deck: Some(deck_number),
                },
            );
            cells.push(GridPos { x: ux, y: uy });
        }
    }

    if cells.is_empty() {
        return None;
    }
    Some(Room {
        id,
        kind: spec.kind,
        name: spec.name.to_string(),
        deck: deck_number,
        cells,
    })
}

/// Leftover floor becomes corridor space.
fn seal_corridors(grid: &mut Grid) {
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            if grid.get(x, y).kind == CellType::Floor {
                grid.set(x, y, Cell::of(CellType::Corridor));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_grid(width: usize, height: usize) -> Grid {
        let mut grid = Grid::new(width, height);
        for y in 0..height {
            for x in 0..width {
                grid.set(x, y, Cell::of(CellType::Floor));
            }
        }
        grid
    }

    #[test]
    fn deck_band_cutoffs() {
        // Five decks: positions 0, 0.25, 0.5, 0.75, 1.
        assert!(DeckBand::Top.allows(0, 5));
        assert!(DeckBand::Top.allows(1, 5));
        assert!(!DeckBand::Top.allows(2, 5));
        assert!(!DeckBand::Bottom.allows(2, 5));
        assert!(DeckBand::Bottom.allows(3, 5));
        assert!(DeckBand::Bottom.allows(4, 5));
        assert!(!DeckBand::Middle.allows(0, 5));
        assert!(DeckBand::Middle.allows(2, 5));
        assert!(!DeckBand::Middle.allows(4, 5));
        for index in 0..5 {
            assert!(DeckBand::Any.allows(index, 5));
        }
    }

    #[test]
    fn deck_band_two_decks() {
        // Positions 0 and 1: only the extreme bands match.
        assert!(DeckBand::Top.allows(0, 2));
        assert!(!DeckBand::Top.allows(1, 2));
        assert!(DeckBand::Bottom.allows(1, 2));
        assert!(!DeckBand::Middle.allows(0, 2));
        assert!(!DeckBand::Middle.allows(1, 2));
    }

    #[test]
    fn catalog_sizes_are_sane() {
        for spec in ROOM_CATALOG {
            assert!(spec.min_size >= 2, "{} min too small", spec.name);
            assert!(spec.min_size <= spec.max_size, "{} sizes inverted", spec.name);
            assert!(spec.kind.is_room(), "{} kind is not room-bearing", spec.name);
        }
    }

    /// An all-floor grid with a one-cell hull rim, like a carved deck.
    fn rimmed_grid(width: usize, height: usize) -> Grid {
        let mut grid = open_grid(width, height);
        for y in 0..height {
            for x in 0..width {
                if x == 0 || y == 0 || x == width - 1 || y == height - 1 {
                    grid.set(x, y, Cell::of(CellType::Hull));
                }
            }
        }
        grid
    }

    #[test]
    fn oversized_spec_is_skipped_not_fatal() {
        // A min-size-8 footprint needs a 9x9 all-floor block; a rimmed
        // 10x10 grid leaves only an 8x8 interior, so no candidate exists.
        let mut grid = rimmed_grid(10, 10);
        let noise = NoiseField::new(1);
        let spec = RoomSpec {
            kind: CellType::Cargo,
            name: "Cargo Bay",
            min_size: 8,
            max_size: 16,
            preferred_x: XPreference::Center,
            preferred_band: DeckBand::Any,
        };
        assert!(place_spec(&mut grid, &noise, &spec, 1, 1).is_none());
        // The grid is untouched by the failed placement.
        assert!(grid
            .cells()
            .iter()
            .all(|c| matches!(c.kind, CellType::Floor | CellType::Hull)));
    }

    #[test]
    fn placement_claims_contiguous_floor() {
        let mut grid = open_grid(20, 20);
        let noise = NoiseField::new(42);
        let spec = &ROOM_CATALOG[0]; // Bridge, min 4
        let room = place_spec(&mut grid, &noise, spec, 1, 1).expect("bridge fits on open 20x20");

        assert_eq!(room.id, 1);
        assert_eq!(room.kind, CellType::Bridge);
        assert!(!room.cells.is_empty());
        for pos in &room.cells {
            let cell = grid.get(pos.x, pos.y);
            assert_eq!(cell.kind, CellType::Bridge);
            assert_eq!(cell.room_id, Some(1));
            assert_eq!(cell.deck, Some(1));
        }
    }

    #[test]
    fn rooms_do_not_overlap() {
        let mut grid = open_grid(30, 30);
        let noise = NoiseField::new(7);
        let rooms = place_rooms(&mut grid, &noise, 2, 5, 0);

        assert!(!rooms.is_empty());
        let mut seen = std::collections::HashSet::new();
        for room in &rooms {
            for pos in &room.cells {
                assert!(
                    seen.insert((pos.x, pos.y)),
                    "cell ({}, {}) claimed twice",
                    pos.x,
                    pos.y
                );
            }
        }
    }

    #[test]
    fn ids_continue_from_offset() {
        let mut grid = open_grid(30, 30);
        let noise = NoiseField::new(7);
        let rooms = place_rooms(&mut grid, &noise, 2, 5, 10);

        for (i, room) in rooms.iter().enumerate() {
            assert_eq!(room.id, 11 + i as u32);
        }
    }

    #[test]
    fn no_floor_survives_placement() {
        let mut grid = open_grid(24, 24);
        let noise = NoiseField::new(3);
        place_rooms(&mut grid, &noise, 0, 3, 0);
        assert!(grid.cells().iter().all(|c| c.kind != CellType::Floor));
    }

    #[test]
    fn corridors_carry_no_room_id() {
        let mut grid = open_grid(24, 24);
        let noise = NoiseField::new(3);
        place_rooms(&mut grid, &noise, 0, 3, 0);
        for (_, cell) in grid.iter() {
            assert_eq!(cell.room_id.is_some(), cell.kind.is_room());
        }
    }

    #[test]
    fn band_filter_keeps_bridge_off_the_bottom_deck() {
        let mut grid = open_grid(30, 30);
        let noise = NoiseField::new(9);
        let rooms = place_rooms(&mut grid, &noise, 4, 5, 0);
        assert!(
            rooms.iter().all(|r| r.kind != CellType::Bridge),
            "bridge placed on the bottom deck"
        );
        assert!(
            rooms.iter().any(|r| r.kind == CellType::Engineering),
            "engineering missing from the bottom deck"
        );
    }

    #[test]
    fn placement_is_deterministic() {
        let noise = NoiseField::new(11);
        let mut a = open_grid(25, 25);
        let mut b = open_grid(25, 25);
        let rooms_a = place_rooms(&mut a, &noise, 1, 4, 0);
        let rooms_b = place_rooms(&mut b, &noise, 1, 4, 0);
        assert_eq!(rooms_a, rooms_b);
        assert_eq!(a, b);
    }
}
