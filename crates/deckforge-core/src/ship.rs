//! Multi-deck ship assembly.
//!
//! Drives one hull-carve + room-placement pass per deck, punches the shared
//! turbolift shafts and structural bulkheads into every deck, and aggregates
//! the result into an immutable [`Ship`].

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::grid::{Cell, CellType, Grid, GridPos};
use crate::hull;
use crate::names::NameGenerator;
use crate::noise::NoiseField;
use crate::rooms::{self, Room};

/// Seed stride between consecutive per-deck noise streams.
const DECK_SEED_STRIDE: i64 = 1000;

/// Fixed probe for the deck-count derivation. Off the noise lattice at
/// scale 0.1, so the sample actually varies with the seed.
const DECK_COUNT_PROBE: (f64, f64) = (13.0, 7.0);

/// Fixed probe for the turbolift-count derivation.
const TURBOLIFT_COUNT_PROBE: (f64, f64) = (29.0, 3.0);

/// The beam is divided into this many equal sections by bulkheads.
const BULKHEAD_SECTIONS: usize = 5;

/// Generation parameters.
///
/// With no explicit seed, a process-chosen random seed in [0, 1_000_000)
/// is drawn; regenerating is just another [`generate`] call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipConfig {
    pub seed: Option<i64>,
    pub width: usize,
    pub height: usize,
}

impl Default for ShipConfig {
    fn default() -> Self {
        Self {
            seed: None,
            width: 60,
            height: 30,
        }
    }
}

/// Configuration rejected before any generation work starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Width and height must both be at least 1.
    InvalidDimensions { width: usize, height: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidDimensions { width, height } => {
                write!(f, "invalid grid dimensions {width}x{height}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// One fully realized deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    /// 1-based, counted from the top of the ship.
    pub number: u32,
    pub name: String,
    pub grid: Grid,
    pub rooms: Vec<Room>,
}

/// A fully generated ship. Nothing is mutated after this value is returned;
/// regeneration produces an entirely new, independent ship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ship {
    pub name: String,
    pub width: usize,
    pub height: usize,
    pub seed: i64,
    pub deck_count: usize,
    pub decks: Vec<Deck>,
    /// Union of every deck's rooms, in deck order.
    pub rooms: Vec<Room>,
    /// Shaft coordinates shared verbatim by every deck.
    pub turbolift_positions: Vec<GridPos>,
    /// Deck 1's grid, kept for single-deck consumers.
    pub grid: Grid,
}

/// Generate a ship from the given configuration.
///
/// The only failure is a zero dimension; a room spec that cannot fit, or a
/// shaft landing outside the hull, is skipped and never surfaces as an
/// error.
pub fn generate(config: &ShipConfig) -> Result<Ship, ConfigError> {
    if config.width == 0 || config.height == 0 {
        return Err(ConfigError::InvalidDimensions {
            width: config.width,
            height: config.height,
        });
    }
    let (width, height) = (config.width, config.height);
    let seed = config
        .seed
        .unwrap_or_else(|| rand::thread_rng().gen_range(0..1_000_000i64));
    log::info!("generating ship: seed={seed} {width}x{height}");

    let base_noise = NoiseField::new(seed);
    let deck_count = derive_deck_count(&base_noise);
    let shafts = turbolift_shafts(&base_noise, width, height);

    let mut decks = Vec::with_capacity(deck_count);
    let mut all_rooms: Vec<Room> = Vec::new();

    for deck_index in 0..deck_count {
        let deck_noise = NoiseField::new(seed + deck_index as i64 * DECK_SEED_STRIDE);
        let deck_number = deck_index as u32 + 1;

        let mut grid = hull::carve(width, height, &deck_noise);
        stamp_turbolifts(&mut grid, &shafts);
        let deck_rooms = rooms::place_rooms(
            &mut grid,
            &deck_noise,
            deck_index,
            deck_count,
            all_rooms.len() as u32,
        );
        carve_bulkheads(&mut grid, &deck_noise);
        stamp_deck_number(&mut grid, deck_number);

        log::debug!("deck {deck_number}: {} rooms", deck_rooms.len());
        all_rooms.extend(deck_rooms.iter().cloned());
        decks.push(Deck {
            number: deck_number,
            name: deck_name(deck_index, deck_count),
            grid,
            rooms: deck_rooms,
        });
    }

    let primary_grid = decks[0].grid.clone();
    let ship = Ship {
        name: NameGenerator::new(seed).generate(),
        width,
        height,
        seed,
        deck_count,
        decks,
        rooms: all_rooms,
        turbolift_positions: shafts,
        grid: primary_grid,
    };
    log::info!(
        "ship '{}': {} decks, {} rooms, {} turbolift shafts",
        ship.name,
        ship.deck_count,
        ship.rooms.len(),
        ship.turbolift_positions.len()
    );
    Ok(ship)
}

/// Between 2 and 5 decks, derived once from the base noise stream.
fn derive_deck_count(noise: &NoiseField) -> usize {
    let n = noise.normalized(DECK_COUNT_PROBE.0, DECK_COUNT_PROBE.1, 0.1);
    ((2.0 + n * 4.0).floor() as usize).clamp(2, 5)
}

fn derive_turbolift_count(noise: &NoiseField) -> usize {
    let n = noise.normalized(TURBOLIFT_COUNT_PROBE.0, TURBOLIFT_COUNT_PROBE.1, 0.1);
    (2.0 + n * 3.0).floor() as usize
}

/// Shaft coordinates spread evenly along the ship's long axis, with a small
/// noise-driven lateral offset. Computed once and reused verbatim on every
/// deck so each shaft is vertically contiguous.
fn turbolift_shafts(noise: &NoiseField, width: usize, height: usize) -> Vec<GridPos> {
    let count = derive_turbolift_count(noise);
    let mut shafts = Vec::with_capacity(count);
    for i in 0..count {
        let t = (i + 1) as f64 / (count + 1) as f64;
        let y = ((t * height as f64).floor() as usize).min(height - 1);

        // Lateral jitter in [-2, 2] around the center-line.
        let jitter = (noise.normalized((i as f64 + 1.0) * 7.0, 3.0, 0.3) - 0.5) * 4.0;
        let x = (width as f64 / 2.0 + jitter)
            .round()
            .clamp(0.0, width as f64 - 1.0) as usize;

        shafts.push(GridPos { x, y });
    }
    shafts
}

/// Punch shaft cells into a freshly carved deck. Only open Floor accepts a
/// shaft; an out-of-bounds or ineligible target is skipped for that deck.
fn stamp_turbolifts(grid: &mut Grid, shafts: &[GridPos]) {
    for pos in shafts {
        if !grid.in_bounds(pos.x as isize, pos.y as isize) {
            continue;
        }
        if grid.get(pos.x, pos.y).kind != CellType::Floor {
            continue;
        }
        grid.set(pos.x, pos.y, Cell::of(CellType::Turbolift));
    }
}

/// Cut full-height partitions at the four internal section boundaries of
/// the beam. Only Floor and Corridor cells are converted; rooms and
/// turbolift shafts are never overwritten.
fn carve_bulkheads(grid: &mut Grid, noise: &NoiseField) {
    let width = grid.width();
    if width < BULKHEAD_SECTIONS {
        return;
    }
    for section in 1..BULKHEAD_SECTIONS {
        let base = section * width / BULKHEAD_SECTIONS;
        let n = noise.normalized((section * 10) as f64, grid.height() as f64, 0.3);
        // Jitter in {-1, 0, 1}, kept at least 2 cells off either edge.
        let jitter = ((n - 0.5) * 2.0).round() as isize;
        let x = (base as isize + jitter).clamp(2, width as isize - 3) as usize;

        for y in 0..grid.height() {
            let kind = grid.get(x, y).kind;
            if kind == CellType::Floor || kind == CellType::Corridor {
                grid.set(x, y, Cell::of(CellType::Bulkhead));
            }
        }
    }
}

/// Attribute every non-Empty cell to its deck.
fn stamp_deck_number(grid: &mut Grid, deck_number: u32) {
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            if grid.get(x, y).kind == CellType::Empty {
                continue;
            }
            grid.get_mut(x, y).deck = Some(deck_number);
        }
    }
}

/// Display name for a deck, top to bottom.
fn deck_name(deck_index: usize, deck_count: usize) -> String {
    if deck_index == 0 {
        "Command Deck".to_string()
    } else if deck_index == deck_count - 1 {
        "Engineering Deck".to_string()
    } else {
        format!("Deck {}", deck_index + 1)
    }
}
