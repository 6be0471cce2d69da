//! Procedural starship deck-layout generation.
//!
//! From a single integer seed, deckforge produces a complete multi-deck
//! starship: a noise-carved hull silhouette, named functional rooms packed
//! onto each deck, vertically aligned turbolift shafts, and structural
//! bulkheads. Identical seed and dimensions always yield an identical ship.
//!
//! Generation is a pure, synchronous computation. Each call allocates and
//! owns its own grids and noise streams, so independent callers can
//! generate concurrently with no coordination.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`grid`] | Cell vocabulary and the row-major deck grid |
//! | [`noise`] | Seeded 2D noise: raw, normalized, and fractal queries |
//! | [`hull`] | Hull silhouette carving (ellipse, noise, bow taper) |
//! | [`rooms`] | Room catalog, scored placement, corridor sealing |
//! | [`names`] | Ship name generation from fixed word banks |
//! | [`ship`] | Multi-deck assembly: turbolifts, bulkheads, deck naming |
//!
//! # Example
//!
//! ```
//! use deckforge_core::{generate, ShipConfig};
//!
//! let ship = generate(&ShipConfig {
//!     seed: Some(42),
//!     ..Default::default()
//! })
//! .unwrap();
//!
//! assert!(ship.deck_count >= 2 && ship.deck_count <= 5);
//! assert_eq!(ship.decks.len(), ship.deck_count);
//! ```

pub mod grid;
pub mod hull;
pub mod names;
pub mod noise;
pub mod rooms;
pub mod ship;

pub use grid::{Cell, CellType, Grid, GridPos};
pub use names::NameGenerator;
pub use noise::NoiseField;
pub use rooms::{Room, RoomSpec, ROOM_CATALOG};
pub use ship::{generate, ConfigError, Deck, Ship, ShipConfig};
