//! Ship name generation from fixed word banks.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Offset applied to the ship seed so the naming stream never tracks a deck
/// noise stream (those offset by at most a few thousand).
const NAME_STREAM_OFFSET: i64 = 1_000_000;

static PREFIXES: &[&str] = &[
    "ISS",
    "USS",
    "HMS",
    "SCS",
    "TNS",
    "Freighter",
    "Cruiser",
    "Scout",
    "Hauler",
];

static ADJECTIVES: &[&str] = &[
    "Wandering",
    "Crimson",
    "Silent",
    "Burning",
    "Frozen",
    "Radiant",
    "Shadow",
    "Golden",
    "Iron",
    "Stellar",
    "Cosmic",
    "Eternal",
    "Swift",
    "Valiant",
    "Daring",
];

static NOUNS: &[&str] = &[
    "Star",
    "Dawn",
    "Horizon",
    "Phoenix",
    "Eclipse",
    "Voyager",
    "Pioneer",
    "Serpent",
    "Dragon",
    "Falcon",
    "Raven",
    "Wolf",
    "Bear",
    "Spirit",
    "Fortune",
];

// The empty suffix drops the trailing designation entirely.
static SUFFIXES: &[&str] = &["II", "III", "IV", "V", "Prime", "Alpha", "Omega", ""];

/// Deterministic pick-and-combine ship name generator.
#[derive(Debug)]
pub struct NameGenerator {
    rng: StdRng,
}

impl NameGenerator {
    pub fn new(seed: i64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed.wrapping_add(NAME_STREAM_OFFSET) as u64),
        }
    }

    fn pick(&mut self, bank: &'static [&'static str]) -> &'static str {
        bank[self.rng.gen_range(0..bank.len())]
    }

    /// `"<prefix> <adjective> <noun>[ <suffix>]"`.
    pub fn generate(&mut self) -> String {
        let prefix = self.pick(PREFIXES);
        let adjective = self.pick(ADJECTIVES);
        let noun = self.pick(NOUNS);
        let suffix = self.pick(SUFFIXES);

        if suffix.is_empty() {
            format!("{prefix} {adjective} {noun}")
        } else {
            format!("{prefix} {adjective} {noun} {suffix}")
        }
    }
}
