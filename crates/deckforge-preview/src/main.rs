//! Headless preview harness for deckforge.
//!
//! Generates a ship and prints each deck as a character map with a room
//! manifest, or the full ship as JSON. Runs entirely in-process: no window,
//! no rendering stack.
//!
//! Usage:
//!   cargo run -p deckforge-preview
//!   cargo run -p deckforge-preview -- --seed 42 --width 60 --height 30
//!   cargo run -p deckforge-preview -- --seed 42 --json

use deckforge_core::{generate, CellType, Deck, Ship, ShipConfig};

struct Args {
    config: ShipConfig,
    json: bool,
}

fn main() {
    env_logger::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{msg}");
            eprintln!("usage: deckforge-preview [--seed N] [--width N] [--height N] [--json]");
            std::process::exit(2);
        }
    };

    let ship = match generate(&args.config) {
        Ok(ship) => ship,
        Err(e) => {
            eprintln!("generation failed: {e}");
            std::process::exit(1);
        }
    };

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&ship).expect("ship serializes")
        );
    } else {
        print_ship(&ship);
    }
}

fn parse_args() -> Result<Args, String> {
    let mut config = ShipConfig::default();
    let mut json = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => config.seed = Some(parse_value(&arg, args.next())?),
            "--width" => config.width = parse_value(&arg, args.next())?,
            "--height" => config.height = parse_value(&arg, args.next())?,
            "--json" => json = true,
            other => return Err(format!("unknown argument: {other}")),
        }
    }

    Ok(Args { config, json })
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<String>) -> Result<T, String> {
    let value = value.ok_or_else(|| format!("{flag} needs a value"))?;
    value
        .parse()
        .map_err(|_| format!("{flag}: cannot parse {value:?}"))
}

fn print_ship(ship: &Ship) {
    println!(
        "=== {} (seed {}, {}x{}, {} decks, {} turbolift shafts) ===",
        ship.name,
        ship.seed,
        ship.width,
        ship.height,
        ship.deck_count,
        ship.turbolift_positions.len()
    );

    for deck in &ship.decks {
        println!();
        print_deck(deck);
    }
}

fn print_deck(deck: &Deck) {
    println!("--- Deck {}: {} ---", deck.number, deck.name);

    for y in 0..deck.grid.height() {
        let mut line = String::with_capacity(deck.grid.width());
        for x in 0..deck.grid.width() {
            line.push(symbol(deck.grid.get(x, y).kind));
        }
        println!("{line}");
    }

    if deck.rooms.is_empty() {
        println!("(no rooms)");
        return;
    }
    for room in &deck.rooms {
        println!(
            "  #{:<3} {:<14} {} cells",
            room.id,
            room.name,
            room.cells.len()
        );
    }
}

fn symbol(kind: CellType) -> char {
    match kind {
        CellType::Empty => ' ',
        CellType::Hull => '#',
        CellType::Floor => ',',
        CellType::Wall => '+',
        CellType::Door => '/',
        CellType::Bridge => 'B',
        CellType::Engineering => 'E',
        CellType::Cargo => 'C',
        CellType::Quarters => 'Q',
        CellType::Medbay => 'M',
        CellType::Airlock => 'A',
        CellType::Corridor => '.',
        CellType::Turbolift => 'T',
        CellType::Bulkhead => '=',
    }
}
