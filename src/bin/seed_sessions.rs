use study_tracker::database::Database;
use study_tracker::sample_data::{seed_database, seeded_rng};
use std::env;

fn main() {
    env_logger::init();
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <database_file> [seed]", args[0]);
        eprintln!();
        eprintln!("Fills a database with a month of sample study sessions.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  <database_file>  Path to the SQLite database file");
        eprintln!("  [seed]           Random seed, for repeatable data");
        eprintln!();
        eprintln!("Example: {} study_tracker.db 42", args[0]);
        std::process::exit(1);
    }

    let db_path = &args[1];
    let seed = match args.get(2).map(|s| s.parse::<u64>()) {
        Some(Ok(seed)) => seed,
        Some(Err(_)) => {
            eprintln!("Invalid seed '{}': expected a non-negative integer", args[2]);
            std::process::exit(1);
        }
        None => rand::random(),
    };

    let db = match Database::new(db_path) {
        Ok(db) => db,
        Err(e) => {
            eprintln!("Error opening database: {}", e);
            std::process::exit(1);
        }
    };

    match seed_database(&db, &mut seeded_rng(seed)) {
        Ok(count) => println!("Recorded {} sample session(s) in {} (seed {})", count, db_path, seed),
        Err(e) => {
            eprintln!("Error seeding database: {}", e);
            std::process::exit(1);
        }
    }
}
