//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `taskboard_core` linkage.
//! - Seed a small demo board and print its partitions as JSON.

use taskboard_core::{partition, BoardService, ProjectStatus};

fn main() {
    // Optional first argument: absolute log directory for file logging.
    if let Some(log_dir) = std::env::args().nth(1) {
        if let Err(error) = taskboard_core::init_logging(taskboard_core::default_log_level(), &log_dir) {
            eprintln!("logging disabled: {error}");
        }
    }

    println!("taskboard_core version={}", taskboard_core::core_version());

    let mut board = BoardService::new();
    let bridge = board
        .submit("Build bridge", "Concrete structure", "3")
        .expect("demo input is valid");
    board
        .submit("Paint fence", "White, two coats", "1")
        .expect("demo input is valid");
    board.complete_drop(&bridge.to_string(), ProjectStatus::Finished);

    let snapshot = board.store().snapshot();
    for status in [ProjectStatus::Active, ProjectStatus::Finished] {
        let slice = partition(&snapshot, status);
        let json = serde_json::to_string_pretty(&slice).expect("snapshot serializes");
        println!("{status:?}: {json}");
    }
}
