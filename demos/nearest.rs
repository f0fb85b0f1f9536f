//! Example: "did you mean" suggestions with a bounded search.
//!
//! Run with:
//! `cargo run --example nearest -- <word>`

use bounded_edit::DistanceEngine;

const COMMANDS: &[&str] = &[
    "build", "check", "clean", "doc", "fetch", "init", "install", "publish", "run", "search",
    "test", "update",
];

fn main() {
    let word = std::env::args().nth(1).unwrap_or_else(|| "isntall".to_string());
    let query: Vec<char> = word.chars().collect();
    let candidates: Vec<Vec<char>> = COMMANDS.iter().map(|c| c.chars().collect()).collect();

    let mut engine = DistanceEngine::new();
    match engine.nearest(&query, &candidates) {
        Some(hit) if hit.distance == 0 => println!("'{word}' is a known command"),
        Some(hit) if hit.distance <= 2 => {
            println!("unknown command '{word}', did you mean '{}'?", COMMANDS[hit.index])
        }
        _ => println!("unknown command '{word}'"),
    }

    let close = engine.within(&query, &candidates, 3);
    println!("within 3 edits:");
    for hit in close {
        println!("  {:<8} {}", COMMANDS[hit.index], hit.distance);
    }
}
