//! Counter example binary
//!
//! Drives a counter seeded from the first argument (default 0) and prints the
//! value after every operation.

use counter::CounterStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "counter=debug,pocket_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let initial = match std::env::args().nth(1).map(|arg| arg.parse::<i64>()) {
        Some(Ok(value)) => value,
        Some(Err(error)) => {
            eprintln!("initial value must be an integer: {error}");
            std::process::exit(2);
        },
        None => 0,
    };

    println!("=== Counter Example ===\n");

    let mut counter = CounterStore::with_initial(initial);
    println!("Initial count: {}", counter.value());

    for _ in 0..3 {
        println!("\n>>> Increment");
        counter.increment();
        println!("Count: {}", counter.value());
    }

    println!("\n>>> Decrement");
    counter.decrement();
    println!("Count: {}", counter.value());

    println!("\n>>> Reset");
    counter.reset();
    println!("Count after Reset: {} (initial {})", counter.value(), counter.initial());

    println!("\n=== Demo Complete ===");
}
