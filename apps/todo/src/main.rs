//! Simple CLI walkthrough for the to-do store.
//!
//! Drives a store through add, toggle and remove and prints the list after
//! each step, the way a screen would re-render.

use todo::{TodoId, TodoItem, TodoStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn print_list(items: &[TodoItem]) {
    for todo in items {
        let status = if todo.completed { "✓" } else { " " };
        println!("  [{status}] #{} {}", todo.id, todo.text);
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Todo Example ===\n");

    let mut store = TodoStore::new();
    println!("Sample todos:");
    print_list(store.list());

    println!("\nAdding 'Write tests'...");
    store.add("Write tests");
    print_list(store.list());

    println!("\nAdding '   ' (ignored, blank)...");
    store.add("   ");
    println!("  still {} todos", store.count());

    if let Some(last) = store.list().last().map(|t| t.id) {
        println!("\nToggling #{last}...");
        store.toggle(last);
        print_list(store.list());
    }

    println!("\nRemoving #1...");
    store.remove(TodoId::new(1));
    print_list(store.list());

    println!("\nRemoving #1 again (ignored, already gone)...");
    store.remove(TodoId::new(1));

    println!(
        "\nCompleted: {}/{}",
        store.completed_count(),
        store.count()
    );
    println!("\n=== Demo Complete ===");
}
