//! Simple standalone example of object list usage.
//!
//! This example walks through the list operations, key renumbering and the
//! serialization round trip.
//!
//! Run with: RUST_LOG=trace cargo run --example simple

use object_list::{Key, ObjectList};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> object_list::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Simple Object List Example ===\n");

    let mut tasks = ObjectList::new();
    tasks
        .append("write docs".to_string())
        .append("review patch".to_string())
        .append("cut release".to_string());
    tasks.insert("urgent", "fix build".to_string());

    print_list("Initial list", &tasks);

    // Shift renumbers integer keys but leaves "urgent" alone
    if let Some(done) = tasks.shift() {
        println!("\nCompleted: {done}");
    }
    print_list("After shift", &tasks);

    tasks.unshift("plan sprint".to_string());
    print_list("After unshift", &tasks);

    let removed = tasks.splice(1, 1, ["triage issues".to_string()]);
    println!("\nSpliced out: {:?}", removed.values().collect::<Vec<_>>());
    print_list("After splice", &tasks);

    let tail = tasks.slice(-2, None, true);
    print_list("Last two (keys preserved)", &tail);

    println!("\nWalking with `each`, stopping at the string key:");
    tasks.each(|task| {
        println!("  - {task}");
        task != "fix build"
    });

    let lengths = tasks.map(String::len);
    print_list("Task name lengths", &lengths);

    let blob = tasks.serialize()?;
    println!("\nSerialized: {blob}");

    let mut restored = ObjectList::<String>::new();
    restored.deserialize(&blob)?;
    info!(count = restored.count(), "Restored list");
    println!("Round trip equal: {}", restored == tasks);

    if let Err(err) = restored.deserialize("[[0,\"a\"],[0,\"b\"]]") {
        println!("Rejected blob: {err}");
    }
    println!("Still intact: {}", restored.count() == tasks.count());

    let mut shuffled = tasks.duplicate();
    shuffled.shuffle();
    print_list("Shuffled copy", &shuffled);
    println!(
        "Original still has \"urgent\": {}",
        tasks.exists(Key::from("urgent"))
    );

    Ok(())
}

fn print_list<V: std::fmt::Display>(title: &str, list: &ObjectList<V>) {
    println!("\n{title}:");
    let mut cursor = list.cursor();
    while cursor.valid() {
        if let (Some(key), Some(value)) = (cursor.key(), cursor.current()) {
            println!("  [{key}] {value}");
        }
        cursor.advance();
    }
}
