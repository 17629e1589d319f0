//! Basic usage example of the comparely_core library

use comparely_core::render::changes_panel_html;
use comparely_core::{compare, ChangeCursor, DiffAlgorithm, DiffConfig, DiffEngine, GranularityPolicy};

const LINE: &str = "----------------------------------------";

fn main() {
    tracing_subscriber::fmt::init();

    println!("=== Document Comparison Examples ===\n");

    // Example 1: Simple comparison with the default configuration
    example_simple_compare();

    // Example 2: Arabic text is compared character by character
    example_arabic();

    // Example 3: Custom configuration
    example_custom_config();

    // Example 4: Walking through changes
    example_navigation();
}

fn example_simple_compare() {
    println!("Example 1: Simple Comparison");
    println!("{}", LINE);

    let original = "Hello World! This is a test.";
    let modified = "Hello Rust! This is a  test.";

    let result = compare(original, modified);

    println!("Original: {}", original);
    println!("Modified: {}", modified);
    println!("\n{}", result.summary.status);
    println!("\nChanges:");
    for change in &result.changes {
        println!("  {}  \"{}\"", change.label(), change.text);
    }
    println!("\nLeft:  {}", result.left_column.to_html());
    println!("Right: {}", result.right_column.to_html());
    println!();
}

fn example_arabic() {
    println!("Example 2: Arabic Text");
    println!("{}", LINE);

    let result = compare("مرحبا بالعالم", "مرحبا بالعالمين");

    println!("Granularity: {:?}", result.granularity);
    for change in &result.changes {
        println!("  {}  \"{}\"", change.label(), change.text);
    }
    println!();
}

fn example_custom_config() {
    println!("Example 3: Custom Configuration");
    println!("{}", LINE);

    let config = DiffConfig::minimal()
        .with_algorithm(DiffAlgorithm::Lcs)
        .with_granularity(GranularityPolicy::Character);
    let engine = DiffEngine::new(config);

    let result = engine.compare("colour", "color");

    println!("{}", result.summary.status);
    println!("{}", changes_panel_html(&result.changes));
    println!();
}

fn example_navigation() {
    println!("Example 4: Navigation");
    println!("{}", LINE);

    let result = compare(
        "The quick brown fox jumps over the lazy dog.",
        "The quick red fox leaps over the lazy dog!",
    );
    let mut cursor = ChangeCursor::new(&result.changes);

    loop {
        let fragment = cursor
            .target(&result.changes)
            .and_then(|id| result.fragment(id));
        if let Some(fragment) = fragment {
            println!(
                "  [{}] #{} {:?}",
                cursor.position_label(),
                cursor.anchor(&result.changes).unwrap_or_default(),
                fragment.text
            );
        }
        if cursor.is_last() {
            break;
        }
        cursor.next(&result.changes);
    }
    println!();
}
