//! Session restore example: normalize a saved design record and lay it out

use label_sheet::{DesignSnapshot, PatternKind, compute_layout, restore};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "debug".into()))
        .init();

    // A saved record with a few out-of-range fields, as it might come back
    // from storage after an editor bug or a hand-edited value
    let saved = DesignSnapshot {
        label_width: 6.0,
        label_height: 4.0,
        repeat_count: 0,
        text: "Plum Chutney".to_string(),
        text_x: 12.0,
        text_y: 1.0,
        pattern: PatternKind::Grid,
        ..Default::default()
    };

    let snapshot = restore(Some(saved));
    println!(
        "Restored '{}': {}x{} cm, {} copies, text at ({:.1}, {:.1})",
        snapshot.text,
        snapshot.label_width,
        snapshot.label_height,
        snapshot.repeat_count,
        snapshot.text_x,
        snapshot.text_y,
    );

    let layout = compute_layout(&snapshot.layout_request());
    println!("Layout needs {} sheet(s)", layout.total_pages());

    // A hard reload clears storage and starts from the default design
    let fresh = restore(None);
    println!(
        "Fresh session: {}x{} cm, {} copy",
        fresh.label_width, fresh.label_height, fresh.repeat_count,
    );

    Ok(())
}
