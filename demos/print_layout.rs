//! Print layout example: tile a 6x4 cm label 20 times onto A4 sheets

use label_sheet::{LabelSize, LayoutRequest, SheetGeometry, compute_layout};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging with debug level
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "debug".into()))
        .init();

    let sheet = SheetGeometry::a4();
    let label = LabelSize::new(6.0, 4.0)?;
    let request = LayoutRequest::new(sheet, label, 20);

    let layout = compute_layout(&request);

    println!(
        "Grid capacity: {} per row x {} per column ({} per sheet)",
        layout.capacity.per_row,
        layout.capacity.per_column,
        layout.capacity.per_sheet(),
    );
    println!(
        "Spacing: {:.2} cm horizontal, {:.2} cm vertical",
        layout.capacity.h_spacing, layout.capacity.v_spacing,
    );

    for sheet in &layout.sheets {
        println!(
            "Sheet {}: labels {}..{} as a {}x{} grid{}",
            sheet.number,
            sheet.start_index,
            sheet.end_index,
            sheet.columns,
            sheet.rows,
            if sheet.is_last { " (last)" } else { "" },
        );
    }

    let mut cursor = layout.cursor();
    cursor.end();
    println!("Jumped to page {} of {}", cursor.current_page(), cursor.total_pages());

    Ok(())
}
