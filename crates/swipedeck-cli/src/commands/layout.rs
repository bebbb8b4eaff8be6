use anyhow::Result;

use swipedeck_core::{CarouselConfig, CarouselGeometry, LayoutInputs};

pub fn run(config: &CarouselConfig, width: f64, items: usize, columns: Option<u32>) -> Result<()> {
    let mut layout = config.layout.clone();
    if let Some(columns) = columns {
        layout.columns = columns;
    }

    let geometry = CarouselGeometry::compute(LayoutInputs::from_config(&layout, width), items);
    let inputs = &geometry.inputs;

    println!(
        "Container {}px, {} items, {} column(s), gap {}px, padding {}px, peek {}px\n",
        width, items, inputs.columns, inputs.gap, inputs.horizontal_padding, inputs.peek_amount
    );

    if !geometry.is_ready() {
        println!("Layout not ready: no room for items at this width.");
        return Ok(());
    }

    println!("  Item width:   {:.2}px", geometry.item_width);
    println!("  Stride:       {:.2}px", geometry.item_stride);
    println!("  Max index:    {}", geometry.max_index);
    println!(
        "  Drag bounds:  [{:.2}, {:.2}]",
        geometry.drag_bounds.min, geometry.drag_bounds.max
    );
    if items > 0 {
        println!("  Last item:    {:.2}px", geometry.final_item_width(items - 1));
    }
    if geometry.is_degenerate() {
        println!("\nFewer than two items: the carousel is static.");
        return Ok(());
    }

    println!("\nRest positions:");
    for index in 0..=geometry.max_index {
        println!("  {:>3}: {:.2}", index, geometry.position_for(index));
    }

    Ok(())
}
