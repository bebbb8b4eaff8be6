use anyhow::Result;

use swipedeck_core::{
    classify, CarouselConfig, CarouselGeometry, ClassifyContext, Direction, DragSummary,
    LayoutInputs,
};

/// Drag release described on the command line
pub struct DragInput {
    pub distance: f64,
    pub velocity: f64,
    pub acceleration: f64,
    pub backward: bool,
}

pub fn run(
    config: &CarouselConfig,
    drag: DragInput,
    index: usize,
    width: f64,
    items: usize,
) -> Result<()> {
    let geometry =
        CarouselGeometry::compute(LayoutInputs::from_config(&config.layout, width), items);
    if !geometry.is_ready() || geometry.is_degenerate() {
        println!("Carousel is not interactive at {}px with {} item(s).", width, items);
        return Ok(());
    }

    let current_index = geometry.clamp_index(index as i64);
    let summary = DragSummary {
        distance: drag.distance.abs(),
        velocity: drag.velocity.abs(),
        peak_acceleration: drag.acceleration.abs(),
        direction: if drag.backward {
            Direction::Backward
        } else {
            Direction::Forward
        },
    };
    let context = ClassifyContext {
        geometry: &geometry,
        current_index,
        current_position: geometry.position_for(current_index),
    };
    let verdict = classify(&summary, &context, &config.gesture);
    let target = geometry.clamp_index(verdict.target_index(current_index));

    let kind = match (verdict.tier, verdict.is_multi_skip, verdict.target_index_delta) {
        (_, _, 0) => "snap back",
        (_, true, _) => "glide",
        (Some(_), false, _) => "glide downgraded to snap",
        (None, false, _) => "snap",
    };

    println!(
        "Drag {:.1}px at {:.1}px/s (peak acceleration {:.1}), {:?}\n",
        summary.distance, summary.velocity, summary.peak_acceleration, summary.direction
    );
    match verdict.tier {
        Some(tier) => println!("  Tier:             {:?}", tier),
        None => println!(
            "  Tier:             none (step threshold {:.1}px)",
            geometry.item_width * config.gesture.snap_threshold_pct / 100.0
        ),
    }
    println!("  Result:           {}", kind);
    println!("  Index delta:      {:+}", verdict.target_index_delta);
    println!("  Target index:     {} -> {}", current_index, target);
    println!("  Carried velocity: {:.1}px/s", verdict.carried_velocity);

    Ok(())
}
