use std::path::Path;

use anyhow::Result;
use tokio::time::{interval, Interval, MissedTickBehavior};

use swipedeck_core::{CarouselConfig, NavigationEvent};
use swipedeck_input::{GestureTrace, ReplayRecord, TraceEvent, TracePlayer};

/// Frames allowed after the last event for motion to come to rest
const MAX_SETTLE_FRAMES: u64 = 3600;

pub async fn run(config: &CarouselConfig, path: &Path, realtime: bool, frames: bool) -> Result<()> {
    let trace = GestureTrace::load(path)?;
    let mut player = TracePlayer::new(&trace, config.clone());

    println!(
        "Replaying {} event(s): {}px container, {} items, {:.2}ms frames\n",
        trace.events.len(),
        trace.container_width,
        trace.items,
        player.frame().as_secs_f64() * 1000.0
    );

    let mut pacer = realtime.then(|| {
        let mut pacer = interval(player.frame());
        pacer.set_missed_tick_behavior(MissedTickBehavior::Delay);
        pacer
    });

    for event in &trace.events {
        match event {
            TraceEvent::Wait { ms } => {
                for _ in 0..player.frames_for(*ms) {
                    wait_frame(&mut pacer).await;
                    print_records(&player.tick(), frames);
                }
            }
            other => print_records(&player.apply(other), frames),
        }
    }

    let mut settle_frames = 0;
    while player.session().controller().is_transitioning() && settle_frames < MAX_SETTLE_FRAMES {
        wait_frame(&mut pacer).await;
        print_records(&player.tick(), frames);
        settle_frames += 1;
    }

    let state = player.session().controller().state();
    println!(
        "\nFinal: index {} at {:.2}px after {:.0}ms{}",
        state.current_index,
        state.position,
        player.elapsed().as_secs_f64() * 1000.0,
        if state.is_transitioning {
            " (still moving)"
        } else {
            ""
        }
    );

    Ok(())
}

async fn wait_frame(pacer: &mut Option<Interval>) {
    if let Some(pacer) = pacer {
        pacer.tick().await;
    }
}

fn print_records(records: &[ReplayRecord], frames: bool) {
    for record in records {
        if !frames && matches!(record, ReplayRecord::Frame { .. }) {
            continue;
        }
        println!("{}", describe(record));
    }
}

fn describe(record: &ReplayRecord) -> String {
    match record {
        ReplayRecord::Locked(state) => format!("lock      {:?}", state),
        ReplayRecord::Verdict(verdict) => format!(
            "verdict   delta {:+}, multi-skip {}, velocity {:.1}, tier {:?}",
            verdict.target_index_delta, verdict.is_multi_skip, verdict.carried_velocity, verdict.tier
        ),
        ReplayRecord::Key(action) => format!("key       {:?}", action),
        ReplayRecord::Started(start) => format!(
            "start     #{} index {} ({:.2} -> {:.2}, {:?})",
            start.id.get(),
            start.index,
            start.start_position,
            start.target_position,
            start.profile
        ),
        ReplayRecord::Frame { elapsed, position } => format!(
            "frame     {:>8.1}ms  {:.2}",
            elapsed.as_secs_f64() * 1000.0,
            position
        ),
        ReplayRecord::Navigation(NavigationEvent::PhaseChanged { id, position }) => {
            format!("phase     #{} settling from {:.2}", id.get(), position)
        }
        ReplayRecord::Navigation(NavigationEvent::Settled { id, index }) => {
            format!("settled   #{} on index {}", id.get(), index)
        }
        ReplayRecord::Resized { width, index } => {
            format!("resize    {}px, index {}", width, index)
        }
    }
}
