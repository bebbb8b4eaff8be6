//! Tiered snap/glide classification
//!
//! A finished drag is summarized as distance, release velocity and peak
//! acceleration. The first glide tier that matches turns the release velocity
//! into a multi-item jump; otherwise the drag either steps one item or snaps
//! back, depending on how far it travelled relative to the item width.

use tracing::debug;

use super::tracker::DragSummary;
use crate::config::GestureConfig;
use crate::layout::CarouselGeometry;

/// Glide tier that matched a drag, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlideTier {
    /// Long drag, accepted on distance alone
    HighConfidence,
    /// Medium drag where distance, velocity and acceleration all agree
    Medium,
    /// Medium-long drag with a strong velocity or a burst of acceleration
    Energetic,
}

/// Carousel state a drag is classified against
#[derive(Debug, Clone, Copy)]
pub struct ClassifyContext<'a> {
    pub geometry: &'a CarouselGeometry,
    pub current_index: usize,
    /// Live track position at release
    pub current_position: f64,
}

/// Outcome of classifying one drag
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureVerdict {
    /// Signed index change; 0 snaps back to the current index
    pub target_index_delta: i64,
    pub is_multi_skip: bool,
    /// Release speed signed towards the resolved target position
    pub carried_velocity: f64,
    /// Glide tier that fired, if any
    pub tier: Option<GlideTier>,
}

impl GestureVerdict {
    /// Absolute index the verdict resolves to, before clamping
    pub fn target_index(&self, current_index: usize) -> i64 {
        current_index as i64 + self.target_index_delta
    }
}

/// Classify a finished drag. Pure: identical inputs give identical verdicts.
pub fn classify(
    summary: &DragSummary,
    context: &ClassifyContext<'_>,
    config: &GestureConfig,
) -> GestureVerdict {
    let geometry = context.geometry;
    let tier = match_tier(summary, config, geometry.inputs.container_width);
    let direction = summary.direction.sign();

    let (target_index_delta, is_multi_skip) = match tier {
        Some(_) => {
            let index_jump = ((summary.velocity / config.velocity_scaler).round() as i64).max(1);
            let is_multi_skip = !(config.downgrade_single_card_glides && index_jump == 1);
            (direction * index_jump, is_multi_skip)
        }
        None => {
            let distance_threshold = geometry.item_width * (config.snap_threshold_pct / 100.0);
            if summary.distance > distance_threshold {
                (direction, false)
            } else {
                (0, false)
            }
        }
    };

    // Sign the carried velocity by the real direction of travel so a release
    // that disagrees with the drag does not wind up before moving.
    let target_index = geometry.clamp_index(context.current_index as i64 + target_index_delta);
    let target_position = geometry.position_for(target_index);
    let travel = target_position - context.current_position;
    let carried_velocity = if travel > 0.0 {
        summary.velocity.abs()
    } else if travel < 0.0 {
        -summary.velocity.abs()
    } else {
        0.0
    };

    debug!(
        ?tier,
        distance = summary.distance,
        velocity = summary.velocity,
        peak_acceleration = summary.peak_acceleration,
        target_index_delta,
        is_multi_skip,
        "Classified drag"
    );

    GestureVerdict {
        target_index_delta,
        is_multi_skip,
        carried_velocity,
        tier,
    }
}

fn match_tier(
    summary: &DragSummary,
    config: &GestureConfig,
    container_width: f64,
) -> Option<GlideTier> {
    let (high_confidence, medium, energetic) = config.distance_thresholds(container_width);
    let DragSummary {
        distance,
        velocity,
        peak_acceleration,
        ..
    } = *summary;

    if distance > high_confidence {
        Some(GlideTier::HighConfidence)
    } else if distance > medium
        && velocity > config.medium_velocity
        && peak_acceleration > config.medium_acceleration
    {
        Some(GlideTier::Medium)
    } else if distance > energetic
        && (velocity > config.energetic_velocity
            || peak_acceleration > config.energetic_acceleration)
    {
        Some(GlideTier::Energetic)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ThresholdMode;
    use crate::gesture::Direction;
    use crate::layout::LayoutInputs;

    // 300px items, 308px stride, 20 items
    fn geometry() -> CarouselGeometry {
        CarouselGeometry::compute(
            LayoutInputs {
                container_width: 332.0,
                columns: 1,
                gap: 8.0,
                horizontal_padding: 16.0,
                peek_amount: 0.0,
            },
            20,
        )
    }

    fn summary(distance: f64, velocity: f64, peak_acceleration: f64) -> DragSummary {
        DragSummary {
            distance,
            velocity,
            peak_acceleration,
            direction: Direction::Forward,
        }
    }

    fn run(summary: &DragSummary, current_index: usize) -> GestureVerdict {
        let geometry = geometry();
        let context = ClassifyContext {
            geometry: &geometry,
            current_index,
            current_position: geometry.position_for(current_index),
        };
        classify(summary, &context, &GestureConfig::default())
    }

    #[test]
    fn test_geometry_fixture() {
        assert!((geometry().item_width - 300.0).abs() < 1e-9);
    }

    #[test]
    fn test_long_slow_drag_downgrades_to_snap() {
        // Tier 1 fires, jump = max(1, round(150/300)) = 1, downgraded
        let verdict = run(&summary(200.0, 150.0, 10.0), 5);
        assert_eq!(verdict.tier, Some(GlideTier::HighConfidence));
        assert_eq!(verdict.target_index_delta, 1);
        assert!(!verdict.is_multi_skip);
    }

    #[test]
    fn test_downgrade_can_be_disabled() {
        let geometry = geometry();
        let context = ClassifyContext {
            geometry: &geometry,
            current_index: 5,
            current_position: geometry.position_for(5),
        };
        let config = GestureConfig {
            downgrade_single_card_glides: false,
            ..Default::default()
        };
        let verdict = classify(&summary(200.0, 150.0, 10.0), &context, &config);
        assert!(verdict.is_multi_skip);
        assert_eq!(verdict.target_index_delta, 1);
    }

    #[test]
    fn test_medium_tier_requires_all_signals() {
        let verdict = run(&summary(90.0, 80.0, 20.0), 5);
        assert_eq!(verdict.tier, Some(GlideTier::Medium));
        // round(80 / 300) = 0, clamped up to a one-item jump, then downgraded to a snap
        assert_eq!(verdict.target_index_delta, 1);
        assert!(!verdict.is_multi_skip);

        // Acceleration too low: no glide, but 90 > 30 still steps
        let verdict = run(&summary(90.0, 80.0, 10.0), 5);
        assert_eq!(verdict.tier, None);
        assert_eq!(verdict.target_index_delta, 1);
        assert!(!verdict.is_multi_skip);
    }

    #[test]
    fn test_fast_medium_glide_skips_multiple() {
        let verdict = run(&summary(90.0, 950.0, 40.0), 5);
        assert_eq!(verdict.tier, Some(GlideTier::Medium));
        // round(950 / 300) = 3
        assert_eq!(verdict.target_index_delta, 3);
        assert!(verdict.is_multi_skip);
    }

    #[test]
    fn test_energetic_tier() {
        let verdict = run(&summary(120.0, 700.0, 5.0), 5);
        assert_eq!(verdict.tier, Some(GlideTier::Energetic));
        assert_eq!(verdict.target_index_delta, 2);
        assert!(verdict.is_multi_skip);

        let verdict = run(&summary(120.0, 50.0, 40.0), 5);
        assert_eq!(verdict.tier, Some(GlideTier::Energetic));

        let verdict = run(&summary(120.0, 50.0, 5.0), 5);
        assert_eq!(verdict.tier, None);
    }

    #[test]
    fn test_short_fast_flick_steps_once() {
        let verdict = run(&summary(60.0, 500.0, 5.0), 5);
        assert_eq!(verdict.tier, None);
        assert_eq!(verdict.target_index_delta, 1);
        assert!(!verdict.is_multi_skip);
    }

    #[test]
    fn test_tiny_drag_snaps_back() {
        let verdict = run(&summary(10.0, 500.0, 5.0), 5);
        assert_eq!(verdict.target_index_delta, 0);
        assert!(!verdict.is_multi_skip);
        assert_eq!(verdict.carried_velocity, 0.0);
    }

    #[test]
    fn test_backward_direction() {
        let mut backward = summary(300.0, 1250.0, 50.0);
        backward.direction = Direction::Backward;
        let verdict = run(&backward, 10);
        // round(1250 / 300) = 4
        assert_eq!(verdict.target_index_delta, -4);
        assert_eq!(verdict.target_index(10), 6);
    }

    #[test]
    fn test_carried_velocity_follows_travel() {
        let geometry = geometry();
        // Forward gesture from index 2, released 40px short of index 3
        let context = ClassifyContext {
            geometry: &geometry,
            current_index: 2,
            current_position: geometry.position_for(3) + 40.0,
        };
        let verdict = classify(&summary(60.0, 500.0, 5.0), &context, &GestureConfig::default());
        assert_eq!(verdict.target_index_delta, 1);
        // Target lies at a more negative position than the live one
        assert_eq!(verdict.carried_velocity, -500.0);

        // Overdragged past the target: travel reverses, so does the velocity
        let context = ClassifyContext {
            current_position: geometry.position_for(3) - 40.0,
            ..context
        };
        let verdict = classify(&summary(60.0, 500.0, 5.0), &context, &GestureConfig::default());
        assert_eq!(verdict.carried_velocity, 500.0);
    }

    #[test]
    fn test_container_relative_thresholds() {
        let geometry = geometry();
        let context = ClassifyContext {
            geometry: &geometry,
            current_index: 0,
            current_position: 0.0,
        };
        let config = GestureConfig {
            threshold_mode: ThresholdMode::ContainerRelative,
            ..Default::default()
        };
        // 332 * 0.5 = 166: a 150px drag no longer counts as high confidence
        let verdict = classify(&summary(150.0, 100.0, 0.0), &context, &config);
        assert_eq!(verdict.tier, None);
        let verdict = classify(&summary(170.0, 100.0, 0.0), &context, &config);
        assert_eq!(verdict.tier, Some(GlideTier::HighConfidence));
    }

    #[test]
    fn test_classification_is_deterministic() {
        let input = summary(130.0, 640.0, 22.0);
        assert_eq!(run(&input, 7), run(&input, 7));
    }
}
