use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CarouselConfig {
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub gesture: GestureConfig,
    #[serde(default)]
    pub motion: MotionConfig,
    #[serde(default)]
    pub lock: LockConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Number of items visible at once
    #[serde(default = "default_columns")]
    pub columns: u32,
    /// Gap between items in px
    #[serde(default = "default_gap")]
    pub gap: f64,
    /// Padding on the left and right of the track in px
    #[serde(default = "default_horizontal_padding")]
    pub horizontal_padding: f64,
    /// Pixels of the next item left visible
    #[serde(default = "default_peek_amount")]
    pub peek_amount: f64,
    /// Rubber-banding applied when a drag pulls past the track bounds
    #[serde(default)]
    pub edge_resistance: EdgeResistance,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            columns: default_columns(),
            gap: default_gap(),
            horizontal_padding: default_horizontal_padding(),
            peek_amount: default_peek_amount(),
            edge_resistance: EdgeResistance::default(),
        }
    }
}

/// Resistance presets for dragging past the first or last item
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeResistance {
    /// Hard stop at the bounds
    #[default]
    None,
    Tight,
    Moderate,
    Loose,
}

impl EdgeResistance {
    /// Maximum overshoot in px and the fraction of the overshoot that is applied
    pub fn pull(&self) -> Option<(f64, f64)> {
        match self {
            EdgeResistance::None => None,
            EdgeResistance::Tight => Some((40.0, 0.15)),
            EdgeResistance::Moderate => Some((70.0, 0.25)),
            EdgeResistance::Loose => Some((120.0, 0.35)),
        }
    }
}

/// How the glide distance thresholds are interpreted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThresholdMode {
    /// Absolute pixel thresholds
    #[default]
    Fixed,
    /// Fractions of the measured container width
    ContainerRelative,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GestureConfig {
    /// Release velocity (px/s) that corresponds to skipping one item
    #[serde(default = "default_velocity_scaler")]
    pub velocity_scaler: f64,
    /// Percentage of the item width a short drag must travel to advance
    #[serde(default = "default_snap_threshold_pct")]
    pub snap_threshold_pct: f64,
    /// Treat glides that resolve to a single item as snaps
    #[serde(default = "default_true")]
    pub downgrade_single_card_glides: bool,
    #[serde(default)]
    pub threshold_mode: ThresholdMode,
    #[serde(default = "default_high_confidence_distance")]
    pub high_confidence_distance: f64,
    #[serde(default = "default_medium_distance")]
    pub medium_distance: f64,
    #[serde(default = "default_medium_velocity")]
    pub medium_velocity: f64,
    #[serde(default = "default_medium_acceleration")]
    pub medium_acceleration: f64,
    #[serde(default = "default_energetic_distance")]
    pub energetic_distance: f64,
    #[serde(default = "default_energetic_velocity")]
    pub energetic_velocity: f64,
    #[serde(default = "default_energetic_acceleration")]
    pub energetic_acceleration: f64,
    /// Container fractions used in `container_relative` mode
    #[serde(default = "default_relative_high_confidence")]
    pub relative_high_confidence: f64,
    #[serde(default = "default_relative_medium")]
    pub relative_medium: f64,
    #[serde(default = "default_relative_energetic")]
    pub relative_energetic: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            velocity_scaler: default_velocity_scaler(),
            snap_threshold_pct: default_snap_threshold_pct(),
            downgrade_single_card_glides: default_true(),
            threshold_mode: ThresholdMode::default(),
            high_confidence_distance: default_high_confidence_distance(),
            medium_distance: default_medium_distance(),
            medium_velocity: default_medium_velocity(),
            medium_acceleration: default_medium_acceleration(),
            energetic_distance: default_energetic_distance(),
            energetic_velocity: default_energetic_velocity(),
            energetic_acceleration: default_energetic_acceleration(),
            relative_high_confidence: default_relative_high_confidence(),
            relative_medium: default_relative_medium(),
            relative_energetic: default_relative_energetic(),
        }
    }
}

impl GestureConfig {
    /// Glide distance thresholds (high confidence, medium, energetic) for a container
    ///
    /// Falls back to the fixed values while the container is unmeasured.
    pub fn distance_thresholds(&self, container_width: f64) -> (f64, f64, f64) {
        match self.threshold_mode {
            ThresholdMode::ContainerRelative if container_width > 0.0 => (
                container_width * self.relative_high_confidence,
                container_width * self.relative_medium,
                container_width * self.relative_energetic,
            ),
            _ => (
                self.high_confidence_distance,
                self.medium_distance,
                self.energetic_distance,
            ),
        }
    }
}

/// Easing curves for duration-based transitions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    None,
    Linear,
    Cubic,
    Quintic,
    #[default]
    EaseOut,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotionConfig {
    /// Spring used for single-item transitions
    #[serde(default = "default_snap_stiffness")]
    pub snap_stiffness: f64,
    #[serde(default = "default_snap_damping")]
    pub snap_damping: f64,
    /// Loose spring for the momentum phase of a multi-item glide
    #[serde(default = "default_glide_stiffness")]
    pub glide_stiffness: f64,
    #[serde(default = "default_glide_damping")]
    pub glide_damping: f64,
    /// Stiff spring for the corrective phase of a multi-item glide
    #[serde(default = "default_settle_stiffness")]
    pub settle_stiffness: f64,
    #[serde(default = "default_settle_damping")]
    pub settle_damping: f64,
    /// Velocity (px/s) injected by keyboard, arrow and dot navigation
    #[serde(default = "default_step_velocity")]
    pub step_velocity: f64,
    /// Duration of tween transitions; 0 uses springs
    #[serde(default)]
    pub tween_duration_ms: u64,
    #[serde(default)]
    pub easing: EasingType,
    /// Distance from the target (px) under which a spring may come to rest
    #[serde(default = "default_rest_delta")]
    pub rest_delta: f64,
    /// Speed (px/s) under which a spring may come to rest
    #[serde(default = "default_rest_speed")]
    pub rest_speed: f64,
    /// Frames per second used by hosts that drive the controller on a timer
    #[serde(default = "default_frame_rate")]
    pub frame_rate: u32,
    /// Run multi-column glides as one firmer spring instead of two phases
    #[serde(default)]
    pub multi_column_single_phase: bool,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            snap_stiffness: default_snap_stiffness(),
            snap_damping: default_snap_damping(),
            glide_stiffness: default_glide_stiffness(),
            glide_damping: default_glide_damping(),
            settle_stiffness: default_settle_stiffness(),
            settle_damping: default_settle_damping(),
            step_velocity: default_step_velocity(),
            tween_duration_ms: 0,
            easing: EasingType::default(),
            rest_delta: default_rest_delta(),
            rest_speed: default_rest_speed(),
            frame_rate: default_frame_rate(),
            multi_column_single_phase: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LockConfig {
    /// Displacement (px) below which no decision is attempted
    #[serde(default = "default_noise_floor")]
    pub noise_floor: f64,
    /// Drags flatter than this angle (degrees) lock horizontal
    #[serde(default = "default_horizontal_max_angle")]
    pub horizontal_max_angle: f64,
    /// Drags steeper than this angle (degrees) lock vertical
    #[serde(default = "default_vertical_min_angle")]
    pub vertical_min_angle: f64,
    /// Displacement (px) at which a diagonal drag is forced to decide
    #[serde(default = "default_decision_distance")]
    pub decision_distance: f64,
}

impl Default for LockConfig {
    fn default() -> Self {
        Self {
            noise_floor: default_noise_floor(),
            horizontal_max_angle: default_horizontal_max_angle(),
            vertical_min_angle: default_vertical_min_angle(),
            decision_distance: default_decision_distance(),
        }
    }
}

/// Keymap configuration using Vim-style notation
/// Format: "h", "<Left>", "<C-n>" (Ctrl+n), "<S-Tab>" (Shift+Tab), "<Home>", "<Space>"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeymapConfig {
    /// Step to the previous item
    #[serde(default = "default_key_previous")]
    pub previous: String,
    /// Step to the next item
    #[serde(default = "default_key_next")]
    pub next: String,
    /// Jump to the first item
    #[serde(default = "default_key_first")]
    pub first: String,
    /// Jump to the last reachable item
    #[serde(default = "default_key_last")]
    pub last: String,
    /// Leave the interactive session
    #[serde(default = "default_key_quit")]
    pub quit: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            previous: default_key_previous(),
            next: default_key_next(),
            first: default_key_first(),
            last: default_key_last(),
            quit: default_key_quit(),
        }
    }
}

fn default_key_previous() -> String { "h".to_string() }
fn default_key_next() -> String { "l".to_string() }
fn default_key_first() -> String { "<Home>".to_string() }
fn default_key_last() -> String { "<End>".to_string() }
fn default_key_quit() -> String { "q".to_string() }

fn default_true() -> bool {
    true
}

fn default_columns() -> u32 {
    1
}

fn default_gap() -> f64 {
    8.0
}

fn default_horizontal_padding() -> f64 {
    16.0
}

fn default_peek_amount() -> f64 {
    16.0
}

fn default_velocity_scaler() -> f64 {
    300.0
}

fn default_snap_threshold_pct() -> f64 {
    10.0
}

// Glide tiers, validated against recorded swipe data
fn default_high_confidence_distance() -> f64 {
    145.0
}

fn default_medium_distance() -> f64 {
    88.0
}

fn default_medium_velocity() -> f64 {
    75.0
}

fn default_medium_acceleration() -> f64 {
    18.0
}

fn default_energetic_distance() -> f64 {
    100.0
}

fn default_energetic_velocity() -> f64 {
    110.0
}

fn default_energetic_acceleration() -> f64 {
    35.0
}

fn default_relative_high_confidence() -> f64 {
    0.50
}

fn default_relative_medium() -> f64 {
    0.40
}

fn default_relative_energetic() -> f64 {
    0.45
}

fn default_snap_stiffness() -> f64 {
    500.0
}

fn default_snap_damping() -> f64 {
    55.0
}

fn default_glide_stiffness() -> f64 {
    120.0
}

fn default_glide_damping() -> f64 {
    25.0
}

fn default_settle_stiffness() -> f64 {
    1000.0
}

fn default_settle_damping() -> f64 {
    80.0
}

fn default_step_velocity() -> f64 {
    200.0
}

fn default_rest_delta() -> f64 {
    0.5
}

fn default_rest_speed() -> f64 {
    2.0
}

fn default_frame_rate() -> u32 {
    60
}

fn default_noise_floor() -> f64 {
    3.0
}

fn default_horizontal_max_angle() -> f64 {
    30.0
}

fn default_vertical_min_angle() -> f64 {
    60.0
}

fn default_decision_distance() -> f64 {
    25.0
}

/// Upper bounds that keep spring sub-stepping to a bounded amount of work per frame
const MAX_SPRING_STIFFNESS: f64 = 1_000_000.0;
const MAX_SPRING_DAMPING: f64 = 10_000.0;

fn config_error(field: &str, requirement: &str) -> crate::Error {
    crate::Error::Config(format!("{} must be {}", field, requirement))
}

impl CarouselConfig {
    /// Load configuration from the default path or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load and validate configuration from an explicit path
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self =
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))?;
        if let Err(e) = config.validate() {
            tracing::warn!(path = %path.display(), error = %e, "Rejected configuration");
            return Err(e);
        }
        Ok(config)
    }

    /// Save configuration to a file, creating parent directories
    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = self.to_toml()?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Serialize to pretty TOML
    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Get the configuration file path
    /// Always uses ~/.config/swipedeck/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("swipedeck")
            .join("config.toml")
    }

    /// Check every tunable against its permitted range
    pub fn validate(&self) -> crate::Result<()> {
        let layout = &self.layout;
        if layout.columns < 1 {
            return Err(config_error("layout.columns", "at least 1"));
        }
        for (field, value) in [
            ("layout.gap", layout.gap),
            ("layout.horizontal_padding", layout.horizontal_padding),
            ("layout.peek_amount", layout.peek_amount),
        ] {
            if !(value >= 0.0 && value.is_finite()) {
                return Err(config_error(field, "a finite non-negative number"));
            }
        }

        let gesture = &self.gesture;
        if !(gesture.velocity_scaler > 0.0 && gesture.velocity_scaler.is_finite()) {
            return Err(config_error("gesture.velocity_scaler", "positive"));
        }
        if !(gesture.snap_threshold_pct >= 0.0) {
            return Err(config_error("gesture.snap_threshold_pct", "non-negative"));
        }
        for (field, value) in [
            ("gesture.high_confidence_distance", gesture.high_confidence_distance),
            ("gesture.medium_distance", gesture.medium_distance),
            ("gesture.medium_velocity", gesture.medium_velocity),
            ("gesture.medium_acceleration", gesture.medium_acceleration),
            ("gesture.energetic_distance", gesture.energetic_distance),
            ("gesture.energetic_velocity", gesture.energetic_velocity),
            ("gesture.energetic_acceleration", gesture.energetic_acceleration),
        ] {
            if !(value >= 0.0) {
                return Err(config_error(field, "non-negative"));
            }
        }
        for (field, value) in [
            ("gesture.relative_high_confidence", gesture.relative_high_confidence),
            ("gesture.relative_medium", gesture.relative_medium),
            ("gesture.relative_energetic", gesture.relative_energetic),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(config_error(field, "in (0, 1]"));
            }
        }

        let motion = &self.motion;
        for (field, value) in [
            ("motion.snap_stiffness", motion.snap_stiffness),
            ("motion.glide_stiffness", motion.glide_stiffness),
            ("motion.settle_stiffness", motion.settle_stiffness),
            ("motion.rest_delta", motion.rest_delta),
            ("motion.rest_speed", motion.rest_speed),
        ] {
            if !(value > 0.0 && value.is_finite()) {
                return Err(config_error(field, "positive"));
            }
        }
        for (field, value) in [
            ("motion.snap_damping", motion.snap_damping),
            ("motion.glide_damping", motion.glide_damping),
            ("motion.settle_damping", motion.settle_damping),
            ("motion.step_velocity", motion.step_velocity),
        ] {
            if !(value >= 0.0 && value.is_finite()) {
                return Err(config_error(field, "a finite non-negative number"));
            }
        }
        for (field, value) in [
            ("motion.snap_stiffness", motion.snap_stiffness),
            ("motion.glide_stiffness", motion.glide_stiffness),
            ("motion.settle_stiffness", motion.settle_stiffness),
        ] {
            if value > MAX_SPRING_STIFFNESS {
                return Err(config_error(
                    field,
                    &format!("at most {}", MAX_SPRING_STIFFNESS),
                ));
            }
        }
        for (field, value) in [
            ("motion.snap_damping", motion.snap_damping),
            ("motion.glide_damping", motion.glide_damping),
            ("motion.settle_damping", motion.settle_damping),
        ] {
            if value > MAX_SPRING_DAMPING {
                return Err(config_error(field, &format!("at most {}", MAX_SPRING_DAMPING)));
            }
        }
        if motion.frame_rate == 0 {
            return Err(config_error("motion.frame_rate", "at least 1"));
        }

        let lock = &self.lock;
        if !(lock.noise_floor >= 0.0) {
            return Err(config_error("lock.noise_floor", "non-negative"));
        }
        if !(0.0..=90.0).contains(&lock.horizontal_max_angle)
            || !(0.0..=90.0).contains(&lock.vertical_min_angle)
        {
            return Err(config_error("lock angles", "between 0 and 90 degrees"));
        }
        if lock.horizontal_max_angle > lock.vertical_min_angle {
            return Err(config_error(
                "lock.horizontal_max_angle",
                "no greater than lock.vertical_min_angle",
            ));
        }
        if lock.decision_distance < lock.noise_floor {
            return Err(config_error(
                "lock.decision_distance",
                "no smaller than lock.noise_floor",
            ));
        }

        Ok(())
    }
}
