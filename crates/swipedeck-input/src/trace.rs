//! Recorded gesture traces
//!
//! A trace is a JSON document describing a carousel and a sequence of input
//! events. [`TracePlayer`] replays it against a [`CarouselSession`] in
//! frame-sized steps so the same input always produces the same motion.
//!
//! ```json
//! {
//!   "container_width": 390,
//!   "items": 8,
//!   "events": [
//!     { "type": "drag_start" },
//!     { "type": "drag_sample", "dx": -40, "dy": 2, "vx": -600 },
//!     { "type": "drag_end", "dx": -170, "vx": -950 },
//!     { "type": "wait", "ms": 600 },
//!     { "type": "key", "key": "<End>" }
//!   ]
//! }
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use swipedeck_core::motion::timing::frame_duration;
use swipedeck_core::{
    CarouselConfig, Error, GestureVerdict, LockState, NavigationEvent, Result, TransitionStart,
};

use crate::input::Action;
use crate::keymap::parse_key_binding;
use crate::session::CarouselSession;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GestureTrace {
    pub container_width: f64,
    pub items: usize,
    #[serde(default)]
    pub events: Vec<TraceEvent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TraceEvent {
    DragStart,
    DragSample { dx: f64, dy: f64, vx: f64 },
    DragEnd { dx: f64, vx: f64 },
    /// Key press in Vim-style notation
    Key { key: String },
    /// Pagination dot activation
    GoTo { index: usize },
    Resize { width: f64 },
    /// Let frames run for this many milliseconds
    Wait { ms: u64 },
}

impl GestureTrace {
    pub fn from_json(json: &str) -> Result<Self> {
        let trace: Self = serde_json::from_str(json)?;
        trace.validate()?;
        Ok(trace)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Check that drag events are well nested and keys parse
    pub fn validate(&self) -> Result<()> {
        if !self.container_width.is_finite() || self.container_width < 0.0 {
            return Err(Error::InvalidTrace(format!(
                "container_width must be a non-negative number, got {}",
                self.container_width
            )));
        }

        let mut dragging = false;
        for (i, event) in self.events.iter().enumerate() {
            match event {
                TraceEvent::DragStart if dragging => {
                    return Err(invalid(i, "drag_start while a drag is active"));
                }
                TraceEvent::DragStart => dragging = true,
                TraceEvent::DragSample { .. } if !dragging => {
                    return Err(invalid(i, "drag_sample outside a drag"));
                }
                TraceEvent::DragEnd { .. } if !dragging => {
                    return Err(invalid(i, "drag_end without drag_start"));
                }
                TraceEvent::DragEnd { .. } => dragging = false,
                TraceEvent::Key { key } if parse_key_binding(key).is_none() => {
                    return Err(invalid(i, &format!("unrecognized key '{}'", key)));
                }
                TraceEvent::Resize { width } if !width.is_finite() || *width < 0.0 => {
                    return Err(invalid(i, "resize width must be non-negative"));
                }
                _ => {}
            }
        }

        if dragging {
            return Err(Error::InvalidTrace("trace ends inside a drag".to_string()));
        }
        Ok(())
    }
}

fn invalid(index: usize, message: &str) -> Error {
    Error::InvalidTrace(format!("event {}: {}", index, message))
}

/// Observable outcome of replaying one step
#[derive(Debug, Clone, PartialEq)]
pub enum ReplayRecord {
    Locked(LockState),
    Verdict(GestureVerdict),
    Key(Action),
    Started(TransitionStart),
    Frame { elapsed: Duration, position: f64 },
    Navigation(NavigationEvent),
    Resized { width: f64, index: usize },
}

/// Replays a trace against a fresh session
pub struct TracePlayer {
    session: CarouselSession,
    frame: Duration,
    elapsed: Duration,
    last_lock: LockState,
}

impl TracePlayer {
    pub fn new(trace: &GestureTrace, config: CarouselConfig) -> Self {
        let frame = frame_duration(config.motion.frame_rate);
        Self {
            session: CarouselSession::new(config, trace.container_width, trace.items),
            frame,
            elapsed: Duration::ZERO,
            last_lock: LockState::Undetermined,
        }
    }

    pub fn session(&self) -> &CarouselSession {
        &self.session
    }

    #[inline]
    pub fn frame(&self) -> Duration {
        self.frame
    }

    /// Simulated time advanced by frames so far
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Whole frames closest to `ms` milliseconds
    pub fn frames_for(&self, ms: u64) -> u64 {
        let frame_ms = self.frame.as_secs_f64() * 1000.0;
        (ms as f64 / frame_ms).round() as u64
    }

    /// Apply one non-wait event
    pub fn apply(&mut self, event: &TraceEvent) -> Vec<ReplayRecord> {
        let mut records = Vec::new();
        match event {
            TraceEvent::DragStart => {
                self.last_lock = LockState::Undetermined;
                self.session.drag_start();
            }
            TraceEvent::DragSample { dx, dy, vx } => {
                let response = self.session.drag_sample(*dx, *dy, *vx);
                if response.lock != self.last_lock {
                    self.last_lock = response.lock;
                    records.push(ReplayRecord::Locked(response.lock));
                }
            }
            TraceEvent::DragEnd { dx, vx } => {
                let outcome = self.session.drag_end(*dx, *vx);
                records.extend(outcome.verdict.map(ReplayRecord::Verdict));
                records.extend(outcome.transition.map(ReplayRecord::Started));
            }
            TraceEvent::Key { key } => {
                if let Some(binding) = parse_key_binding(key) {
                    let (action, start) = self.session.key(binding.to_key_event());
                    records.push(ReplayRecord::Key(action));
                    records.extend(start.map(ReplayRecord::Started));
                }
            }
            TraceEvent::GoTo { index } => {
                records.extend(self.session.go_to(*index).map(ReplayRecord::Started));
            }
            TraceEvent::Resize { width } => {
                self.session.resize(*width);
                records.push(ReplayRecord::Resized {
                    width: *width,
                    index: self.session.controller().current_index(),
                });
            }
            TraceEvent::Wait { .. } => {}
        }
        records
    }

    /// Advance one frame
    pub fn tick(&mut self) -> Vec<ReplayRecord> {
        self.elapsed += self.frame;
        let mut records = Vec::new();
        if !self.session.controller().is_transitioning() {
            return records;
        }
        let event = self.session.tick(self.frame);
        records.push(ReplayRecord::Frame {
            elapsed: self.elapsed,
            position: self.session.controller().position(),
        });
        records.extend(event.map(ReplayRecord::Navigation));
        records
    }

    /// Replay the whole trace without pacing, then let motion come to rest
    ///
    /// `max_settle_frames` bounds the trailing frames run after the last event.
    pub fn run_to_end(&mut self, trace: &GestureTrace, max_settle_frames: u64) -> Vec<ReplayRecord> {
        let mut records = Vec::new();
        for event in &trace.events {
            match event {
                TraceEvent::Wait { ms } => {
                    for _ in 0..self.frames_for(*ms) {
                        records.extend(self.tick());
                    }
                }
                other => records.extend(self.apply(other)),
            }
        }
        for _ in 0..max_settle_frames {
            if !self.session.controller().is_transitioning() {
                break;
            }
            records.extend(self.tick());
        }
        records
    }
}
