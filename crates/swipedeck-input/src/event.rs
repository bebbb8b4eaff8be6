use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseEvent};
use swipedeck_core::motion::timing::frame_duration;

/// Event handler for terminal events
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    /// Poll at the animation frame rate so transitions advance smoothly
    pub fn new(frame_rate: u32) -> Self {
        Self {
            tick_rate: frame_duration(frame_rate),
        }
    }

    #[inline]
    pub fn tick_rate(&self) -> Duration {
        self.tick_rate
    }

    /// Poll for the next event
    pub fn next(&self) -> Result<Option<InputEvent>> {
        if event::poll(self.tick_rate)? {
            match event::read()? {
                Event::Key(key) => {
                    // Only handle key press events, ignore release events
                    if key.kind == KeyEventKind::Press {
                        Ok(Some(InputEvent::Key(key)))
                    } else {
                        Ok(None)
                    }
                }
                Event::Mouse(mouse) => Ok(Some(InputEvent::Mouse(mouse))),
                Event::Resize(w, h) => Ok(Some(InputEvent::Resize(w, h))),
                _ => Ok(None),
            }
        } else {
            Ok(Some(InputEvent::Tick))
        }
    }
}

/// Terminal events relevant to the carousel
#[derive(Debug)]
pub enum InputEvent {
    /// A key was pressed
    Key(KeyEvent),
    /// Mouse press, drag or release (requires mouse capture)
    Mouse(MouseEvent),
    /// Terminal was resized
    Resize(u16, u16),
    /// No input within one frame
    Tick,
}
