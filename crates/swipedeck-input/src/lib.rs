pub mod event;
pub mod input;
pub mod keymap;
pub mod pointer;
pub mod session;
pub mod trace;

pub use event::{EventHandler, InputEvent};
pub use input::{Action, KeyboardAdapter};
pub use keymap::{parse_key_binding, KeyBinding, Keymap};
pub use pointer::{DragAdapter, DragOutcome, SampleResponse};
pub use session::CarouselSession;
pub use trace::{GestureTrace, ReplayRecord, TraceEvent, TracePlayer};
