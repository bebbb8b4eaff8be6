pub mod config;
pub mod error;
pub mod gesture;
pub mod layout;
pub mod motion;
pub mod navigation;

pub use config::{
    CarouselConfig, EasingType, EdgeResistance, GestureConfig, KeymapConfig, LayoutConfig,
    LockConfig, MotionConfig, ThresholdMode,
};
pub use error::{Error, Result};
pub use gesture::{
    classify, ClassifyContext, Direction, DirectionLock, DragSummary, DragTracker,
    GestureVerdict, GlideTier, LockState,
};
pub use layout::{CarouselGeometry, DragBounds, LayoutInputs};
pub use motion::{Integrator, Motion, MotionSpec, PhysicsIntegrator};
pub use navigation::{
    NavigationController, NavigationEvent, NavigationState, TransitionId, TransitionProfile,
    TransitionStart,
};
