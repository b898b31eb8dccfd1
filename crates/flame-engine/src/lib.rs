pub mod api;
pub mod core;
pub mod input;
pub mod renderer;
pub mod bridge;
pub mod steering;
pub mod kinematics;
pub mod extensions;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext, RenderContext};
pub use api::types::{SoundEvent, GameEvent};
pub use core::time::PhaseClock;
pub use input::queue::{InputEvent, InputQueue};
pub use input::pointer::PointerTracker;
pub use renderer::instance::{DotInstance, LineInstance, OverlayInstance, RenderBuffer};
pub use bridge::protocol::ProtocolLayout;
pub use steering::vector::SteeringVec;
pub use steering::vehicle::Vehicle;
pub use kinematics::segment::Segment;
pub use kinematics::lace::{Lace, SEGMENT_LENGTH};
pub use extensions::Tween;
