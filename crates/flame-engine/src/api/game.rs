use crate::api::types::{GameEvent, SoundEvent};
use crate::input::queue::InputQueue;
use crate::renderer::instance::RenderBuffer;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// World width in game units (the viewport width, read once).
    pub world_width: f32,
    /// World height in game units (the viewport height, read once).
    pub world_height: f32,
    /// Maximum number of dot instances per frame (default: 512).
    pub max_dots: usize,
    /// Maximum number of line instances per frame (default: 65536).
    pub max_lines: usize,
    /// Maximum number of overlay instances per frame (default: 8).
    pub max_overlays: usize,
    /// Maximum number of sound events per frame (default: 32).
    pub max_sounds: usize,
    /// Maximum number of game events per frame (default: 32).
    pub max_events: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            world_width: 390.0,
            world_height: 844.0,
            max_dots: 512,
            max_lines: 65536,
            max_overlays: 8,
            max_sounds: 32,
            max_events: 32,
        }
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Setup initial state. Called once.
    fn init(&mut self, ctx: &mut EngineContext);

    /// One tick, called exactly once per display frame.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);

    /// Read-only render pass, called after every update.
    fn render(&self, _ctx: &mut RenderContext) {}
}

/// Mutable per-frame engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub sounds: Vec<SoundEvent>,
    pub events: Vec<GameEvent>,
    /// Wall-clock seconds since the previous frame. Only UI animation reads
    /// this; the simulation advances one fixed step per tick.
    pub dt: f32,
    frame: u64,
}

impl EngineContext {
    pub fn new() -> Self {
        Self {
            sounds: Vec::new(),
            events: Vec::new(),
            dt: 0.0,
            frame: 0,
        }
    }

    /// Emit a sound event to be forwarded to the host.
    pub fn emit_sound(&mut self, event: SoundEvent) {
        self.sounds.push(event);
    }

    /// Emit a game event to be forwarded to the host.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Number of frames started so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Clear per-frame transient data and record the new frame's delta.
    pub fn begin_frame(&mut self, dt: f32) {
        self.sounds.clear();
        self.events.clear();
        self.dt = dt.max(0.0);
        self.frame += 1;
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Render context for the game's render pass.
pub struct RenderContext<'a> {
    pub render_buffer: &'a mut RenderBuffer,
}
