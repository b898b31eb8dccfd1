use flame_engine::bridge::protocol::{
    HEADER_DOT_COUNT, HEADER_EVENT_COUNT, HEADER_FLOATS, HEADER_FRAME_COUNTER,
    HEADER_LINE_COUNT, HEADER_OVERLAY_COUNT, HEADER_SOUND_COUNT,
};
use flame_engine::{
    Game, GameConfig, EngineContext, RenderContext,
    InputEvent, InputQueue, RenderBuffer, ProtocolLayout,
};

/// Generic game runner that wires up the frame loop.
///
/// The game crate keeps a `thread_local!` GameRunner and exports free
/// functions via `#[wasm_bindgen]`, because wasm-bindgen cannot export
/// generic structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    render_buffer: RenderBuffer,
    config: GameConfig,
    layout: ProtocolLayout,
    initialized: bool,
    /// Flat buffer of sound event IDs for SharedArrayBuffer reads.
    sound_buffer: Vec<u8>,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        let layout = ProtocolLayout::from_config(&config);
        let render_buffer =
            RenderBuffer::with_capacity(config.max_dots, config.max_lines, config.max_overlays);
        let sound_buffer = Vec::with_capacity(config.max_sounds);

        Self {
            game,
            ctx: EngineContext::new(),
            input: InputQueue::new(),
            render_buffer,
            layout,
            config,
            initialized: false,
            sound_buffer,
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        if self.initialized {
            log::warn!("GameRunner::init called twice, ignoring");
            return;
        }
        self.game.init(&mut self.ctx);
        self.initialized = true;
    }

    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one display frame: exactly one game tick, then the render pass.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        self.ctx.begin_frame(dt);
        self.game.update(&mut self.ctx, &self.input);
        self.input.drain();

        self.ctx.sounds.truncate(self.config.max_sounds);
        self.ctx.events.truncate(self.config.max_events);

        self.render_buffer.clear();
        {
            let mut render_ctx = RenderContext {
                render_buffer: &mut self.render_buffer,
            };
            self.game.render(&mut render_ctx);
        }

        self.sound_buffer.clear();
        for sound in &self.ctx.sounds {
            self.sound_buffer.push(sound.0 as u8);
        }
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut G {
        &mut self.game
    }

    pub fn render_buffer(&self) -> &RenderBuffer {
        &self.render_buffer
    }

    // ---- Pointer accessors for SharedArrayBuffer reads ----

    pub fn dots_ptr(&self) -> *const f32 {
        self.render_buffer.dots_ptr()
    }

    pub fn dot_count(&self) -> u32 {
        self.render_buffer.dot_count()
    }

    pub fn lines_ptr(&self) -> *const f32 {
        self.render_buffer.lines_ptr()
    }

    pub fn line_count(&self) -> u32 {
        self.render_buffer.line_count()
    }

    pub fn overlays_ptr(&self) -> *const f32 {
        self.render_buffer.overlays_ptr()
    }

    pub fn overlay_count(&self) -> u32 {
        self.render_buffer.overlay_count()
    }

    pub fn sound_events_ptr(&self) -> *const u8 {
        self.sound_buffer.as_ptr()
    }

    pub fn sound_events_len(&self) -> u32 {
        self.sound_buffer.len() as u32
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    pub fn world_width(&self) -> f32 {
        self.config.world_width
    }

    pub fn world_height(&self) -> f32 {
        self.config.world_height
    }

    // ---- Capacity accessors ----

    pub fn layout(&self) -> &ProtocolLayout {
        &self.layout
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }

    /// Header for the current frame: static capacities plus live counts.
    pub fn header(&self) -> [f32; HEADER_FLOATS] {
        let mut header = self
            .layout
            .header(self.config.world_width, self.config.world_height);
        header[HEADER_FRAME_COUNTER] = self.ctx.frame() as f32;
        header[HEADER_DOT_COUNT] = self.render_buffer.dot_count() as f32;
        header[HEADER_LINE_COUNT] = self.render_buffer.line_count() as f32;
        header[HEADER_OVERLAY_COUNT] = self.render_buffer.overlay_count() as f32;
        header[HEADER_SOUND_COUNT] = self.sound_buffer.len() as f32;
        header[HEADER_EVENT_COUNT] = self.ctx.events.len() as f32;
        header
    }
}
