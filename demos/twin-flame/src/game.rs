use flame_engine::{
    EngineContext, Game, GameConfig, GameEvent, InputEvent, InputQueue, Lace, PointerTracker,
    RenderContext, SoundEvent,
};
use glam::Vec2;

use crate::config::SceneConfig;
use crate::messages::{
    CalendarDay, LocalMessages, MessageProvider, RemoteMessages, SnapshotRepository,
};
use crate::scene::HeartScene;
use crate::sparkle::{MessageLabel, SparkleButton};

/// Launch tracks, played by the host.
pub const SOUND_MARS: u32 = 1;
pub const SOUND_MARTIAN_DREAMS: u32 = 2;
const MARTIAN_DREAMS_DAY: u32 = 24;

/// Game event: today's message is on screen and readable via the host API.
pub const EVENT_MESSAGE_REVEALED: u32 = 1;

pub struct TwinFlame<P = RemoteMessages<SnapshotRepository>> {
    viewport: Vec2,
    scene: HeartScene,
    pointer: PointerTracker,
    sparkle: SparkleButton,
    label: Option<MessageLabel>,
    messages: P,
    today: CalendarDay,
    launch_played: bool,
}

impl TwinFlame {
    /// Remote-first messages from a host-fed snapshot, local list as backup.
    pub fn with_remote_messages(viewport: Vec2, config: &SceneConfig, today: CalendarDay) -> Self {
        let repository = SnapshotRepository::new(config.message_timeout);
        let messages = RemoteMessages::new(repository, LocalMessages::default());
        Self::new(viewport, config, today, messages)
    }
}

impl<P: MessageProvider> TwinFlame<P> {
    pub fn new(viewport: Vec2, config: &SceneConfig, today: CalendarDay, messages: P) -> Self {
        Self {
            viewport,
            scene: HeartScene::new(viewport, config),
            pointer: PointerTracker::new(),
            sparkle: SparkleButton::new(viewport * 0.5, config.hit_radius),
            label: None,
            messages,
            today,
            launch_played: false,
        }
    }

    pub fn scene(&self) -> &HeartScene {
        &self.scene
    }

    pub fn sparkle(&self) -> &SparkleButton {
        &self.sparkle
    }

    pub fn messages(&self) -> &P {
        &self.messages
    }

    pub fn messages_mut(&mut self) -> &mut P {
        &mut self.messages
    }

    /// The revealed message, once the sparkle animation has finished.
    pub fn message_text(&self) -> Option<&str> {
        self.label.as_ref().map(MessageLabel::text)
    }

    pub fn launch_track(&self) -> SoundEvent {
        if self.today.day_of_month() == MARTIAN_DREAMS_DAY {
            SoundEvent(SOUND_MARTIAN_DREAMS)
        } else {
            SoundEvent(SOUND_MARS)
        }
    }

    fn handle_input(&mut self, input: &InputQueue) {
        for event in input.iter() {
            if let InputEvent::PointerDown { x, y } = *event {
                if self.sparkle.tap(Vec2::new(x, y)) {
                    continue;
                }
            }
            self.pointer.handle(event);
        }
        self.scene.set_pointer(self.pointer.location());
    }

    fn reveal(&mut self, ctx: &mut EngineContext) {
        let text = self.messages.todays_message(self.today);
        log::info!("revealing message for day {}: {text:?}", self.today.0);
        self.label = Some(MessageLabel::new(text, self.viewport));
        ctx.emit_event(GameEvent::new(EVENT_MESSAGE_REVEALED));
    }
}

impl<P: MessageProvider> Game for TwinFlame<P> {
    fn config(&self) -> GameConfig {
        let segments: usize = self.scene.laces().iter().map(Lace::len).sum();
        GameConfig {
            world_width: self.viewport.x,
            world_height: self.viewport.y,
            max_dots: self.scene.vehicles().len(),
            max_lines: segments,
            max_overlays: 2,
            ..GameConfig::default()
        }
    }

    fn init(&mut self, _ctx: &mut EngineContext) {
        let (year, month, day) = self.today.civil();
        log::info!(
            "twin-flame: {}x{} viewport, {} pairs, today {year}-{month:02}-{day:02}",
            self.viewport.x,
            self.viewport.y,
            self.scene.pair_count()
        );
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        if !self.launch_played {
            ctx.emit_sound(self.launch_track());
            self.launch_played = true;
        }

        self.handle_input(input);
        self.messages.poll(ctx.dt);
        self.scene.tick();

        if self.sparkle.update(ctx.dt) {
            self.reveal(ctx);
        } else if let Some(label) = &mut self.label {
            label.update(ctx.dt);
        }
    }

    fn render(&self, ctx: &mut RenderContext) {
        self.scene.render(ctx.render_buffer);
        if let Some(overlay) = self.sparkle.overlay() {
            ctx.render_buffer.push_overlay(overlay);
        }
        if let Some(label) = &self.label {
            ctx.render_buffer.push_overlay(label.overlay());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flame_engine::RenderBuffer;

    use crate::messages::{message_epoch, MessageRepository};
    use crate::sparkle::SparklePhase;

    const DT: f32 = 1.0 / 60.0;
    const VIEWPORT: Vec2 = Vec2::new(390.0, 844.0);

    fn local_game(today: CalendarDay) -> TwinFlame<LocalMessages> {
        let local = LocalMessages::new(vec!["first".into(), "second".into()]);
        TwinFlame::new(VIEWPORT, &SceneConfig::default(), today, local)
    }

    fn frame(game: &mut impl Game, ctx: &mut EngineContext, input: &mut InputQueue) {
        ctx.begin_frame(DT);
        game.update(ctx, input);
        input.drain();
    }

    fn tap_and_wait(game: &mut impl Game, ctx: &mut EngineContext) -> Vec<GameEvent> {
        let mut input = InputQueue::new();
        input.push(InputEvent::PointerDown { x: 195.0, y: 422.0 });
        input.push(InputEvent::PointerUp { x: 195.0, y: 422.0 });
        let mut events = Vec::new();
        for _ in 0..120 {
            frame(game, ctx, &mut input);
            events.extend(ctx.events.iter().copied());
        }
        events
    }

    #[test]
    fn config_sizes_buffers_to_scene() {
        let game = local_game(message_epoch());
        let config = game.config();
        assert_eq!(config.world_width, 390.0);
        assert_eq!(config.max_dots, game.scene().vehicles().len());
        let segments: usize = game.scene().laces().iter().map(Lace::len).sum();
        assert_eq!(config.max_lines, segments);
    }

    #[test]
    fn launch_sound_plays_once_on_first_frame() {
        let mut game = local_game(CalendarDay::from_civil(2026, 3, 1));
        let mut ctx = EngineContext::new();
        let mut input = InputQueue::new();
        game.init(&mut ctx);

        frame(&mut game, &mut ctx, &mut input);
        assert_eq!(ctx.sounds, vec![SoundEvent(SOUND_MARS)]);
        frame(&mut game, &mut ctx, &mut input);
        assert!(ctx.sounds.is_empty());
    }

    #[test]
    fn martian_dreams_on_the_24th() {
        let game = local_game(CalendarDay::from_civil(2026, 5, 24));
        assert_eq!(game.launch_track(), SoundEvent(SOUND_MARTIAN_DREAMS));
    }

    #[test]
    fn pointer_down_outside_button_sets_pointer() {
        let mut game = local_game(message_epoch());
        let mut ctx = EngineContext::new();
        let mut input = InputQueue::new();
        input.push(InputEvent::PointerDown { x: 10.0, y: 10.0 });
        frame(&mut game, &mut ctx, &mut input);
        assert_eq!(game.scene().pointer(), Some(Vec2::new(10.0, 10.0)));

        input.push(InputEvent::PointerUp { x: 10.0, y: 10.0 });
        frame(&mut game, &mut ctx, &mut input);
        assert_eq!(game.scene().pointer(), None);
    }

    #[test]
    fn tap_on_button_is_not_a_pointer() {
        let mut game = local_game(message_epoch());
        let mut ctx = EngineContext::new();
        let mut input = InputQueue::new();
        input.push(InputEvent::PointerDown { x: 195.0, y: 422.0 });
        frame(&mut game, &mut ctx, &mut input);
        assert_eq!(game.scene().pointer(), None);
        assert_eq!(game.sparkle().phase(), SparklePhase::Spinning);
    }

    #[test]
    fn second_press_on_spent_button_sets_pointer() {
        let mut game = local_game(message_epoch());
        let mut ctx = EngineContext::new();
        let mut input = InputQueue::new();
        input.push(InputEvent::PointerDown { x: 195.0, y: 422.0 });
        input.push(InputEvent::PointerUp { x: 195.0, y: 422.0 });
        input.push(InputEvent::PointerDown { x: 196.0, y: 422.0 });
        frame(&mut game, &mut ctx, &mut input);
        assert_eq!(game.scene().pointer(), Some(Vec2::new(196.0, 422.0)));
    }

    #[test]
    fn reveal_resolves_todays_message_once() {
        let mut game = local_game(CalendarDay(message_epoch().0 + 1));
        let mut ctx = EngineContext::new();
        assert_eq!(game.message_text(), None);

        let events = tap_and_wait(&mut game, &mut ctx);
        let revealed: Vec<_> = events
            .iter()
            .filter(|e| e.kind == EVENT_MESSAGE_REVEALED as f32)
            .collect();
        assert_eq!(revealed.len(), 1);
        assert_eq!(game.message_text(), Some("second"));
        assert_eq!(game.sparkle().phase(), SparklePhase::Gone);
    }

    #[test]
    fn render_switches_overlay_from_button_to_label() {
        let mut game = local_game(message_epoch());
        let mut ctx = EngineContext::new();
        let mut buffer = RenderBuffer::with_capacity(4096, 1 << 20, 2);

        game.render(&mut RenderContext { render_buffer: &mut buffer });
        assert_eq!(buffer.overlay_count(), 1);
        assert_eq!(buffer.overlays[0].kind, crate::sparkle::OVERLAY_SPARKLE);

        tap_and_wait(&mut game, &mut ctx);
        buffer.clear();
        game.render(&mut RenderContext { render_buffer: &mut buffer });
        assert_eq!(buffer.overlay_count(), 1);
        assert_eq!(buffer.overlays[0].kind, crate::sparkle::OVERLAY_MESSAGE);
        assert!(buffer.overlays[0].alpha > 0.99);
        assert_eq!(buffer.dot_count() as usize, game.scene().vehicles().len());
    }

    #[test]
    fn remote_game_falls_back_while_pending() {
        let mut game =
            TwinFlame::with_remote_messages(VIEWPORT, &SceneConfig::default(), message_epoch());
        let mut ctx = EngineContext::new();
        tap_and_wait(&mut game, &mut ctx);
        assert_eq!(game.message_text(), Some("Goog"));
        assert_eq!(game.messages().repository().pending_writes(), 0);
    }

    #[test]
    fn remote_game_uses_loaded_snapshot() {
        let mut game =
            TwinFlame::with_remote_messages(VIEWPORT, &SceneConfig::default(), message_epoch());
        game.messages_mut()
            .repository_mut()
            .load_json(r#"{ "0": { "text": "from the store" } }"#)
            .unwrap();
        assert_eq!(game.messages().repository().messages_count(), Ok(1));
        let mut ctx = EngineContext::new();
        tap_and_wait(&mut game, &mut ctx);
        assert_eq!(game.message_text(), Some("from the store"));
    }
}
