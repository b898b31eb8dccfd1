use std::cell::RefCell;
use std::ptr;

use flame_engine::InputEvent;
use flame_web::GameRunner;
use glam::Vec2;
use wasm_bindgen::prelude::*;

pub mod config;
pub mod game;
pub mod heart;
pub mod messages;
pub mod scene;
pub mod sparkle;

use config::SceneConfig;
use game::TwinFlame;
use messages::CalendarDay;

thread_local! {
    static RUNNER: RefCell<Option<GameRunner<TwinFlame>>> = const { RefCell::new(None) };
}

/// Run `f` against the live runner. `None` before `game_init`.
fn with_runner<R>(f: impl FnOnce(&mut GameRunner<TwinFlame>) -> R) -> Option<R> {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        match borrow.as_mut() {
            Some(runner) => Some(f(runner)),
            None => {
                log::warn!("twin-flame: called before game_init");
                None
            }
        }
    })
}

/// Build the scene for a `width` x `height` viewport. The viewport is read
/// once; `config_json` may override any scene tunable.
#[wasm_bindgen]
pub fn game_init(width: f32, height: f32, config_json: Option<String>) {
    flame_web::init_logging();

    let config = match config_json.as_deref().map(SceneConfig::from_json) {
        Some(Ok(config)) => config,
        Some(Err(err)) => {
            log::warn!("twin-flame: bad scene config ({err}), using defaults");
            SceneConfig::default()
        }
        None => SceneConfig::default(),
    };

    let today = CalendarDay(flame_web::local_day_number());
    let game = TwinFlame::with_remote_messages(Vec2::new(width, height), &config, today);
    let mut runner = GameRunner::new(game);
    runner.init();

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("twin-flame: initialized");
}

#[wasm_bindgen]
pub fn game_tick(dt: f32) {
    with_runner(|r| r.tick(dt));
}

#[wasm_bindgen]
pub fn game_pointer_down(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerDown { x, y }));
}

#[wasm_bindgen]
pub fn game_pointer_move(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
}

#[wasm_bindgen]
pub fn game_pointer_up(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerUp { x, y }));
}

#[wasm_bindgen]
pub fn game_pointer_cancel() {
    with_runner(|r| r.push_input(InputEvent::PointerCancel));
}

// ---- Message store bridge ----

/// Hand over the remote collection as `{"<index>": {"text": "..."}}`.
/// Returns false if the JSON was rejected.
#[wasm_bindgen]
pub fn game_messages_loaded(json: &str) -> bool {
    with_runner(|r| r.game_mut().messages_mut().repository_mut().load_json(json).is_ok())
        .unwrap_or(false)
}

#[wasm_bindgen]
pub fn game_messages_failed(reason: &str) {
    with_runner(|r| r.game_mut().messages_mut().repository_mut().fail(reason));
}

/// Drain documents the game wants written back, in the same JSON shape.
#[wasm_bindgen]
pub fn game_take_message_writes() -> String {
    with_runner(|r| {
        r.game_mut()
            .messages_mut()
            .repository_mut()
            .take_writes()
            .unwrap_or_else(|err| {
                log::warn!("twin-flame: could not encode message writes: {err}");
                String::from("{}")
            })
    })
    .unwrap_or_else(|| String::from("{}"))
}

/// Revealed text, empty until the sparkle animation finishes.
#[wasm_bindgen]
pub fn game_message_text() -> String {
    with_runner(|r| r.game().message_text().map(str::to_owned))
        .flatten()
        .unwrap_or_default()
}

// ---- Buffer accessors ----

#[wasm_bindgen]
pub fn get_dots_ptr() -> *const f32 {
    with_runner(|r| r.dots_ptr()).unwrap_or(ptr::null())
}

#[wasm_bindgen]
pub fn get_dot_count() -> u32 {
    with_runner(|r| r.dot_count()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_lines_ptr() -> *const f32 {
    with_runner(|r| r.lines_ptr()).unwrap_or(ptr::null())
}

#[wasm_bindgen]
pub fn get_line_count() -> u32 {
    with_runner(|r| r.line_count()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_overlays_ptr() -> *const f32 {
    with_runner(|r| r.overlays_ptr()).unwrap_or(ptr::null())
}

#[wasm_bindgen]
pub fn get_overlay_count() -> u32 {
    with_runner(|r| r.overlay_count()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_sound_events_ptr() -> *const u8 {
    with_runner(|r| r.sound_events_ptr()).unwrap_or(ptr::null())
}

#[wasm_bindgen]
pub fn get_sound_events_len() -> u32 {
    with_runner(|r| r.sound_events_len()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_game_events_ptr() -> *const f32 {
    with_runner(|r| r.game_events_ptr()).unwrap_or(ptr::null())
}

#[wasm_bindgen]
pub fn get_game_events_len() -> u32 {
    with_runner(|r| r.game_events_len()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_world_width() -> f32 {
    with_runner(|r| r.world_width()).unwrap_or(0.0)
}

#[wasm_bindgen]
pub fn get_world_height() -> f32 {
    with_runner(|r| r.world_height()).unwrap_or(0.0)
}

/// Protocol header with this frame's counts.
#[wasm_bindgen]
pub fn get_header() -> Vec<f32> {
    with_runner(|r| r.header().to_vec()).unwrap_or_default()
}

#[wasm_bindgen]
pub fn get_buffer_total_floats() -> u32 {
    with_runner(|r| r.buffer_total_floats()).unwrap_or(0)
}
