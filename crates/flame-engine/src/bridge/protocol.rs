//! SharedArrayBuffer layout.
//! Must stay in sync with the TypeScript `protocol.ts`.
//!
//! Layout (all values in f32 / 4 bytes):
//! ```text
//! [Header: 16 floats]
//! [Dots: max_dots × 4 floats]
//! [Lines: max_lines × 6 floats]
//! [Overlays: max_overlays × 6 floats]
//! [Sounds: max_sounds × 1 float]
//! [Events: max_events × 4 floats]
//! ```
//!
//! Capacities are written once into the header at init.
//! TypeScript reads them from the header to compute offsets dynamically.

use crate::api::game::GameConfig;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_LOCK: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_MAX_DOTS: usize = 2;
pub const HEADER_DOT_COUNT: usize = 3;
pub const HEADER_MAX_LINES: usize = 4;
pub const HEADER_LINE_COUNT: usize = 5;
pub const HEADER_MAX_OVERLAYS: usize = 6;
pub const HEADER_OVERLAY_COUNT: usize = 7;
pub const HEADER_WORLD_WIDTH: usize = 8;
pub const HEADER_WORLD_HEIGHT: usize = 9;
pub const HEADER_MAX_SOUNDS: usize = 10;
pub const HEADER_SOUND_COUNT: usize = 11;
pub const HEADER_MAX_EVENTS: usize = 12;
pub const HEADER_EVENT_COUNT: usize = 13;
pub const HEADER_PROTOCOL_VERSION: usize = 14;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per dot: x, y, radius, alpha.
pub const DOT_FLOATS: usize = 4;

/// Floats per line: x0, y0, x1, y1, width, alpha.
pub const LINE_FLOATS: usize = 6;

/// Floats per overlay: kind, x, y, rotation, scale, alpha.
pub const OVERLAY_FLOATS: usize = 6;

/// Floats per game event: kind, a, b, c.
pub const EVENT_FLOATS: usize = 4;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    pub max_dots: usize,
    pub max_lines: usize,
    pub max_overlays: usize,
    pub max_sounds: usize,
    pub max_events: usize,

    pub dot_data_offset: usize,
    pub line_data_offset: usize,
    pub overlay_data_offset: usize,
    pub sound_data_offset: usize,
    pub event_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(
        max_dots: usize,
        max_lines: usize,
        max_overlays: usize,
        max_sounds: usize,
        max_events: usize,
    ) -> Self {
        let dot_data_offset = HEADER_FLOATS;
        let line_data_offset = dot_data_offset + max_dots * DOT_FLOATS;
        let overlay_data_offset = line_data_offset + max_lines * LINE_FLOATS;
        let sound_data_offset = overlay_data_offset + max_overlays * OVERLAY_FLOATS;
        let event_data_offset = sound_data_offset + max_sounds;

        let buffer_total_floats = event_data_offset + max_events * EVENT_FLOATS;

        Self {
            max_dots,
            max_lines,
            max_overlays,
            max_sounds,
            max_events,
            dot_data_offset,
            line_data_offset,
            overlay_data_offset,
            sound_data_offset,
            event_data_offset,
            buffer_total_floats,
            buffer_total_bytes: buffer_total_floats * 4,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(
            config.max_dots,
            config.max_lines,
            config.max_overlays,
            config.max_sounds,
            config.max_events,
        )
    }

    /// Header values for the capacities and world size, indexed by the
    /// `HEADER_*` constants. Per-frame counters are left at zero.
    pub fn header(&self, world_width: f32, world_height: f32) -> [f32; HEADER_FLOATS] {
        let mut header = [0.0; HEADER_FLOATS];
        header[HEADER_MAX_DOTS] = self.max_dots as f32;
        header[HEADER_MAX_LINES] = self.max_lines as f32;
        header[HEADER_MAX_OVERLAYS] = self.max_overlays as f32;
        header[HEADER_WORLD_WIDTH] = world_width;
        header[HEADER_WORLD_HEIGHT] = world_height;
        header[HEADER_MAX_SOUNDS] = self.max_sounds as f32;
        header[HEADER_MAX_EVENTS] = self.max_events as f32;
        header[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        header
    }
}
