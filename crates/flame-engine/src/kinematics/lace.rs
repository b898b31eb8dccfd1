//! Follow-the-leader IK chain.
//!
//! A lace is solved in two passes every tick: backward from the free end
//! toward a target, which fixes each link's angle, then forward from the
//! anchor, which fixes where the links actually sit.

use glam::Vec2;

use super::segment::Segment;

/// Length of every link, in world units.
pub const SEGMENT_LENGTH: f32 = 1.0;

/// An ordered chain of segments. Segment 0 hangs off `position`;
/// the last segment is the free end.
#[derive(Debug, Clone)]
pub struct Lace {
    /// External anchor, usually a vehicle position written each tick.
    pub position: Vec2,
    segments: Vec<Segment>,
}

impl Lace {
    /// Build a straight chain along +x from `anchor`, with
    /// `max(1, floor(pixel_length / SEGMENT_LENGTH))` links.
    pub fn new(anchor: Vec2, pixel_length: f32) -> Self {
        let count = segment_count(pixel_length);
        if pixel_length.is_nan() || pixel_length.is_infinite() || pixel_length < 0.0 {
            log::warn!("lace: unusable length {pixel_length}, using a single segment");
        }

        let mut segments = Vec::with_capacity(count);
        segments.push(Segment::new(anchor, SEGMENT_LENGTH, 1));
        for i in 1..count {
            let next = Segment::from_parent(&segments[i - 1], SEGMENT_LENGTH, i as u32 + 2);
            segments.push(next);
        }

        Self {
            position: anchor,
            segments,
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The free end's tail.
    pub fn end(&self) -> Vec2 {
        self.segments[self.segments.len() - 1].second_pos()
    }

    /// Solve the chain toward `target` and re-anchor it at `position`.
    pub fn show(&mut self, target: Vec2) {
        let last = self.segments.len() - 1;

        self.segments[last].follow(target);
        self.segments[last].update();
        for i in (0..last).rev() {
            let ahead = self.segments[i + 1].position;
            self.segments[i].follow(ahead);
            self.segments[i].update();
        }

        self.segments[0].set_base_position(self.position);
        for i in 1..=last {
            let base = self.segments[i - 1].second_pos();
            self.segments[i].set_base_position(base);
        }
    }
}

fn segment_count(pixel_length: f32) -> usize {
    let n = (pixel_length / SEGMENT_LENGTH).floor();
    // NaN, infinities and negatives fall through to a single link
    if n.is_finite() && n >= 1.0 {
        n as usize
    } else {
        1
    }
}
