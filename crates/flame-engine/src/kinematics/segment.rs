use glam::Vec2;

/// One rigid link of a lace.
///
/// `second_pos` (the tail) is derived from `position`, `angle` and `length`
/// and is refreshed by every mutating method.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub position: Vec2,
    second_pos: Vec2,
    pub angle: f32,
    length: f32,
    /// Render identity only; drives line opacity.
    pub segment_number: u32,
}

impl Segment {
    /// A segment pointing along +x from `position`.
    pub fn new(position: Vec2, length: f32, segment_number: u32) -> Self {
        Self {
            position,
            second_pos: tail_of(position, 0.0, length),
            angle: 0.0,
            length,
            segment_number,
        }
    }

    /// A segment whose head sits at `parent`'s tail.
    pub fn from_parent(parent: &Segment, length: f32, segment_number: u32) -> Self {
        Self::new(parent.second_pos, length, segment_number)
    }

    pub fn second_pos(&self) -> Vec2 {
        self.second_pos
    }

    pub fn length(&self) -> f32 {
        self.length
    }

    /// Point the segment at `target` and slide its head so the tail lands
    /// exactly on it. Call [`Segment::update`] afterwards to refresh the tail.
    pub fn follow(&mut self, target: Vec2) {
        let direction = target - self.position;
        self.angle = direction.y.atan2(direction.x);
        self.position = target - Vec2::new(self.angle.cos(), self.angle.sin()) * self.length;
    }

    pub fn update(&mut self) {
        self.second_pos = tail_of(self.position, self.angle, self.length);
    }

    /// Move the head to `base`, keeping the current angle.
    pub fn set_base_position(&mut self, base: Vec2) {
        self.position = base;
        self.second_pos = tail_of(self.position, self.angle, self.length);
    }
}

fn tail_of(position: Vec2, angle: f32, length: f32) -> Vec2 {
    position + Vec2::new(length * angle.cos(), length * angle.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn new_segment_points_along_x() {
        let s = Segment::new(Vec2::new(2.0, 3.0), 4.0, 1);
        assert_eq!(s.angle, 0.0);
        assert!((s.second_pos() - Vec2::new(6.0, 3.0)).length() < EPS);
    }

    #[test]
    fn child_starts_at_parent_tail() {
        let parent = Segment::new(Vec2::ZERO, 2.0, 1);
        let child = Segment::from_parent(&parent, 2.0, 3);
        assert_eq!(child.position, parent.second_pos());
        assert_eq!(child.segment_number, 3);
    }

    #[test]
    fn follow_then_update_puts_tail_on_target() {
        let mut s = Segment::new(Vec2::ZERO, 1.0, 1);
        let target = Vec2::new(3.0, 4.0);
        s.follow(target);
        s.update();
        assert!((s.second_pos() - target).length() < EPS);
        assert!((s.position.distance(s.second_pos()) - 1.0).abs() < EPS);
        assert!((s.angle - 4.0f32.atan2(3.0)).abs() < EPS);
    }

    #[test]
    fn follow_behind_flips_angle() {
        let mut s = Segment::new(Vec2::new(10.0, 0.0), 1.0, 1);
        s.follow(Vec2::ZERO);
        assert!((s.angle.abs() - std::f32::consts::PI).abs() < EPS);
        assert!((s.position - Vec2::new(1.0, 0.0)).length() < EPS);
    }

    #[test]
    fn set_base_position_keeps_angle() {
        let mut s = Segment::new(Vec2::ZERO, 2.0, 1);
        s.follow(Vec2::new(0.0, 10.0));
        let angle = s.angle;
        s.set_base_position(Vec2::new(5.0, 5.0));
        assert_eq!(s.angle, angle);
        assert_eq!(s.position, Vec2::new(5.0, 5.0));
        assert!((s.second_pos() - Vec2::new(5.0, 7.0)).length() < EPS);
    }
}
