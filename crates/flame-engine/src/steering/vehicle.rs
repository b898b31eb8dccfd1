//! Autonomous steering agent: seek, flee and separation forces integrated
//! with a speed-capped Euler step.

use glam::Vec2;

use super::vector::SteeringVec;

/// A point agent driven by accumulated steering forces.
///
/// `acceleration` only holds forces applied during the current tick; it is
/// zeroed by [`Vehicle::update`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vehicle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    /// Visual radius, also used as the separation threshold.
    pub radius: f32,
    pub max_speed: f32,
    pub max_force: f32,
}

impl Vehicle {
    pub const DEFAULT_RADIUS: f32 = 1.0;
    pub const DEFAULT_MAX_SPEED: f32 = 5.0;
    pub const DEFAULT_MAX_FORCE: f32 = 1.0;

    /// Flee only reacts to targets closer than this.
    pub const FLEE_RADIUS: f32 = 100.0;

    pub const SEPARATE_WEIGHT: f32 = 2.0;
    pub const SEEK_WEIGHT: f32 = 1.0;
    /// Negative on purpose: the flee force points at the pointer.
    pub const AVOID_WEIGHT: f32 = -5.0;

    /// A vehicle at rest with the default radius and limits.
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            radius: Self::DEFAULT_RADIUS,
            max_speed: Self::DEFAULT_MAX_SPEED,
            max_force: Self::DEFAULT_MAX_FORCE,
        }
    }

    pub fn with_limits(mut self, max_speed: f32, max_force: f32) -> Self {
        self.max_speed = max_speed;
        self.max_force = max_force;
        self
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn apply_force(&mut self, force: Vec2) {
        self.acceleration += force;
    }

    /// Separation from every vehicle in `vehicles`, plus seek toward `target`.
    pub fn apply_behaviors(&mut self, vehicles: &[Vehicle], target: Vec2) {
        let separate = self.separate(vehicles);
        let seek = self.seek(target);

        self.apply_force(separate * Self::SEPARATE_WEIGHT);
        self.apply_force(seek * Self::SEEK_WEIGHT);
    }

    pub fn apply_avoid_target(&mut self, target: Vec2) {
        let flee = self.flee(target);
        self.apply_force(flee * Self::AVOID_WEIGHT);
    }

    /// Steering = desired - velocity, clamped to `max_force`.
    pub fn seek(&self, target: Vec2) -> Vec2 {
        let desired = (target - self.position).normalized() * self.max_speed;
        self.steer(desired)
    }

    /// Same force as `seek`, but only while the target is inside
    /// [`Vehicle::FLEE_RADIUS`]. Zero otherwise.
    pub fn flee(&self, target: Vec2) -> Vec2 {
        let desired = target - self.position;
        if desired.magnitude() < Self::FLEE_RADIUS {
            self.steer(desired.normalized() * self.max_speed)
        } else {
            Vec2::ZERO
        }
    }

    /// Steer away from neighbors strictly inside `radius`, weighting each
    /// by the inverse of its distance. Coincident points are skipped, which
    /// also skips `self` when it appears in `vehicles`.
    pub fn separate(&self, vehicles: &[Vehicle]) -> Vec2 {
        let desired_separation = self.radius;
        let mut sum = Vec2::ZERO;
        let mut count = 0u32;

        for other in vehicles {
            let distance = self.position.distance(other.position);
            if distance > 0.0 && distance < desired_separation {
                let away = (self.position - other.position).normalized() / distance;
                sum += away;
                count += 1;
            }
        }

        if count == 0 {
            return Vec2::ZERO;
        }

        let average = sum / count as f32;
        self.steer(average.normalized() * self.max_speed)
    }

    /// Integrate one tick. Velocity is capped at `max_speed` and the
    /// accumulated acceleration is cleared.
    pub fn update(&mut self) {
        self.velocity = (self.velocity + self.acceleration).limited(self.max_speed);
        self.position += self.velocity;
        self.acceleration = Vec2::ZERO;
    }

    fn steer(&self, desired: Vec2) -> Vec2 {
        (desired - self.velocity).limited(self.max_force)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a - b).magnitude() < EPS
    }

    #[test]
    fn update_caps_velocity_at_max_speed() {
        let mut v = Vehicle::new(Vec2::ZERO).with_limits(5.0, 1.0);
        v.apply_force(Vec2::new(10.0, 0.0));
        v.update();
        assert!((v.velocity.magnitude() - 5.0).abs() < EPS);
        assert!(approx(v.position, Vec2::new(5.0, 0.0)));
        assert_eq!(v.acceleration, Vec2::ZERO);
    }

    #[test]
    fn apply_force_is_not_clamped() {
        let mut v = Vehicle::new(Vec2::ZERO);
        v.apply_force(Vec2::new(10.0, 0.0));
        v.apply_force(Vec2::new(0.0, 10.0));
        assert_eq!(v.acceleration, Vec2::new(10.0, 10.0));
    }

    #[test]
    fn seek_from_rest_is_bounded_by_max_force() {
        let mut v = Vehicle::new(Vec2::ZERO).with_limits(5.0, 1.0);
        v.apply_behaviors(&[], Vec2::new(100.0, 0.0));
        v.update();
        assert!(v.velocity.magnitude() <= 1.0 + EPS);
        assert!(v.velocity.x > 0.0);
        assert!(v.position.x > 0.0);
    }

    #[test]
    fn seek_at_target_only_brakes() {
        let mut v = Vehicle::new(Vec2::new(3.0, 3.0));
        v.velocity = Vec2::new(0.5, 0.0);
        // desired is zero, so steering cancels the current velocity
        let force = v.seek(Vec2::new(3.0, 3.0));
        assert!(approx(force, Vec2::new(-0.5, 0.0)));
    }

    #[test]
    fn flee_is_zero_outside_radius() {
        let v = Vehicle::new(Vec2::ZERO);
        assert_eq!(v.flee(Vec2::new(100.0, 0.0)), Vec2::ZERO);
        assert_eq!(v.flee(Vec2::new(0.0, -250.0)), Vec2::ZERO);
    }

    #[test]
    fn flee_is_bounded_inside_radius() {
        let v = Vehicle::new(Vec2::ZERO);
        let f = v.flee(Vec2::new(99.0, 0.0));
        assert!(f.magnitude() > 0.0);
        assert!(f.magnitude() <= v.max_force + EPS);
    }

    #[test]
    fn avoid_target_pushes_away_from_pointer() {
        let mut v = Vehicle::new(Vec2::ZERO);
        v.apply_avoid_target(Vec2::new(10.0, 0.0));
        assert!(v.acceleration.x < 0.0);
        assert!((v.acceleration.magnitude() - 5.0).abs() < EPS);
    }

    #[test]
    fn avoid_target_far_away_does_nothing() {
        let mut v = Vehicle::new(Vec2::ZERO);
        v.apply_avoid_target(Vec2::new(500.0, 500.0));
        assert_eq!(v.acceleration, Vec2::ZERO);
    }

    #[test]
    fn separate_without_neighbors_is_zero() {
        let v = Vehicle::new(Vec2::ZERO);
        assert_eq!(v.separate(&[]), Vec2::ZERO);
    }

    #[test]
    fn separate_ignores_far_and_coincident_vehicles() {
        let v = Vehicle::new(Vec2::ZERO);
        let others = [
            Vehicle::new(Vec2::ZERO),
            Vehicle::new(Vec2::new(1.0, 0.0)),
            Vehicle::new(Vec2::new(30.0, 30.0)),
        ];
        assert_eq!(v.separate(&others), Vec2::ZERO);
    }

    #[test]
    fn separate_steers_away_from_close_neighbor() {
        let v = Vehicle::new(Vec2::ZERO);
        let others = [v, Vehicle::new(Vec2::new(0.5, 0.0))];
        let f = v.separate(&others);
        assert!(f.x < 0.0);
        assert!(f.magnitude() <= v.max_force + EPS);
    }

    #[test]
    fn separation_uses_vehicle_radius() {
        let v = Vehicle::new(Vec2::ZERO).with_radius(10.0);
        let others = [Vehicle::new(Vec2::new(0.0, 5.0))];
        assert!(v.separate(&others).y < 0.0);
    }
}
