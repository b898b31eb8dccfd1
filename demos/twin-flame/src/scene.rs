//! The heart scene: two vehicle populations chasing alternating heart
//! curves, with a lace hung between every pair.

use flame_engine::{DotInstance, Lace, LineInstance, PhaseClock, RenderBuffer, Vehicle};
use glam::Vec2;

use crate::config::SceneConfig;
use crate::heart::HeartField;

/// Vehicle fill opacity, 200/255.
const VEHICLE_ALPHA: f32 = 200.0 / 255.0;

/// Owns every simulation entity. `tick` is the only mutator of vehicles
/// and laces; input handling only writes the pointer field.
pub struct HeartScene {
    field: HeartField,
    /// Both populations back to back: `[0, n)` start on the inner curve and
    /// drive lace targets, `[n, 2n)` start on the outer curve and anchor laces.
    vehicles: Vec<Vehicle>,
    laces: Vec<Lace>,
    clock: PhaseClock,
    pointer: Option<Vec2>,
}

impl HeartScene {
    pub fn new(viewport: Vec2, config: &SceneConfig) -> Self {
        let field = HeartField::new(viewport, config);
        let n = field.len();

        let mut vehicles = Vec::with_capacity(2 * n);
        vehicles.extend(field.inner().iter().map(|&p| Vehicle::new(p)));
        vehicles.extend(field.outer().iter().map(|&p| Vehicle::new(p)));

        let laces: Vec<Lace> = (0..n)
            .map(|i| Lace::new(field.outer()[i], field.gap(i) + config.lace_slack))
            .collect();

        log::info!(
            "scene: {} vehicles, {} laces, {} segments",
            vehicles.len(),
            laces.len(),
            laces.iter().map(Lace::len).sum::<usize>()
        );

        Self {
            field,
            vehicles,
            laces,
            clock: PhaseClock::new(config.time_increment),
            pointer: None,
        }
    }

    /// Number of vehicle pairs (and laces).
    pub fn pair_count(&self) -> usize {
        self.field.len()
    }

    pub fn field(&self) -> &HeartField {
        &self.field
    }

    pub fn clock(&self) -> &PhaseClock {
        &self.clock
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// The population that starts on the inner curve.
    pub fn chasers(&self) -> &[Vehicle] {
        &self.vehicles[..self.pair_count()]
    }

    /// The population that starts on the outer curve.
    pub fn anchors(&self) -> &[Vehicle] {
        &self.vehicles[self.pair_count()..]
    }

    pub fn laces(&self) -> &[Lace] {
        &self.laces
    }

    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    pub fn set_pointer(&mut self, pointer: Option<Vec2>) {
        self.pointer = pointer;
    }

    /// Advance the simulation by one frame.
    pub fn tick(&mut self) {
        self.clock.advance();
        let use_outer = self.clock.use_outer();
        let n = self.pair_count();

        for i in 0..n {
            let (chaser_target, anchor_target) = self.field.targets(i, use_outer);

            self.steer(i, chaser_target);
            self.steer(n + i, anchor_target);

            let lace = &mut self.laces[i];
            lace.position = self.vehicles[n + i].position;
            lace.show(self.vehicles[i].position);
        }
    }

    /// Separation reads the live population, so vehicles already moved
    /// this tick are seen at their new positions.
    fn steer(&mut self, index: usize, target: Vec2) {
        let mut vehicle = self.vehicles[index];
        vehicle.apply_behaviors(&self.vehicles, target);
        if let Some(pointer) = self.pointer {
            vehicle.apply_avoid_target(pointer);
        }
        vehicle.update();
        self.vehicles[index] = vehicle;
    }

    /// Write one dot per vehicle and one line per lace segment.
    pub fn render(&self, buffer: &mut RenderBuffer) {
        for lace in &self.laces {
            for segment in lace.segments() {
                let tail = segment.second_pos();
                buffer.push_line(LineInstance {
                    x0: segment.position.x,
                    y0: segment.position.y,
                    x1: tail.x,
                    y1: tail.y,
                    width: segment.length(),
                    alpha: (segment.segment_number as f32 / 255.0).min(1.0),
                });
            }
        }
        for vehicle in &self.vehicles {
            buffer.push_dot(DotInstance {
                x: vehicle.position.x,
                y: vehicle.position.y,
                radius: vehicle.radius,
                alpha: VEHICLE_ALPHA,
            });
        }
    }
}
