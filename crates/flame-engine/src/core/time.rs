/// Frame-counting phase clock.
///
/// Advances by a fixed increment per tick, not by wall-clock time, so the
/// phase period scales with the display refresh rate. Time is derived from
/// a tick count, so it never stalls however long the session runs.
#[derive(Debug, Clone)]
pub struct PhaseClock {
    ticks: u64,
    /// Logical time per tick.
    increment: f32,
}

impl PhaseClock {
    pub const DEFAULT_INCREMENT: f32 = 0.005;

    pub fn new(increment: f32) -> Self {
        Self { ticks: 0, increment }
    }

    /// Resume from `ticks` already elapsed.
    pub fn with_ticks(mut self, ticks: u64) -> Self {
        self.ticks = ticks;
        self
    }

    /// Advance one tick.
    pub fn advance(&mut self) {
        self.ticks = self.ticks.saturating_add(1);
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Accumulated logical time.
    pub fn time(&self) -> f64 {
        self.ticks as f64 * f64::from(self.increment)
    }

    pub fn increment(&self) -> f32 {
        self.increment
    }

    /// Whole logical seconds elapsed.
    pub fn phase(&self) -> i64 {
        self.time().floor() as i64
    }

    /// True on even phases.
    pub fn use_outer(&self) -> bool {
        self.phase() % 2 == 0
    }
}

impl Default for PhaseClock {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INCREMENT)
    }
}
