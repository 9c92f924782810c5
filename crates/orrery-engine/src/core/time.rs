/// Fixed-step tick clock.
/// Converts variable frame deltas into a whole number of simulation
/// ticks, so body motion advances by exact per-tick increments no matter
/// how the display paces frames.
pub struct TickClock {
    /// Duration of one simulation tick in seconds.
    tick_dt: f32,
    /// Unspent frame time carried between frames.
    carry: f32,
}

impl TickClock {
    /// Catch-up cap: a stalled tab never replays more than this many
    /// ticks in one frame.
    const MAX_TICKS_PER_FRAME: u32 = 10;

    pub fn new(tick_dt: f32) -> Self {
        Self {
            tick_dt,
            carry: 0.0,
        }
    }

    /// Feed one frame's delta. Returns how many whole ticks to run.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        self.carry += frame_dt;
        self.carry = self
            .carry
            .min(self.tick_dt * Self::MAX_TICKS_PER_FRAME as f32);
        let ticks = (self.carry / self.tick_dt) as u32;
        self.carry -= ticks as f32 * self.tick_dt;
        ticks
    }

    /// Duration of one tick in seconds.
    pub fn tick_dt(&self) -> f32 {
        self.tick_dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_tick_exact() {
        let mut clock = TickClock::new(1.0 / 60.0);
        assert_eq!(clock.advance(1.0 / 60.0), 1);
    }

    #[test]
    fn carries_partial_frames() {
        let mut clock = TickClock::new(1.0 / 60.0);
        assert_eq!(clock.advance(0.008), 0);
        assert_eq!(clock.advance(0.010), 1);
    }

    #[test]
    fn caps_catch_up() {
        let mut clock = TickClock::new(1.0 / 60.0);
        // A full second of stall is worth 60 ticks, but the cap holds.
        assert_eq!(clock.advance(1.0), TickClock::MAX_TICKS_PER_FRAME);
    }
}
