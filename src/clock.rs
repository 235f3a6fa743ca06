use std::time::Instant;

/// Frame clock: per-frame delta plus accumulated elapsed time.
///
/// The elapsed value feeds the sinusoidal animations, the delta feeds
/// frame-rate-independent integration.
#[derive(Debug)]
pub struct Clock {
    last_tick: Instant,
    elapsed: f32,
}

impl Clock {
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
            elapsed: 0.0,
        }
    }

    /// Delta in seconds since the previous tick; advances the clock.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        self.elapsed += delta;
        delta
    }

    /// Seconds accumulated across all ticks.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn tick_measures_delta() {
        let mut clock = Clock::new();

        thread::sleep(Duration::from_millis(10));
        let delta = clock.tick();

        assert!(delta >= 0.009 && delta <= 0.050);
    }

    #[test]
    fn elapsed_accumulates_ticks() {
        let mut clock = Clock::new();

        thread::sleep(Duration::from_millis(5));
        clock.tick();
        thread::sleep(Duration::from_millis(5));
        clock.tick();

        assert!(clock.elapsed() >= 0.009);
    }
}
