//! Fixed-rate stepping
//!
//! Wall-clock frame time accumulates and is paid out in whole simulation
//! ticks, capped per frame to prevent a spiral of death.

/// Longest frame time accepted (seconds); longer stalls are dropped
const MAX_FRAME_TIME: f32 = 0.1;

#[derive(Debug, Clone)]
pub struct FixedStep {
    dt: f32,
    max_substeps: u32,
    accumulator: f32,
}

impl FixedStep {
    /// `dt` is seconds per tick
    pub fn new(dt: f32, max_substeps: u32) -> Self {
        Self {
            dt,
            max_substeps: max_substeps.max(1),
            accumulator: 0.0,
        }
    }

    /// Add a frame's elapsed time; returns how many ticks to run now.
    ///
    /// Time still owed after `max_substeps` ticks is dropped.
    pub fn advance(&mut self, frame_secs: f32) -> u32 {
        self.accumulator += frame_secs.clamp(0.0, MAX_FRAME_TIME);

        let mut steps = 0;
        while self.accumulator >= self.dt && steps < self.max_substeps {
            self.accumulator -= self.dt;
            steps += 1;
        }
        if self.accumulator >= self.dt {
            log::debug!("Dropping {:.3}s of simulation backlog", self.accumulator);
            self.accumulator = 0.0;
        }
        steps
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT_60: f32 = 1.0 / 60.0;

    #[test]
    fn test_whole_ticks_only() {
        let mut clock = FixedStep::new(DT_60, 8);
        assert_eq!(clock.advance(0.010), 0);
        assert_eq!(clock.advance(0.010), 1);
        assert_eq!(clock.advance(1.0 / 30.0), 2);
    }

    #[test]
    fn test_substep_cap() {
        let mut clock = FixedStep::new(1.0 / 120.0, 4);
        // 0.1s at 120 Hz would be 12 ticks
        assert_eq!(clock.advance(0.1), 4);
    }

    #[test]
    fn test_long_stall_is_clamped() {
        let mut clock = FixedStep::new(0.1, 100);
        assert_eq!(clock.advance(5.0), 1);
    }

    #[test]
    fn test_capped_backlog_does_not_carry_over() {
        // 0.1s at 120 Hz owes 12 ticks but only 8 are paid
        let mut clock = FixedStep::new(1.0 / 120.0, 8);
        for _ in 0..50 {
            assert_eq!(clock.advance(0.1), 8);
        }
        assert_eq!(clock.accumulator, 0.0);

        // Back at full speed: one tick per frame, no fast-forward
        for _ in 0..100 {
            assert_eq!(clock.advance(1.0 / 120.0), 1);
        }
    }
}
