/// Discrete simulation clock. Counts the cycles that have already run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClockCycle {
    cycle: u64,
}

impl ClockCycle {
    pub fn new() -> Self {
        ClockCycle { cycle: 0 }
    }

    /// Number of cycles completed so far.
    pub fn elapsed(&self) -> u64 {
        self.cycle
    }

    /// 1-based number of the cycle about to run.
    pub fn upcoming(&self) -> u64 {
        self.cycle + 1
    }

    pub fn next_cycle(&mut self) {
        self.cycle += 1;
    }

    pub fn reset(&mut self) {
        self.cycle = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_counts_from_zero() {
        let mut clock = ClockCycle::new();
        assert_eq!(clock.elapsed(), 0);
        assert_eq!(clock.upcoming(), 1);

        clock.next_cycle();
        clock.next_cycle();
        assert_eq!(clock.elapsed(), 2);
        assert_eq!(clock.upcoming(), 3);

        clock.reset();
        assert_eq!(clock, ClockCycle::default());
    }
}
