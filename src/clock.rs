//! Millisecond time source used to pace animation ticks.

/// A monotonic millisecond counter. Wrapping is tolerated: intervals are computed with wrapping
/// subtraction.
pub trait Clock {
    /// Milliseconds elapsed since some fixed point.
    fn now_ms(&mut self) -> u64;
}

/// Any closure returning the current time works as a clock, e.g. one reading a HAL timer.
impl<F> Clock for F
where
    F: FnMut() -> u64,
{
    fn now_ms(&mut self) -> u64 {
        self()
    }
}


#[cfg(test)]
mod tests {
    use super::test_clock::ManualClock;
    use super::Clock;

    #[test]
    fn closure_clock() {
        let mut t = 0u64;
        let mut clock = move || {
            t += 5;
            t
        };
        assert_eq!(clock.now_ms(), 5);
        assert_eq!(clock.now_ms(), 10);
    }

    #[test]
    fn manual_clock_shared() {
        let handle = ManualClock::new(100);
        let mut clock = handle.clone();
        handle.advance(40);
        assert_eq!(clock.now_ms(), 140);
        handle.set(3);
        assert_eq!(clock.now_ms(), 3);
    }
}
