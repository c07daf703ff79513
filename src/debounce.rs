use std::time::Duration;

/// Trailing-edge debounce state: the latest triggered value plus an epoch
/// counter that neutralizes stale timers.
///
/// Each trigger replaces the pending value and invalidates every timer
/// scheduled before it; the one timer armed for the returned epoch publishes
/// after a full quiet window. There is no leading-edge publish. A timer that
/// fires after teardown or after a newer trigger presents an outdated epoch
/// and takes nothing.
#[derive(Debug)]
pub struct TrailingDebounce<T> {
    window: Duration,
    epoch: u64,
    pending: Option<T>,
}

impl<T> TrailingDebounce<T> {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            epoch: 0,
            pending: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Records `value` as the pending publish. Returns the epoch the newly
    /// armed timer must present to fire.
    pub fn trigger(&mut self, value: T) -> u64 {
        self.epoch += 1;
        self.pending = Some(value);
        self.epoch
    }

    /// Takes the pending value if `epoch` is still current.
    pub fn take_if_current(&mut self, epoch: u64) -> Option<T> {
        if epoch == self.epoch {
            self.pending.take()
        } else {
            None
        }
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn debounce() -> TrailingDebounce<u16> {
        TrailingDebounce::new(Duration::from_millis(5000))
    }

    #[test]
    fn starts_idle() {
        let mut deb = debounce();
        assert!(deb.is_idle());
        assert_eq!(deb.take_if_current(0), None);
    }

    #[test]
    fn last_trigger_in_a_burst_wins() {
        let mut deb = debounce();
        let first = deb.trigger(0);
        let second = deb.trigger(1);
        let last = deb.trigger(2);

        assert_eq!(deb.take_if_current(first), None);
        assert_eq!(deb.take_if_current(second), None);
        assert_eq!(deb.take_if_current(last), Some(2));
    }

    #[test]
    fn take_clears_the_pending_value() {
        let mut deb = debounce();
        let epoch = deb.trigger(7);

        assert_eq!(deb.take_if_current(epoch), Some(7));
        assert!(deb.is_idle());
        assert_eq!(deb.take_if_current(epoch), None);
    }

    #[test]
    fn stale_epoch_takes_nothing_even_after_retrigger() {
        let mut deb = debounce();
        let stale = deb.trigger(1);
        let fresh = deb.trigger(2);

        assert_eq!(deb.take_if_current(stale), None);
        // The stale timer must not have consumed the fresh value.
        assert_eq!(deb.take_if_current(fresh), Some(2));
    }
}
