use std::time::Duration;

/// How long the loading mask stays up after mount.
pub const LOADING_DELAY: Duration = Duration::from_millis(500);

/// The mask's fade starts after the timer has already removed it, so it never
/// goes transparent while the page underneath is still unrendered.
pub const MASK_FADE_DELAY: Duration = Duration::from_millis(1000);
pub const MASK_FADE_DURATION: Duration = Duration::from_millis(500);

/// Inline animation timing for the loading mask.
pub fn mask_fade_style() -> String {
    format!(
        "animation-duration: {}ms; animation-delay: {}ms",
        MASK_FADE_DURATION.as_millis(),
        MASK_FADE_DELAY.as_millis()
    )
}

/// One-shot loading flag: up at mount, dropped once the delay has elapsed, never raised again.
///
/// Time is supplied by the caller through [`LoadingGate::advance`], so the same gate runs
/// against a browser timer or a virtual clock in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingGate {
    loading: bool,
    elapsed: Duration,
    delay: Duration,
}

impl Default for LoadingGate {
    fn default() -> Self {
        Self::mount()
    }
}

impl LoadingGate {
    pub fn mount() -> Self {
        Self::with_delay(LOADING_DELAY)
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self {
            loading: true,
            elapsed: Duration::ZERO,
            delay,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Moves the clock forward. Returns true if this call dropped the mask.
    pub fn advance(&mut self, by: Duration) -> bool {
        self.elapsed = self.elapsed.saturating_add(by);
        if self.elapsed >= self.delay {
            self.finish()
        } else {
            false
        }
    }

    /// Drops the mask. Idempotent: returns true only for the call that performed the transition.
    pub fn finish(&mut self) -> bool {
        if !self.loading {
            return false;
        }
        log::debug!("loading finished after {:?}", self.elapsed);
        self.loading = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_at_mount() {
        let gate = LoadingGate::mount();
        assert!(gate.is_loading());
        assert_eq!(gate.delay(), Duration::from_millis(500));
    }

    #[test]
    fn test_still_loading_before_delay() {
        let mut gate = LoadingGate::mount();
        assert!(!gate.advance(Duration::from_millis(499)));
        assert!(gate.is_loading());
        assert!(gate.advance(Duration::from_millis(1)));
        assert!(!gate.is_loading());
    }

    #[test]
    fn test_done_after_delay_and_stays_done() {
        let mut gate = LoadingGate::mount();
        assert!(gate.advance(LOADING_DELAY));
        for _ in 0..10 {
            assert!(!gate.advance(Duration::from_millis(250)));
            assert!(!gate.finish());
            assert!(!gate.is_loading());
        }
    }

    #[test]
    fn test_transition_happens_once() {
        let mut gate = LoadingGate::mount();
        let transitions = (0..20)
            .map(|_| gate.advance(Duration::from_millis(100)))
            .filter(|t| *t)
            .count();
        assert_eq!(transitions, 1);
    }

    #[test]
    fn test_mask_fade_starts_after_timer() {
        assert!(MASK_FADE_DELAY > LOADING_DELAY);
        assert_eq!(
            mask_fade_style(),
            "animation-duration: 500ms; animation-delay: 1000ms"
        );
    }

    #[test]
    fn test_huge_step_does_not_overflow() {
        let mut gate = LoadingGate::mount();
        assert!(gate.advance(Duration::MAX));
        assert!(!gate.advance(Duration::MAX));
        assert!(!gate.is_loading());
    }
}
