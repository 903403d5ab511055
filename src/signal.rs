use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cooperative stop flag. Cloning hands out another handle to the same
/// underlying flag, so a controller can signal a worker that owns the
/// original.
#[derive(Debug, Clone, Default)]
pub struct StopSignal {
    flag: Arc<AtomicBool>,
}

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latches the flag. There is no way to un-stop a signal.
    pub fn request_stop(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_stopped(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_signal_is_live() {
        let signal = StopSignal::new();
        assert!(!signal.is_stopped());
    }

    #[test]
    fn test_clones_share_one_flag() {
        let signal = StopSignal::new();
        let handle = signal.clone();
        handle.request_stop();
        assert!(signal.is_stopped());
        assert!(handle.is_stopped());
    }
}
