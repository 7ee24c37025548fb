use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use crate::error::TerminationReason;

/**
cancellation handle polled by the exact search.

`is_finished` must be a cheap, non-blocking check: it is called at every branch.
Once it returned true, `reason` tells why.
*/
pub trait Terminator {
    /// true if the search should stop
    fn is_finished(&self) -> bool;

    /// reason of the termination (None while still running)
    fn reason(&self) -> Option<TerminationReason>;
}

/// stops the search after a given amount of time
#[derive(Debug, Clone, Copy)]
pub struct TimeTerminator {
    start: Instant,
    limit: Duration,
}

impl TimeTerminator {
    /// time limit (in seconds) starting now
    pub fn new(seconds:f32) -> Self {
        Self::from_duration(Duration::from_secs_f32(seconds.max(0.)))
    }

    /// time limit starting now
    pub fn from_duration(limit:Duration) -> Self {
        Self { start: Instant::now(), limit }
    }

    /// time elapsed since the creation of the terminator
    pub fn elapsed(&self) -> Duration { self.start.elapsed() }
}

impl Terminator for TimeTerminator {
    fn is_finished(&self) -> bool { self.start.elapsed() >= self.limit }

    fn reason(&self) -> Option<TerminationReason> {
        if self.is_finished() {
            Some(TerminationReason::DeadlineExceeded(self.limit))
        } else {
            None
        }
    }
}

/// shared flag, clones can cancel the search from another thread
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    /// creates a token that is not cancelled yet
    pub fn new() -> Self { Self::default() }

    /// requests the search to stop
    pub fn cancel(&self) { self.cancelled.store(true, Ordering::Relaxed); }
}

impl Terminator for CancelToken {
    fn is_finished(&self) -> bool { self.cancelled.load(Ordering::Relaxed) }

    fn reason(&self) -> Option<TerminationReason> {
        if self.is_finished() { Some(TerminationReason::Cancelled) } else { None }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_terminator() {
        let expired = TimeTerminator::new(0.);
        assert!(expired.is_finished());
        assert_eq!(expired.reason(), Some(TerminationReason::DeadlineExceeded(Duration::from_secs(0))));
        let running = TimeTerminator::new(3600.);
        assert!(!running.is_finished());
        assert_eq!(running.reason(), None);
    }

    #[test]
    fn test_cancel_token_from_clone() {
        let token = CancelToken::new();
        let other = token.clone();
        assert!(!token.is_finished());
        std::thread::spawn(move || other.cancel()).join().unwrap();
        assert!(token.is_finished());
        assert_eq!(token.reason(), Some(TerminationReason::Cancelled));
    }
}
