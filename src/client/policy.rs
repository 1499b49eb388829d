use std::time::Duration;

/// What to do after a failed transport attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Decision {
    Retry { delay: Duration },
    Fail,
}

/// Retry policy for transport failures.
///
/// Only transport failures reach this policy; HTTP error statuses are
/// surfaced immediately and never retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RetryPolicy {
    pub max_retries: u32,
    pub min_delay: Duration,
    pub max_delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_retries: u32, min_delay: Duration, max_delay: Duration) -> Self {
        Self {
            max_retries,
            min_delay,
            max_delay: max_delay.max(min_delay),
        }
    }

    fn backoff_delay(&self, attempt: u32) -> Duration {
        if self.min_delay.is_zero() {
            return Duration::ZERO;
        }
        // exponential backoff: min_delay * 2^attempt
        let factor = 1u32.checked_shl(attempt).unwrap_or(u32::MAX);
        self.min_delay
            .checked_mul(factor)
            .unwrap_or(self.max_delay)
            .min(self.max_delay)
    }

    /// Decide what to do next after an attempt failed.
    ///
    /// `attempt` is 0-based (first failure => attempt=0).
    pub fn decide(&self, attempt: u32) -> Decision {
        if attempt < self.max_retries {
            Decision::Retry {
                delay: self.backoff_delay(attempt),
            }
        } else {
            Decision::Fail
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retries_until_limit() {
        let policy = RetryPolicy::new(3, Duration::ZERO, Duration::ZERO);
        for attempt in 0..3 {
            assert_eq!(
                policy.decide(attempt),
                Decision::Retry {
                    delay: Duration::ZERO
                }
            );
        }
        assert_eq!(policy.decide(3), Decision::Fail);
    }

    #[test]
    fn test_zero_retries_fails_immediately() {
        let policy = RetryPolicy::new(0, Duration::ZERO, Duration::ZERO);
        assert_eq!(policy.decide(0), Decision::Fail);
    }

    #[test]
    fn test_exponential_backoff_is_capped() {
        let policy = RetryPolicy::new(10, Duration::from_millis(100), Duration::from_millis(500));
        assert_eq!(policy.backoff_delay(0), Duration::from_millis(100));
        assert_eq!(policy.backoff_delay(1), Duration::from_millis(200));
        assert_eq!(policy.backoff_delay(2), Duration::from_millis(400));
        assert_eq!(policy.backoff_delay(3), Duration::from_millis(500));
        assert_eq!(policy.backoff_delay(40), Duration::from_millis(500));
    }

    #[test]
    fn test_max_delay_never_below_min() {
        let policy = RetryPolicy::new(1, Duration::from_millis(300), Duration::from_millis(100));
        assert_eq!(policy.max_delay, Duration::from_millis(300));
    }
}
