use std::time::Duration;

/// Default ceiling of attempts before a wait is given up.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 70;

/// Default pause between two failed attempts.
pub const DEFAULT_DELAY: Duration = Duration::from_secs(2);

/// Blocks the calling thread between attempts.
pub trait Sleeper {
    fn sleep(&self, duration: Duration);
}

/// [`Sleeper`] backed by [`std::thread::sleep`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// A bounded retry loop with a fixed delay.
///
/// An attempt succeeds when it returns `Ok`. After `max_attempts` failed attempts the error
/// of the last one is returned.
///
/// # Examples
///
/// ```
/// # use std::time::Duration;
/// # use drud_local::watcher::{RetryPolicy, Sleeper};
/// struct NoSleep;
/// impl Sleeper for NoSleep {
///     fn sleep(&self, _: Duration) {}
/// }
///
/// let policy = RetryPolicy::new(3, Duration::from_secs(1));
/// let result: Result<u32, &str> = policy.run(&NoSleep, |attempt| {
///     if attempt < 3 { Err("not yet") } else { Ok(attempt) }
/// });
/// assert_eq!(result, Ok(3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            delay: DEFAULT_DELAY,
        }
    }
}

impl RetryPolicy {
    /// Creates a new policy. A `max_attempts` of `0` is treated as `1`.
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            delay,
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn with_max_attempts(self, max_attempts: u32) -> Self {
        Self::new(max_attempts, self.delay)
    }

    pub fn with_delay(self, delay: Duration) -> Self {
        Self::new(self.max_attempts, delay)
    }

    /// Runs `attempt` until it succeeds or the attempts are used up.
    ///
    /// `attempt` receives the 1-based attempt number. The delay only separates failed
    /// attempts, there is no sleep after a success or after the final failure.
    pub fn run<T, E>(
        &self,
        sleeper: &impl Sleeper,
        mut attempt: impl FnMut(u32) -> Result<T, E>,
    ) -> Result<T, E> {
        let mut number = 1;
        loop {
            match attempt(number) {
                Ok(value) => return Ok(value),
                Err(err) if number >= self.max_attempts => return Err(err),
                Err(_) => {
                    sleeper.sleep(self.delay);
                    number += 1;
                }
            }
        }
    }
}
