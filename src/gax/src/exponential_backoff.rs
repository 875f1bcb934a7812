// Copyright 2026 The IBM Cloud Rust SDK Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Truncated [exponential backoff] with full jitter.
//!
//! The delay after the n-th failure is `initial_delay * scaling^(n-1)`, capped
//! at `maximum_delay`. The policy returns a random value between zero and that
//! delay, spreading the retries from many clients over time.
//!
//! [exponential backoff]: https://en.wikipedia.org/wiki/Exponential_backoff

use std::time::Duration;

/// Invalid parameters for an [ExponentialBackoff] policy.
#[derive(thiserror::Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum Error {
    #[error("the scaling factor ({0}) must be at least 1.0")]
    InvalidScalingFactor(f64),
    #[error("the initial delay ({0:?}) must be greater than zero")]
    InvalidInitialDelay(Duration),
    #[error("the maximum delay ({maximum:?}) is smaller than the initial delay ({initial:?})")]
    EmptyRange { maximum: Duration, initial: Duration },
}

// Matches the retry intervals used by the other IBM Cloud SDKs.
const DEFAULT_INITIAL_DELAY: Duration = Duration::from_secs(1);
const DEFAULT_MAXIMUM_DELAY: Duration = Duration::from_secs(30);
const DEFAULT_SCALING: f64 = 2.0;

const CLAMP_MIN_INITIAL: Duration = Duration::from_millis(1);
const CLAMP_MIN_MAXIMUM: Duration = Duration::from_secs(1);
const CLAMP_MAX_MAXIMUM: Duration = Duration::from_secs(24 * 60 * 60);
const CLAMP_MAX_SCALING: f64 = 32.0;

/// Configures an [ExponentialBackoff] policy.
///
/// # Example
/// ```
/// # use ibm_cloud_gax::exponential_backoff::{Error, ExponentialBackoffBuilder};
/// use std::time::Duration;
/// let policy = ExponentialBackoffBuilder::new()
///     .with_initial_delay(Duration::from_millis(500))
///     .with_maximum_delay(Duration::from_secs(10))
///     .build()?;
/// # Ok::<(), Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct ExponentialBackoffBuilder {
    initial_delay: Duration,
    maximum_delay: Duration,
    scaling: f64,
}

impl ExponentialBackoffBuilder {
    /// Starts from a one second initial delay, doubling up to 30 seconds.
    pub fn new() -> Self {
        Self {
            initial_delay: DEFAULT_INITIAL_DELAY,
            maximum_delay: DEFAULT_MAXIMUM_DELAY,
            scaling: DEFAULT_SCALING,
        }
    }

    /// Sets the delay after the first failure.
    pub fn with_initial_delay<V: Into<Duration>>(mut self, v: V) -> Self {
        self.initial_delay = v.into();
        self
    }

    /// Sets the longest delay between two attempts.
    pub fn with_maximum_delay<V: Into<Duration>>(mut self, v: V) -> Self {
        self.maximum_delay = v.into();
        self
    }

    /// Sets the growth factor between consecutive delays.
    pub fn with_scaling<V: Into<f64>>(mut self, v: V) -> Self {
        self.scaling = v.into();
        self
    }

    /// Creates the policy, or returns an error if the parameters are invalid.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_gax::exponential_backoff::{Error, ExponentialBackoffBuilder};
    /// # use ibm_cloud_gax::backoff_policy::BackoffPolicy;
    /// use std::time::{Duration, Instant};
    /// let backoff = ExponentialBackoffBuilder::new()
    ///     .with_initial_delay(Duration::from_secs(2))
    ///     .with_maximum_delay(Duration::from_secs(20))
    ///     .build()?;
    /// assert!(backoff.on_failure(Instant::now(), 1) <= Duration::from_secs(2));
    /// assert!(backoff.on_failure(Instant::now(), 2) <= Duration::from_secs(4));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn build(self) -> Result<ExponentialBackoff, Error> {
        if self.scaling.is_nan() || self.scaling < 1.0 {
            return Err(Error::InvalidScalingFactor(self.scaling));
        }
        if self.initial_delay.is_zero() {
            return Err(Error::InvalidInitialDelay(self.initial_delay));
        }
        if self.maximum_delay < self.initial_delay {
            return Err(Error::EmptyRange {
                maximum: self.maximum_delay,
                initial: self.initial_delay,
            });
        }
        Ok(ExponentialBackoff {
            initial_delay: self.initial_delay,
            maximum_delay: self.maximum_delay,
            scaling: self.scaling,
        })
    }

    /// Creates the policy, moving any invalid parameter into a usable range.
    ///
    /// The maximum delay is kept between one second and one day, the initial
    /// delay between one millisecond and the maximum delay, and the scaling
    /// factor between 1.0 and 32.0.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_gax::exponential_backoff::ExponentialBackoffBuilder;
    /// # use ibm_cloud_gax::backoff_policy::BackoffPolicy;
    /// use std::time::{Duration, Instant};
    /// let backoff = ExponentialBackoffBuilder::new()
    ///     .with_initial_delay(Duration::ZERO)
    ///     .clamp();
    /// assert!(backoff.on_failure(Instant::now(), 1) <= Duration::from_millis(1));
    /// ```
    pub fn clamp(self) -> ExponentialBackoff {
        let scaling = if self.scaling.is_nan() {
            DEFAULT_SCALING
        } else {
            self.scaling.clamp(1.0, CLAMP_MAX_SCALING)
        };
        let maximum_delay = self
            .maximum_delay
            .clamp(CLAMP_MIN_MAXIMUM, CLAMP_MAX_MAXIMUM);
        let initial_delay = self.initial_delay.clamp(CLAMP_MIN_INITIAL, maximum_delay);
        ExponentialBackoff {
            initial_delay,
            maximum_delay,
            scaling,
        }
    }
}

impl Default for ExponentialBackoffBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A [BackoffPolicy][crate::backoff_policy::BackoffPolicy] with exponentially
/// growing delays.
///
/// Use [ExponentialBackoffBuilder] to create instances with custom parameters.
#[derive(Clone, Debug)]
pub struct ExponentialBackoff {
    initial_delay: Duration,
    maximum_delay: Duration,
    scaling: f64,
}

impl ExponentialBackoff {
    // The upper bound for the delay after `attempt_count` failures.
    fn ceiling(&self, attempt_count: u32) -> Duration {
        let exponent = i32::try_from(attempt_count.saturating_sub(1)).unwrap_or(i32::MAX);
        let factor = self.scaling.powi(exponent);
        // Compare the factors first, multiplying may overflow the `Duration`.
        if factor >= self.maximum_delay.div_duration_f64(self.initial_delay) {
            return self.maximum_delay;
        }
        self.initial_delay.mul_f64(factor)
    }

    fn jittered<R: rand::Rng>(&self, attempt_count: u32, rng: &mut R) -> Duration {
        rng.random_range(Duration::ZERO..=self.ceiling(attempt_count))
    }
}

impl Default for ExponentialBackoff {
    fn default() -> Self {
        ExponentialBackoffBuilder::new().clamp()
    }
}

impl crate::backoff_policy::BackoffPolicy for ExponentialBackoff {
    fn on_failure(&self, _loop_start: std::time::Instant, attempt_count: u32) -> Duration {
        self.jittered(attempt_count, &mut rand::rng())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backoff_policy::BackoffPolicy;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use test_case::test_case;

    const SECOND: Duration = Duration::from_secs(1);

    fn builder(initial: Duration, maximum: Duration, scaling: f64) -> ExponentialBackoffBuilder {
        ExponentialBackoffBuilder::new()
            .with_initial_delay(initial)
            .with_maximum_delay(maximum)
            .with_scaling(scaling)
    }

    #[test_case(SECOND, 5 * SECOND, 0.5, Error::InvalidScalingFactor(0.5))]
    #[test_case(SECOND, 5 * SECOND, -1.0, Error::InvalidScalingFactor(-1.0))]
    #[test_case(Duration::ZERO, 5 * SECOND, 2.0, Error::InvalidInitialDelay(Duration::ZERO))]
    #[test_case(10 * SECOND, 5 * SECOND, 2.0, Error::EmptyRange { maximum: 5 * SECOND, initial: 10 * SECOND })]
    fn build_errors(initial: Duration, maximum: Duration, scaling: f64, want: Error) {
        let got = builder(initial, maximum, scaling).build();
        assert_eq!(got.map(|_| ()), Err(want));
    }

    #[test_case(SECOND, Duration::MAX, 2.0)]
    #[test_case(Duration::from_nanos(1), Duration::MAX, 1.0)]
    #[test_case(SECOND, SECOND, 1.0)]
    fn build_limits(initial: Duration, maximum: Duration, scaling: f64) {
        let got = builder(initial, maximum, scaling).build();
        assert!(got.is_ok(), "{got:?}");
    }

    #[test]
    fn defaults() -> anyhow::Result<()> {
        let backoff = ExponentialBackoffBuilder::default().build()?;
        assert_eq!(backoff.ceiling(1), SECOND);
        assert_eq!(backoff.ceiling(2), 2 * SECOND);
        assert_eq!(backoff.ceiling(5), 16 * SECOND);
        assert_eq!(backoff.ceiling(6), 30 * SECOND);
        assert_eq!(backoff.ceiling(100), 30 * SECOND);

        let backoff = ExponentialBackoff::default();
        assert_eq!(backoff.ceiling(1), DEFAULT_INITIAL_DELAY);
        assert_eq!(backoff.ceiling(100), DEFAULT_MAXIMUM_DELAY);
        Ok(())
    }

    #[test_case(SECOND, Duration::MAX, 0.5)]
    #[test_case(SECOND, Duration::MAX, 1_000_000.0)]
    #[test_case(SECOND, Duration::ZERO, 8.0)]
    #[test_case(10 * SECOND, Duration::ZERO, 8.0)]
    #[test_case(Duration::ZERO, Duration::ZERO, 8.0)]
    #[test_case(SECOND, 10 * SECOND, f64::NAN)]
    fn clamp(initial: Duration, maximum: Duration, scaling: f64) {
        let got = builder(initial, maximum, scaling).clamp();
        assert!((1.0..=CLAMP_MAX_SCALING).contains(&got.scaling), "{got:?}");
        assert!(
            (CLAMP_MIN_MAXIMUM..=CLAMP_MAX_MAXIMUM).contains(&got.maximum_delay),
            "{got:?}"
        );
        assert!(
            (CLAMP_MIN_INITIAL..=got.maximum_delay).contains(&got.initial_delay),
            "{got:?}"
        );
    }

    #[test]
    fn ceiling_saturates() -> anyhow::Result<()> {
        let backoff = builder(SECOND, 4 * SECOND, 2.0).build()?;
        let got: Vec<_> = [1, 2, 3, 4, u32::MAX]
            .into_iter()
            .map(|n| backoff.ceiling(n))
            .collect();
        assert_eq!(
            got,
            vec![SECOND, 2 * SECOND, 4 * SECOND, 4 * SECOND, 4 * SECOND]
        );
        // A zero attempt count is treated as the first attempt.
        assert_eq!(backoff.ceiling(0), SECOND);
        Ok(())
    }

    #[test]
    fn jitter() -> anyhow::Result<()> {
        let backoff = builder(SECOND, 8 * SECOND, 2.0).build()?;
        let mut rng = StdRng::seed_from_u64(42);
        for attempt in 1..10 {
            let ceiling = backoff.ceiling(attempt);
            for _ in 0..100 {
                let got = backoff.jittered(attempt, &mut rng);
                assert!(got <= ceiling, "{got:?} {ceiling:?} {attempt}");
            }
        }

        let mut r1 = StdRng::seed_from_u64(7);
        let mut r2 = StdRng::seed_from_u64(7);
        for attempt in 1..5 {
            assert_eq!(
                backoff.jittered(attempt, &mut r1),
                backoff.jittered(attempt, &mut r2)
            );
        }
        Ok(())
    }

    #[test]
    fn on_failure() -> anyhow::Result<()> {
        let backoff = builder(SECOND, 4 * SECOND, 2.0).build()?;
        let now = std::time::Instant::now();
        for (attempt, ceiling) in [(1, SECOND), (2, 2 * SECOND), (3, 4 * SECOND), (9, 4 * SECOND)] {
            let got = backoff.on_failure(now, attempt);
            assert!(got <= ceiling, "{got:?} {ceiling:?} {attempt}");
        }
        Ok(())
    }
}
