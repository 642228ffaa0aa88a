//! # Global visualizer configuration.
//!
//! Provides [`Config`], the centralized settings used by the
//! [`Controller`](crate::Controller) and its [`VisualState`](crate::VisualState).
//!
//! ## Sentinel values
//! - `delay = 0ms` → pacing never sleeps (algorithms still observe cancellation)
//! - `bus_capacity = 0` → clamped to 1 by [`Config::bus_capacity_clamped`]
//! - `min_value > max_value` → bounds are swapped by [`Config::value_range`]

use std::ops::RangeInclusive;
use std::time::Duration;

/// Largest value accepted by [`Config::delay_for_speed`].
pub const MAX_SPEED: u32 = 200;

/// Global configuration for the controller.
///
/// ## Field semantics
/// - `delay`: default pacing delay applied on every [`Sink::pace`](crate::Sink::pace)
/// - `default_size`: array length seeded at construction
/// - `min_value` / `max_value`: inclusive bounds for generated values
/// - `bus_capacity`: lifecycle event ring buffer size
/// - `bogo_max_iterations`: shuffle cap for the randomized sort
///
/// All fields are public; prefer the helper accessors over re-checking sentinels.
#[derive(Clone, Debug)]
pub struct Config {
    /// Pacing delay between visible steps.
    pub delay: Duration,

    /// Number of elements in the initially seeded array.
    pub default_size: usize,

    /// Smallest generated value (inclusive).
    pub min_value: i32,

    /// Largest generated value (inclusive).
    pub max_value: i32,

    /// Capacity of the lifecycle event bus.
    ///
    /// Slow receivers lagging behind more than `bus_capacity` events skip
    /// the oldest ones.
    pub bus_capacity: usize,

    /// Maximum number of shuffles the randomized sort attempts before
    /// falling back to a deterministic sort.
    pub bogo_max_iterations: usize,
}

impl Config {
    /// Returns the bus capacity clamped to a minimum of 1.
    #[inline]
    pub fn bus_capacity_clamped(&self) -> usize {
        self.bus_capacity.max(1)
    }

    /// Returns the inclusive range of generated values, ordered.
    #[inline]
    pub fn value_range(&self) -> RangeInclusive<i32> {
        if self.min_value <= self.max_value {
            self.min_value..=self.max_value
        } else {
            self.max_value..=self.min_value
        }
    }

    /// Maps a speed setting to a pacing delay (higher speed, shorter delay).
    ///
    /// Speeds are clamped to `1..=200`; the result is `201 - speed` milliseconds.
    ///
    /// # Example
    /// ```
    /// use std::time::Duration;
    /// use sortvisor::Config;
    ///
    /// assert_eq!(Config::delay_for_speed(200), Duration::from_millis(1));
    /// assert_eq!(Config::delay_for_speed(0), Duration::from_millis(200));
    /// ```
    #[inline]
    pub fn delay_for_speed(speed: u32) -> Duration {
        let speed = speed.clamp(1, MAX_SPEED);
        Duration::from_millis(u64::from(MAX_SPEED + 1 - speed))
    }
}

impl Default for Config {
    /// Default configuration:
    ///
    /// - `delay = 50ms`
    /// - `default_size = 50`
    /// - `min_value = 10`, `max_value = 500`
    /// - `bus_capacity = 1024`
    /// - `bogo_max_iterations = 100_000`
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(50),
            default_size: 50,
            min_value: 10,
            max_value: 500,
            bus_capacity: 1024,
            bogo_max_iterations: 100_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_range_is_ordered() {
        let cfg = Config {
            min_value: 40,
            max_value: 5,
            ..Config::default()
        };
        assert_eq!(cfg.value_range(), 5..=40);
        assert_eq!(Config::default().value_range(), 10..=500);
    }

    #[test]
    fn test_bus_capacity_clamped() {
        let cfg = Config {
            bus_capacity: 0,
            ..Config::default()
        };
        assert_eq!(cfg.bus_capacity_clamped(), 1);
    }

    #[test]
    fn test_speed_mapping_is_inverted() {
        assert_eq!(Config::delay_for_speed(1), Duration::from_millis(200));
        assert_eq!(Config::delay_for_speed(50), Duration::from_millis(151));
        assert_eq!(Config::delay_for_speed(500), Duration::from_millis(1));
    }
}
