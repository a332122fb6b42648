// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use plotters::coord::AsRangedCoord;
use plotters::prelude::*;

/// A linear f64 coordinate which places its key points at multiples of a
/// fixed interval.
pub struct MultipleCoord {
    min: f64,
    max: f64,
    interval: f64,
}

impl MultipleCoord {
    pub fn new(min: f64, max: f64, interval: f64) -> Self {
        Self { min, max, interval }
    }
}

impl Ranged for MultipleCoord {
    type ValueType = f64;

    fn map(&self, value: &f64, limit: (i32, i32)) -> i32 {
        if self.max <= self.min {
            return limit.0;
        }
        let fraction = (value - self.min) / (self.max - self.min);
        limit.0 + (fraction * f64::from(limit.1 - limit.0)) as i32
    }

    fn key_points(&self, max_points: usize) -> Vec<f64> {
        let mut points = Vec::new();
        let mut tick = (self.min / self.interval).ceil() * self.interval;

        while tick <= self.max && points.len() < max_points {
            points.push(tick);
            tick += self.interval;
        }

        points
    }

    fn range(&self) -> std::ops::Range<f64> {
        self.min..self.max
    }
}

impl AsRangedCoord for MultipleCoord {
    type CoordDescType = Self;
    type Value = f64;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_points_are_interval_multiples() {
        let coord = MultipleCoord::new(0.0, 10.0, 2.0);
        assert_eq!(coord.key_points(32), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
    }

    #[test]
    fn key_points_start_at_the_first_multiple_in_range() {
        let coord = MultipleCoord::new(3.0, 9.0, 2.0);
        assert_eq!(coord.key_points(32), vec![4.0, 6.0, 8.0]);
    }

    #[test]
    fn key_points_respect_the_cap() {
        let coord = MultipleCoord::new(0.0, 100.0, 2.0);
        assert_eq!(coord.key_points(5).len(), 5);
    }

    #[test]
    fn map_is_linear_over_the_pixel_range() {
        let coord = MultipleCoord::new(0.0, 10.0, 2.0);
        assert_eq!(coord.map(&0.0, (0, 100)), 0);
        assert_eq!(coord.map(&5.0, (0, 100)), 50);
        assert_eq!(coord.map(&10.0, (0, 100)), 100);
    }

    #[test]
    fn map_of_a_degenerate_range_pins_to_the_left_edge() {
        let coord = MultipleCoord::new(5.0, 5.0, 2.0);
        assert_eq!(coord.map(&5.0, (10, 100)), 10);
    }
}
