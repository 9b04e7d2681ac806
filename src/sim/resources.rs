//! Balance meter, score and distance
//!
//! Pure saturating arithmetic: the meter never leaves `[0, meter_max]`.

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// HUD bar color band for the balance meter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeterBand {
    /// Above 50
    High,
    /// Above 25
    Mid,
    Low,
}

/// Per-run scalar resources
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resources {
    /// Balance meter in `[0, meter_max]`
    pub meter: f32,
    pub score: u64,
    /// Distance travelled (HUD shows whole meters)
    pub distance: f32,
}

impl Resources {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            meter: tuning.initial_meter,
            score: 0,
            distance: 0.0,
        }
    }

    /// Per-tick drain. Returns true once the meter is exhausted.
    pub fn apply_decay(&mut self, tuning: &Tuning) -> bool {
        self.meter = (self.meter - tuning.decay_per_tick).max(0.0);
        self.is_exhausted()
    }

    /// Healthy pickup: meter bonus and score
    pub fn apply_good_hit(&mut self, tuning: &Tuning) {
        self.meter = (self.meter + tuning.good_meter_bonus).min(tuning.meter_max);
        self.score = self.score.saturating_add(tuning.good_score);
    }

    /// Junk pickup: meter penalty only
    pub fn apply_bad_hit(&mut self, tuning: &Tuning) {
        self.meter = (self.meter - tuning.bad_meter_penalty).max(0.0);
    }

    pub fn add_distance(&mut self, speed: f32, tuning: &Tuning) {
        self.distance += speed / tuning.distance_divisor;
    }

    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.meter <= 0.0
    }

    /// Whole meters, as displayed
    #[inline]
    pub fn distance_meters(&self) -> u64 {
        self.distance.floor() as u64
    }

    pub fn meter_band(&self) -> MeterBand {
        if self.meter > 50.0 {
            MeterBand::High
        } else if self.meter > 25.0 {
            MeterBand::Mid
        } else {
            MeterBand::Low
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decay_saturates_at_zero() {
        let tuning = Tuning::default();
        let mut res = Resources::new(&tuning);
        assert!(!res.apply_decay(&tuning));
        assert!((res.meter - 49.95).abs() < 1e-4);

        res.meter = 0.03;
        assert!(res.apply_decay(&tuning));
        assert_eq!(res.meter, 0.0);

        // Already empty stays empty
        assert!(res.apply_decay(&tuning));
        assert_eq!(res.meter, 0.0);
    }

    #[test]
    fn test_good_hit_clamps_meter_and_scores() {
        let tuning = Tuning::default();
        let mut res = Resources::new(&tuning);
        res.apply_good_hit(&tuning);
        assert_eq!(res.meter, 60.0);
        assert_eq!(res.score, 10);

        res.meter = 95.0;
        res.apply_good_hit(&tuning);
        assert_eq!(res.meter, 100.0);
        assert_eq!(res.score, 20);
    }

    #[test]
    fn test_bad_hit_clamps_meter() {
        let tuning = Tuning::default();
        let mut res = Resources::new(&tuning);
        res.apply_bad_hit(&tuning);
        assert_eq!(res.meter, 30.0);
        assert_eq!(res.score, 0);

        res.meter = 15.0;
        res.apply_bad_hit(&tuning);
        assert_eq!(res.meter, 0.0);
        assert!(res.is_exhausted());
    }

    #[test]
    fn test_distance_and_band() {
        let tuning = Tuning::default();
        let mut res = Resources::new(&tuning);
        res.add_distance(6.0, &tuning);
        assert!((res.distance - 0.3).abs() < 1e-6);
        assert_eq!(res.distance_meters(), 0);
        res.distance = 12.9;
        assert_eq!(res.distance_meters(), 12);

        assert_eq!(res.meter_band(), MeterBand::Mid);
        res.meter = 50.5;
        assert_eq!(res.meter_band(), MeterBand::High);
        res.meter = 25.0;
        assert_eq!(res.meter_band(), MeterBand::Low);
    }
}
