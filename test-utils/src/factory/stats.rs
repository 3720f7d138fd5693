//! Factory for creating test user stat snapshots.

use courier_bridge::model::badge::UserStats;

/// Factory for stat snapshots, all counters defaulting to zero.
pub struct StatsFactory {
    stats: UserStats,
}

impl StatsFactory {
    pub fn new() -> Self {
        Self {
            stats: UserStats::default(),
        }
    }

    pub fn total_rides(mut self, total_rides: u32) -> Self {
        self.stats.total_rides = total_rides;
        self
    }

    pub fn five_star_streak(mut self, five_star_streak: u32) -> Self {
        self.stats.five_star_streak = five_star_streak;
        self
    }

    pub fn completion_rate(mut self, completion_rate: u32) -> Self {
        self.stats.completion_rate = completion_rate;
        self
    }

    pub fn positive_ratings(mut self, positive_ratings: u32) -> Self {
        self.stats.positive_ratings = positive_ratings;
        self
    }

    pub fn fast_rides(mut self, fast_rides: u32) -> Self {
        self.stats.fast_rides = fast_rides;
        self
    }

    pub fn punctual_streak(mut self, punctual_streak: u32) -> Self {
        self.stats.punctual_streak = punctual_streak;
        self
    }

    pub fn daily_rides(mut self, daily_rides: u32) -> Self {
        self.stats.daily_rides = daily_rides;
        self
    }

    pub fn build(self) -> UserStats {
        self.stats
    }
}

impl Default for StatsFactory {
    fn default() -> Self {
        Self::new()
    }
}
