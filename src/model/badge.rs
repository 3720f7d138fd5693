//! The badge catalog and the per-user stat counters it is scored against.
//!
//! The catalog is a fixed, process-wide read-only table: populated at compile
//! time, never mutated at runtime. Progress and eligibility math lives in
//! [`crate::service::gamification`].

/// Stat family a badge threshold is compared against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeCategory {
    Rides,
    Rating,
    Speed,
    Streak,
}

/// A named achievement with a numeric threshold against a stat category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Threshold compared with `>=` against the badge's stat. Always >= 1.
    pub requirement: u32,
    pub category: BadgeCategory,
    /// Presentation metadata for the badge gallery.
    pub color: &'static str,
    pub icon: &'static str,
}

/// Every badge a courier can earn.
pub const BADGE_CATALOG: &[Badge] = &[
    Badge {
        id: "first_ride",
        name: "First Ride",
        description: "Complete your first ride",
        requirement: 1,
        category: BadgeCategory::Rides,
        color: "#3B82F6",
        icon: "⭐",
    },
    Badge {
        id: "veteran",
        name: "Veteran",
        description: "Complete 50 rides",
        requirement: 50,
        category: BadgeCategory::Rides,
        color: "#F59E0B",
        icon: "🏆",
    },
    Badge {
        id: "master",
        name: "Master",
        description: "Complete 100 rides",
        requirement: 100,
        category: BadgeCategory::Rides,
        color: "#8B5CF6",
        icon: "🎖️",
    },
    Badge {
        id: "legend",
        name: "Legend",
        description: "Complete 500 rides",
        requirement: 500,
        category: BadgeCategory::Rides,
        color: "#F97316",
        icon: "👑",
    },
    Badge {
        id: "five_stars",
        name: "Five Stars",
        description: "Hold a 5.0 rating for 10 rides",
        requirement: 10,
        category: BadgeCategory::Rating,
        color: "#FCD34D",
        icon: "⭐",
    },
    Badge {
        id: "speed_demon",
        name: "Speed Demon",
        description: "Complete 10 rides in under 15 minutes",
        requirement: 10,
        category: BadgeCategory::Speed,
        color: "#EF4444",
        icon: "⚡",
    },
    Badge {
        id: "punctual",
        name: "Punctual",
        description: "Arrive on time for 20 consecutive rides",
        requirement: 20,
        category: BadgeCategory::Streak,
        color: "#10B981",
        icon: "🕐",
    },
    Badge {
        id: "reliable",
        name: "Reliable",
        description: "Keep a 95% completion rate",
        requirement: 95,
        category: BadgeCategory::Rating,
        color: "#3B82F6",
        icon: "🛡️",
    },
    Badge {
        id: "hot_streak",
        name: "Hot Streak",
        description: "Complete 7 rides in one day",
        requirement: 7,
        category: BadgeCategory::Streak,
        color: "#F59E0B",
        icon: "🔥",
    },
    Badge {
        id: "top_rated",
        name: "Top Rated",
        description: "Receive 100 positive ratings",
        requirement: 100,
        category: BadgeCategory::Rating,
        color: "#8B5CF6",
        icon: "👍",
    },
];

/// Looks a badge up by its stable id.
pub fn badge_by_id(id: &str) -> Option<&'static Badge> {
    BADGE_CATALOG.iter().find(|badge| badge.id == id)
}

/// Per-user counters the badge thresholds are scored against.
///
/// These live in the remote backend; callers fetch them and pass a snapshot
/// into the gamification service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserStats {
    pub total_rides: u32,
    /// Consecutive rides at a 5.0 rating.
    pub five_star_streak: u32,
    /// Completion rate as a whole percentage, 0-100.
    pub completion_rate: u32,
    pub positive_ratings: u32,
    /// Rides completed in under 15 minutes.
    pub fast_rides: u32,
    /// Consecutive on-time arrivals.
    pub punctual_streak: u32,
    /// Rides completed today.
    pub daily_rides: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests badge lookup by id.
    ///
    /// Expected: known ids resolve to the catalog entry, unknown ids to None
    #[test]
    fn looks_up_badges_by_id() {
        let veteran = badge_by_id("veteran").unwrap();
        assert_eq!(veteran.name, "Veteran");
        assert_eq!(veteran.requirement, 50);
        assert_eq!(veteran.category, BadgeCategory::Rides);

        assert!(badge_by_id("no_such_badge").is_none());
    }

    /// Tests catalog integrity: unique ids and positive requirements.
    ///
    /// Expected: ten badges, no duplicate ids, every requirement >= 1
    #[test]
    fn catalog_is_well_formed() {
        assert_eq!(BADGE_CATALOG.len(), 10);

        for badge in BADGE_CATALOG {
            assert!(badge.requirement >= 1, "badge {} has zero requirement", badge.id);
            let matches = BADGE_CATALOG.iter().filter(|b| b.id == badge.id).count();
            assert_eq!(matches, 1, "badge id {} is duplicated", badge.id);
        }
    }
}
