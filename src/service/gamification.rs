//! Badges, experience, and levels.
//!
//! Eligibility math is pure and side-effect free: checking a badge never
//! awards it. Awarding is the explicit [`GamificationService::award_badge`]
//! operation. Stat counters live in the remote backend; callers pass a
//! snapshot in.

use std::sync::Arc;

use crate::error::validation::ValidationError;
use crate::model::badge::{badge_by_id, Badge, BadgeCategory, UserStats, BADGE_CATALOG};
use crate::notify::{NotificationEvent, NotificationRouter, Severity};
use crate::observer::{Observer, ObserverCell, Subscription};

/// Experience needed per level; level = total / 1000 + 1.
pub const XP_PER_LEVEL: u32 = 1000;

/// Actions that grant experience.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XpAction {
    CompleteRide,
    FiveStarRating,
    FastDelivery,
    DailyStreak,
    FirstRide,
}

/// Events delivered to the gamification observer.
#[derive(Debug, Clone)]
pub enum GamificationEvent {
    BadgeEarned { badge_id: String, name: String },
    ExperienceGained { amount: u32, reason: String },
    LevelUp { level: u32, experience: u32 },
    Error { message: String },
}

struct GamificationInner {
    notifier: NotificationRouter,
    observer: ObserverCell<GamificationEvent>,
}

#[derive(Clone)]
pub struct GamificationService {
    inner: Arc<GamificationInner>,
}

impl GamificationService {
    pub fn new(notifier: NotificationRouter) -> Self {
        Self {
            inner: Arc::new(GamificationInner {
                notifier,
                observer: ObserverCell::new(),
            }),
        }
    }

    /// Registers the gamification observer, replacing any previous
    /// registration.
    pub fn subscribe(&self, observer: Arc<dyn Observer<GamificationEvent>>) -> Subscription {
        self.inner.observer.subscribe(observer)
    }

    /// The stat counter a badge is scored against. Unrecognized
    /// category/badge combinations score 0.
    pub fn current_stat_value(badge: &Badge, stats: &UserStats) -> u32 {
        match badge.category {
            BadgeCategory::Rides => stats.total_rides,
            BadgeCategory::Rating => match badge.id {
                "five_stars" => stats.five_star_streak,
                "reliable" => stats.completion_rate,
                "top_rated" => stats.positive_ratings,
                _ => 0,
            },
            BadgeCategory::Speed => stats.fast_rides,
            BadgeCategory::Streak => match badge.id {
                "punctual" => stats.punctual_streak,
                "hot_streak" => stats.daily_rides,
                _ => 0,
            },
        }
    }

    /// Progress toward a badge as a whole percentage, saturating at 100.
    pub fn badge_progress(badge: &Badge, stats: &UserStats) -> u8 {
        let current = Self::current_stat_value(badge, stats);
        ((current * 100) / badge.requirement).min(100) as u8
    }

    /// Whether the badge's threshold is met. Equality earns.
    pub fn is_earned(badge: &Badge, stats: &UserStats) -> bool {
        Self::current_stat_value(badge, stats) >= badge.requirement
    }

    /// Every catalog badge whose threshold the stats meet. Checking never
    /// awards.
    pub fn earned_badges(stats: &UserStats) -> Vec<&'static Badge> {
        BADGE_CATALOG
            .iter()
            .filter(|badge| Self::is_earned(badge, stats))
            .collect()
    }

    /// Experience granted for one action.
    pub fn xp_for_action(action: XpAction) -> u32 {
        match action {
            XpAction::CompleteRide => 100,
            XpAction::FiveStarRating => 50,
            XpAction::FastDelivery => 25,
            XpAction::DailyStreak => 10,
            XpAction::FirstRide => 200,
        }
    }

    /// Level reached at a total experience count.
    pub fn level_for(total_experience: u32) -> u32 {
        total_experience / XP_PER_LEVEL + 1
    }

    /// Awards a badge explicitly: observer event plus a notification.
    ///
    /// An unknown badge id fails validation with an error event and no side
    /// effects.
    pub fn award_badge(&self, badge_id: &str) {
        let Some(badge) = badge_by_id(badge_id) else {
            tracing::warn!(badge_id, "attempted to award unknown badge");
            self.inner.observer.emit(GamificationEvent::Error {
                message: ValidationError::UnknownBadge(badge_id.to_string()).to_string(),
            });
            return;
        };

        tracing::info!(badge_id, "badge awarded");
        self.inner.observer.emit(GamificationEvent::BadgeEarned {
            badge_id: badge.id.to_string(),
            name: badge.name.to_string(),
        });
        self.inner.notifier.present(NotificationEvent {
            title: "🏆 Badge earned!".to_string(),
            body: format!("{} - {}", badge.name, badge.description),
            correlation_id: format!("badge_{}", badge.id),
            severity: Severity::High,
            sticky: false,
            service_id: None,
        });
    }

    /// Records gained experience against a known prior total and surfaces a
    /// level-up when the 1000-XP boundary is crossed.
    pub fn add_experience(&self, prior_total: u32, amount: u32, reason: &str) {
        self.inner.observer.emit(GamificationEvent::ExperienceGained {
            amount,
            reason: reason.to_string(),
        });

        let new_total = prior_total.saturating_add(amount);
        let new_level = Self::level_for(new_total);
        if new_level > Self::level_for(prior_total) {
            tracing::info!(level = new_level, "level up");
            self.inner.observer.emit(GamificationEvent::LevelUp {
                level: new_level,
                experience: new_total,
            });
            self.inner.notifier.present(NotificationEvent {
                title: "🎉 Level up!".to_string(),
                body: format!("You reached level {new_level}!"),
                correlation_id: "level_up".to_string(),
                severity: Severity::High,
                sticky: false,
                service_id: None,
            });
        }
    }
}
