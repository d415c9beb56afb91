//! Gamification point values.

use chrono::TimeDelta;

use quanttun_store::models::Difficulty;

/// Minimum session length, in minutes, for the long-session bonus.
pub const SESSION_BONUS_MINUTES: i64 = 25;

/// Flat bonus awarded for a qualifying session.
pub const SESSION_BONUS_POINTS: u32 = 5;

/// Base points for completing an activity of the given difficulty.
pub const fn points_for(difficulty: Difficulty) -> u32 {
    match difficulty {
        Difficulty::Facil => 5,
        Difficulty::Medio => 10,
        Difficulty::Dificil => 15,
    }
}

/// Bonus points for a study session of the given elapsed length.
pub fn session_bonus(elapsed: TimeDelta) -> u32 {
    if elapsed >= TimeDelta::minutes(SESSION_BONUS_MINUTES) {
        SESSION_BONUS_POINTS
    } else {
        0
    }
}

/// Total award for a completion: difficulty base plus session bonus, when a
/// session was recorded.
pub fn award(difficulty: Difficulty, elapsed: Option<TimeDelta>) -> u32 {
    points_for(difficulty) + elapsed.map_or(0, session_bonus)
}
