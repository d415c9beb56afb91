//! Persisted record types.
//!
//! Field names serialize in camelCase; that is the schema of the JSON
//! written to the store.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Difficulty label of an activity.
///
/// Serialized as the Portuguese labels because they are part of the
/// persisted data contract and drive the points mapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Difficulty {
    #[default]
    Facil,
    Medio,
    Dificil,
}

impl Difficulty {
    /// The exact persisted label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Facil => "Fácil",
            Self::Medio => "Médio",
            Self::Dificil => "Difícil",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Difficulty {
    type Err = DifficultyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Fácil" => Ok(Self::Facil),
            "Médio" => Ok(Self::Medio),
            "Difícil" => Ok(Self::Dificil),
            other => Err(DifficultyParseError(other.to_owned())),
        }
    }
}

/// Error returned when parsing an invalid [`Difficulty`] label.
#[derive(Debug, Clone)]
pub struct DifficultyParseError(pub String);

impl fmt::Display for DifficultyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid difficulty: {:?} (expected Fácil, Médio, or Difícil)",
            self.0
        )
    }
}

impl std::error::Error for DifficultyParseError {}

impl Serialize for Difficulty {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

// Lenient on decode: the label often originates in free-text model output,
// so an unrecognized value degrades to Fácil instead of failing the whole
// plan extraction.
impl<'de> Deserialize<'de> for Difficulty {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(s.parse().unwrap_or_default())
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// One unit of work within a study plan.
///
/// Most fields default on decode because generated plans are best-effort
/// JSON: only the title is required for an activity to be usable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// 1-based position within the plan (assigned by normalization).
    #[serde(default)]
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Study method label (open set, display/categorization only).
    #[serde(default)]
    pub technique: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub exercises: String,
    #[serde(default)]
    pub completed: bool,
}

/// An ordered plan of activities, owned by its route.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StudyPlan {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub activities: Vec<Activity>,
}

/// A generated, trackable study route.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StudyRoute {
    /// Millisecond-epoch timestamp at creation, as a string.
    pub id: String,
    pub title: String,
    pub subject: String,
    pub daily_time: String,
    pub dedication: String,
    /// Total activity count (denormalized from the embedded plan).
    pub activities: u32,
    pub completed_activities: u32,
    pub created_at: DateTime<Utc>,
    pub study_plan: StudyPlan,
}

/// The single local user and their accumulated points.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub points: u32,
}

/// Persisted note value for one (route, activity) pair.
///
/// The write timestamp is persisted so that the notes listing can order by
/// real time instead of a display string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NoteRecord {
    pub content: String,
    pub saved_at: DateTime<Utc>,
}

/// Read-side projection of a note, with parent titles resolved.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SavedNote {
    pub route_id: String,
    pub activity_id: u32,
    pub route_title: String,
    pub activity_title: String,
    pub content: String,
    pub saved_at: DateTime<Utc>,
}

/// The active study session, if any. At most one exists at a time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StudySession {
    pub route_id: String,
    pub activity_id: u32,
    pub started_at: DateTime<Utc>,
}
