//! Query functions for the stored user record.

use anyhow::{Context, Result};

use crate::models::User;
use crate::storage::Storage;

/// Key holding the user record.
pub const USER_KEY: &str = "quanttun_user";

/// Fetch the user record, if a user is logged in.
pub fn get_user(storage: &dyn Storage) -> Result<Option<User>> {
    match storage.get(USER_KEY).context("failed to read user record")? {
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .context("user record is not valid JSON"),
        None => Ok(None),
    }
}

/// Write the user record.
pub fn save_user(storage: &dyn Storage, user: &User) -> Result<()> {
    let raw = serde_json::to_string(user).context("failed to serialize user record")?;
    storage
        .set(USER_KEY, &raw)
        .context("failed to write user record")
}

/// Remove the user record (logout).
pub fn clear_user(storage: &dyn Storage) -> Result<()> {
    storage
        .remove(USER_KEY)
        .context("failed to remove user record")
}

/// Add points to the user's accumulator. Points only increase.
///
/// Returns the updated user, or `None` when no user is logged in (the award
/// is silently dropped).
pub fn add_points(storage: &dyn Storage, points: u32) -> Result<Option<User>> {
    let Some(mut user) = get_user(storage)? else {
        return Ok(None);
    };
    user.points += points;
    save_user(storage, &user)?;
    Ok(Some(user))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn user() -> User {
        User {
            id: "1".to_string(),
            name: "Estudante".to_string(),
            email: "estudante@example.com".to_string(),
            points: 0,
        }
    }

    #[test]
    fn save_and_get_roundtrip() {
        let storage = MemoryStorage::new();
        save_user(&storage, &user()).unwrap();
        let loaded = get_user(&storage).unwrap().unwrap();
        assert_eq!(loaded, user());
    }

    #[test]
    fn no_user_by_default() {
        let storage = MemoryStorage::new();
        assert!(get_user(&storage).unwrap().is_none());
    }

    #[test]
    fn add_points_accumulates() {
        let storage = MemoryStorage::new();
        save_user(&storage, &user()).unwrap();
        add_points(&storage, 10).unwrap();
        let updated = add_points(&storage, 15).unwrap().unwrap();
        assert_eq!(updated.points, 25);
    }

    #[test]
    fn add_points_without_user_is_dropped() {
        let storage = MemoryStorage::new();
        assert!(add_points(&storage, 10).unwrap().is_none());
        assert!(get_user(&storage).unwrap().is_none());
    }

    #[test]
    fn clear_removes_user() {
        let storage = MemoryStorage::new();
        save_user(&storage, &user()).unwrap();
        clear_user(&storage).unwrap();
        assert!(get_user(&storage).unwrap().is_none());
    }
}
