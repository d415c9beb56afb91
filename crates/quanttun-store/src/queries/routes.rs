//! Query functions for the stored route collection.
//!
//! Routes are one JSON array under a single key, rewritten wholesale on every
//! mutation. There is no delete path for routes.

use anyhow::{Context, Result, bail};

use crate::models::StudyRoute;
use crate::storage::Storage;

/// Key holding the full route collection.
pub const ROUTES_KEY: &str = "study_routes";

/// Load the full route collection. A missing key is an empty collection.
pub fn list_routes(storage: &dyn Storage) -> Result<Vec<StudyRoute>> {
    match storage
        .get(ROUTES_KEY)
        .context("failed to read route collection")?
    {
        Some(raw) => serde_json::from_str(&raw).context("route collection is not valid JSON"),
        None => Ok(Vec::new()),
    }
}

/// Fetch a route by its ID.
pub fn get_route(storage: &dyn Storage, id: &str) -> Result<Option<StudyRoute>> {
    Ok(list_routes(storage)?.into_iter().find(|r| r.id == id))
}

/// Append a new route to the collection.
pub fn append_route(storage: &dyn Storage, route: &StudyRoute) -> Result<()> {
    let mut routes = list_routes(storage)?;
    routes.push(route.clone());
    save_routes(storage, &routes)
}

/// Replace a route in place, matched by ID.
pub fn update_route(storage: &dyn Storage, route: &StudyRoute) -> Result<()> {
    let mut routes = list_routes(storage)?;
    match routes.iter_mut().find(|r| r.id == route.id) {
        Some(slot) => *slot = route.clone(),
        None => bail!("route {:?} not found", route.id),
    }
    save_routes(storage, &routes)
}

/// Serialize and write the full collection back.
pub fn save_routes(storage: &dyn Storage, routes: &[StudyRoute]) -> Result<()> {
    let raw = serde_json::to_string(routes).context("failed to serialize route collection")?;
    storage
        .set(ROUTES_KEY, &raw)
        .context("failed to write route collection")
}
