//! `quanttun login`, `quanttun logout`, and `quanttun profile` commands.
//!
//! The user record is a local simulation: login writes it, logout removes
//! it, and points accumulate on it as activities complete.

use anyhow::Result;
use chrono::Utc;

use quanttun_core::session::elapsed_minutes;
use quanttun_store::models::User;
use quanttun_store::queries::{sessions, users};
use quanttun_store::storage::Storage;

/// Write the user record. A repeated login replaces the previous record,
/// resetting accumulated points.
pub fn run_login(storage: &dyn Storage, name: &str, email: &str) -> Result<()> {
    let user = User {
        id: "1".to_string(),
        name: name.to_string(),
        email: email.to_string(),
        points: 0,
    };
    users::save_user(storage, &user)?;

    println!("Logged in as {} <{}>.", user.name, user.email);
    Ok(())
}

/// Remove the user record. Routes and notes are kept.
pub fn run_logout(storage: &dyn Storage) -> Result<()> {
    match users::get_user(storage)? {
        Some(user) => {
            users::clear_user(storage)?;
            println!("Logged out {}.", user.name);
        }
        None => println!("No user is logged in."),
    }
    Ok(())
}

/// Show the logged-in user, accumulated points, and any active session.
pub fn run_profile(storage: &dyn Storage) -> Result<()> {
    match users::get_user(storage)? {
        Some(user) => {
            println!("Name:   {}", user.name);
            println!("Email:  {}", user.email);
            println!("Points: {}", user.points);
        }
        None => println!("No user is logged in. Run `quanttun login <name> <email>` first."),
    }

    if let Some(session) = sessions::get_session(storage)? {
        println!(
            "Studying activity {} of route {} for {} minute(s).",
            session.activity_id,
            session.route_id,
            elapsed_minutes(&session, Utc::now())
        );
    }

    Ok(())
}
