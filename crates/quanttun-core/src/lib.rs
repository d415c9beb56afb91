//! Core logic for quanttun: plan generation, completion scoring, notes, and
//! study sessions.

pub mod generator;
pub mod notes;
pub mod progress;
pub mod scoring;
pub mod session;
