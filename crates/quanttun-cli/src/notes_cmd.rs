//! `quanttun notes` commands: save, list, delete.

use std::io::Read;

use anyhow::{Context, Result, bail};

use quanttun_core::notes::{delete_note, filter_notes, load_notes, save_note};
use quanttun_store::storage::Storage;

/// Save (overwrite) the note for an activity. Content comes either from the
/// argument or, with `--stdin`, from standard input.
pub fn run_save(
    storage: &dyn Storage,
    route_id: &str,
    activity_id: u32,
    content: Option<&str>,
    from_stdin: bool,
) -> Result<()> {
    let content = match (content, from_stdin) {
        (Some(text), false) => text.to_string(),
        (None, true) => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read note content from stdin")?;
            text
        }
        (Some(_), true) => bail!("pass the note content as an argument or via --stdin, not both"),
        (None, false) => bail!("missing note content; pass it as an argument or use --stdin"),
    };

    if content.trim().is_empty() {
        bail!("note content is empty");
    }

    save_note(storage, route_id, activity_id, content.trim())?;
    tracing::info!(route_id, activity_id, "note saved");
    println!("Note saved for activity {activity_id} of route {route_id}.");
    Ok(())
}

/// List saved notes, newest first, optionally filtered by a search term.
pub fn run_list(storage: &dyn Storage, search: Option<&str>) -> Result<()> {
    let all_notes = load_notes(storage)?;
    let notes = match search {
        Some(term) => filter_notes(&all_notes, term),
        None => all_notes,
    };

    if notes.is_empty() {
        println!("No notes found.");
        return Ok(());
    }

    for note in &notes {
        println!(
            "{} - {} / {} (route {}, activity {})",
            note.saved_at.format("%Y-%m-%d %H:%M"),
            note.route_title,
            note.activity_title,
            note.route_id,
            note.activity_id,
        );
        println!("  {}", note.content);
        println!();
    }
    println!("{} note(s).", notes.len());

    Ok(())
}

/// Delete the note for an activity.
pub fn run_delete(storage: &dyn Storage, route_id: &str, activity_id: u32) -> Result<()> {
    delete_note(storage, route_id, activity_id)?;
    tracing::info!(route_id, activity_id, "note deleted");
    println!("Note deleted for activity {activity_id} of route {route_id}.");
    Ok(())
}
