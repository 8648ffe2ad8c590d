use chrono::Utc;
use rusqlite::{params, OptionalExtension};
use serde_json::Value;

use crate::db::sqlite::{table_has_column, Database};
use crate::models::chat::ChatMessage;
use crate::models::itinerary::{Itinerary, ItineraryRecord, ItinerarySummary};

type StoreResult<T> = Result<T, Box<dyn std::error::Error>>;

fn timestamp_now() -> String {
    Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Persist a freshly generated itinerary and return its id.
pub fn save_itinerary(
    db: &Database,
    owner: &str,
    destination: &str,
    start_date: &str,
    end_date: &str,
    preferences: &Value,
    itinerary: &Itinerary,
) -> StoreResult<i64> {
    let conn = db.connect()?;
    conn.execute(
        "INSERT INTO itineraries (
            user_id, destination, start_date, end_date,
            preferences, itinerary, created_at
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            owner,
            destination,
            start_date,
            end_date,
            serde_json::to_string(preferences)?,
            serde_json::to_string(itinerary)?,
            timestamp_now(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// All itineraries belonging to `owner`, most recent first.
pub fn get_itineraries_by_user(db: &Database, owner: &str) -> StoreResult<Vec<ItinerarySummary>> {
    let conn = db.connect()?;
    let mut stmt = conn.prepare(
        "SELECT id, destination, start_date, end_date, itinerary, created_at
         FROM itineraries
         WHERE user_id = ?1
         ORDER BY created_at DESC, id DESC",
    )?;

    let rows = stmt.query_map(params![owner], |row| {
        Ok((
            row.get::<_, i64>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
            row.get::<_, String>(3)?,
            row.get::<_, String>(4)?,
            row.get::<_, String>(5)?,
        ))
    })?;

    let mut summaries = Vec::new();
    for row in rows {
        let (id, destination, start_date, end_date, itinerary_json, created_at) = row?;
        summaries.push(ItinerarySummary {
            id,
            destination,
            start_date,
            end_date,
            itinerary: serde_json::from_str(&itinerary_json)?,
            created_at,
        });
    }
    Ok(summaries)
}

/// Fetch one itinerary for its owner. The owner check is folded into the
/// query, so a record someone else owns looks exactly like a missing one.
pub fn get_itinerary_by_id(
    db: &Database,
    id: i64,
    owner: &str,
) -> StoreResult<Option<ItineraryRecord>> {
    let conn = db.connect()?;
    let row = conn
        .query_row(
            "SELECT id, user_id, destination, start_date, end_date,
                    preferences, itinerary, created_at
             FROM itineraries
             WHERE id = ?1 AND user_id = ?2",
            params![id, owner],
            |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                    row.get::<_, String>(4)?,
                    row.get::<_, String>(5)?,
                    row.get::<_, String>(6)?,
                    row.get::<_, String>(7)?,
                ))
            },
        )
        .optional()?;

    match row {
        Some((id, user_id, destination, start_date, end_date, prefs_json, itin_json, created_at)) => {
            Ok(Some(ItineraryRecord {
                id,
                user_id,
                destination,
                start_date,
                end_date,
                preferences: serde_json::from_str(&prefs_json)?,
                itinerary: serde_json::from_str(&itin_json)?,
                created_at,
            }))
        }
        None => Ok(None),
    }
}

/// Overwrite itinerary content and preferences after a chat turn.
///
/// Some deployed databases predate the `updated_at` column, so the UPDATE
/// branches on its presence instead of assuming it.
pub fn update_itinerary_content(
    db: &Database,
    id: i64,
    itinerary: &Itinerary,
    preferences: &Value,
) -> StoreResult<()> {
    let conn = db.connect()?;
    let itinerary_json = serde_json::to_string(itinerary)?;
    let preferences_json = serde_json::to_string(preferences)?;

    if table_has_column(&conn, "itineraries", "updated_at")? {
        conn.execute(
            "UPDATE itineraries
             SET itinerary = ?1, preferences = ?2, updated_at = ?3
             WHERE id = ?4",
            params![itinerary_json, preferences_json, timestamp_now(), id],
        )?;
    } else {
        conn.execute(
            "UPDATE itineraries SET itinerary = ?1, preferences = ?2 WHERE id = ?3",
            params![itinerary_json, preferences_json, id],
        )?;
    }
    Ok(())
}

/// Delete an itinerary and its chat transcript in one transaction.
///
/// Returns whether a row was actually removed. Store-level failures are
/// logged and reported as `false`; the transaction rolls back on drop.
pub fn delete_itinerary(db: &Database, id: i64, owner: &str) -> bool {
    let mut conn = match db.connect() {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("Failed to open database for delete: {:?}", err);
            return false;
        }
    };

    let result = (|| -> Result<bool, rusqlite::Error> {
        let tx = conn.transaction()?;
        tx.execute(
            "DELETE FROM chat_messages WHERE itinerary_id = ?1",
            params![id],
        )?;
        let removed = tx.execute(
            "DELETE FROM itineraries WHERE id = ?1 AND user_id = ?2",
            params![id, owner],
        )?;
        if removed == 0 {
            // Nothing to delete (missing or not ours); leave chat rows alone.
            return Ok(false);
        }
        tx.commit()?;
        Ok(true)
    })();

    match result {
        Ok(removed) => removed,
        Err(err) => {
            eprintln!("Failed to delete itinerary {}: {:?}", id, err);
            false
        }
    }
}

/// Append one chat message and return its id.
pub fn append_chat_message(
    db: &Database,
    itinerary_id: i64,
    role: &str,
    content: &str,
) -> StoreResult<i64> {
    let conn = db.connect()?;
    conn.execute(
        "INSERT INTO chat_messages (itinerary_id, role, content) VALUES (?1, ?2, ?3)",
        params![itinerary_id, role, content],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Full transcript for an itinerary, oldest first. Ties on `created_at`
/// (second resolution) break by id so same-second turns replay in order.
pub fn get_chat_history(db: &Database, itinerary_id: i64) -> StoreResult<Vec<ChatMessage>> {
    let conn = db.connect()?;
    let mut stmt = conn.prepare(
        "SELECT id, itinerary_id, role, content, created_at
         FROM chat_messages
         WHERE itinerary_id = ?1
         ORDER BY created_at ASC, id ASC",
    )?;

    let rows = stmt.query_map(params![itinerary_id], |row| {
        Ok(ChatMessage {
            id: row.get(0)?,
            itinerary_id: row.get(1)?,
            role: row.get(2)?,
            content: row.get(3)?,
            created_at: row.get(4)?,
        })
    })?;

    let mut messages = Vec::new();
    for row in rows {
        messages.push(row?);
    }
    Ok(messages)
}
