use std::path::PathBuf;

use rusqlite::Connection;

/// Handle to the SQLite database file. Each operation opens its own
/// short-lived connection, so the handle itself is freely cloneable
/// across actix workers.
#[derive(Clone)]
pub struct Database {
    path: PathBuf,
}

impl Database {
    /// Open (or create) the database at `path` and ensure the schema exists.
    ///
    /// Tables are created with `IF NOT EXISTS`, so a pre-existing database
    /// keeps its current shape. Legacy files whose `itineraries` table has
    /// no `updated_at` column stay that way; writers probe for the column
    /// before touching it.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, rusqlite::Error> {
        let db = Self { path: path.into() };
        db.init_schema()?;
        Ok(db)
    }

    pub fn connect(&self) -> Result<Connection, rusqlite::Error> {
        let conn = Connection::open(&self.path)?;
        // Writers wait up to 5s for a competing transaction instead of
        // failing immediately with SQLITE_BUSY.
        conn.execute_batch("PRAGMA foreign_keys = ON; PRAGMA busy_timeout = 5000;")?;
        Ok(conn)
    }

    fn init_schema(&self) -> Result<(), rusqlite::Error> {
        let conn = self.connect()?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS itineraries (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id TEXT,
                destination TEXT,
                start_date TEXT,
                end_date TEXT,
                preferences TEXT,
                itinerary TEXT,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
                updated_at DATETIME DEFAULT CURRENT_TIMESTAMP
            );

            CREATE TABLE IF NOT EXISTS chat_messages (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                itinerary_id INTEGER,
                role TEXT NOT NULL,
                content TEXT NOT NULL,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
                FOREIGN KEY (itinerary_id) REFERENCES itineraries(id) ON DELETE CASCADE
            );

            CREATE INDEX IF NOT EXISTS idx_chat_itinerary
            ON chat_messages(itinerary_id);",
        )?;
        Ok(())
    }
}

/// Check whether `table` carries `column`. Some deployed databases predate
/// the `updated_at` column, so UPDATE statements branch on this.
pub fn table_has_column(
    conn: &Connection,
    table: &str,
    column: &str,
) -> Result<bool, rusqlite::Error> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({})", table))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let name: String = row.get(1)?;
        if name == column {
            return Ok(true);
        }
    }
    Ok(false)
}
