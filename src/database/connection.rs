use log::{debug, error};
use rusqlite::Connection;
use rusqlite::Result;

// Embed migrations from the migrations directory
refinery::embed_migrations!("migrations");

/// Initializes the database connection and runs migrations
pub fn init_connection(db_path: &str) -> Result<Connection> {
    let mut conn = Connection::open(db_path)?;
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;

    match migrations::runner().run(&mut conn) {
        Ok(report) => {
            debug!(
                "Applied {} migration(s) to {}",
                report.applied_migrations().len(),
                db_path
            );
        }
        Err(e) => {
            error!("Migration error: {}", e);
            return Err(rusqlite::Error::SqliteFailure(
                rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_ERROR),
                Some(format!("migration failed: {}", e)),
            ));
        }
    }

    Ok(conn)
}
