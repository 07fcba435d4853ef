//! Schema setup and teardown from the SQL files shipped with this crate

use sqlx::PgPool;
use std::fs;
use std::path::Path;

/// Run every file in `migrations/` in ascending name order
pub async fn init_database(pool: &PgPool) -> Result<(), sqlx::Error> {
    let migrations_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("migrations");
    execute_sql_files_in_order(pool, &migrations_dir, true).await
}

/// Run every file in `cleanup/` in descending name order
pub async fn cleanup_database(pool: &PgPool) -> Result<(), sqlx::Error> {
    let cleanup_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("cleanup");
    execute_sql_files_in_order(pool, &cleanup_dir, false).await
}

async fn execute_sql_files_in_order(
    pool: &PgPool,
    dir: &Path,
    ascending: bool,
) -> Result<(), sqlx::Error> {
    let mut entries: Vec<_> = fs::read_dir(dir)
        .map_err(sqlx::Error::Io)?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().extension().and_then(|s| s.to_str()) == Some("sql"))
        .collect();

    entries.sort_by(|a, b| {
        let ordering = a.file_name().cmp(&b.file_name());
        if ascending {
            ordering
        } else {
            ordering.reverse()
        }
    });

    for entry in entries {
        let path = entry.path();
        tracing::debug!(file = %path.display(), "executing sql file");
        let sql = fs::read_to_string(&path).map_err(sqlx::Error::Io)?;
        sqlx::raw_sql(&sql).execute(pool).await?;
    }

    Ok(())
}
