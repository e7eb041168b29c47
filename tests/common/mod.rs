use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::TempDir;
use warehouse_api::db::{ConnectionOptions, DbPool, establish_connection_pool};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

/// A migrated SQLite database living in a temporary directory.
pub struct TestDb {
    pool: DbPool,
    _dir: TempDir,
}

impl TestDb {
    pub fn new(filename: &str) -> Self {
        let test_db = Self::unmigrated(filename);
        {
            let mut conn = test_db.pool.get().expect("get connection");
            (&mut *conn)
                .run_pending_migrations(MIGRATIONS)
                .expect("run migrations");
        }
        test_db
    }

    /// A database without any tables, for exercising storage failures.
    pub fn unmigrated(filename: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(filename);
        let url = path.to_str().expect("utf-8 temp path").to_string();

        let pool = establish_connection_pool(&url, ConnectionOptions::default())
            .expect("build connection pool");

        Self { pool, _dir: dir }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}
