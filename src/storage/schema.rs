//! Database schema and connection management

use crate::error::{Result, VolleyError};
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const IN_MEMORY: &str = ":memory:";

/// One table of a schema: its name, its idempotent `CREATE TABLE IF NOT
/// EXISTS` statement, and the tables its foreign keys point at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableDefinition {
    pub name: String,
    pub create_sql: String,
    pub depends_on: Vec<String>,
}

impl TableDefinition {
    pub fn new(name: impl Into<String>, create_sql: impl Into<String>, depends_on: &[&str]) -> Self {
        Self {
            name: name.into(),
            create_sql: create_sql.into(),
            depends_on: depends_on.iter().map(|d| d.to_string()).collect(),
        }
    }
}

/// An ordered list of tables, provisioned front to back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    tables: Vec<TableDefinition>,
}

impl Schema {
    /// Build a schema, checking that every table comes after the tables it
    /// references.
    pub fn new(tables: Vec<TableDefinition>) -> Result<Self> {
        for (index, table) in tables.iter().enumerate() {
            for dependency in &table.depends_on {
                let defined_earlier = tables[..index].iter().any(|t| &t.name == dependency);
                if !defined_earlier && dependency != &table.name {
                    return Err(VolleyError::Schema {
                        table: table.name.clone(),
                        dependency: dependency.clone(),
                    });
                }
            }
        }
        Ok(Self { tables })
    }

    /// Team, player, attack and defense tables.
    ///
    /// Players reference their team by `team_name`, and attacks and defenses
    /// reference their player by `name`. Coordinates live in packed text
    /// columns (`attack.line`, `defense.location`).
    ///
    /// The foreign keys are declarative only. `team_name` is not UNIQUE, so
    /// with `PRAGMA foreign_keys = ON` every player insert fails with
    /// "foreign key mismatch".
    pub fn volleyball() -> Self {
        Self {
            tables: vec![
                TableDefinition::new(
                    "team",
                    "CREATE TABLE IF NOT EXISTS team (
                        team_id INTEGER PRIMARY KEY AUTOINCREMENT,
                        team_name TEXT NOT NULL
                    )",
                    &[],
                ),
                TableDefinition::new(
                    "player",
                    "CREATE TABLE IF NOT EXISTS player (
                        player_id INTEGER PRIMARY KEY AUTOINCREMENT,
                        name TEXT NOT NULL,
                        number INTEGER,
                        position TEXT,
                        team_name TEXT NOT NULL,
                        FOREIGN KEY (team_name) REFERENCES team(team_name)
                    )",
                    &["team"],
                ),
                TableDefinition::new(
                    "attack",
                    "CREATE TABLE IF NOT EXISTS attack (
                        attack_id INTEGER PRIMARY KEY AUTOINCREMENT,
                        line TEXT NOT NULL,
                        type TEXT NOT NULL,
                        result TEXT NOT NULL,
                        player_name TEXT NOT NULL,
                        FOREIGN KEY (player_name) REFERENCES player(name)
                    )",
                    &["player"],
                ),
                TableDefinition::new(
                    "defense",
                    "CREATE TABLE IF NOT EXISTS defense (
                        defense_id INTEGER PRIMARY KEY AUTOINCREMENT,
                        quality INTEGER NOT NULL,
                        type TEXT NOT NULL,
                        location TEXT NOT NULL,
                        player_name TEXT NOT NULL,
                        FOREIGN KEY (player_name) REFERENCES player(name)
                    )",
                    &["player"],
                ),
            ],
        }
    }

    pub fn tables(&self) -> &[TableDefinition] {
        &self.tables
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::volleyball()
    }
}

/// Single-connection handle on a match database file.
///
/// The handle is either open or closed. Every operation other than
/// [`MatchDatabase::close`] fails with [`VolleyError::Closed`] once the
/// handle has been closed. Dropping an open handle releases the connection.
#[derive(Debug)]
pub struct MatchDatabase {
    conn: Option<Connection>,
    path: PathBuf,
}

impl MatchDatabase {
    /// Open (creating if absent) the database file at `path`.
    ///
    /// The schema is not touched; see [`MatchDatabase::new`] for the usual
    /// open-and-provision session start.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let conn = Connection::open(&path).map_err(|source| VolleyError::Connection {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), "Opened match database");
        Ok(Self {
            conn: Some(conn),
            path,
        })
    }

    /// Open a private in-memory database.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|source| VolleyError::Connection {
            path: PathBuf::from(IN_MEMORY),
            source,
        })?;
        Ok(Self {
            conn: Some(conn),
            path: PathBuf::from(IN_MEMORY),
        })
    }

    /// Open the database at `path` and provision the volleyball schema.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let mut db = Self::open(path)?;
        db.provision_schema(&Schema::volleyball())?;
        Ok(db)
    }

    /// In-memory database with the volleyball schema already provisioned.
    pub fn new_in_memory() -> Result<Self> {
        let mut db = Self::open_in_memory()?;
        db.provision_schema(&Schema::volleyball())?;
        Ok(db)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_open(&self) -> bool {
        self.conn.is_some()
    }

    /// Release the connection. Closing an already closed handle is a no-op.
    pub fn close(&mut self) -> Result<()> {
        let Some(conn) = self.conn.take() else {
            return Ok(());
        };
        if let Err((conn, source)) = conn.close() {
            self.conn = Some(conn);
            return Err(VolleyError::Connection {
                path: self.path.clone(),
                source,
            });
        }
        info!(path = %self.path.display(), "Closed match database");
        Ok(())
    }

    pub(crate) fn connection(&self, operation: &'static str) -> Result<&Connection> {
        self.conn.as_ref().ok_or(VolleyError::Closed { operation })
    }

    /// Create every table of `schema` that does not exist yet, in order.
    ///
    /// Runs in one transaction, so a failing statement leaves no partial
    /// schema behind.
    pub fn provision_schema(&mut self, schema: &Schema) -> Result<()> {
        let conn = self.conn.as_mut().ok_or(VolleyError::Closed {
            operation: "provision_schema",
        })?;

        let tx = conn
            .transaction()
            .map_err(VolleyError::storage("provision_schema", "transaction"))?;
        for table in schema.tables() {
            tx.execute_batch(&table.create_sql)
                .map_err(VolleyError::storage("provision_schema", table.name.as_str()))?;
            debug!(table = %table.name, "Provisioned table");
        }
        tx.commit().map_err(VolleyError::storage("provision_schema", "commit"))?;

        info!(tables = schema.tables().len(), "Schema provisioned");
        Ok(())
    }

    /// Provision a single table.
    pub fn create_table(&self, table: &TableDefinition) -> Result<()> {
        self.connection("create_table")?
            .execute_batch(&table.create_sql)
            .map_err(VolleyError::storage("create_table", table.name.as_str()))
    }

    /// Names of the user tables present in the database, sorted.
    pub fn table_names(&self) -> Result<Vec<String>> {
        let conn = self.connection("table_names")?;
        let read = || -> rusqlite::Result<Vec<String>> {
            let mut stmt = conn.prepare(
                "SELECT name FROM sqlite_master
                 WHERE type = 'table' AND name NOT LIKE 'sqlite_%'
                 ORDER BY name",
            )?;
            let rows = stmt.query_map([], |row| row.get(0))?;
            rows.collect()
        };
        read().map_err(VolleyError::storage("table_names", "sqlite_master"))
    }
}
