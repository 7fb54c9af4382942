//! Inserts and read-back for teams, players, attacks and defenses

use super::{models::*, schema::MatchDatabase};
use crate::codec::{Line, Point};
use crate::error::{Result, VolleyError};
use rusqlite::{params, types::Value, Batch, Connection};
use tracing::{debug, warn};

/// Raw attack columns before the line is unpacked
type AttackRow = (i64, String, String, String, String);

/// Raw defense columns before the location is unpacked
type DefenseRow = (i64, i64, String, String, String);

impl MatchDatabase {
    /// Insert a team and return its generated `team_id`.
    ///
    /// Team names are not unique; inserting the same name twice creates two
    /// rows.
    pub fn insert_team(&mut self, team_name: &str) -> Result<i64> {
        let conn = self.connection("insert_team")?;
        conn.execute("INSERT INTO team (team_name) VALUES (?1)", params![team_name])
            .map_err(VolleyError::storage("insert_team", team_name))?;
        let team_id = conn.last_insert_rowid();
        debug!(team_id, team_name, "Inserted team");
        Ok(team_id)
    }

    /// Insert a player on `team_name` and return its generated `player_id`.
    ///
    /// The team is not looked up first; a dangling name is only rejected if
    /// the engine enforces foreign keys.
    pub fn insert_player(
        &mut self,
        name: &str,
        number: u32,
        position: &str,
        team_name: &str,
    ) -> Result<i64> {
        let conn = self.connection("insert_player")?;
        conn.execute(
            "INSERT INTO player (name, number, position, team_name) VALUES (?1, ?2, ?3, ?4)",
            params![name, number, position, team_name],
        )
        .map_err(VolleyError::storage(
            "insert_player",
            format!("{name} (#{number}, {team_name})"),
        ))?;
        let player_id = conn.last_insert_rowid();
        debug!(player_id, name, team_name, "Inserted player");
        Ok(player_id)
    }

    /// Insert an attack, packing its line, and return its `attack_id`.
    pub fn insert_attack(
        &mut self,
        line: impl Into<Line>,
        attack_type: &str,
        result: &str,
        player_name: &str,
    ) -> Result<i64> {
        let packed = line.into().pack();
        let conn = self.connection("insert_attack")?;
        conn.execute(
            "INSERT INTO attack (line, type, result, player_name) VALUES (?1, ?2, ?3, ?4)",
            params![packed, attack_type, result, player_name],
        )
        .map_err(VolleyError::storage(
            "insert_attack",
            format!("{attack_type} by {player_name} along {packed}"),
        ))?;
        let attack_id = conn.last_insert_rowid();
        debug!(attack_id, player_name, line = %packed, "Inserted attack");
        Ok(attack_id)
    }

    /// Insert a defensive action, packing its location, and return its
    /// `defense_id`.
    pub fn insert_defense(
        &mut self,
        location: impl Into<Point>,
        quality: i64,
        defense_type: &str,
        player_name: &str,
    ) -> Result<i64> {
        let packed = location.into().pack();
        let conn = self.connection("insert_defense")?;
        conn.execute(
            "INSERT INTO defense (quality, type, location, player_name) VALUES (?1, ?2, ?3, ?4)",
            params![quality, defense_type, packed, player_name],
        )
        .map_err(VolleyError::storage(
            "insert_defense",
            format!("{defense_type} by {player_name} at {packed}"),
        ))?;
        let defense_id = conn.last_insert_rowid();
        debug!(defense_id, player_name, location = %packed, "Inserted defense");
        Ok(defense_id)
    }

    /// Run a read-only statement and return every row.
    ///
    /// Engine failures (bad SQL, missing tables, statements that would
    /// write, more than one statement) are logged and reported as an empty result. Use
    /// [`MatchDatabase::try_query`] to tell "no rows" apart from "failed".
    pub fn query(&self, statement: &str) -> Result<Vec<QueryRow>> {
        let conn = self.connection("query")?;
        match read_rows(conn, statement) {
            Ok(rows) => Ok(rows),
            Err(e) => {
                warn!(statement, error = %e, "Query failed, returning no rows");
                Ok(Vec::new())
            }
        }
    }

    /// Run a read-only statement, propagating engine failures.
    pub fn try_query(&self, statement: &str) -> Result<Vec<QueryRow>> {
        let conn = self.connection("try_query")?;
        read_rows(conn, statement).map_err(VolleyError::storage("try_query", statement))
    }

    /// All teams in insertion order
    pub fn teams(&self) -> Result<Vec<Team>> {
        let conn = self.connection("teams")?;
        let read = || -> rusqlite::Result<Vec<Team>> {
            let mut stmt = conn.prepare("SELECT team_id, team_name FROM team ORDER BY team_id")?;
            let rows = stmt.query_map([], |row| {
                Ok(Team {
                    team_id: row.get(0)?,
                    team_name: row.get(1)?,
                })
            })?;

            let mut teams = Vec::new();
            for row in rows {
                teams.push(row?);
            }
            Ok(teams)
        };
        read().map_err(VolleyError::storage("teams", "team"))
    }

    /// All players in insertion order
    pub fn players(&self) -> Result<Vec<Player>> {
        let conn = self.connection("players")?;
        let read = || -> rusqlite::Result<Vec<Player>> {
            let mut stmt = conn.prepare(
                "SELECT player_id, name, number, position, team_name
                 FROM player
                 ORDER BY player_id",
            )?;
            let rows = stmt.query_map([], |row| {
                Ok(Player {
                    player_id: row.get(0)?,
                    name: row.get(1)?,
                    number: row.get(2)?,
                    position: row.get(3)?,
                    team_name: row.get(4)?,
                })
            })?;

            let mut players = Vec::new();
            for row in rows {
                players.push(row?);
            }
            Ok(players)
        };
        read().map_err(VolleyError::storage("players", "player"))
    }

    /// Attacks with unpacked lines, optionally only those of one player.
    ///
    /// A stored line that does not unpack is reported as
    /// [`VolleyError::Format`].
    pub fn attacks(&self, player_name: Option<&str>) -> Result<Vec<Attack>> {
        let conn = self.connection("attacks")?;
        let read = || -> rusqlite::Result<Vec<AttackRow>> {
            let mut stmt = conn.prepare(
                "SELECT attack_id, line, type, result, player_name
                 FROM attack
                 WHERE ?1 IS NULL OR player_name = ?1
                 ORDER BY attack_id",
            )?;
            let rows = stmt.query_map(params![player_name], |row| {
                Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?, row.get(4)?))
            })?;
            rows.collect()
        };
        let rows = read().map_err(VolleyError::storage(
            "attacks",
            player_name.unwrap_or("all players"),
        ))?;

        rows.into_iter()
            .map(|(attack_id, line, attack_type, result, player_name)| -> Result<Attack> {
                Ok(Attack {
                    attack_id,
                    line: line.parse()?,
                    attack_type,
                    result,
                    player_name,
                })
            })
            .collect()
    }

    /// Defensive actions with unpacked locations, optionally only those of
    /// one player.
    pub fn defenses(&self, player_name: Option<&str>) -> Result<Vec<Defense>> {
        let conn = self.connection("defenses")?;
        let read = || -> rusqlite::Result<Vec<DefenseRow>> {
            let mut stmt = conn.prepare(
                "SELECT defense_id, quality, type, location, player_name
                 FROM defense
                 WHERE ?1 IS NULL OR player_name = ?1
                 ORDER BY defense_id",
            )?;
            let rows = stmt.query_map(params![player_name], |row| {
                Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?, row.get(4)?))
            })?;
            rows.collect()
        };
        let rows = read().map_err(VolleyError::storage(
            "defenses",
            player_name.unwrap_or("all players"),
        ))?;

        rows.into_iter()
            .map(|(defense_id, quality, defense_type, location, player_name)| -> Result<Defense> {
                Ok(Defense {
                    defense_id,
                    quality,
                    defense_type,
                    location: location.parse()?,
                    player_name,
                })
            })
            .collect()
    }
}

/// Execute `statement` and collect every column of every row.
///
/// Exactly one statement is accepted, and it must not modify the database.
fn read_rows(conn: &Connection, statement: &str) -> rusqlite::Result<Vec<QueryRow>> {
    let mut batch = Batch::new(conn, statement);
    let Some(mut stmt) = batch.next()? else {
        return Ok(Vec::new());
    };
    if batch.next()?.is_some() {
        return Err(rusqlite::Error::MultipleStatement);
    }
    if !stmt.readonly() {
        return Err(rusqlite::Error::InvalidQuery);
    }

    let column_count = stmt.column_count();
    let rows = stmt.query_map([], |row| {
        (0..column_count)
            .map(|index| row.get::<_, Value>(index))
            .collect::<rusqlite::Result<QueryRow>>()
    })?;
    rows.collect()
}
