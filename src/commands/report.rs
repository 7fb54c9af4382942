//! Read-back commands: raw queries and typed listings

use crate::{
    storage::{Attack, Defense, MatchDatabase, Player, QueryRow, Team},
    Result,
};
use rusqlite::types::Value;
use serde::Serialize;

/// Handle the query command
pub fn handle_query(db: &MatchDatabase, statement: &str, as_json: bool) -> Result<()> {
    let rows = db.query(statement)?;
    if as_json {
        println!("{}", serde_json::to_string_pretty(&rows_to_json(&rows))?);
    } else if rows.is_empty() {
        println!("No rows.");
    } else {
        for row in &rows {
            println!("{}", format_row(row));
        }
    }
    Ok(())
}

/// Handle the teams command
pub fn handle_teams(db: &MatchDatabase, as_json: bool) -> Result<()> {
    print_listing(&db.teams()?, as_json, format_team)
}

/// Handle the players command
pub fn handle_players(db: &MatchDatabase, as_json: bool) -> Result<()> {
    print_listing(&db.players()?, as_json, format_player)
}

/// Handle the attacks command
pub fn handle_attacks(db: &MatchDatabase, player: Option<&str>, as_json: bool) -> Result<()> {
    print_listing(&db.attacks(player)?, as_json, format_attack)
}

/// Handle the defenses command
pub fn handle_defenses(db: &MatchDatabase, player: Option<&str>, as_json: bool) -> Result<()> {
    print_listing(&db.defenses(player)?, as_json, format_defense)
}

fn print_listing<T: Serialize>(items: &[T], as_json: bool, format: fn(&T) -> String) -> Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(items)?);
        return Ok(());
    }
    if items.is_empty() {
        println!("Nothing recorded yet.");
    }
    for item in items {
        println!("{}", format(item));
    }
    Ok(())
}

/// Render a raw row as a parenthesised tuple, e.g. `(1, 'Clarkson')`.
pub fn format_row(row: &QueryRow) -> String {
    let cells: Vec<String> = row
        .iter()
        .map(|value| match value {
            Value::Null => "NULL".to_string(),
            Value::Integer(i) => i.to_string(),
            Value::Real(f) => format!("{:?}", f),
            Value::Text(s) => format!("'{}'", s),
            Value::Blob(b) => format!("<{} bytes>", b.len()),
        })
        .collect();
    format!("({})", cells.join(", "))
}

/// Convert raw rows to a JSON array of arrays.
pub fn rows_to_json(rows: &[QueryRow]) -> serde_json::Value {
    rows.iter()
        .map(|row| row.iter().map(value_to_json).collect::<serde_json::Value>())
        .collect()
}

fn value_to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Integer(i) => (*i).into(),
        Value::Real(f) => serde_json::Number::from_f64(*f)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Value::Text(s) => s.clone().into(),
        Value::Blob(b) => b.clone().into(),
    }
}

pub fn format_team(team: &Team) -> String {
    format!("{:>3}  {}", team.team_id, team.team_name)
}

pub fn format_player(player: &Player) -> String {
    let number = player
        .number
        .map(|n| format!("#{}", n))
        .unwrap_or_else(|| "#?".to_string());
    format!(
        "{:>3}  {:<4} {} ({}) - {}",
        player.player_id,
        number,
        player.name,
        player.position.as_deref().unwrap_or("unknown"),
        player.team_name
    )
}

pub fn format_attack(attack: &Attack) -> String {
    format!(
        "{:>3}  {}: {} -> {}, ({}, {}) to ({}, {}), length {:.2}",
        attack.attack_id,
        attack.player_name,
        attack.attack_type,
        attack.result,
        attack.line.start.x,
        attack.line.start.y,
        attack.line.end.x,
        attack.line.end.y,
        attack.line.length()
    )
}

pub fn format_defense(defense: &Defense) -> String {
    format!(
        "{:>3}  {}: {} at ({}, {}), quality {}",
        defense.defense_id,
        defense.player_name,
        defense.defense_type,
        defense.location.x,
        defense.location.y,
        defense.quality
    )
}
