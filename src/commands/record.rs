//! Commands that add teams, players and match events

use crate::{
    cli::types::position::Position,
    codec::{Line, Point},
    storage::MatchDatabase,
    Result,
};

/// Handle the add-team command
pub fn handle_add_team(db: &mut MatchDatabase, name: &str) -> Result<i64> {
    let team_id = db.insert_team(name)?;
    println!("✓ Added team {} (id {})", name, team_id);
    Ok(team_id)
}

/// Handle the add-player command
pub fn handle_add_player(
    db: &mut MatchDatabase,
    name: &str,
    number: u32,
    position: Position,
    team: &str,
) -> Result<i64> {
    let player_id = db.insert_player(name, number, &position.to_string(), team)?;
    println!(
        "✓ Added #{} {} ({}) to {} (id {})",
        number, name, position, team, player_id
    );
    Ok(player_id)
}

/// Handle the add-attack command
pub fn handle_add_attack(
    db: &mut MatchDatabase,
    line: Line,
    attack_type: &str,
    result: &str,
    player: &str,
) -> Result<i64> {
    let attack_id = db.insert_attack(line, attack_type, result, player)?;
    println!(
        "✓ Recorded {} by {} along {} -> {} (id {})",
        attack_type, player, line, result, attack_id
    );
    Ok(attack_id)
}

/// Handle the add-defense command
pub fn handle_add_defense(
    db: &mut MatchDatabase,
    location: Point,
    quality: i64,
    defense_type: &str,
    player: &str,
) -> Result<i64> {
    let defense_id = db.insert_defense(location, quality, defense_type, player)?;
    println!(
        "✓ Recorded {} by {} at {} with quality {} (id {})",
        defense_type, player, location, quality, defense_id
    );
    Ok(defense_id)
}
