//! Entry point: parse CLI, set up logging and dispatch to command handlers.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use volley_tracker::{
    cli::{Commands, VolleyCli},
    commands::{
        handle_init, open_database,
        record::{handle_add_attack, handle_add_defense, handle_add_player, handle_add_team},
        report::{handle_attacks, handle_defenses, handle_players, handle_query, handle_teams},
        resolve_database_path,
    },
};

fn main() -> anyhow::Result<()> {
    let app = VolleyCli::parse();

    let filter = if app.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let path = resolve_database_path(app.database)?;
    tracing::debug!("Using match database {}", path.display());
    let mut db = open_database(&path)?;

    match app.command {
        Commands::Init => handle_init(&db)?,
        Commands::AddTeam { name } => {
            handle_add_team(&mut db, &name)?;
        }
        Commands::AddPlayer {
            name,
            number,
            position,
            team,
        } => {
            handle_add_player(&mut db, &name, number, position, &team)?;
        }
        Commands::AddAttack {
            line,
            attack_type,
            result,
            player,
        } => {
            handle_add_attack(&mut db, line, &attack_type, &result, &player)?;
        }
        Commands::AddDefense {
            location,
            quality,
            defense_type,
            player,
        } => {
            handle_add_defense(&mut db, location, quality, &defense_type, &player)?;
        }
        Commands::Query { statement, json } => handle_query(&db, &statement, json)?,
        Commands::Teams { json } => handle_teams(&db, json)?,
        Commands::Players { json } => handle_players(&db, json)?,
        Commands::Attacks { player, json } => handle_attacks(&db, player.as_deref(), json)?,
        Commands::Defenses { player, json } => handle_defenses(&db, player.as_deref(), json)?,
    }

    db.close()?;
    Ok(())
}
