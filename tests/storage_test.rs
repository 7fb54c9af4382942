//! Integration tests for the on-disk match database

use rusqlite::types::Value;
use tempfile::TempDir;
use volley_tracker::{unpack_line, MatchDatabase, Schema, VolleyError};

fn create_test_db(dir: &TempDir) -> MatchDatabase {
    MatchDatabase::new(dir.path().join("matches.db")).unwrap()
}

#[test]
fn test_open_creates_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fresh.db");
    assert!(!path.exists());

    let mut db = MatchDatabase::open(&path).unwrap();
    db.provision_schema(&Schema::volleyball()).unwrap();
    db.close().unwrap();

    assert!(path.exists());
}

#[test]
fn test_open_in_missing_directory_is_connection_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no").join("such").join("dir").join("matches.db");

    match MatchDatabase::open(&path) {
        Err(VolleyError::Connection { path: failed, .. }) => assert_eq!(failed, path),
        Err(other) => panic!("Expected Connection error, got {:?}", other),
        Ok(_) => panic!("Expected Connection error, got an open database"),
    }
}

#[test]
fn test_rows_persist_across_sessions() {
    let dir = TempDir::new().unwrap();

    {
        let mut db = create_test_db(&dir);
        db.insert_team("Clarkson").unwrap();
        db.insert_player("Henry Rausch", 7, "Outside", "Clarkson").unwrap();
        db.insert_attack(((0.0, 0.0), (9.0, 9.0)), "Kill", "Point", "Henry Rausch").unwrap();
        db.close().unwrap();
    }

    // Second session provisions again, which must leave the data alone
    let db = create_test_db(&dir);
    let players = db.query("SELECT * FROM player").unwrap();
    assert_eq!(players.len(), 1);
    assert_eq!(players[0][1], Value::Text("Henry Rausch".to_string()));
    assert_eq!(players[0][2], Value::Integer(7));
    assert_eq!(players[0][3], Value::Text("Outside".to_string()));
    assert_eq!(players[0][4], Value::Text("Clarkson".to_string()));

    let lines = db.query("SELECT line FROM attack").unwrap();
    match &lines[0][0] {
        Value::Text(packed) => {
            assert_eq!(unpack_line(packed).unwrap(), ((0.0, 0.0), (9.0, 9.0)));
        }
        other => panic!("Expected packed text, got {:?}", other),
    }
}

#[test]
fn test_provision_twice_on_disk() {
    let dir = TempDir::new().unwrap();
    let mut db = create_test_db(&dir);

    db.provision_schema(&Schema::volleyball()).unwrap();

    let tables = db.table_names().unwrap();
    assert_eq!(tables, vec!["attack", "defense", "player", "team"]);
}

#[test]
fn test_injection_attempt_is_stored_verbatim() {
    let dir = TempDir::new().unwrap();
    let mut db = create_test_db(&dir);

    db.insert_team("O'Brien").unwrap();
    db.insert_player("D'Angelo", 4, "Setter", "O'Brien").unwrap();
    db.insert_defense((3.0, 4.5), 2, "Dig'); DELETE FROM defense;--", "D'Angelo").unwrap();

    let teams = db.teams().unwrap();
    assert_eq!(teams[0].team_name, "O'Brien");

    let defenses = db.defenses(Some("D'Angelo")).unwrap();
    assert_eq!(defenses.len(), 1);
    assert_eq!(defenses[0].defense_type, "Dig'); DELETE FROM defense;--");
}

#[test]
fn test_close_then_reopen() {
    let dir = TempDir::new().unwrap();
    let mut db = create_test_db(&dir);
    db.insert_team("Clarkson").unwrap();
    db.close().unwrap();
    assert!(matches!(db.teams(), Err(VolleyError::Closed { .. })));

    let reopened = create_test_db(&dir);
    assert_eq!(reopened.teams().unwrap().len(), 1);
}
