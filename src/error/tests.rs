//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod volley_error_tests {
    use super::*;

    #[test]
    fn test_json_error_conversion() {
        // Create a JSON error by trying to parse invalid JSON
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let volley_error = VolleyError::from(json_error);

        match volley_error {
            VolleyError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let volley_error = VolleyError::from(io_error);

        match volley_error {
            VolleyError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_format_helper() {
        let error = VolleyError::format("point", "1.0", "expected 2 fields, found 1");

        match error {
            VolleyError::Format {
                shape,
                input,
                reason,
            } => {
                assert_eq!(shape, "point");
                assert_eq!(input, "1.0");
                assert_eq!(reason, "expected 2 fields, found 1");
            }
            _ => panic!("Expected Format error variant"),
        }
    }

    #[test]
    fn test_storage_helper() {
        let error = VolleyError::storage("insert_team", "Clarkson")(
            rusqlite::Error::QueryReturnedNoRows,
        );

        match error {
            VolleyError::Storage {
                operation, subject, ..
            } => {
                assert_eq!(operation, "insert_team");
                assert_eq!(subject, "Clarkson");
            }
            _ => panic!("Expected Storage error variant"),
        }
    }
}

#[cfg(test)]
mod error_display_tests {
    use super::*;

    #[test]
    fn test_format_display() {
        let error = VolleyError::format("line", "1|2|3", "expected 4 fields, found 3");
        assert_eq!(
            error.to_string(),
            "Malformed packed line \"1|2|3\": expected 4 fields, found 3"
        );
    }

    #[test]
    fn test_storage_display_names_operation_and_subject() {
        let error = VolleyError::storage("insert_player", "Henry Rausch")(
            rusqlite::Error::QueryReturnedNoRows,
        );
        let message = error.to_string();
        assert!(message.starts_with("insert_player failed for Henry Rausch"));
    }

    #[test]
    fn test_closed_display() {
        let error = VolleyError::Closed {
            operation: "insert_team",
        };
        assert_eq!(
            error.to_string(),
            "insert_team called on a closed match database"
        );
    }

    #[test]
    fn test_connection_display() {
        let error = VolleyError::Connection {
            path: PathBuf::from("/nowhere/matches.db"),
            source: rusqlite::Error::InvalidQuery,
        };
        assert!(error
            .to_string()
            .starts_with("Could not open match database at /nowhere/matches.db"));
    }

    #[test]
    fn test_schema_display() {
        let error = VolleyError::Schema {
            table: "attack".to_string(),
            dependency: "player".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Table attack is listed before its dependency player"
        );
    }

    #[test]
    fn test_invalid_position_display() {
        let error = VolleyError::InvalidPosition {
            position: "Goalie".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid position: Goalie");
    }

    #[test]
    fn test_no_data_dir_display() {
        assert_eq!(
            VolleyError::NoDataDir.to_string(),
            "Could not determine a data directory for the match database"
        );
    }
}

#[cfg(test)]
mod error_chain_tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_storage_error_exposes_source() {
        let error = VolleyError::storage("query", "SELECT 1")(rusqlite::Error::InvalidQuery);
        assert!(error.source().is_some());
    }

    #[test]
    fn test_format_error_has_no_source() {
        let error = VolleyError::format("point", "a|b", "field 1 (\"a\") is not a number");
        assert!(error.source().is_none());
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<u32> {
            Ok(42)
        }

        fn returns_error() -> Result<u32> {
            Err(VolleyError::NoDataDir)
        }

        assert_eq!(returns_result().unwrap(), 42);
        assert!(returns_error().is_err());
    }
}
