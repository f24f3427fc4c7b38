// ehm.rs — Error handling module
//
// Lookups in the icon engine never fail (a miss is `None`).  AppError only
// covers the edges: loading manifests and settings files, and the CLI.

use std::path::PathBuf;

use thiserror::Error;





/// Unified error type for material-icons-ext.
#[derive(Debug, Error)]
pub enum AppError {
    /// Standard I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON in a manifest or settings file
    #[error("Error:   invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid command-line argument
    #[error("{0}")]
    InvalidArg(String),

    /// A settings value that cannot be applied
    #[error("Error:   invalid value '{value}' for setting '{key}'")]
    InvalidSetting { key: String, value: String },

    /// File does not exist
    #[error("Error:   {} does not exist", .0.display())]
    PathNotFound(PathBuf),

    /// A CSS selector the selector engine cannot parse
    #[error("Error:   invalid selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },
}





#[cfg(test)]
mod tests {
    use super::*;

    ////////////////////////////////////////////////////////////////////////////
    //
    //  display_invalid_arg
    //
    //  Verifies display output for InvalidArg error.
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn display_invalid_arg() {
        let e = AppError::InvalidArg("bad switch".into());
        assert_eq!(format!("{}", e), "bad switch");
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  display_invalid_setting
    //
    //  Verifies the key and value both appear in the message.
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn display_invalid_setting() {
        let e = AppError::InvalidSetting { key: "iconSize".into(), value: "huge".into() };
        assert_eq!(format!("{}", e), "Error:   invalid value 'huge' for setting 'iconSize'");
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  display_path_not_found
    //
    //  Verifies display output for PathNotFound error.
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn display_path_not_found() {
        let e = AppError::PathNotFound(PathBuf::from("/no/such/manifest.json"));
        assert_eq!(format!("{}", e), "Error:   /no/such/manifest.json does not exist");
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  display_invalid_selector
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn display_invalid_selector() {
        let e = AppError::InvalidSelector { selector: "a >".into(), reason: "dangling combinator".into() };
        assert_eq!(format!("{}", e), "Error:   invalid selector 'a >': dangling combinator");
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  from_io_error
    //
    //  Verifies conversion from std::io::Error to AppError::Io.
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  from_json_error
    //
    //  Verifies conversion from serde_json::Error to AppError::Json.
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let app_err: AppError = json_err.into();
        assert!(matches!(app_err, AppError::Json(_)));
    }
}
