//! Error handling and display.
//!
//! Commands share one rendering of [`ApiError`] and one mapping from error
//! variant to process exit code, so `vetdesk` fails the same way everywhere.

use colored::Colorize;

use crate::api::ApiError;
use crate::exit_codes::*;

/// Print an API error to stderr in the CLI's standard form.
pub fn display_api_error(err: &ApiError) {
    match err {
        ApiError::Network { message } => {
            eprintln!("{} Cannot reach the booking service.", "Error:".red().bold());
            eprintln!("  {} {}", "Details:".dimmed(), message.dimmed());
        }
        ApiError::Unauthorized { .. } => {
            eprintln!(
                "{} Your session was rejected. Run `vetdesk login` to sign in again.",
                "Error:".red().bold()
            );
        }
        ApiError::Forbidden { .. } => {
            eprintln!(
                "{} Your account does not have access to this resource.",
                "Error:".red().bold()
            );
        }
        ApiError::Validation { message } => {
            eprintln!("{} The service rejected the request:", "Error:".red().bold());
            eprintln!("  {}", extract_message(message));
        }
        other => {
            eprintln!("{} {}", "Error:".red().bold(), other);
        }
    }
}

/// Map an API error to the exit code a command should return.
pub fn exit_code_for(err: &ApiError) -> i32 {
    match err {
        ApiError::Network { .. } => EXIT_NETWORK_ERROR,
        ApiError::Unauthorized { .. } | ApiError::Forbidden { .. } => EXIT_AUTH_ERROR,
        ApiError::Validation { .. } => EXIT_VALIDATION_ERROR,
        ApiError::Server { .. } => EXIT_SERVER_ERROR,
        ApiError::ClientError { .. } | ApiError::Parse { .. } => EXIT_ERROR,
        ApiError::Storage { .. } => EXIT_CONFIG_ERROR,
    }
}

/// Pull the human-readable `message` field out of a JSON error body.
///
/// Backends in the Laravel family wrap validation failures as
/// `{"message": "...", "errors": {...}}`; anything unparseable is shown
/// verbatim.
fn extract_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
        .unwrap_or_else(|| body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_per_variant() {
        let network = ApiError::Network {
            message: "timed out".to_string(),
        };
        assert_eq!(exit_code_for(&network), EXIT_NETWORK_ERROR);

        let unauthorized = ApiError::Unauthorized {
            message: String::new(),
        };
        assert_eq!(exit_code_for(&unauthorized), EXIT_AUTH_ERROR);

        let validation = ApiError::Validation {
            message: String::new(),
        };
        assert_eq!(exit_code_for(&validation), EXIT_VALIDATION_ERROR);

        let server = ApiError::Server {
            status: 500,
            message: String::new(),
        };
        assert_eq!(exit_code_for(&server), EXIT_SERVER_ERROR);

        let not_found = ApiError::ClientError {
            status: 404,
            message: String::new(),
        };
        assert_eq!(exit_code_for(&not_found), EXIT_ERROR);
    }

    #[test]
    fn test_extract_message_from_json_body() {
        let body = r#"{"message":"The email field is required.","errors":{"email":["required"]}}"#;
        assert_eq!(extract_message(body), "The email field is required.");
    }

    #[test]
    fn test_extract_message_passes_through_plain_text() {
        assert_eq!(extract_message("plain failure"), "plain failure");
    }
}
