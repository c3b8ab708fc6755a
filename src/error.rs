use std::io;
use thiserror::Error;

/// Everything a pattern demo, the catalog or the config loader can fail with.
#[derive(Error, Debug)]
pub enum PatternError {
    #[error("unknown pattern '{name}'{}", hint(.suggestion))]
    UnknownPattern {
        name: String,
        suggestion: Option<String>,
    },

    #[error("access denied: '{user}' may not read '{resource}'")]
    AccessDenied { user: String, resource: String },

    #[error("invalid operator '{0}' (expected one of + - * /)")]
    InvalidOperator(char),

    #[error("'{operator} {operand}' cannot be undone")]
    NotInvertible { operator: char, operand: f64 },

    #[error("cannot build without {0}")]
    MissingPart(&'static str),

    #[error("unknown {kind} '{value}'")]
    UnknownVariant { kind: &'static str, value: String },

    #[error("failed to parse '{input}': {reason}")]
    Parse { input: String, reason: String },

    #[error("no participant named '{0}'")]
    UnknownParticipant(String),

    #[error("cannot {action} while {state}")]
    InvalidTransition {
        state: &'static str,
        action: &'static str,
    },

    #[error("invalid config '{path}': {reason}")]
    Config { path: String, reason: String },

    #[error(transparent)]
    Io(#[from] io::Error),
}

fn hint(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(s) => format!(" (did you mean '{s}'?)"),
        None => String::new(),
    }
}

impl PatternError {
    pub fn unknown_pattern(name: impl Into<String>, suggestion: Option<String>) -> Self {
        Self::UnknownPattern {
            name: name.into(),
            suggestion,
        }
    }

    pub fn access_denied(user: impl Into<String>, resource: impl Into<String>) -> Self {
        Self::AccessDenied {
            user: user.into(),
            resource: resource.into(),
        }
    }

    pub fn parse(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Parse {
            input: input.into(),
            reason: reason.into(),
        }
    }

    pub fn unknown_variant(kind: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownVariant {
            kind,
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_pattern_message_includes_hint() {
        let err = PatternError::unknown_pattern("bilder", Some("builder".into()));
        assert_eq!(
            err.to_string(),
            "unknown pattern 'bilder' (did you mean 'builder'?)"
        );

        let err = PatternError::unknown_pattern("zzz", None);
        assert_eq!(err.to_string(), "unknown pattern 'zzz'");
    }

    #[test]
    fn test_io_error_converts() {
        fn fails() -> Result<(), PatternError> {
            Err(io::Error::new(io::ErrorKind::Other, "boom"))?;
            Ok(())
        }
        assert!(matches!(fails(), Err(PatternError::Io(_))));
    }
}
