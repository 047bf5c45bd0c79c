use serde::{Deserialize, Serialize};

/// Validation feedback shown on a form control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationState {
    Success,
    Warning,
    Error,
}

impl ValidationState {
    pub const ALL: [ValidationState; 3] = [
        ValidationState::Success,
        ValidationState::Warning,
        ValidationState::Error,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationState::Success => "success",
            ValidationState::Warning => "warning",
            ValidationState::Error => "error",
        }
    }

    /// State class applied to the wrapping element (e.g. `has-error`).
    pub fn class_name(&self) -> &'static str {
        match self {
            ValidationState::Success => "has-success",
            ValidationState::Warning => "has-warning",
            ValidationState::Error => "has-error",
        }
    }
}

impl std::fmt::Display for ValidationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown validation state: {0}")]
pub struct ParseValidationStateError(pub String);

impl std::str::FromStr for ValidationState {
    type Err = ParseValidationStateError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "success" => Ok(ValidationState::Success),
            "warning" => Ok(ValidationState::Warning),
            "error" => Ok(ValidationState::Error),
            other => Err(ParseValidationStateError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_name_uses_has_prefix() {
        assert_eq!(ValidationState::Success.class_name(), "has-success");
        assert_eq!(ValidationState::Warning.class_name(), "has-warning");
        assert_eq!(ValidationState::Error.class_name(), "has-error");
    }

    #[test]
    fn parse_known_states() {
        for state in ValidationState::ALL {
            assert_eq!(state.as_str().parse::<ValidationState>(), Ok(state));
        }
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "danger".parse::<ValidationState>().unwrap_err();
        assert_eq!(err, ParseValidationStateError("danger".into()));
        assert_eq!(err.to_string(), "unknown validation state: danger");
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert!("Error".parse::<ValidationState>().is_err());
    }

    #[test]
    fn serde_lowercase() {
        let json = serde_json::to_string(&ValidationState::Warning).unwrap();
        assert_eq!(json, "\"warning\"");
        let state: ValidationState = serde_json::from_str("\"error\"").unwrap();
        assert_eq!(state, ValidationState::Error);
    }
}
