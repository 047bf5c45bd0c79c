use serde::{Deserialize, Serialize};

/// Component size modifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Large,
    Medium,
    Small,
    #[serde(rename = "xsmall")]
    XSmall,
}

impl Size {
    /// Class suffix for this size (`lg`, `md`, `sm`, `xs`).
    pub fn abbrev(&self) -> &'static str {
        match self {
            Size::Large => "lg",
            Size::Medium => "md",
            Size::Small => "sm",
            Size::XSmall => "xs",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Size::Large => "large",
            Size::Medium => "medium",
            Size::Small => "small",
            Size::XSmall => "xsmall",
        }
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown size: {0}")]
pub struct ParseSizeError(pub String);

/// Accepts both the long names and their abbreviations.
impl std::str::FromStr for Size {
    type Err = ParseSizeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "large" | "lg" => Ok(Size::Large),
            "medium" | "md" => Ok(Size::Medium),
            "small" | "sm" => Ok(Size::Small),
            "xsmall" | "xs" => Ok(Size::XSmall),
            other => Err(ParseSizeError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_and_short_names_agree() {
        assert_eq!("large".parse::<Size>(), "lg".parse::<Size>());
        assert_eq!("medium".parse::<Size>(), "md".parse::<Size>());
        assert_eq!("small".parse::<Size>(), "sm".parse::<Size>());
        assert_eq!("xsmall".parse::<Size>(), "xs".parse::<Size>());
    }

    #[test]
    fn abbrev() {
        assert_eq!(Size::Large.abbrev(), "lg");
        assert_eq!(Size::XSmall.abbrev(), "xs");
    }

    #[test]
    fn unknown_size() {
        assert_eq!(
            "huge".parse::<Size>(),
            Err(ParseSizeError("huge".to_string()))
        );
    }

    #[test]
    fn serde_uses_long_names() {
        assert_eq!(serde_json::to_string(&Size::XSmall).unwrap(), "\"xsmall\"");
        let size: Size = serde_json::from_str("\"large\"").unwrap();
        assert_eq!(size, Size::Large);
    }
}
