use super::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which part of an input line holds the hostname.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ExtractRule {
    /// The whole line, minus the line terminator
    Line,
    /// First whitespace-delimited field
    #[default]
    First,
    /// Last whitespace-delimited field
    Last,
}

impl ExtractRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExtractRule::Line => "line",
            ExtractRule::First => "first",
            ExtractRule::Last => "last",
        }
    }

    /// Applies the rule to a line whose terminator is already stripped.
    ///
    /// Returns `None` when the line holds no usable name.
    pub fn extract<'a>(&self, line: &'a str) -> Option<&'a str> {
        let name = match self {
            ExtractRule::Line => line,
            ExtractRule::First => line.split_whitespace().next()?,
            ExtractRule::Last => line.split_whitespace().next_back()?,
        };
        if name.is_empty() {
            None
        } else {
            Some(name)
        }
    }
}

impl fmt::Display for ExtractRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ExtractRule {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "line" | "whole" => Ok(ExtractRule::Line),
            "first" => Ok(ExtractRule::First),
            "last" => Ok(ExtractRule::Last),
            _ => Err(ConfigError::InvalidExtractRule(s.to_string())),
        }
    }
}

impl TryFrom<String> for ExtractRule {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ExtractRule> for String {
    fn from(value: ExtractRule) -> Self {
        value.as_str().to_string()
    }
}

/// Input source configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct InputConfig {
    /// File to read names from; `None` or `"-"` reads stdin
    #[serde(default)]
    pub path: Option<String>,

    #[serde(default)]
    pub field: ExtractRule,
}

impl InputConfig {
    pub fn reads_stdin(&self) -> bool {
        matches!(self.path.as_deref(), None | Some("-"))
    }
}
