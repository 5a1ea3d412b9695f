use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How [`render`](crate::format::render) prints each number.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Notation {
    /// Shortest representation, e.g. `0.5`
    #[default]
    Plain,
    /// Fixed number of decimal places
    Fixed(usize),
    /// Scientific notation with the given number of decimal places
    Scientific(usize),
}

impl FromStr for Notation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        let (kind, places) = match lowered.split_once(':') {
            Some((kind, places)) => (kind, Some(places)),
            None => (lowered.as_str(), None),
        };
        let places = places
            .map(|p| {
                p.trim()
                    .parse::<usize>()
                    .map_err(|_| format!("Invalid number of decimal places: {}", p))
            })
            .transpose()?;

        match (kind, places) {
            ("plain", None) => Ok(Notation::Plain),
            ("fixed", Some(places)) => Ok(Notation::Fixed(places)),
            ("scientific", Some(places)) => Ok(Notation::Scientific(places)),
            ("fixed", None) | ("scientific", None) => Err(format!(
                "Notation '{}' needs decimal places, e.g. '{}:3'",
                kind, kind
            )),
            _ => Err(format!(
                "Unknown notation: {}. Expected 'plain', 'fixed:N' or 'scientific:N'",
                s
            )),
        }
    }
}

/// Rendering options for numeric matrices.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct FormatConfig {
    pub notation: Notation,

    /// Rows kept at each end before the middle is elided.
    pub max_rows: Option<usize>,

    /// Columns kept at each end before the middle is elided.
    pub max_cols: Option<usize>,
}

impl FormatConfig {
    pub fn new(notation: Notation) -> Self {
        Self {
            notation,
            ..Self::default()
        }
    }

    pub fn with_max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = Some(max_rows);
        self
    }

    pub fn with_max_cols(mut self, max_cols: usize) -> Self {
        self.max_cols = Some(max_cols);
        self
    }
}

/// Settings for the cofactor-expansion routines.
///
/// These only affect logging; results are identical for any value.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LinalgConfig {
    /// Largest dimension expanded without a warning. Cofactor expansion
    /// costs O(n!) so anything much past 10 is impractical.
    pub expansion_warn_dim: usize,
}

impl LinalgConfig {
    pub fn new(expansion_warn_dim: usize) -> Self {
        Self { expansion_warn_dim }
    }
}

impl Default for LinalgConfig {
    fn default() -> Self {
        Self {
            expansion_warn_dim: 9,
        }
    }
}
