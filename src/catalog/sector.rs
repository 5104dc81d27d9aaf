//! Sector identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Industry sector of the organization being assessed.
///
/// Sectors select benchmark tables, use case templates, and extra catalog
/// questions. `General` is both a real sector and the fallback for input
/// that names no known sector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Sector {
    #[default]
    General,
    Healthcare,
    Finance,
    Retail,
    Manufacturing,
    Technology,
}

impl Sector {
    /// All known sectors, `General` first
    pub const ALL: [Sector; 6] = [
        Sector::General,
        Sector::Healthcare,
        Sector::Finance,
        Sector::Retail,
        Sector::Manufacturing,
        Sector::Technology,
    ];

    /// Canonical lowercase identifier
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Sector::General => "general",
            Sector::Healthcare => "healthcare",
            Sector::Finance => "finance",
            Sector::Retail => "retail",
            Sector::Manufacturing => "manufacturing",
            Sector::Technology => "technology",
        }
    }

    /// Display name for reports
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Sector::General => "General",
            Sector::Healthcare => "Healthcare",
            Sector::Finance => "Financial Services",
            Sector::Retail => "Retail",
            Sector::Manufacturing => "Manufacturing",
            Sector::Technology => "Technology",
        }
    }

    /// Parse lossily, defaulting to `General` on empty or unknown input.
    ///
    /// This is the entry-point coercion for user-supplied sector strings.
    /// Strict parsing lives in [`FromStr`].
    #[must_use]
    pub fn from_input(input: &str) -> Self {
        match input.trim().to_lowercase().parse() {
            Ok(sector) => sector,
            Err(_) => {
                if !input.trim().is_empty() {
                    tracing::warn!(input, "Unknown sector, falling back to general");
                }
                Sector::General
            }
        }
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Sector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "general" => Ok(Sector::General),
            "healthcare" | "health" => Ok(Sector::Healthcare),
            "finance" | "financial" | "banking" => Ok(Sector::Finance),
            "retail" | "ecommerce" => Ok(Sector::Retail),
            "manufacturing" | "industrial" => Ok(Sector::Manufacturing),
            "technology" | "tech" | "software" => Ok(Sector::Technology),
            other => Err(format!("unknown sector: {other}")),
        }
    }
}
