//! Maturity level and grade classification.
//!
//! Both classifiers walk a descending threshold table and take the first
//! entry whose threshold the score meets. The tables partition [0, 100]
//! into contiguous bands with inclusive lower bounds.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative AI adoption stage derived from the overall score.
///
/// Ordered from least to most mature. Bands: Exploring [0, 26),
/// Experimenting [26, 51), Scaling [51, 76), Optimizing [76, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum MaturityLevel {
    /// Early awareness, little or no production AI
    Exploring,
    /// Pilots underway, value not yet systematic
    Experimenting,
    /// Repeatable delivery across several business areas
    Scaling,
    /// AI woven into operations with continuous improvement
    Optimizing,
}

impl MaturityLevel {
    /// Classification thresholds, highest first. First `score >= threshold`
    /// wins.
    const THRESHOLDS: [(f64, MaturityLevel); 4] = [
        (76.0, MaturityLevel::Optimizing),
        (51.0, MaturityLevel::Scaling),
        (26.0, MaturityLevel::Experimenting),
        (0.0, MaturityLevel::Exploring),
    ];

    /// Classify an overall score.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        for (threshold, level) in Self::THRESHOLDS {
            if score >= threshold {
                return level;
            }
        }
        Self::Exploring
    }

    /// Display name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Exploring => "Exploring",
            Self::Experimenting => "Experimenting",
            Self::Scaling => "Scaling",
            Self::Optimizing => "Optimizing",
        }
    }

    /// One-line description for reports
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Exploring => "Building awareness and identifying first opportunities",
            Self::Experimenting => "Running pilots and proving value in pockets",
            Self::Scaling => "Expanding proven solutions across the organization",
            Self::Optimizing => "Operating AI at scale with continuous refinement",
        }
    }

    /// Inclusive lower bound of this level's score band
    #[must_use]
    pub const fn threshold(&self) -> f64 {
        match self {
            Self::Exploring => 0.0,
            Self::Experimenting => 26.0,
            Self::Scaling => 51.0,
            Self::Optimizing => 76.0,
        }
    }
}

impl fmt::Display for MaturityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Letter grade based on the overall score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Grade {
    /// Excellent: 90-100
    A,
    /// Good: 80-89
    B,
    /// Fair: 70-79
    C,
    /// Poor: 60-69
    D,
    /// Failing: <60
    F,
}

impl Grade {
    const THRESHOLDS: [(f64, Grade); 5] = [
        (90.0, Grade::A),
        (80.0, Grade::B),
        (70.0, Grade::C),
        (60.0, Grade::D),
        (0.0, Grade::F),
    ];

    /// Classify an overall score.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        for (threshold, grade) in Self::THRESHOLDS {
            if score >= threshold {
                return grade;
            }
        }
        Self::F
    }

    /// Get grade letter
    #[must_use]
    pub const fn letter(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        }
    }

    /// Get grade description
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::A => "Excellent",
            Self::B => "Good",
            Self::C => "Fair",
            Self::D => "Poor",
            Self::F => "Failing",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
