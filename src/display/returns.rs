//! Return column color rule
//!
//! Classifies a return value as negative, zero or positive. The table uses
//! the category to pick the Return cell's background.

use std::fmt;

/// Visual category of a return value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReturnCategory {
    Negative,
    Neutral,
    Positive,
}

impl ReturnCategory {
    /// Classify a numeric return
    ///
    /// NaN has no sign and is treated as neutral.
    pub fn classify(value: f64) -> Self {
        if value < 0.0 {
            Self::Negative
        } else if value > 0.0 {
            Self::Positive
        } else {
            Self::Neutral
        }
    }

    /// Classify a return as it is displayed in the table
    ///
    /// Returns `None` if the text is not a number; the projection never
    /// produces such text.
    pub fn from_display(text: &str) -> Option<Self> {
        text.trim().parse::<f64>().ok().map(Self::classify)
    }
}

impl fmt::Display for ReturnCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Negative => "negative",
            Self::Neutral => "neutral",
            Self::Positive => "positive",
        };
        write!(f, "{}", name)
    }
}
