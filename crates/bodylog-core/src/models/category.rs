// ABOUTME: BMI category enumeration with parsing and display implementations
// ABOUTME: Each band carries a fixed advisory string and display color
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Classification band for a body-mass index value.
///
/// Bands are contiguous and non-overlapping; the classifier in the
/// intelligence crate owns the threshold logic, this type owns the static
/// presentation data attached to each band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BmiCategory {
    /// Index below 18.5
    Underweight,
    /// Index from 18.5 up to (excluding) 25
    Normal,
    /// Index from 25 up to (excluding) 30
    Overweight,
    /// Index of 30 or above
    Obese,
}

impl BmiCategory {
    /// All bands in ascending index order
    pub const ALL: [Self; 4] = [
        Self::Underweight,
        Self::Normal,
        Self::Overweight,
        Self::Obese,
    ];

    /// Stable string form, used for storage and wire payloads
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }

    /// Fixed advisory text shown alongside a classified measurement
    #[must_use]
    pub const fn advice(self) -> &'static str {
        match self {
            Self::Underweight => {
                "You should increase your weight by eating more nutritious food."
            }
            Self::Normal => "Your weight is normal. Keep it up by exercising regularly.",
            Self::Overweight => {
                "You should lose weight by controlling your diet and exercising more."
            }
            Self::Obese => "You should consult a doctor to plan for safe weight loss.",
        }
    }

    /// Fixed display color (hex) for charts and badges
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Underweight => "#3B82F6",
            Self::Normal => "#22C55E",
            Self::Overweight => "#F59E0B",
            Self::Obese => "#EF4444",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BmiCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Underweight" => Ok(Self::Underweight),
            "Normal" => Ok(Self::Normal),
            "Overweight" => Ok(Self::Overweight),
            "Obese" => Ok(Self::Obese),
            other => Err(AppError::invalid_input(format!(
                "unknown BMI category '{other}'"
            ))),
        }
    }
}
