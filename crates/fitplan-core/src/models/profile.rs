// ABOUTME: User profile submitted with a plan request and the normalized fitness level
// ABOUTME: Parses loosely typed form JSON, substituting defaults for missing or bad numerics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::loose;
use crate::constants::defaults;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Training experience level used to key the catalogs
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum FitnessLevel {
    /// New to structured training
    #[default]
    Beginner,
    /// Trains regularly
    Intermediate,
    /// Experienced athlete
    Advanced,
}

impl FitnessLevel {
    /// Parse a level from free text, defaulting to `Beginner` when unrecognized
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "intermediate" => Self::Intermediate,
            "advanced" => Self::Advanced,
            _ => Self::Beginner,
        }
    }

    /// Lowercase name as used in requests
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl fmt::Display for FitnessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fitness attributes collected from the request form
///
/// Free-text fields are kept verbatim; classification happens in the
/// selectors. Numeric fields always hold a usable positive value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Free-text goal ("lose weight", "build muscle", ...)
    pub fitness_goals: String,
    /// Free-text level; see [`UserProfile::level`]
    pub fitness_level: String,
    /// Age in years
    pub age: u32,
    /// Body weight in kilograms
    pub weight: f64,
    /// Height in centimeters
    pub height: f64,
    /// Free-text injuries, or "none"
    pub injuries: String,
    /// Free-text allergies, or "none"
    pub allergies: String,
    /// Anything else the user wanted to mention
    pub additional_info: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            fitness_goals: String::new(),
            fitness_level: String::new(),
            age: defaults::AGE_YEARS,
            weight: defaults::WEIGHT_KG,
            height: defaults::HEIGHT_CM,
            injuries: String::new(),
            allergies: String::new(),
            additional_info: String::new(),
        }
    }
}

impl UserProfile {
    /// Build a profile from loosely typed form JSON.
    ///
    /// Every field is optional. Numbers may arrive as JSON numbers or numeric
    /// strings; missing, unparsable, or non-positive values fall back to the
    /// defaults (age 25, weight 70 kg, height 170 cm).
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not a JSON object
    pub fn from_form(form: &Value) -> AppResult<Self> {
        let fields = form
            .as_object()
            .ok_or_else(|| AppError::invalid_input("Request body must be a JSON object"))?;

        let text = |key: &str| fields.get(key).and_then(loose::text).unwrap_or_default();

        let age = fields
            .get("age")
            .and_then(loose::integer)
            .filter(|age| *age > 0)
            .and_then(|age| u32::try_from(age).ok())
            .unwrap_or(defaults::AGE_YEARS);

        let positive = |key: &str, default: f64| {
            fields
                .get(key)
                .and_then(loose::number)
                .filter(|v| *v > 0.0)
                .unwrap_or(default)
        };

        Ok(Self {
            fitness_goals: text("fitnessGoals"),
            fitness_level: text("fitnessLevel"),
            age,
            weight: positive("weight", defaults::WEIGHT_KG),
            height: positive("height", defaults::HEIGHT_CM),
            injuries: text("injuries"),
            allergies: text("allergies"),
            additional_info: text("additionalInfo"),
        })
    }

    /// Normalized fitness level
    #[must_use]
    pub fn level(&self) -> FitnessLevel {
        FitnessLevel::from_str_lossy(&self.fitness_level)
    }
}
