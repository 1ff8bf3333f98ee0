//! Benchmark tables the valuation rules read from.
//!
//! The defaults mirror commonly quoted early-stage figures. A JSON file with
//! the same shape can replace any part of them at start-up; missing keys keep
//! their default.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::entities::{AppCategory, SocialPlatform};

/// Standard ARR multiple for early-stage SaaS.
pub const DEFAULT_ARR_MULTIPLE: f64 = 6.0;
/// Price at which the elasticity adjustment is neutral.
pub const DEFAULT_REFERENCE_PRICE: f64 = 50.0;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceTables {
    /// Shared by the revenue and projected-ARR valuations.
    pub arr_multiple: f64,
    pub reference_price: f64,
    pub categories: CategoryTable,
    pub social: SocialUnitValues,
}

impl Default for ReferenceTables {
    fn default() -> Self {
        Self {
            arr_multiple: DEFAULT_ARR_MULTIPLE,
            reference_price: DEFAULT_REFERENCE_PRICE,
            categories: CategoryTable::default(),
            social: SocialUnitValues::default(),
        }
    }
}

impl ReferenceTables {
    pub fn category(&self, category: AppCategory) -> &CategoryRow {
        self.categories.row(category)
    }

    pub fn validate(&self) -> Result<(), TablesError> {
        if !self.arr_multiple.is_finite() || self.arr_multiple <= 0.0 {
            return Err(TablesError::InvalidMultiple(self.arr_multiple));
        }
        check_amount("reference_price", self.reference_price)?;

        for category in AppCategory::ALL {
            let row = self.category(category);
            check_amount(category.key(), row.value_per_user)?;
            let ConversionRange { min, max } = row.conversion;
            let in_unit = |rate: f64| rate.is_finite() && (0.0..=1.0).contains(&rate);
            if !in_unit(min) || !in_unit(max) || min > max {
                return Err(TablesError::InvalidConversionRange { category, min, max });
            }
        }

        for platform in SocialPlatform::ALL {
            check_amount(platform.label(), self.social.unit_value(platform))?;
        }
        Ok(())
    }
}

fn check_amount(name: &str, value: f64) -> Result<(), TablesError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(TablesError::InvalidAmount {
            name: name.to_string(),
            value,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TablesError {
    #[error("ARR multiple must be a positive number, got {0}")]
    InvalidMultiple(f64),
    #[error("{name} must be a non-negative number, got {value}")]
    InvalidAmount { name: String, value: f64 },
    #[error("conversion range for {category} must satisfy 0 <= min <= max <= 1, got [{min}, {max}]")]
    InvalidConversionRange {
        category: AppCategory,
        min: f64,
        max: f64,
    },
}

/// Registration to paid conversion bounds, as fractions.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConversionRange {
    pub min: f64,
    pub max: f64,
}

impl ConversionRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    pub fn clamp(&self, rate: f64) -> f64 {
        rate.max(self.min).min(self.max)
    }

    pub fn contains(&self, rate: f64) -> bool {
        rate >= self.min && rate <= self.max
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryRow {
    /// USD per user. Informational; the traction model prices paid
    /// conversions instead.
    pub value_per_user: f64,
    pub conversion: ConversionRange,
}

/// One row per category, so every lookup has an answer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryTable {
    pub b2b_saas: CategoryRow,
    pub mobile_app: CategoryRow,
    pub game: CategoryRow,
    pub b2c_app: CategoryRow,
    pub other: CategoryRow,
}

impl CategoryTable {
    pub fn row(&self, category: AppCategory) -> &CategoryRow {
        match category {
            AppCategory::B2bSaas => &self.b2b_saas,
            AppCategory::MobileApp => &self.mobile_app,
            AppCategory::Game => &self.game,
            AppCategory::B2cApp => &self.b2c_app,
            AppCategory::Other => &self.other,
        }
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self {
            // $12-$18 per user
            b2b_saas: CategoryRow {
                value_per_user: 15.0,
                conversion: ConversionRange::new(0.02, 0.06),
            },
            mobile_app: CategoryRow {
                value_per_user: 8.0,
                conversion: ConversionRange::new(0.01, 0.03),
            },
            game: CategoryRow {
                value_per_user: 6.0,
                conversion: ConversionRange::new(0.01, 0.03),
            },
            b2c_app: CategoryRow {
                value_per_user: 10.0,
                conversion: ConversionRange::new(0.01, 0.03),
            },
            other: CategoryRow {
                value_per_user: 10.0,
                conversion: ConversionRange::new(0.01, 0.05),
            },
        }
    }
}

/// USD per follower, subscriber or karma point.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialUnitValues {
    pub linkedin: f64,
    pub x: f64,
    pub instagram: f64,
    pub tiktok: f64,
    pub youtube: f64,
    pub reddit: f64,
}

impl SocialUnitValues {
    pub fn unit_value(&self, platform: SocialPlatform) -> f64 {
        match platform {
            SocialPlatform::Linkedin => self.linkedin,
            SocialPlatform::X => self.x,
            SocialPlatform::Instagram => self.instagram,
            SocialPlatform::Tiktok => self.tiktok,
            SocialPlatform::Youtube => self.youtube,
            SocialPlatform::Reddit => self.reddit,
        }
    }
}

impl Default for SocialUnitValues {
    fn default() -> Self {
        Self {
            linkedin: 2.0,  // CPF around $6-15
            x: 1.5,         // CPF around $1-2
            instagram: 0.9, // no native follower objective, practical CPF $0.5-2
            tiktok: 0.5,
            youtube: 1.2, // cost per subscriber $0.5-3
            reddit: 0.1,  // karma proxy, no standard CPF
        }
    }
}
