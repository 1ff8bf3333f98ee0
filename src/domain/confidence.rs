use std::fmt;

use serde::Serialize;

use super::entities::{AppCategory, NormalizedInput};
use crate::util::format::to_fixed;

/// Qualitative band for a confidence score, lowest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum ConfidenceLevel {
    #[serde(rename = "Very Low")]
    VeryLow,
    Low,
    #[serde(rename = "Medium-Low")]
    MediumLow,
    Medium,
    #[serde(rename = "Medium-High")]
    MediumHigh,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl ConfidenceLevel {
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 85 => ConfidenceLevel::VeryHigh,
            s if s >= 70 => ConfidenceLevel::High,
            s if s >= 55 => ConfidenceLevel::MediumHigh,
            s if s >= 40 => ConfidenceLevel::Medium,
            s if s >= 25 => ConfidenceLevel::MediumLow,
            s if s >= 10 => ConfidenceLevel::Low,
            _ => ConfidenceLevel::VeryLow,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConfidenceLevel::VeryLow => "Very Low",
            ConfidenceLevel::Low => "Low",
            ConfidenceLevel::MediumLow => "Medium-Low",
            ConfidenceLevel::Medium => "Medium",
            ConfidenceLevel::MediumHigh => "Medium-High",
            ConfidenceLevel::High => "High",
            ConfidenceLevel::VeryHigh => "Very High",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ConfidenceLevel::VeryLow => "Concept stage with no clear validation",
            ConfidenceLevel::Low => "Very early stage with minimal metrics",
            ConfidenceLevel::MediumLow => "Early stage with some validation",
            ConfidenceLevel::Medium => "Mixed indicators with growth potential",
            ConfidenceLevel::MediumHigh => "Good traction with promising signals",
            ConfidenceLevel::High => "Strong indicators with solid fundamentals",
            ConfidenceLevel::VeryHigh => "Exceptional metrics across multiple dimensions",
        }
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ConfidenceResult {
    pub score: u32,
    pub level: ConfidenceLevel,
    pub description: String,
    /// Why the score is what it is, in scoring order.
    pub factors: Vec<String>,
}

/// Flat positioning points and label for a market category.
pub fn category_positioning(category: AppCategory) -> (u32, &'static str) {
    match category {
        AppCategory::B2bSaas => (10, "High-value B2B SaaS market"),
        AppCategory::B2cApp => (7, "Consumer subscription market"),
        AppCategory::MobileApp => (6, "Mobile app market"),
        AppCategory::Game => (5, "Gaming market"),
        AppCategory::Other => (3, "Unspecified market category"),
    }
}

/// Visitor to registration rate in percent, zero unless both counts are set.
pub fn visitor_registration_rate(input: &NormalizedInput) -> f64 {
    if input.registrations > 0.0 && input.unique_visitors > 0.0 {
        input.registrations / input.unique_visitors * 100.0
    } else {
        0.0
    }
}

/// Profit margin in percent, only when both revenue and profit are present.
pub fn profit_margin(input: &NormalizedInput) -> Option<f64> {
    (input.mrr > 0.0 && input.mrp > 0.0).then(|| input.mrp / input.mrr * 100.0)
}

/// Weighted point score across revenue, profitability, traction, market and
/// social proof. Component caps add up to exactly 100.
pub fn score_confidence(input: &NormalizedInput) -> ConfidenceResult {
    let mut score = 0_u32;
    let mut factors = Vec::new();
    let mut award = |points: u32, factor: String| {
        score += points;
        factors.push(factor);
    };

    // Revenue maturity, 0-35
    let mrr = input.mrr;
    if mrr >= 10_000.0 {
        award(35, "Strong recurring revenue ($10K+ MRR)".into());
    } else if mrr >= 5_000.0 {
        award(30, "Good recurring revenue ($5K+ MRR)".into());
    } else if mrr >= 1_000.0 {
        award(25, "Growing recurring revenue ($1K+ MRR)".into());
    } else if mrr > 0.0 {
        award(15, "Early recurring revenue".into());
    } else {
        award(0, "No recurring revenue yet".into());
    }

    // Profitability, 0-20
    if let Some(margin) = profit_margin(input) {
        let shown = to_fixed(margin, 1);
        if margin >= 30.0 {
            award(20, format!("Excellent profitability ({shown}% margin)"));
        } else if margin >= 20.0 {
            award(15, format!("Good profitability ({shown}% margin)"));
        } else if margin >= 10.0 {
            award(10, format!("Moderate profitability ({shown}% margin)"));
        } else {
            award(5, format!("Low profitability ({shown}% margin)"));
        }
    } else if mrr > 0.0 {
        award(0, "Revenue without clear profitability".into());
    }

    // Registration volume, 0-15
    let registrations = input.registrations;
    if registrations > 1_000.0 {
        award(15, "High monthly registrations (1K+)".into());
    } else if registrations > 500.0 {
        award(10, "Good monthly registrations (500+)".into());
    } else if registrations > 100.0 {
        award(5, "Moderate monthly registrations (100+)".into());
    }

    // Visitor to registration, 0-10
    let rate = visitor_registration_rate(input);
    let shown = to_fixed(rate, 2);
    if rate >= 5.0 {
        award(10, format!("Excellent visitor-to-registration rate ({shown}%)"));
    } else if rate >= 2.0 {
        award(7, format!("Good visitor-to-registration rate ({shown}%)"));
    } else if rate >= 1.0 {
        award(3, format!("Average visitor-to-registration rate ({shown}%)"));
    }

    // Market positioning, flat
    let (points, label) = category_positioning(input.category);
    award(points, label.into());

    // Social proof, 0-10
    let reach = input.social.total_reach();
    if reach > 10_000.0 {
        award(10, "Strong social proof (10K+ total followers)".into());
    } else if reach > 5_000.0 {
        award(7, "Good social proof (5K+ total followers)".into());
    } else if reach > 1_000.0 {
        award(4, "Moderate social proof (1K+ total followers)".into());
    } else if reach > 0.0 {
        award(0, "Limited social proof".into());
    }

    let level = ConfidenceLevel::from_score(score);
    ConfidenceResult {
        score,
        level,
        description: level.description().to_string(),
        factors,
    }
}
