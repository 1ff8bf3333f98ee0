use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Market category the business competes in.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum AppCategory {
    #[default]
    B2bSaas,
    MobileApp,
    Game,
    B2cApp,
    Other,
}

impl AppCategory {
    pub const ALL: [AppCategory; 5] = [
        AppCategory::B2bSaas,
        AppCategory::MobileApp,
        AppCategory::Game,
        AppCategory::B2cApp,
        AppCategory::Other,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            AppCategory::B2bSaas => "b2b_saas",
            AppCategory::MobileApp => "mobile_app",
            AppCategory::Game => "game",
            AppCategory::B2cApp => "b2c_app",
            AppCategory::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AppCategory::B2bSaas => "B2B SaaS",
            AppCategory::MobileApp => "Mobile App",
            AppCategory::Game => "Game",
            AppCategory::B2cApp => "B2C App",
            AppCategory::Other => "Other",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AppCategory::B2bSaas => "Business software & tools",
            AppCategory::MobileApp => "Consumer/prosumer, non-game",
            AppCategory::Game => "F2P or premium games",
            AppCategory::B2cApp => "Consumer subscription apps",
            AppCategory::Other => "Everything else",
        }
    }
}

impl fmt::Display for AppCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown app category `{0}`")]
pub struct ParseCategoryError(pub String);

impl FromStr for AppCategory {
    type Err = ParseCategoryError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let key = raw.trim();
        AppCategory::ALL
            .into_iter()
            .find(|category| category.key().eq_ignore_ascii_case(key))
            .ok_or_else(|| ParseCategoryError(raw.to_string()))
    }
}

/// Social channels counted towards brand value, in display order.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SocialPlatform {
    Linkedin,
    X,
    Instagram,
    Tiktok,
    Youtube,
    Reddit,
}

impl SocialPlatform {
    pub const ALL: [SocialPlatform; 6] = [
        SocialPlatform::Linkedin,
        SocialPlatform::X,
        SocialPlatform::Instagram,
        SocialPlatform::Tiktok,
        SocialPlatform::Youtube,
        SocialPlatform::Reddit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SocialPlatform::Linkedin => "LinkedIn",
            SocialPlatform::X => "X",
            SocialPlatform::Instagram => "Instagram",
            SocialPlatform::Tiktok => "TikTok",
            SocialPlatform::Youtube => "YouTube",
            SocialPlatform::Reddit => "Reddit",
        }
    }

    /// What one counted unit is on this platform.
    pub fn unit_noun(&self) -> &'static str {
        match self {
            SocialPlatform::Youtube => "subscribers",
            SocialPlatform::Reddit => "karma",
            _ => "followers",
        }
    }
}

/// Raw audience counts per platform. Reddit is measured in karma, not followers.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialCounts {
    pub linkedin_followers: f64,
    pub x_followers: f64,
    pub reddit_karma: f64,
    pub youtube_subscribers: f64,
    pub instagram_followers: f64,
    pub tiktok_followers: f64,
}

/// Karma is divided by this before being compared with follower counts.
pub const REDDIT_KARMA_PER_FOLLOWER: f64 = 100.0;

impl SocialCounts {
    pub fn count(&self, platform: SocialPlatform) -> f64 {
        match platform {
            SocialPlatform::Linkedin => self.linkedin_followers,
            SocialPlatform::X => self.x_followers,
            SocialPlatform::Instagram => self.instagram_followers,
            SocialPlatform::Tiktok => self.tiktok_followers,
            SocialPlatform::Youtube => self.youtube_subscribers,
            SocialPlatform::Reddit => self.reddit_karma,
        }
    }

    fn count_mut(&mut self, platform: SocialPlatform) -> &mut f64 {
        match platform {
            SocialPlatform::Linkedin => &mut self.linkedin_followers,
            SocialPlatform::X => &mut self.x_followers,
            SocialPlatform::Instagram => &mut self.instagram_followers,
            SocialPlatform::Tiktok => &mut self.tiktok_followers,
            SocialPlatform::Youtube => &mut self.youtube_subscribers,
            SocialPlatform::Reddit => &mut self.reddit_karma,
        }
    }

    /// Cross-platform reach with Reddit karma normalised against followers.
    pub fn total_reach(&self) -> f64 {
        self.linkedin_followers
            + self.x_followers
            + self.youtube_subscribers
            + self.instagram_followers
            + self.tiktok_followers
            + self.reddit_karma / REDDIT_KARMA_PER_FOLLOWER
    }
}

/// Self-reported metrics for one valuation request.
///
/// Every field is optional on the wire. Values are taken as given here;
/// [`ValuationInput::normalize`] applies the clamping rules before the
/// engine sees them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValuationInput {
    pub mrr: f64,
    pub mrp: f64,
    pub avg_service_price: Option<f64>,
    /// Registration to paid conversion, in percent.
    #[serde(alias = "cost_per_acquisition")]
    pub conversion_rate_pct: Option<f64>,
    pub fixed_monthly_costs: Option<f64>,
    pub unique_visitors: f64,
    pub registrations: f64,
    pub app_category: String,
    #[serde(flatten)]
    pub social: SocialCounts,
}

impl ValuationInput {
    pub fn new(category: AppCategory) -> Self {
        Self {
            app_category: category.key().to_string(),
            ..Self::default()
        }
    }

    /// Clamps every field into its valid domain and resolves the category.
    ///
    /// Nothing here fails: each correction is reported as a [`Diagnostic`]
    /// and the corrected value is used.
    pub fn normalize(&self) -> (NormalizedInput, Vec<Diagnostic>) {
        let mut diagnostics = Vec::new();

        let category = match self.app_category.parse::<AppCategory>() {
            Ok(category) => category,
            Err(ParseCategoryError(raw)) => {
                diagnostics.push(Diagnostic::UnknownCategory { raw });
                AppCategory::Other
            }
        };

        let mut clamp =
            |field: &'static str, value: f64| clamp_non_negative(field, value, &mut diagnostics);

        let mrr = clamp("mrr", self.mrr);
        let mrp = clamp("mrp", self.mrp);
        let avg_service_price = clamp("avg_service_price", self.avg_service_price.unwrap_or(0.0));
        let fixed_monthly_costs =
            clamp("fixed_monthly_costs", self.fixed_monthly_costs.unwrap_or(0.0));
        let unique_visitors = clamp("unique_visitors", self.unique_visitors);
        let registrations = clamp("registrations", self.registrations);

        let mut social = SocialCounts::default();
        for platform in SocialPlatform::ALL {
            let count = self.social.count(platform);
            *social.count_mut(platform) = clamp(social_field(platform), count);
        }

        let conversion_override_pct = self.conversion_rate_pct.map(|pct| {
            if pct.is_finite() && (0.0..=100.0).contains(&pct) {
                pct
            } else {
                let clamped = if pct.is_nan() { 0.0 } else { pct.clamp(0.0, 100.0) };
                diagnostics.push(Diagnostic::ConversionOverrideClamped {
                    value: pct,
                    clamped,
                });
                clamped
            }
        });
        if let Some(pct) = conversion_override_pct {
            diagnostics.push(Diagnostic::ConversionRateNarrated { pct });
        }

        let normalized = NormalizedInput {
            mrr,
            mrp,
            avg_service_price,
            conversion_override_pct,
            fixed_monthly_costs,
            unique_visitors,
            registrations,
            category,
            social,
        };
        (normalized, diagnostics)
    }
}

fn clamp_non_negative(field: &'static str, value: f64, diagnostics: &mut Vec<Diagnostic>) -> f64 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        diagnostics.push(Diagnostic::InputClamped { field, value });
        0.0
    }
}

fn social_field(platform: SocialPlatform) -> &'static str {
    match platform {
        SocialPlatform::Linkedin => "linkedin_followers",
        SocialPlatform::X => "x_followers",
        SocialPlatform::Instagram => "instagram_followers",
        SocialPlatform::Tiktok => "tiktok_followers",
        SocialPlatform::Youtube => "youtube_subscribers",
        SocialPlatform::Reddit => "reddit_karma",
    }
}

/// Input after clamping: every number is finite and non-negative and the
/// category is resolved.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct NormalizedInput {
    pub mrr: f64,
    pub mrp: f64,
    pub avg_service_price: f64,
    pub conversion_override_pct: Option<f64>,
    pub fixed_monthly_costs: f64,
    pub unique_visitors: f64,
    pub registrations: f64,
    pub category: AppCategory,
    pub social: SocialCounts,
}

/// Something the engine corrected or wants surfaced without failing.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// Category string did not match a known row; the `other` row was used.
    UnknownCategory { raw: String },
    /// Negative or non-finite number replaced by zero.
    InputClamped { field: &'static str, value: f64 },
    ConversionOverrideClamped { value: f64, clamped: f64 },
    /// The conversion field drives the projection and is also narrated as an
    /// observed registration to paid rate.
    ConversionRateNarrated { pct: f64 },
}

impl Diagnostic {
    /// Whether the diagnostic points at questionable input rather than a
    /// known modelling caveat.
    pub fn is_warning(&self) -> bool {
        !matches!(self, Diagnostic::ConversionRateNarrated { .. })
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnknownCategory { raw } if raw.trim().is_empty() => {
                write!(f, "No app category selected; using the \"other\" benchmarks")
            }
            Diagnostic::UnknownCategory { raw } => write!(
                f,
                "Unknown app category \"{raw}\"; using the \"other\" benchmarks"
            ),
            Diagnostic::InputClamped { field, value } => {
                write!(f, "{field} was {value}; treated as 0")
            }
            Diagnostic::ConversionOverrideClamped { value, clamped } => write!(
                f,
                "Conversion rate {value}% is outside 0-100%; using {clamped}%"
            ),
            Diagnostic::ConversionRateNarrated { pct } => write!(
                f,
                "Conversion rate {pct}% replaces the category benchmark and is also reported as your observed registration-to-paid rate"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_categories_case_insensitively() {
        assert_eq!("b2b_saas".parse::<AppCategory>(), Ok(AppCategory::B2bSaas));
        assert_eq!(" Game ".parse::<AppCategory>(), Ok(AppCategory::Game));
        assert_eq!(
            "fintech".parse::<AppCategory>(),
            Err(ParseCategoryError("fintech".to_string()))
        );
    }

    #[test]
    fn unknown_category_falls_back_to_other_with_diagnostic() {
        let input = ValuationInput {
            app_category: "crypto".to_string(),
            ..ValuationInput::default()
        };
        let (normalized, diagnostics) = input.normalize();
        assert_eq!(normalized.category, AppCategory::Other);
        assert_eq!(
            diagnostics,
            vec![Diagnostic::UnknownCategory {
                raw: "crypto".to_string()
            }]
        );
    }

    #[test]
    fn negative_and_nan_fields_are_zeroed() {
        let mut input = ValuationInput::new(AppCategory::Game);
        input.mrr = -500.0;
        input.registrations = f64::NAN;
        input.social.tiktok_followers = -3.0;

        let (normalized, diagnostics) = input.normalize();
        assert_eq!(normalized.mrr, 0.0);
        assert_eq!(normalized.registrations, 0.0);
        assert_eq!(normalized.social.tiktok_followers, 0.0);

        let fields: Vec<_> = diagnostics
            .iter()
            .filter_map(|d| match d {
                Diagnostic::InputClamped { field, .. } => Some(*field),
                _ => None,
            })
            .collect();
        assert_eq!(fields, vec!["mrr", "registrations", "tiktok_followers"]);
    }

    #[test]
    fn conversion_override_is_clamped_and_flagged() {
        let mut input = ValuationInput::new(AppCategory::B2bSaas);
        input.conversion_rate_pct = Some(140.0);
        let (normalized, diagnostics) = input.normalize();

        assert_eq!(normalized.conversion_override_pct, Some(100.0));
        assert!(diagnostics.contains(&Diagnostic::ConversionOverrideClamped {
            value: 140.0,
            clamped: 100.0
        }));
        assert!(diagnostics.contains(&Diagnostic::ConversionRateNarrated { pct: 100.0 }));
    }

    #[test]
    fn zero_override_is_kept_as_an_override() {
        let mut input = ValuationInput::new(AppCategory::B2bSaas);
        input.conversion_rate_pct = Some(0.0);
        let (normalized, _) = input.normalize();
        assert_eq!(normalized.conversion_override_pct, Some(0.0));
    }

    #[test]
    fn deserializes_sparse_json_with_defaults() {
        let input: ValuationInput = serde_json::from_value(serde_json::json!({
            "mrr": 2500,
            "app_category": "mobile_app",
            "reddit_karma": 12000,
            "cost_per_acquisition": 3.5
        }))
        .unwrap();

        assert_eq!(input.mrr, 2500.0);
        assert_eq!(input.mrp, 0.0);
        assert_eq!(input.avg_service_price, None);
        assert_eq!(input.conversion_rate_pct, Some(3.5));
        assert_eq!(input.social.reddit_karma, 12000.0);
        assert_eq!(input.social.linkedin_followers, 0.0);
    }

    #[test]
    fn reach_divides_karma() {
        let social = SocialCounts {
            linkedin_followers: 1000.0,
            reddit_karma: 5000.0,
            ..SocialCounts::default()
        };
        assert_eq!(social.total_reach(), 1050.0);
    }
}
