//! Text-level form state for the calculator and its conversion into a
//! [`ValuationInput`].

use std::collections::BTreeMap;

use thiserror::Error;

use super::entities::{AppCategory, SocialPlatform, ValuationInput};

/// Every editable field on the calculator form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FormField {
    Mrr,
    Mrp,
    ConversionRate,
    FixedMonthlyCosts,
    Registrations,
    UniqueVisitors,
    AppCategory,
    AvgServicePrice,
    Social(SocialPlatform),
}

impl FormField {
    pub const FINANCIAL: [FormField; 4] = [
        FormField::Mrr,
        FormField::Mrp,
        FormField::ConversionRate,
        FormField::FixedMonthlyCosts,
    ];

    pub const TRACTION: [FormField; 2] = [FormField::Registrations, FormField::UniqueVisitors];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Mrr => "Monthly Recurring Revenue (MRR)",
            FormField::Mrp => "Monthly Recurring Profit (MRP)",
            FormField::ConversionRate => "Conversion Rate - Registration to Paid (%)",
            FormField::FixedMonthlyCosts => "Monthly Costs (servers, domain, LLM, ads...)",
            FormField::Registrations => "Registrations per Month",
            FormField::UniqueVisitors => "Unique Visitors per Month",
            FormField::AppCategory => "App Category",
            FormField::AvgServicePrice => "Average Service Price (USD)",
            FormField::Social(SocialPlatform::Linkedin) => "LinkedIn Followers",
            FormField::Social(SocialPlatform::X) => "X (Twitter) Followers",
            FormField::Social(SocialPlatform::Reddit) => "Reddit Karma",
            FormField::Social(SocialPlatform::Youtube) => "YouTube Subscribers",
            FormField::Social(SocialPlatform::Instagram) => "Instagram Followers",
            FormField::Social(SocialPlatform::Tiktok) => "TikTok Followers",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            FormField::Mrr => "10,000",
            FormField::Mrp => "2,000",
            FormField::ConversionRate => "2.5",
            FormField::FixedMonthlyCosts => "500",
            FormField::Registrations => "5,000",
            FormField::UniqueVisitors => "50,000",
            FormField::AppCategory => "",
            FormField::AvgServicePrice => "50",
            FormField::Social(SocialPlatform::Linkedin) => "2,500",
            FormField::Social(SocialPlatform::X) => "5,000",
            FormField::Social(SocialPlatform::Reddit) => "12,000",
            FormField::Social(SocialPlatform::Youtube) => "3,500",
            FormField::Social(SocialPlatform::Instagram) => "8,500",
            FormField::Social(SocialPlatform::Tiktok) => "15,000",
        }
    }

    /// Dollar amounts get a `$` prefix in the form.
    pub fn is_currency(&self) -> bool {
        matches!(
            self,
            FormField::Mrr
                | FormField::Mrp
                | FormField::FixedMonthlyCosts
                | FormField::AvgServicePrice
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("\"{0}\" is not a number")]
    NotANumber(String),
    #[error("Must not be negative")]
    Negative,
    #[error("Must be between 0 and 100")]
    PercentOutOfRange,
    #[error("Please select an app category")]
    MissingCategory,
}

/// Field errors from one submit attempt, in form order.
pub type FormErrors = BTreeMap<FormField, FormError>;

/// Raw text of every field plus the two revenue toggles.
#[derive(Clone, Debug, PartialEq)]
pub struct FormDraft {
    pub mrr: String,
    pub mrp: String,
    pub conversion_rate: String,
    pub fixed_monthly_costs: String,
    pub registrations: String,
    pub unique_visitors: String,
    pub app_category: String,
    pub avg_service_price: String,
    pub social: BTreeMap<SocialPlatform, String>,
    pre_revenue: bool,
    not_profitable: bool,
}

impl Default for FormDraft {
    fn default() -> Self {
        Self {
            mrr: String::new(),
            mrp: String::new(),
            conversion_rate: String::new(),
            fixed_monthly_costs: String::new(),
            registrations: String::new(),
            unique_visitors: String::new(),
            app_category: AppCategory::default().key().to_string(),
            avg_service_price: String::new(),
            social: SocialPlatform::ALL
                .into_iter()
                .map(|platform| (platform, String::new()))
                .collect(),
            pre_revenue: false,
            not_profitable: false,
        }
    }
}

impl FormDraft {
    /// Draft prefilled from an existing snapshot, e.g. a `--input` file.
    pub fn from_input(input: &ValuationInput) -> Self {
        let amount = |value: f64| {
            if value == 0.0 {
                String::new()
            } else {
                value.to_string()
            }
        };
        let optional = |value: Option<f64>| value.map(|v| v.to_string()).unwrap_or_default();

        Self {
            mrr: amount(input.mrr),
            mrp: amount(input.mrp),
            conversion_rate: optional(input.conversion_rate_pct),
            fixed_monthly_costs: optional(input.fixed_monthly_costs),
            registrations: amount(input.registrations),
            unique_visitors: amount(input.unique_visitors),
            app_category: input.app_category.clone(),
            avg_service_price: optional(input.avg_service_price),
            social: SocialPlatform::ALL
                .into_iter()
                .map(|platform| (platform, amount(input.social.count(platform))))
                .collect(),
            pre_revenue: false,
            not_profitable: false,
        }
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Mrr => &self.mrr,
            FormField::Mrp => &self.mrp,
            FormField::ConversionRate => &self.conversion_rate,
            FormField::FixedMonthlyCosts => &self.fixed_monthly_costs,
            FormField::Registrations => &self.registrations,
            FormField::UniqueVisitors => &self.unique_visitors,
            FormField::AppCategory => &self.app_category,
            FormField::AvgServicePrice => &self.avg_service_price,
            FormField::Social(platform) => self.social.get(&platform).map_or("", String::as_str),
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        if self.is_locked(field) {
            return;
        }
        match field {
            FormField::Mrr => self.mrr = value,
            FormField::Mrp => self.mrp = value,
            FormField::ConversionRate => self.conversion_rate = value,
            FormField::FixedMonthlyCosts => self.fixed_monthly_costs = value,
            FormField::Registrations => self.registrations = value,
            FormField::UniqueVisitors => self.unique_visitors = value,
            FormField::AppCategory => self.app_category = value,
            FormField::AvgServicePrice => self.avg_service_price = value,
            FormField::Social(platform) => {
                self.social.insert(platform, value);
            }
        }
    }

    pub fn pre_revenue(&self) -> bool {
        self.pre_revenue
    }

    pub fn not_profitable(&self) -> bool {
        self.not_profitable
    }

    /// Pre-revenue zeroes revenue and profit and implies not profitable.
    /// Clearing it clears both toggles.
    pub fn set_pre_revenue(&mut self, on: bool) {
        self.pre_revenue = on;
        self.not_profitable = on;
        if on {
            self.mrr = "0".to_string();
            self.mrp = "0".to_string();
        }
    }

    /// Ignored while pre-revenue is on.
    pub fn set_not_profitable(&mut self, on: bool) {
        if self.pre_revenue {
            return;
        }
        self.not_profitable = on;
        if on {
            self.mrp = "0".to_string();
        }
    }

    /// Whether a toggle currently pins the field to zero.
    pub fn is_locked(&self, field: FormField) -> bool {
        match field {
            FormField::Mrr => self.pre_revenue,
            FormField::Mrp => self.not_profitable,
            _ => false,
        }
    }

    /// Parses every field, collecting all errors rather than stopping at the
    /// first. Empty fields read as zero, or as absent for the optional ones.
    pub fn parse(&self) -> Result<ValuationInput, FormErrors> {
        let mut errors = FormErrors::new();
        let mut number = |field: FormField| -> Option<f64> {
            if self.is_locked(field) {
                return Some(0.0);
            }
            match parse_amount(self.value(field), field == FormField::ConversionRate) {
                Ok(value) => value,
                Err(err) => {
                    errors.insert(field, err);
                    None
                }
            }
        };

        let mut input = ValuationInput {
            mrr: number(FormField::Mrr).unwrap_or(0.0),
            mrp: number(FormField::Mrp).unwrap_or(0.0),
            conversion_rate_pct: number(FormField::ConversionRate),
            fixed_monthly_costs: number(FormField::FixedMonthlyCosts),
            registrations: number(FormField::Registrations).unwrap_or(0.0),
            unique_visitors: number(FormField::UniqueVisitors).unwrap_or(0.0),
            avg_service_price: number(FormField::AvgServicePrice),
            app_category: self.app_category.trim().to_string(),
            ..ValuationInput::default()
        };
        for platform in SocialPlatform::ALL {
            let count = number(FormField::Social(platform)).unwrap_or(0.0);
            match platform {
                SocialPlatform::Linkedin => input.social.linkedin_followers = count,
                SocialPlatform::X => input.social.x_followers = count,
                SocialPlatform::Instagram => input.social.instagram_followers = count,
                SocialPlatform::Tiktok => input.social.tiktok_followers = count,
                SocialPlatform::Youtube => input.social.youtube_subscribers = count,
                SocialPlatform::Reddit => input.social.reddit_karma = count,
            }
        }

        if input.app_category.is_empty() {
            errors.insert(FormField::AppCategory, FormError::MissingCategory);
        }

        if errors.is_empty() {
            Ok(input)
        } else {
            Err(errors)
        }
    }
}

/// `Ok(None)` for blank text. Grouping commas and a leading `$` are accepted.
fn parse_amount(raw: &str, percent: bool) -> Result<Option<f64>, FormError> {
    let cleaned: String = raw
        .trim()
        .trim_start_matches('$')
        .trim_end_matches('%')
        .chars()
        .filter(|ch| *ch != ',' && !ch.is_whitespace())
        .collect();
    if cleaned.is_empty() {
        return Ok(None);
    }

    let value: f64 = cleaned
        .parse()
        .ok()
        .filter(|value: &f64| value.is_finite())
        .ok_or_else(|| FormError::NotANumber(raw.trim().to_string()))?;
    if value < 0.0 {
        return Err(FormError::Negative);
    }
    if percent && value > 100.0 {
        return Err(FormError::PercentOutOfRange);
    }
    Ok(Some(value))
}
