use std::collections::BTreeMap;

use serde::Serialize;

use super::entities::{AppCategory, SocialCounts, SocialPlatform};
use super::reference::ReferenceTables;

const PRICE_FACTOR_MIN: f64 = 0.25;
const PRICE_FACTOR_MAX: f64 = 1.5;
/// Half-width of the reported range around the point estimate.
pub const RANGE_BAND: f64 = 0.1;

/// Value of a monthly revenue stream through the ARR multiple.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ArrValuation {
    pub value: f64,
    pub multiple: f64,
    pub arr: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TractionValuation {
    pub value: f64,
    pub registrations: f64,
    pub base_conversion_rate: f64,
    pub price_adjusted_conversion_rate: f64,
    pub avg_service_price: f64,
    pub monthly_paid_conversions: f64,
    pub monthly_traction_revenue: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SocialLine {
    pub count: f64,
    pub unit_value: f64,
    pub value: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SocialValuation {
    pub value: f64,
    pub breakdown: BTreeMap<SocialPlatform, SocialLine>,
}

impl SocialValuation {
    /// Platforms that actually contributed, in display order.
    pub fn contributing(&self) -> impl Iterator<Item = (&SocialPlatform, &SocialLine)> {
        self.breakdown.iter().filter(|(_, line)| line.value > 0.0)
    }
}

/// All sub-valuations plus the combined estimate for one input snapshot.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ValuationResult {
    pub low: f64,
    pub high: f64,
    pub point_estimate: f64,
    pub revenue: ArrValuation,
    pub traction: TractionValuation,
    pub projected_arr: ArrValuation,
    pub social: SocialValuation,
}

fn arr_valuation(monthly_revenue: f64, multiple: f64) -> ArrValuation {
    if monthly_revenue.is_nan() || monthly_revenue <= 0.0 {
        return ArrValuation::default();
    }
    let arr = monthly_revenue * 12.0;
    ArrValuation {
        value: arr * multiple,
        multiple,
        arr,
    }
}

/// Values current MRR at the standard ARR multiple.
pub fn value_from_revenue(mrr: f64, tables: &ReferenceTables) -> ArrValuation {
    arr_valuation(mrr, tables.arr_multiple)
}

/// Values the monthly revenue implied by user traction at the same multiple
/// as [`value_from_revenue`].
pub fn project_arr(monthly_user_revenue: f64, tables: &ReferenceTables) -> ArrValuation {
    arr_valuation(monthly_user_revenue, tables.arr_multiple)
}

/// Monthly revenue expected from this month's registrations.
///
/// Without an override the category midpoint is scaled by price: cheaper
/// plans convert better, pricier ones worse, and the result never leaves the
/// category's observed range. An override is used verbatim.
pub fn value_from_traction(
    registrations: f64,
    category: AppCategory,
    avg_service_price: f64,
    conversion_override_pct: Option<f64>,
    tables: &ReferenceTables,
) -> TractionValuation {
    let registrations = registrations.max(0.0);
    let price = avg_service_price.max(0.0);
    let range = tables.category(category).conversion;

    let (base_conversion_rate, price_adjusted_conversion_rate) = match conversion_override_pct {
        Some(pct) => {
            let rate = pct / 100.0;
            (rate, rate)
        }
        None => {
            let base = range.midpoint();
            let reference = tables.reference_price;
            let factor_raw = if reference > 0.0 {
                reference / (reference + price)
            } else {
                1.0
            };
            let factor = (factor_raw * 2.0).clamp(PRICE_FACTOR_MIN, PRICE_FACTOR_MAX);
            (base, range.clamp(base * factor))
        }
    };

    let monthly_paid_conversions = registrations * price_adjusted_conversion_rate;
    let monthly_traction_revenue = monthly_paid_conversions * price;

    TractionValuation {
        value: monthly_traction_revenue,
        registrations,
        base_conversion_rate,
        price_adjusted_conversion_rate,
        avg_service_price: price,
        monthly_paid_conversions,
        monthly_traction_revenue,
    }
}

pub fn value_from_social(counts: &SocialCounts, tables: &ReferenceTables) -> SocialValuation {
    let breakdown: BTreeMap<_, _> = SocialPlatform::ALL
        .into_iter()
        .map(|platform| {
            let count = counts.count(platform).max(0.0);
            let unit_value = tables.social.unit_value(platform);
            (
                platform,
                SocialLine {
                    count,
                    unit_value,
                    value: count * unit_value,
                },
            )
        })
        .collect();

    SocialValuation {
        value: breakdown.values().map(|line| line.value).sum(),
        breakdown,
    }
}

/// Merges the sub-valuations into a point estimate and a ±10% range.
///
/// With current revenue the revenue valuation is the base and only the
/// excess of the traction projection over it is added, so the two revenue
/// signals are never summed. Social reach is always added on top.
pub fn combine(
    revenue: ArrValuation,
    traction: TractionValuation,
    projected_arr: ArrValuation,
    social: SocialValuation,
    has_current_revenue: bool,
) -> ValuationResult {
    let mut estimate = if has_current_revenue {
        let base = revenue.value;
        let excess = (projected_arr.value - base).max(0.0);
        base + excess
    } else {
        projected_arr.value
    };
    estimate += social.value;

    ValuationResult {
        low: estimate * (1.0 - RANGE_BAND),
        high: estimate * (1.0 + RANGE_BAND),
        point_estimate: estimate,
        revenue,
        traction,
        projected_arr,
        social,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables() -> ReferenceTables {
        ReferenceTables::default()
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9 * b.abs().max(1.0)
    }

    #[test]
    fn revenue_uses_six_times_arr() {
        let valuation = value_from_revenue(10_000.0, &tables());
        assert_eq!(
            valuation,
            ArrValuation {
                value: 720_000.0,
                multiple: 6.0,
                arr: 120_000.0
            }
        );
    }

    #[test]
    fn revenue_is_zeroed_for_non_positive_mrr() {
        assert_eq!(value_from_revenue(0.0, &tables()), ArrValuation::default());
        assert_eq!(value_from_revenue(-25.0, &tables()), ArrValuation::default());
        assert_eq!(value_from_revenue(f64::NAN, &tables()), ArrValuation::default());
    }

    #[test]
    fn traction_at_reference_price_keeps_midpoint() {
        let traction = value_from_traction(5_000.0, AppCategory::B2bSaas, 50.0, None, &tables());
        assert_eq!(traction.base_conversion_rate, 0.04);
        assert_eq!(traction.price_adjusted_conversion_rate, 0.04);
        assert_eq!(traction.monthly_paid_conversions, 200.0);
        assert_eq!(traction.monthly_traction_revenue, 10_000.0);
        assert_eq!(traction.value, 10_000.0);

        let projected = project_arr(traction.value, &tables());
        assert_eq!(projected.value, 720_000.0);
    }

    #[test]
    fn cheap_plans_convert_better_up_to_the_category_max() {
        // price 0 gives factor 2.0, clamped to 1.5, then the rate clamps to max
        let free = value_from_traction(1_000.0, AppCategory::B2bSaas, 0.0, None, &tables());
        assert!(approx(free.price_adjusted_conversion_rate, 0.06));
        assert_eq!(free.monthly_traction_revenue, 0.0);

        let cheap = value_from_traction(1_000.0, AppCategory::B2bSaas, 10.0, None, &tables());
        assert!(cheap.price_adjusted_conversion_rate > 0.04);
    }

    #[test]
    fn expensive_plans_bottom_out_at_the_category_min() {
        let pricey =
            value_from_traction(1_000.0, AppCategory::MobileApp, 10_000.0, None, &tables());
        assert_eq!(pricey.price_adjusted_conversion_rate, 0.01);
    }

    #[test]
    fn override_skips_price_adjustment() {
        let traction =
            value_from_traction(2_000.0, AppCategory::Game, 500.0, Some(12.5), &tables());
        assert_eq!(traction.base_conversion_rate, 0.125);
        assert_eq!(traction.price_adjusted_conversion_rate, 0.125);
        assert_eq!(traction.monthly_paid_conversions, 250.0);
        assert_eq!(traction.value, 125_000.0);
    }

    #[test]
    fn negative_traction_inputs_count_as_zero() {
        let traction = value_from_traction(-10.0, AppCategory::Other, -5.0, None, &tables());
        assert_eq!(traction.registrations, 0.0);
        assert_eq!(traction.avg_service_price, 0.0);
        assert_eq!(traction.value, 0.0);
    }

    #[test]
    fn social_sums_every_platform() {
        let counts = SocialCounts {
            linkedin_followers: 1_000.0,
            x_followers: 2_000.0,
            reddit_karma: 10_000.0,
            youtube_subscribers: 500.0,
            instagram_followers: 100.0,
            tiktok_followers: 0.0,
        };
        let social = value_from_social(&counts, &tables());
        let linkedin = &social.breakdown[&SocialPlatform::Linkedin];
        assert_eq!(linkedin.value, 2_000.0);
        assert_eq!(social.breakdown[&SocialPlatform::Tiktok].value, 0.0);
        assert!(approx(social.value, 2_000.0 + 3_000.0 + 1_000.0 + 600.0 + 90.0));

        let contributing: Vec<_> = social.contributing().map(|(p, _)| *p).collect();
        assert_eq!(
            contributing,
            vec![
                SocialPlatform::Linkedin,
                SocialPlatform::X,
                SocialPlatform::Instagram,
                SocialPlatform::Youtube,
                SocialPlatform::Reddit
            ]
        );
    }

    #[test]
    fn combine_adds_only_the_projection_excess() {
        let tables = tables();
        let revenue = value_from_revenue(1_000.0, &tables);
        let projected = project_arr(3_000.0, &tables);
        let social = value_from_social(
            &SocialCounts {
                linkedin_followers: 100.0,
                ..SocialCounts::default()
            },
            &tables,
        );

        let result = combine(
            revenue.clone(),
            TractionValuation::default(),
            projected.clone(),
            social,
            true,
        );
        assert_eq!(result.point_estimate, projected.value + 200.0);
        assert!(approx(result.low, result.point_estimate * 0.9));
        assert!(approx(result.high, result.point_estimate * 1.1));
    }

    #[test]
    fn combine_keeps_revenue_when_projection_is_lower() {
        let tables = tables();
        let result = combine(
            value_from_revenue(5_000.0, &tables),
            TractionValuation::default(),
            project_arr(100.0, &tables),
            SocialValuation::default(),
            true,
        );
        assert_eq!(result.point_estimate, 360_000.0);
    }

    #[test]
    fn combine_without_revenue_uses_projection() {
        let tables = tables();
        let result = combine(
            ArrValuation::default(),
            TractionValuation::default(),
            project_arr(10_000.0, &tables),
            SocialValuation::default(),
            false,
        );
        assert_eq!(result.point_estimate, 720_000.0);
    }

    #[test]
    fn tuned_multiple_applies_to_both_revenue_valuations() {
        let tables = ReferenceTables {
            arr_multiple: 4.0,
            ..ReferenceTables::default()
        };
        assert_eq!(value_from_revenue(1_000.0, &tables).value, 48_000.0);
        assert_eq!(project_arr(1_000.0, &tables).value, 48_000.0);
    }
}
