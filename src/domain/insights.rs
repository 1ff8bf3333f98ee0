//! Narrative observations shown under the valuation.
//!
//! Each entry starts with a `**Heading:**` marker. The order is part of the
//! output: financial, ARR scale, funnel, market, social, costs, closing.

use super::confidence::{profit_margin, visitor_registration_rate, ConfidenceResult};
use super::entities::{AppCategory, NormalizedInput};
use super::evaluation::ValuationResult;
use crate::util::format::{format_count, to_fixed};

/// Break-even horizons beyond this many months are not worth mentioning.
const BREAK_EVEN_HORIZON_MONTHS: f64 = 12.0;

pub fn market_strategy(category: AppCategory) -> &'static str {
    match category {
        AppCategory::B2bSaas => "B2B SaaS typically commands higher valuations due to predictable revenue and lower churn. Focus on enterprise features and security compliance.",
        AppCategory::B2cApp => "Consumer apps require strong user engagement and retention metrics. Focus on DAU/MAU ratios and in-app purchase optimization.",
        AppCategory::MobileApp => "Mobile apps benefit from app store optimization and viral growth mechanisms. Consider implementing referral programs.",
        AppCategory::Game => "Gaming apps need strong retention and monetization metrics. Focus on player lifetime value and engagement analytics.",
        AppCategory::Other => "Consider specializing in a specific vertical to command higher valuations and clearer market positioning.",
    }
}

/// Months of profit needed to cover one month of fixed costs, when that is
/// known and within a year.
pub fn break_even_months(input: &NormalizedInput) -> Option<u32> {
    if input.mrp <= 0.0 || input.fixed_monthly_costs <= 0.0 {
        return None;
    }
    let months = (input.fixed_monthly_costs / input.mrp).ceil();
    (months > 0.0 && months <= BREAK_EVEN_HORIZON_MONTHS).then_some(months as u32)
}

pub fn generate_insights(
    input: &NormalizedInput,
    result: &ValuationResult,
    confidence: &ConfidenceResult,
) -> Vec<String> {
    let mut insights = Vec::new();

    if input.mrr > 0.0 {
        financial_insights(input, &mut insights);
        if let Some(line) = arr_scale_insight(result.revenue.arr) {
            insights.push(line);
        }
    } else {
        insights.push(
            "**Pre-Revenue Strategy:** Focus on product-market fit validation, user engagement metrics, and developing a clear monetization strategy before seeking significant funding.".to_string(),
        );
    }

    if input.registrations > 0.0 {
        funnel_insights(input, &mut insights);
    }

    insights.push(format!(
        "**Market Strategy:** {}",
        market_strategy(input.category)
    ));

    insights.push(social_insight(input.social.total_reach()));

    if let Some(line) = cost_insight(input) {
        insights.push(line);
    }

    insights.push(closing_insight(confidence.score));
    insights
}

fn financial_insights(input: &NormalizedInput, insights: &mut Vec<String>) {
    let Some(margin) = profit_margin(input) else {
        insights.push(
            "**Revenue Without Profit:** Focus on achieving profitability through cost optimization or pricing adjustments. Sustainable growth requires positive unit economics.".to_string(),
        );
        return;
    };

    let shown = to_fixed(margin, 1);
    let line = if margin >= 30.0 {
        format!(
            "**Exceptional Unit Economics:** Your {shown}% profit margin is outstanding. This indicates strong pricing power and operational efficiency that investors highly value."
        )
    } else if margin >= 20.0 {
        format!(
            "**Strong Profitability:** Your {shown}% profit margin demonstrates healthy unit economics. Focus on scaling while maintaining these margins."
        )
    } else if margin >= 10.0 {
        format!(
            "**Moderate Profitability:** Your {shown}% profit margin shows promise. Consider optimizing costs or increasing pricing to improve margins before scaling."
        )
    } else {
        format!(
            "**Low Margins:** Your {shown}% profit margin needs improvement. Focus on cost optimization or pricing strategy before aggressive scaling."
        )
    };
    insights.push(line);

    if let Some(months) = break_even_months(input) {
        insights.push(format!(
            "**Cash Flow Positive:** With current profitability, you could cover fixed costs in {months} months, indicating strong cash generation potential."
        ));
    }
}

fn arr_scale_insight(arr: f64) -> Option<String> {
    let thousands = to_fixed(arr / 1000.0, 0);
    if arr >= 120_000.0 {
        Some(format!(
            "**Scale Achieved:** Your ${thousands}K ARR puts you in a strong position for Series A funding or acquisition discussions."
        ))
    } else if arr >= 60_000.0 {
        Some(format!(
            "**Growth Stage:** Your ${thousands}K ARR shows solid traction. Focus on accelerating growth to reach $100K+ ARR."
        ))
    } else if arr >= 12_000.0 {
        Some(format!(
            "**Early Revenue:** Your ${thousands}K ARR is a good start. Aim for consistent month-over-month growth of 15-20%."
        ))
    } else {
        None
    }
}

fn funnel_insights(input: &NormalizedInput, insights: &mut Vec<String>) {
    let rate = visitor_registration_rate(input);
    let shown = to_fixed(rate, 2);
    if rate >= 5.0 {
        insights.push(format!(
            "**Excellent Conversion Funnel:** Your {shown}% visitor-to-registration rate is exceptional. This indicates strong product-market fit and effective messaging."
        ));
    } else if rate >= 2.0 {
        insights.push(format!(
            "**Good Conversion Rate:** Your {shown}% visitor-to-registration rate is solid. Test A/B improvements to push toward 5%+ conversion."
        ));
    } else if rate >= 1.0 {
        insights.push(format!(
            "**Average Conversion:** Your {shown}% visitor-to-registration rate has room for improvement. Focus on value proposition clarity and user experience."
        ));
    } else if rate > 0.0 {
        insights.push(format!(
            "**Low Conversion Rate:** Your {shown}% conversion needs significant improvement. Review your landing page, messaging, and user onboarding flow."
        ));
    }

    // The conversion override doubles as the observed paid rate here.
    let paid_rate = input.conversion_override_pct.unwrap_or(0.0);
    if paid_rate > 0.0 {
        let line = if paid_rate >= 5.0 {
            format!(
                "**Strong Monetization:** Your {paid_rate}% registration-to-paid conversion is excellent. This shows clear value delivery and pricing alignment."
            )
        } else if paid_rate >= 2.0 {
            format!(
                "**Good Monetization:** Your {paid_rate}% registration-to-paid conversion is decent. Consider optimizing onboarding and free trial experience."
            )
        } else {
            format!(
                "**Conversion Challenge:** Your {paid_rate}% registration-to-paid rate suggests users aren't seeing enough value. Improve onboarding and demonstrate clear ROI."
            )
        };
        insights.push(line);
    }
}

fn social_insight(reach: f64) -> String {
    let shown = format_count(reach);
    if reach > 10_000.0 {
        format!(
            "**Strong Brand Asset:** Your {shown} total followers represent significant marketing leverage. This audience can drive organic growth and reduce customer acquisition costs."
        )
    } else if reach > 5_000.0 {
        format!(
            "**Growing Brand Presence:** Your {shown} followers show good social proof. Focus on content strategy to reach 10K+ for maximum impact."
        )
    } else if reach > 1_000.0 {
        format!(
            "**Building Community:** Your {shown} followers are a good start. Consistent content creation and engagement can significantly boost your brand value."
        )
    } else {
        "**Content Strategy Opportunity:** Building a strong social media presence (target 5K+ followers) can reduce marketing costs and improve valuation multiples.".to_string()
    }
}

fn cost_insight(input: &NormalizedInput) -> Option<String> {
    if input.fixed_monthly_costs <= 0.0 || input.mrr <= 0.0 {
        return None;
    }
    let ratio = input.fixed_monthly_costs / input.mrr * 100.0;
    let shown = to_fixed(ratio, 1);
    let line = if ratio <= 30.0 {
        format!(
            "**Efficient Operations:** Your fixed costs represent only {shown}% of revenue, indicating excellent operational efficiency and scalability potential."
        )
    } else if ratio <= 50.0 {
        format!(
            "**Moderate Cost Structure:** Fixed costs at {shown}% of revenue are manageable but have room for optimization as you scale."
        )
    } else {
        format!(
            "**Cost Optimization Needed:** Fixed costs at {shown}% of revenue are high. Focus on reducing infrastructure costs and improving operational efficiency."
        )
    };
    Some(line)
}

fn closing_insight(score: u32) -> String {
    if score >= 70 {
        format!(
            "**Investment Readiness:** Your strong metrics ({score}/100 confidence) position you well for fundraising. Focus on growth acceleration and market expansion."
        )
    } else if score >= 40 {
        format!(
            "**Growth Focus:** Your moderate metrics ({score}/100 confidence) suggest focusing on key performance indicators before seeking significant investment."
        )
    } else {
        format!(
            "**Foundation Building:** Your early-stage metrics ({score}/100 confidence) indicate the need to establish stronger fundamentals before scaling or fundraising."
        )
    }
}

/// Splits an insight into its bold heading and body, if it has one.
pub fn split_heading(insight: &str) -> (Option<&str>, &str) {
    insight
        .strip_prefix("**")
        .and_then(|rest| rest.split_once("**"))
        .map(|(heading, body)| (Some(heading), body.trim_start()))
        .unwrap_or((None, insight))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::confidence::score_confidence;
    use crate::domain::entities::SocialCounts;
    use crate::domain::evaluation::{value_from_revenue, ArrValuation};
    use crate::domain::reference::ReferenceTables;

    fn run(input: &NormalizedInput) -> Vec<String> {
        let tables = ReferenceTables::default();
        let result = ValuationResult {
            revenue: value_from_revenue(input.mrr, &tables),
            projected_arr: ArrValuation::default(),
            ..ValuationResult::default()
        };
        let confidence = score_confidence(input);
        generate_insights(input, &result, &confidence)
    }

    #[test]
    fn pre_revenue_opens_with_strategy_and_closes_with_foundation() {
        let insights = run(&NormalizedInput::default());
        assert!(insights[0].starts_with("**Pre-Revenue Strategy:**"));
        assert!(insights[1].starts_with("**Market Strategy:** B2B SaaS typically"));
        assert!(insights[2].starts_with("**Content Strategy Opportunity:**"));
        assert!(insights[3].contains("(10/100 confidence)"));
        assert!(insights[3].starts_with("**Foundation Building:**"));
    }

    #[test]
    fn profitable_business_with_short_break_even() {
        let input = NormalizedInput {
            mrr: 12_000.0,
            mrp: 4_000.0,
            fixed_monthly_costs: 10_000.0,
            ..NormalizedInput::default()
        };
        let insights = run(&input);
        assert!(insights[0]
            .starts_with("**Exceptional Unit Economics:** Your 33.3% profit margin"));
        assert!(insights[1].contains("cover fixed costs in 3 months"));
        assert!(insights[2].starts_with("**Scale Achieved:** Your $144K ARR"));
        assert!(insights
            .iter()
            .any(|line| line.starts_with("**Cost Optimization Needed:** Fixed costs at 83.3%")));
    }

    #[test]
    fn break_even_beyond_a_year_is_omitted() {
        let input = NormalizedInput {
            mrr: 2_000.0,
            mrp: 100.0,
            fixed_monthly_costs: 1_500.0,
            ..NormalizedInput::default()
        };
        assert_eq!(break_even_months(&input), None);
        let insights = run(&input);
        assert!(!insights.iter().any(|line| line.contains("Cash Flow Positive")));
        assert!(insights[0].starts_with("**Low Margins:** Your 5.0% profit margin"));
        assert!(insights[1].starts_with("**Early Revenue:** Your $24K ARR"));
    }

    #[test]
    fn revenue_without_profit_and_no_scale_line_below_twelve_k() {
        let input = NormalizedInput {
            mrr: 900.0,
            ..NormalizedInput::default()
        };
        let insights = run(&input);
        assert!(insights[0].starts_with("**Revenue Without Profit:**"));
        assert!(insights[1].starts_with("**Market Strategy:**"));
    }

    #[test]
    fn funnel_uses_observed_rates() {
        let input = NormalizedInput {
            registrations: 150.0,
            unique_visitors: 30_000.0,
            conversion_override_pct: Some(2.5),
            category: AppCategory::Game,
            ..NormalizedInput::default()
        };
        let insights = run(&input);
        assert!(insights[1].starts_with("**Low Conversion Rate:** Your 0.50% conversion"));
        assert!(insights[2].starts_with("**Good Monetization:** Your 2.5% registration-to-paid"));
        assert!(insights[3].contains("Gaming apps need strong retention"));
    }

    #[test]
    fn social_reach_is_rendered_with_grouping() {
        let input = NormalizedInput {
            social: SocialCounts {
                instagram_followers: 12_000.0,
                reddit_karma: 50.0,
                ..SocialCounts::default()
            },
            ..NormalizedInput::default()
        };
        let insights = run(&input);
        assert!(insights
            .iter()
            .any(|line| line.starts_with("**Strong Brand Asset:** Your 12,000.5 total followers")));
    }

    fn headings(insights: &[String]) -> Vec<&str> {
        insights
            .iter()
            .filter_map(|line| split_heading(line).0)
            .collect()
    }

    fn heading(line: &str) -> &str {
        split_heading(line).0.unwrap_or_default()
    }

    #[test]
    fn fully_scored_business_in_fixed_order() {
        let input = NormalizedInput {
            mrr: 10_000.0,
            mrp: 3_000.0,
            fixed_monthly_costs: 3_000.0,
            registrations: 1_001.0,
            unique_visitors: 20_020.0,
            conversion_override_pct: Some(5.0),
            social: SocialCounts {
                linkedin_followers: 10_001.0,
                ..SocialCounts::default()
            },
            ..NormalizedInput::default()
        };
        let insights = run(&input);
        assert_eq!(
            headings(&insights),
            vec![
                "Exceptional Unit Economics:",
                "Cash Flow Positive:",
                "Scale Achieved:",
                "Excellent Conversion Funnel:",
                "Strong Monetization:",
                "Market Strategy:",
                "Strong Brand Asset:",
                "Efficient Operations:",
                "Investment Readiness:",
            ]
        );
        assert!(insights[0].contains("Your 30.0% profit margin"));
        assert!(insights[1].contains("cover fixed costs in 1 months"));
        assert!(insights[2].contains("Your $120K ARR"));
        assert!(insights[3].contains("Your 5.00% visitor-to-registration rate"));
        assert!(insights[4].contains("Your 5% registration-to-paid conversion"));
        assert!(insights[6].contains("Your 10,001 total followers"));
        assert!(insights[7].contains("only 30.0% of revenue"));
        assert!(insights[8].contains("(100/100 confidence)"));
    }

    #[test]
    fn margin_tiers_include_their_lower_bound() {
        let cases = [
            (3_000.0, "Exceptional Unit Economics:"),
            (2_999.0, "Strong Profitability:"),
            (2_000.0, "Strong Profitability:"),
            (1_999.0, "Moderate Profitability:"),
            (1_000.0, "Moderate Profitability:"),
            (999.0, "Low Margins:"),
        ];
        for (mrp, expected) in cases {
            let input = NormalizedInput {
                mrr: 10_000.0,
                mrp,
                ..NormalizedInput::default()
            };
            let insights = run(&input);
            assert_eq!(heading(&insights[0]), expected, "mrp {mrp}");
            assert_eq!(heading(&insights[1]), "Scale Achieved:", "mrp {mrp}");
        }
    }

    #[test]
    fn arr_scale_tiers_include_their_lower_bound() {
        let cases = [
            (10_000.0, Some("Scale Achieved:")),
            (9_999.0, Some("Growth Stage:")),
            (5_000.0, Some("Growth Stage:")),
            (4_999.0, Some("Early Revenue:")),
            (1_000.0, Some("Early Revenue:")),
            (999.0, None),
        ];
        for (mrr, expected) in cases {
            let input = NormalizedInput {
                mrr,
                ..NormalizedInput::default()
            };
            let insights = run(&input);
            assert_eq!(heading(&insights[0]), "Revenue Without Profit:", "mrr {mrr}");
            match expected {
                Some(tier) => assert_eq!(heading(&insights[1]), tier, "mrr {mrr}"),
                None => assert_eq!(heading(&insights[1]), "Market Strategy:", "mrr {mrr}"),
            }
        }

        let growth = run(&NormalizedInput {
            mrr: 5_000.0,
            ..NormalizedInput::default()
        });
        assert!(growth[1].contains("Your $60K ARR shows solid traction"));
    }

    #[test]
    fn visitor_funnel_tiers_follow_pre_revenue_line() {
        let cases = [
            (600.0, "Excellent Conversion Funnel:", "6.00%"),
            (500.0, "Excellent Conversion Funnel:", "5.00%"),
            (499.0, "Good Conversion Rate:", "4.99%"),
            (200.0, "Good Conversion Rate:", "2.00%"),
            (150.0, "Average Conversion:", "1.50%"),
            (100.0, "Average Conversion:", "1.00%"),
            (99.0, "Low Conversion Rate:", "0.99%"),
        ];
        for (registrations, expected, shown) in cases {
            let input = NormalizedInput {
                registrations,
                unique_visitors: 10_000.0,
                ..NormalizedInput::default()
            };
            let insights = run(&input);
            assert_eq!(heading(&insights[0]), "Pre-Revenue Strategy:");
            assert_eq!(heading(&insights[1]), expected, "registrations {registrations}");
            assert!(insights[1].contains(shown), "registrations {registrations}");
            assert_eq!(heading(&insights[2]), "Market Strategy:");
        }
    }

    #[test]
    fn registrations_without_visitors_skip_rate_line() {
        let input = NormalizedInput {
            registrations: 400.0,
            conversion_override_pct: Some(3.0),
            ..NormalizedInput::default()
        };
        let insights = run(&input);
        assert_eq!(heading(&insights[1]), "Good Monetization:");
        assert_eq!(heading(&insights[2]), "Market Strategy:");
    }

    #[test]
    fn monetization_tiers_include_their_lower_bound() {
        let cases = [
            (5.0, "Strong Monetization:"),
            (4.9, "Good Monetization:"),
            (2.0, "Good Monetization:"),
            (1.5, "Conversion Challenge:"),
        ];
        for (pct, expected) in cases {
            let input = NormalizedInput {
                registrations: 300.0,
                unique_visitors: 10_000.0,
                conversion_override_pct: Some(pct),
                ..NormalizedInput::default()
            };
            let insights = run(&input);
            assert_eq!(heading(&insights[1]), "Good Conversion Rate:");
            assert_eq!(heading(&insights[2]), expected, "override {pct}");
            assert!(insights[2].contains(&format!("Your {pct}% registration-to-paid")));
        }

        let zero = run(&NormalizedInput {
            registrations: 300.0,
            unique_visitors: 10_000.0,
            conversion_override_pct: Some(0.0),
            ..NormalizedInput::default()
        });
        assert_eq!(heading(&zero[2]), "Market Strategy:");
    }

    #[test]
    fn social_tiers_exclude_their_lower_bound() {
        let cases = [
            (10_001.0, "Strong Brand Asset:"),
            (10_000.0, "Growing Brand Presence:"),
            (5_001.0, "Growing Brand Presence:"),
            (5_000.0, "Building Community:"),
            (1_001.0, "Building Community:"),
            (1_000.0, "Content Strategy Opportunity:"),
        ];
        for (reach, expected) in cases {
            assert_eq!(heading(&social_insight(reach)), expected, "reach {reach}");
        }
        assert!(social_insight(5_000.0).contains("Your 5,000 followers are a good start"));
    }

    #[test]
    fn cost_ratio_tiers_include_their_upper_bound() {
        let cases = [
            (3_000.0, "Efficient Operations:", "30.0%"),
            (3_001.0, "Moderate Cost Structure:", "30.0%"),
            (5_000.0, "Moderate Cost Structure:", "50.0%"),
            (5_001.0, "Cost Optimization Needed:", "50.0%"),
        ];
        for (fixed, expected, shown) in cases {
            let input = NormalizedInput {
                mrr: 10_000.0,
                fixed_monthly_costs: fixed,
                ..NormalizedInput::default()
            };
            let line = cost_insight(&input).unwrap_or_default();
            assert_eq!(heading(&line), expected, "fixed {fixed}");
            assert!(line.contains(shown), "fixed {fixed}");
        }

        let pre_revenue = NormalizedInput {
            fixed_monthly_costs: 3_000.0,
            ..NormalizedInput::default()
        };
        assert_eq!(cost_insight(&pre_revenue), None);
    }

    #[test]
    fn closing_tiers_include_their_lower_bound() {
        let investment_ready = NormalizedInput {
            mrr: 10_000.0,
            mrp: 3_000.0,
            registrations: 101.0,
            ..NormalizedInput::default()
        };
        let near_ready = NormalizedInput {
            mrr: 10_000.0,
            mrp: 3_000.0,
            social: SocialCounts {
                linkedin_followers: 1_001.0,
                ..SocialCounts::default()
            },
            ..NormalizedInput::default()
        };
        let growth = NormalizedInput {
            mrr: 1_000.0,
            mrp: 50.0,
            ..NormalizedInput::default()
        };
        let foundation = NormalizedInput {
            mrr: 1_000.0,
            social: SocialCounts {
                linkedin_followers: 1_001.0,
                ..SocialCounts::default()
            },
            ..NormalizedInput::default()
        };

        let cases = [
            (investment_ready, 70, "Investment Readiness:"),
            (near_ready, 69, "Growth Focus:"),
            (growth, 40, "Growth Focus:"),
            (foundation, 39, "Foundation Building:"),
        ];
        for (input, score, expected) in cases {
            assert_eq!(score_confidence(&input).score, score);
            let insights = run(&input);
            let last = insights.last().map(String::as_str).unwrap_or_default();
            assert_eq!(heading(last), expected, "score {score}");
            assert!(last.contains(&format!("({score}/100 confidence)")));
        }
    }

    #[test]
    fn splits_bold_heading() {
        assert_eq!(
            split_heading("**Growth Focus:** Keep going."),
            (Some("Growth Focus:"), "Keep going.")
        );
        assert_eq!(split_heading("plain"), (None, "plain"));
    }
}
