//! One-line explanations under each valuation method.

use crate::domain::evaluation::{ArrValuation, SocialValuation, TractionValuation};
use crate::util::format::{
    format_count, format_currency, format_grouped, format_unit_price, to_fixed,
};

pub fn revenue_detail(revenue: &ArrValuation) -> String {
    if revenue.value > 0.0 {
        format!(
            "{} ARR × {}x multiple",
            format_currency(revenue.arr),
            revenue.multiple
        )
    } else {
        "No current recurring revenue".to_string()
    }
}

pub fn projection_detail(traction: &TractionValuation, projected: &ArrValuation) -> String {
    if projected.value > 0.0 {
        format!(
            "{} regs/mo × {}% conversions × ${} per month × 12 months × {}x multiple",
            format_count(traction.registrations),
            to_fixed(traction.price_adjusted_conversion_rate * 100.0, 2),
            format_count(traction.avg_service_price),
            projected.multiple
        )
    } else {
        "No user projection available".to_string()
    }
}

pub fn social_detail(social: &SocialValuation) -> String {
    if social.value <= 0.0 {
        return "Brand value from social media presence".to_string();
    }
    social
        .contributing()
        .map(|(platform, line)| {
            format!(
                "{}: {} × ${} = {}",
                platform.label(),
                format_grouped(line.count, 0),
                format_unit_price(line.unit_value),
                format_currency(line.value)
            )
        })
        .collect::<Vec<_>>()
        .join(" + ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{AppCategory, SocialCounts};
    use crate::domain::evaluation::{
        project_arr, value_from_revenue, value_from_social, value_from_traction,
    };
    use crate::domain::ReferenceTables;

    #[test]
    fn revenue_line() {
        let tables = ReferenceTables::default();
        assert_eq!(
            revenue_detail(&value_from_revenue(10_000.0, &tables)),
            "$120,000 ARR × 6x multiple"
        );
        assert_eq!(
            revenue_detail(&value_from_revenue(0.0, &tables)),
            "No current recurring revenue"
        );
    }

    #[test]
    fn projection_line() {
        let tables = ReferenceTables::default();
        let traction = value_from_traction(5_000.0, AppCategory::B2bSaas, 50.0, None, &tables);
        let projected = project_arr(traction.value, &tables);
        assert_eq!(
            projection_detail(&traction, &projected),
            "5,000 regs/mo × 4.00% conversions × $50 per month × 12 months × 6x multiple"
        );

        let none = value_from_traction(0.0, AppCategory::Game, 0.0, None, &tables);
        assert_eq!(
            projection_detail(&none, &project_arr(none.value, &tables)),
            "No user projection available"
        );
    }

    #[test]
    fn social_line_lists_contributing_platforms() {
        let tables = ReferenceTables::default();
        let social = value_from_social(
            &SocialCounts {
                linkedin_followers: 2_500.0,
                reddit_karma: 12_000.0,
                ..SocialCounts::default()
            },
            &tables,
        );
        assert_eq!(
            social_detail(&social),
            "LinkedIn: 2,500 × $2.0 = $5,000 + Reddit: 12,000 × $0.1 = $1,200"
        );
        assert_eq!(
            social_detail(&SocialValuation::default()),
            "Brand value from social media presence"
        );
    }
}
