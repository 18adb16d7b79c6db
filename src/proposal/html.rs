//! Styled HTML proposal, rendered with askama

use askama::Template;

use crate::models::TripDuration;
use crate::planner::TripPlan;

struct TimelineRow {
    time: String,
    title: String,
    description: String,
}

struct BreakdownRow {
    label: String,
    amount: String,
}

#[derive(Template)]
#[template(path = "proposal.html")]
struct ProposalTemplate {
    reference: String,
    formatted_date: String,
    duration: TripDuration,
    participants: u32,
    designation: String,
    activities: Vec<String>,
    notes: String,
    has_notes: bool,
    timeline: Vec<TimelineRow>,
    breakdown: Vec<BreakdownRow>,
    has_discount: bool,
    subtotal: String,
    discount_label: String,
    discount_amount: String,
    total: String,
    generated_at: String,
}

/// Render the styled proposal document
pub fn render_html(plan: &TripPlan) -> Result<String, askama::Error> {
    let symbol = &plan.currency_symbol;

    let template = ProposalTemplate {
        reference: plan.reference.to_string(),
        formatted_date: plan.formatted_date(),
        duration: plan.duration,
        participants: plan.participants.get(),
        designation: plan.designation.clone(),
        activities: plan.activities.iter().map(|a| a.display_name.clone()).collect(),
        has_notes: !plan.notes.is_empty(),
        notes: plan.notes.clone(),
        timeline: plan
            .itinerary
            .iter()
            .map(|entry| TimelineRow {
                time: entry.start.label(),
                title: entry.title.clone(),
                description: entry.description.clone(),
            })
            .collect(),
        breakdown: plan
            .quote
            .breakdown
            .line_items
            .iter()
            .map(|item| BreakdownRow {
                label: item.label.clone(),
                amount: format!("{}{}", symbol, item.amount.normalize()),
            })
            .collect(),
        has_discount: plan.has_discount(),
        subtotal: plan.money(plan.discount.subtotal),
        discount_label: format!("Discount ({}%)", plan.discount.discount_percent.normalize()),
        discount_amount: format!("-{}", plan.money(plan.discount.discount)),
        total: plan.money(plan.discount.total),
        generated_at: plan.generated_at.format("%B %-d, %Y %H:%M UTC").to_string(),
    };

    template.render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proposal::tests::sample_plan;
    use rust_decimal_macros::dec;

    #[test]
    fn test_render_html_contents() {
        let plan = sample_plan(dec!(0), "");
        let html = render_html(&plan).unwrap();

        assert!(html.contains("Wednesday, May 1, 2030"));
        assert!(html.contains("Finance team"));
        assert!(html.contains("Sightseeing Tour"));
        assert!(html.contains("9:30 AM"));
        assert!(html.contains("5:00 PM"));
        assert!(html.contains("Base Cost (2 × ₹50)"));
        assert!(html.contains("₹190"));
        assert!(!html.contains("Discount ("));
        assert!(!html.contains("Notes"));
    }

    #[test]
    fn test_render_html_discount_and_notes() {
        let plan = sample_plan(dec!(10), "Meet at the north gate");
        let html = render_html(&plan).unwrap();

        assert!(html.contains("Discount (10%)"));
        assert!(html.contains("-₹19"));
        assert!(html.contains("₹171"));
        assert!(html.contains("Meet at the north gate"));
    }

    #[test]
    fn test_render_html_escapes_user_text() {
        let mut plan = sample_plan(dec!(0), "");
        plan.designation = "<script>alert(1)</script>".to_string();
        let html = render_html(&plan).unwrap();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
