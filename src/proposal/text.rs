//! Plain-text proposal

use crate::planner::TripPlan;

/// Render the plain-text proposal
pub fn render_text(plan: &TripPlan) -> String {
    let mut lines = vec![
        "TRIP PROPOSAL".to_string(),
        "=============".to_string(),
        String::new(),
        format!("Reference: {}", plan.reference),
        format!("Date: {}", plan.date.format("%-m/%-d/%Y")),
        format!("Duration: {} hours", plan.duration),
        format!("Participants: {}", plan.participants.get()),
        format!("Designation: {}", plan.designation),
        String::new(),
        "Activities:".to_string(),
    ];
    lines.extend(plan.activities.iter().map(|a| format!("- {}", a.tag)));
    lines.push(String::new());

    if plan.has_discount() {
        lines.push(format!("Subtotal: {}", plan.money(plan.discount.subtotal)));
        lines.push(format!(
            "Discount ({}%): -{}",
            plan.discount.discount_percent.normalize(),
            plan.money(plan.discount.discount)
        ));
    }
    lines.push(format!("Total Cost: {}", plan.money(plan.discount.total)));

    if !plan.notes.is_empty() {
        lines.push(String::new());
        lines.push("Notes:".to_string());
        lines.push(plan.notes.clone());
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated on: {}",
        plan.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proposal::tests::sample_plan;
    use rust_decimal_macros::dec;

    #[test]
    fn test_render_text() {
        let plan = sample_plan(dec!(0), "");
        let text = render_text(&plan);

        assert!(text.starts_with("TRIP PROPOSAL\n=============\n"));
        assert!(text.contains("Date: 5/1/2030\n"));
        assert!(text.contains("Duration: 8 hours\n"));
        assert!(text.contains("Participants: 2\n"));
        assert!(text.contains("Designation: Finance team\n"));
        assert!(text.contains("Activities:\n- sightseeing\n- meals\n"));
        assert!(text.contains("Total Cost: ₹190\n"));
        assert!(text.contains("Generated on: 2030-04-20 10:15:00 UTC"));
        assert!(!text.contains("Subtotal"));
        assert!(!text.contains("Notes:"));
    }

    #[test]
    fn test_render_text_with_discount_and_notes() {
        let plan = sample_plan(dec!(10), "Vegetarian lunch for 2");
        let text = render_text(&plan);

        assert!(text.contains("Subtotal: ₹190\n"));
        assert!(text.contains("Discount (10%): -₹19\n"));
        assert!(text.contains("Total Cost: ₹171\n"));
        assert!(text.contains("Notes:\nVegetarian lunch for 2\n"));
    }
}
