//! Proposal export.
//!
//! A planned trip can be downloaded as a plain-text summary or as a styled
//! HTML document that also carries the itinerary and the cost breakdown.

pub mod html;
pub mod text;

use serde::Deserialize;

use crate::error::Result;
use crate::planner::TripPlan;

pub use html::render_html;
pub use text::render_text;

/// Output format of a proposal download
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProposalFormat {
    #[default]
    Text,
    Html,
}

impl ProposalFormat {
    pub fn content_type(self) -> &'static str {
        match self {
            ProposalFormat::Text => "text/plain; charset=utf-8",
            ProposalFormat::Html => "text/html; charset=utf-8",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ProposalFormat::Text => "txt",
            ProposalFormat::Html => "html",
        }
    }
}

/// A rendered proposal ready to be sent as a download
#[derive(Debug, Clone)]
pub struct RenderedProposal {
    pub format: ProposalFormat,
    pub filename: String,
    pub body: String,
}

/// Render a plan in the requested format
pub fn render(plan: &TripPlan, format: ProposalFormat) -> Result<RenderedProposal> {
    let body = match format {
        ProposalFormat::Text => render_text(plan),
        ProposalFormat::Html => render_html(plan)?,
    };

    Ok(RenderedProposal {
        format,
        filename: format!("trip-proposal-{}.{}", plan.date.format("%Y-%m-%d"), format.extension()),
        body,
    })
}
