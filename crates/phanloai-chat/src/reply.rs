use phanloai_classify::{Category, ModelKind};

/// Fixed apology substituted when the classification service fails.
pub const DEGRADED_REPLY: &str =
    "Sorry, I couldn't reach the classification service right now. Please try again in a moment.";

/// Build the assistant reply for a successful classification.
///
/// The label arrives in its diacritic-stripped API form and is resolved
/// to the display form through the static category table. A label outside
/// the table passes through verbatim and stands in for its own
/// description.
pub fn format_reply(model: ModelKind, api_label: &str) -> String {
    let (display, description) = match Category::from_api_label(api_label) {
        Some(category) => (category.display_label(), category.description()),
        None => (api_label, api_label),
    };

    format!(
        "Based on the {} model, your message falls under \"{}\" ({}).",
        model.as_str(),
        display,
        description
    )
}
