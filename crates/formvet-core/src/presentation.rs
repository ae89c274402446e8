//! Error-display decisions.
//!
//! Given the error count the host last rendered and a field's new report,
//! decide what the inline error UI should do: error class on or off, which
//! message texts to show, panel visibility, and whether to animate a grow
//! from the old count to the new one. The engine keeps no display state;
//! the previous count is whatever the host last painted.

use serde::Serialize;

use crate::config::Config;
use crate::report::FieldReport;

/// What the error panel should do with its visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PanelVisibility {
    /// Panel must end up visible.
    Show,
    /// Panel must end up hidden (or removed when there are no messages).
    Hide,
    /// Leave visibility as it is.
    Unchanged,
}

/// Animate the panel growing from the previously rendered error count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Grow {
    pub from: usize,
    pub to: usize,
}

/// The decided display delta for one field.
///
/// No errors decode as "remove all": class off, no messages, panel hidden.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Presentation {
    pub apply_error_class: bool,
    pub messages: Vec<String>,
    pub visibility: PanelVisibility,
    pub animation: Option<Grow>,
}

/// Decide the display delta for a field's new report.
///
/// A field whose panel was empty starts hidden regardless of the new count;
/// the reveal, when errors appeared, is the grow animation's job. A panel
/// that was already showing errors stays put unless it grew. Shrinking
/// redraws without animating.
#[must_use]
pub fn decide(
    previous_error_count: usize,
    report: &FieldReport,
    force_error_text: bool,
    config: &Config,
) -> Presentation {
    let count = report.error_count();
    let apply_error_class = count > 0 && config.display_styling;
    let messages = if count > 0 && (config.display_text || force_error_text) {
        report.errors.iter().map(|error| error.message.clone()).collect()
    } else {
        Vec::new()
    };
    let visibility = if count == 0 || previous_error_count == 0 {
        PanelVisibility::Hide
    } else if count > previous_error_count {
        PanelVisibility::Show
    } else {
        PanelVisibility::Unchanged
    };
    let animation = (count > 0 && previous_error_count < count).then_some(Grow {
        from: previous_error_count,
        to: count,
    });
    Presentation {
        apply_error_class,
        messages,
        visibility,
        animation,
    }
}
