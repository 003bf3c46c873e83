use std::fmt::Write as _;

use classifier_core::{AppViewModel, JobField, ProbabilityView, ResultPanelView, VerdictTrack};

const BAR_WIDTH: usize = 30;

/// Renders the whole screen as plain text.
pub fn render(view: &AppViewModel) -> String {
    let mut out = String::new();
    out.push_str("=== Job Posting Classifier ===\n");

    for field in JobField::ALL {
        let marker = if field.is_required() { " *" } else { "" };
        let value = view.form.get(field);
        let shown = if value.is_empty() {
            format!("({})", field.placeholder())
        } else {
            value.replace('\n', "\n    ")
        };
        let _ = writeln!(out, "{}{} [{}]\n    {}", field.label(), marker, field.key(), shown);
    }

    let state = if view.submit_enabled { "" } else { " (disabled)" };
    let _ = writeln!(out, "\n> {}{}", view.submit_label, state);

    if let Some(panel) = &view.result {
        render_result(&mut out, panel);
    }
    if let Some(message) = &view.error {
        let _ = writeln!(out, "\nError: {message}\n  (type `dismiss` to close)");
    }
    out
}

fn render_result(out: &mut String, panel: &ResultPanelView) {
    let badge = match panel.track {
        VerdictTrack::Genuine => "[ OK ]",
        VerdictTrack::Suspicious => "[ !! ]",
    };
    let _ = writeln!(out, "\n--- Classification Result ---");
    let _ = writeln!(out, "{badge} {}", panel.headline);
    let _ = writeln!(
        out,
        "Real Job Probability  {}",
        probability_line(&panel.real_probability)
    );
    let _ = writeln!(
        out,
        "Fake Job Probability  {}",
        probability_line(&panel.fake_probability)
    );
    let _ = writeln!(out, "Confidence Level: {}", panel.confidence_text);
    if let Some(advisory) = panel.advisory {
        let _ = writeln!(out, "Warning: {advisory}");
    }
}

fn probability_line(probability: &ProbabilityView) -> String {
    let filled = ((probability.fill / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!(
        "[{}{}] {}",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        probability.text
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use classifier_core::{update, AppState, ClassificationResult, Msg, Prediction};

    fn settled(result: ClassificationResult) -> AppViewModel {
        let (state, _) = update(AppState::new(), Msg::SampleRequested);
        let (state, _) = update(state, Msg::SubmitClicked);
        update(
            state,
            Msg::ClassificationSucceeded {
                generation: 0,
                result,
            },
        )
        .0
        .view()
    }

    #[test]
    fn empty_form_shows_placeholders_and_disabled_submit() {
        let text = render(&AppState::new().view());
        assert!(text.contains("Job Title * [title]"));
        assert!(text.contains("(e.g., Software Engineer, Marketing Manager)"));
        assert!(text.contains("> Classify Job Posting (disabled)"));
        assert!(!text.contains("Classification Result"));
    }

    #[test]
    fn low_confidence_fake_renders_warning_and_bars() {
        let text = render(&settled(ClassificationResult {
            prediction: Some(Prediction::Fake),
            real_probability: Some(10.0),
            fake_probability: Some(90.0),
            confidence: Some(30.0),
        }));

        assert!(text.contains("[ !! ] This job posting appears to be FAKE"));
        assert!(text.contains(&format!("[{}{}] 90.00%", "#".repeat(27), "-".repeat(3))));
        assert!(text.contains("Confidence Level: 30.0%"));
        assert!(text.contains("Warning: Low confidence in prediction."));
    }

    #[test]
    fn missing_numbers_render_as_not_available() {
        let text = render(&settled(ClassificationResult {
            prediction: Some(Prediction::Real),
            ..ClassificationResult::default()
        }));

        assert!(text.contains("[ OK ] This job posting appears to be REAL"));
        assert!(text.contains(&format!("[{}] N/A", "-".repeat(BAR_WIDTH))));
        assert!(text.contains("Confidence Level: N/A"));
        assert!(!text.contains("Warning:"));
    }
}
