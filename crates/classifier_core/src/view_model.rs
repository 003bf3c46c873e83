use crate::{AppState, ClassificationResult, JobRecord, SubmitOutcome, ViewState};

pub const LOW_CONFIDENCE_ADVISORY: &str =
    "Low confidence in prediction. This job may still be suspicious.";

const SUBMIT_LABEL: &str = "Classify Job Posting";
const SUBMIT_LABEL_LOADING: &str = "Analyzing...";
const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppViewModel {
    pub form: JobRecord,
    pub submit_enabled: bool,
    pub is_loading: bool,
    pub submit_label: &'static str,
    pub result: Option<ResultPanelView>,
    pub error: Option<String>,
}

/// Which visual treatment a verdict gets. Anything other than a "Real"
/// verdict is rendered as suspicious.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerdictTrack {
    Genuine,
    Suspicious,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityView {
    /// Two decimals and a percent sign, or "N/A".
    pub text: String,
    /// Bar width in percent, clamped to 0..=100. Absent values draw empty.
    pub fill: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultPanelView {
    pub track: VerdictTrack,
    pub headline: String,
    pub real_probability: ProbabilityView,
    pub fake_probability: ProbabilityView,
    pub confidence_text: String,
    pub advisory: Option<&'static str>,
}

impl AppViewModel {
    pub(crate) fn from_state(state: &AppState) -> Self {
        let is_loading = *state.view_state() == ViewState::Loading;
        let (result, error) = match state.view_state() {
            ViewState::Success(result) => (Some(ResultPanelView::from_result(result)), None),
            ViewState::Failure(message) => (None, Some(message.clone())),
            ViewState::Idle | ViewState::Loading => (None, None),
        };

        Self {
            form: state.form().clone(),
            submit_enabled: state.check_submit() == SubmitOutcome::Started,
            is_loading,
            submit_label: if is_loading {
                SUBMIT_LABEL_LOADING
            } else {
                SUBMIT_LABEL
            },
            result,
            error,
        }
    }
}

impl ResultPanelView {
    pub fn from_result(result: &ClassificationResult) -> Self {
        let track = if result.is_real() {
            VerdictTrack::Genuine
        } else {
            VerdictTrack::Suspicious
        };
        let token = result
            .prediction
            .as_ref()
            .map(|prediction| prediction.to_string().to_uppercase())
            .unwrap_or_else(|| "UNKNOWN".to_string());

        Self {
            track,
            headline: format!("This job posting appears to be {token}"),
            real_probability: ProbabilityView::new(result.real_probability),
            fake_probability: ProbabilityView::new(result.fake_probability),
            confidence_text: result
                .confidence
                .map(|confidence| format!("{confidence:.1}%"))
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            advisory: result.is_low_confidence().then_some(LOW_CONFIDENCE_ADVISORY),
        }
    }
}

impl ProbabilityView {
    fn new(value: Option<f64>) -> Self {
        match value {
            Some(percent) => Self {
                text: format!("{percent:.2}%"),
                fill: percent.clamp(0.0, 100.0),
            },
            None => Self {
                text: NOT_AVAILABLE.to_string(),
                fill: 0.0,
            },
        }
    }
}
