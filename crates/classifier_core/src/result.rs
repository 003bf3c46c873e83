use std::fmt;

/// Confidence (in percent) below which a successful verdict carries an advisory.
pub const LOW_CONFIDENCE_THRESHOLD: f64 = 40.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prediction {
    Real,
    Fake,
    /// Any other token the service sent, kept verbatim for display.
    Other(String),
}

impl Prediction {
    /// Maps a wire token onto the canonical verdicts, ignoring ASCII case.
    pub fn from_wire(token: &str) -> Self {
        let trimmed = token.trim();
        if trimmed.eq_ignore_ascii_case("real") {
            Prediction::Real
        } else if trimmed.eq_ignore_ascii_case("fake") {
            Prediction::Fake
        } else {
            Prediction::Other(token.to_string())
        }
    }

    pub fn is_real(&self) -> bool {
        matches!(self, Prediction::Real)
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Prediction::Real => write!(f, "Real"),
            Prediction::Fake => write!(f, "Fake"),
            Prediction::Other(token) => write!(f, "{token}"),
        }
    }
}

/// Normalized verdict. `None` means the service did not send a usable value,
/// which is distinct from a reported `0.0`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClassificationResult {
    pub prediction: Option<Prediction>,
    pub real_probability: Option<f64>,
    pub fake_probability: Option<f64>,
    pub confidence: Option<f64>,
}

impl ClassificationResult {
    pub fn is_real(&self) -> bool {
        self.prediction.as_ref().is_some_and(Prediction::is_real)
    }

    /// True only when a confidence value is present and below the threshold.
    pub fn is_low_confidence(&self) -> bool {
        self.confidence
            .is_some_and(|confidence| confidence < LOW_CONFIDENCE_THRESHOLD)
    }
}
