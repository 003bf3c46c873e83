use classifier_core::{ClassificationResult, Prediction};
use serde_json::Value;

/// Projects an untrusted response body onto [`ClassificationResult`].
///
/// Each field is read on its own. A missing field, or one of the wrong JSON
/// type, becomes `None`; numbers sent as strings are not coerced.
pub fn normalize(raw: &Value) -> ClassificationResult {
    ClassificationResult {
        prediction: raw
            .get("prediction")
            .and_then(Value::as_str)
            .map(Prediction::from_wire),
        real_probability: number_field(raw, "real_probability"),
        fake_probability: number_field(raw, "fake_probability"),
        confidence: number_field(raw, "confidence"),
    }
}

fn number_field(raw: &Value, key: &str) -> Option<f64> {
    raw.get(key)
        .filter(|value| value.is_number())
        .and_then(Value::as_f64)
        .filter(|value| value.is_finite())
}
