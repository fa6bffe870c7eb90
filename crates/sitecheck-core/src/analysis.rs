//! Backend verdict model
//!
//! [`AnalysisResult`] is built by the backend for every `/check` request and
//! consumed once by the client. Nothing here is validated locally: every field
//! may be missing, `null`, or of an unexpected scalar type, and display
//! fallbacks are applied only where the report defines one.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// The only status value the backend uses for a trustworthy site.
pub const GENUINE_STATUS: &str = "Genuine";

/// Shown for a missing or empty IP address.
pub const IP_FALLBACK: &str = "Not Available";

/// Shown for a missing or empty purpose.
pub const PURPOSE_FALLBACK: &str = "Not available";

/// Shown in place of a missing trust score.
pub const SCORE_FALLBACK: &str = "?";

/// Largest magnitude below which every whole f64 converts to i64 exactly
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Request body for `POST /check`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckRequest {
    pub url: String,
}

impl CheckRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Verdict returned by the backend for a submitted URL
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// The URL as echoed back by the backend
    #[serde(default, deserialize_with = "lenient_string")]
    pub url: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub domain_name: Option<String>,

    /// Resolved address; absent when DNS resolution failed
    #[serde(default, deserialize_with = "lenient_string")]
    pub ip: Option<String>,

    /// Free-form registration date
    #[serde(default, deserialize_with = "lenient_string")]
    pub registrar_date: Option<String>,

    #[serde(default, deserialize_with = "lenient_integer")]
    pub domain_age_days: Option<i64>,

    /// Expected range 0-100
    #[serde(default, deserialize_with = "lenient_number")]
    pub trust_score: Option<f64>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub status: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub reason: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub purpose: Option<String>,

    /// The response body exactly as the backend sent it
    #[serde(skip)]
    pub raw_body: Option<String>,
}

impl AnalysisResult {
    /// Parse a backend response body.
    ///
    /// The body must be a JSON object; serde would otherwise map an array
    /// onto the fields by position.
    pub fn from_json(body: &str) -> crate::Result<Self> {
        let value: Value = serde_json::from_str(body)?;
        if !value.is_object() {
            return Err(crate::Error::decode(format!(
                "expected a JSON object, got {}",
                json_kind(&value)
            )));
        }

        let mut result: Self = serde_json::from_value(value)?;
        result.raw_body = Some(body.to_string());
        Ok(result)
    }

    /// True only for the exact status `"Genuine"`
    pub fn is_genuine(&self) -> bool {
        self.status.as_deref() == Some(GENUINE_STATUS)
    }

    /// Inline summary: `<url> — <status> (<reason>)`
    pub fn summary_line(&self) -> String {
        format!(
            "{} — {} ({})",
            self.url_display(),
            self.status_display(),
            self.reason_display()
        )
    }

    pub fn url_display(&self) -> &str {
        self.url.as_deref().unwrap_or_default()
    }

    pub fn domain_display(&self) -> &str {
        self.domain_name.as_deref().unwrap_or_default()
    }

    pub fn ip_display(&self) -> &str {
        non_blank(self.ip.as_deref()).unwrap_or(IP_FALLBACK)
    }

    pub fn registrar_date_display(&self) -> &str {
        self.registrar_date.as_deref().unwrap_or_default()
    }

    pub fn status_display(&self) -> &str {
        self.status.as_deref().unwrap_or_default()
    }

    pub fn reason_display(&self) -> &str {
        self.reason.as_deref().unwrap_or_default()
    }

    pub fn purpose_display(&self) -> &str {
        non_blank(self.purpose.as_deref()).unwrap_or(PURPOSE_FALLBACK)
    }

    /// Trust score as `<value>/100`; integral scores print without a fraction
    pub fn trust_score_display(&self) -> String {
        match self.trust_score {
            Some(score) if score.fract() == 0.0 && score.abs() < MAX_EXACT_INTEGER => {
                format!("{}/100", score as i64)
            }
            Some(score) => format!("{score}/100"),
            None => format!("{SCORE_FALLBACK}/100"),
        }
    }

    /// Domain age as `<n> days`, if the backend knew it
    pub fn domain_age_display(&self) -> Option<String> {
        self.domain_age_days.map(|days| match days {
            1 => "1 day".to_string(),
            n => format!("{n} days"),
        })
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

// ─────────────────────────────────────────────────────────────────
// Lenient field decoding
// ─────────────────────────────────────────────────────────────────

fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

fn lenient_number<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

fn lenient_integer<'de, D>(deserializer: D) -> std::result::Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}
