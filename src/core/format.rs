use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Response representations the booking service can negotiate via `Accept`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ResponseFormat {
    /// `application/json`
    #[default]
    Json,
    /// `application/xml`
    Xml,
    /// `application/x-www-form-urlencoded`
    FormUrlEncoded,
}

impl ResponseFormat {
    /// Returns the MIME type sent in the `Accept` header
    pub fn mime(&self) -> &'static str {
        match self {
            ResponseFormat::Json => "application/json",
            ResponseFormat::Xml => "application/xml",
            ResponseFormat::FormUrlEncoded => "application/x-www-form-urlencoded",
        }
    }

    /// Whether a `Content-Type` header value belongs to this format
    pub fn matches_content_type(&self, content_type: &str) -> bool {
        content_type
            .split(';')
            .next()
            .map(|media| media.trim().eq_ignore_ascii_case(self.mime()))
            .unwrap_or(false)
    }
}

impl fmt::Display for ResponseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mime())
    }
}

impl FromStr for ResponseFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "application/json" | "json" => Ok(ResponseFormat::Json),
            "application/xml" | "xml" => Ok(ResponseFormat::Xml),
            "application/x-www-form-urlencoded" | "form" => Ok(ResponseFormat::FormUrlEncoded),
            other => Err(format!("Unsupported response format: {}", other)),
        }
    }
}
