// Copyright 2025 Chris Custine
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Typed outcome of a successful health probe.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Result of a successful health probe.
///
/// The endpoint contract is intentionally loose: the body is any valid
/// JSON value, carried here as an opaque [`serde_json::Value`]. The
/// report couples the payload with the time it was observed so consumers
/// get a declared shape rather than a bare blob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    /// Decoded response body, of arbitrary shape.
    pub payload: Value,

    /// When the response was received and decoded.
    pub checked_at: DateTime<Utc>,
}

impl HealthReport {
    /// Create a report for a payload observed now.
    #[must_use]
    pub fn new(payload: Value) -> Self {
        Self {
            payload,
            checked_at: Utc::now(),
        }
    }

    /// Render the payload as indented JSON for display.
    ///
    /// Serializing a `Value` cannot fail, so this is infallible.
    #[must_use]
    pub fn pretty_payload(&self) -> String {
        serde_json::to_string_pretty(&self.payload)
            .unwrap_or_else(|_| self.payload.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pretty_payload_is_indented() {
        let report = HealthReport::new(json!({"status": "ok", "db": "up"}));
        let rendered = report.pretty_payload();

        assert!(rendered.contains("\n"));
        assert!(rendered.contains("  \"status\": \"ok\""));
        assert!(rendered.contains("  \"db\": \"up\""));
    }

    #[test]
    fn test_pretty_payload_round_trips() {
        let original = json!({"status": "ok", "services": {"redis": true, "postgres": true}});
        let report = HealthReport::new(original.clone());

        let reparsed: Value = serde_json::from_str(&report.pretty_payload()).unwrap();
        assert_eq!(reparsed, original);
    }

    #[test]
    fn test_pretty_payload_is_deterministic() {
        let report = HealthReport::new(json!({"b": 2, "a": 1}));
        assert_eq!(report.pretty_payload(), report.pretty_payload());
    }
}
