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

//! Health-check client library for probing HTTP service endpoints.
//!
//! This library provides a small, reusable layer for issuing one-shot
//! health probes against HTTP endpoints that answer with a JSON body of
//! arbitrary shape. It is split into two layers that can be used
//! independently:
//!
//! - **Probe layer**: Probe configuration and execution, including a
//!   cancellation-aware variant for callers that need to abandon an
//!   in-flight request on shutdown
//! - **Report layer**: The typed outcome of a probe (decoded payload plus
//!   the time it was observed)
//!
//! A probe either succeeds with a [`HealthReport`] or fails with a
//! [`ProbeError`] describing the reason (transport failure, unexpected
//! HTTP status, undecodable body, or cancellation). Callers that only
//! care about "up or down" can collapse the error to a display state;
//! the reason is still available for logging.
//!
//! # Quick Start
//!
//! ```no_run
//! use health_client::{check, ProbeConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ProbeConfig {
//!         url: "http://localhost:8080/api/v1/health".to_string(),
//!         ..Default::default()
//!     };
//!
//!     match check(&config).await {
//!         Ok(report) => println!("healthy at {}: {}", report.checked_at, report.payload),
//!         Err(e) => eprintln!("health check failed: {}", e),
//!     }
//! }
//! ```
//!
//! # Cancellation
//!
//! Bind the probe to a [`tokio_util::sync::CancellationToken`] when the
//! caller may be torn down before the response arrives:
//!
//! ```no_run
//! use health_client::{check_with_cancel, ProbeConfig};
//! use tokio_util::sync::CancellationToken;
//!
//! #[tokio::main]
//! async fn main() {
//!     let cancel = CancellationToken::new();
//!     let result = check_with_cancel(&ProbeConfig::default(), cancel.clone()).await;
//!     // Cancelling `cancel` from another task abandons the request and
//!     // resolves the probe with `ProbeError::Cancelled`.
//!     let _ = result;
//! }
//! ```

pub mod probe;
pub mod report;

pub use probe::{check, check_with_cancel, ProbeConfig, ProbeError};
pub use report::HealthReport;
