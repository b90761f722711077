//! Correlation query descriptors for log search.
//!
//! Every request is stamped with a correlation identifier; this module only
//! describes *where to look* for the matching log lines. Running the query
//! against a log backend is out of scope.

use std::fmt;

use serde::Serialize;

/// A descriptor locating all log lines sharing a correlation identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogQuery {
    /// The structured-log field to match on.
    pub field: String,
    /// The correlation identifier value.
    pub value: String,
}

impl LogQuery {
    /// Creates a new query descriptor.
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Renders the query as a search expression.
    pub fn expression(&self) -> String {
        format!("{}:\"{}\"", self.field, self.value)
    }
}

impl fmt::Display for LogQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expression())
    }
}

/// Builds log queries for a correlation identifier.
pub trait CorrelationTracer: Send + Sync {
    /// Returns the query locating every log line for the given identifier.
    fn locate(&self, correlation_id: &str) -> LogQuery;
}

/// Tracer targeting the request-id field stamped by the HTTP middleware.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestIdTracer;

impl CorrelationTracer for RequestIdTracer {
    fn locate(&self, correlation_id: &str) -> LogQuery {
        LogQuery::new("request_id", correlation_id)
    }
}
