//! Rendered view of an operation's recorded calls.

use recall_core::OperationName;
use serde::{Deserialize, Serialize};

/// One reconstructed invocation: the recorded input and output, index-aligned
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayCall {
    /// Rendered argument tuple as it was logged
    pub input: String,
    /// Rendered return value as it was logged
    pub output: String,
}

/// Reconstructed call history of one operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayReport {
    /// The audited operation
    pub operation: OperationName,
    /// Durable call counter value (absent counter reads as 0)
    pub call_count: u64,
    /// Number of input entries found in the store
    pub recorded_inputs: usize,
    /// Input/output pairs in original call order, zipped to the shorter log
    pub calls: Vec<ReplayCall>,
}

impl ReplayReport {
    /// Inputs with no matching output: calls whose body or output record
    /// failed. Zero for a history with no partial failures.
    #[must_use]
    pub fn dropped_inputs(&self) -> usize {
        self.recorded_inputs.saturating_sub(self.calls.len())
    }

    /// Render the audit text, one line per call:
    ///
    /// ```text
    /// Cache.store was called 2 times:
    /// Cache.store("a") -> 3a3e6d54-...
    /// Cache.store("b") -> 81a2c5a7-...
    /// ```
    #[must_use]
    pub fn render(&self) -> String {
        let times = if self.call_count == 1 { "time" } else { "times" };
        let mut out = format!("{} was called {} {}:", self.operation, self.call_count, times);
        for call in &self.calls {
            out.push('\n');
            out.push_str(&self.operation.to_string());
            out.push('(');
            out.push_str(&call.input);
            out.push_str(") -> ");
            out.push_str(&call.output);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(count: u64, calls: Vec<(&str, &str)>) -> ReplayReport {
        let recorded_inputs = calls.len();
        ReplayReport {
            operation: OperationName::new("Cache.store"),
            call_count: count,
            recorded_inputs,
            calls: calls
                .into_iter()
                .map(|(input, output)| ReplayCall {
                    input: input.to_string(),
                    output: output.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_render_empty() {
        let r = report(0, Vec::new());
        assert_eq!(r.render(), "Cache.store was called 0 times:");
    }

    #[test]
    fn test_render_singular() {
        let r = report(1, vec![("\"a\"", "key-a")]);
        assert_eq!(
            r.render(),
            "Cache.store was called 1 time:\nCache.store(\"a\") -> key-a"
        );
    }

    #[test]
    fn test_render_call_order() {
        let r = report(2, vec![("\"a\"", "key-a"), ("\"b\"", "key-b")]);
        let rendered = r.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "Cache.store(\"a\") -> key-a");
        assert_eq!(lines[2], "Cache.store(\"b\") -> key-b");
    }

    #[test]
    fn test_dropped_inputs() {
        let mut r = report(3, vec![("\"a\"", "key-a"), ("\"b\"", "key-b")]);
        r.recorded_inputs = 3;
        assert_eq!(r.dropped_inputs(), 1);
    }

    #[test]
    fn test_report_serde() {
        let r = report(1, vec![("\"a\"", "key-a")]);
        let json = serde_json::to_string(&r).unwrap();
        let back: ReplayReport = serde_json::from_str(&json).unwrap();
        assert_eq!(r, back);
    }
}
