//! Run description shared by every command's output

use serde::Serialize;
use serde_json::Value;

use hypergraphs_core::graph::Model;

/// Parameters of one invocation, echoed in every output format
#[derive(Debug, Clone, Serialize)]
pub struct Run {
    pub mode: &'static str,
    pub model: Model,
    pub dimension: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concentration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub node_count: usize,
}

impl Run {
    /// Records header line, with command-specific `key=value` pairs appended
    pub fn header(&self, extra: &[(&str, String)]) -> String {
        let mut line = format!(
            "H hypergraphs=1 records=1 mode={} model={} n={}",
            self.mode, self.model, self.dimension
        );
        if let Some(p) = self.concentration {
            line.push_str(&format!(" p={}", p));
        }
        if let Some(seed) = self.seed {
            line.push_str(&format!(" seed={}", seed));
        }
        line.push_str(&format!(" nodes={}", self.node_count));
        for (key, value) in extra {
            line.push_str(&format!(" {}={}", key, value));
        }
        line
    }

    /// One-line human summary of the run
    pub fn banner(&self) -> String {
        let mut line = format!("{} N={}", self.model, self.dimension);
        if let Some(p) = self.concentration {
            line.push_str(&format!(" p={}", p));
        }
        line.push_str(&format!(" ({} nodes", self.node_count));
        if let Some(seed) = self.seed {
            line.push_str(&format!(", seed {}", seed));
        }
        line.push(')');
        line
    }

    /// JSON object holding the run fields followed by the payload's fields
    pub fn to_json(&self, payload: Value) -> Value {
        let mut object = serde_json::to_value(self)
            .ok()
            .and_then(|v| v.as_object().cloned())
            .unwrap_or_default();
        if let Value::Object(fields) = payload {
            object.extend(fields);
        }
        Value::Object(object)
    }
}
