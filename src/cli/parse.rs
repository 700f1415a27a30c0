use hypergraphs_core::format::OutputFormat;
use hypergraphs_core::graph::Model;

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse graph model from string
pub fn parse_model(s: &str) -> std::result::Result<Model, String> {
    s.parse::<Model>().map_err(|e| e.to_string())
}
