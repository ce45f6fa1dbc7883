//! Report rendering

use doctrace_config::ReportFormat;
use doctrace_parser::FunctionTraces;
use std::fmt::Write;

pub fn render(found: &[FunctionTraces], format: ReportFormat) -> Result<String, serde_json::Error> {
    match format {
        ReportFormat::Text => Ok(render_text(found)),
        ReportFormat::Json => {
            let mut json = serde_json::to_string_pretty(found)?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// One stanza per function, each followed by a blank line.
pub fn render_text(found: &[FunctionTraces]) -> String {
    let mut out = String::new();
    for entry in found {
        let _ = writeln!(out, "package: {}", entry.function.package);
        let _ = writeln!(out, "function: {}", entry.function.name);
        let _ = writeln!(out, "traces:");
        for trace in &entry.traces {
            let _ = writeln!(out, " - category: {}", trace.category());
            let _ = writeln!(out, "   epic: {}", trace.epic());
            let _ = writeln!(out, "   description: {}", trace.description());
        }
        out.push('\n');
    }
    out
}
