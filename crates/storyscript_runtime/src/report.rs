//! Human-readable diagnostic reports with source context.
//!
//! ```text
//! error: invalid characters `@@@`
//!  --> rooms.story:2:12
//!   |
//! 2 |   name "x" @@@
//!   |            ^^^
//! ```

use std::fmt::Write;

use storyscript_syntax::{Diagnostic, Severity};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const GUTTER: &str = "\x1b[1;34m";

/// Renders every diagnostic followed by a summary line.
#[must_use]
pub fn render_report(name: &str, source: &str, diagnostics: &[Diagnostic], color: bool) -> String {
    let mut output = String::new();
    for diagnostic in diagnostics {
        output.push_str(&render_diagnostic(name, source, diagnostic, color));
        output.push('\n');
    }
    let _ = writeln!(output, "{name}: {}", summary(diagnostics));
    output
}

/// Renders one diagnostic with the source line it points at.
#[must_use]
pub fn render_diagnostic(name: &str, source: &str, diagnostic: &Diagnostic, color: bool) -> String {
    let paint = |style: &'static str| if color { style } else { "" };
    let reset = paint(RESET);
    let accent = paint(match diagnostic.severity {
        Severity::Error => "\x1b[1;31m",
        Severity::Recovered => "\x1b[1;33m",
    });
    let gutter = paint(GUTTER);

    let span = diagnostic.span;
    let start = span.start.min(source.len());
    let line_start = source
        .get(..start)
        .and_then(|before| before.rfind('\n'))
        .map_or(0, |i| i + 1);
    let line_end = source
        .get(start..)
        .and_then(|after| after.find(['\n', '\r']))
        .map_or(source.len(), |i| start + i);
    let line_text = source.get(line_start..line_end).unwrap_or_default();

    // Tabs stay tabs so the markers line up under them.
    let padding: String = source
        .get(line_start..start)
        .unwrap_or_default()
        .chars()
        .map(|c| if c == '\t' { '\t' } else { ' ' })
        .collect();
    let marker_end = span.end.clamp(start, line_end);
    let markers = source
        .get(start..marker_end)
        .map_or(0, |text| text.chars().count())
        .max(1);

    let number = span.line.to_string();
    let width = number.len();
    let blank = " ".repeat(width);

    let mut output = String::new();
    let _ = writeln!(
        output,
        "{accent}{}{reset}: {}{}{reset}",
        diagnostic.severity,
        paint(BOLD),
        diagnostic.kind
    );
    let _ = writeln!(
        output,
        "{blank}{gutter}-->{reset} {name}:{}:{}",
        span.line, span.column
    );
    let _ = writeln!(output, "{blank} {gutter}|{reset}");
    let _ = writeln!(output, "{gutter}{number} |{reset} {line_text}");
    let _ = writeln!(
        output,
        "{blank} {gutter}|{reset} {padding}{accent}{}{reset}",
        "^".repeat(markers)
    );
    output
}

/// Summarizes diagnostics as counts per severity.
#[must_use]
pub fn summary(diagnostics: &[Diagnostic]) -> String {
    let errors = diagnostics.iter().filter(|d| d.is_error()).count();
    let recovered = diagnostics.len() - errors;
    match (errors, recovered) {
        (0, 0) => "no problems found".to_string(),
        (errors, 0) => plural(errors, "error"),
        (0, recovered) => format!("{recovered} recovered"),
        (errors, recovered) => format!("{}, {recovered} recovered", plural(errors, "error")),
    }
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
