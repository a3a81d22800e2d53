//! Rendering lint results for the terminal.
//!
//! Text output groups issues under their file, one row per issue:
//!
//! ```text
//! src/a.js
//!   3:5  error    Missing semicolon  (semi)
//!
//! Found 1 error(s), 0 warning(s), 0 advice in 2 file(s)
//! ```

use anyhow::Result;
use checkstyle_lint::{LintIssue, LintResult, Severity};
use std::fmt::Write;
use std::io::IsTerminal;

use crate::OutputFormat;

const RESET: &str = "\x1b[0m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";

/// Prints `result` to stdout in `format`.
pub fn print(result: &LintResult, format: OutputFormat) -> Result<()> {
    let color = std::io::stdout().is_terminal();
    print!("{}", render(result, format, color)?);
    Ok(())
}

/// Renders `result` in `format`; ANSI colors only when `color` is set.
pub fn render(result: &LintResult, format: OutputFormat, color: bool) -> Result<String> {
    let mut out = String::new();
    match format {
        OutputFormat::Text => render_text(&mut out, result, color)?,
        OutputFormat::Json => {
            out.push_str(&serde_json::to_string_pretty(result)?);
            out.push('\n');
        }
        OutputFormat::Compact => {
            for issue in &result.issues {
                writeln!(out, "{issue}")?;
            }
        }
    }
    Ok(out)
}

fn paint(color: bool, code: &str, text: &str) -> String {
    if color {
        format!("{code}{text}{RESET}")
    } else {
        text.to_string()
    }
}

fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "\x1b[31m",
        Severity::Warning => "\x1b[33m",
        Severity::Advice => "\x1b[34m",
    }
}

fn render_text(out: &mut String, result: &LintResult, color: bool) -> std::fmt::Result {
    let mut current: Option<&str> = None;
    for issue in &result.issues {
        if current != Some(issue.path.as_str()) {
            if current.is_some() {
                writeln!(out)?;
            }
            writeln!(out, "{}", paint(color, BOLD, &issue.path))?;
            current = Some(&issue.path);
        }
        render_row(out, issue, color)?;
    }
    if current.is_some() {
        writeln!(out)?;
    }

    let (errors, warnings, advice) = result.count_by_severity();
    let summary = format!(
        "Found {errors} error(s), {warnings} warning(s), {advice} advice in {} file(s)",
        result.files_checked
    );
    let summary_color = if errors > 0 {
        severity_color(Severity::Error)
    } else if warnings > 0 {
        severity_color(Severity::Warning)
    } else {
        "\x1b[32m"
    };
    writeln!(out, "{}", paint(color, summary_color, &summary))
}

fn render_row(out: &mut String, issue: &LintIssue, color: bool) -> std::fmt::Result {
    let position = format!("{}:{}", issue.line, issue.column);
    // Pad before painting so escape codes don't skew the columns.
    let severity = paint(
        color,
        severity_color(issue.severity),
        &format!("{:<7}", issue.severity),
    );
    write!(out, "  {position:<7}  {severity}  {}", issue.description)?;
    if !issue.name.is_empty() {
        write!(out, "  {}", paint(color, DIM, &format!("({})", issue.name)))?;
    }
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(path: &str, name: &str, severity: Severity) -> LintIssue {
        LintIssue {
            code: "Checkstyle".to_string(),
            name: name.to_string(),
            line: 3,
            column: 5,
            severity,
            description: "bad".to_string(),
            path: path.to_string(),
        }
    }

    fn sample() -> LintResult {
        LintResult {
            issues: vec![
                issue("a.js", "rule1", Severity::Error),
                issue("a.js", "", Severity::Warning),
                issue("b.js", "rule2", Severity::Advice),
            ],
            files_checked: 3,
        }
    }

    #[test]
    fn text_groups_rows_under_their_file() {
        let text = render(&sample(), OutputFormat::Text, false).unwrap();
        assert_eq!(
            text,
            "a.js\n\
             \x20 3:5      error    bad  (rule1)\n\
             \x20 3:5      warning  bad\n\
             \n\
             b.js\n\
             \x20 3:5      advice   bad  (rule2)\n\
             \n\
             Found 1 error(s), 1 warning(s), 1 advice in 3 file(s)\n"
        );
    }

    #[test]
    fn text_for_clean_run_is_only_the_summary() {
        let result = LintResult {
            issues: Vec::new(),
            files_checked: 2,
        };
        let text = render(&result, OutputFormat::Text, false).unwrap();
        assert_eq!(
            text,
            "Found 0 error(s), 0 warning(s), 0 advice in 2 file(s)\n"
        );
    }

    #[test]
    fn color_wraps_severity_and_summary() {
        let text = render(&sample(), OutputFormat::Text, true).unwrap();
        assert!(text.contains("\x1b[31merror  \x1b[0m"));
        assert!(text.contains("\x1b[1ma.js\x1b[0m"));
        assert!(text.ends_with(&format!("in 3 file(s){RESET}\n")));
    }

    #[test]
    fn compact_is_one_line_per_issue() {
        let text = render(&sample(), OutputFormat::Compact, false).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "a.js:3:5: error [Checkstyle] bad (rule1)");
        assert_eq!(lines[1], "a.js:3:5: warning [Checkstyle] bad");
    }

    #[test]
    fn json_uses_host_field_names() {
        let text = render(&sample(), OutputFormat::Json, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["files_checked"], 3);
        let first = &value["issues"][0];
        assert_eq!(first["char"], 5);
        assert_eq!(first["severity"], "error");
        assert_eq!(first["name"], "rule1");
        assert!(first.get("column").is_none());
    }
}
