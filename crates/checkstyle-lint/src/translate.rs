//! Checkstyle XML to lint issues.
//!
//! Checkstyle reports look like:
//!
//! ```xml
//! <checkstyle>
//!   <file name="src/a.js">
//!     <error line="3" column="5" severity="error" message="bad" source="rule1"/>
//!   </file>
//! </checkstyle>
//! ```
//!
//! Every `error` element directly under a `file` element becomes one
//! [`LintIssue`], in document order.

use checkstyle_lint_core::LintIssue;
use roxmltree::{Document, Node};

use crate::error::CheckstyleError;
use crate::severity::map_severity;
use crate::LINTER_NAME;

/// Translates one file's script output into lint issues.
///
/// Empty output means a clean run and yields no issues.
///
/// # Errors
///
/// Returns [`CheckstyleError::MalformedOutput`] if non-empty output is not
/// well-formed XML.
pub fn translate(path: &str, output: &str) -> Result<Vec<LintIssue>, CheckstyleError> {
    if output.is_empty() {
        return Ok(Vec::new());
    }

    let doc = Document::parse(output).map_err(|e| CheckstyleError::MalformedOutput {
        path: path.to_string(),
        message: e.to_string(),
    })?;

    Ok(doc
        .descendants()
        .filter(is_file_error)
        .map(|node| parse_violation(path, node))
        .collect())
}

fn is_file_error(node: &Node<'_, '_>) -> bool {
    node.has_tag_name("error") && node.parent_element().is_some_and(|p| p.has_tag_name("file"))
}

fn parse_violation(path: &str, node: Node<'_, '_>) -> LintIssue {
    LintIssue {
        code: LINTER_NAME.to_string(),
        name: node.attribute("source").unwrap_or_default().to_string(),
        line: parse_position(node.attribute("line")),
        column: parse_position(node.attribute("column")),
        severity: map_severity(node.attribute("severity").unwrap_or_default()),
        description: node.attribute("message").unwrap_or_default().to_string(),
        path: path.to_string(),
    }
}

/// Missing and non-numeric positions read as 0.
fn parse_position(raw: Option<&str>) -> usize {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkstyle_lint_core::Severity;

    #[test]
    fn empty_output_is_clean() {
        assert!(translate("a.js", "").unwrap().is_empty());
    }

    #[test]
    fn single_error_maps_every_field() {
        let xml = r#"<checkstyle><file name="a.js"><error line="3" column="5" severity="error" message="bad" source="rule1"/></file></checkstyle>"#;
        let issues = translate("a.js", xml).unwrap();
        assert_eq!(
            issues,
            vec![LintIssue {
                code: "Checkstyle".to_string(),
                name: "rule1".to_string(),
                line: 3,
                column: 5,
                severity: Severity::Error,
                description: "bad".to_string(),
                path: "a.js".to_string(),
            }]
        );
    }

    #[test]
    fn missing_attributes_use_defaults() {
        let xml = r#"<checkstyle><file name="a.js"><error severity="warning"/></file></checkstyle>"#;
        let issues = translate("a.js", xml).unwrap();
        assert_eq!(issues.len(), 1);
        let issue = &issues[0];
        assert_eq!(issue.line, 0);
        assert_eq!(issue.column, 0);
        assert_eq!(issue.name, "");
        assert_eq!(issue.description, "");
        assert_eq!(issue.severity, Severity::Warning);
    }

    #[test]
    fn non_numeric_positions_read_as_zero() {
        let xml = r#"<checkstyle><file><error line="twelve" column="-4" severity="info"/></file></checkstyle>"#;
        let issues = translate("a.js", xml).unwrap();
        assert_eq!((issues[0].line, issues[0].column), (0, 0));
        assert_eq!(issues[0].severity, Severity::Advice);
    }

    #[test]
    fn collects_across_files_in_document_order() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<checkstyle version="8.0">
  <file name="one.java">
    <error line="1" severity="error" message="first"/>
    <error line="2" severity="warning" message="second"/>
  </file>
  <file name="two.java"/>
  <file name="three.java">
    <error line="9" severity="bogus" message="third"/>
  </file>
</checkstyle>"#;
        let issues = translate("one.java", xml).unwrap();
        let messages: Vec<&str> = issues.iter().map(|i| i.description.as_str()).collect();
        assert_eq!(messages, vec!["first", "second", "third"]);
        assert_eq!(issues[2].severity, Severity::Error);
        assert!(issues.iter().all(|i| i.path == "one.java"));
    }

    #[test]
    fn ignores_errors_outside_file_elements() {
        let xml = r#"<checkstyle><error message="stray"/><file><exception/></file></checkstyle>"#;
        assert!(translate("a.js", xml).unwrap().is_empty());
    }

    #[test]
    fn document_without_errors_is_clean() {
        let xml = r#"<checkstyle version="8.0"><file name="a.js"></file></checkstyle>"#;
        assert!(translate("a.js", xml).unwrap().is_empty());
    }

    #[test]
    fn malformed_xml_fails() {
        let err = translate("a.js", "<checkstyle><file name=\"a.js\">").unwrap_err();
        assert!(matches!(err, CheckstyleError::MalformedOutput { ref path, .. } if path == "a.js"));
    }

    #[test]
    fn plain_text_output_fails() {
        assert!(translate("a.js", "Segmentation fault\n").is_err());
    }
}
