//! Targeted field rewriting for pyproject.toml
//!
//! The document is never parsed into a TOML tree: the hook touches exactly
//! two fields and every other byte must survive as the template produced
//! it, so both rewrites are anchored textual substitutions.

use regex::{Captures, Regex};

/// The version-agnostic classifier every generated project carries
const GENERIC_CLASSIFIER: &str = "Programming Language :: Python :: 3";

/// Indent used when the classifier block does not start its own line
const FALLBACK_INDENT: &str = "    ";

/// Editor for the two metadata fields derived from the supported range
pub struct MetadataEditor {
    /// Matches `requires-python = "..."`, capturing the key part and value
    requires_python_re: Regex,
    /// Matches the generic classifier plus any per-version lines after it
    classifier_block_re: Regex,
}

impl MetadataEditor {
    pub fn new() -> Self {
        Self {
            // Match: requires-python = "3.10-3.12" (spacing free)
            requires_python_re: Regex::new(r#"(requires-python\s*=\s*)"([^"]+)""#).unwrap(),
            // Match: "Programming Language :: Python :: 3" and the run of
            // "Programming Language :: Python :: 3.X" entries following it
            classifier_block_re: Regex::new(
                r#""Programming Language :: Python :: 3"(?:\s*,\s*"Programming Language :: Python :: 3\.\d+")*,?"#,
            )
            .unwrap(),
        }
    }

    /// Current requires-python value, if the field is present
    pub fn requires_python(&self, content: &str) -> Option<String> {
        self.requires_python_re
            .captures(content)
            .map(|caps| caps[2].to_string())
    }

    /// Replace the requires-python value, leaving the key and its spacing
    /// untouched
    pub fn set_requires_python(&self, content: &str, value: &str) -> String {
        self.requires_python_re
            .replace_all(content, |caps: &Captures| {
                format!("{}\"{}\"", &caps[1], value)
            })
            .into_owned()
    }

    /// Regenerate the Python version classifiers for the targeted minors.
    ///
    /// The generic `:: 3` classifier stays and one `:: 3.<minor>` entry is
    /// emitted per target. Version entries already present are consumed by
    /// the match, so rerunning the rewrite cannot duplicate them. The
    /// entries keep the indentation and trailing-comma convention of the
    /// block they replace.
    pub fn set_version_classifiers(&self, content: &str, minors: &[u32]) -> String {
        self.classifier_block_re
            .replace_all(content, |caps: &Captures| {
                let matched = caps.get(0).unwrap();
                let indent = line_indent(content, matched.start());
                render_classifier_block(&indent, minors, matched.as_str().ends_with(','))
            })
            .into_owned()
    }
}

impl Default for MetadataEditor {
    fn default() -> Self {
        Self::new()
    }
}

fn render_classifier_block(indent: &str, minors: &[u32], trailing_comma: bool) -> String {
    let mut block = format!("\"{}\"", GENERIC_CLASSIFIER);
    for minor in minors {
        block.push_str(&format!(",\n{}\"{}.{}\"", indent, GENERIC_CLASSIFIER, minor));
    }
    if trailing_comma {
        block.push(',');
    }
    block
}

/// Leading whitespace of the line containing `offset`, or the fallback when
/// the offset is not at the start of a line's content
fn line_indent(content: &str, offset: usize) -> String {
    let line_start = content[..offset].rfind('\n').map_or(0, |i| i + 1);
    let prefix = &content[line_start..offset];
    if prefix.chars().all(|c| c == ' ' || c == '\t') {
        prefix.to_string()
    } else {
        FALLBACK_INDENT.to_string()
    }
}
