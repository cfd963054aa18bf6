//! Label seam — all user-facing copy lives outside the core.
//!
//! The surrounding application owns translation; the core only names the
//! strings it needs and substitutes parameters into whatever template the
//! collaborator returns. The sole literal strings the core itself emits
//! are the structural log markers (`stage1:`, `stage2:`) and the
//! operator-facing `SK_ERR_` diagnostics.

use std::fmt;

/// The user-facing strings the capture flow needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelKey {
    /// Modal title.
    Title,
    /// Placeholder for the stage-1 input.
    Part1Placeholder,
    /// Placeholder for the stage-2 input.
    Part2Placeholder,
    /// Hint shown next to the manual-copy decoy after a clipboard failure.
    ManualCopyHint,
    /// Inline error for a blank stage-1 input.
    EmptyInputError,
    /// Inline error template for a failed format check. Takes `{length}`.
    FormatError,
}

impl fmt::Display for LabelKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = match self {
            Self::Title => "capture.title",
            Self::Part1Placeholder => "capture.part1_placeholder",
            Self::Part2Placeholder => "capture.part2_placeholder",
            Self::ManualCopyHint => "capture.manual_copy_hint",
            Self::EmptyInputError => "capture.error.empty_input",
            Self::FormatError => "capture.error.format",
        };
        write!(f, "{key}")
    }
}

/// Injected translation collaborator.
pub trait Labels: Send + Sync {
    /// Resolve `key` for `language` to a display template.
    fn lookup(&self, key: LabelKey, language: &str) -> String;
}

/// Substitute `{name}` tokens in a template.
///
/// Unknown tokens are left in place so a missing parameter shows up
/// verbatim in QA instead of vanishing silently.
#[must_use]
pub fn substitute(template: &str, params: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (name, value) in params {
        out = out.replace(&format!("{{{name}}}"), value);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitute_replaces_tokens() {
        let s = substitute(
            "Key must be {length} characters",
            &[("length", "64".to_string())],
        );
        assert_eq!(s, "Key must be 64 characters");
    }

    #[test]
    fn substitute_leaves_unknown_tokens() {
        let s = substitute("Hello {who}", &[("length", "64".to_string())]);
        assert_eq!(s, "Hello {who}");
    }

    #[test]
    fn label_keys_are_namespaced() {
        assert_eq!(LabelKey::FormatError.to_string(), "capture.error.format");
        assert_eq!(LabelKey::Title.to_string(), "capture.title");
    }
}
