//! Construction-time invariant checks
//!
//! Stateless helpers invoked from builders' `build()` methods. A builder
//! that fails any of these returns `Err`, so an invalid instance can never
//! be observed.

use crate::element::Element;
use crate::error::{Error, Result};
use crate::visitor::{Visitable, Visitor};

const MAX_STRING_LENGTH: usize = 1024 * 1024;

/// Unwraps a mandatory field, naming it in the error when absent.
pub fn require<T>(value: Option<T>, name: &'static str) -> Result<T> {
    value.ok_or(Error::MissingRequired(name))
}

/// Passes a mandatory repeating field through, failing when it is empty.
pub fn check_non_empty<T>(list: Vec<T>, name: &'static str) -> Result<Vec<T>> {
    if list.is_empty() {
        return Err(Error::EmptyRequired(name));
    }
    Ok(list)
}

/// ele-1: all FHIR elements must have a @value or children.
pub fn require_value_or_children<T: Element>(element: &T) -> Result<()> {
    if !element.has_value() && !element.has_children() {
        return Err(Error::MissingValueOrChildren(element.type_name()));
    }
    Ok(())
}

/// Applies [`check_string`] to every string-valued leaf of an element tree
/// (ids, string primitives, codes). Builders run this on the finished
/// element, so a string that violates the lexical rules is rejected no
/// matter how deeply it was nested when the outermost `build()` fires.
pub fn check_element_strings<T: Visitable>(element: &T) -> Result<()> {
    let mut rules = StringRules { error: None };
    element.accept(element.type_name(), None, &mut rules);
    match rules.error {
        Some(error) => Err(error),
        None => Ok(()),
    }
}

struct StringRules {
    error: Option<Error>,
}

impl Visitor for StringRules {
    fn pre_visit(&mut self, _element: &dyn Element) -> bool {
        self.error.is_none()
    }

    fn visit_string(&mut self, _name: &str, value: &str) {
        if self.error.is_none() {
            if let Err(error) = check_string(value) {
                self.error = Some(error);
            }
        }
    }
}

/// Checks the FHIR `string` lexical rules: at most 1 MiB, at least one
/// non-whitespace character, and no control characters below U+0020 other
/// than tab, carriage return, and line feed.
pub fn check_string(s: &str) -> Result<()> {
    if s.len() > MAX_STRING_LENGTH {
        return Err(Error::InvalidString(format!(
            "length {} exceeds maximum of {}",
            s.len(),
            MAX_STRING_LENGTH
        )));
    }
    let mut non_whitespace = 0usize;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !matches!(ch, ' ' | '\t' | '\r' | '\n') {
                return Err(Error::InvalidString(format!(
                    "'{s}' contains whitespace outside [ \\t\\r\\n]"
                )));
            }
        } else {
            if (ch as u32) < 0x20 {
                return Err(Error::InvalidString(format!(
                    "'{s}' contains an unsupported control character"
                )));
            }
            non_whitespace += 1;
        }
    }
    if non_whitespace == 0 {
        return Err(Error::InvalidString(
            "value must contain at least one non-whitespace character".into(),
        ));
    }
    Ok(())
}

/// Checks the FHIR `code` lexical rules: non-empty, no leading or trailing
/// whitespace, and no internal whitespace other than single spaces.
pub fn check_code(s: &str) -> Result<()> {
    if s.is_empty() || s.starts_with(char::is_whitespace) {
        return Err(Error::InvalidCode(format!(
            "'{s}' must begin with a non-whitespace character"
        )));
    }
    if s.ends_with(char::is_whitespace) {
        return Err(Error::InvalidCode(format!(
            "'{s}' must end with a non-whitespace character"
        )));
    }
    let mut previous_was_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if ch != ' ' {
                return Err(Error::InvalidCode(format!(
                    "'{s}' must not contain whitespace other than a single space"
                )));
            }
            if previous_was_space {
                return Err(Error::InvalidCode(format!(
                    "'{s}' must not contain consecutive spaces"
                )));
            }
            previous_was_space = true;
        } else {
            previous_was_space = false;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_names_the_missing_field() {
        let err = require::<u32>(None, "path").unwrap_err();
        assert!(matches!(err, Error::MissingRequired("path")));
        assert_eq!(require(Some(7), "path").unwrap(), 7);
    }

    #[test]
    fn check_non_empty_rejects_empty_lists() {
        let err = check_non_empty(Vec::<u8>::new(), "type").unwrap_err();
        assert!(matches!(err, Error::EmptyRequired("type")));
        assert_eq!(check_non_empty(vec![1], "type").unwrap(), vec![1]);
    }

    #[test]
    fn check_string_rules() {
        assert!(check_string("hello world").is_ok());
        assert!(check_string("line1\nline2\ttabbed").is_ok());
        assert!(check_string("   ").is_err());
        assert!(check_string("nul\u{0}byte").is_err());
        assert!(check_string("nb\u{a0}sp").is_err());
    }

    #[test]
    fn check_code_rules() {
        assert!(check_code("active").is_ok());
        assert!(check_code("two words").is_ok());
        assert!(check_code("").is_err());
        assert!(check_code(" leading").is_err());
        assert!(check_code("trailing ").is_err());
        assert!(check_code("double  space").is_err());
        assert!(check_code("tab\tinside").is_err());
    }
}
