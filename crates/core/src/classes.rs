//! Class-name composition.
//!
//! Classes are composed append-only: base classes, then the conditional
//! classes whose flag is set, then whatever the caller passed. Tokens are
//! split on whitespace and empty tokens are dropped, but repeated tokens are
//! kept as given; composing a list with itself doubles every token.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Extra classes supplied by a caller, either space-delimited or as a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExtraClasses {
    /// A single string such as `"mr-2 float-right"`.
    Spaced(String),
    /// A list of class strings; each entry may itself contain spaces.
    List(Vec<String>),
}

impl ExtraClasses {
    /// Returns the individual non-empty tokens in caller order.
    pub fn tokens(&self) -> Vec<&str> {
        match self {
            ExtraClasses::Spaced(classes) => classes.split_whitespace().collect(),
            ExtraClasses::List(list) => list
                .iter()
                .flat_map(|classes| classes.split_whitespace())
                .collect(),
        }
    }
}

impl From<&str> for ExtraClasses {
    fn from(value: &str) -> Self {
        ExtraClasses::Spaced(value.to_string())
    }
}

impl From<String> for ExtraClasses {
    fn from(value: String) -> Self {
        ExtraClasses::Spaced(value)
    }
}

impl From<Vec<String>> for ExtraClasses {
    fn from(value: Vec<String>) -> Self {
        ExtraClasses::List(value)
    }
}

impl From<Vec<&str>> for ExtraClasses {
    fn from(value: Vec<&str>) -> Self {
        ExtraClasses::List(value.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for ExtraClasses {
    fn from(value: [&str; N]) -> Self {
        ExtraClasses::List(value.into_iter().map(str::to_string).collect())
    }
}

/// An ordered, append-only list of class tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    tokens: Vec<String>,
}

impl ClassList {
    /// Creates an empty class list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends every whitespace-separated token of `classes`.
    pub fn push(&mut self, classes: &str) {
        self.tokens
            .extend(classes.split_whitespace().map(str::to_string));
    }

    /// Appends `classes` only when `enabled` is true.
    pub fn push_if(&mut self, classes: &str, enabled: bool) {
        if enabled {
            self.push(classes);
        }
    }

    /// Appends caller-supplied extra classes.
    pub fn extend_extra(&mut self, extra: &ExtraClasses) {
        self.tokens
            .extend(extra.tokens().into_iter().map(str::to_string));
    }

    /// Returns the tokens in order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Returns true if `token` appears in the list.
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    /// Returns true if the list has no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns the space-joined class string, or `None` when empty.
    pub fn to_attribute(&self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self.to_string())
        }
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens.join(" "))
    }
}

/// Composes a class string from base, conditional and extra classes.
///
/// # Examples
///
/// ```
/// use viewkit_core::class_names;
///
/// let classes = class_names(&["btn"], &[("btn-primary", true), ("btn-block", false)], None);
/// assert_eq!(classes, "btn btn-primary");
///
/// let classes = class_names(&["btn"], &[], Some(&"custom-class".into()));
/// assert_eq!(classes, "btn custom-class");
/// ```
pub fn class_names(
    base: &[&str],
    conditional: &[(&str, bool)],
    extra: Option<&ExtraClasses>,
) -> String {
    compose(base, conditional, extra).to_string()
}

/// Like [`class_names`], but returns the [`ClassList`].
pub fn compose(
    base: &[&str],
    conditional: &[(&str, bool)],
    extra: Option<&ExtraClasses>,
) -> ClassList {
    let mut list = ClassList::new();
    for classes in base {
        list.push(classes);
    }
    for (classes, enabled) in conditional {
        list.push_if(classes, *enabled);
    }
    if let Some(extra) = extra {
        list.extend_extra(extra);
    }
    list
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_then_enabled_conditionals() {
        let classes = class_names(
            &["btn"],
            &[("btn-primary", true), ("btn-block", false)],
            None,
        );
        assert_eq!(classes, "btn btn-primary");
    }

    #[test]
    fn extra_string_is_appended() {
        let extra = ExtraClasses::from("custom-class");
        assert_eq!(class_names(&["btn"], &[], Some(&extra)), "btn custom-class");
    }

    #[test]
    fn extra_list_is_appended_in_order() {
        let extra = ExtraClasses::from(["b", "a c"]);
        assert_eq!(
            class_names(&["x"], &[("y", true)], Some(&extra)),
            "x y b a c"
        );
    }

    #[test]
    fn declaration_order_is_kept() {
        let conditional = [("z", true), ("a", true), ("m", false), ("b", true)];
        let first = class_names(&["base", "another"], &conditional, None);
        let second = class_names(&["base", "another"], &conditional, None);
        assert_eq!(first, "base another z a b");
        assert_eq!(first, second);
    }

    #[test]
    fn empty_inputs_leave_no_stray_whitespace() {
        assert_eq!(class_names(&[], &[], None), "");
        assert_eq!(class_names(&["", "  "], &[("", true)], None), "");

        let extra = ExtraClasses::from("   ");
        assert_eq!(class_names(&["btn"], &[("", true)], Some(&extra)), "btn");

        let extra = ExtraClasses::List(vec![String::new(), " a  ".to_string()]);
        assert_eq!(class_names(&[" btn "], &[], Some(&extra)), "btn a");
    }

    #[test]
    fn repeated_tokens_are_not_deduplicated() {
        let extra = ExtraClasses::from("btn");
        assert_eq!(
            class_names(&["btn"], &[("btn", true)], Some(&extra)),
            "btn btn btn"
        );

        let once = class_names(&["a", "b"], &[], None);
        let twice = class_names(&[once.as_str()], &[], Some(&once.clone().into()));
        assert_eq!(twice, "a b a b");
    }

    #[test]
    fn class_list_attribute_is_none_when_empty() {
        assert_eq!(ClassList::new().to_attribute(), None);

        let list = compose(&["Counter"], &[("Counter--primary", true)], None);
        assert!(list.contains("Counter--primary"));
        assert_eq!(list.to_attribute().as_deref(), Some("Counter Counter--primary"));
    }

    #[test]
    fn extra_classes_decode_from_string_or_list() {
        let spaced: ExtraClasses = serde_json::from_str(r#""a b""#).unwrap();
        assert_eq!(spaced.tokens(), vec!["a", "b"]);

        let list: ExtraClasses = serde_json::from_str(r#"["a", "b c"]"#).unwrap();
        assert_eq!(list.tokens(), vec!["a", "b", "c"]);
    }
}
