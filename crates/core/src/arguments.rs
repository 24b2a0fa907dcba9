//! Arguments every component accepts.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::classes::ExtraClasses;
use crate::element::AttrValue;
use crate::error::StructuralConflictError;
use crate::resolve::Symbol;

/// A spacing scale step (`0` through `6`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Spacer(u8);

impl Spacer {
    /// Largest step on the scale.
    pub const MAX: u8 = 6;

    /// Returns the spacer for `step`, or `None` past [`Spacer::MAX`].
    pub const fn new(step: u8) -> Option<Self> {
        if step <= Self::MAX {
            Some(Self(step))
        } else {
            None
        }
    }

    /// Returns the step.
    pub const fn step(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Spacer {
    type Error = String;

    fn try_from(step: u8) -> Result<Self, Self::Error> {
        Spacer::new(step).ok_or_else(|| format!("spacer must be 0..={}, got {step}", Spacer::MAX))
    }
}

impl From<Spacer> for u8 {
    fn from(value: Spacer) -> Self {
        value.0
    }
}

impl fmt::Display for Spacer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Margin utilities, each rendered as a `<prefix>-<step>` class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    /// `mt-N`
    pub mt: Option<Spacer>,
    /// `mr-N`
    pub mr: Option<Spacer>,
    /// `mb-N`
    pub mb: Option<Spacer>,
    /// `ml-N`
    pub ml: Option<Spacer>,
    /// `mx-N`
    pub mx: Option<Spacer>,
    /// `my-N`
    pub my: Option<Spacer>,
}

impl Margins {
    /// Returns the utility classes in a fixed order: top, right, bottom, left, x, y.
    pub fn classes(&self) -> Vec<String> {
        [
            ("mt", self.mt),
            ("mr", self.mr),
            ("mb", self.mb),
            ("ml", self.ml),
            ("mx", self.mx),
            ("my", self.my),
        ]
        .into_iter()
        .filter_map(|(prefix, spacer)| spacer.map(|s| format!("{prefix}-{s}")))
        .collect()
    }
}

/// Configuration shared by every component and slot.
///
/// `tag` is structural: components that fix their tag reject it through
/// [`SystemArguments::deny_structural_override`], components that accept a
/// choice of tags resolve it like any other option.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemArguments {
    /// Requested tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<Symbol>,
    /// Extra classes appended after the component's own.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classes: Option<ExtraClasses>,
    /// Margin utilities.
    #[serde(flatten)]
    pub margins: Margins,
    /// Any other HTML attribute (`id`, `href`, `data-*`, `aria-*`).
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, AttrValue>,
}

impl SystemArguments {
    /// Creates empty arguments.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests a tag.
    pub fn tag(mut self, tag: impl Into<Symbol>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Sets the extra classes.
    pub fn classes(mut self, classes: impl Into<ExtraClasses>) -> Self {
        self.classes = Some(classes.into());
        self
    }

    /// Sets an HTML attribute.
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Sets the bottom margin.
    pub fn mb(mut self, spacer: Spacer) -> Self {
        self.margins.mb = Some(spacer);
        self
    }

    /// Sets the top margin.
    pub fn mt(mut self, spacer: Spacer) -> Self {
        self.margins.mt = Some(spacer);
        self
    }

    /// Sets the left margin.
    pub fn ml(mut self, spacer: Spacer) -> Self {
        self.margins.ml = Some(spacer);
        self
    }

    /// Sets the right margin.
    pub fn mr(mut self, spacer: Spacer) -> Self {
        self.margins.mr = Some(spacer);
        self
    }

    /// Rejects a caller-supplied `tag` for an owner whose tag is fixed.
    ///
    /// Returns the arguments unchanged when no tag was requested. The error
    /// is independent of the fallback mode: overriding a fixed tag is a
    /// caller bug, not bad data.
    pub fn deny_structural_override(
        self,
        owner: &'static str,
    ) -> Result<Self, StructuralConflictError> {
        if self.tag.is_some() {
            return Err(StructuralConflictError { key: "tag", owner });
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spacer(step: u8) -> Spacer {
        Spacer::new(step).unwrap()
    }

    #[test]
    fn deny_structural_override_rejects_tag() {
        let err = SystemArguments::new()
            .tag("span")
            .deny_structural_override("Subhead.description")
            .unwrap_err();
        assert_eq!(err.key, "tag");
        assert_eq!(err.owner, "Subhead.description");
    }

    #[test]
    fn deny_structural_override_passes_other_arguments_through() {
        let args = SystemArguments::new()
            .classes("extra")
            .attribute("id", "main")
            .mb(spacer(2));
        let passed = args.clone().deny_structural_override("Subhead").unwrap();
        assert_eq!(passed, args);
    }

    #[test]
    fn margins_render_in_fixed_order() {
        let args = SystemArguments::new().mb(spacer(0)).mt(spacer(3)).ml(spacer(1));
        assert_eq!(args.margins.classes(), vec!["mt-3", "mb-0", "ml-1"]);
    }

    #[test]
    fn spacer_rejects_steps_past_scale() {
        assert!(Spacer::new(6).is_some());
        assert!(Spacer::new(7).is_none());
        assert!(Spacer::try_from(9u8).is_err());
    }

    #[test]
    fn decodes_from_json() {
        let args: SystemArguments = serde_json::from_value(serde_json::json!({
            "tag": "h3",
            "classes": ["a", "b"],
            "mb": 4,
            "attributes": { "id": "title", "hidden": true }
        }))
        .unwrap();

        assert_eq!(args.tag, Some(Symbol::new("h3")));
        assert_eq!(args.classes, Some(ExtraClasses::from(["a", "b"])));
        assert_eq!(args.margins.mb, Some(spacer(4)));
        assert_eq!(args.attributes.get("id"), Some(&AttrValue::from("title")));
        assert_eq!(args.attributes.get("hidden"), Some(&AttrValue::Flag(true)));
    }

    #[test]
    fn out_of_scale_margin_fails_to_decode() {
        let result: Result<SystemArguments, _> =
            serde_json::from_value(serde_json::json!({ "mb": 12 }));
        assert!(result.is_err());
    }
}
