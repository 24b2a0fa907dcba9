//! Static component and slot definitions.
//!
//! A [`ComponentSpec`] is the fixed identity of a component kind: its tag,
//! base classes, lifecycle status and declared slots. Specs are `'static`
//! and never change; render calls read them but own nothing in them.

use viewkit_core::Tag;

/// Lifecycle status of a component, for documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Experimental; the API may change without notice.
    Alpha,
    /// Feature complete, still gathering feedback.
    Beta,
    /// Stable API.
    Stable,
    /// Scheduled for removal.
    Deprecated,
}

impl Status {
    /// Returns the lowercase status name.
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Alpha => "alpha",
            Status::Beta => "beta",
            Status::Stable => "stable",
            Status::Deprecated => "deprecated",
        }
    }
}

/// How many invocations a slot accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    /// At most one invocation.
    One,
    /// Any number of invocations, rendered in call order.
    Many,
}

/// A named region inside a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotSpec {
    /// Slot name (e.g. `"heading"`).
    pub name: &'static str,
    /// Qualified name used in errors (e.g. `"Subhead.actions"`).
    pub owner: &'static str,
    /// Singular or repeatable.
    pub cardinality: Cardinality,
    /// Tag rendered when the caller does not choose one.
    pub default_tag: Tag,
    /// Whether the caller is forbidden from choosing the tag.
    pub fixed_tag: bool,
    /// Classes every invocation carries.
    pub base_classes: &'static [&'static str],
    /// Whether the parent renders at all without this slot.
    pub required: bool,
}

/// The fixed identity of a component kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentSpec {
    /// Component name (e.g. `"Subhead"`).
    pub name: &'static str,
    /// Tag rendered when the caller does not choose one.
    pub default_tag: Tag,
    /// Whether the caller is forbidden from choosing the tag.
    pub fixed_tag: bool,
    /// Classes every instance carries.
    pub base_classes: &'static [&'static str],
    /// Lifecycle status.
    pub status: Status,
    /// Accessibility guidance for callers. Not read while rendering.
    pub accessibility: Option<&'static str>,
    /// Declared slots, in render order.
    pub slots: &'static [SlotSpec],
}

impl ComponentSpec {
    /// Looks up a declared slot by name.
    pub fn slot(&self, name: &str) -> Option<&SlotSpec> {
        self.slots.iter().find(|slot| slot.name == name)
    }

    /// Returns the slots the component cannot render without.
    pub fn required_slots(&self) -> impl Iterator<Item = &SlotSpec> {
        self.slots.iter().filter(|slot| slot.required)
    }
}
