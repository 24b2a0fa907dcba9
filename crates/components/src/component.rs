//! The component render pipeline.
//!
//! Rendering a component is a straight line:
//!
//! 1. **Resolve**: enum-valued options go through the fallback resolver,
//!    structural keys through the override guard.
//! 2. **Emit**: resolved values are composed into classes and attributes,
//!    then every present slot is rendered the same way and embedded in
//!    declaration order.
//!
//! Whether a component renders at all is a separate, explicit question
//! ([`Component::is_renderable`]) that [`render_inline`] asks first.

use viewkit_core::{Element, Node, RenderOptions, ViewError};

use crate::spec::ComponentSpec;

/// One invocation of a slot: its arguments plus nested content.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Slot<A> {
    /// Slot-level configuration.
    pub args: A,
    /// Content rendered inside the slot.
    pub content: Vec<Node>,
}

impl<A> Slot<A> {
    /// Creates a slot invocation with no content.
    pub fn new(args: A) -> Self {
        Self {
            args,
            content: Vec::new(),
        }
    }

    /// Appends a text node.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.content.push(Node::text(text));
        self
    }

    /// Appends any node, typically a rendered nested component.
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.content.push(node.into());
        self
    }
}

/// A renderable component.
pub trait Component {
    /// Values produced by the resolve step and consumed by the emit step.
    type Resolved;

    /// Returns the static definition of this component kind.
    fn spec(&self) -> &'static ComponentSpec;

    /// Returns true if the named slot was invoked.
    fn has_slot(&self, _name: &str) -> bool {
        false
    }

    /// Returns true if the component has enough content to render.
    ///
    /// Defaults to "every required slot is present".
    fn is_renderable(&self) -> bool {
        self.spec()
            .required_slots()
            .all(|slot| self.has_slot(slot.name))
    }

    /// Validates and resolves the component's configuration.
    fn resolve(&self, options: &RenderOptions) -> Result<Self::Resolved, ViewError>;

    /// Composes classes and attributes and renders slots.
    fn emit(&self, resolved: Self::Resolved, options: &RenderOptions)
    -> Result<Element, ViewError>;

    /// Runs resolve then emit.
    ///
    /// Does not check [`Component::is_renderable`]; use [`render_inline`]
    /// when the component may be incomplete.
    fn render(&self, options: &RenderOptions) -> Result<Element, ViewError> {
        let name = self.spec().name;
        log::trace!("{name}: resolving");
        let resolved = self.resolve(options)?;
        log::trace!("{name}: emitting");
        self.emit(resolved, options)
    }
}

/// Renders a component, or returns `Ok(None)` when it is not renderable.
pub fn render_inline<C: Component + ?Sized>(
    component: &C,
    options: &RenderOptions,
) -> Result<Option<Element>, ViewError> {
    if !component.is_renderable() {
        log::debug!(
            "{}: required slot missing, render suppressed",
            component.spec().name
        );
        return Ok(None);
    }
    component.render(options).map(Some)
}
