//! The generic element every component renders through.

use viewkit_core::{
    AttrValue, ClassList, Element, Node, RenderOptions, StructuralConflictError, SystemArguments,
    Tag, ViewError, compose, is_valid_attribute_name,
};

use crate::component::Component;
use crate::spec::{ComponentSpec, SlotSpec, Status};

static BASE: ComponentSpec = ComponentSpec {
    name: "BaseComponent",
    default_tag: Tag::Div,
    fixed_tag: false,
    base_classes: &[],
    status: Status::Stable,
    accessibility: None,
    slots: &[],
};

/// A single element built from a resolved tag and system arguments.
///
/// The tag must already be resolved by the caller; `system.tag` is ignored.
/// Classes compose as: the component's own classes, then margin utilities,
/// then the caller's extra classes. Attributes are emitted as `class`, the
/// caller's attributes in name order, then attributes the component sets.
/// Caller attributes whose names cannot be serialized are dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseComponent {
    tag: Tag,
    classes: ClassList,
    system: SystemArguments,
    attributes: Vec<(String, AttrValue)>,
    content: Vec<Node>,
}

impl BaseComponent {
    /// Creates a base component for `tag`.
    pub fn new(tag: Tag, system: SystemArguments) -> Self {
        Self {
            tag,
            classes: ClassList::new(),
            system,
            attributes: Vec::new(),
            content: Vec::new(),
        }
    }

    /// Starts the root element of a component.
    ///
    /// Renders the spec's default tag with its base classes. A component with
    /// a fixed tag rejects a caller-supplied `tag`.
    pub fn for_component(
        spec: &ComponentSpec,
        system: SystemArguments,
    ) -> Result<Self, StructuralConflictError> {
        let system = if spec.fixed_tag {
            system.deny_structural_override(spec.name)?
        } else {
            system
        };
        Ok(Self::new(spec.default_tag, system).classes(spec.base_classes.join(" ")))
    }

    /// Starts one invocation of a slot.
    ///
    /// Like [`BaseComponent::for_component`], using the slot's owner name in
    /// errors.
    pub fn for_slot(
        slot: &SlotSpec,
        system: SystemArguments,
    ) -> Result<Self, StructuralConflictError> {
        let system = if slot.fixed_tag {
            system.deny_structural_override(slot.owner)?
        } else {
            system
        };
        Ok(Self::new(slot.default_tag, system).classes(slot.base_classes.join(" ")))
    }

    /// Replaces the tag, for components and slots that let callers choose one.
    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tag = tag;
        self
    }

    /// Appends the component's own classes.
    pub fn classes(mut self, classes: impl AsRef<str>) -> Self {
        self.classes.push(classes.as_ref());
        self
    }

    /// Appends `classes` only when `enabled` is true.
    pub fn class_if(mut self, classes: &str, enabled: bool) -> Self {
        self.classes.push_if(classes, enabled);
        self
    }

    /// Sets a component-owned attribute, overriding a caller attribute of the same name.
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Appends a child node.
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.content.push(node.into());
        self
    }

    /// Appends child nodes.
    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.content.extend(nodes);
        self
    }

    /// Returns the tag this component renders.
    pub fn tag(&self) -> Tag {
        self.tag
    }
}

impl Component for BaseComponent {
    type Resolved = ClassList;

    fn spec(&self) -> &'static ComponentSpec {
        &BASE
    }

    fn resolve(&self, _options: &RenderOptions) -> Result<ClassList, ViewError> {
        let own: Vec<&str> = self.classes.tokens().iter().map(String::as_str).collect();
        let margins = self.system.margins.classes();
        let conditional: Vec<(&str, bool)> = margins.iter().map(|c| (c.as_str(), true)).collect();
        Ok(compose(&own, &conditional, self.system.classes.as_ref()))
    }

    fn emit(&self, classes: ClassList, _options: &RenderOptions) -> Result<Element, ViewError> {
        let mut element = Element::new(self.tag);
        if let Some(class) = classes.to_attribute() {
            element.set_attribute("class", class);
        }
        for (name, value) in &self.system.attributes {
            if name == "class" || !value.is_present() {
                continue;
            }
            if !is_valid_attribute_name(name) {
                log::debug!("dropping attribute with invalid name {name:?}");
                continue;
            }
            element.set_attribute(name.as_str(), value.clone());
        }
        for (name, value) in &self.attributes {
            element.set_attribute(name.as_str(), value.clone());
        }
        element.extend_children(self.content.iter().cloned());
        Ok(element)
    }
}
