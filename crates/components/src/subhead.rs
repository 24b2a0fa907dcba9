//! Subhead: a section header with a heading, actions and a description.

use serde::Deserialize;
use viewkit_core::{
    Element, Node, RenderOptions, Spacer, SystemArguments, Tag, ViewError, option_set,
    resolve_or_default,
};

use crate::base::BaseComponent;
use crate::component::{Component, Slot};
use crate::spec::{Cardinality, ComponentSpec, SlotSpec, Status};

const HEADING: SlotSpec = SlotSpec {
    name: "heading",
    owner: "Subhead.heading",
    cardinality: Cardinality::One,
    default_tag: Tag::Div,
    fixed_tag: false,
    base_classes: &["Subhead-heading"],
    required: true,
};

const ACTIONS: SlotSpec = SlotSpec {
    name: "actions",
    owner: "Subhead.actions",
    cardinality: Cardinality::One,
    default_tag: Tag::Div,
    fixed_tag: true,
    base_classes: &["Subhead-actions"],
    required: false,
};

const DESCRIPTION: SlotSpec = SlotSpec {
    name: "description",
    owner: "Subhead.description",
    cardinality: Cardinality::One,
    default_tag: Tag::Div,
    fixed_tag: true,
    base_classes: &["Subhead-description"],
    required: false,
};

static SUBHEAD: ComponentSpec = ComponentSpec {
    name: "Subhead",
    default_tag: Tag::Div,
    fixed_tag: true,
    base_classes: &["Subhead"],
    status: Status::Beta,
    accessibility: Some(
        "The heading renders a `div` by default. Choose an `h1`..`h6` tag that fits the page outline so assistive technologies can navigate to it.",
    ),
    slots: &[HEADING, ACTIONS, DESCRIPTION],
};

option_set! {
    /// Tags the heading slot may render as.
    pub enum HeadingTag in "tag" {
        /// `<div>`
        Div => "div",
        /// `<h1>`
        H1 => "h1",
        /// `<h2>`
        H2 => "h2",
        /// `<h3>`
        H3 => "h3",
        /// `<h4>`
        H4 => "h4",
        /// `<h5>`
        H5 => "h5",
        /// `<h6>`
        H6 => "h6",
    }
    default = Div;
}

impl From<HeadingTag> for Tag {
    fn from(value: HeadingTag) -> Self {
        match value {
            HeadingTag::Div => Tag::Div,
            HeadingTag::H1 => Tag::H1,
            HeadingTag::H2 => Tag::H2,
            HeadingTag::H3 => Tag::H3,
            HeadingTag::H4 => Tag::H4,
            HeadingTag::H5 => Tag::H5,
            HeadingTag::H6 => Tag::H6,
        }
    }
}

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SubheadConfig {
    /// Adds top spacing.
    pub spacious: bool,
    /// Removes the bottom border; also sets `mb` to 0 unless given.
    pub hide_border: bool,
    /// System arguments; the tag is fixed to `div`.
    #[serde(flatten)]
    pub system: SystemArguments,
}

/// Heading slot arguments.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct HeadingArgs {
    /// Uses the danger color.
    pub danger: bool,
    /// System arguments; `tag` is one of `div`, `h1`..`h6`.
    #[serde(flatten)]
    pub system: SystemArguments,
}

impl HeadingArgs {
    /// Heading arguments with the given tag.
    pub fn tag(tag: HeadingTag) -> Self {
        Self {
            danger: false,
            system: SystemArguments::new().tag(tag),
        }
    }
}

/// Renders a `<div class="Subhead">`.
///
/// Not renderable until the heading slot is filled.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubheadComponent {
    config: SubheadConfig,
    heading: Option<Slot<HeadingArgs>>,
    actions: Option<Slot<SystemArguments>>,
    description: Option<Slot<SystemArguments>>,
}

impl SubheadComponent {
    /// Creates a subhead with no slots filled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a subhead from decoded configuration.
    pub fn from_config(config: SubheadConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Adds top spacing.
    pub fn spacious(mut self, spacious: bool) -> Self {
        self.config.spacious = spacious;
        self
    }

    /// Removes the bottom border.
    pub fn hide_border(mut self, hide_border: bool) -> Self {
        self.config.hide_border = hide_border;
        self
    }

    /// Replaces the root system arguments.
    pub fn system(mut self, system: SystemArguments) -> Self {
        self.config.system = system;
        self
    }

    /// Fills the `heading` slot.
    pub fn with_heading(mut self, heading: Slot<HeadingArgs>) -> Self {
        self.heading = Some(heading);
        self
    }

    /// Fills the `actions` slot.
    pub fn with_actions(mut self, actions: Slot<SystemArguments>) -> Self {
        self.actions = Some(actions);
        self
    }

    /// Fills the `description` slot.
    pub fn with_description(mut self, description: Slot<SystemArguments>) -> Self {
        self.description = Some(description);
        self
    }
}

fn render_heading(slot: &Slot<HeadingArgs>, options: &RenderOptions) -> Result<Node, ViewError> {
    let tag = resolve_or_default::<HeadingTag>(
        slot.args.system.tag.as_ref(),
        options.fallback_mode(),
    )?;
    let element = BaseComponent::for_slot(&HEADING, slot.args.system.clone())?
        .with_tag(tag.into())
        .class_if("Subhead-heading--danger", slot.args.danger)
        .children(slot.content.iter().cloned())
        .render(options)?;
    Ok(element.into())
}

fn render_fixed_slot(
    spec: &SlotSpec,
    slot: &Slot<SystemArguments>,
    options: &RenderOptions,
) -> Result<Node, ViewError> {
    let element = BaseComponent::for_slot(spec, slot.args.clone())?
        .children(slot.content.iter().cloned())
        .render(options)?;
    Ok(element.into())
}

impl Component for SubheadComponent {
    type Resolved = BaseComponent;

    fn spec(&self) -> &'static ComponentSpec {
        &SUBHEAD
    }

    fn has_slot(&self, name: &str) -> bool {
        match name {
            "heading" => self.heading.is_some(),
            "actions" => self.actions.is_some(),
            "description" => self.description.is_some(),
            _ => false,
        }
    }

    fn resolve(&self, _options: &RenderOptions) -> Result<BaseComponent, ViewError> {
        let mut system = self.config.system.clone();
        if self.config.hide_border && system.margins.mb.is_none() {
            system.margins.mb = Spacer::new(0);
        }

        Ok(BaseComponent::for_component(&SUBHEAD, system)?
            .class_if("Subhead--spacious", self.config.spacious)
            .class_if("border-bottom-0", self.config.hide_border))
    }

    fn emit(&self, root: BaseComponent, options: &RenderOptions) -> Result<Element, ViewError> {
        let mut children = Vec::new();
        if let Some(heading) = &self.heading {
            children.push(render_heading(heading, options)?);
        }
        if let Some(actions) = &self.actions {
            children.push(render_fixed_slot(&ACTIONS, actions, options)?);
        }
        if let Some(description) = &self.description {
            children.push(render_fixed_slot(&DESCRIPTION, description, options)?);
        }
        root.children(children).render(options)
    }
}
