//! Buttons, with optional leading icon, trailing counter and caret.

use serde::Deserialize;
use viewkit_core::{
    Element, Node, OptionSet, RenderOptions, Spacer, Symbol, SystemArguments, Tag, ViewError,
    option_set, resolve_or_default,
};

use crate::base::BaseComponent;
use crate::component::Component;
use crate::counter::CounterComponent;
use crate::octicon::OcticonComponent;
use crate::spec::{Cardinality, ComponentSpec, SlotSpec, Status};

static BUTTON: ComponentSpec = ComponentSpec {
    name: "Button",
    default_tag: Tag::Button,
    fixed_tag: false,
    base_classes: &[],
    status: Status::Beta,
    accessibility: Some(
        "Render an `a` when the control navigates and a `button` when it performs an action.",
    ),
    slots: &[
        SlotSpec {
            name: "icon",
            owner: "Button.icon",
            cardinality: Cardinality::One,
            default_tag: Tag::Svg,
            fixed_tag: true,
            base_classes: &[],
            required: false,
        },
        SlotSpec {
            name: "counter",
            owner: "Button.counter",
            cardinality: Cardinality::One,
            default_tag: Tag::Span,
            fixed_tag: true,
            base_classes: &[],
            required: false,
        },
    ],
};

option_set! {
    /// Color scheme.
    pub enum ButtonScheme in "scheme" {
        /// Neutral.
        Default => "default",
        /// Primary call to action.
        Primary => "primary",
        /// Destructive action.
        Danger => "danger",
        /// Outlined.
        Outline => "outline",
        /// No border or background until hovered.
        Invisible => "invisible",
        /// Styled like a link; drops the `btn` class.
        Link => "link",
    }
    default = Default;
}

impl ButtonScheme {
    fn class(self) -> &'static str {
        match self {
            ButtonScheme::Default => "",
            ButtonScheme::Primary => "btn-primary",
            ButtonScheme::Danger => "btn-danger",
            ButtonScheme::Outline => "btn-outline",
            ButtonScheme::Invisible => "btn-invisible",
            ButtonScheme::Link => "btn-link",
        }
    }
}

option_set! {
    /// Size variant.
    pub enum ButtonVariant in "variant" {
        /// Compact.
        Small => "small",
        /// Regular.
        Medium => "medium",
        /// Large.
        Large => "large",
    }
    default = Medium;
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Small => "btn-sm",
            ButtonVariant::Medium => "",
            ButtonVariant::Large => "btn-large",
        }
    }
}

option_set! {
    /// Tags a button may render as.
    pub enum ButtonTag in "tag" {
        /// `<button>`
        Button => "button",
        /// `<a>`
        A => "a",
        /// `<summary>`
        Summary => "summary",
    }
    default = Button;
}

impl From<ButtonTag> for Tag {
    fn from(value: ButtonTag) -> Self {
        match value {
            ButtonTag::Button => Tag::Button,
            ButtonTag::A => Tag::A,
            ButtonTag::Summary => Tag::Summary,
        }
    }
}

option_set! {
    /// The `type` attribute of a `<button>`.
    pub enum ButtonType in "type" {
        /// Plain button.
        Button => "button",
        /// Resets its form.
        Reset => "reset",
        /// Submits its form.
        Submit => "submit",
    }
    default = Button;
}

/// Button configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ButtonConfig {
    /// One of `default`, `primary`, `danger`, `outline`, `invisible`, `link`.
    pub scheme: Option<Symbol>,
    /// One of `small`, `medium`, `large`.
    pub variant: Option<Symbol>,
    /// One of `button`, `reset`, `submit`. Ignored unless the tag is `button`.
    #[serde(rename = "type")]
    pub button_type: Option<Symbol>,
    /// Renders as an item of a button group.
    pub group_item: bool,
    /// Fills the container width.
    pub block: bool,
    /// Appends a dropdown caret.
    pub caret: bool,
    /// System arguments; `tag` is one of `button`, `a`, `summary`.
    #[serde(flatten)]
    pub system: SystemArguments,
}

/// Renders a `<button class="btn">` and its slots.
///
/// ```
/// use viewkit_components::{ButtonComponent, ButtonScheme, Component};
/// use viewkit_core::RenderOptions;
///
/// let button = ButtonComponent::new()
///     .scheme(ButtonScheme::Primary)
///     .content("Save");
/// let element = button.render(&RenderOptions::strict()).unwrap();
/// assert_eq!(element.class(), Some("btn btn-primary"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ButtonComponent {
    config: ButtonConfig,
    icon: Option<OcticonComponent>,
    counter: Option<CounterComponent>,
    content: Vec<Node>,
}

impl ButtonComponent {
    /// Creates a default button.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a button from decoded configuration.
    pub fn from_config(config: ButtonConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Requests a scheme.
    pub fn scheme(mut self, scheme: impl Into<Symbol>) -> Self {
        self.config.scheme = Some(scheme.into());
        self
    }

    /// Requests a size variant.
    pub fn variant(mut self, variant: impl Into<Symbol>) -> Self {
        self.config.variant = Some(variant.into());
        self
    }

    /// Requests a tag.
    pub fn tag(mut self, tag: impl Into<Symbol>) -> Self {
        self.config.system.tag = Some(tag.into());
        self
    }

    /// Requests a `type` attribute.
    pub fn button_type(mut self, button_type: impl Into<Symbol>) -> Self {
        self.config.button_type = Some(button_type.into());
        self
    }

    /// Fills the container width.
    pub fn block(mut self, block: bool) -> Self {
        self.config.block = block;
        self
    }

    /// Marks the button as a group item.
    pub fn group_item(mut self, group_item: bool) -> Self {
        self.config.group_item = group_item;
        self
    }

    /// Appends a dropdown caret.
    pub fn caret(mut self, caret: bool) -> Self {
        self.config.caret = caret;
        self
    }

    /// Replaces the system arguments, keeping a tag set through [`ButtonComponent::tag`].
    pub fn system(mut self, system: SystemArguments) -> Self {
        let tag = self.config.system.tag.take();
        self.config.system = system;
        if self.config.system.tag.is_none() {
            self.config.system.tag = tag;
        }
        self
    }

    /// Fills the `icon` slot.
    pub fn with_icon(mut self, icon: OcticonComponent) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Fills the `counter` slot.
    pub fn with_counter(mut self, counter: CounterComponent) -> Self {
        self.counter = Some(counter);
        self
    }

    /// Appends a text node to the label.
    pub fn content(mut self, text: impl Into<String>) -> Self {
        self.content.push(Node::text(text));
        self
    }

    /// Appends any node to the label.
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.content.push(node.into());
        self
    }
}

/// Resolved button values.
#[derive(Debug)]
pub struct ResolvedButton {
    tag: ButtonTag,
    button_type: ButtonType,
    root: BaseComponent,
}

impl Component for ButtonComponent {
    type Resolved = ResolvedButton;

    fn spec(&self) -> &'static ComponentSpec {
        &BUTTON
    }

    fn has_slot(&self, name: &str) -> bool {
        match name {
            "icon" => self.icon.is_some(),
            "counter" => self.counter.is_some(),
            _ => false,
        }
    }

    fn resolve(&self, options: &RenderOptions) -> Result<ResolvedButton, ViewError> {
        let mode = options.fallback_mode();
        let tag: ButtonTag = resolve_or_default(self.config.system.tag.as_ref(), mode)?;
        let scheme: ButtonScheme = resolve_or_default(self.config.scheme.as_ref(), mode)?;
        let variant: ButtonVariant = resolve_or_default(self.config.variant.as_ref(), mode)?;
        let button_type = resolve_or_default(self.config.button_type.as_ref(), mode)?;

        let root = BaseComponent::for_component(&BUTTON, self.config.system.clone())?
            .with_tag(tag.into())
            .class_if("btn", scheme != ButtonScheme::Link)
            .class_if(scheme.class(), true)
            .class_if(variant.class(), true)
            .class_if("btn-block", self.config.block)
            .class_if("BtnGroup-item", self.config.group_item);
        Ok(ResolvedButton {
            tag,
            button_type,
            root,
        })
    }

    fn emit(
        &self,
        resolved: ResolvedButton,
        options: &RenderOptions,
    ) -> Result<Element, ViewError> {
        let ResolvedButton {
            tag,
            button_type,
            mut root,
        } = resolved;
        if tag == ButtonTag::Button {
            root = root.attribute("type", button_type.symbol());
        }

        if let Some(icon) = &self.icon {
            let mut icon = icon.clone();
            let margins = &mut icon.config.system.margins;
            margins.mr = margins.mr.or(Spacer::new(1));
            root = root.child(icon.render(options)?);
        }
        root = root.children(self.content.iter().cloned());
        if let Some(counter) = &self.counter {
            let mut counter = counter.clone();
            let margins = &mut counter.config.system.margins;
            margins.ml = margins.ml.or(Spacer::new(1));
            root = root.child(counter.render(options)?);
        }
        if self.config.caret {
            let mut caret = OcticonComponent::new("triangle-down");
            caret.config.system.margins.ml = Spacer::new(2);
            root = root.child(caret.render(options)?);
        }

        root.render(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use viewkit_core::AttrValue;

    fn render(button: ButtonComponent) -> Element {
        button.render(&RenderOptions::strict()).unwrap()
    }

    #[test]
    fn default_button_has_type() {
        let element = render(ButtonComponent::new().content("content"));
        assert_eq!(element.tag(), Tag::Button);
        assert_eq!(element.class(), Some("btn"));
        assert_eq!(element.attribute("type"), Some(&AttrValue::from("button")));
    }

    #[test]
    fn class_order() {
        let element = render(
            ButtonComponent::new()
                .scheme(ButtonScheme::Primary)
                .variant(ButtonVariant::Small)
                .block(true)
                .group_item(true)
                .system(
                    SystemArguments::new()
                        .mt(Spacer::new(2).unwrap())
                        .classes("custom"),
                ),
        );
        assert_eq!(
            element.class(),
            Some("btn btn-primary btn-sm btn-block BtnGroup-item mt-2 custom")
        );
    }

    #[test]
    fn slot_children_order() {
        let element = render(
            ButtonComponent::new()
                .with_icon(OcticonComponent::new("star"))
                .with_counter(CounterComponent::new(10))
                .caret(true)
                .content("Button"),
        );
        let kinds: Vec<String> = element
            .children()
            .iter()
            .map(|node| match node {
                Node::Element(el) => el.class().unwrap_or_default().to_string(),
                Node::Text(text) => text.clone(),
            })
            .collect();
        assert_eq!(
            kinds,
            vec![
                "octicon octicon-star mr-1",
                "Button",
                "Counter ml-1",
                "octicon octicon-triangle-down ml-2",
            ]
        );
    }

    #[test]
    fn slot_margins_defer_to_caller() {
        let icon = OcticonComponent::new("star")
            .system(SystemArguments::new().mr(Spacer::new(3).unwrap()));
        let element = render(ButtonComponent::new().with_icon(icon));
        let svg = element.children()[0].as_element().unwrap();
        assert_eq!(svg.class(), Some("octicon octicon-star mr-3"));
    }

    #[test]
    fn has_slot_reports_filled_slots() {
        let button = ButtonComponent::new().with_counter(CounterComponent::new(1));
        assert!(button.has_slot("counter"));
        assert!(!button.has_slot("icon"));
        assert!(button.is_renderable());
    }

    #[test]
    fn decodes_type_field() {
        let config: ButtonConfig = serde_json::from_value(serde_json::json!({
            "scheme": "danger",
            "type": "submit",
            "tag": "button",
            "block": true
        }))
        .unwrap();
        assert_eq!(config.button_type, Some(Symbol::new("submit")));
        assert_eq!(config.system.tag, Some(Symbol::new("button")));

        let element = render(ButtonComponent::from_config(config));
        assert_eq!(element.class(), Some("btn btn-danger btn-block"));
        assert_eq!(element.attribute("type"), Some(&AttrValue::from("submit")));
    }
}
