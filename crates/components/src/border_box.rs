//! BorderBox: a bordered container with header, body, rows and footer.

use serde::Deserialize;
use viewkit_core::{
    Element, Node, RenderOptions, Symbol, SystemArguments, Tag, ViewError, option_set,
    resolve_or_default,
};

use crate::base::BaseComponent;
use crate::component::{Component, Slot};
use crate::spec::{Cardinality, ComponentSpec, SlotSpec, Status};

const HEADER: SlotSpec = SlotSpec {
    name: "header",
    owner: "BorderBox.header",
    cardinality: Cardinality::One,
    default_tag: Tag::Div,
    fixed_tag: true,
    base_classes: &["Box-header"],
    required: false,
};

const BODY: SlotSpec = SlotSpec {
    name: "body",
    owner: "BorderBox.body",
    cardinality: Cardinality::One,
    default_tag: Tag::Div,
    fixed_tag: true,
    base_classes: &["Box-body"],
    required: false,
};

const ROWS: SlotSpec = SlotSpec {
    name: "rows",
    owner: "BorderBox.rows",
    cardinality: Cardinality::Many,
    default_tag: Tag::Li,
    fixed_tag: true,
    base_classes: &["Box-row"],
    required: false,
};

const FOOTER: SlotSpec = SlotSpec {
    name: "footer",
    owner: "BorderBox.footer",
    cardinality: Cardinality::One,
    default_tag: Tag::Div,
    fixed_tag: true,
    base_classes: &["Box-footer"],
    required: false,
};

static BORDER_BOX: ComponentSpec = ComponentSpec {
    name: "BorderBox",
    default_tag: Tag::Div,
    fixed_tag: true,
    base_classes: &["Box"],
    status: Status::Beta,
    accessibility: None,
    slots: &[HEADER, BODY, ROWS, FOOTER],
};

option_set! {
    /// Inner spacing of the box sections.
    pub enum BoxPadding in "padding" {
        /// Regular.
        Default => "default",
        /// Tighter.
        Condensed => "condensed",
        /// Looser.
        Spacious => "spacious",
    }
    default = Default;
}

impl BoxPadding {
    fn class(self) -> &'static str {
        match self {
            BoxPadding::Default => "",
            BoxPadding::Condensed => "Box--condensed",
            BoxPadding::Spacious => "Box--spacious",
        }
    }
}

option_set! {
    /// Background of a single row.
    pub enum RowScheme in "scheme" {
        /// No background.
        Default => "default",
        /// Gray.
        Neutral => "neutral",
        /// Blue.
        Info => "info",
        /// Yellow.
        Warning => "warning",
    }
    default = Default;
}

impl RowScheme {
    fn class(self) -> &'static str {
        match self {
            RowScheme::Default => "",
            RowScheme::Neutral => "Box-row--gray",
            RowScheme::Info => "Box-row--blue",
            RowScheme::Warning => "Box-row--yellow",
        }
    }
}

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BorderBoxConfig {
    /// One of `default`, `condensed`, `spacious`.
    pub padding: Option<Symbol>,
    /// System arguments; the tag is fixed to `div`.
    #[serde(flatten)]
    pub system: SystemArguments,
}

/// Row slot arguments.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RowArgs {
    /// One of `default`, `neutral`, `info`, `warning`.
    pub scheme: Option<Symbol>,
    /// System arguments; the tag is fixed to `li`.
    #[serde(flatten)]
    pub system: SystemArguments,
}

/// Renders a `<div class="Box">`.
///
/// Renderable once any slot is filled. Rows render inside a single `<ul>`
/// in the order they were added.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BorderBoxComponent {
    config: BorderBoxConfig,
    header: Option<Slot<SystemArguments>>,
    body: Option<Slot<SystemArguments>>,
    rows: Vec<Slot<RowArgs>>,
    footer: Option<Slot<SystemArguments>>,
}

impl BorderBoxComponent {
    /// Creates an empty box.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a box from decoded configuration.
    pub fn from_config(config: BorderBoxConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Requests a padding.
    pub fn padding(mut self, padding: impl Into<Symbol>) -> Self {
        self.config.padding = Some(padding.into());
        self
    }

    /// Replaces the root system arguments.
    pub fn system(mut self, system: SystemArguments) -> Self {
        self.config.system = system;
        self
    }

    /// Fills the `header` slot.
    pub fn with_header(mut self, header: Slot<SystemArguments>) -> Self {
        self.header = Some(header);
        self
    }

    /// Fills the `body` slot.
    pub fn with_body(mut self, body: Slot<SystemArguments>) -> Self {
        self.body = Some(body);
        self
    }

    /// Appends a row.
    pub fn with_row(mut self, row: Slot<RowArgs>) -> Self {
        self.rows.push(row);
        self
    }

    /// Fills the `footer` slot.
    pub fn with_footer(mut self, footer: Slot<SystemArguments>) -> Self {
        self.footer = Some(footer);
        self
    }
}

fn render_section(
    spec: &SlotSpec,
    slot: &Slot<SystemArguments>,
    options: &RenderOptions,
) -> Result<Node, ViewError> {
    let element = BaseComponent::for_slot(spec, slot.args.clone())?
        .children(slot.content.iter().cloned())
        .render(options)?;
    Ok(element.into())
}

fn render_row(slot: &Slot<RowArgs>, options: &RenderOptions) -> Result<Node, ViewError> {
    let scheme =
        resolve_or_default::<RowScheme>(slot.args.scheme.as_ref(), options.fallback_mode())?;
    let element = BaseComponent::for_slot(&ROWS, slot.args.system.clone())?
        .class_if(scheme.class(), true)
        .children(slot.content.iter().cloned())
        .render(options)?;
    Ok(element.into())
}

impl Component for BorderBoxComponent {
    type Resolved = BaseComponent;

    fn spec(&self) -> &'static ComponentSpec {
        &BORDER_BOX
    }

    fn has_slot(&self, name: &str) -> bool {
        match name {
            "header" => self.header.is_some(),
            "body" => self.body.is_some(),
            "rows" => !self.rows.is_empty(),
            "footer" => self.footer.is_some(),
            _ => false,
        }
    }

    fn is_renderable(&self) -> bool {
        BORDER_BOX.slots.iter().any(|slot| self.has_slot(slot.name))
    }

    fn resolve(&self, options: &RenderOptions) -> Result<BaseComponent, ViewError> {
        let padding = resolve_or_default::<BoxPadding>(
            self.config.padding.as_ref(),
            options.fallback_mode(),
        )?;
        Ok(BaseComponent::for_component(&BORDER_BOX, self.config.system.clone())?
            .class_if(padding.class(), true))
    }

    fn emit(&self, root: BaseComponent, options: &RenderOptions) -> Result<Element, ViewError> {
        let mut children = Vec::new();
        if let Some(header) = &self.header {
            children.push(render_section(&HEADER, header, options)?);
        }
        if let Some(body) = &self.body {
            children.push(render_section(&BODY, body, options)?);
        }
        if !self.rows.is_empty() {
            let mut list = Element::new(Tag::Ul);
            for row in &self.rows {
                list.push_child(render_row(row, options)?);
            }
            children.push(list.into());
        }
        if let Some(footer) = &self.footer {
            children.push(render_section(&FOOTER, footer, options)?);
        }

        root.children(children).render(options)
    }
}
