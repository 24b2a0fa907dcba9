//! Styled links.

use serde::Deserialize;
use viewkit_core::{
    Element, RenderOptions, Symbol, SystemArguments, Tag, ViewError, option_set,
    resolve_or_default,
};

use crate::base::BaseComponent;
use crate::component::Component;
use crate::spec::{ComponentSpec, Status};

static LINK: ComponentSpec = ComponentSpec {
    name: "Link",
    default_tag: Tag::A,
    fixed_tag: false,
    base_classes: &[],
    status: Status::Stable,
    accessibility: Some("Use a `span` tag only for link-styled text that does not navigate."),
    slots: &[],
};

option_set! {
    /// Color scheme.
    pub enum LinkScheme in "scheme" {
        /// Inherits the default link color.
        Default => "default",
        /// High emphasis.
        Primary => "primary",
        /// Low emphasis.
        Secondary => "secondary",
    }
    default = Default;
}

impl LinkScheme {
    fn class(self) -> &'static str {
        match self {
            LinkScheme::Default => "",
            LinkScheme::Primary => "Link--primary",
            LinkScheme::Secondary => "Link--secondary",
        }
    }
}

option_set! {
    /// Tags a link may render as.
    pub enum LinkTag in "tag" {
        /// `<a>`
        A => "a",
        /// `<span>`
        Span => "span",
    }
    default = A;
}

impl From<LinkTag> for Tag {
    fn from(value: LinkTag) -> Self {
        match value {
            LinkTag::A => Tag::A,
            LinkTag::Span => Tag::Span,
        }
    }
}

/// Link configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LinkConfig {
    /// Link target, emitted only on `a` tags.
    pub href: Option<String>,
    /// One of `default`, `primary`, `secondary`.
    pub scheme: Option<Symbol>,
    /// Uses the muted link color.
    pub muted: bool,
    /// Shows the underline; `false` adds `no-underline`.
    pub underline: bool,
    /// System arguments; `tag` is one of `a` or `span`.
    #[serde(flatten)]
    pub system: SystemArguments,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            href: None,
            scheme: None,
            muted: false,
            underline: true,
            system: SystemArguments::default(),
        }
    }
}

/// Renders a styled `<a>` (or `<span>`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkComponent {
    config: LinkConfig,
    content: String,
}

impl LinkComponent {
    /// Creates a link to `href`.
    pub fn new(href: impl Into<String>) -> Self {
        Self::from_config(LinkConfig {
            href: Some(href.into()),
            ..LinkConfig::default()
        })
    }

    /// Creates a link from decoded configuration.
    pub fn from_config(config: LinkConfig) -> Self {
        Self {
            config,
            content: String::new(),
        }
    }

    /// Requests a scheme.
    pub fn scheme(mut self, scheme: impl Into<Symbol>) -> Self {
        self.config.scheme = Some(scheme.into());
        self
    }

    /// Uses the muted color.
    pub fn muted(mut self, muted: bool) -> Self {
        self.config.muted = muted;
        self
    }

    /// Shows or hides the underline.
    pub fn underline(mut self, underline: bool) -> Self {
        self.config.underline = underline;
        self
    }

    /// Replaces the system arguments.
    pub fn system(mut self, system: SystemArguments) -> Self {
        self.config.system = system;
        self
    }

    /// Sets the link text.
    pub fn content(mut self, text: impl Into<String>) -> Self {
        self.content = text.into();
        self
    }
}

/// Resolved link values.
#[derive(Debug)]
pub struct ResolvedLink {
    tag: LinkTag,
    root: BaseComponent,
}

impl Component for LinkComponent {
    type Resolved = ResolvedLink;

    fn spec(&self) -> &'static ComponentSpec {
        &LINK
    }

    fn resolve(&self, options: &RenderOptions) -> Result<ResolvedLink, ViewError> {
        let mode = options.fallback_mode();
        let tag = resolve_or_default::<LinkTag>(self.config.system.tag.as_ref(), mode)?;
        let scheme = resolve_or_default::<LinkScheme>(self.config.scheme.as_ref(), mode)?;
        let root = BaseComponent::for_component(&LINK, self.config.system.clone())?
            .with_tag(tag.into())
            .class_if(scheme.class(), true)
            .class_if("Link--muted", self.config.muted)
            .class_if("no-underline", !self.config.underline);
        Ok(ResolvedLink { tag, root })
    }

    fn emit(&self, resolved: ResolvedLink, options: &RenderOptions) -> Result<Element, ViewError> {
        let ResolvedLink { tag, mut root } = resolved;
        if let (LinkTag::A, Some(href)) = (tag, &self.config.href) {
            root = root.attribute("href", href.as_str());
        }
        if !self.content.is_empty() {
            root = root.child(self.content.as_str());
        }
        root.render(options)
    }
}
