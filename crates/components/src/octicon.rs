//! Octicon SVG icons.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Deserialize;
use viewkit_core::{
    Element, RenderOptions, Symbol, SystemArguments, Tag, ViewError, option_set,
    resolve_or_default,
};

use crate::base::BaseComponent;
use crate::component::Component;
use crate::spec::{ComponentSpec, Status};

static OCTICON: ComponentSpec = ComponentSpec {
    name: "Octicon",
    default_tag: Tag::Svg,
    fixed_tag: true,
    base_classes: &["octicon"],
    status: Status::Beta,
    accessibility: Some(
        "Icons are hidden from assistive technologies. Pair them with visible text or an aria-label on the surrounding control.",
    ),
    slots: &[],
};

option_set! {
    /// Rendered icon size.
    pub enum OcticonSize in "size" {
        /// 12px.
        XSmall => "xsmall",
        /// 16px.
        Small => "small",
        /// 32px.
        Medium => "medium",
    }
    default = Small;
}

impl OcticonSize {
    /// Returns the rendered height in pixels.
    pub fn pixels(self) -> u32 {
        match self {
            OcticonSize::XSmall => 12,
            OcticonSize::Small => 16,
            OcticonSize::Medium => 32,
        }
    }
}

/// One entry of the icon table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Icon {
    /// Icon name (e.g. `"star"`).
    pub name: &'static str,
    /// Natural width of the view box.
    pub width: u32,
    /// Natural height of the view box.
    pub height: u32,
    /// SVG path data.
    pub path: &'static str,
}

static ICONS: Lazy<HashMap<&'static str, Icon>> = Lazy::new(|| {
    [
        Icon {
            name: "star",
            width: 16,
            height: 16,
            path: "M8 .25a.75.75 0 0 1 .673.418l1.882 3.815 4.21.612a.75.75 0 0 1 .416 1.279l-3.046 2.97.719 4.192a.751.751 0 0 1-1.088.791L8 12.347l-3.766 1.98a.75.75 0 0 1-1.088-.79l.72-4.194L.818 6.374a.75.75 0 0 1 .416-1.28l4.21-.611L7.327.668A.75.75 0 0 1 8 .25Z",
        },
        Icon {
            name: "triangle-down",
            width: 16,
            height: 16,
            path: "m4.427 7.427 3.396 3.396a.25.25 0 0 0 .354 0l3.396-3.396A.25.25 0 0 0 11.396 7H4.604a.25.25 0 0 0-.177.427Z",
        },
        Icon {
            name: "x",
            width: 16,
            height: 16,
            path: "M3.72 3.72a.75.75 0 0 1 1.06 0L8 6.94l3.22-3.22a.749.749 0 0 1 1.275.326.749.749 0 0 1-.215.734L9.06 8l3.22 3.22a.749.749 0 0 1-.326 1.275.749.749 0 0 1-.734-.215L8 9.06l-3.22 3.22a.751.751 0 0 1-1.042-.018.751.751 0 0 1-.018-1.042L6.94 8 3.72 4.78a.75.75 0 0 1 0-1.06Z",
        },
        Icon {
            name: "check",
            width: 16,
            height: 16,
            path: "M13.78 4.22a.75.75 0 0 1 0 1.06l-7.25 7.25a.75.75 0 0 1-1.06 0L2.22 9.28a.751.751 0 0 1 .018-1.042.751.751 0 0 1 1.042-.018L6 10.94l6.72-6.72a.75.75 0 0 1 1.06 0Z",
        },
        Icon {
            name: "plus",
            width: 16,
            height: 16,
            path: "M7.75 2a.75.75 0 0 1 .75.75V7h4.25a.75.75 0 0 1 0 1.5H8.5v4.25a.75.75 0 0 1-1.5 0V8.5H2.75a.75.75 0 0 1 0-1.5H7V2.75A.75.75 0 0 1 7.75 2Z",
        },
    ]
    .into_iter()
    .map(|icon| (icon.name, icon))
    .collect()
});

/// Looks up an icon by name.
pub fn icon(name: &str) -> Option<&'static Icon> {
    ICONS.get(name)
}

/// Octicon configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct OcticonConfig {
    /// Icon name.
    pub icon: String,
    /// One of `xsmall`, `small` (default), `medium`.
    pub size: Option<Symbol>,
    /// System arguments; the tag is fixed to `svg`.
    #[serde(flatten)]
    pub system: SystemArguments,
}

/// Renders an `<svg>` octicon.
#[derive(Debug, Clone, PartialEq)]
pub struct OcticonComponent {
    pub(crate) config: OcticonConfig,
}

impl OcticonComponent {
    /// Creates an octicon for the named icon.
    pub fn new(icon: impl Into<String>) -> Self {
        Self::from_config(OcticonConfig {
            icon: icon.into(),
            ..OcticonConfig::default()
        })
    }

    /// Creates an octicon from decoded configuration.
    pub fn from_config(config: OcticonConfig) -> Self {
        Self { config }
    }

    /// Requests a size.
    pub fn size(mut self, size: impl Into<Symbol>) -> Self {
        self.config.size = Some(size.into());
        self
    }

    /// Replaces the system arguments.
    pub fn system(mut self, system: SystemArguments) -> Self {
        self.config.system = system;
        self
    }
}

/// Resolved octicon values.
#[derive(Debug)]
pub struct ResolvedOcticon {
    icon: &'static Icon,
    size: OcticonSize,
    root: BaseComponent,
}

impl Component for OcticonComponent {
    type Resolved = ResolvedOcticon;

    fn spec(&self) -> &'static ComponentSpec {
        &OCTICON
    }

    fn resolve(&self, options: &RenderOptions) -> Result<ResolvedOcticon, ViewError> {
        let root = BaseComponent::for_component(&OCTICON, self.config.system.clone())?;
        let icon =
            icon(&self.config.icon).ok_or_else(|| ViewError::unknown_icon(&self.config.icon))?;
        let size = resolve_or_default::<OcticonSize>(
            self.config.size.as_ref(),
            options.fallback_mode(),
        )?;
        Ok(ResolvedOcticon { icon, size, root })
    }

    fn emit(
        &self,
        resolved: ResolvedOcticon,
        options: &RenderOptions,
    ) -> Result<Element, ViewError> {
        let ResolvedOcticon { icon, size, root } = resolved;
        let height = size.pixels();
        let width = height * icon.width / icon.height;

        root.classes(format!("octicon-{}", icon.name))
            .attribute("viewBox", format!("0 0 {} {}", icon.width, icon.height))
            .attribute("width", width.to_string())
            .attribute("height", height.to_string())
            .attribute("aria-hidden", "true")
            .child(Element::new(Tag::Path).with_attribute("d", icon.path))
            .render(options)
    }
}
