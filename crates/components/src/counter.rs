//! Counters: a small badge showing a number.

use serde::Deserialize;
use viewkit_core::{
    Element, RenderOptions, Symbol, SystemArguments, Tag, ViewError, option_set,
    resolve_or_default,
};

use crate::base::BaseComponent;
use crate::component::Component;
use crate::spec::{ComponentSpec, Status};

static COUNTER: ComponentSpec = ComponentSpec {
    name: "Counter",
    default_tag: Tag::Span,
    fixed_tag: true,
    base_classes: &["Counter"],
    status: Status::Beta,
    accessibility: None,
    slots: &[],
};

/// Counts above this are shown as `5,000+` unless a limit is configured.
pub const DEFAULT_LIMIT: u64 = 5000;

option_set! {
    /// Color scheme.
    pub enum CounterScheme in "scheme" {
        /// Neutral.
        Default => "default",
        /// High emphasis.
        Primary => "primary",
        /// Low emphasis.
        Secondary => "secondary",
    }
    default = Default;
}

impl CounterScheme {
    fn class(self) -> &'static str {
        match self {
            CounterScheme::Default => "",
            CounterScheme::Primary => "Counter--primary",
            CounterScheme::Secondary => "Counter--secondary",
        }
    }
}

/// Counter configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    /// The number to show.
    pub count: Option<u64>,
    /// One of `default`, `primary`, `secondary`.
    pub scheme: Option<Symbol>,
    /// Largest count shown before clamping; `null` disables clamping.
    pub limit: Option<u64>,
    /// Hides the counter when the count is zero.
    pub hide_if_zero: bool,
    /// Text shown instead of the count.
    pub text: Option<String>,
    /// Abbreviates thousands (`1.5k`).
    pub round: bool,
    /// System arguments; the tag is fixed to `span`.
    #[serde(flatten)]
    pub system: SystemArguments,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            count: None,
            scheme: None,
            limit: Some(DEFAULT_LIMIT),
            hide_if_zero: false,
            text: None,
            round: false,
            system: SystemArguments::default(),
        }
    }
}

/// Renders a `<span class="Counter">`.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterComponent {
    pub(crate) config: CounterConfig,
}

impl CounterComponent {
    /// Creates a counter showing `count`.
    pub fn new(count: u64) -> Self {
        Self::from_config(CounterConfig {
            count: Some(count),
            ..CounterConfig::default()
        })
    }

    /// Creates a counter from decoded configuration.
    pub fn from_config(config: CounterConfig) -> Self {
        Self { config }
    }

    /// Requests a scheme.
    pub fn scheme(mut self, scheme: impl Into<Symbol>) -> Self {
        self.config.scheme = Some(scheme.into());
        self
    }

    /// Sets the clamping limit, or disables clamping with `None`.
    pub fn limit(mut self, limit: Option<u64>) -> Self {
        self.config.limit = limit;
        self
    }

    /// Hides the counter at zero.
    pub fn hide_if_zero(mut self, hide: bool) -> Self {
        self.config.hide_if_zero = hide;
        self
    }

    /// Shows `text` instead of the count.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.config.text = Some(text.into());
        self
    }

    /// Abbreviates thousands.
    pub fn round(mut self, round: bool) -> Self {
        self.config.round = round;
        self
    }

    /// Replaces the system arguments.
    pub fn system(mut self, system: SystemArguments) -> Self {
        self.config.system = system;
        self
    }

    fn value(&self) -> String {
        if let Some(text) = &self.config.text {
            return text.clone();
        }
        let Some(count) = self.config.count else {
            return String::new();
        };
        let (shown, clamped) = match self.config.limit {
            Some(limit) if count > limit => (limit, true),
            _ => (count, false),
        };
        let mut value = if self.config.round {
            abbreviate(shown)
        } else {
            delimit(shown)
        };
        if clamped {
            value.push('+');
        }
        value
    }

    fn title(&self) -> String {
        match (&self.config.text, self.config.count) {
            (Some(text), _) => text.clone(),
            (None, Some(count)) => delimit(count),
            (None, None) => "0".to_string(),
        }
    }
}

impl Component for CounterComponent {
    type Resolved = BaseComponent;

    fn spec(&self) -> &'static ComponentSpec {
        &COUNTER
    }

    fn resolve(&self, options: &RenderOptions) -> Result<BaseComponent, ViewError> {
        let scheme = resolve_or_default::<CounterScheme>(
            self.config.scheme.as_ref(),
            options.fallback_mode(),
        )?;
        Ok(BaseComponent::for_component(&COUNTER, self.config.system.clone())?
            .class_if(scheme.class(), true))
    }

    fn emit(&self, root: BaseComponent, options: &RenderOptions) -> Result<Element, ViewError> {
        let hidden = self.config.hide_if_zero
            && self.config.text.is_none()
            && self.config.count.unwrap_or(0) == 0;

        let mut root = root.attribute("title", self.title());
        if hidden {
            root = root.attribute("hidden", true);
        }
        root.child(self.value()).render(options)
    }
}

/// Formats `value` with comma thousands separators.
fn delimit(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Formats counts of 1000 and above as thousands with one decimal.
fn abbreviate(value: u64) -> String {
    if value < 1000 {
        return value.to_string();
    }
    let tenths = value / 100 + u64::from(value % 100 >= 50);
    match tenths % 10 {
        0 => format!("{}k", tenths / 10),
        frac => format!("{}.{frac}k", tenths / 10),
    }
}
