#![deny(missing_docs)]
//! viewkit components: Primer-style UI components rendered to markup trees.
//!
//! Every component follows the same pipeline (see [`component`]): options
//! are resolved against closed families with fallback, classes and
//! attributes are composed, and slots are rendered in declaration order.

/// Generic element every component renders through.
pub mod base;
/// Bordered container with repeatable rows.
pub mod border_box;
/// Buttons with icon, counter and caret slots.
pub mod button;
/// The render pipeline trait and slot invocations.
pub mod component;
/// Numeric badges.
pub mod counter;
/// HTML serialization.
pub mod html;
/// Styled links.
pub mod link;
/// SVG icons.
pub mod octicon;
/// Static component and slot definitions.
pub mod spec;
/// Section headers.
pub mod subhead;

pub use base::BaseComponent;
pub use border_box::{BorderBoxComponent, BorderBoxConfig, BoxPadding, RowArgs, RowScheme};
pub use button::{ButtonComponent, ButtonConfig, ButtonScheme, ButtonTag, ButtonType, ButtonVariant};
pub use component::{Component, Slot, render_inline};
pub use counter::{CounterComponent, CounterConfig, CounterScheme};
pub use html::{render_to_string, to_html};
pub use link::{LinkComponent, LinkConfig, LinkScheme, LinkTag};
pub use octicon::{Icon, OcticonComponent, OcticonConfig, OcticonSize, icon};
pub use spec::{Cardinality, ComponentSpec, SlotSpec, Status};
pub use subhead::{HeadingArgs, HeadingTag, SubheadComponent, SubheadConfig};
