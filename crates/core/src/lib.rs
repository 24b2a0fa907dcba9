#![deny(missing_docs)]
//! viewkit core: option resolution, class composition, and markup trees.

/// System arguments shared by every component.
pub mod arguments;
/// Class-name composition.
pub mod classes;
/// The emitted markup tree.
pub mod element;
/// Core error types.
pub mod error;
/// Render-time configuration.
pub mod options;
/// Option resolution with fallback.
pub mod resolve;

pub use arguments::{Margins, Spacer, SystemArguments};
pub use classes::{ClassList, ExtraClasses, class_names, compose};
pub use element::{AttrValue, Element, Node, Tag, is_valid_attribute_name};
pub use error::{InvalidOptionError, StructuralConflictError, ViewError};
pub use options::{FallbackMode, RenderOptions};
pub use resolve::{OptionSet, Symbol, fetch_or_fallback, resolve, resolve_or_default};
