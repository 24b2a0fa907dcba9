//! Option resolution with fallback.
//!
//! Every enum-like option a component accepts (a button scheme, a heading
//! tag, an icon size) belongs to a closed family declared with
//! [`option_set!`](crate::option_set). Callers hand values in as [`Symbol`]s,
//! which may come from typed code or from decoded JSON; [`resolve`] maps a
//! symbol back onto the family, substituting the fallback when the symbol is
//! not a member.
//!
//! Whether a non-member is an error depends on the [`FallbackMode`]:
//! production rendering falls back silently, strict rendering reports an
//! [`InvalidOptionError`] so test suites can see the bad input.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::InvalidOptionError;
use crate::options::FallbackMode;

/// An untyped option value as supplied by a caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Creates a symbol from any string-like value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the symbol text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Symbol {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A closed family of option values.
///
/// Implemented by the [`option_set!`](crate::option_set) macro; `ALL` lists
/// every variant in declaration order.
pub trait OptionSet: Copy + Eq + fmt::Debug + 'static {
    /// Family name used in error messages (e.g. `"scheme"`).
    const FAMILY: &'static str;
    /// Every member of the family.
    const ALL: &'static [Self];
    /// The member used when a caller supplies nothing.
    const DEFAULT: Self;

    /// Returns the symbol callers use to select this value.
    fn symbol(self) -> &'static str;

    /// Looks up the member with the given symbol.
    fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|value| value.symbol() == symbol)
    }
}

/// Declares an [`OptionSet`] enum.
///
/// ```
/// use viewkit_core::{OptionSet, option_set};
///
/// option_set! {
///     /// Sizes a widget can take.
///     pub enum Size in "size" {
///         /// Compact.
///         Small => "small",
///         /// Regular.
///         Medium => "medium",
///     }
///     default = Medium;
/// }
///
/// assert_eq!(Size::from_symbol("small"), Some(Size::Small));
/// assert_eq!(Size::default(), Size::Medium);
/// ```
#[macro_export]
macro_rules! option_set {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident in $family:literal {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $symbol:literal
            ),+ $(,)?
        }
        default = $default:ident;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $crate::OptionSet for $name {
            const FAMILY: &'static str = $family;
            const ALL: &'static [Self] = &[$(Self::$variant),+];
            const DEFAULT: Self = Self::$default;

            fn symbol(self) -> &'static str {
                match self {
                    $(Self::$variant => $symbol,)+
                }
            }
        }

        impl ::core::default::Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str($crate::OptionSet::symbol(*self))
            }
        }

        impl ::core::convert::From<$name> for $crate::Symbol {
            fn from(value: $name) -> Self {
                $crate::Symbol::from($crate::OptionSet::symbol(value))
            }
        }
    };
}

/// Resolves a symbol against an allowed set.
///
/// Returns `requested` if it is allowed. Otherwise returns `fallback` in
/// lenient mode, or an [`InvalidOptionError`] in strict mode.
///
/// # Panics
///
/// Panics if `fallback` is not itself a member of `allowed`.
///
/// # Examples
///
/// ```
/// use viewkit_core::{FallbackMode, fetch_or_fallback};
///
/// let allowed = ["div", "h1", "h2"];
/// assert_eq!(fetch_or_fallback(&allowed, "h2", "div", FallbackMode::Lenient), Ok("h2"));
/// assert_eq!(fetch_or_fallback(&allowed, "h9", "div", FallbackMode::Lenient), Ok("div"));
/// assert!(fetch_or_fallback(&allowed, "h9", "div", FallbackMode::Strict).is_err());
/// ```
pub fn fetch_or_fallback<'a>(
    allowed: &[&'a str],
    requested: &str,
    fallback: &'a str,
    mode: FallbackMode,
) -> Result<&'a str, InvalidOptionError> {
    assert!(
        allowed.contains(&fallback),
        "fallback {fallback:?} is not one of {allowed:?}"
    );

    if let Some(found) = allowed.iter().copied().find(|candidate| *candidate == requested) {
        return Ok(found);
    }

    if mode.is_strict() {
        return Err(invalid_option(
            "option",
            requested,
            allowed.iter().copied(),
            fallback,
        ));
    }
    Ok(fallback)
}

/// Resolves an optional symbol to a member of `T`.
///
/// An absent symbol selects `fallback` in every mode; only a present,
/// unknown symbol counts as invalid input.
///
/// # Panics
///
/// Panics if `fallback` is missing from `T::ALL`.
pub fn resolve<T: OptionSet>(
    requested: Option<&Symbol>,
    fallback: T,
    mode: FallbackMode,
) -> Result<T, InvalidOptionError> {
    assert!(
        T::ALL.contains(&fallback),
        "fallback {fallback:?} is not a member of the {} family",
        T::FAMILY
    );

    let Some(requested) = requested else {
        return Ok(fallback);
    };

    match T::from_symbol(requested.as_str()) {
        Some(value) => Ok(value),
        None if mode.is_strict() => Err(invalid_option(
            T::FAMILY,
            requested.as_str(),
            T::ALL.iter().map(|value| value.symbol()),
            fallback.symbol(),
        )),
        None => Ok(fallback),
    }
}

/// Resolves an optional symbol to a member of `T`, falling back to `T::DEFAULT`.
pub fn resolve_or_default<T: OptionSet>(
    requested: Option<&Symbol>,
    mode: FallbackMode,
) -> Result<T, InvalidOptionError> {
    resolve(requested, T::DEFAULT, mode)
}

fn invalid_option<'a>(
    family: &'static str,
    requested: &str,
    allowed: impl Iterator<Item = &'a str>,
    fallback: &str,
) -> InvalidOptionError {
    InvalidOptionError {
        family,
        requested: requested.to_string(),
        allowed: allowed.map(str::to_string).collect(),
        fallback: fallback.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    option_set! {
        /// Test family.
        pub enum Tone in "tone" {
            /// Plain.
            Plain => "plain",
            /// Loud.
            Loud => "loud",
            /// Quiet.
            Quiet => "quiet",
        }
        default = Plain;
    }

    #[test]
    fn member_is_returned_unchanged_in_both_modes() {
        for mode in [FallbackMode::Lenient, FallbackMode::Strict] {
            for tone in Tone::ALL {
                let requested = Symbol::from(*tone);
                for fallback in Tone::ALL {
                    assert_eq!(resolve(Some(&requested), *fallback, mode), Ok(*tone));
                }
            }
        }
    }

    #[test]
    fn non_member_falls_back_when_lenient() {
        let requested = Symbol::from("shouty");
        for fallback in Tone::ALL {
            assert_eq!(
                resolve(Some(&requested), *fallback, FallbackMode::Lenient),
                Ok(*fallback)
            );
        }
    }

    #[test]
    fn non_member_errors_when_strict() {
        let requested = Symbol::from("shouty");
        let err = resolve(Some(&requested), Tone::Quiet, FallbackMode::Strict).unwrap_err();
        assert_eq!(err.family, "tone");
        assert_eq!(err.requested, "shouty");
        assert_eq!(err.allowed, vec!["plain", "loud", "quiet"]);
        assert_eq!(err.fallback, "quiet");
    }

    #[test]
    fn absent_symbol_is_not_invalid() {
        assert_eq!(resolve(None, Tone::Loud, FallbackMode::Strict), Ok(Tone::Loud));
        assert_eq!(
            resolve_or_default::<Tone>(None, FallbackMode::Strict),
            Ok(Tone::Plain)
        );
    }

    #[test]
    fn symbol_lookup_is_case_sensitive() {
        assert_eq!(Tone::from_symbol("loud"), Some(Tone::Loud));
        assert_eq!(Tone::from_symbol("Loud"), None);
    }

    #[test]
    fn untyped_fetch_or_fallback() {
        let allowed = ["button", "a", "summary"];
        assert_eq!(
            fetch_or_fallback(&allowed, "a", "button", FallbackMode::Strict),
            Ok("a")
        );
        assert_eq!(
            fetch_or_fallback(&allowed, "span", "button", FallbackMode::Lenient),
            Ok("button")
        );

        let err = fetch_or_fallback(&allowed, "span", "button", FallbackMode::Strict).unwrap_err();
        assert_eq!(err.requested, "span");
        assert_eq!(err.fallback, "button");
    }

    #[test]
    #[should_panic(expected = "is not one of")]
    fn fallback_outside_allowed_set_panics() {
        let _ = fetch_or_fallback(&["a", "b"], "a", "c", FallbackMode::Lenient);
    }

    #[test]
    fn option_set_conversions() {
        assert_eq!(Tone::default(), Tone::Plain);
        assert_eq!(Tone::DEFAULT, Tone::Plain);
        assert_eq!(Tone::Loud.to_string(), "loud");
        assert_eq!(Symbol::from(Tone::Quiet).as_str(), "quiet");
    }

    #[test]
    fn symbol_is_a_plain_json_string() {
        let symbol: Symbol = serde_json::from_str(r#""primary""#).unwrap();
        assert_eq!(symbol, Symbol::new("primary"));
        assert_eq!(serde_json::to_string(&symbol).unwrap(), r#""primary""#);
    }
}
