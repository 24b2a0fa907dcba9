//! Shared helpers for component integration tests.
#![allow(dead_code)]

use lol_html::{RewriteStrSettings, element, rewrite_str};
use viewkit_components::{Component, render_to_string};
use viewkit_core::RenderOptions;

/// Counts the elements of `html` matching a CSS selector.
pub fn count_selector(html: &str, selector: &str) -> usize {
    let mut count = 0;
    rewrite_str(
        html,
        RewriteStrSettings {
            element_content_handlers: vec![element!(selector, |_el| {
                count += 1;
                Ok(())
            })],
            ..RewriteStrSettings::default()
        },
    )
    .expect("rendered HTML should parse");
    count
}

#[track_caller]
pub fn assert_selector(html: &str, selector: &str) {
    assert!(
        count_selector(html, selector) > 0,
        "expected {selector:?} to match in:\n{html}"
    );
}

#[track_caller]
pub fn refute_selector(html: &str, selector: &str) {
    assert_eq!(
        count_selector(html, selector),
        0,
        "expected {selector:?} not to match in:\n{html}"
    );
}

/// Renders with strict option checking, as test suites do.
pub fn render_strict<C: Component>(component: &C) -> String {
    render_to_string(component, &RenderOptions::strict()).expect("strict render should succeed")
}

/// Renders with production fallback behavior.
pub fn render_lenient<C: Component>(component: &C) -> String {
    render_to_string(component, &RenderOptions::lenient()).expect("lenient render should succeed")
}
