mod support;

use insta::assert_snapshot;
use support::{assert_selector, refute_selector, render_lenient, render_strict};
use viewkit_components::{
    BorderBoxComponent, Component, CounterComponent, CounterScheme, LinkComponent, LinkScheme,
    OcticonComponent, OcticonSize, RowArgs, Slot, render_to_string,
};
use viewkit_core::{RenderOptions, SystemArguments, ViewError};

#[test]
fn counter_markup() {
    let html = render_strict(&CounterComponent::new(1234).scheme(CounterScheme::Primary));
    assert_snapshot!(html, @r#"<span class="Counter Counter--primary" title="1,234">1,234</span>"#);
}

#[test]
fn counter_clamps_and_hides() {
    assert!(render_strict(&CounterComponent::new(10_000)).contains(">5,000+<"));

    let html = render_strict(&CounterComponent::new(0).hide_if_zero(true));
    assert_selector(&html, "span.Counter[hidden]");
}

#[test]
fn counter_decodes_from_json() {
    let config = serde_json::from_value(serde_json::json!({
        "count": 2500,
        "round": true,
        "scheme": "secondary"
    }))
    .unwrap();
    let html = render_strict(&CounterComponent::from_config(config));
    assert_snapshot!(html, @r#"<span class="Counter Counter--secondary" title="2,500">2.5k</span>"#);
}

#[test]
fn octicon_markup() {
    let html = render_strict(&OcticonComponent::new("plus").size(OcticonSize::XSmall));
    assert_selector(&html, "svg.octicon.octicon-plus[width='12'][height='12']");
    assert_selector(&html, "svg[aria-hidden='true'] > path");
    assert!(html.starts_with(r#"<svg class="octicon octicon-plus" viewBox="0 0 16 16""#));
}

#[test]
fn unknown_octicon_is_an_error() {
    let err = render_to_string(&OcticonComponent::new("nope"), &RenderOptions::lenient())
        .unwrap_err();
    assert_eq!(err, ViewError::unknown_icon("nope"));
    assert_eq!(err.to_string(), r#"unknown icon: "nope""#);
}

#[test]
fn link_markup() {
    let html = render_strict(
        &LinkComponent::new("https://example.com")
            .scheme(LinkScheme::Primary)
            .content("Example"),
    );
    assert_snapshot!(html, @r#"<a class="Link--primary" href="https://example.com">Example</a>"#);
}

#[test]
fn link_as_span() {
    let link = LinkComponent::new("/ignored")
        .muted(true)
        .system(SystemArguments::new().tag("span"))
        .content("Muted");
    let html = render_strict(&link);
    assert_selector(&html, "span.Link--muted");
    refute_selector(&html, "[href]");
}

#[test]
fn link_invalid_scheme_falls_back() {
    let link = LinkComponent::new("/").scheme("purple").content("Home");
    refute_selector(&render_lenient(&link), "[class]");
    assert!(link.render(&RenderOptions::strict()).is_err());
}

#[test]
fn border_box_with_rows() {
    let component = BorderBoxComponent::new()
        .with_header(Slot::new(SystemArguments::new()).text("Header"))
        .with_row(Slot::new(RowArgs::default()).text("First"))
        .with_row(
            Slot::new(RowArgs {
                scheme: Some("neutral".into()),
                ..RowArgs::default()
            })
            .text("Second"),
        );
    let html = render_strict(&component);
    assert_snapshot!(html, @r#"<div class="Box"><div class="Box-header">Header</div><ul><li class="Box-row">First</li><li class="Box-row Box-row--gray">Second</li></ul></div>"#);
    assert_eq!(support::count_selector(&html, "ul > li.Box-row"), 2);
}

#[test]
fn empty_border_box_renders_nothing() {
    assert_eq!(render_strict(&BorderBoxComponent::new()), "");
}
