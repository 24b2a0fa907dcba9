mod support;

use insta::assert_snapshot;
use support::{assert_selector, refute_selector, render_lenient, render_strict};
use viewkit_components::{
    ButtonComponent, Component, HeadingArgs, HeadingTag, Slot, SubheadComponent,
    render_to_string,
};
use viewkit_core::{RenderOptions, Spacer, SystemArguments, ViewError};

fn heading(text: &str) -> Slot<HeadingArgs> {
    Slot::new(HeadingArgs::default()).text(text)
}

#[test]
fn description_alone_is_suppressed() {
    let subhead = SubheadComponent::new()
        .with_description(Slot::new(SystemArguments::new()).text("My Description"));
    assert!(!subhead.is_renderable());
    assert_eq!(render_strict(&subhead), "");
}

#[test]
fn renders_heading() {
    let subhead = SubheadComponent::new().with_heading(heading("Hello world"));
    let html = render_strict(&subhead);
    assert_snapshot!(html, @r#"<div class="Subhead"><div class="Subhead-heading">Hello world</div></div>"#);
}

#[test]
fn renders_heading_tag() {
    let subhead = SubheadComponent::new()
        .with_heading(Slot::new(HeadingArgs::tag(HeadingTag::H3)).text("Hello world"));
    assert_selector(&render_strict(&subhead), ".Subhead h3.Subhead-heading");
}

#[test]
fn renders_danger_heading() {
    let subhead = SubheadComponent::new().with_heading(
        Slot::new(HeadingArgs {
            danger: true,
            ..HeadingArgs::default()
        })
        .text("Hello world"),
    );
    assert_selector(
        &render_strict(&subhead),
        ".Subhead-heading.Subhead-heading--danger",
    );
}

#[test]
fn renders_spacious() {
    let subhead = SubheadComponent::new()
        .spacious(true)
        .with_heading(heading("Hello world"));
    assert_selector(&render_strict(&subhead), ".Subhead.Subhead--spacious");
}

#[test]
fn hide_border_drops_border_and_margin() {
    let subhead = SubheadComponent::new()
        .hide_border(true)
        .with_heading(heading("Hello world"));
    let html = render_strict(&subhead);
    assert_selector(&html, ".Subhead.border-bottom-0.mb-0");
}

#[test]
fn caller_margin_wins_over_hide_border_default() {
    let subhead = SubheadComponent::new()
        .hide_border(true)
        .system(SystemArguments::new().mb(Spacer::new(4).unwrap()))
        .with_heading(heading("Hello world"));
    let html = render_strict(&subhead);
    assert_selector(&html, ".Subhead.border-bottom-0.mb-4");
    refute_selector(&html, ".mb-0");
}

#[test]
fn renders_all_slots_in_order() {
    let button = ButtonComponent::new()
        .render(&RenderOptions::strict())
        .unwrap();
    let subhead = SubheadComponent::new()
        .with_description(Slot::new(SystemArguments::new()).text("My Description"))
        .with_actions(Slot::new(SystemArguments::new()).child(button))
        .with_heading(heading("Hello world"));
    let html = render_strict(&subhead);
    assert_snapshot!(html, @r#"<div class="Subhead"><div class="Subhead-heading">Hello world</div><div class="Subhead-actions"><button class="btn" type="button"></button></div><div class="Subhead-description">My Description</div></div>"#);
}

#[test]
fn description_tag_cannot_be_overridden() {
    let subhead = SubheadComponent::new()
        .with_heading(heading("Hello world"))
        .with_description(Slot::new(SystemArguments::new().tag("span")));

    for options in [RenderOptions::lenient(), RenderOptions::strict()] {
        let err = render_to_string(&subhead, &options).unwrap_err();
        assert_eq!(
            err.to_string(),
            "`tag` is not an accepted argument for Subhead.description"
        );
        assert!(!err.is_recoverable());
    }
}

#[test]
fn root_tag_cannot_be_overridden() {
    let subhead = SubheadComponent::new()
        .system(SystemArguments::new().tag("section"))
        .with_heading(heading("Hello world"));
    let err = subhead.render(&RenderOptions::lenient()).unwrap_err();
    assert!(matches!(err, ViewError::StructuralConflict(ref e) if e.owner == "Subhead"));
}

#[test]
fn invalid_heading_tag_falls_back_to_div() {
    let mut args = HeadingArgs::default();
    args.system.tag = Some("h9".into());
    let subhead = SubheadComponent::new().with_heading(Slot::new(args).text("Hello world"));

    assert_selector(&render_lenient(&subhead), "div.Subhead-heading");

    let err = render_to_string(&subhead, &RenderOptions::strict()).unwrap_err();
    assert!(err.is_recoverable());
}

#[test]
fn decodes_configuration_from_json() {
    let config = serde_json::from_value(serde_json::json!({
        "spacious": true,
        "classes": ["extra"],
        "attributes": { "id": "settings" }
    }))
    .unwrap();
    let args: HeadingArgs = serde_json::from_value(serde_json::json!({
        "tag": "h2",
        "danger": true
    }))
    .unwrap();
    let subhead =
        SubheadComponent::from_config(config).with_heading(Slot::new(args).text("Danger zone"));
    let html = render_strict(&subhead);
    assert_snapshot!(html, @r#"<div class="Subhead Subhead--spacious extra" id="settings"><h2 class="Subhead-heading Subhead-heading--danger">Danger zone</h2></div>"#);
}
