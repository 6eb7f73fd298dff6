//! Integration tests for token utilities.
//!
//! Covers:
//! - `xColor` / `xColorOpacity` composition
//! - Shorthand utilities and negative tokens
//! - Scale resolution and unknown tokens
//! - Units and last-applied-wins

use xcss::{Engine, EngineConfig, Recipe, Selection, Style, XcssError, style};

fn compile(style: Style) -> Result<String, XcssError> {
    let engine = Engine::new(EngineConfig::default()).unwrap();
    let entry = Recipe::css(style).resolve(&engine, &Selection::new())?;
    Ok(entry.css.replace(&entry.class_name, "C"))
}

// ============================================================================
// COLOR UTILITIES
// ============================================================================

#[test]
fn test_color_and_opacity_compose() {
    insta::assert_snapshot!(
        compile(style! {
            xColor: "$fg3",
            xColorOpacity: 0.7,
            "&:hover": { xColorOpacity: 0.4 },
        }).unwrap(),
        @".C{--x-color:var(--colors-fg3-rgb);--x-color-alpha:var(--colors-fg3-alpha);color:rgba(var(--x-color), calc(var(--x-color-alpha) * var(--x-color-opacity, 1)));--x-color-opacity:0.7}.C:hover{--x-color-opacity:0.4}"
    );
}

#[test]
fn test_opacity_before_color() {
    insta::assert_snapshot!(
        compile(style! { xColorOpacity: "0.4", xColor: "$fg3" }).unwrap(),
        @".C{--x-color-opacity:0.4;--x-color:var(--colors-fg3-rgb);--x-color-alpha:var(--colors-fg3-alpha);color:rgba(var(--x-color), calc(var(--x-color-alpha) * var(--x-color-opacity, 1)))}"
    );
}

#[test]
fn test_background_pair() {
    insta::assert_snapshot!(
        compile(style! { xBg: "$bg2", xBgOpacity: 0.5 }).unwrap(),
        @".C{--x-bg:var(--colors-bg2-rgb);--x-bg-alpha:var(--colors-bg2-alpha);background-color:rgba(var(--x-bg), calc(var(--x-bg-alpha) * var(--x-bg-opacity, 1)));--x-bg-opacity:0.5}"
    );
}

#[test]
fn test_translucent_token_keeps_its_alpha() {
    insta::assert_snapshot!(
        compile(style! { xBg: "$selection" }).unwrap(),
        @".C{--x-bg:var(--colors-selection-rgb);--x-bg-alpha:var(--colors-selection-alpha);background-color:rgba(var(--x-bg), calc(var(--x-bg-alpha) * var(--x-bg-opacity, 1)))}"
    );
}

#[test]
fn test_literal_color_alpha_is_baked() {
    insta::assert_snapshot!(
        compile(style! { xColor: "rgba(0, 0, 0, 0.5)", xColorOpacity: 0.5 }).unwrap(),
        @".C{--x-color:0, 0, 0;--x-color-alpha:0.5;color:rgba(var(--x-color), calc(var(--x-color-alpha) * var(--x-color-opacity, 1)));--x-color-opacity:0.5}"
    );
}

#[test]
fn test_hover_color_change() {
    insta::assert_snapshot!(
        compile(style! { a: { py: "$5", "&:hover": { xColor: "$brand" } } }).unwrap(),
        @".C a{padding-top:var(--space-5);padding-bottom:var(--space-5)}.C a:hover{--x-color:var(--colors-brand-rgb);--x-color-alpha:var(--colors-brand-alpha);color:rgba(var(--x-color), calc(var(--x-color-alpha) * var(--x-color-opacity, 1)))}"
    );
}

// ============================================================================
// SHORTHANDS AND SCALES
// ============================================================================

#[test]
fn test_shorthands_and_negative_margin() {
    insta::assert_snapshot!(
        compile(style! { px: "$4", mx: "-$4" }).unwrap(),
        @".C{padding-left:var(--space-4);padding-right:var(--space-4);margin-left:calc(var(--space-4) * -1);margin-right:calc(var(--space-4) * -1)}"
    );
}

#[test]
fn test_size_and_units() {
    insta::assert_snapshot!(
        compile(style! { size: 24, lineHeight: 1.5, zIndex: "$modal" }).unwrap(),
        @".C{width:24px;height:24px;line-height:1.5;z-index:var(--zIndices-modal)}"
    );
}

#[test]
fn test_explicit_scale_in_unmapped_property() {
    insta::assert_snapshot!(
        compile(style! { transform: "translateY($space$2)" }).unwrap(),
        @".C{transform:translateY(var(--space-2))}"
    );
}

#[test]
fn test_last_applied_wins() {
    insta::assert_snapshot!(
        compile(style! { mt: "$4", color: "red", marginTop: "$8" }).unwrap(),
        @".C{color:red;margin-top:var(--space-8)}"
    );
}

// ============================================================================
// ERRORS
// ============================================================================

#[test]
fn test_unknown_space_token() {
    assert_eq!(
        compile(style! { mt: "$99" }).unwrap_err(),
        XcssError::UnknownToken {
            token: "99".into(),
            scale: Some("space".into())
        }
    );
}

#[test]
fn test_unknown_color_token() {
    assert!(matches!(
        compile(style! { xColor: "$fg9" }),
        Err(XcssError::UnknownToken { .. })
    ));
}

#[test]
fn test_token_without_scale() {
    assert_eq!(
        compile(style! { display: "$flex" }).unwrap_err(),
        XcssError::UnknownToken {
            token: "flex".into(),
            scale: None
        }
    );
}

#[test]
fn test_malformed_reference() {
    assert!(matches!(
        compile(style! { mt: "$" }),
        Err(XcssError::InvalidValue { .. })
    ));
}
