//! Integration tests for recipe resolution.
//!
//! Covers:
//! - Default variants and canonical keys
//! - Precedence: base, variants, compounds, responsive overrides, css
//! - Responsive variant selections
//! - Error cases: unknown groups, values and breakpoints

use xcss::{
    Collector, Conditions, Engine, EngineConfig, Recipe, Responsive, Selection, Style, Variant,
    XcssError, style,
};

fn engine() -> Engine {
    Engine::new(EngineConfig::default()).unwrap()
}

/// Resolves and replaces the generated class with `C` so snapshots do not
/// depend on hash values.
fn render(recipe: &Recipe, selection: Selection) -> String {
    let entry = recipe.resolve(&engine(), &selection).unwrap();
    entry.css.replace(&entry.class_name, "C")
}

#[derive(Clone, Copy, Debug, PartialEq, Variant)]
enum Size {
    Xs,
    Lg,
    Xl,
    #[variant(rename = "2xl")]
    TwoXl,
}

#[derive(Clone, Copy, Debug, PartialEq, Variant)]
enum Weight {
    Normal,
    Bold,
}

fn text() -> Recipe {
    Recipe::builder("text")
        .base(style! { margin: 0 })
        .variants("size", |size: Size| {
            let token = match size {
                Size::Xs => "$xs",
                Size::Lg => "$lg",
                Size::Xl => "$xl",
                Size::TwoXl => "$2xl",
            };
            style! { fontSize: token }
        })
        .variants("weight", |weight: Weight| match weight {
            Weight::Normal => style! { fontWeight: "$normal" },
            Weight::Bold => style! { fontWeight: "$bold" },
        })
        .default_variant("size", Size::Lg)
        .default_variant("weight", Weight::Normal)
        .compound(
            Conditions::new().when("size", Size::TwoXl).when("weight", Weight::Bold),
            style! { letterSpacing: "$tight" },
        )
        .build()
        .unwrap()
}

// ============================================================================
// DEFAULTS AND KEYS
// ============================================================================

#[test]
fn test_defaults_equal_explicit_selection() {
    let engine = engine();
    let recipe = text();
    let mut collector = Collector::new();

    let implicit = recipe
        .class_name(&engine, &mut collector, &Selection::new())
        .unwrap();
    let explicit = recipe
        .class_name(
            &engine,
            &mut collector,
            &Selection::new().with("size", Size::Lg).with("weight", "normal"),
        )
        .unwrap();

    assert_eq!(implicit, explicit);
    assert_eq!(collector.len(), 1);
}

#[test]
fn test_class_name_format() {
    let class = text().resolve(&engine(), &Selection::new()).unwrap().class_name;
    let suffix = class.strip_prefix("x-text-").unwrap();
    assert_eq!(suffix.len(), 7);
    assert!(suffix.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
}

#[test]
fn test_selection_order_does_not_matter() {
    let recipe = text();
    let engine = engine();
    let a = recipe
        .resolve(&engine, &Selection::new().with("size", "xl").with("weight", "bold"))
        .unwrap();
    let b = recipe
        .resolve(&engine, &Selection::new().with("weight", "bold").with("size", "xl"))
        .unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_different_css_gives_different_class() {
    let recipe = text();
    let engine = engine();
    let a = recipe
        .resolve(&engine, &Selection::new().css(style! { color: "red" }))
        .unwrap();
    let b = recipe
        .resolve(&engine, &Selection::new().css(style! { color: "blue" }))
        .unwrap();
    assert_ne!(a.class_name, b.class_name);
}

// ============================================================================
// PRECEDENCE
// ============================================================================

#[test]
fn test_variant_arms_follow_base() {
    insta::assert_snapshot!(
        render(&text(), Selection::new().with("size", Size::Xs)),
        @".C{margin:0;font-size:var(--fontSizes-xs);font-weight:var(--fontWeights-normal)}"
    );
}

#[test]
fn test_compound_after_variants() {
    insta::assert_snapshot!(
        render(&text(), Selection::new().with("size", Size::TwoXl).with("weight", Weight::Bold)),
        @".C{margin:0;font-size:var(--fontSizes-2xl);font-weight:var(--fontWeights-bold);letter-spacing:var(--letterSpacings-tight)}"
    );
}

#[test]
fn test_css_overrides_everything() {
    insta::assert_snapshot!(
        render(
            &text(),
            Selection::new()
                .with("weight", "bold")
                .css(style! { fontWeight: 300, my: "$8" }),
        ),
        @".C{margin:0;font-size:var(--fontSizes-lg);font-weight:300;margin-top:var(--space-8);margin-bottom:var(--space-8)}"
    );
}

#[test]
fn test_recipe_responsive_overrides_precede_css() {
    let recipe = Recipe::builder("card")
        .base(style! { p: "$4" })
        .responsive("@md", style! { p: "$8" })
        .build()
        .unwrap();
    insta::assert_snapshot!(
        render(&recipe, Selection::new().css(style! { "@md": { p: "$10" } })),
        @".C{padding:var(--space-4)}@media (min-width: 768px){.C{padding:var(--space-10)}}"
    );
}

// ============================================================================
// RESPONSIVE SELECTIONS
// ============================================================================

#[test]
fn test_responsive_size() {
    insta::assert_snapshot!(
        render(
            &text(),
            Selection::new().choose("size", Responsive::at([("@initial", Size::Xl), ("@sm", Size::TwoXl)])),
        ),
        @".C{margin:0;font-size:var(--fontSizes-xl);font-weight:var(--fontWeights-normal)}@media (min-width: 640px){.C{font-size:var(--fontSizes-2xl)}}"
    );
}

#[test]
fn test_compound_at_breakpoint() {
    insta::assert_snapshot!(
        render(
            &text(),
            Selection::new()
                .with("weight", Weight::Bold)
                .with_responsive("size", [("initial", "xl"), ("lg", "2xl")]),
        ),
        @".C{margin:0;font-size:var(--fontSizes-xl);font-weight:var(--fontWeights-bold)}@media (min-width: 1024px){.C{font-size:var(--fontSizes-2xl);letter-spacing:var(--letterSpacings-tight)}}"
    );
}

#[test]
fn test_compound_stops_where_selection_stops_matching() {
    insta::assert_snapshot!(
        render(
            &text(),
            Selection::new()
                .with("weight", Weight::Bold)
                .with_responsive("size", [("initial", "2xl"), ("sm", "xl")]),
        ),
        @".C{margin:0;font-size:var(--fontSizes-2xl);font-weight:var(--fontWeights-bold)}@media not (min-width: 640px){.C{letter-spacing:var(--letterSpacings-tight)}}@media (min-width: 640px){.C{font-size:var(--fontSizes-xl)}}"
    );
}

#[test]
fn test_compound_matching_again_later() {
    insta::assert_snapshot!(
        render(
            &text(),
            Selection::new()
                .with("weight", Weight::Bold)
                .with_responsive("size", [("initial", "2xl"), ("sm", "xl"), ("lg", "2xl")]),
        ),
        @".C{margin:0;font-size:var(--fontSizes-2xl);font-weight:var(--fontWeights-bold)}@media not (min-width: 640px){.C{letter-spacing:var(--letterSpacings-tight)}}@media (min-width: 640px){.C{font-size:var(--fontSizes-xl)}}@media (min-width: 1024px){.C{font-size:var(--fontSizes-2xl);letter-spacing:var(--letterSpacings-tight)}}"
    );
}

#[test]
fn test_redundant_breakpoint_choice_collapses() {
    let recipe = text();
    let engine = engine();
    let a = recipe
        .resolve(&engine, &Selection::new().with_responsive("size", [("initial", "xl"), ("md", "xl")]))
        .unwrap();
    let b = recipe
        .resolve(&engine, &Selection::new().with("size", "xl"))
        .unwrap();
    assert_eq!(a, b);
}

// ============================================================================
// ERRORS
// ============================================================================

#[test]
fn test_unknown_value() {
    let err = text()
        .resolve(&engine(), &Selection::new().with("size", "huge"))
        .unwrap_err();
    assert_eq!(
        err,
        XcssError::InvalidVariant {
            recipe: "text".into(),
            group: "size".into(),
            value: "huge".into(),
        }
    );
}

#[test]
fn test_unknown_group() {
    let err = text()
        .resolve(&engine(), &Selection::new().with("tone", "loud"))
        .unwrap_err();
    assert!(matches!(err, XcssError::InvalidVariant { group, .. } if group == "tone"));
}

#[test]
fn test_unknown_breakpoint_in_selection() {
    let err = text()
        .resolve(
            &engine(),
            &Selection::new().with_responsive("size", [("initial", "xl"), ("@3xl", "2xl")]),
        )
        .unwrap_err();
    assert_eq!(err, XcssError::UnknownBreakpoint("3xl".into()));
}

#[test]
fn test_unknown_breakpoint_in_recipe() {
    let recipe = Recipe::builder("card")
        .responsive("@tablet", Style::new().set("p", "$4"))
        .build()
        .unwrap();
    let err = recipe.resolve(&engine(), &Selection::new()).unwrap_err();
    assert_eq!(err, XcssError::UnknownBreakpoint("tablet".into()));
}
