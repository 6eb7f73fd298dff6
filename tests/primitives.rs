//! Integration tests for the site primitives.

use boringstonks::primitives::{
    ContainerProps, ContainerSize, Leading, StackDir, StackProps, StackSize, StackX, StackY,
    TextProps, TextSize, TextWeight,
};
use boringstonks::{Site, SiteConfig};
use xcss::{Responsive, style};

fn site() -> Site {
    Site::new(SiteConfig::default()).unwrap()
}

fn css_of(site: &Site, render: impl FnOnce(&Site, &mut xcss::RenderContext<'_>) -> String) -> String {
    let mut cx = site.render_context(None).unwrap();
    let class = render(site, &mut cx);
    let entry = cx.collector().entries().last().unwrap().clone();
    assert_eq!(entry.class_name, class);
    entry.css.replace(&class, "C")
}

// ============================================================================
// TEXT
// ============================================================================

#[test]
fn test_about_title() {
    let site = site();
    let css = css_of(&site, |site, cx| {
        site.primitives()
            .text(
                cx,
                TextProps::new()
                    .weight(TextWeight::Bold)
                    .leading(Leading::Snug)
                    .size(Responsive::at([("@initial", TextSize::Xl), ("@sm", TextSize::TwoXl)]))
                    .css(style! { xColor: "$fg1", my: "$8", textDecoration: "underline" }),
            )
            .unwrap()
    });
    insta::assert_snapshot!(
        css,
        @".C{margin:0;font-family:var(--fonts-sans);font-size:var(--fontSizes-xl);font-weight:var(--fontWeights-bold);line-height:var(--lineHeights-snug);--x-color:var(--colors-fg1-rgb);--x-color-alpha:var(--colors-fg1-alpha);color:rgba(var(--x-color), calc(var(--x-color-alpha) * var(--x-color-opacity, 1)));margin-top:var(--space-8);margin-bottom:var(--space-8);text-decoration:underline}@media (min-width: 640px){.C{font-size:var(--fontSizes-2xl)}}"
    );
}

#[test]
fn test_largest_size() {
    let site = site();
    let css = css_of(&site, |site, cx| {
        site.primitives()
            .text(cx, TextProps::new().size(TextSize::TenXl))
            .unwrap()
    });
    assert!(css.contains("font-size:var(--fontSizes-10xl)"));
}

// ============================================================================
// CONTAINER
// ============================================================================

#[test]
fn test_container_sizes_differ() {
    let site = site();
    let mut cx = site.render_context(None).unwrap();
    let small = site
        .primitives()
        .container(&mut cx, ContainerProps::new().size(ContainerSize::Small))
        .unwrap();
    let large = site
        .primitives()
        .container(&mut cx, ContainerProps::new().size(ContainerSize::Large))
        .unwrap();
    let default = site.primitives().container(&mut cx, ContainerProps::new()).unwrap();
    assert_ne!(small, large);
    assert_ne!(small, default);
    assert_eq!(cx.collector().len(), 3);
}

// ============================================================================
// STACK
// ============================================================================

#[test]
fn test_footer_section_stack() {
    let site = site();
    let css = css_of(&site, |site, cx| {
        site.primitives()
            .stack(
                cx,
                StackProps::new().y(StackY::Top).dir(Responsive::at([
                    ("@initial", StackDir::ColReverse),
                    ("@sm", StackDir::Row),
                ])),
            )
            .unwrap()
    });
    insta::assert_snapshot!(
        css,
        @".C{display:flex;flex-direction:column-reverse}@media not (min-width: 640px){.C{justify-content:flex-start}}@media (min-width: 640px){.C{flex-direction:row;align-items:flex-start}}"
    );
}

#[test]
fn test_row_alignment_does_not_leak_into_column() {
    let site = site();
    let css = css_of(&site, |site, cx| {
        site.primitives()
            .stack(
                cx,
                StackProps::new()
                    .x(StackX::Center)
                    .dir(Responsive::at([("@initial", StackDir::Row), ("@sm", StackDir::Col)])),
            )
            .unwrap()
    });
    insta::assert_snapshot!(
        css,
        @".C{display:flex;flex-direction:row}@media not (min-width: 640px){.C{justify-content:center}}@media (min-width: 640px){.C{flex-direction:column;align-items:center}}"
    );
}

#[test]
fn test_centered_row() {
    let site = site();
    let css = css_of(&site, |site, cx| {
        site.primitives()
            .stack(
                cx,
                StackProps::new()
                    .x(StackX::Center)
                    .y(StackY::Center)
                    .size(StackSize::Base),
            )
            .unwrap()
    });
    insta::assert_snapshot!(
        css,
        @".C{display:flex;flex-direction:row;gap:var(--space-4);justify-content:center;align-items:center}"
    );
}

#[test]
fn test_grow_false_adds_nothing() {
    let site = site();
    let mut cx = site.render_context(None).unwrap();
    let plain = site.primitives().stack(&mut cx, StackProps::new()).unwrap();
    let explicit = site
        .primitives()
        .stack(&mut cx, StackProps::new().grow(false))
        .unwrap();
    // Different keys, identical rules.
    assert_ne!(plain, explicit);
    let entries = cx.collector().entries();
    assert_eq!(
        entries[0].css.replace(&plain, "C"),
        entries[1].css.replace(&explicit, "C")
    );
}
