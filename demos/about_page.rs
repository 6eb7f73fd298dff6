//! Renders the about page and prints the resulting HTML.
//!
//! Pass `--light` to render with the light theme. Engine logs go to
//! `about-page.log` in the system temp directory.

use boringstonks::primitives::{
    ContainerProps, ContainerSize, Leading, StackProps, StackSize, TextProps, TextSize, TextWeight,
};
use boringstonks::{Result, Site, init_logger};
use xcss::{Responsive, style};

fn main() -> Result<()> {
    init_logger(std::env::temp_dir().join("about-page.log"))?;

    let theme = std::env::args().any(|arg| arg == "--light").then_some("light");
    let site = Site::global()?;
    let mut cx = site.render_context(theme)?;
    let primitives = site.primitives();

    let title = primitives.text(
        &mut cx,
        TextProps::new()
            .weight(TextWeight::Bold)
            .leading(Leading::Snug)
            .size(Responsive::at([("@initial", TextSize::Xl), ("@sm", TextSize::TwoXl)]))
            .css(style! { xColor: "$fg1", my: "$8", textDecoration: "underline" }),
    )?;
    let summary = primitives.text(
        &mut cx,
        TextProps::new()
            .size(TextSize::Lg)
            .leading(Leading::Relaxed)
            .css(style! { xColor: "$fg2" }),
    )?;
    let cont = primitives.container(&mut cx, ContainerProps::new().size(ContainerSize::Small))?;
    let mark = primitives.stack(
        &mut cx,
        StackProps::new()
            .size(StackSize::Base)
            .css(style! { xColor: "$fg2", mt: "$2", mb: "$2" }),
    )?;
    let logo = cx.css(style! {
        xColor: "$brand",
        display: "inherit",
        "& svg": { width: "auto", height: 350, "@lg": { height: 400 } },
        "&:hover": { xColor: "$accent" },
    })?;

    let avatar = &site.config().avatar;
    let body = format!(
        concat!(
            r#"<div class="{cont}">"#,
            r#"<h2 class="{title}">About</h2>"#,
            r#"<p class="{summary}">Hi, I am Zaid Mukaddam. Welcome to my blog, BoringStonks.</p>"#,
            r#"<div class="{mark}"><img src="{src}" alt="{alt}"></div>"#,
            r#"<div class="{logo}"><svg height="230"></svg></div>"#,
            r#"<h2 class="{title}">Inspiration for BoringStonks</h2>"#,
            r#"<p class="{summary}">A tech blog about software development and cybersecurity.</p>"#,
            "</div>"
        ),
        cont = cont,
        title = title,
        summary = summary,
        mark = mark,
        logo = logo,
        src = boringstonks::document::escape(&avatar.src),
        alt = boringstonks::document::escape(&avatar.alt),
    );

    let html = site.document().with_title("About").with_body(body).render(&mut cx);
    println!("{}", html);
    Ok(())
}
