//! Serves a burst of simulated requests on a multi-threaded runtime and
//! reports the stylesheet each one produced.

use std::time::Duration;

use boringstonks::primitives::{StackDir, StackProps, StackY, TextProps, TextSize};
use boringstonks::{Result, Site};
use xcss::{Responsive, style};

async fn handle(request: usize) -> Result<(usize, usize, usize)> {
    let site = Site::global()?;
    let theme = if request % 2 == 0 { "dark" } else { "light" };
    let mut cx = site.render_context(Some(theme))?;

    let section = site.primitives().stack(
        &mut cx,
        StackProps::new()
            .y(StackY::Top)
            .dir(Responsive::at([("@initial", StackDir::ColReverse), ("@sm", StackDir::Row)])),
    )?;
    tokio::time::sleep(Duration::from_millis(5)).await;

    let credit = site.primitives().text(
        &mut cx,
        TextProps::new().size(TextSize::Xs).css(style! {
            mt: "$4",
            xColor: "$fg3",
            xColorOpacity: "0.4",
            "@sm": { mt: "$8" },
            a: { py: "$5", "&:hover": { xColor: "$brand" } },
        }),
    )?;
    let badge = cx.css(style! { order: request as i32 })?;

    let body = format!(
        r#"<section class="{}"><p class="{}">#{}</p><span class="{}"></span></section>"#,
        section, credit, request, badge
    );
    let entries = cx.collector().len();
    let html = site.document().with_body(body).render(&mut cx);
    Ok((request, entries, html.len()))
}

#[tokio::main]
async fn main() -> Result<()> {
    let handles: Vec<_> = (0..8).map(|request| tokio::spawn(handle(request))).collect();

    for handle in handles {
        match handle.await {
            Ok(Ok((request, entries, bytes))) => {
                println!("request {:>2}: {} styles, {} bytes", request, entries, bytes)
            }
            Ok(Err(err)) => eprintln!("request failed: {}", err),
            Err(err) => eprintln!("task panicked: {}", err),
        }
    }
    Ok(())
}
