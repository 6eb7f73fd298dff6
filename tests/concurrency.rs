//! Concurrent requests share the site but never each other's styles.

use std::time::Duration;

use boringstonks::Site;
use boringstonks::primitives::{StackProps, StackSize, TextProps, TextSize};
use xcss::style;

async fn render_request(n: usize, theme: Option<&'static str>) -> (usize, Vec<String>, String) {
    let site = Site::global().unwrap();
    let mut cx = site.render_context(theme).unwrap();

    let size = if n % 2 == 0 { TextSize::Sm } else { TextSize::Lg };
    let text = site
        .primitives()
        .text(&mut cx, TextProps::new().size(size))
        .unwrap();

    // Let other requests interleave with this one.
    tokio::time::sleep(Duration::from_millis(1)).await;

    let own = cx.css(style! { zIndex: n as i32 }).unwrap();
    let stack = site
        .primitives()
        .stack(&mut cx, StackProps::new().size(StackSize::Small))
        .unwrap();

    let classes: Vec<String> = cx
        .collector()
        .entries()
        .iter()
        .map(|entry| entry.class_name.clone())
        .collect();
    assert_eq!(classes, vec![text, own, stack]);

    let html = site.document().render(&mut cx);
    (n, classes, html)
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_requests_are_isolated() {
    let handles: Vec<_> = (0..32)
        .map(|n| {
            let theme = if n % 3 == 0 { Some("light") } else { None };
            tokio::spawn(render_request(n, theme))
        })
        .collect();

    let mut results = Vec::new();
    for handle in handles {
        results.push(handle.await.unwrap());
    }

    for (n, classes, html) in &results {
        assert_eq!(classes.len(), 3);
        assert!(html.contains(&format!("z-index:{}", n)));
        // No other request's inline style leaked in.
        for (other, other_classes, _) in &results {
            if other != n {
                assert!(!html.contains(&format!(".{}{{", other_classes[1])));
            }
        }
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_shared_classes_agree_across_requests() {
    let (a, b) = tokio::join!(
        tokio::spawn(render_request(2, None)),
        tokio::spawn(render_request(4, Some("light")))
    );
    let (_, a, _) = a.unwrap();
    let (_, b, _) = b.unwrap();

    // Same text size and stack, different theme: same classes.
    assert_eq!(a[0], b[0]);
    assert_eq!(a[2], b[2]);
    assert_ne!(a[1], b[1]);
}
