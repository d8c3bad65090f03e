//! Float layout demo.
//!
//! Builds a small window-sized layout, resizes it, and prints the resolved
//! geometry after each frame.
//!
//! Run with: cargo run --example float
//! Trace the pipeline: RUST_LOG=spark_float=trace cargo run --example float

use spark_float::engine::arrays;
use spark_float::{
    float_layout, flush_default, get_children, get_id, widget, Layout, Point, PosHint, Size,
    SizeHint, WidgetProps,
};
use tracing_subscriber::EnvFilter;

fn print_tree(root: usize) {
    let size = arrays::get_size(root);
    println!("root {:>6.1} x {:<6.1}", size.width, size.height);
    for child in get_children(root) {
        let pos = arrays::get_position(child);
        let size = arrays::get_size(child);
        println!(
            "  {:<8} pos ({:>6.1}, {:>6.1})  size {:>6.1} x {:<6.1}",
            get_id(child).unwrap_or_default(),
            pos.x,
            pos.y,
            size.width,
            size.height
        );
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let root = float_layout(WidgetProps {
        size: Some(Size { width: 300.0, height: 300.0 }),
        children: Some(Box::new(|| {
            // Same size as the layout (default hint).
            widget(WidgetProps {
                id: Some("fill".into()),
                ..Default::default()
            });
            // Half width, quarter height, fixed position.
            widget(WidgetProps {
                id: Some("fixed".into()),
                size_hint: Some(SizeHint::new(0.5, 0.25)),
                pos: Some(Point { x: 20.0, y: 20.0 }),
                ..Default::default()
            });
            // Layout minus 20% on each side.
            widget(WidgetProps {
                id: Some("inset".into()),
                size_hint: Some(SizeHint::new(0.6, 0.6)),
                pos_hint: Some(PosHint::new(0.2, 0.2)),
                ..Default::default()
            });
            // Natural size, never scaled.
            widget(WidgetProps {
                id: Some("natural".into()),
                size: Some(Size { width: 120.0, height: 40.0 }),
                size_hint: Some(SizeHint::NONE),
                ..Default::default()
            });
        })),
        ..Default::default()
    });

    flush_default();
    print_tree(root.index());

    arrays::set_size(root.index(), Size { width: 800.0, height: 600.0 });
    flush_default();
    print_tree(root.index());

    let minimum = root.compute_minimum_content_size();
    println!("minimum content size {} x {}", minimum.width, minimum.height);
}
