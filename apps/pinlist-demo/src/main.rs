//! Lays out a list with pinned positions, scrolls it in steps and prints
//! what is attached after every frame.
//!
//! ```text
//! cargo run -p pinlist-demo -- --items 10 --item-size 100 --viewport 500 --pinned 1,3 --step 50
//! RUST_LOG=pinlist_foundation=trace cargo run -p pinlist-demo
//! ```

mod options;

use anyhow::Result;
use clap::Parser;
use pinlist_foundation::lazy::{LinearViewport, LinearViewportConfig, PinnedListLayout, PinnedPositionSet};

use crate::options::DemoOptions;

fn main() -> Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let options = DemoOptions::parse();
    log::info!("starting pinned list demo with {:?}", options);

    let config = LinearViewportConfig {
        axis: options.axis(),
        viewport_size: options.viewport,
        cross_axis_size: 320.0,
    };
    let viewport = LinearViewport::uniform(config, options.items, options.item_size);
    let mut list = PinnedListLayout::new(viewport, PinnedPositionSet::new(options.pinned.iter().copied()));

    list.on_layout();
    print_frame(0, &list);

    for frame in 1..=options.frames {
        let consumed = list.on_scroll_by_delta(options.step);
        if consumed == 0.0 {
            log::info!("frame {}: reached the end of the content", frame);
            break;
        }
        print_frame(frame, &list);
    }

    let stats = list.viewport().stats();
    log::info!(
        "done: {} pinned passes, {} handles created, {} reused",
        list.session().passes(),
        stats.created,
        stats.reused
    );
    Ok(())
}

fn print_frame(frame: usize, list: &PinnedListLayout<LinearViewport>) {
    let viewport = list.viewport();
    let axis = viewport.config().axis;
    println!(
        "=== frame {} | offset {} | leading space {} | visible {:?}..{:?} ===",
        frame,
        viewport.scroll_offset(),
        list.leading_space_used(),
        list.first_visible_position(),
        list.last_visible_position(),
    );

    let mut rects = viewport.children_rects();
    rects.sort_by(|(_, a), (_, b)| axis.span_of(*a).start.total_cmp(&axis.span_of(*b).start));
    for (position, rect) in rects {
        let span = axis.span_of(rect);
        let marker = if list.tracker().contains(position) { "pin" } else { "   " };
        println!("  [{}] #{:<4} {:>8.1}..{:<8.1}", marker, position, span.start, span.end);
    }
}
