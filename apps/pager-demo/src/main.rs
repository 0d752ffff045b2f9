//! Replays a scripted swipe session against the infinite pager and logs
//! what a host toolkit would render each frame.

use std::rc::Rc;

use pager_foundation::{InfinitePager, PagerConfig};

const PAGE_WIDTH: f32 = 390.0;
const FRAME_SECONDS: f64 = 0.016;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== pager demo ===");
    println!("Swipe simulation over {PAGE_WIDTH}px pages:");
    println!("  - drag to the left edge (prepend, offset compensated)");
    println!("  - drag to the right edge (append, offset untouched)");
    println!();

    let config = PagerConfig {
        page_extent: PAGE_WIDTH,
        ..PagerConfig::default()
    };
    let pager = InfinitePager::new(config);

    pager.add_data_updated_callback(Rc::new(|update| {
        log::info!(
            "data updated: {:?} +{} items (now {})",
            update.side,
            update.added,
            update.item_count
        );
    }));

    log::info!("initial pages: {:?}", pager.items());

    let mut timestamp = 1_000.0;

    // Drag left, half a page per frame, until the prepend has fired and the
    // compensated offset carried us back out of the trigger zone.
    let start_len = pager.len();
    while pager.len() == start_len {
        let target = pager.offset() - PAGE_WIDTH * 0.5;
        timestamp += FRAME_SECONDS;
        pager.set_scroll_offset_at(target.max(0.0), timestamp);
        render(&pager);
    }

    // Drag right until the append fires.
    let after_prepend = pager.len();
    while pager.len() == after_prepend {
        let target = pager.offset() + PAGE_WIDTH * 0.5;
        timestamp += FRAME_SECONDS;
        pager.set_scroll_offset_at(target, timestamp);
        render(&pager);
    }

    println!();
    println!(
        "final range: {}..={} ({} pages), offset {:.0}px",
        pager.items().first().copied().unwrap_or_default(),
        pager.items().last().copied().unwrap_or_default(),
        pager.len(),
        pager.offset()
    );
}

fn render(pager: &InfinitePager) {
    let page_index = (pager.offset() / PAGE_WIDTH).round().max(0.0) as usize;
    let label = pager.items().get(page_index).copied();
    log::info!(
        "offset {:>8.1}px  page {:>3}  label {:?}",
        pager.offset(),
        page_index,
        label
    );
}
