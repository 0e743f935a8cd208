//! Repeat collapsing demo
//!
//! Logs a few messages at every level, then the same message several times in
//! a row. On a terminal the repeats are redrawn in place as one line; with
//! stderr redirected to a file each repeat is appended with its count.
//!
//! Run with: cargo run --example repeat_collapse

use rust_term_logger::prelude::*;
use rust_term_logger::{critical, debug, error, info, trace, warning};
use std::thread;
use std::time::Duration;

fn main() -> Result<()> {
    let settings = LoggingSettings {
        filter: "*:Trace".to_string(),
        ..LoggingSettings::default()
    };
    let context = LoggingContext::from_settings(&settings)?;
    println!("Terminal control: {}", context.terminal_name());

    println!("1. One line per level:");
    trace!(context, LogClass::Kernel, "Scheduler tick");
    debug!(context, LogClass::Loader, "Mapped {} segments", 3);
    info!(context, LogClass::Core, "Boot complete");
    warning!(context, LogClass::Audio, "Sink latency {}ms", 48);
    error!(context, LogClass::Render, "Shader cache miss");
    critical!(context, LogClass::Hardware, "Watchdog expired");

    println!("2. Ten identical warnings:");
    for _ in 0..10 {
        warning!(context, LogClass::Audio, "Buffer underrun");
        thread::sleep(Duration::from_millis(150));
    }

    println!("3. Raising the threshold to Error:");
    context.apply_settings(&LoggingSettings {
        filter: "*:Error".to_string(),
        ..settings
    })?;
    info!(context, LogClass::Core, "Hidden");
    error!(context, LogClass::Core, "Visible");

    let metrics = context.metrics();
    println!(
        "rendered={} filtered={} repeats={} rewrites={}",
        metrics.rendered_count(),
        metrics.filtered_count(),
        metrics.repeat_count(),
        metrics.rewrite_count()
    );
    Ok(())
}
