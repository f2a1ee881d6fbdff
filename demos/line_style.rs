//! Example showing a line-style progress bar with a label and decimal percentage

use color_eyre::Result;
use progresscli::{ProgressBar, StylePreset};
use std::{env, thread, time::Duration};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Pick the style from the first argument, e.g. `default-no-color`
    let preset: StylePreset = match env::args().nth(1) {
        Some(name) => name.parse()?,
        None => StylePreset::Line,
    };

    let mut bar = ProgressBar::with_style(preset.into());
    bar.set_label("Copying files");
    bar.set_max(250.0);
    bar.set_show_percentage_decimal(true);
    bar.show();

    while !bar.finished() {
        thread::sleep(Duration::from_millis(20));
        bar.increment(1.5);
    }

    println!("Done! Copied {} files.", bar.value());

    Ok(())
}
