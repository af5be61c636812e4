use colored::*;
use figlet_rs::FIGfont;
use tracing::info;

use crate::config::Config;

pub fn print_config(config: &Config) {
    let json = serde_json::to_string_pretty(config).unwrap_or_default();

    info!("\n{}: \n{}", String::from("[CONFIG]").blue().underline(), json.magenta());
}

pub fn print_app_starting() {
    let standard_font = FIGfont::standard();
    if let Ok(font) = standard_font {
        if let Some(figure) = font.convert("Kraken Tracker") {
            info!("\n{}", figure);
        }
    }
}

/// Rendered tables go straight to stdout; it is the UI surface.
pub fn print_table(rendered: &str) {
    println!("{}", rendered);
}

pub fn print_error(message: &str) {
    println!("{}", message.red());
}
