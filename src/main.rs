//! Browser entry point: install the console hooks and mount the site

use ignytion_website::App;
use leptos::prelude::*;

/// Release builds keep the console to navigation-level events
const LOG_LEVEL: log::Level = if cfg!(debug_assertions) {
    log::Level::Debug
} else {
    log::Level::Info
};

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(LOG_LEVEL).expect("error initializing logger");
    log::info!(
        "{} v{} mounting",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    mount_to_body(App);
}
