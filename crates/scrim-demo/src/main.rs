//! Scrim Demo - Desktop playground for animated modals
//!
//! ## Configuration
//!
//! Reads ~/.config/scrim/demo.yaml (created with defaults on "Save config").
//! Set RUST_LOG=debug to see every modal transition.

use scrim_demo::config;
use scrim_demo::ui::ScrimDemoApp;

fn main() -> iced::Result {
    // Initialize logger - set RUST_LOG=debug for verbose output
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    log::info!("scrim-demo starting up");

    let config_path = config::default_config_path();
    let config = config::load_config(&config_path);
    let window_size = iced::Size::new(config.window.width, config.window.height);

    iced::application(
        move || ScrimDemoApp::new(config.clone(), config_path.clone()),
        ScrimDemoApp::update,
        ScrimDemoApp::view,
    )
    .title("scrim - modal playground")
    .window_size(window_size)
    .theme(ScrimDemoApp::theme)
    .subscription(ScrimDemoApp::subscription)
    .run()
}
