//! Form Widgets - Demo Entry Point

use form_widgets::app::application::run_demo;

fn main() {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting form widgets demo...");

    run_demo();
}
