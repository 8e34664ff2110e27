//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI demo application.

use gpui::{
    App, AppContext, Application, Bounds, TitlebarOptions, WindowBounds,
    WindowOptions, actions, px,
};

use crate::app::entities::DemoEntities;
use crate::app::workspace::Workspace;
use crate::config::FieldDefaults;

actions!(form_widgets, [Quit]);

/// Run the demo application
pub fn run_demo() {
    Application::new().run(|cx: &mut App| {
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());

        // Quit the app when all windows are closed
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let defaults = FieldDefaults::load_default();
        let title = defaults.t("demo-title");
        cx.set_global(defaults);

        let entities = DemoEntities::init(cx);
        cx.set_global(entities.clone());

        let bounds = Bounds::centered(None, gpui::size(px(1200.0), px(720.0)), cx);
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(title),
                appears_transparent: false,
                traffic_light_position: None,
            }),
            ..Default::default()
        };

        if let Err(e) = cx.open_window(window_options, |window, cx| {
            cx.new(|cx| Workspace::new(entities.clone(), window, cx))
        }) {
            tracing::error!("Failed to open window: {e}");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
