//! HotRoute, a small desktop bookmark manager.
//!
//! Entry point: opens the main WebView window.
//! When built without the `gui` feature, prints the saved links to the console.

#[cfg(feature = "gui")]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    hotroute::ui::webview_app::run()
}

#[cfg(not(feature = "gui"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use hotroute::app::App;
    use hotroute::managers::link_manager::LinkManagerTrait;
    use hotroute::services::render_engine::{render, sort_for_display};
    use hotroute::{logging, platform};

    logging::init("warn");

    let db_path = platform::database_path();
    let app = App::new(&db_path.to_string_lossy(), None)?;
    let query = std::env::args().nth(1).unwrap_or_default();
    let links = app.links().search(&query)?;

    println!("HotRoute v{} ({})", env!("CARGO_PKG_VERSION"), db_path.display());
    if render(&links).is_empty() {
        println!("  No links saved yet");
        return Ok(());
    }
    for link in sort_for_display(&links) {
        let star = if link.important { "\u{2605}" } else { " " };
        println!("  {} {:<30} {}", star, link.name, link.url);
    }
    Ok(())
}
