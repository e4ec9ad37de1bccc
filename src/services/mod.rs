// HotRoute services
// Services provide stateless or lightly stateful functionality: rendering, settings, themes.

pub mod render_engine;
pub mod settings_engine;
pub mod theme_engine;
