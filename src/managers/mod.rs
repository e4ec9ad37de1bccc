// HotRoute state managers
// Managers handle stateful operations: the link store, link mutations, the add dialog, URL reveals, shortcuts.

pub mod add_dialog;
pub mod link_manager;
pub mod link_store;
pub mod reveal_tracker;
pub mod shortcut_manager;
