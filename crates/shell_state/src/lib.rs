//! View-model of the editor shell and the pure transitions that drive it.

pub mod action;
pub mod callback;
pub mod model;
pub mod reducer;
mod store;

pub use action::Action;
pub use callback::Callback;
pub use model::{AppState, Command, FilterOption, Notification, PageMeta, PanelConfig};
pub use reducer::{merge_last_opened, reduce, reduce_at};
pub use store::Store;
