//! Dialog components for TUI

mod base;
mod error_dialog;
mod toast;

pub use error_dialog::render_error_dialog;
pub use toast::render_toast;
