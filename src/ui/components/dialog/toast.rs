//! Success toast in the top-right corner

use super::base::{render_dialog, DialogConfig, DialogPosition};
use crate::submission::Toast;
use ratatui::{style::Color, Frame};

pub fn render_toast(frame: &mut Frame, toast: &Toast) {
    render_dialog(
        frame,
        DialogConfig {
            title: &toast.title,
            title_color: Color::Green,
            border_color: Color::Green,
            message: &toast.description,
            hint: None,
            max_width: 48,
            position: DialogPosition::TopRight,
        },
    );
}
