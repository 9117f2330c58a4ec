//! Form rendering module
//!
//! - `field_renderer`: single field with label, placeholder and inline error
//! - `registration_form`: the four-field form and its action panel

mod field_renderer;
mod registration_form;

pub use registration_form::draw as draw_registration_form;
