//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for paste/submit shortcuts
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display; Ctrl+S works on all platforms
pub const SUBMIT_SHORTCUT: &str = "^S";

/// Paste shortcut display
#[cfg(target_os = "macos")]
pub const PASTE_SHORTCUT: &str = "Cmd+V";

#[cfg(not(target_os = "macos"))]
pub const PASTE_SHORTCUT: &str = "^V";
