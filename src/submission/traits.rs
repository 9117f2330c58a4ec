//! Trait abstraction for submission collaborators to enable mocking in tests

use crate::state::FormRecord;
use anyhow::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// Shows the one-time confirmation after a successful submission
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send {
    /// Display a success notice
    fn success(&mut self, title: &str, description: &str);
}

/// Writes submitted records to a spreadsheet file
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Exporter: Send + Sync {
    /// Write `rows` under `base_name` and return the path of the written file
    async fn export(&self, rows: &[FormRecord], base_name: &str) -> Result<PathBuf>;
}
