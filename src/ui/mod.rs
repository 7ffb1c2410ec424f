//! Domain Vault UI layer.
//!
//! `render` holds the pure HTML builders; `webview_app` (feature `gui`,
//! wry + tao) is the desktop shell that serves the single-page dashboard
//! and bridges IPC from the page to the application core.

pub mod render;

#[cfg(feature = "gui")]
pub mod webview_app;
