//! Domain Ports
//!
//! Interfaces implemented by the rendering layer.

mod popup_host;

pub use popup_host::PopupHost;
