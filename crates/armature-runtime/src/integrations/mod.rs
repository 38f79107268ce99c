//! Deployment adapters.
//!
//! Thin consumers of the public operations; neither adds logic of its
//! own.
//!
//! - [`static_site`]: emits a bootstrap snippet for a static-site build
//!   step to inject into generated pages.
//! - [`vanilla`]: forwards an optional scope to the process-wide
//!   orchestrator, defaulting to the whole document.

pub mod static_site;
pub mod vanilla;
