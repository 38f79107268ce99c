//! Static-site bootstrap generator.
//!
//! A static-site build step cannot call the orchestrator directly; it
//! injects a script into every generated page instead. This adapter
//! renders that script with the caller's options serialized into the
//! call, so the page boots its components on load.

use crate::engine::InitOptions;

/// Renders the page-load bootstrap snippet.
///
/// The embedded configuration is the serde serialization of `options`,
/// so whatever scope the build step was configured with is what the page
/// initializes against.
///
/// # Example
///
/// ```
/// use armature_runtime::integrations::static_site::bootstrap_script;
/// use armature_runtime::InitOptions;
///
/// let script = bootstrap_script(&InitOptions::scoped("#app"));
/// assert!(script.contains(r##"initComponents({"scope":"#app"})"##));
/// assert!(script.contains("DOMContentLoaded"));
/// ```
#[must_use]
pub fn bootstrap_script(options: &InitOptions) -> String {
    let config = serde_json::to_string(options).unwrap_or_else(|_| String::from("{}"));
    format!(
        r#"import {{ initComponents }} from 'armature';

document.addEventListener("DOMContentLoaded", () => {{
  initComponents({config});
}});"#
    )
}
