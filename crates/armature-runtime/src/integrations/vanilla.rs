//! Plain wrapper around the process-wide orchestrator.

use crate::engine::{InitOptions, Scope};
use crate::global;
use crate::scan::ComponentsMap;
use armature_component::ComponentError;
use armature_dom::Document;

/// Initializes components with an optional scope, defaulting to the
/// whole document.
///
/// Exactly [`global::init_components`] with the scope defaulted; exists
/// so plain deployments have a single entry point to call.
pub async fn init(doc: &Document, scope: Option<Scope>) -> Result<ComponentsMap, ComponentError> {
    global::init_components(
        doc,
        &InitOptions {
            scope: scope.unwrap_or_default(),
        },
    )
    .await
}
