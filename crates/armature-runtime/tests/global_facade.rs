//! Process-wide facade flow.
//!
//! Everything here shares one process-wide registry and engine, so the
//! whole flow lives in a single test to keep it deterministic.

use armature_runtime::integrations::vanilla;
use armature_runtime::{
    global, Component, ComponentConfig, ComponentCore, ComponentError, Document, InitOptions, Scope,
};
use async_trait::async_trait;
use serde_json::json;

struct Widget {
    core: ComponentCore,
}

impl Widget {
    fn factory(config: ComponentConfig) -> Box<dyn Component> {
        Box::new(Widget {
            core: ComponentCore::new(config),
        })
    }
}

#[async_trait]
impl Component for Widget {
    fn core(&self) -> &ComponentCore {
        &self.core
    }
    fn core_mut(&mut self) -> &mut ComponentCore {
        &mut self.core
    }
    async fn init(&mut self) -> Result<(), ComponentError> {
        self.core.data = json!({ "via": "global" });
        Ok(())
    }
}

#[tokio::test]
async fn facade_flow() {
    let mut doc = Document::new();
    let widget = doc.element("div", doc.root());
    doc.set_attribute(widget, "data-component", "Widget");
    let aliased = doc.element("div", doc.root());
    doc.set_attribute(aliased, "data-component", "Aliased");
    let late = doc.element("div", doc.root());
    doc.set_attribute(late, "data-component", "Latecomer");

    global::register_component("Widget", Widget::factory);
    // define_component is the same operation under another name.
    global::define_component("Aliased", Widget::factory);

    let map = global::init_components(&doc, &InitOptions::page())
        .await
        .unwrap();
    assert_eq!(map.len(), 3);
    assert!(map[0].instance.is_some());
    assert!(map[1].instance.is_some());
    // Not registered yet: descriptor left bare, no error.
    assert!(map[2].instance.is_none());

    // Lookup goes through the stored process-wide map.
    let instance = global::get_instance(widget).await.unwrap();
    assert_eq!(instance.lock().await.core().data, json!({ "via": "global" }));
    assert!(global::get_instance(late).await.is_none());

    // A registration after the batch affects subsequent calls only.
    global::register_component("Latecomer", Widget::factory);
    let map = global::init_components(&doc, &InitOptions::page())
        .await
        .unwrap();
    assert!(map[2].instance.is_some());

    // The vanilla adapter is a plain forward with a defaulted scope.
    let map = vanilla::init(&doc, None).await.unwrap();
    assert_eq!(map.len(), 3);
    let map = vanilla::init(&doc, Some(Scope::Selector("#nowhere".into())))
        .await
        .unwrap();
    assert_eq!(map.len(), 3); // unresolvable scope == whole document

    // Destroy through the facade clears the back-reference only.
    assert!(global::destroy(widget).await.is_some());
    assert!(global::get_instance(widget).await.is_some());
}
