use serde::Serialize;
use statemap_shared::WidgetMessage;
use wasm_bindgen::JsValue;

/// Post a message to the embedding page. Does nothing when the widget is not
/// inside a frame. The target origin is unrestricted.
pub(crate) fn post_to_parent(message: &WidgetMessage) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(Some(parent)) = window.parent() else {
        return;
    };
    if js_sys::Object::is(window.as_ref(), parent.as_ref()) {
        return;
    }

    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    let value: JsValue = match message.serialize(&serializer) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(error = %e, "failed to encode widget message");
            return;
        }
    };
    if let Err(e) = parent.post_message(&value, "*") {
        tracing::warn!(error = ?e, "postMessage to parent failed");
    }
}
