use blockpage_compiler_html::{
    compile_to_html, render_preview, CompileOptions, Export, PreviewOptions, EXPORT_FILE_NAME,
    EXPORT_MIME_TYPE,
};
use blockpage_editor::{Action, Builder, CanvasRect, FieldKey, PointerClick};
use blockpage_model::{ElementKind, Layout, Position};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn field_key(key: &str, item: Option<u32>) -> Result<FieldKey, String> {
    match (key, item) {
        ("text", _) => Ok(FieldKey::Text),
        ("link-text", _) => Ok(FieldKey::LinkText),
        ("link-url", _) => Ok(FieldKey::LinkUrl),
        ("item", Some(item)) => Ok(FieldKey::ListItem(item as usize)),
        ("item", None) => Err("List item index required for field: item".to_string()),
        _ => Err(format!("Unknown field: {}", key)),
    }
}

/// Page builder state owned by the browser host
#[wasm_bindgen]
pub struct WebsiteBuilder {
    inner: Builder,
}

#[wasm_bindgen]
impl WebsiteBuilder {
    #[wasm_bindgen(constructor)]
    pub fn new(absolute: bool) -> WebsiteBuilder {
        let layout = if absolute { Layout::Absolute } else { Layout::Flow };
        WebsiteBuilder {
            inner: Builder::new(layout),
        }
    }

    /// Palette button; `kind` is a name (`heading`) or tag (`h1`)
    #[wasm_bindgen(js_name = addElement)]
    pub fn add_element(&mut self, kind: &str) -> Result<usize, JsValue> {
        let kind: ElementKind = kind.parse().map_err(js_error)?;
        Ok(self.inner.add(kind))
    }

    pub fn activate(&mut self, index: usize) -> Result<(), JsValue> {
        self.inner.activate(index).map_err(js_error)?;
        Ok(())
    }

    /// Form input; `key` is `text`, `link-text`, `link-url` or `item`
    /// (with `item` naming the list item)
    #[wasm_bindgen(js_name = setField)]
    pub fn set_field(&mut self, key: &str, item: Option<u32>, value: &str) -> Result<(), JsValue> {
        let key = field_key(key, item).map_err(|e| JsValue::from_str(&e))?;
        self.inner.set_field(key, value).map_err(js_error)
    }

    /// Numeric X/Y inputs
    #[wasm_bindgen(js_name = setCapture)]
    pub fn set_capture(&mut self, x: i32, y: i32) {
        self.inner.set_capture(Position::new(x, y));
    }

    #[wasm_bindgen(js_name = toggleLock)]
    pub fn toggle_lock(&mut self) -> bool {
        self.inner.toggle_lock()
    }

    /// Canvas click with the container's bounding rectangle. Returns the
    /// click outcome as JSON.
    #[wasm_bindgen(js_name = canvasClick)]
    #[allow(clippy::too_many_arguments)]
    pub fn canvas_click(
        &mut self,
        client_x: f64,
        client_y: f64,
        left: f64,
        top: f64,
        width: f64,
        height: f64,
        target: Option<u32>,
    ) -> Result<String, JsValue> {
        let outcome = self
            .inner
            .canvas_click(
                PointerClick::new(client_x, client_y),
                CanvasRect::new(left, top, width, height),
                target.map(|t| t as usize),
            )
            .map_err(js_error)?;
        serde_json::to_string(&outcome).map_err(js_error)
    }

    /// Commit the open element; returns its index
    pub fn save(&mut self) -> Result<usize, JsValue> {
        self.inner.save().map_err(js_error)
    }

    /// Dispatch an action given as JSON; returns the outcome as JSON
    pub fn dispatch(&mut self, action_json: &str) -> Result<String, JsValue> {
        let action: Action = serde_json::from_str(action_json).map_err(js_error)?;
        let outcome = self.inner.dispatch(action).map_err(js_error)?;
        serde_json::to_string(&outcome).map_err(js_error)
    }

    /// Edit form of the open element as JSON (`[]` when nothing is open)
    #[wasm_bindgen(js_name = formFields)]
    pub fn form_fields(&self) -> Result<String, JsValue> {
        let fields = self
            .inner
            .session()
            .map(|session| session.fields())
            .unwrap_or_default();
        serde_json::to_string(&fields).map_err(js_error)
    }

    #[wasm_bindgen(js_name = editingIndex)]
    pub fn editing_index(&self) -> Option<u32> {
        self.inner.session().map(|session| session.index as u32)
    }

    #[wasm_bindgen(js_name = isLocked)]
    pub fn is_locked(&self) -> bool {
        self.inner.canvas().locked
    }

    #[wasm_bindgen(js_name = elementCount)]
    pub fn element_count(&self) -> usize {
        self.inner.elements().len()
    }

    /// Canvas markup for the editor view
    #[wasm_bindgen(js_name = previewHtml)]
    pub fn preview_html(&self) -> String {
        render_preview(
            self.inner.elements(),
            PreviewOptions {
                layout: self.inner.layout(),
                locked: self.inner.canvas().locked,
                editing: self.inner.session().map(|session| session.index),
            },
        )
    }

    /// Body of website.html; the host turns it into a download
    #[wasm_bindgen(js_name = exportHtml)]
    pub fn export_html(&self, positioned: bool) -> String {
        let options = CompileOptions {
            positioned,
            ..Default::default()
        };
        Export::from_elements(self.inner.elements(), options).body
    }
}

#[wasm_bindgen(js_name = exportFileName)]
pub fn export_file_name() -> String {
    EXPORT_FILE_NAME.to_string()
}

#[wasm_bindgen(js_name = exportMimeType)]
pub fn export_mime_type() -> String {
    EXPORT_MIME_TYPE.to_string()
}

/// Serialize an element list given as JSON
#[wasm_bindgen(js_name = serializeElements)]
pub fn serialize_elements(elements_json: &str) -> Result<String, JsValue> {
    let elements: Vec<blockpage_model::Element> =
        serde_json::from_str(elements_json).map_err(js_error)?;
    Ok(compile_to_html(&elements, CompileOptions::default()))
}
