mod app;
mod bridge;
mod data;
mod geo;
mod logging;
mod map_view;
mod panel;
mod targets;

use leptos::mount::mount_to;
use leptos::prelude::*;
use statemap_shared::{StateDirectory, WidgetConfig};
use std::any::Any;
use std::cell::RefCell;
use wasm_bindgen::JsCast;

use crate::app::App;

thread_local! {
    static APP_MOUNT_HANDLE: RefCell<Option<Box<dyn Any>>> = RefCell::new(None);
}

fn main() {
    console_error_panic_hook::set_once();

    // Config first: it carries the log filter.
    let (config, config_error) = match data::read_config() {
        Ok(config) => (config, None),
        Err(e) => (WidgetConfig::default(), Some(e)),
    };
    logging::init(&config.log_filter);
    if let Some(e) = config_error {
        tracing::warn!(error = %e, "ignoring invalid widget config, using defaults");
    }

    let directory = match StateDirectory::us() {
        Ok(directory) => directory,
        Err(e) => {
            tracing::error!(error = %e, "state tables are inconsistent");
            return;
        }
    };

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let mount_target = document
        .get_element_by_id("statemap")
        .and_then(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .or_else(|| document.body());
    let Some(target) = mount_target else {
        tracing::error!("no mount target for the map widget");
        return;
    };

    APP_MOUNT_HANDLE.with(move |slot| {
        // Drop any earlier mount so its effects stop touching shared state.
        let _old = slot.borrow_mut().take();
        let handle = mount_to(target, move || view! { <App config=config directory=directory /> });
        *slot.borrow_mut() = Some(Box::new(handle));
    });
}
