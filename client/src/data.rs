use statemap_shared::{ConfigError, CustomerRecord, LoadError, WidgetConfig, parse_customers};

const CONFIG_ELEMENT_ID: &str = "statemap-config";

/// Fetch and parse the customer record set.
pub(crate) async fn fetch_customers(url: &str) -> Result<Vec<CustomerRecord>, LoadError> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| LoadError::Fetch(e.to_string()))?;
    if !resp.ok() {
        return Err(LoadError::Status(resp.status()));
    }
    let body = resp
        .text()
        .await
        .map_err(|e| LoadError::Fetch(e.to_string()))?;
    parse_customers(&body)
}

/// Read host-page overrides from `<script id="statemap-config" type="application/json">`.
/// No such element means defaults.
pub(crate) fn read_config() -> Result<WidgetConfig, ConfigError> {
    let body = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());
    match body {
        Some(body) if !body.trim().is_empty() => WidgetConfig::from_json(&body),
        _ => Ok(WidgetConfig::default()),
    }
}
