use portal::config::{ClientConfig, ConfigSource};

/// Resolve the client configuration from build-time variables and the page origin.
pub fn load() -> ClientConfig {
    let page_origin = web_sys::window().and_then(|window| window.location().origin().ok());

    ClientConfig::resolve(ConfigSource {
        api_url: option_env!("PORTAL_API_URL"),
        request_timeout_ms: option_env!("PORTAL_REQUEST_TIMEOUT_MS"),
        page_origin,
        dev: cfg!(debug_assertions),
    })
}
