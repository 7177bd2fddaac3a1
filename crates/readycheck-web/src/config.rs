use leptos::prelude::*;
use readycheck_core::ReadyCheckConfig;

/// Id of the optional `<script type="application/json">` element holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "readycheck-config";

pub fn load_config() -> ReadyCheckConfig {
    let raw = document()
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content());

    let Some(raw) = raw else {
        tracing::debug!("No config element, using defaults");
        return ReadyCheckConfig::default();
    };

    match ReadyCheckConfig::from_json(&raw) {
        Ok(config) => {
            tracing::info!(probe_url = %config.speed.probe_url, "Loaded page config");
            config
        }
        Err(e) => {
            tracing::warn!(error = %e, "Ignoring invalid page config");
            ReadyCheckConfig::default()
        }
    }
}

/// Config provided by [`App`](crate::App), or defaults outside of it.
pub fn use_config() -> ReadyCheckConfig {
    use_context::<ReadyCheckConfig>().unwrap_or_default()
}
