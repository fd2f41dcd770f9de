use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_SIGN_IN_DELAY_MS: u32 = 1000;
pub const DEFAULT_SESSION_STORAGE_KEY: &str = "authToken";

/// Shape of `window.__HRMS_ENV` and `./config.json`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfigOverrides {
    pub sign_in_delay_ms: Option<u32>,
    pub session_storage_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub sign_in_delay_ms: u32,
    pub session_storage_key: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            sign_in_delay_ms: DEFAULT_SIGN_IN_DELAY_MS,
            session_storage_key: DEFAULT_SESSION_STORAGE_KEY.to_string(),
        }
    }
}

impl RuntimeConfig {
    pub fn merged(overrides: RuntimeConfigOverrides) -> Self {
        let defaults = Self::default();
        Self {
            sign_in_delay_ms: overrides
                .sign_in_delay_ms
                .unwrap_or(defaults.sign_in_delay_ms),
            session_storage_key: overrides
                .session_storage_key
                .map(|key| key.trim().to_string())
                .filter(|key| !key.is_empty())
                .unwrap_or(defaults.session_storage_key),
        }
    }
}

static RUNTIME_CONFIG: OnceLock<RuntimeConfig> = OnceLock::new();

/// Resolved configuration, or defaults until `init` has run.
pub fn current() -> RuntimeConfig {
    RUNTIME_CONFIG.get().cloned().unwrap_or_default()
}

fn cache(config: RuntimeConfig) -> RuntimeConfig {
    let _ = RUNTIME_CONFIG.set(config.clone());
    config
}

#[cfg(target_arch = "wasm32")]
fn overrides_from_env_js() -> Option<RuntimeConfigOverrides> {
    // Optional global object: window.__HRMS_ENV = { sign_in_delay_ms: 500, ... }
    let window = web_sys::window()?;
    let any = js_sys::Reflect::get(&window, &"__HRMS_ENV".into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let raw = js_sys::JSON::stringify(&any).ok()?.as_string()?;
    serde_json::from_str(&raw).ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn overrides_from_env_js() -> Option<RuntimeConfigOverrides> {
    None
}

async fn fetch_overrides() -> anyhow::Result<RuntimeConfigOverrides> {
    use anyhow::Context;

    let response = reqwest::get(config_json_url())
        .await
        .context("config.json request failed")?;
    if !response.status().is_success() {
        anyhow::bail!("config.json returned {}", response.status());
    }
    response
        .json::<RuntimeConfigOverrides>()
        .await
        .context("config.json is not valid JSON")
}

#[cfg(target_arch = "wasm32")]
fn config_json_url() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .map(|origin| format!("{}/config.json", origin))
        .unwrap_or_else(|| "./config.json".into())
}

#[cfg(not(target_arch = "wasm32"))]
fn config_json_url() -> String {
    "http://localhost:8080/config.json".into()
}

pub async fn init() -> RuntimeConfig {
    if let Some(cached) = RUNTIME_CONFIG.get() {
        return cached.clone();
    }
    if let Some(overrides) = overrides_from_env_js() {
        return cache(RuntimeConfig::merged(overrides));
    }
    match fetch_overrides().await {
        Ok(overrides) => cache(RuntimeConfig::merged(overrides)),
        Err(err) => {
            log::warn!("Using default runtime config: {:#}", err);
            cache(RuntimeConfig::default())
        }
    }
}
