use log::Level;
use wasm_bindgen::JsValue;
use web_sys::window;

/// Global application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Default log level for the application
    pub log_level: Level,

    /// Override for the simulated latency of mock operations. `None`
    /// means every operation uses its own built-in delay.
    pub mock_latency_ms: Option<u32>,

    /// Toast notification duration in milliseconds
    pub toast_duration_ms: u32,

    /// Enable debug mode
    pub debug_mode: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            log_level: Level::Info,
            mock_latency_ms: None,
            toast_duration_ms: 5000,
            debug_mode: false,
        }
    }
}

impl AppSettings {
    /// Create settings from environment/window location
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        if let Some(window) = window() {
            if let Ok(hostname) = window.location().hostname() {
                settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";

                // In development, use more verbose logging
                if settings.debug_mode {
                    settings.log_level = Level::Debug;
                }
            }

            // Custom settings stored in localStorage win over defaults
            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(Some(log_level)) = storage.get_item("reliefnet_log_level") {
                    settings.log_level = match log_level.to_lowercase().as_str() {
                        "error" => Level::Error,
                        "warn" => Level::Warn,
                        "info" => Level::Info,
                        "debug" => Level::Debug,
                        "trace" => Level::Trace,
                        _ => settings.log_level,
                    };
                }

                if let Ok(Some(latency)) = storage.get_item("reliefnet_mock_latency_ms") {
                    if let Ok(latency_val) = latency.parse::<u32>() {
                        settings.mock_latency_ms = Some(latency_val);
                    }
                }

                if let Ok(Some(duration)) = storage.get_item("reliefnet_toast_duration_ms") {
                    if let Ok(duration_val) = duration.parse::<u32>() {
                        settings.toast_duration_ms = duration_val;
                    }
                }
            }
        }

        settings
    }

    /// Save settings to localStorage
    pub fn save_to_storage(&self) -> Result<(), JsValue> {
        if let Some(window) = window() {
            if let Some(storage) = window.local_storage()? {
                storage.set_item(
                    "reliefnet_log_level",
                    &format!("{:?}", self.log_level).to_lowercase(),
                )?;
                match self.mock_latency_ms {
                    Some(latency) => {
                        storage.set_item("reliefnet_mock_latency_ms", &latency.to_string())?
                    }
                    None => storage.remove_item("reliefnet_mock_latency_ms")?,
                }
                storage.set_item(
                    "reliefnet_toast_duration_ms",
                    &self.toast_duration_ms.to_string(),
                )?;
            }
        }
        Ok(())
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::from_environment());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Update the global settings
pub fn update_settings<F>(f: F)
where
    F: FnOnce(&mut AppSettings),
{
    SETTINGS.with(|s| {
        let mut settings = s.borrow_mut();
        f(&mut settings);
    });
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}

/// Simulated latency for a mock operation, honoring the global override.
pub fn mock_latency(default_ms: u32) -> u32 {
    get_settings().mock_latency_ms.unwrap_or(default_ms)
}
