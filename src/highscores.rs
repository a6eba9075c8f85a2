//! Best-score persistence
//!
//! A single integer, persisted to LocalStorage on the web. Missing or
//! unparsable stored values fall back to 0 — never fatal.

/// Handle to the persisted best score
#[derive(Debug, Clone, Copy, Default)]
pub struct BestScore(pub u32);

impl BestScore {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "hana_run_highscore";

    /// Load the stored best from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(raw)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(best) = raw.trim().parse::<u32>() {
                    log::info!("Loaded high score: {}", best);
                    return Self(best);
                }
                log::warn!("Stored high score unreadable, starting from 0");
            }
        }

        Self(0)
    }

    /// Save a new best to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(best: u32) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            let _ = storage.set_item(Self::STORAGE_KEY, &best.to_string());
            log::info!("High score saved: {}", best);
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self(0)
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(_best: u32) {
        // No-op for native
    }
}
