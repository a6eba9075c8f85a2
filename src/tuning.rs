//! Data-driven game balance knobs
//!
//! Persisted separately from the high score in LocalStorage. Everything here
//! has a sensible default, so a missing or corrupt entry just falls back.

use serde::{Deserialize, Serialize};

/// Tunable simulation parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tuning {
    /// Inward shrink applied to both hitboxes before the AABB test.
    /// Bigger = more forgiving collisions.
    pub collision_padding: f32,
    /// Wall-clock delay before the game-over overlay yields back to the menu
    pub game_over_delay_ms: f64,
    /// Optional clamp on the frame-unit delta. Protects against a huge
    /// simulation jump after a long pause (backgrounded tab). `None` keeps
    /// the original unclamped behavior.
    pub max_delta: Option<f32>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            collision_padding: 30.0,
            game_over_delay_ms: 2000.0,
            max_delta: None,
        }
    }
}

impl Tuning {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "hana_run_tuning";

    /// Load tuning from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(tuning) = serde_json::from_str(&json) {
                    log::info!("Loaded tuning from LocalStorage");
                    return tuning;
                }
            }
        }

        log::info!("Using default tuning");
        Self::default()
    }

    /// Save tuning to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Tuning saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_baseline() {
        let tuning = Tuning::default();
        assert_eq!(tuning.collision_padding, 30.0);
        assert_eq!(tuning.game_over_delay_ms, 2000.0);
        assert!(tuning.max_delta.is_none());
    }

    #[test]
    fn test_round_trips_through_json() {
        let tuning = Tuning {
            collision_padding: 15.0,
            game_over_delay_ms: 1000.0,
            max_delta: Some(4.0),
        };
        let json = serde_json::to_string(&tuning).unwrap();
        let back: Tuning = serde_json::from_str(&json).unwrap();
        assert_eq!(back.collision_padding, 15.0);
        assert_eq!(back.max_delta, Some(4.0));
    }
}
