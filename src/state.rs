// src/state.rs
use crate::config::Config;

/// Application-wide settings shared by the widgets. Grid selection is not
/// kept here; the grid owns it.
pub struct AppState {
    pub config: Config,
    pub animation_paused: bool,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            animation_paused: false,
        }
    }

    /// Reads the persisted config, logging where it came from.
    pub fn load() -> Self {
        let (config, msg) = Config::load();
        log::info!("{}", msg);
        Self::new(config)
    }

    pub fn save_config(&self) {
        let msg = self.config.save();
        log::info!("{}", msg);
    }

    /// Whether diagrams should currently run their frame loop.
    pub fn animation_active(&self) -> bool {
        self.config.animation.enabled && !self.animation_paused
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pause_and_disable_both_stop_animation() {
        let mut st = AppState::new(Config::default());
        assert!(st.animation_active());

        st.animation_paused = true;
        assert!(!st.animation_active());

        st.animation_paused = false;
        st.config.animation.enabled = false;
        assert!(!st.animation_active());
    }
}
