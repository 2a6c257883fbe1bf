use serde::{Deserialize, Serialize};
use std::fmt;

/// Which figure layout the main window currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewMode {
    Stereonet,
    StereoRose,
    RoseDiagram,
    Paleostress,
}

impl Default for ViewMode {
    fn default() -> Self {
        Self::Stereonet
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ViewMode::Stereonet => write!(f, "Stereonet"),
            ViewMode::StereoRose => write!(f, "Stereonet and Rose"),
            ViewMode::RoseDiagram => write!(f, "Rose Diagram"),
            ViewMode::Paleostress => write!(f, "Paleostress"),
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AppState {
    pub view: ViewMode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_round_trips_through_json() {
        let state = AppState { view: ViewMode::Paleostress };
        let json = serde_json::to_string_pretty(&state).unwrap();
        let back: AppState = serde_json::from_str(&json).unwrap();
        assert_eq!(back.view, ViewMode::Paleostress);
    }

    #[test]
    fn test_default_view_is_stereonet() {
        assert_eq!(ViewMode::default(), ViewMode::Stereonet);
        assert_eq!(AppState::default().view, ViewMode::Stereonet);
    }
}
