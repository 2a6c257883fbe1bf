use egui::Key;
use serde::{Deserialize, Serialize};

use std::collections::HashMap;
use std::fmt;
use std::fs;

#[derive(Hash, Eq, PartialEq, Debug, Clone, Copy, Serialize, Deserialize)]
pub enum Action {
    ShowStereonet,
    ShowStereoRose,
    ShowRoseDiagram,
    ShowPaleostress,
    ToggleGrid,
    ToggleLegend,
    ToggleShowSettings,
    ExportImage,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Action::ShowStereonet => write!(f, "Show stereonet"),
            Action::ShowStereoRose => write!(f, "Show stereonet and rose"),
            Action::ShowRoseDiagram => write!(f, "Show rose diagram"),
            Action::ShowPaleostress => write!(f, "Show paleostress view"),
            Action::ToggleGrid => write!(f, "Toggle grid"),
            Action::ToggleLegend => write!(f, "Toggle legend"),
            Action::ToggleShowSettings => write!(f, "Toggle settings panel"),
            Action::ExportImage => write!(f, "Export figure as image"),
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct KeyBindings {
    bindings: HashMap<Action, Key>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();
        bindings.insert(Action::ShowStereonet, Key::Num1);
        bindings.insert(Action::ShowStereoRose, Key::Num2);
        bindings.insert(Action::ShowRoseDiagram, Key::Num3);
        bindings.insert(Action::ShowPaleostress, Key::Num4);
        bindings.insert(Action::ToggleGrid, Key::G);
        bindings.insert(Action::ToggleLegend, Key::L);
        bindings.insert(Action::ToggleShowSettings, Key::F1);
        bindings.insert(Action::ExportImage, Key::E);
        Self { bindings }
    }
}

impl KeyBindings {
    pub fn set(&mut self, action: Action, new_key: Key) {
        self.bindings.retain(|_, &mut k| k != new_key);
        self.bindings.insert(action, new_key);
    }

    pub fn remove(&mut self, action: &Action) {
        self.bindings.remove(action);
    }

    pub fn key_for(&self, action: Action) -> Option<Key> {
        self.bindings.get(&action).copied()
    }

    pub fn action_triggered(&self, action: Action, input: &egui::InputState) -> bool {
        if let Some(&key) = self.bindings.get(&action) {
            input.key_pressed(key)
        } else {
            false
        }
    }

    pub fn save_to_file(&self, path: &str) -> std::io::Result<()> {
        let data = serde_json::to_string_pretty(self).unwrap();
        fs::write(path, data)
    }

    pub fn load_from_file(path: &str) -> std::io::Result<Self> {
        let content = fs::read_to_string(path)?;
        let parsed: Self = serde_json::from_str(&content).unwrap();
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let kb = KeyBindings::default();
        assert_eq!(kb.key_for(Action::ShowStereonet), Some(Key::Num1));
        assert_eq!(kb.key_for(Action::ToggleGrid), Some(Key::G));
        assert_eq!(kb.key_for(Action::ExportImage), Some(Key::E));
        assert_eq!(kb.key_for(Action::ToggleShowSettings), Some(Key::F1));
    }

    #[test]
    fn test_rebinding_steals_the_key() {
        let mut kb = KeyBindings::default();
        kb.set(Action::ToggleGrid, Key::Num1);
        assert_eq!(kb.key_for(Action::ToggleGrid), Some(Key::Num1));
        assert_eq!(kb.key_for(Action::ShowStereonet), None);
    }

    #[test]
    fn test_remove_binding() {
        let mut kb = KeyBindings::default();
        kb.remove(&Action::ToggleLegend);
        assert_eq!(kb.key_for(Action::ToggleLegend), None);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let path = std::env::temp_dir().join("stereors_keybinds_test.json");
        let path = path.to_str().unwrap();

        let mut kb = KeyBindings::default();
        kb.set(Action::ExportImage, Key::X);
        kb.save_to_file(path).unwrap();

        let loaded = KeyBindings::load_from_file(path).unwrap();
        assert_eq!(loaded.key_for(Action::ExportImage), Some(Key::X));
        let _ = fs::remove_file(path);
    }
}
