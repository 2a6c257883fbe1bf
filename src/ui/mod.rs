use egui::{Color32, RichText};

pub mod main_frame;
pub mod plot_view;
pub mod settings_ui;

pub use main_frame::StereoApp;

pub fn ok_text(msg: &str) -> RichText {
    RichText::new(msg).color(Color32::GREEN)
}

pub fn warn_text(msg: &str) -> RichText {
    RichText::new(msg).color(Color32::YELLOW)
}

pub fn err_text(msg: &str) -> RichText {
    RichText::new(msg).color(Color32::RED)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text_keeps_message() {
        assert_eq!(ok_text("saved").text(), "saved");
        assert_eq!(warn_text("check spacing").text(), "check spacing");
        assert_eq!(err_text("boom").text(), "boom");
    }

    #[test]
    fn test_app_boots_with_settings_hidden() {
        let app = StereoApp::new().unwrap();
        assert!(!app.show_settings);
        assert_eq!(app.settings.get_pixel_density(), 75);
    }
}
