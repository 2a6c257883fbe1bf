use egui::ColorImage;

#[derive(thiserror::Error, Debug)]
pub enum IconError {
    #[error("no icon named {0:?}")]
    NotFound(String),
    #[error("icon decode error: {0}")]
    Decode(#[from] image::ImageError),
}

/// Icon lookup is injected so the settings record never touches the theme
/// machinery of whatever shell embeds it.
pub trait IconProvider {
    fn lookup(&self, name: &str, size: u32) -> Result<ColorImage, IconError>;
}

static FOLDER_PNG: &[u8] = include_bytes!("../assets/icons/folder.png");

/// Provider backed by PNG assets compiled into the binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinIcons;

impl IconProvider for BuiltinIcons {
    fn lookup(&self, name: &str, size: u32) -> Result<ColorImage, IconError> {
        let bytes = match name {
            "folder" => FOLDER_PNG,
            other => return Err(IconError::NotFound(other.to_string())),
        };
        let decoded = image::load_from_memory_with_format(bytes, image::ImageFormat::Png)?;
        let rgba = decoded
            .resize_exact(size, size, image::imageops::FilterType::Lanczos3)
            .to_rgba8();
        let dims = [rgba.width() as usize, rgba.height() as usize];
        Ok(ColorImage::from_rgba_unmultiplied(dims, &rgba.into_raw()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folder_icon_decodes_at_requested_size() {
        let icon = BuiltinIcons.lookup("folder", 16).unwrap();
        assert_eq!(icon.size, [16, 16]);
        let icon = BuiltinIcons.lookup("folder", 24).unwrap();
        assert_eq!(icon.size, [24, 24]);
    }

    #[test]
    fn test_unknown_icon_is_reported() {
        let err = BuiltinIcons.lookup("does-not-exist", 16).unwrap_err();
        assert!(matches!(err, IconError::NotFound(_)));
    }
}
