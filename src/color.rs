use ecolor::Color32;
use std::fmt;

#[derive(Debug)]
pub struct ParseColorError(String);

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::error::Error for ParseColorError {}

pub fn parse_hex(hex: &str) -> Result<Color32, ParseColorError> {
    // ecolor's hex error carries no Display impl, hence the Debug format.
    Color32::from_hex(hex).map_err(|e| ParseColorError(format!("Invalid color {hex:?}: {e:?}")))
}

pub fn to_hex_rgb(color: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("#787878").unwrap(), Color32::from_rgb(0x78, 0x78, 0x78));
        assert_eq!(parse_hex("#bfbfbf").unwrap(), Color32::from_rgb(0xbf, 0xbf, 0xbf));
    }

    #[test]
    fn test_parse_hex_rejects_garbage() {
        assert!(parse_hex("not a color").is_err());
        assert!(parse_hex("#12").is_err());
    }

    #[test]
    fn test_to_hex_round_trip() {
        let c = parse_hex("#bfbfbf").unwrap();
        assert_eq!(to_hex_rgb(c), "#bfbfbf");
    }
}
