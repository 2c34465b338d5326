use serde::{Serialize, Serializer};

/// CSS color as understood by the canvas and Chart.js.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Color {
    Rgba { r: u8, g: u8, b: u8, a: f32 },
    Named(&'static str),
}

impl Color {
    pub const TRANSPARENT: Color = Color::Named("transparent");
    pub const WHITE: Color = Color::Named("white");

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Color::Rgba { r, g, b, a }
    }

    pub const fn white(a: f32) -> Self {
        Color::rgba(255, 255, 255, a)
    }

    pub fn to_css(self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Rgba { r, g, b, a } => write!(f, "rgba({r}, {g}, {b}, {a})"),
            Color::Named(name) => f.write_str(name),
        }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One color for the whole dataset, or one per data point / slice.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Paint {
    Single(Color),
    PerItem(Vec<Color>),
}

impl From<Color> for Paint {
    fn from(c: Color) -> Self {
        Paint::Single(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_css_strings() {
        assert_eq!(Color::white(0.8).to_css(), "rgba(255, 255, 255, 0.8)");
        assert_eq!(Color::rgba(0, 0, 0, 1.0).to_css(), "rgba(0, 0, 0, 1)");
        assert_eq!(Color::TRANSPARENT.to_css(), "transparent");
    }

    #[test]
    fn paint_serializes_flat() {
        let single = serde_json::to_string(&Paint::from(Color::white(0.3))).unwrap();
        assert_eq!(single, r#""rgba(255, 255, 255, 0.3)""#);
        let many = Paint::PerItem(vec![Color::white(0.1), Color::TRANSPARENT]);
        assert_eq!(
            serde_json::to_string(&many).unwrap(),
            r#"["rgba(255, 255, 255, 0.1)","transparent"]"#
        );
    }
}
