//! Viewport-dependent image source selection

/// Viewport width (in px) from which the large image variant is served
pub const LARGE_VIEWPORT_MIN: u32 = 768;

/// Image variant to serve for a given viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageVariant {
    Small,
    Large,
}

impl ImageVariant {
    pub fn for_viewport(width: u32) -> Self {
        if width >= LARGE_VIEWPORT_MIN {
            Self::Large
        } else {
            Self::Small
        }
    }

    /// Filename suffix the asset pipeline uses for this variant
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Large => "l",
            Self::Small => "s",
        }
    }
}

/// Resolves an image base path ("images/weight_2025_") to the concrete
/// source path for the given viewport width.
pub fn image_source(base_path: &str, viewport_width: u32) -> String {
    format!("{}{}.png", base_path, ImageVariant::for_viewport(viewport_width).suffix())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_breakpoint() {
        assert_eq!(ImageVariant::for_viewport(767), ImageVariant::Small);
        assert_eq!(ImageVariant::for_viewport(768), ImageVariant::Large);
        assert_eq!(ImageVariant::for_viewport(1920), ImageVariant::Large);
    }

    #[test]
    fn test_image_source() {
        assert_eq!(image_source("images/weight_2025_", 1024), "images/weight_2025_l.png");
        assert_eq!(image_source("images/weight_2025_", 375), "images/weight_2025_s.png");
    }
}
