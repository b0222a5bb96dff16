// SPDX-License-Identifier: MPL-2.0

//! Draw-transform computation for rotated icon content
//!
//! The render surface owns the actual drawing; this module computes the
//! transform it applies: an optional fit-mode downscale followed by a
//! rotation about the content center.

/// Integer pixel size of a viewport or of drawable content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// How content is scaled when it does not match the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentFit {
    /// Scale oversized content down to fit within the viewport, keeping
    /// aspect ratio. Smaller content is left at its intrinsic size.
    #[default]
    Contain,
    /// Draw at intrinsic size regardless of the viewport.
    None,
}

/// Transform the render surface applies before drawing the content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawTransform {
    /// Uniform scale factor, applied first
    pub scale: f32,
    /// Rotation in degrees about the content center, within [0, 359]
    pub rotation: i32,
}

/// Compute the transform for drawing `content` rotated by `degree` inside
/// `viewport`.
///
/// Returns `None` when either size is degenerate; the host skips the frame
/// and leaves widget state untouched.
pub fn draw_transform(
    viewport: Size,
    content: Size,
    fit: ContentFit,
    degree: i32,
) -> Option<DrawTransform> {
    if viewport.is_empty() || content.is_empty() {
        return None;
    }

    let scale = match fit {
        ContentFit::Contain
            if content.width > viewport.width || content.height > viewport.height =>
        {
            (viewport.width as f32 / content.width as f32)
                .min(viewport.height as f32 / content.height as f32)
        }
        _ => 1.0,
    };

    Some(DrawTransform {
        scale,
        rotation: super::animator::normalize_degree(degree),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_sizes_skip_the_frame() {
        let ok = Size::new(64, 64);
        assert!(draw_transform(Size::new(0, 10), ok, ContentFit::Contain, 0).is_none());
        assert!(draw_transform(ok, Size::new(10, 0), ContentFit::Contain, 0).is_none());
    }

    #[test]
    fn test_oversized_content_scales_down() {
        let transform =
            draw_transform(Size::new(100, 50), Size::new(200, 200), ContentFit::Contain, 90)
                .unwrap();
        assert_eq!(transform.scale, 0.25);
        assert_eq!(transform.rotation, 90);
    }

    #[test]
    fn test_smaller_content_keeps_intrinsic_size() {
        let transform =
            draw_transform(Size::new(100, 100), Size::new(40, 40), ContentFit::Contain, 45)
                .unwrap();
        assert_eq!(transform.scale, 1.0);
    }

    #[test]
    fn test_fit_none_never_scales() {
        let transform =
            draw_transform(Size::new(10, 10), Size::new(200, 200), ContentFit::None, 0).unwrap();
        assert_eq!(transform.scale, 1.0);
    }

    #[test]
    fn test_rotation_is_normalized() {
        let transform =
            draw_transform(Size::new(10, 10), Size::new(10, 10), ContentFit::Contain, -90)
                .unwrap();
        assert_eq!(transform.rotation, 270);
    }
}
