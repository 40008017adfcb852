use glam::Vec2;

/// Viewport-space bounding box of an interactive element.
///
/// Bounds are read at interaction time and never cached by the effects
/// that consume them, since layout can change between events. Zero-size
/// bounds are legal and yield degenerate but defined results.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Pointer position relative to the bounds origin.
    #[inline]
    pub fn relative(&self, pointer: Vec2) -> Vec2 {
        Vec2::new(pointer.x - self.left, pointer.y - self.top)
    }

    /// Geometric center in viewport coordinates.
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width * 0.5, self.top + self.height * 0.5)
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}
