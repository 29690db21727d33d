//! Render pipeline: tokenize → layout → rasterize → image.

use image::RgbaImage;
use thiserror::Error;

use crate::config::{RenderOptions, Rgba};
use crate::glyph::GlyphTree;
use crate::numeral::NumeralRing;
use crate::render::adapter::render_tree;
use crate::render::raster::RasterCanvas;

/// Error during rendering or output encoding.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("[input] {0}")]
    Input(String),
    #[error("[encode] {0}")]
    Encode(#[from] image::ImageError),
}

/// The glyph engine: input string in, pixel buffer out.
///
/// Layout and geometry are pure, so rendering itself cannot fail; the
/// error type covers the numeral route's input validation and PNG
/// encoding at the caller.
pub struct GlyphEngine {
    options: RenderOptions,
}

impl GlyphEngine {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render an input string. A value made only of digits takes the
    /// numeral-ring route; everything else goes through the text model.
    pub fn render(&self, input: &str) -> RgbaImage {
        if let Some(ring) = NumeralRing::new(input, &self.options) {
            return self.render_ring(&ring);
        }
        self.render_text(input)
    }

    /// Render through the text model (word or paragraph root).
    pub fn render_text(&self, input: &str) -> RgbaImage {
        // Phase 1: tokenize + layout
        let tree = GlyphTree::build(input);

        // Phase 2: rasterize
        let mut canvas = self.canvas(self.options.image_size());
        render_tree(&tree, &self.options, &mut canvas);

        let image = canvas.into_image();
        log::info!(
            "rendered {:?} at {}x{}",
            input,
            image.width(),
            image.height()
        );
        image
    }

    /// Render a digit string as a numeral ring. Errors on non-digit
    /// input; use `render` for automatic routing.
    pub fn render_numerals(&self, input: &str) -> Result<RgbaImage, RenderError> {
        let ring = NumeralRing::new(input, &self.options)
            .ok_or_else(|| RenderError::Input(format!("not a digit string: {input:?}")))?;
        Ok(self.render_ring(&ring))
    }

    fn render_ring(&self, ring: &NumeralRing) -> RgbaImage {
        let mut canvas = self.canvas(ring.image_size());
        ring.draw(&mut canvas);
        let image = canvas.into_image();
        log::info!("rendered numeral ring at {}x{}", image.width(), image.height());
        image
    }

    fn canvas(&self, side: f32) -> RasterCanvas {
        RasterCanvas::new(
            side as u32,
            self.options.color,
            self.options.thickness,
            Rgba::WHITE,
        )
    }
}
