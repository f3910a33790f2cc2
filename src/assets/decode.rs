use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64_STANDARD};

use crate::{
    document::model::ImageRef,
    foundation::core::Size,
    foundation::error::{PixfaceError, PixfaceResult},
};

/// A frame image decoded to straight RGBA8 pixels.
#[derive(Clone, Debug)]
pub struct DecodedImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Straight-alpha RGBA8 pixel data, row-major.
    pub rgba8: Vec<u8>,
}

/// Collaborator that resolves [`ImageRef`]s to pixel data on demand.
///
/// The engine probes frame 0 of every sprite at setup to learn its erase-box
/// dimensions; a real display driver additionally decodes pixels when the
/// surface draws an image.
pub trait ImageDecoder {
    /// Pixel dimensions of the referenced image.
    fn probe(&self, image: &ImageRef) -> PixfaceResult<Size>;

    /// Full pixel data of the referenced image.
    fn decode(&self, image: &ImageRef) -> PixfaceResult<DecodedImage>;
}

/// Default decoder for the base64-encoded PNG images canvas documents embed.
#[derive(Clone, Copy, Debug, Default)]
pub struct PngImageDecoder;

impl PngImageDecoder {
    fn encoded_bytes(image: &ImageRef) -> PixfaceResult<Vec<u8>> {
        BASE64_STANDARD
            .decode(image.0.as_bytes())
            .map_err(|e| PixfaceError::decode(format!("invalid base64 image data: {e}")))
    }
}

impl ImageDecoder for PngImageDecoder {
    fn probe(&self, image: &ImageRef) -> PixfaceResult<Size> {
        // Frame images are tiny; a full decode is cheaper than a header parse
        // round-trip through the format layer.
        let decoded = self.decode(image)?;
        Ok(Size::new(decoded.width, decoded.height))
    }

    fn decode(&self, image: &ImageRef) -> PixfaceResult<DecodedImage> {
        let bytes = Self::encoded_bytes(image)?;
        let dyn_img = image::load_from_memory(&bytes)
            .map_err(|e| PixfaceError::decode(format!("decode frame image: {e}")))?;
        let rgba = dyn_img.to_rgba8();
        let (width, height) = rgba.dimensions();
        Ok(DecodedImage {
            width,
            height,
            rgba8: rgba.into_raw(),
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
