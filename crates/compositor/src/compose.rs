use crate::{ComposeError, Result};
use image::{imageops, ImageFormat, Rgba, RgbaImage};
use std::path::Path;

/// Outline drawn around every pasted image.
pub const BORDER_COLOR: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Canvas size and vertical paste offsets for a stack of images.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub width: u32,
    pub height: u32,
    pub offsets: Vec<u32>,
}

impl Layout {
    /// Plan a stack from `(width, height)` pairs.
    pub fn plan(sizes: &[(u32, u32)]) -> Result<Self> {
        if sizes.is_empty() {
            return Err(ComposeError::NoImages);
        }

        let width = sizes.iter().map(|&(w, _)| w).max().unwrap_or(0);
        let mut offsets = Vec::with_capacity(sizes.len());
        let mut y: u64 = 0;
        for &(_, h) in sizes {
            offsets.push(u32::try_from(y).map_err(|_| ComposeError::TooLarge(y))?);
            y += u64::from(h);
        }
        let height = u32::try_from(y).map_err(|_| ComposeError::TooLarge(y))?;

        Ok(Self {
            width,
            height,
            offsets,
        })
    }
}

/// Stack `images` top to bottom on a transparent canvas.
///
/// Each image is pasted at x = 0 (pixels replaced, not blended), then outlined
/// with a one-pixel rectangle from `(0, y)` to `(width, y + height - 1)`
/// inclusive, clipped to the canvas. The right edge therefore lands one column
/// past a narrower image and falls off the canvas for the widest one.
pub fn compose(images: &[RgbaImage]) -> Result<RgbaImage> {
    let sizes: Vec<_> = images.iter().map(|img| img.dimensions()).collect();
    let layout = Layout::plan(&sizes)?;

    let mut canvas = RgbaImage::new(layout.width, layout.height);
    for (img, &y) in images.iter().zip(&layout.offsets) {
        imageops::replace(&mut canvas, img, 0, i64::from(y));
        if img.height() > 0 {
            outline(
                &mut canvas,
                (0, y),
                (img.width(), y + img.height() - 1),
                BORDER_COLOR,
            );
        }
    }
    Ok(canvas)
}

/// [`compose`] and write the result as PNG, replacing any existing file.
pub fn compose_to_file(output: impl AsRef<Path>, images: &[RgbaImage]) -> Result<RgbaImage> {
    let output = output.as_ref();
    let canvas = compose(images)?;
    canvas.save_with_format(output, ImageFormat::Png)?;
    log::debug!(
        "Wrote {}x{} image to {}",
        canvas.width(),
        canvas.height(),
        output.display()
    );
    Ok(canvas)
}

/// Load images from disk, then [`compose_to_file`].
pub fn compose_files<P: AsRef<Path>>(
    output: impl AsRef<Path>,
    inputs: &[P],
) -> Result<RgbaImage> {
    let images = inputs
        .iter()
        .map(|path| -> Result<RgbaImage> { Ok(image::open(path.as_ref())?.to_rgba8()) })
        .collect::<Result<Vec<_>>>()?;
    compose_to_file(output, &images)
}

/// Inclusive rectangle outline, clipped to the canvas.
fn outline(
    canvas: &mut RgbaImage,
    (x0, y0): (u32, u32),
    (x1, y1): (u32, u32),
    color: Rgba<u8>,
) {
    let (width, height) = canvas.dimensions();
    let mut put = |x: u32, y: u32| {
        if x < width && y < height {
            canvas.put_pixel(x, y, color);
        }
    };

    for x in x0..=x1 {
        put(x, y0);
        put(x, y1);
    }
    for y in y0..=y1 {
        put(x0, y);
        put(x1, y);
    }
}
