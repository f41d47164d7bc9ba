use crate::{Effect, Result};
use image::{Rgba, RgbaImage};

/// Each of R, G and B must be strictly above this for a pixel to count as white
pub const WHITE_THRESHOLD: u8 = 240;

pub const TRANSPARENT_WHITE: Rgba<u8> = Rgba([255, 255, 255, 0]);

/// Alpha is not looked at.
pub fn is_near_white(pixel: &Rgba<u8>) -> bool {
    pixel[0] > WHITE_THRESHOLD && pixel[1] > WHITE_THRESHOLD && pixel[2] > WHITE_THRESHOLD
}

/// Replace every near-white pixel with fully transparent white and leave
/// the rest untouched. Returns how many pixels were replaced.
pub fn clear_near_white(image: &mut RgbaImage) -> usize {
    let mut cleared = 0;

    for pixel in image.pixels_mut() {
        if is_near_white(pixel) {
            *pixel = TRANSPARENT_WHITE;
            cleared += 1;
        }
    }

    cleared
}

/// Hard-cutoff white keying, no blending at the edges
#[derive(Debug, Clone, Copy, Default)]
pub struct WhiteToTransparent;

impl Effect for WhiteToTransparent {
    fn apply(&self, image: &mut RgbaImage) -> Result<()> {
        let cleared = clear_near_white(image);
        log::debug!(
            "cleared {cleared} of {} pixels",
            image.width() as u64 * image.height() as u64
        );

        Ok(())
    }
}
