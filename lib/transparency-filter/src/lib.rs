pub mod config;
pub mod filter;
pub mod io;

pub use config::TransparencyConfig;
pub use filter::{TRANSPARENT_WHITE, WHITE_THRESHOLD, WhiteToTransparent};

use image::RgbaImage;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Failed to decode image {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to encode image {path}: {source}")]
    Encode {
        path: String,
        #[source]
        source: image::ImageError,
    },
}

pub trait Effect {
    fn apply(&self, image: &mut RgbaImage) -> Result<()>;
}

/// Load `config.input`, clear its near-white pixels and write the result
/// to `config.output` as PNG.
///
/// Nothing is written when decoding fails.
pub fn make_white_transparent(config: &TransparencyConfig) -> Result<()> {
    let mut image = io::load_rgba(&config.input)?;
    log::info!(
        "loaded {} ({}x{})",
        config.input,
        image.width(),
        image.height()
    );

    WhiteToTransparent.apply(&mut image)?;

    io::save_png(&config.output, &image)?;
    log::info!("wrote {}", config.output);

    Ok(())
}
