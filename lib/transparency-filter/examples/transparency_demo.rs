/// Transparency demo
/// Renders a dark sprite on a white canvas with a light-grey halo and keys out the white

use image::{Rgba, RgbaImage};
use std::path::Path;
use transparency_filter::{TransparencyConfig, make_white_transparent};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let output_dir = Path::new("tmp");
    std::fs::create_dir_all(output_dir)?;

    let mut img = RgbaImage::from_pixel(256, 256, Rgba([255, 255, 255, 255]));
    for y in 0..256u32 {
        for x in 0..256u32 {
            let dx = x as i32 - 128;
            let dy = y as i32 - 128;
            let dist = ((dx * dx + dy * dy) as f32).sqrt();

            if dist < 64.0 {
                img.put_pixel(x, y, Rgba([(x / 2) as u8, 40, (y / 2) as u8, 255]));
            } else if dist < 72.0 {
                // Halo just under the cutoff stays opaque
                img.put_pixel(x, y, Rgba([235, 235, 235, 255]));
            }
        }
    }

    let input = output_dir.join("transparency_input.png");
    img.save(&input)?;

    let config = TransparencyConfig::new(
        input.to_string_lossy(),
        output_dir.join("transparency_output.png").to_string_lossy(),
    );
    make_white_transparent(&config)?;

    println!("✓ Generated {}", config.output);

    Ok(())
}
