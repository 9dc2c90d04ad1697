//! QR code rendering for public menu links.
//!
//! Codes use the highest error correction level so they still scan when printed small or
//! partially covered, and keep the standard quiet zone.

use std::io::Cursor;

use image::{ImageFormat, Luma};
use qrcode::{render::svg, EcLevel, QrCode};

use crate::server::error::Error;

/// Smallest rendered edge, in pixels.
pub const QR_MIN_SIZE: u32 = 256;

fn encode(data: &str) -> Result<QrCode, Error> {
    Ok(QrCode::with_error_correction_level(
        data.as_bytes(),
        EcLevel::H,
    )?)
}

/// Renders `data` as a standalone SVG document.
pub fn render_svg(data: &str) -> Result<String, Error> {
    let svg = encode(data)?
        .render::<svg::Color>()
        .min_dimensions(QR_MIN_SIZE, QR_MIN_SIZE)
        .quiet_zone(true)
        .build();

    Ok(svg)
}

/// Renders `data` as a grayscale PNG.
pub fn render_png(data: &str) -> Result<Vec<u8>, Error> {
    let image = encode(data)?
        .render::<Luma<u8>>()
        .min_dimensions(QR_MIN_SIZE, QR_MIN_SIZE)
        .quiet_zone(true)
        .build();

    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;

    Ok(bytes)
}
