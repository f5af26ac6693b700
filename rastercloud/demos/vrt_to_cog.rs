use anyhow::Result;
use rastercloud::geometric::cog::{vrt_to_cog, CogOptions};
use std::path::PathBuf;

/// Example: convert a VRT mosaic to a Cloud-Optimized GeoTIFF in Irish Grid
/// Usage: cargo run --example vrt_to_cog -- path.vrt path.tif
fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let vrt_path = PathBuf::from(args.next().unwrap_or_else(|| "path.vrt".to_string()));
    let cog_path = PathBuf::from(args.next().unwrap_or_else(|| "path.tif".to_string()));

    // LZW, all CPUs, EPSG:29902
    vrt_to_cog(&vrt_path, &cog_path, &CogOptions::default())?;

    Ok(())
}
