use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;

use crate::collect::global_variables::{
    DEFAULT_COG_COMPRESS, DEFAULT_COG_NUM_THREADS, DEFAULT_COG_OUTPUT_SRS,
};

/// Creation options for a Cloud-Optimized GeoTIFF translation
#[derive(Debug, Clone, PartialEq)]
pub struct CogOptions {
    /// COMPRESS creation option (LZW, DEFLATE, ZSTD, ...)
    pub compress: String,
    /// NUM_THREADS creation option, a count or ALL_CPUS
    pub num_threads: String,
    /// SRS assigned to the output without reprojecting (e.g. EPSG:29902)
    pub output_srs: Option<String>,
    /// Extra KEY=VALUE creation options
    pub extra_creation_options: Vec<String>,
}

impl Default for CogOptions {
    fn default() -> Self {
        CogOptions {
            compress: DEFAULT_COG_COMPRESS.to_string(),
            num_threads: DEFAULT_COG_NUM_THREADS.to_string(),
            output_srs: Some(DEFAULT_COG_OUTPUT_SRS.to_string()),
            extra_creation_options: Vec::new(),
        }
    }
}

impl CogOptions {
    /// Arguments for `gdal_translate`, without the input and output paths
    pub fn to_translate_args(&self) -> Vec<String> {
        let mut args = vec![
            "-of".to_string(),
            "COG".to_string(),
            "-co".to_string(),
            format!("COMPRESS={}", self.compress),
            "-co".to_string(),
            format!("NUM_THREADS={}", self.num_threads),
        ];
        for option in &self.extra_creation_options {
            args.push("-co".to_string());
            args.push(option.clone());
        }
        if let Some(ref srs) = self.output_srs {
            args.push("-a_srs".to_string());
            args.push(srs.clone());
        }
        args
    }
}

/// Translate a VRT mosaic (or any GDAL-readable raster) into a COG.
/// Uses the gdal_translate command-line tool, which must be in PATH.
pub fn vrt_to_cog(vrt_path: &Path, cog_path: &Path, options: &CogOptions) -> Result<()> {
    if !vrt_path.exists() {
        anyhow::bail!("Input raster not found at {:?}", vrt_path);
    }

    if let Some(parent) = cog_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .context(format!("Failed to create output directory: {:?}", parent))?;
        }
    }

    let args = options.to_translate_args();
    tracing::debug!(?args, input = ?vrt_path, output = ?cog_path, "running gdal_translate");

    let output = Command::new("gdal_translate")
        .args(&args)
        .arg(vrt_path)
        .arg(cog_path)
        .output()
        .context(
            "Failed to execute gdal_translate. Make sure GDAL is installed and gdal_translate is in PATH",
        )?;

    if !output.status.success() {
        anyhow::bail!(
            "gdal_translate failed to write COG {:?}: {}",
            cog_path,
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    // The file exists even on some partial failures, so check GDAL can read it back
    gdal::Dataset::open(cog_path)
        .context(format!("COG written but unreadable by GDAL: {:?}", cog_path))?;

    println!("COG saved to: {:?}", cog_path);

    Ok(())
}
