use gdal::Dataset;
use serde::{Deserialize, Serialize};

use crate::collect::global_variables::GDAL_PROVIDER;

/// Raster properties read when the layer is opened
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RasterInfo {
    pub width: usize,
    pub height: usize,
    pub band_count: usize,
    /// Projection as WKT, empty when the source has none
    pub projection: String,
    pub geo_transform: Option<[f64; 6]>,
}

/// Raster layer handle.
/// Validity is decided once, when the layer is constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RasterLayer {
    source: String,
    name: String,
    provider: String,
    valid: bool,
    error: Option<String>,
    info: Option<RasterInfo>,
}

impl RasterLayer {
    /// Open `source` through the given data provider.
    /// Only the `gdal` provider is known; any other key yields an invalid layer.
    pub fn new(source: &str, name: &str, provider: &str) -> Self {
        let opened = if provider == GDAL_PROVIDER {
            Self::read_info(source)
        } else {
            Err(format!("Unsupported data provider: {}", provider))
        };

        let (valid, error, info) = match opened {
            Ok(info) => (true, None, Some(info)),
            Err(message) => (false, Some(message), None),
        };

        RasterLayer {
            source: source.to_string(),
            name: name.to_string(),
            provider: provider.to_string(),
            valid,
            error,
            info,
        }
    }

    fn read_info(source: &str) -> Result<RasterInfo, String> {
        let dataset = Dataset::open(source).map_err(|e| e.to_string())?;
        let (width, height) = dataset.raster_size();
        let band_count = dataset.raster_count() as usize;
        if band_count == 0 {
            return Err(format!("Dataset has no raster bands: {}", source));
        }

        Ok(RasterInfo {
            width,
            height,
            band_count,
            projection: dataset.projection(),
            geo_transform: dataset.geo_transform().ok(),
        })
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Reason the layer could not be opened, empty for valid layers
    pub fn error_message(&self) -> &str {
        self.error.as_deref().unwrap_or("")
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn provider(&self) -> &str {
        &self.provider
    }

    pub fn info(&self) -> Option<&RasterInfo> {
        self.info.as_ref()
    }
}
