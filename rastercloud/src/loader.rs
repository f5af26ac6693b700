//! Bulk registration of remote rasters.
//!
//! Each URL is cleaned, probed with a HEAD request, turned into a
//! `/vsicurl/` path and opened through GDAL. Failures are reported per URL
//! and never stop the batch.

use thiserror::Error;

use crate::collect::global_variables::GDAL_PROVIDER;
use crate::collect::probe::UrlProbe;
use crate::commons::basic_functions::{
    clean_url, get_layer_name_from_url, prefixed_layer_name, vsicurl_path,
};
use crate::geometric::raster_layer::RasterLayer;
use crate::project::Project;

#[cfg(feature = "indicatif")]
use indicatif::{ProgressBar, ProgressStyle};

/// Why a single URL did not end up in the project.
/// The messages are the lines printed for the user.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("URL not accessible: {url}")]
    NotAccessible { url: String },

    #[error("Invalid layer from URL: {url}\nError: {message}")]
    InvalidLayer { url: String, message: String },

    #[error("Failed to add layer to map: {name}")]
    Rejected { name: String },

    #[error("Error processing URL {url}: {source:#}")]
    Other {
        url: String,
        #[source]
        source: anyhow::Error,
    },
}

/// Builds layer handles for streaming paths.
pub trait LayerFactory {
    fn create(&self, source: &str, name: &str, provider: &str) -> anyhow::Result<RasterLayer>;
}

/// Opens layers with GDAL.
#[derive(Debug, Default, Clone, Copy)]
pub struct GdalLayerFactory;

impl LayerFactory for GdalLayerFactory {
    fn create(&self, source: &str, name: &str, provider: &str) -> anyhow::Result<RasterLayer> {
        Ok(RasterLayer::new(source, name, provider))
    }
}

/// Process one URL and return the registered layer name.
pub fn add_raster_from_url(
    project: &mut Project,
    url: &str,
    layer_name_prefix: Option<&str>,
    probe: &dyn UrlProbe,
    factory: &dyn LayerFactory,
) -> Result<String, LoadError> {
    let url = clean_url(url);

    let outcome = probe.probe(&url);
    if !outcome.is_reachable() {
        tracing::debug!(url = %url, ?outcome, "HEAD probe failed");
        return Err(LoadError::NotAccessible { url });
    }

    let streaming_path = vsicurl_path(&url);
    let layer_name = prefixed_layer_name(&get_layer_name_from_url(&url), layer_name_prefix);

    let layer = factory
        .create(&streaming_path, &layer_name, GDAL_PROVIDER)
        .map_err(|source| LoadError::Other {
            url: url.clone(),
            source,
        })?;

    if !layer.is_valid() {
        return Err(LoadError::InvalidLayer {
            url,
            message: layer.error_message().to_string(),
        });
    }

    match project.add_map_layer(layer) {
        Some(id) => {
            tracing::debug!(layer = %layer_name, id = %id, "layer registered");
            Ok(layer_name)
        }
        None => Err(LoadError::Rejected { name: layer_name }),
    }
}

/// Add every reachable, valid raster of `url_list` to `project`.
/// Returns the names of the added layers, in input order.
pub fn add_rasters_from_urls(
    project: &mut Project,
    url_list: &[String],
    layer_name_prefix: Option<&str>,
    probe: &dyn UrlProbe,
    factory: &dyn LayerFactory,
) -> Vec<String> {
    let mut added_layers = Vec::new();

    #[cfg(feature = "indicatif")]
    let pb = if url_list.len() > 1 {
        let pb = ProgressBar::new(url_list.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos:>7}/{len:7} {msg}")
        {
            pb.set_style(style.progress_chars("##-"));
        }
        Some(pb)
    } else {
        None
    };

    for url in url_list {
        match add_raster_from_url(project, url, layer_name_prefix, probe, factory) {
            Ok(name) => {
                println!("Successfully added layer: {}", name);
                added_layers.push(name);
            }
            Err(e) => println!("{}", e),
        }

        #[cfg(feature = "indicatif")]
        if let Some(ref pb) = pb {
            pb.inc(1);
        }
    }

    #[cfg(feature = "indicatif")]
    if let Some(pb) = pb {
        pb.finish_with_message(format!("{} layer(s) added", added_layers.len()));
    }

    tracing::info!(
        added = added_layers.len(),
        total = url_list.len(),
        "batch finished"
    );
    added_layers
}
