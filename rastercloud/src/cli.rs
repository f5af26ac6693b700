//! Command-line interface.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

use crate::collect::global_variables::{
    lidar_urls, DEFAULT_COG_COMPRESS, DEFAULT_COG_NUM_THREADS, DEFAULT_COG_OUTPUT_SRS,
    DEFAULT_PROBE_TIMEOUT,
};
use crate::collect::probe::{HttpProbe, UrlProbe};
use crate::collect::url_list::load_url_list;
use crate::commons::basic_functions::{clean_url, get_layer_name_from_url};
use crate::geometric::cog::{vrt_to_cog, CogOptions};
use crate::loader::{add_rasters_from_urls, GdalLayerFactory, LayerFactory};
use crate::project::Project;

#[derive(Debug, Parser)]
#[command(
    name = "rastercloud",
    version,
    about = "Register remote rasters through /vsicurl/ and convert VRT mosaics to COG"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Probe remote rasters and register the valid ones as project layers
    Load {
        /// URLs to load, in order
        urls: Vec<String>,
        /// Read more URLs from a file (one per line, or CSV with a `url` column)
        #[arg(long)]
        file: Option<PathBuf>,
        /// Append the built-in Northern Ireland LiDAR catalogue
        #[arg(long)]
        builtin: bool,
        /// Layer name prefix, producing `<prefix>_<name>`
        #[arg(long)]
        prefix: Option<String>,
        /// Load the first URL alone, without prefix, before the batch
        #[arg(long)]
        smoke_test: bool,
        /// HEAD request timeout in seconds
        #[arg(long, default_value_t = DEFAULT_PROBE_TIMEOUT.as_secs())]
        timeout: u64,
        /// Write the resulting project as JSON
        #[arg(long)]
        save_project: Option<PathBuf>,
    },
    /// Translate a VRT mosaic into a Cloud-Optimized GeoTIFF
    ToCog {
        vrt: PathBuf,
        cog: PathBuf,
        #[arg(long, default_value = DEFAULT_COG_COMPRESS)]
        compress: String,
        #[arg(long, default_value = DEFAULT_COG_NUM_THREADS)]
        num_threads: String,
        /// SRS assigned to the output
        #[arg(long, default_value = DEFAULT_COG_OUTPUT_SRS, conflicts_with = "keep_srs")]
        srs: String,
        /// Keep the input SRS instead of assigning one
        #[arg(long)]
        keep_srs: bool,
        /// Extra KEY=VALUE creation option, repeatable
        #[arg(long = "co")]
        creation_options: Vec<String>,
    },
    /// Print a URL with every `www.` removed
    CleanUrl { url: String },
    /// Print the layer name derived from a URL
    LayerName { url: String },
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        Cli::parse().command.run()
    }
}

impl CliCommand {
    pub fn run(self) -> Result<()> {
        match self {
            CliCommand::Load {
                urls,
                file,
                builtin,
                prefix,
                smoke_test,
                timeout,
                save_project,
            } => {
                let mut url_list = urls;
                if let Some(path) = file {
                    url_list.extend(load_url_list(&path)?);
                }
                if builtin {
                    url_list.extend(lidar_urls());
                }
                if url_list.is_empty() {
                    anyhow::bail!("No URLs given: pass URLs, --file or --builtin");
                }

                let probe = HttpProbe::with_timeout(Duration::from_secs(timeout))?;
                let mut project = Project::new();
                load_into_project(
                    &mut project,
                    &url_list,
                    prefix.as_deref(),
                    smoke_test,
                    &probe,
                    &GdalLayerFactory,
                )?;

                if let Some(path) = save_project {
                    project
                        .write_json(&path)
                        .with_context(|| format!("Failed to save project to {}", path.display()))?;
                    println!("Project saved to: {:?}", path);
                }
                Ok(())
            }
            CliCommand::ToCog {
                vrt,
                cog,
                compress,
                num_threads,
                srs,
                keep_srs,
                creation_options,
            } => {
                let options = CogOptions {
                    compress,
                    num_threads,
                    output_srs: if keep_srs { None } else { Some(srs) },
                    extra_creation_options: creation_options,
                };
                vrt_to_cog(&vrt, &cog, &options)
            }
            CliCommand::CleanUrl { url } => {
                println!("{}", clean_url(&url));
                Ok(())
            }
            CliCommand::LayerName { url } => {
                println!("{}", get_layer_name_from_url(&url));
                Ok(())
            }
        }
    }
}

/// Run the `load` batch against `project`.
/// With `smoke_test`, the first URL is loaded alone and without prefix first;
/// if it fails the batch is skipped. Per-URL failures are not errors.
pub fn load_into_project(
    project: &mut Project,
    url_list: &[String],
    prefix: Option<&str>,
    smoke_test: bool,
    probe: &dyn UrlProbe,
    factory: &dyn LayerFactory,
) -> Result<Vec<String>> {
    if smoke_test {
        if let Some(first) = url_list.first() {
            println!("Testing with single URL...");
            let added = add_rasters_from_urls(project, &[first.clone()], None, probe, factory);
            if added.is_empty() {
                anyhow::bail!("Smoke test failed for {}", first);
            }
        }
    }

    let added = add_rasters_from_urls(project, url_list, prefix, probe, factory);
    println!("Added {} of {} layer(s)", added.len(), url_list.len());
    Ok(added)
}
