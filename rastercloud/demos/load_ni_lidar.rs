use anyhow::Result;
use rastercloud::collect::global_variables::{lidar_urls, LIDAR_LAYER_PREFIX};
use rastercloud::collect::probe::HttpProbe;
use rastercloud::commons::basic_functions::clean_url;
use rastercloud::loader::{add_rasters_from_urls, GdalLayerFactory};
use rastercloud::project::Project;

/// Example: register the Northern Ireland LiDAR catalogue as streamed layers
fn main() -> Result<()> {
    rastercloud::logging::init_logging();

    println!("=== Example: Loading NI LiDAR through /vsicurl/ ===\n");

    let probe = HttpProbe::new()?;
    let factory = GdalLayerFactory;
    let mut project = Project::new();

    // One URL first, without prefix
    println!("Testing with single URL...");
    let test_urls = vec!["https://better-open-data.com/lidar/Ardquin_DSM.tif".to_string()];
    let added = add_rasters_from_urls(&mut project, &test_urls, None, &probe, &factory);
    if added.is_empty() {
        println!("Test URL failed, skipping the full catalogue");
        return Ok(());
    }

    let raster_urls: Vec<String> = lidar_urls().iter().map(|u| clean_url(u)).collect();
    let added = add_rasters_from_urls(
        &mut project,
        &raster_urls,
        Some(LIDAR_LAYER_PREFIX),
        &probe,
        &factory,
    );

    println!("\n{} layer(s) in project", project.count());
    println!("  - added from catalogue: {}", added.len());

    Ok(())
}
