use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::geometric::raster_layer::RasterLayer;

/// Layer registered in a project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapLayer {
    /// Unique within the project, unlike the layer name
    pub id: String,
    pub layer: RasterLayer,
}

/// Ordered registry of map layers.
/// Names may repeat; every registered layer gets its own id.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Project {
    layers: Vec<MapLayer>,
    next_seq: u64,
    /// Read-only projects refuse layer additions and removals
    #[serde(default)]
    read_only: bool,
}

impl Project {
    pub fn new() -> Self {
        Project::default()
    }

    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Register a layer and return its id.
    /// Invalid layers and any layer offered to a read-only project are refused
    /// and `None` is returned.
    pub fn add_map_layer(&mut self, layer: RasterLayer) -> Option<String> {
        if self.read_only || !layer.is_valid() {
            return None;
        }
        let id = format!("{}_{}", layer.name(), self.next_seq);
        self.next_seq += 1;
        self.layers.push(MapLayer {
            id: id.clone(),
            layer,
        });
        Some(id)
    }

    pub fn map_layer(&self, id: &str) -> Option<&MapLayer> {
        self.layers.iter().find(|l| l.id == id)
    }

    /// All layers carrying `name`, in registration order
    pub fn map_layers_by_name(&self, name: &str) -> Vec<&MapLayer> {
        self.layers
            .iter()
            .filter(|l| l.layer.name() == name)
            .collect()
    }

    pub fn remove_map_layer(&mut self, id: &str) -> Option<MapLayer> {
        if self.read_only {
            return None;
        }
        let pos = self.layers.iter().position(|l| l.id == id)?;
        Some(self.layers.remove(pos))
    }

    pub fn layers(&self) -> &[MapLayer] {
        &self.layers
    }

    pub fn count(&self) -> usize {
        self.layers.len()
    }

    pub fn write_json(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .context(format!("Failed to create output directory: {:?}", parent))?;
            }
        }
        let json = serde_json::to_string_pretty(self).context("Failed to serialize project")?;
        std::fs::write(path, json).context(format!("Failed to write project: {:?}", path))?;
        Ok(())
    }

    pub fn read_json(path: &Path) -> Result<Self> {
        let text =
            std::fs::read_to_string(path).context(format!("Failed to read project: {:?}", path))?;
        serde_json::from_str(&text).context("Failed to parse project JSON")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invalid_layer(name: &str) -> RasterLayer {
        RasterLayer::new("/nonexistent/x.tif", name, "gdal")
    }

    fn valid_layer(dir: &Path, name: &str) -> RasterLayer {
        let path = dir.join(format!("{}.tif", name));
        let driver = gdal::DriverManager::get_driver_by_name("GTiff").unwrap();
        driver
            .create_with_band_type::<u8, _>(&path, 2, 2, 1)
            .unwrap();
        RasterLayer::new(path.to_str().unwrap(), name, "gdal")
    }

    #[test]
    fn test_invalid_layer_refused() {
        let mut project = Project::new();
        assert!(project.add_map_layer(invalid_layer("Saul_DSM")).is_none());
        assert_eq!(project.count(), 0);
    }

    #[test]
    fn test_duplicate_names_get_distinct_ids() {
        let dir = tempfile::tempdir().unwrap();
        let mut project = Project::new();
        let a = project.add_map_layer(valid_layer(dir.path(), "Slemish_DTM")).unwrap();
        let b = project.add_map_layer(valid_layer(dir.path(), "Slemish_DTM")).unwrap();
        assert_ne!(a, b);
        assert_eq!(project.map_layers_by_name("Slemish_DTM").len(), 2);

        assert!(project.remove_map_layer(&a).is_some());
        assert!(project.map_layer(&a).is_none());
        assert!(project.map_layer(&b).is_some());
    }

    #[test]
    fn test_read_only_project_refuses_changes() {
        let dir = tempfile::tempdir().unwrap();
        let mut project = Project::new();
        let id = project.add_map_layer(valid_layer(dir.path(), "Saul_DSM")).unwrap();

        project.set_read_only(true);
        assert!(project.add_map_layer(valid_layer(dir.path(), "Saul_DTM")).is_none());
        assert!(project.remove_map_layer(&id).is_none());
        assert_eq!(project.count(), 1);

        project.set_read_only(false);
        assert!(project.add_map_layer(valid_layer(dir.path(), "Saul_DTM")).is_some());
    }

    #[test]
    fn test_json_round_trip_keeps_order() {
        let dir = tempfile::tempdir().unwrap();
        let mut project = Project::new();
        project.add_map_layer(valid_layer(dir.path(), "Saul_DSM"));
        project.add_map_layer(valid_layer(dir.path(), "Saul_DTM"));

        let path = dir.path().join("out").join("project.json");
        project.write_json(&path).unwrap();
        let mut loaded = Project::read_json(&path).unwrap();

        let ids: Vec<&str> = loaded.layers().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["Saul_DSM_0", "Saul_DTM_1"]);

        // Sequence survives the round trip
        let next = loaded.add_map_layer(valid_layer(dir.path(), "Saul_DSM")).unwrap();
        assert_eq!(next, "Saul_DSM_2");
    }
}
