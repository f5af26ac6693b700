pub mod cog;
pub mod raster_layer;
