use std::time::Duration;

/// GDAL virtual file system prefix for streaming reads over HTTP range requests.
pub const VSICURL_PREFIX: &str = "/vsicurl/";

/// Data provider key used when constructing raster layers.
pub const GDAL_PROVIDER: &str = "gdal";

/// Timeout applied to reachability probes.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(30);

/// Prefix used for the Northern Ireland LiDAR batch.
pub const LIDAR_LAYER_PREFIX: &str = "LIDAR";

/// Default COG creation options (Irish Grid output).
pub const DEFAULT_COG_COMPRESS: &str = "LZW";
pub const DEFAULT_COG_NUM_THREADS: &str = "ALL_CPUS";
pub const DEFAULT_COG_OUTPUT_SRS: &str = "EPSG:29902";

/// Host serving the Northern Ireland LiDAR GeoTIFFs.
pub const LIDAR_BASE_URL: &str = "https://www.better-open-data.com/lidar/";

/// File names published under [`LIDAR_BASE_URL`].
/// The catalogue lists `Slemish_DTM.tif` twice; both entries are kept.
pub const LIDAR_FILES: &[&str] = &[
    "Ardquin_DSM.tif",
    "Ardquin_DTM.tif",
    "Ardstraw_02_02_2012_DSM.tif",
    "Ardstraw_02_02_2012_DTM.tif",
    "Ardtole_DSM.tif",
    "Ardtole_DTM.tif",
    "Armagh-Dungannon-Coalisland_15_03_2010_DTM.tif",
    "Ballinamallard_05_03_2012_DSM.tif",
    "Ballinamallard_05_03_2012_DTM.tif",
    "Ballycastle_15_03_2010_DTM.tif",
    "Ballyclare_23_04_2009_DTM.tif",
    "Ballygalley_15_03_2010_DTM.tif",
    "Ballygowan_15_03_2010_DTM.tif",
    "Ballymena_23_04_2009_DSM.tif",
    "Ballymena_23_04_2009_DTM.tif",
    "Ballynahinch_15_03_2010_DTM.tif",
    "Ballynavally_04_04_2007_DTM.tif",
    "Banbridge_15_03_2010_DTM.tif",
    "Bangor_04_04_2007_DTM.tif",
    "Belleek_05_03_2012_DSM.tif",
    "Belleek_05_03_2012_DTM.tif",
    "Beragh_02_02_2012_DSM.tif",
    "Beragh_02_02_2012_DTM.tif",
    "Black_Pigs_Dyke_DSM.tif",
    "Black_Pigs_Dyke_DTM.tif",
    "Blackwater_16_06_2014_DSM.tif",
    "Blackwater_16_06_2014_DTM.tif",
    "Boneamargy_DSM.tif",
    "Boneamargy_DTM.tif",
    "Burren_03_03_2012_DSM.tif",
    "Burren_03_03_2012_DTM.tif",
    "Bushmills_15_03_2010_DTM.tif",
    "Cahery_DSM.tif",
    "Cahery_DTM.tif",
    "Camowen_16_06_2014_DSM.tif",
    "Camowen_16_06_2014_DTM.tif",
    "Carrickfergus_04_04_2007_DTM.tif",
    "Carryduff_15_03_2010_DTM.tif",
    "Castlederg_23_05_2004_DSM.tif",
    "Castlederg_23_05_2004_DTM.tif",
    "Castlereagh_04_04_2007_DTM.tif",
    "Cave_Hill_DSM.tif",
    "Cave_Hill_DTM.tif",
    "Charlemont_DSM.tif",
    "Charlemont_DTM.tif",
    "Clady_10_03_2009_DSM.tif",
    "Clady_10_03_2009_DTM.tif",
    "Clandeboye_DSM.tif",
    "Clandeboye_DTM.tif",
    "Clogher_DSM.tif",
    "Clogher_DTM.tif",
    "Cloghmills_16_06_2014_DSM.tif",
    "Cloghmills_16_06_2014_DTM.tif",
    "Cookstown_06_06_2013_DSM.tif",
    "Cookstown_06_06_2013_DTM.tif",
    "Cornashee_DSM.tif",
    "Cornashee_DTM.tif",
    "Crossmurrin_DSM.tif",
    "Crossmurrin_DTM.tif",
    "Cullybackey_15_03_2010_DTM.tif",
    "Cushendall_15_03_2010_DTM.tif",
    "Devenish_DSM.tif",
    "Devenish_DTM.tif",
    "Dohertys_Tower_DSM.tif",
    "Dohertys_Tower_DTM.tif",
    "Donegore_DSM.tif",
    "Donegore_DTM.tif",
    "Dougary_02_02_2012_DSM.tif",
    "Dougary_02_02_2012_DTM.tif",
    "Downpatrick_05_05_2009_DSM.tif",
    "Downpatrick_05_05_2009_DTM.tif",
    "Dundrum_DSM.tif",
    "Dundrum_DTM.tif",
    "Dunluce_DSM.tif",
    "Dunluce_DTM.tif",
    "Dunmull_DSM.tif",
    "Dunmull_DTM.tif",
    "Dunmurry_04_04_2007_DTM.tif",
    "Dunseverick_DSM.tif",
    "Dunseverick_DTM.tif",
    "East Belfast_29_05_2013_DSM.tif",
    "East Belfast_29_05_2013_DTM.tif",
    "Eglinton_11_12_2012_DSM.tif",
    "Eglinton_11_12_2012_DTM.tif",
    "Enniskillen_05_03_2012_DSM.tif",
    "Enniskillen_05_03_2012_DTM.tif",
    "Fintona_02_02_2012_DSM.tif",
    "Fintona_02_02_2012_DTM.tif",
    "Folk Park Newtownstewart_02_02_2012_DSM.tif",
    "Folk Park Newtownstewart_02_02_2012_DTM.tif",
    "Foyle_23_05_2004_DSM.tif",
    "Foyle_23_05_2004_DTM.tif",
    "Garron_DSM.tif",
    "Garron_DTM.tif",
    "Giants_Sconce_DSM.tif",
    "Giants_Sconce_DTM.tif",
    "Glenavy_02_02_2012_DSM.tif",
    "Glenavy_02_02_2012_DTM.tif",
    "Glynn_DSM.tif",
    "Glynn_DTM.tif",
    "Greyabbey_Ballywalter_DSM.tif",
    "Greyabbey_Ballywalter_DTM.tif",
    "Inch_Abbey_DSM.tif",
    "Inch_Abbey_DTM.tif",
    "Keady_02_02_2012_DSM.tif",
    "Keady_02_02_2012_DTM.tif",
    "Killyleagh__15_03_2010_DTM.tif",
    "Kiltierney_DSM.tif",
    "Kiltierney_DTM.tif",
    "Larne_15_03_2010_DTM.tif",
    "Limavady_23_05_2004_DSM.tif",
    "Limavady_23_05_2004_DTM.tif",
    "Linford_DSM.tif",
    "Linford_DTM.tif",
    "Lisbellaw_05_03_2012_DSM.tif",
    "Lisbellaw_05_03_2012_DTM.tif",
    "Lisburn_15_03_2010_DTM.tif",
    "Londonderry_30_04_2009_DTM.tif",
    "LowerBann_16_06_2014_DSM.tif",
    "LowerBann_16_06_2014_DTM.tif",
    "Lurgan_05_03_2012_DSM.tif",
    "Lurgan_05_03_2012_DTM.tif",
    "Lyles_Hill_DSM.tif",
    "Lyles_Hill_DTM.tif",
    "Maghera_20_04_2009_DSM.tif",
    "Maghera_20_04_2009_DTM.tif",
    "Magherafelt_15_03_2010_DTM.tif",
    "Magheramore_DSM.tif",
    "Magheramore_DTM.tif",
    "Maguiresbridge_05_03_2012_DSM.tif",
    "Maguiresbridge_05_03_2012_DTM.tif",
    "Mobuoy_DSM.tif",
    "Mobuoy_DTM.tif",
    "Moneymore_05_03_2012_DSM.tif",
    "Moneymore_05_03_2012_DTM.tif",
    "Mossley_05_03_2012_DSM.tif",
    "Mossley_05_03_2012_DTM.tif",
    "Mount_Stewart_DSM.tif",
    "Mount_Stewart_DTM.tif",
    "Navan_DSM.tif",
    "Navan_DTM.tif",
    "Newcastle_15_03_2010_DTM.tif",
    "Newry_15_03_2010_DTM.tif",
    "Newtownards_10_06_2008_DSM.tif",
    "Newtownards_10_06_2008_DTM.tif",
    "Newtownstewart_23_05_2004_DSM.tif",
    "Newtownstewart_23_05_2004_DTM.tif",
    "Omagh_23_05_2004_DSM.tif",
    "Omagh_23_05_2004_DTM.tif",
    "Omagh_Town_11_12_2012_DSM.tif",
    "Omagh_Town_11_12_2012_DTM.tif",
    "Portadown_27_04_2009_DSM.tif",
    "Portadown_27_04_2009_DTM.tif",
    "PortadownExtension_02_02_2012_DSM.tif",
    "PortadownExtension_02_02_2012_DTM.tif",
    "Raholp_DSM.tif",
    "Raholp_DTM.tif",
    "Randalstown_15_03_2010_DTM.tif",
    "Ringreagh_DSM.tif",
    "Ringreagh_DTM.tif",
    "Saintfield_02_02_2012_DSM.tif",
    "Saintfield_02_02_2012_DTM.tif",
    "Saul_DSM.tif",
    "Saul_DTM.tif",
    "Scrabo_DSM.tif",
    "Scrabo_DTM.tif",
    "SionMills_02_02_2012_DSM.tif",
    "SionMills_02_02_2012_DTM.tif",
    "Slemish_DSM.tif",
    "Slemish_DTM.tif",
    "Slemish_DTM.tif",
    "Stonyford_16_06_2014_DSM.tif",
    "Strabane_23_05_2004_DSM.tif",
    "Strabane_23_05_2004_DTM.tif",
    "Struell_DSM.tif",
    "Struell_DTM.tif",
    "Tandragee_15_03_2010_DTM.tif",
    "The_Dorsey_DSM.tif",
    "The_Dorsey_DTM.tif",
    "Tirgoland_DSM.tif",
    "Tirgoland_DTM.tif",
    "Tullaghoge_DSM.tif",
    "Tullaghoge_DTM.tif",
];

/// Full URLs of the LiDAR catalogue, in catalogue order and still carrying `www.`.
pub fn lidar_urls() -> Vec<String> {
    LIDAR_FILES
        .iter()
        .map(|file| format!("{}{}", LIDAR_BASE_URL, file))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lidar_urls_keep_catalogue_order_and_duplicates() {
        let urls = lidar_urls();
        assert_eq!(urls.len(), LIDAR_FILES.len());
        assert_eq!(
            urls[0],
            "https://www.better-open-data.com/lidar/Ardquin_DSM.tif"
        );
        let slemish = urls.iter().filter(|u| u.ends_with("/Slemish_DTM.tif")).count();
        assert_eq!(slemish, 2);
    }
}
