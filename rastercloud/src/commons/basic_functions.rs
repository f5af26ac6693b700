use crate::collect::global_variables::VSICURL_PREFIX;

/// Remove every `www.` occurrence from a URL.
/// The replacement is not limited to the host: `www.` inside the path goes too.
pub fn clean_url(url: &str) -> String {
    url.replace("www.", "")
}

/// Layer name from the last `/`-separated segment of a URL, without its extension.
pub fn get_layer_name_from_url(url: &str) -> String {
    let filename = url.rsplit('/').next().unwrap_or("");
    // Leading dots never start an extension: ".hidden" and ".." stay whole
    let leading = filename.len() - filename.trim_start_matches('.').len();
    match filename[leading..].rfind('.') {
        Some(pos) => filename[..leading + pos].to_string(),
        None => filename.to_string(),
    }
}

/// Streaming-read path understood by GDAL for a remote file.
pub fn vsicurl_path(url: &str) -> String {
    format!("{}{}", VSICURL_PREFIX, url)
}

/// `<prefix>_<name>` when a non-empty prefix is given, `name` otherwise.
pub fn prefixed_layer_name(name: &str, prefix: Option<&str>) -> String {
    match prefix {
        Some(p) if !p.is_empty() => format!("{}_{}", p, name),
        _ => name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_url_strips_every_occurrence() {
        assert_eq!(
            clean_url("https://www.example.com/www.foo.tif"),
            "https://example.com/foo.tif"
        );
        assert_eq!(
            clean_url("https://example.com/a.tif"),
            "https://example.com/a.tif"
        );
    }

    #[test]
    fn test_layer_name_from_url() {
        assert_eq!(
            get_layer_name_from_url("https://better-open-data.com/lidar/Ardquin_DSM.tif"),
            "Ardquin_DSM"
        );
        assert_eq!(
            get_layer_name_from_url("https://x.org/East Belfast_29_05_2013_DTM.tif"),
            "East Belfast_29_05_2013_DTM"
        );
        assert_eq!(get_layer_name_from_url("https://x.org/a.b.tif"), "a.b");
        assert_eq!(get_layer_name_from_url("https://x.org/noext"), "noext");
        assert_eq!(get_layer_name_from_url("https://x.org/.hidden"), ".hidden");
        assert_eq!(get_layer_name_from_url("https://x.org/dir/"), "");
    }

    #[test]
    fn test_layer_name_with_leading_dots() {
        assert_eq!(get_layer_name_from_url("https://x.org/."), ".");
        assert_eq!(get_layer_name_from_url("https://x.org/.."), "..");
        assert_eq!(get_layer_name_from_url("https://x.org/..."), "...");
        assert_eq!(get_layer_name_from_url("https://x.org/..tif"), "..tif");
        assert_eq!(get_layer_name_from_url("https://x.org/..a.tif"), "..a");
    }

    #[test]
    fn test_vsicurl_path() {
        assert_eq!(
            vsicurl_path("https://example.com/a.tif"),
            "/vsicurl/https://example.com/a.tif"
        );
    }

    #[test]
    fn test_prefixed_layer_name() {
        assert_eq!(prefixed_layer_name("Saul_DSM", Some("LIDAR")), "LIDAR_Saul_DSM");
        assert_eq!(prefixed_layer_name("Saul_DSM", Some("")), "Saul_DSM");
        assert_eq!(prefixed_layer_name("Saul_DSM", None), "Saul_DSM");
    }
}
