/// The default endpoint for the DC GIS barbershop layer.
pub const DEFAULT_QUERY_URL: &str =
    "https://maps2.dcgis.dc.gov/dcgis/rest/services/DCGIS_DATA/Business_Goods_and_Service_WebMercator/MapServer/36/query";

/// Fixed query parameters: select-all filter, all-fields projection, WGS84
/// spatial reference, JSON response format.
pub const QUERY_PARAMS: [(&str, &str); 4] = [
    ("where", "1=1"),
    ("outFields", "*"),
    ("outSR", "4326"),
    ("f", "json"),
];

/// Default location of the cached feature snapshot, relative to the working
/// directory.
pub const DEFAULT_CACHE_PATH: &str = "data/bbs_data.json";

/// Attribute keys recognized on a feature.
pub const ATTR_NAME: &str = "BARBERSHOP";
pub const ATTR_ADDRESS: &str = "ADDRESS";
pub const ATTR_PHONE: &str = "PHONE";
pub const ATTR_WARD: &str = "WARD";
pub const ATTR_ZIPCODE: &str = "ZIPCODE";
pub const ATTR_LATITUDE: &str = "LATITUDE";
pub const ATTR_LONGITUDE: &str = "LONGITUDE";
pub const ATTR_GIS_ID: &str = "GIS_ID";
pub const ATTR_OBJECT_ID: &str = "OBJECTID";

/// Prefix for identifiers generated for user-submitted shops.
pub const USER_ADDED_ID_PREFIX: &str = "UserAddedShop_";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_params_request_wgs84_json() {
        assert!(QUERY_PARAMS.contains(&("outSR", "4326")));
        assert!(QUERY_PARAMS.contains(&("f", "json")));
    }
}
