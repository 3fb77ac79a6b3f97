//! Leaflet HTML rendering.

use std::fmt::Write;

use super::view::MapView;
use crate::config::{MAP_ATTRIBUTION, OSM_TILE_URL, TILES_STANDARD};

/// JSON-encodes `s` for embedding in a `<script>` block.
fn js_string(s: &str) -> String {
    serde_json::to_string(s)
        .unwrap_or_else(|_| "\"\"".into())
        .replace("</", "<\\/")
}

pub(crate) fn render(view: &MapView) -> String {
    let tile_url = if view.tiles == TILES_STANDARD {
        OSM_TILE_URL
    } else {
        view.tiles
    };

    let mut script = String::new();
    let _ = writeln!(
        script,
        "var map = L.map('map').setView([{}, {}], {});",
        view.center.lat, view.center.lng, view.zoom
    );
    let _ = writeln!(
        script,
        "L.tileLayer({}, {{attribution: {}, maxZoom: 19}}).addTo(map);",
        js_string(tile_url),
        js_string(MAP_ATTRIBUTION)
    );

    for marker in &view.markers {
        let _ = writeln!(
            script,
            "L.circleMarker([{}, {}], {{radius: 9, color: {}, fillOpacity: 0.9}}).bindPopup({}).addTo(map);",
            marker.position.lat,
            marker.position.lng,
            js_string(marker.color.as_css()),
            js_string(&marker.popup)
        );
    }

    if let Some(area) = &view.area {
        let _ = writeln!(
            script,
            "L.rectangle([[{}, {}], [{}, {}]], {{color: 'blue', fill: true, fillOpacity: 0.2}}).bindPopup('Confidence Area').addTo(map);",
            area.southwest.lat, area.southwest.lng, area.northeast.lat, area.northeast.lng
        );
    }

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8" />
<title>Phone Number Location</title>
<link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css" />
<script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
<style>html, body, #map {{ height: 100%; margin: 0; }}</style>
</head>
<body>
<div id="map"></div>
<script>
{script}</script>
</body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geocode::{Bounds, LatLng};
    use crate::map::{Marker, MarkerColor};

    fn view(tiles: &'static str) -> MapView {
        MapView {
            center: LatLng {
                lat: 37.77,
                lng: -122.42,
            },
            zoom: 9,
            tiles,
            markers: vec![Marker {
                position: LatLng {
                    lat: 37.77,
                    lng: -122.42,
                },
                popup: "San Francisco</script><b>".into(),
                color: MarkerColor::Blue,
            }],
            area: Some(Bounds {
                northeast: LatLng { lat: 38.0, lng: -122.0 },
                southwest: LatLng { lat: 37.5, lng: -123.0 },
            }),
        }
    }

    #[test]
    fn test_standard_tiles_use_osm_url() {
        let html = render(&view(TILES_STANDARD));
        assert!(html.contains("tile.openstreetmap.org"));
        assert!(html.contains("setView([37.77, -122.42], 9)"));
    }

    #[test]
    fn test_custom_tiles_used_verbatim() {
        let html = render(&view(crate::config::TILES_TERRAIN));
        assert!(html.contains("World_Topo_Map"));
    }

    #[test]
    fn test_popup_cannot_close_script() {
        let html = render(&view(TILES_STANDARD));
        assert!(!html.contains("San Francisco</script>"));
        assert!(html.contains("San Francisco<\\/script>"));
    }

    #[test]
    fn test_confidence_area_rendered() {
        let html = render(&view(TILES_STANDARD));
        assert!(html.contains("L.rectangle([[37.5, -123], [38, -122]]"));
        assert!(html.contains("Confidence Area"));
    }
}
