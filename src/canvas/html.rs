use std::path::PathBuf;

use anyhow::{Context, Result};

use super::{MapCanvas, MapDocument};

// ---------------------------------------------------------------------------
// Leaflet HTML canvas
// ---------------------------------------------------------------------------

/// Renders the map document as a single self-contained HTML file built
/// on Leaflet (plus the heat, fullscreen, measure and mouse-position
/// plugins, loaded from CDNs). Layer data is embedded as JSON.
#[derive(Debug, Clone)]
pub struct HtmlCanvas {
    output: PathBuf,
}

impl HtmlCanvas {
    pub fn new(output: impl Into<PathBuf>) -> Self {
        HtmlCanvas {
            output: output.into(),
        }
    }

    pub fn output(&self) -> &PathBuf {
        &self.output
    }
}

impl MapCanvas for HtmlCanvas {
    fn render(&mut self, doc: &MapDocument) -> Result<()> {
        let html = render_html(doc)?;
        std::fs::write(&self.output, html)
            .with_context(|| format!("writing {}", self.output.display()))?;
        log::info!(
            "wrote {} ({} point layers, {} heat samples)",
            self.output.display(),
            doc.point_layers.len(),
            doc.heat_samples.len()
        );
        Ok(())
    }
}

fn render_html(doc: &MapDocument) -> Result<String> {
    // leaflet.heat takes [lat, lon, weight] triples.
    let heat: Vec<[f64; 3]> = doc
        .heat_samples
        .iter()
        .map(|h| [h.lat, h.lon, h.weight])
        .collect();

    let html = TEMPLATE
        .replace(
            "__CENTER__",
            &serde_json::to_string(&[doc.center.lat, doc.center.lon])?,
        )
        .replace("__ZOOM__", &doc.zoom.to_string())
        .replace("__BASEMAPS__", &serde_json::to_string(&doc.basemaps)?)
        .replace(
            "__POINT_LAYERS__",
            &serde_json::to_string(&doc.point_layers)?,
        )
        .replace("__HEAT_DATA__", &serde_json::to_string(&heat)?);

    Ok(html)
}

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8"/>
<meta name="viewport" content="width=device-width, initial-scale=1.0"/>
<title>Range Test Map</title>
<link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css"/>
<link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/leaflet.fullscreen/3.0.0/Control.FullScreen.min.css"/>
<link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/leaflet-measure@2.1.7/dist/leaflet-measure.min.css"/>
<link rel="stylesheet" href="https://cdn.jsdelivr.net/gh/ardhi/Leaflet.MousePosition/src/L.Control.MousePosition.min.css"/>
<script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
<script src="https://unpkg.com/leaflet.heat@0.2.0/dist/leaflet-heat.js"></script>
<script src="https://cdnjs.cloudflare.com/ajax/libs/leaflet.fullscreen/3.0.0/Control.FullScreen.min.js"></script>
<script src="https://cdn.jsdelivr.net/npm/leaflet-measure@2.1.7/dist/leaflet-measure.min.js"></script>
<script src="https://cdn.jsdelivr.net/gh/ardhi/Leaflet.MousePosition/src/L.Control.MousePosition.min.js"></script>
<style>html, body, #map { height: 100%; margin: 0; }</style>
</head>
<body>
<div id="map"></div>
<script>
var basemaps = __BASEMAPS__;
var pointLayers = __POINT_LAYERS__;
var heatData = __HEAT_DATA__;

var map = L.map("map", {
  center: __CENTER__,
  zoom: __ZOOM__,
  fullscreenControl: true
});
L.control.scale().addTo(map);

var baseLayers = {};
basemaps.forEach(function (b, i) {
  var tiles = L.tileLayer(b.url, { attribution: b.attribution });
  baseLayers[b.name] = tiles;
  if (i === 0) { tiles.addTo(map); }
});

var overlays = {};
pointLayers.forEach(function (layer) {
  var group = L.featureGroup();
  layer.markers.forEach(function (m) {
    L.circleMarker([m.lat, m.lon], {
      radius: 7,
      color: m.color,
      fill: true,
      fillColor: m.color,
      fillOpacity: 0.7
    }).bindPopup(m.popup).addTo(group);
  });
  overlays[layer.name] = group;
  if (layer.show) { group.addTo(map); }
});

// Hidden by default; toggled on from the layer control.
overlays["Measurement Heatmap"] = L.heatLayer(heatData);

L.control.layers(baseLayers, overlays, { collapsed: true }).addTo(map);

new L.Control.MousePosition({
  position: "bottomright",
  separator: " | "
}).addTo(map);

new L.Control.Measure({
  activeColor: "blue",
  completedColor: "blue",
  primaryLengthUnit: "miles",
  secondaryLengthUnit: "meters"
}).addTo(map);
</script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use crate::canvas::{basemap_catalog, Center};
    use crate::data::model::{ColoredMarker, HeatSample, PointLayer};

    use super::*;

    fn document() -> MapDocument {
        MapDocument {
            center: Center {
                lat: 45.5,
                lon: -122.6,
            },
            zoom: 13,
            basemaps: basemap_catalog(),
            point_layers: vec![PointLayer {
                name: "log1.csv".into(),
                markers: vec![ColoredMarker {
                    lat: 45.5,
                    lon: -122.6,
                    color: "#ffaa00".into(),
                    popup: "log1.csv<br>SNR: -10.0".into(),
                }],
                show: true,
            }],
            heat_samples: vec![HeatSample {
                lat: 45.5,
                lon: -122.6,
                weight: -10.0,
            }],
        }
    }

    #[test]
    fn rendered_page_embeds_the_layer_data() {
        let html = render_html(&document()).expect("render");
        assert!(html.contains("log1.csv"));
        assert!(html.contains("#ffaa00"));
        assert!(html.contains("Measurement Heatmap"));
        assert!(html.contains("[45.5,-122.6,-10.0]"));
        assert!(html.contains("OpenStreetMap"));
        assert!(!html.contains("__BASEMAPS__"));
    }

    #[test]
    fn writes_the_artifact_to_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("map.html");
        let mut canvas = HtmlCanvas::new(&path);
        canvas.render(&document()).expect("render");
        let html = std::fs::read_to_string(&path).expect("read back");
        assert!(html.contains("Range Test Map"));
    }
}
