//! Map canvas boundary: the pipeline composes a [`MapDocument`] and
//! hands it to whatever [`MapCanvas`] it was given. The shipped
//! implementation is the Leaflet HTML writer in [`html`]; tests plug in
//! a recording double instead.

use anyhow::Result;
use serde::Serialize;

use crate::data::model::{HeatSample, PointLayer};

pub mod html;

pub use html::HtmlCanvas;

// ---------------------------------------------------------------------------
// Document types
// ---------------------------------------------------------------------------

/// Initial view center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Center {
    pub lat: f64,
    pub lon: f64,
}

/// One selectable basemap: tile URL template plus attribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Basemap {
    pub name: &'static str,
    pub url: &'static str,
    pub attribution: &'static str,
}

/// Everything the canvas needs to produce the artifact. Layer names are
/// unique per run and every layer is independently toggleable.
#[derive(Debug, Clone, PartialEq)]
pub struct MapDocument {
    pub center: Center,
    pub zoom: u8,
    pub basemaps: Vec<Basemap>,
    pub point_layers: Vec<PointLayer>,
    pub heat_samples: Vec<HeatSample>,
}

/// Rendering sink for the assembled map. Failures are surfaced to the
/// caller verbatim as `MapCanvasFailure`.
pub trait MapCanvas {
    fn render(&mut self, doc: &MapDocument) -> Result<()>;
}

// ---------------------------------------------------------------------------
// Basemap catalog
// ---------------------------------------------------------------------------

/// The selectable basemaps, first entry is the default.
pub fn basemap_catalog() -> Vec<Basemap> {
    vec![
        Basemap {
            name: "OpenStreetMap",
            url: "https://tile.openstreetmap.org/{z}/{x}/{y}.png",
            attribution: "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors",
        },
        Basemap {
            name: "Esri WorldImagery",
            url: "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}",
            attribution: "Tiles &copy; Esri &mdash; Source: Esri, i-cubed, USDA, USGS, AEX, GeoEye, Getmapping, Aerogrid, IGN, IGP, UPR-EGP, and the GIS User Community",
        },
        Basemap {
            name: "OpenTopoMap",
            url: "https://{s}.tile.opentopomap.org/{z}/{x}/{y}.png",
            attribution: "Map data: &copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors, <a href=\"http://viewfinderpanoramas.org\">SRTM</a> | Map style: &copy; <a href=\"https://opentopomap.org\">OpenTopoMap</a> (<a href=\"https://creativecommons.org/licenses/by-sa/3.0/\">CC-BY-SA</a>)",
        },
        Basemap {
            name: "CartoDB Positron",
            url: "https://{s}.basemaps.cartocdn.com/light_all/{z}/{x}/{y}{r}.png",
            attribution: "Map tiles by CartoDB, under CC BY 3.0. Data by OpenStreetMap, under ODbL.",
        },
        Basemap {
            name: "CartoDB Positron (No Labels)",
            url: "https://{s}.basemaps.cartocdn.com/rastertiles/light_nolabels/{z}/{x}/{y}{r}.png",
            attribution: "Map tiles by CartoDB, under CC BY 3.0. Data by OpenStreetMap, under ODbL.",
        },
        Basemap {
            name: "CartoDB Dark Matter (No Labels)",
            url: "https://{s}.basemaps.cartocdn.com/rastertiles/dark_nolabels/{z}/{x}/{y}{r}.png",
            attribution: "Map tiles by CartoDB, under CC BY 3.0. Data by OpenStreetMap, under ODbL.",
        },
        Basemap {
            name: "CartoDB Dark Matter",
            url: "https://{s}.basemaps.cartocdn.com/dark_all/{z}/{x}/{y}{r}.png",
            attribution: "Map tiles by CartoDB, under CC BY 3.0. Data by OpenStreetMap, under ODbL.",
        },
    ]
}
