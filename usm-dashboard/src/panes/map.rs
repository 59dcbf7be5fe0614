//! Map pane: clustered state markers plus the choropleth layer.

use crate::panes::format_value;
use crate::scale::{ColorScale, YLORRD};
use serde::Serialize;
use usm_data::filter::{metric_values, select_year};
use usm_nchs::category::MortalityCategory;
use usm_nchs::dataset::MortalityDataset;
use usm_nchs::metric::Metric;

/// Map center: the continental USA.
pub const USA_CENTER: [f64; 2] = [37.0902, -95.7129];
/// Initial zoom level.
pub const USA_ZOOM: u8 = 3;

/// Positron tile overlay, shown in the layer control as "Regions Map".
pub const REGIONS_TILE_URL: &str =
    "https://{s}.basemaps.cartocdn.com/light_all/{z}/{x}/{y}{r}.png";
pub const REGIONS_TILE_NAME: &str = "Regions Map";
/// Satellite imagery overlay. Always on; kept out of the layer control.
pub const SATELLITE_TILE_URL: &str = "https://{s}.google.com/vt/lyrs=s&x={x}&y={y}&z={z}";
pub const SATELLITE_SUBDOMAINS: [&str; 4] = ["mt0", "mt1", "mt2", "mt3"];
pub const SATELLITE_ATTRIBUTION: &str = "Google";

/// The fixed tile layers the page map stacks over the base layer.
/// Selection-independent, so the exporter serializes this once.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileLayers {
    pub regions_url: String,
    pub regions_name: String,
    pub satellite_url: String,
    pub satellite_subdomains: Vec<String>,
    pub satellite_attribution: String,
}

impl Default for TileLayers {
    fn default() -> Self {
        Self {
            regions_url: REGIONS_TILE_URL.to_string(),
            regions_name: REGIONS_TILE_NAME.to_string(),
            satellite_url: SATELLITE_TILE_URL.to_string(),
            satellite_subdomains: SATELLITE_SUBDOMAINS
                .iter()
                .map(|subdomain| subdomain.to_string())
                .collect(),
            satellite_attribution: SATELLITE_ATTRIBUTION.to_string(),
        }
    }
}

/// One clustered marker with its popup text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub lat: f64,
    pub lon: f64,
    pub popup: String,
}

/// Choropleth fill for one state polygon.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateFill {
    pub state: String,
    pub value: f64,
    pub color: String,
}

/// The choropleth layer: per-state fills plus what the legend needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Choropleth {
    pub fills: Vec<StateFill>,
    pub bin_edges: Vec<f64>,
    pub palette: Vec<String>,
    pub legend: String,
    pub fill_opacity: f64,
    pub line_opacity: f64,
}

/// The complete map artifact for one (year, category, metric).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub center: [f64; 2],
    pub zoom: u8,
    pub markers: Vec<Marker>,
    pub choropleth: Choropleth,
}

/// Build the map: one clustered marker per state at its table coordinates
/// and one fill per state keyed on the boundary file's name property. States
/// filtered out by the year selection simply have no marker and no fill.
pub fn build_map(
    dataset: &MortalityDataset,
    year: i32,
    category: MortalityCategory,
    metric: Metric,
) -> MapView {
    let rows = select_year(dataset.records(category), year);
    let values = metric_values(&rows, metric);
    let scale = ColorScale::from_values(&values.iter().map(|v| v.value).collect::<Vec<f64>>());

    let markers = values
        .iter()
        .map(|row| Marker {
            lat: row.lat,
            lon: row.lon,
            popup: format!(
                "State Name: {}\n{}: {}",
                row.state,
                metric.label(),
                format_value(row.value)
            ),
        })
        .collect();

    let fills = values
        .iter()
        .map(|row| StateFill {
            state: row.state.clone(),
            value: row.value,
            color: scale.color_for(row.value).to_string(),
        })
        .collect();

    MapView {
        center: USA_CENTER,
        zoom: USA_ZOOM,
        markers,
        choropleth: Choropleth {
            fills,
            bin_edges: scale.bin_edges(),
            palette: YLORRD.iter().map(|color| color.to_string()).collect(),
            legend: format!("{} ({})", category.label(), metric.label()),
            fill_opacity: 0.7,
            line_opacity: 0.2,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use usm_nchs::dataset::MortalityTable;
    use usm_nchs::record::parse_mortality_csv;

    const FIREARM_CSV: &str = "YEAR,STATE,RATE,DEATHS COUNT,LAT,LON
2018,Texas,12.4,3522,31.0,-100.0
2018,Ohio,13.9,1578,40.0,-82.0
2018,Vermont,11.5,,44.0,-72.6
2017,Texas,12.1,3413,31.0,-100.0
";

    fn dataset() -> MortalityDataset {
        let records = parse_mortality_csv(FIREARM_CSV).unwrap();
        MortalityDataset::from_tables(
            MortalityTable::new(MortalityCategory::Firearm, records),
            MortalityTable::new(MortalityCategory::Homicide, Vec::new()),
            MortalityTable::new(MortalityCategory::DrugOverdose, Vec::new()),
        )
    }

    #[test]
    fn test_markers_skip_incomplete_rows() {
        let map = build_map(&dataset(), 2018, MortalityCategory::Firearm, Metric::Rate);
        assert_eq!(map.markers.len(), 2);
        assert_eq!(map.markers[0].lat, 31.0);
        assert_eq!(map.markers[0].lon, -100.0);
    }

    #[test]
    fn test_popup_text_shape() {
        let map = build_map(&dataset(), 2018, MortalityCategory::Firearm, Metric::Rate);
        assert_eq!(map.markers[0].popup, "State Name: Texas\nMortality Rate: 12.4");
        let counts = build_map(
            &dataset(),
            2018,
            MortalityCategory::Firearm,
            Metric::DeathsCount,
        );
        assert_eq!(counts.markers[0].popup, "State Name: Texas\nDeaths Count: 3522");
    }

    #[test]
    fn test_fills_span_the_palette() {
        let map = build_map(&dataset(), 2018, MortalityCategory::Firearm, Metric::Rate);
        let texas = map
            .choropleth
            .fills
            .iter()
            .find(|fill| fill.state == "Texas")
            .unwrap();
        let ohio = map
            .choropleth
            .fills
            .iter()
            .find(|fill| fill.state == "Ohio")
            .unwrap();
        assert_eq!(texas.color, YLORRD[0]);
        assert_eq!(ohio.color, YLORRD[5]);
    }

    #[test]
    fn test_legend_names_category_and_metric() {
        let map = build_map(
            &dataset(),
            2018,
            MortalityCategory::Firearm,
            Metric::DeathsCount,
        );
        assert_eq!(map.choropleth.legend, "Firearm Mortality (Deaths Count)");
        assert_eq!(map.choropleth.bin_edges.len(), 7);
        assert_eq!(map.choropleth.palette.len(), 6);
    }

    #[test]
    fn test_frame_constants() {
        let map = build_map(&dataset(), 2018, MortalityCategory::Firearm, Metric::Rate);
        assert_eq!(map.center, USA_CENTER);
        assert_eq!(map.zoom, USA_ZOOM);
        assert_eq!(map.choropleth.fill_opacity, 0.7);
        assert_eq!(map.choropleth.line_opacity, 0.2);
    }

    #[test]
    fn test_empty_year_yields_empty_layers() {
        let map = build_map(&dataset(), 2020, MortalityCategory::Firearm, Metric::Rate);
        assert!(map.markers.is_empty());
        assert!(map.choropleth.fills.is_empty());
    }

    #[test]
    fn test_tile_layers_default_carries_the_fixed_stack() {
        let tiles = TileLayers::default();
        assert_eq!(tiles.regions_name, "Regions Map");
        assert_eq!(tiles.satellite_subdomains, ["mt0", "mt1", "mt2", "mt3"]);
        assert!(tiles.satellite_url.contains("lyrs=s"));
        assert_eq!(tiles.satellite_attribution, "Google");
    }
}
