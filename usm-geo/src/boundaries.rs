use anyhow::{anyhow, Context, Result};
use geojson::{FeatureCollection, GeoJson};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Feature property carrying the state name in the standard us-states
/// boundary file.
pub const DEFAULT_NAME_PROPERTY: &str = "NAME";

/// US state polygons. Loaded once, shared read-only by every map render;
/// the choropleth joins onto the name property of each feature.
#[derive(Debug, Clone)]
pub struct StateBoundaries {
    collection: FeatureCollection,
    name_property: String,
    names: Vec<String>,
}

impl StateBoundaries {
    /// Load a FeatureCollection from disk, indexing the given name property.
    pub fn load(path: &Path, name_property: &str) -> Result<Self> {
        let file =
            File::open(path).with_context(|| format!("failed to open boundary file: {:?}", path))?;
        let geojson = GeoJson::from_reader(BufReader::new(file))
            .with_context(|| format!("failed to parse boundary file: {:?}", path))?;
        Self::from_geojson(geojson, name_property)
    }

    /// As [`StateBoundaries::load`], with the standard `NAME` property.
    pub fn load_default(path: &Path) -> Result<Self> {
        Self::load(path, DEFAULT_NAME_PROPERTY)
    }

    /// Build from an in-memory GeoJSON document.
    pub fn from_json_str(body: &str, name_property: &str) -> Result<Self> {
        let geojson: GeoJson = body.parse().context("failed to parse boundary GeoJSON")?;
        Self::from_geojson(geojson, name_property)
    }

    fn from_geojson(geojson: GeoJson, name_property: &str) -> Result<Self> {
        let collection = match geojson {
            GeoJson::FeatureCollection(collection) => collection,
            _ => return Err(anyhow!("boundary file must be a GeoJSON FeatureCollection")),
        };
        let names: Vec<String> = collection
            .features
            .iter()
            .filter_map(|feature| {
                let value = feature.properties.as_ref()?.get(name_property)?;
                match value {
                    serde_json::Value::String(name) => Some(name.clone()),
                    serde_json::Value::Number(number) => Some(number.to_string()),
                    _ => None,
                }
            })
            .collect();
        if names.is_empty() {
            return Err(anyhow!(
                "no boundary feature carries a '{}' property",
                name_property
            ));
        }
        log::info!("loaded {} state boundary polygons", names.len());
        Ok(Self {
            collection,
            name_property: name_property.to_string(),
            names,
        })
    }

    /// Names found on the boundary features, in file order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// True when a polygon exists for the given state name.
    pub fn contains(&self, state: &str) -> bool {
        self.names.iter().any(|name| name == state)
    }

    /// Property the choropleth keys on.
    pub fn name_property(&self) -> &str {
        &self.name_property
    }

    /// The collection as a JSON value, for embedding in the exported page.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        serde_json::to_value(&self.collection).context("failed to serialize boundary collection")
    }
}
