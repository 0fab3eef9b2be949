use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One scene component: a `type` name plus its flat parameter object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentDescription {
    #[serde(rename = "type", default)]
    pub type_name: String,
    #[serde(flatten)]
    pub params: Map<String, Value>,
}

impl ComponentDescription {
    pub fn new(type_name: &str) -> Self {
        ComponentDescription {
            type_name: String::from(type_name),
            params: Map::new(),
        }
    }
}

/// Top level of a JSON scene file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    pub sensor: ComponentDescription,
    pub film: ComponentDescription,
    pub filter: ComponentDescription,
    pub sampler: ComponentDescription,
    pub integrator: ComponentDescription,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intersector: Option<ComponentDescription>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub shapes: Vec<ComponentDescription>,
}

/// Command line values that take precedence over the scene file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneOverrides {
    pub film_filename: Option<String>,
    pub integrator: Option<String>,
    pub intersector: Option<String>,
    pub samples_per_pixel: Option<u32>,
}

pub const DEFAULT_SCENE: &str = r#"{
    "sensor": {
        "type": "perspective",
        "fov": 30.0,
        "origin": [0.0, 1.0, -8.0],
        "target": [0.0, 0.5, 0.0],
        "up": [0.0, 1.0, 0.0],
        "near_clip": 0.1,
        "far_clip": 500.0
    },
    "film": { "width": 320, "height": 240, "filename": "out.png" },
    "filter": { "type": "gaussian", "radius": 1.5, "standard_deviation": 0.5 },
    "sampler": { "type": "independent", "sample_count": 16, "seed": 0 },
    "integrator": { "type": "aov" },
    "intersector": { "type": "brute_force" },
    "shapes": [
        { "type": "sphere", "center": [0.0, -100.0, 0.0], "radius": 100.0, "albedo": [0.6, 0.6, 0.6] },
        { "type": "sphere", "center": [-1.2, 1.0, 0.0], "radius": 1.0, "albedo": [0.8, 0.2, 0.2] },
        { "type": "sphere", "center": [1.2, 1.0, 0.5], "radius": 1.0, "albedo": [0.2, 0.3, 0.8] }
    ]
}"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_001() {
        let desc: SceneDescription = serde_json::from_str(DEFAULT_SCENE).unwrap();
        assert_eq!(desc.sensor.type_name, "perspective");
        assert_eq!(desc.film.type_name, "");
        assert_eq!(desc.film.params.get("width"), Some(&Value::from(320)));
        assert_eq!(desc.shapes.len(), 3);
        assert!(!desc.sensor.params.contains_key("type"));
    }

    #[test]
    fn test_002() {
        let json = r#"{ "sensor": {"type": "perspective"}, "film": {}, "filter": {"type": "box"} }"#;
        assert!(serde_json::from_str::<SceneDescription>(json).is_err());
    }
}
