use super::scene::*;
use super::scene_description::*;
use crate::core::error::*;
use crate::core::film::*;
use crate::core::param_set::*;
use crate::filters::*;
use crate::integrators::*;
use crate::intersectors::*;
use crate::samplers::*;
use crate::sensors::*;

use log::*;
use std::path::Path;

fn params_of(desc: &ComponentDescription) -> Result<ParamSet, OkapiError> {
    return ParamSet::try_from(&desc.params);
}

fn resolve_relative(filename: &str, base_dir: Option<&Path>) -> String {
    let path = Path::new(filename);
    match base_dir {
        Some(dir) if path.is_relative() && !dir.as_os_str().is_empty() => {
            dir.join(path).to_string_lossy().into_owned()
        }
        _ => String::from(filename),
    }
}

/// Builds a scene from its description. Relative output names are
/// resolved against `base_dir` unless overridden.
pub fn create_scene(
    desc: &SceneDescription,
    overrides: &SceneOverrides,
    base_dir: Option<&Path>,
) -> Result<Scene, OkapiError> {
    let filter_params = params_of(&desc.filter)?;
    let filter = create_filter(&desc.filter.type_name, &filter_params)?;

    let mut film_params = params_of(&desc.film)?;
    match overrides.film_filename.as_ref() {
        Some(filename) => film_params.replace_one_string("filename", filename),
        None => {
            let filename = film_params.find_one_string("filename", "out.png");
            film_params.replace_one_string("filename", &resolve_relative(&filename, base_dir));
        }
    }
    let film = create_film(&film_params, &filter)?;

    let sensor_params = params_of(&desc.sensor)?;
    let sensor = create_sensor(&desc.sensor.type_name, &sensor_params, &film)?;

    let mut sampler_params = params_of(&desc.sampler)?;
    if let Some(spp) = overrides.samples_per_pixel {
        sampler_params.replace_one_int("sample_count", spp as i32);
    }
    let sampler = create_sampler(&desc.sampler.type_name, &sampler_params)?;

    let integrator_params = params_of(&desc.integrator)?;
    let integrator_name = overrides
        .integrator
        .clone()
        .unwrap_or_else(|| desc.integrator.type_name.clone());
    let integrator = create_integrator(&integrator_name, &integrator_params)?;

    let mut spheres = Vec::with_capacity(desc.shapes.len());
    for shape in desc.shapes.iter() {
        spheres.push(create_shape(&shape.type_name, &params_of(shape)?)?);
    }
    let intersector_desc = desc
        .intersector
        .clone()
        .unwrap_or_else(|| ComponentDescription::new("brute_force"));
    let intersector_name = overrides
        .intersector
        .clone()
        .unwrap_or_else(|| intersector_desc.type_name.clone());
    let intersector = create_intersector(
        &intersector_name,
        &spheres,
        &params_of(&intersector_desc)?,
    )?;

    info!("Sensor: {}", sensor);
    info!("Sampler: {}", sampler);
    info!("Integrator: {}", integrator);
    info!("Intersector: {}", intersector);
    return Ok(Scene::new(&sensor, &integrator, sampler, &intersector));
}

pub fn load_scene_from_str(json: &str, overrides: &SceneOverrides) -> Result<Scene, OkapiError> {
    let desc: SceneDescription = serde_json::from_str(json)?;
    return create_scene(&desc, overrides, None);
}

pub fn load_scene(path: &Path, overrides: &SceneOverrides) -> Result<Scene, OkapiError> {
    info!("Loading scene {}", path.display());
    let json = std::fs::read_to_string(path)?;
    let desc: SceneDescription = serde_json::from_str(&json)?;
    return create_scene(&desc, overrides, path.parent());
}

pub fn load_default_scene(overrides: &SceneOverrides) -> Result<Scene, OkapiError> {
    warn!("No scene file given, using the built-in scene.");
    return load_scene_from_str(DEFAULT_SCENE, overrides);
}
