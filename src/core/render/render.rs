use super::render_description::*;
use crate::core::base::*;
use crate::core::error::*;
use crate::core::film::*;
use crate::core::misc::*;
use crate::core::sampler::*;
use crate::core::scene::*;
use crate::core::spectrum::*;

use log::*;
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

pub fn validate_radiance_result(l: &Spectrum, p: &Point2f) -> Spectrum {
    if !l.is_valid() {
        error!(
            "Not-a-number radiance value returned for sample ({}, {}). Setting to black.",
            p.x, p.y
        );
        return Spectrum::zero();
    }
    if l.y() < -1e-5 {
        error!(
            "Negative luminance value, {}, returned for sample ({}, {}). Setting to black.",
            l.y(),
            p.x,
            p.y
        );
        return Spectrum::zero();
    }
    if l.y().is_infinite() {
        error!(
            "Infinite luminance value returned for sample ({}, {}). Setting to black.",
            p.x, p.y
        );
        return Spectrum::zero();
    }
    return *l;
}

/// Channels produced per sample by the scene's integrator.
pub fn channel_count(scene: &Scene) -> usize {
    let aov_names = scene.integrator().aov_names();
    if aov_names.is_empty() {
        RGB_CHANNEL_COUNT
    } else {
        aov_names.len()
    }
}

/// Reallocates the film when its channel layout does not match the
/// integrator. Returns the channel count to render with.
fn prepare_film(scene: &Scene) -> Result<usize, OkapiError> {
    let channel_count = channel_count(scene);
    info!("channel count: {}", channel_count);
    let film = scene.film();
    let mut film = film.write()?;
    if film.channel_count() != channel_count {
        info!("Allocate AOVs");
        film.allocate_image_tensor_memory(channel_count);
    }
    film.set_channel_names(&scene.integrator().aov_names());
    return Ok(channel_count);
}

fn log_render_setup(scene: &Scene, film: &Film) {
    info!("integrator: {}", scene.integrator());
    info!("intersector: {}", scene.intersector());
    info!("spp: {}", scene.sampler().sample_count());
    info!("sampler: {}", scene.sampler());
    info!("filter: {}", film.filter());
}

/// Draws `spp` samples for every pixel of the `size` block at `offset` and
/// splats them into `target`. Returns false once `abort` is observed.
fn render_block(
    scene: &Scene,
    target: &mut FilmTile,
    offset: &Point2i,
    size: &Vector2i,
    sampler: &mut dyn Sampler,
    spp: u32,
    abort: &AtomicBool,
) -> bool {
    let sensor = scene.sensor();
    let integrator = scene.integrator();
    let channel_count = target.channel_count();
    let mut values = vec![0.0; usize::max(channel_count, RGB_CHANNEL_COUNT)];
    for y in 0..size.y {
        for x in 0..size.x {
            for _ in 0..spp {
                if abort.load(Ordering::Relaxed) {
                    return false;
                }
                let pixel = Point2f::new((offset.x + x) as Float, (offset.y + y) as Float);
                let p = pixel + sampler.next_2d();
                let ray = sensor.generate_ray(&p);
                if channel_count > RGB_CHANNEL_COUNT {
                    values.iter_mut().for_each(|v| *v = 0.0);
                    let l = integrator.trace(scene, sampler, &ray, 0, Some(values.as_mut_slice()));
                    if validate_radiance_result(&l, &p) != l {
                        values[..RGB_CHANNEL_COUNT].iter_mut().for_each(|v| *v = 0.0);
                    }
                    for v in values.iter_mut() {
                        if !v.is_finite() {
                            *v = 0.0;
                        }
                    }
                } else {
                    let l = integrator.trace(scene, sampler, &ray, 0, None);
                    let l = validate_radiance_result(&l, &p);
                    values[..RGB_CHANNEL_COUNT].copy_from_slice(&l.to_rgb());
                }
                target.add_sample(&p, &values);
            }
        }
    }
    return true;
}

/// Renders one pass of `spp` samples per pixel over all tiles in parallel
/// and merges every completed tile into the film.
fn render_tiles(
    scene: &Scene,
    pool: &rayon::ThreadPool,
    generator: &TileGenerator,
    spp: u32,
    seed_base: u64,
    channel_count: usize,
    abort: &AtomicBool,
) -> Result<(), OkapiError> {
    let film = scene.film();
    let (filter, film_bounds) = {
        let film = film.read()?;
        (film.filter(), film.tile_bounds())
    };
    return pool.install(|| {
        (0..generator.tile_count())
            .into_par_iter()
            .try_for_each(|tile_index| -> Result<(), OkapiError> {
                let desc = generator.tile_description(tile_index);
                let mut tile = FilmTile::new(
                    &desc.offset,
                    &desc.size,
                    channel_count,
                    &filter,
                    &film_bounds,
                );
                let mut sampler = scene
                    .sampler()
                    .clone_with_seed(seed_base + tile_index as u64);
                let done = render_block(
                    scene,
                    &mut tile,
                    &desc.offset,
                    &desc.size,
                    sampler.as_mut(),
                    spp,
                    abort,
                );
                if done {
                    let mut film = film.write()?;
                    film.add_tile(&tile);
                }
                Ok(())
            })
    });
}

fn build_thread_pool(thread_count: usize) -> Result<rayon::ThreadPool, OkapiError> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(thread_count)
        .build()?;
    info!("thread_count: {}", pool.current_num_threads());
    return Ok(pool);
}

fn tile_generator(scene: &Scene) -> Result<TileGenerator, OkapiError> {
    let film = scene.film();
    let film = film.read()?;
    log_render_setup(scene, &film);
    let preferred = Vector2i::new(PREFERRED_TILE_SIZE, PREFERRED_TILE_SIZE);
    let generator = TileGenerator::new(&preferred, &film.size());
    info!("tile_count: {}", generator.tile_count());
    if generator.tile_count() > 0 {
        let size = generator.tile_description(0).size;
        info!("tile_size: ({}, {})", size.x, size.y);
    }
    return Ok(generator);
}

fn progress_message(pass: u32, spp: u32) -> String {
    let percent = if spp > 0 {
        100.0 * pass as Float / spp as Float
    } else {
        100.0
    };
    return format!(
        "Progressive rendering: {}/{} SPP ({:.2} %)",
        pass, spp, percent
    );
}

/// Single threaded reference loop over the whole image as one tile.
///
/// The film is locked only for the final merge, so sensors and
/// integrators may read it while tracing.
pub fn render(scene: &Scene) -> Result<(), OkapiError> {
    let start = Instant::now();
    let channel_count = prepare_film(scene)?;
    let mut sampler = scene.sampler().clone_sampler();
    let spp = sampler.sample_count();
    let abort = AtomicBool::new(false);
    let film = scene.film();
    let mut tile = {
        let film = film.read()?;
        log_render_setup(scene, &film);
        FilmTile::new(
            &film.offset(),
            &film.size(),
            channel_count,
            &film.filter(),
            &film.tile_bounds(),
        )
    };
    debug!("Rendering {} channels single threaded", channel_count);
    let offset = tile.offset();
    let size = tile.size();
    render_block(
        scene,
        &mut tile,
        &offset,
        &size,
        sampler.as_mut(),
        spp,
        &abort,
    );
    film.write()?.add_tile(&tile);
    info!("render time: {:.3} s", start.elapsed().as_secs_f64());
    return Ok(());
}

/// Renders all samples per pixel tile by tile on a thread pool.
pub fn render_parallel(scene: &Scene, desc: &RenderDescription) -> Result<(), OkapiError> {
    let start = Instant::now();
    let channel_count = prepare_film(scene)?;
    let generator = tile_generator(scene)?;
    let pool = build_thread_pool(desc.thread_count)?;
    let spp = scene.sampler().sample_count();
    render_tiles(scene, &pool, &generator, spp, 0, channel_count, &desc.abort)?;
    if desc.is_aborted() {
        warn!("Rendering aborted.");
    }
    info!("render time: {:.3} s", start.elapsed().as_secs_f64());
    return Ok(());
}

/// Renders one sample per pixel per pass so the film converges gradually.
/// Returns the number of completed passes.
pub fn render_parallel_progressive(
    scene: &Scene,
    desc: &RenderDescription,
    reporter: &mut dyn ProgressReporter,
) -> Result<u32, OkapiError> {
    let start = Instant::now();
    let channel_count = prepare_film(scene)?;
    let generator = tile_generator(scene)?;
    let pool = build_thread_pool(desc.thread_count)?;
    let spp = scene.sampler().sample_count();
    let tile_count = generator.tile_count() as u64;

    let mut completed = 0;
    for pass in 0..spp {
        if desc.is_aborted() {
            break;
        }
        let message = progress_message(pass, spp);
        info!("{}", message);
        reporter.update(&message);

        let seed_base = pass as u64 * tile_count;
        render_tiles(scene, &pool, &generator, 1, seed_base, channel_count, &desc.abort)?;
        if desc.is_aborted() {
            break;
        }
        completed = pass + 1;
    }
    info!("render time: {:.3} s", start.elapsed().as_secs_f64());
    return Ok(completed);
}

/// Progressive rendering that restarts from an empty film whenever a clear
/// is requested. Returns the number of passes in the final accumulation.
pub fn render_interactive_parallel_progressive(
    scene: &Scene,
    desc: &InteractiveRenderDescription,
    reporter: &mut dyn ProgressReporter,
) -> Result<u32, OkapiError> {
    let start = Instant::now();
    let channel_count = prepare_film(scene)?;
    let generator = tile_generator(scene)?;
    let pool = build_thread_pool(desc.render.thread_count)?;
    let spp = scene.sampler().sample_count();
    let tile_count = generator.tile_count() as u64;

    let mut completed = 0;
    let mut pass = 0;
    while pass < spp {
        if desc.render.is_aborted() {
            break;
        }
        if desc.take_clear_request() {
            debug!("Clearing accumulation buffer");
            scene.film().write()?.clear();
            pass = 0;
            completed = 0;
        }
        let message = progress_message(pass, spp);
        reporter.update(&message);

        let seed_base = pass as u64 * tile_count;
        render_tiles(
            scene,
            &pool,
            &generator,
            1,
            seed_base,
            channel_count,
            &desc.render.abort,
        )?;
        if desc.render.is_aborted() {
            break;
        }
        pass += 1;
        completed = pass;
    }
    info!("render time: {:.3} s", start.elapsed().as_secs_f64());
    return Ok(completed);
}
