use clap::*;

use okapi_rs::core::prelude::*;
use std::env;
use std::path::PathBuf;
use std::process;
use std::thread::available_parallelism;
use std::time::Instant;

use log::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum RenderMode {
    /// Parallel, one sample per pixel per pass.
    Progressive,
    /// Parallel, all samples of a tile at once.
    #[value(name = "tile_based")]
    TileBased,
    /// One thread, no tiling.
    #[value(name = "single_threaded_tile_based")]
    SingleThreadedTileBased,
}

#[derive(Debug, Parser)]
#[clap(author, about, version)]
struct CommandOptions {
    /// Okapi scene file (JSON). The built-in scene is used when omitted.
    #[arg(value_name = "scene.json")]
    pub scene_filename: Option<PathBuf>,

    /// Filename under which the final rendered image is stored.
    #[arg(short = 'o', long = "film-filename", value_name = "filename")]
    pub film_filename: Option<PathBuf>,

    /// Integrator to use instead of the one in the scene file.
    #[arg(long, value_name = "name")]
    pub integrator: Option<String>,

    /// Intersector to use instead of the one in the scene file.
    #[arg(long, value_name = "name")]
    pub intersector: Option<String>,

    /// Render mode.
    #[arg(long = "render-mode", value_enum, default_value = "progressive")]
    pub render_mode: RenderMode,

    /// Samples per pixel, 0 keeps the scene's value.
    #[arg(short = 's', long = "samples-per-pixel", value_name = "num", default_value = "0")]
    pub samples_per_pixel: u32,

    /// Number of render threads, 0 uses all cores.
    #[arg(short = 'j', long = "thread-count", value_name = "num", default_value = "0")]
    pub thread_count: usize,

    /// Suppress all text output other than error messages.
    #[arg(long, default_value = "false")]
    pub quiet: bool,

    /// Log messages at or above this level (0 -> INFO,
    /// 1 -> WARNING, 2 -> ERROR).
    #[arg(long, value_name = "num")]
    pub minloglevel: Option<i32>,
}

fn init_logger(opts: &CommandOptions) {
    if let Some(minloglevel) = opts.minloglevel {
        const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];
        let log_level = LOG_LEVELS[(minloglevel + 2).clamp(0, 4) as usize];
        env::set_var("RUST_LOG", log_level);
    } else {
        //default log level : warn
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_owned());
        env::set_var("RUST_LOG", log_level);
    }

    env_logger::Builder::from_default_env()
        .format_target(false)
        .format_module_path(false)
        .init();
}

fn scene_overrides(opts: &CommandOptions) -> SceneOverrides {
    SceneOverrides {
        film_filename: opts
            .film_filename
            .as_ref()
            .map(|p| p.to_string_lossy().into_owned()),
        integrator: opts.integrator.clone(),
        intersector: opts.intersector.clone(),
        samples_per_pixel: if opts.samples_per_pixel > 0 {
            Some(opts.samples_per_pixel)
        } else {
            None
        },
    }
}

fn render_scene(opts: &CommandOptions) -> Result<(), OkapiError> {
    let overrides = scene_overrides(opts);
    let scene = match opts.scene_filename.as_ref() {
        Some(path) => load_scene(path, &overrides)?,
        None => load_default_scene(&overrides)?,
    };

    let start = Instant::now();
    info!("Begin rendering.");
    match opts.render_mode {
        RenderMode::Progressive => {
            info!("Parallel progressive rendering.");
            let desc = InteractiveRenderDescription::new(opts.thread_count);
            let spp = scene.sampler().sample_count() as usize;
            let mut reporter = if opts.quiet {
                IndicatifProgressReporter::hidden()
            } else {
                IndicatifProgressReporter::new(spp, "Rendering")
            };
            let passes = render_interactive_parallel_progressive(&scene, &desc, &mut reporter)?;
            reporter.done();
            info!("{} of {} passes rendered.", passes, spp);
        }
        RenderMode::TileBased => {
            info!("Parallel tile-based rendering.");
            let desc = RenderDescription::new(opts.thread_count);
            render_parallel(&scene, &desc)?;
        }
        RenderMode::SingleThreadedTileBased => {
            info!("Single thread tile-based rendering.");
            render(&scene)?;
        }
    }
    let elapsed = start.elapsed().as_secs_f64();

    let film = scene.film();
    let film = film.read()?;
    let written = film.write_image()?;
    if !opts.quiet {
        println!("Render time: {:.3} s", elapsed);
        for name in written.iter() {
            println!("Stored {}", name);
        }
    }
    return Ok(());
}

pub fn main() {
    let opts = CommandOptions::parse();
    init_logger(&opts);

    if !opts.quiet {
        let nthreads = available_parallelism().map(|n| n.get()).unwrap_or(1);
        let version = env!("CARGO_PKG_VERSION");
        println!("okapi version {} [Detected {} cores]", version, nthreads);
        println!();
    }

    if let Some(path) = opts.scene_filename.as_ref() {
        if !path.exists() {
            eprintln!("Scene file {} does not exist.", path.display());
            println!("{}", CommandOptions::command().render_usage());
            process::exit(-1);
        }
    }

    match render_scene(&opts) {
        Ok(()) => process::exit(0),
        Err(e) => {
            error!("{}", e);
            eprintln!("{}", e);
            process::exit(-1);
        }
    }
}
