//! lsketch — render L-system task descriptions to SVG line art.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use log::info;

use lsys_sketch::sketch::{Canvas, Stroke};
use lsys_sketch::task::Task;

#[derive(Parser)]
#[command(name = "lsketch")]
#[command(version, about = "Generates SVG line art from L-system task descriptions")]
struct Cli {
    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a task description to an SVG image
    Render {
        /// Path to the task JSON file
        task: PathBuf,

        /// Directory the SVG is written into
        #[arg(long, default_value = "image")]
        out: PathBuf,

        /// Side length of the square canvas, in pixels
        #[arg(long, default_value_t = 1500)]
        canvas: u32,

        /// Stroke color
        #[arg(long, default_value = "black")]
        color: String,

        /// Stroke width in pixels
        #[arg(long, default_value_t = 2.0)]
        stroke_width: f32,
    },

    /// Write a built-in example task file
    Preset {
        /// Preset name (snowFlake, triangle)
        name: String,

        /// Directory the task file is written into
        #[arg(long, default_value = "task")]
        out: PathBuf,
    },

    /// Print the expanded instruction string of a task
    Expand {
        /// Path to the task JSON file
        task: PathBuf,

        /// Override the task's expansion depth
        #[arg(long)]
        depth: Option<u32>,
    },
}

fn setup_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Commands::Render {
            task,
            out,
            canvas,
            color,
            stroke_width,
        } => cmd_render(&task, &out, canvas, color, stroke_width),
        Commands::Preset { name, out } => cmd_preset(&name, &out),
        Commands::Expand { task, depth } => cmd_expand(&task, depth),
    }
}

fn load_task(path: &Path) -> Result<Task> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read task file {}", path.display()))?;
    let task: Task = serde_json::from_str(&data)
        .with_context(|| format!("invalid task description in {}", path.display()))?;
    Ok(task)
}

fn cmd_render(
    path: &Path,
    out: &Path,
    canvas_side: u32,
    color: String,
    stroke_width: f32,
) -> Result<()> {
    let task = load_task(path)?;
    let canvas = Canvas::square(canvas_side);
    let sketch = task
        .render(canvas)
        .with_context(|| format!("failed to render task {:?}", task.name))?;
    info!("rendered {:?}: {} segments", task.name, sketch.segments.len());

    let stroke = Stroke {
        color,
        width: stroke_width,
    };
    fs::create_dir_all(out)
        .with_context(|| format!("failed to create output directory {}", out.display()))?;
    let svg_path = out.join(format!("{}.svg", task.name));
    fs::write(&svg_path, sketch.to_svg(canvas, &stroke))
        .with_context(|| format!("failed to write {}", svg_path.display()))?;

    println!("{}", svg_path.display());
    Ok(())
}

fn cmd_preset(name: &str, out: &Path) -> Result<()> {
    let Some(task) = Task::preset(name) else {
        bail!(
            "unknown preset {:?}; available: {}",
            name,
            Task::preset_names().join(", ")
        );
    };

    fs::create_dir_all(out)
        .with_context(|| format!("failed to create task directory {}", out.display()))?;
    let task_path = out.join(format!("{}.json", task.name));
    let json = serde_json::to_string_pretty(&task).context("failed to serialize task")?;
    fs::write(&task_path, json)
        .with_context(|| format!("failed to write {}", task_path.display()))?;

    println!("{}", task_path.display());
    Ok(())
}

fn cmd_expand(path: &Path, depth: Option<u32>) -> Result<()> {
    let task = load_task(path)?;
    let mut grammar = task.grammar()?;
    if let Some(depth) = depth {
        grammar.depth = depth;
    }
    println!("{}", grammar.expand()?);
    Ok(())
}
