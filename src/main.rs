//! Standalone CLI: draw one frame of a scene file into the recording backend
//!
//! Run with: cargo run --features cli --bin scatter-cli -- scene.json

use grouped_scatter::render::{Primitive, RecordingRenderer};
use grouped_scatter::{Drawable, SceneConfig};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,grouped_scatter=debug"));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("SCATTER_SCENE").ok())
        .ok_or("usage: scatter-cli <scene.json> (or set SCATTER_SCENE)")?;

    let config = SceneConfig::load(&path)?;
    let scatter = config.build()?;

    let mut gl = RecordingRenderer::new();
    scatter.draw(&mut gl, &config.camera)?;

    let batches = gl.batches();
    let bounds = scatter.bounds();
    info!(
        series = scatter.series_count(),
        points = scatter.point_count(),
        min = ?bounds.min(),
        max = ?bounds.max(),
        empty = bounds.is_empty(),
        "bounds"
    );
    info!(
        commands = gl.commands().len(),
        vertices = gl.vertex_count(),
        point_batches = batches.iter().filter(|b| b.primitive == Primitive::Points).count(),
        line_batches = batches.iter().filter(|b| b.primitive == Primitive::LineStrip).count(),
        "frame"
    );

    println!("{}", serde_json::to_string_pretty(gl.commands())?);
    Ok(())
}
