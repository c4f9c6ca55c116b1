//! Command-line entry point: load a model file, analyze it, print the report

use anyhow::{Context, Result};

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let path = args
        .next()
        .context("usage: frame2d <model-file> [--json]")?;
    let json = args.next().as_deref() == Some("--json");

    let mut model = frame2d::io::read_model(&path)
        .with_context(|| format!("failed to load model from '{path}'"))?;

    model
        .analyze_linear()
        .with_context(|| format!("analysis of '{path}' failed"))?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if json {
        frame2d::report::write_json(&model, &mut out)?;
    } else {
        frame2d::report::write_text(&model, &mut out)?;
    }

    Ok(())
}
