use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use graham::{convex_hull, Hull};
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Convex hull of integer points; runs a built-in demo set by default")]
struct Cmd {
    /// Read points from a file (JSON `[[x, y], ...]` or one `x y` per line)
    #[arg(long)]
    input: Option<PathBuf>,

    /// Output format on stdout
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    run(cmd)
}

fn run(cmd: Cmd) -> Result<()> {
    let (points, source) = match &cmd.input {
        Some(path) => (input::read_points(path)?, path.display().to_string()),
        None => (input::demo_points(), "demo".to_string()),
    };
    tracing::info!(source, points = points.len(), "hull");
    let hull = convex_hull(&points).with_context(|| format!("computing hull of {source}"))?;

    print!("{}", render(&hull, cmd.format)?);
    Ok(())
}

fn render(hull: &Hull, format: Format) -> Result<String> {
    Ok(match format {
        Format::Text => format!("The points in the convex hull are:\n{hull}"),
        Format::Json => {
            let mut s = serde_json::to_string(&hull_json(hull))?;
            s.push('\n');
            s
        }
    })
}

fn hull_json(hull: &Hull) -> serde_json::Value {
    serde_json::Value::Array(
        hull.iter()
            .map(|p| serde_json::json!([p.x, p.y]))
            .collect(),
    )
}
