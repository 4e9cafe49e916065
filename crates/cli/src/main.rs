use anyhow::Result;
use clap::{Parser, Subcommand};
use shapes::prelude::*;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "shapes")]
#[command(about = "Shape-area and random-point fixture runner")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Draw a point sample and describe the fixture shapes
    Demo {
        #[arg(long, default_value_t = DemoCfg::default().point_count)]
        points: usize,
        /// Seed for a reproducible sample
        #[arg(long)]
        seed: Option<u64>,
        /// Print the report as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Area of a single shape
    Area {
        #[command(subcommand)]
        shape: ShapeArg,
    },
    /// Print the fixture marker and library version as JSON
    Report,
}

#[derive(Subcommand)]
enum ShapeArg {
    Circle {
        #[arg(long, allow_hyphen_values = true)]
        radius: f64,
        #[arg(long, default_value = "")]
        name: String,
    },
    Square {
        #[arg(long, allow_hyphen_values = true)]
        side: f64,
        #[arg(long, default_value = "")]
        name: String,
    },
}

impl ShapeArg {
    fn build(self) -> Result<Shape> {
        let shape = match self {
            ShapeArg::Circle { radius, name } => Shape::try_circle(radius)?.with_name(name),
            ShapeArg::Square { side, name } => Shape::try_square(side)?.with_name(name),
        };
        Ok(shape)
    }
}

fn main() -> Result<()> {
    // Logs on stderr; stdout carries only the report.
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Demo { points, seed, json } => demo(
            DemoCfg {
                point_count: points,
                seed,
            },
            json,
        ),
        Action::Area { shape } => area_cmd(shape),
        Action::Report => report(),
    }
}

fn demo(cfg: DemoCfg, json: bool) -> Result<()> {
    tracing::info!(points = cfg.point_count, seed = ?cfg.seed, json, "demo");
    let report = run_demo(&cfg);
    tracing::info!(sampled = report.points.len(), "point_sample");
    for s in &report.shapes {
        tracing::info!(kind = %s.kind, name = %s.name, area = s.area, "shape_area");
    }

    if json {
        println!("{}", render_json(&report)?);
    } else {
        print!("{}", render_text(&report));
    }
    Ok(())
}

/// Point dump followed by one description line per shape.
fn render_text(report: &DemoReport) -> String {
    let mut text = format!("{:?}\n", report.points);
    for line in report.lines() {
        text.push_str(line);
        text.push('\n');
    }
    text
}

fn render_json(report: &DemoReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

fn area_cmd(arg: ShapeArg) -> Result<()> {
    let shape = arg.build()?;
    tracing::info!(kind = shape.kind.label(), name = %shape.name, area = area(&shape), "area");
    println!("{}", describe(&shape));
    Ok(())
}

fn report() -> Result<()> {
    let doc = serde_json::json!({
        "fixture": shapes::FIXTURE_ID,
        "version": shapes::VERSION,
    });
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
