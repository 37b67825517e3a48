mod app;
mod chart;
mod color;
mod config;
mod data;
mod error;
mod export;
mod render;
mod scale;
mod state;
mod stats;
mod ui;

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;
use eframe::egui;

use app::IrisPanelsApp;
use config::ChartLayout;
use data::coerce::NumericPolicy;
use state::AppState;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Iris table to load (.csv or .json).
    data: Option<PathBuf>,

    /// Write both panels to this HTML file and exit.
    #[arg(long)]
    export: Option<PathBuf>,

    /// Write the per-species quartiles to this JSON file and exit.
    #[arg(long)]
    summary: Option<PathBuf>,

    /// Treat unparseable numbers as missing instead of failing.
    #[arg(long)]
    lenient: bool,
}

impl Cli {
    fn policy(&self) -> NumericPolicy {
        if self.lenient {
            NumericPolicy::Lenient
        } else {
            NumericPolicy::Strict
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.export.is_some() || cli.summary.is_some() {
        return run_headless(&cli);
    }

    let mut state = AppState {
        policy: cli.policy(),
        ..Default::default()
    };
    if let Some(path) = &cli.data {
        state.load(path);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([680.0, 900.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Iris Panels",
        options,
        Box::new(|_cc| Ok(Box::new(IrisPanelsApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("viewer failed: {e}"))
}

fn run_headless(cli: &Cli) -> Result<()> {
    let Some(path) = &cli.data else {
        bail!("a data file is required with --export or --summary");
    };
    export::export_all(
        path,
        cli.export.as_deref(),
        cli.summary.as_deref(),
        &ChartLayout::default(),
        cli.policy(),
    )
}
