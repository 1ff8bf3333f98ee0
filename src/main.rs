#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod app;
mod domain;
mod ui;
mod util;

use std::path::PathBuf;
use std::process;

use clap::Parser;
use dioxus::prelude::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[cfg(feature = "desktop")]
use dioxus_desktop::{tao::window::WindowBuilder, Config as DesktopConfig, LogicalSize};

use crate::domain::{AppState, ValuationEngine, ValuationInput};
use crate::util::config::{load_input_file, resolve_tables};
use crate::util::version::{version_label, APP_NAME};

/// Estimate the value of an early-stage SaaS or app business.
#[derive(Parser, Debug)]
#[command(name = "saas_valuator", version)]
struct Args {
    /// Reference tables JSON replacing the built-in benchmarks
    #[arg(long, env = "SAAS_VALUATOR_TABLES", value_name = "FILE")]
    tables: Option<PathBuf>,

    /// Valuation input JSON used to prefill the form
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Print the valuation report for --input as JSON and exit
    #[arg(long, requires = "input")]
    report: bool,
}

fn main() {
    // Logs go to stderr so `--report` output stays machine readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    info!(version = %version_label(), "starting {APP_NAME}");

    let (tables, source) = match resolve_tables(args.tables.as_deref()) {
        Ok(resolved) => resolved,
        Err(err) => {
            error!("{err}");
            process::exit(2);
        }
    };

    let input = match args.input.as_deref().map(load_input_file).transpose() {
        Ok(input) => input,
        Err(err) => {
            error!("{err}");
            process::exit(2);
        }
    };

    let engine = ValuationEngine::new(tables);

    if args.report {
        let input = input.unwrap_or_default();
        if let Err(err) = print_report(&engine, &input) {
            error!("failed to write report: {err}");
            process::exit(1);
        }
        return;
    }

    let state = AppState::new(engine, source).with_prefill(input.as_ref());
    launch_ui(state);
}

fn print_report(engine: &ValuationEngine, input: &ValuationInput) -> serde_json::Result<()> {
    let report = engine.evaluate(input);
    let json = serde_json::to_string_pretty(&report)?;
    println!("{json}");
    Ok(())
}

fn launch_ui(state: AppState) {
    // Wayland explicit-sync crashes on some drivers; fall back to GL unless the caller opts in.
    if std::env::var("WAYLAND_DISPLAY").is_ok() && std::env::var("WGPU_BACKEND").is_err() {
        std::env::set_var("WGPU_BACKEND", "gl");
    }

    // WebKit's DMABUF renderer opts into explicit sync; disable it unless the user overrides.
    if std::env::var("WAYLAND_DISPLAY").is_ok()
        && std::env::var("WEBKIT_DISABLE_DMABUF_RENDERER").is_err()
    {
        std::env::set_var("WEBKIT_DISABLE_DMABUF_RENDERER", "1");
    }

    let builder = LaunchBuilder::new().with_context(state);

    #[cfg(feature = "desktop")]
    let builder = {
        let config = desktop! {
            DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title(APP_NAME)
                    .with_inner_size(LogicalSize::new(1100.0, 860.0))
            )
        };
        builder.with_cfg(config)
    };

    builder.launch(app::App);
}
