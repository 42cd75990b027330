//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that
//! parses CLI arguments and dispatches to the TUI or the headless commands.

use std::rc::Rc;
use std::time::Instant;

use clap::Parser;

use crate::chart::{ChartRenderer, Viewport};
use crate::cli::{Command, RenderArgs};
use crate::config::{ExplorerConfig, SettingValue, PLAY_ANIMATIONS};
use crate::error::AppError;
use crate::store::{StateStore, StateUpdate};

/// Entry point for the `curvelab` binary.
pub fn run() -> Result<(), AppError> {
    // We want bare `curvelab` to behave like `curvelab tui`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of
    // the argv list before parsing. This preserves a clean clap structure
    // while retaining the requested UX.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Tui => crate::tui::run(),
        Command::Render(args) => handle_render(args),
        Command::List => handle_list(),
    }
}

fn handle_render(args: RenderArgs) -> Result<(), AppError> {
    let config = Rc::new(ExplorerConfig::standard());
    let mut store = StateStore::new(config.clone());

    if let Some(name) = &args.dataset {
        let index = config
            .generator_index(name)
            .ok_or_else(|| AppError::new(2, format!("unknown dataset '{name}'")))?;
        store.publish(StateUpdate::SelectDataset(index));
    }
    let dataset = store.state().active_dataset;
    for (param, &value) in args.params.iter().enumerate() {
        store.publish(StateUpdate::SetDatasetValue {
            dataset,
            param,
            value,
        });
    }

    for name in &args.curves {
        let curve = config
            .curve_index(name)
            .ok_or_else(|| AppError::new(2, format!("unknown curve '{name}'")))?;
        store.publish(StateUpdate::SetCurveActive {
            curve,
            active: true,
        });
        if let Some(shape) = args.shape {
            store.publish(StateUpdate::SetCurveValue {
                curve,
                value: shape,
            });
        }
    }

    // Headless passes have no frame loop, so transitions are pointless.
    store.publish(StateUpdate::SetSetting {
        name: PLAY_ANIMATIONS.to_string(),
        value: SettingValue::Bool(false),
    });

    let mut renderer = ChartRenderer::new(config.clone(), Viewport::default());
    let summary = renderer.render(store.state(), Instant::now())?;

    let state = store.state();
    println!("dataset: {}", config.generators[state.active_dataset].name);
    println!("points: {}", summary.points);
    println!(
        "x extent: [{}, {}]",
        summary.x_extent[0], summary.x_extent[1]
    );
    println!(
        "y extent: [{}, {}]",
        summary.y_extent[0], summary.y_extent[1]
    );

    let active = config
        .curves
        .iter()
        .zip(&state.curves)
        .filter(|(_, sel)| sel.active);
    for ((ct, sel), rendered) in active.zip(&renderer.scene().paths) {
        let shape = match (ct.params.first(), sel.value) {
            (Some(spec), Some(v)) => format!(" ({} {})", spec.name, spec.effective(v)),
            _ => String::new(),
        };
        let c = rendered.color;
        println!(
            "{}{shape}: {} path commands, color #{:02x}{:02x}{:02x}",
            ct.name(),
            rendered.path.commands().len(),
            c.r,
            c.g,
            c.b,
        );
    }

    Ok(())
}

fn handle_list() -> Result<(), AppError> {
    let config = ExplorerConfig::standard();

    println!("datasets:");
    for g in &config.generators {
        println!("  {}", g.name);
        for spec in &g.params {
            println!(
                "    {} = {} in [{}, {}]{}",
                spec.name,
                spec.default,
                spec.bounds[0],
                spec.bounds[1],
                if spec.round { " (integer)" } else { "" },
            );
        }
    }

    println!("curves:");
    for ct in &config.curves {
        match ct.params.first() {
            Some(spec) => println!("  {} ({} = {})", ct.name(), spec.name, spec.default),
            None => println!("  {}", ct.name()),
        }
    }

    Ok(())
}

/// Rewrite argv so `curvelab` defaults to `curvelab tui`.
///
/// Rules:
/// - `curvelab`                     -> `curvelab tui`
/// - `curvelab --help/--version/-h` -> unchanged (top-level help/version)
/// - a known subcommand             -> unchanged
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("tui".to_string());
        return argv;
    };

    let is_top_level_help_or_version =
        matches!(arg1.as_str(), "-h" | "--help" | "-V" | "--version" | "help");
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "tui" | "render" | "list");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "tui flags".
    if arg1.starts_with('-') {
        argv.insert(1, "tui".to_string());
        return argv;
    }

    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_defaults_to_tui() {
        assert_eq!(args(&["curvelab", "tui"]), rewrite_args(args(&["curvelab"])));
    }

    #[test]
    fn help_and_subcommands_pass_through() {
        for argv in [
            args(&["curvelab", "--help"]),
            args(&["curvelab", "-V"]),
            args(&["curvelab", "render", "-d", "Rings"]),
            args(&["curvelab", "list"]),
        ] {
            assert_eq!(argv.clone(), rewrite_args(argv));
        }
    }
}
