use crate::config::Config;
use anyhow::{anyhow, Context, Result};
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use tesseract_canvas::{ActionResult, Canvas, CanvasAction, DropOutcome, Resolution};

#[derive(Debug, Args)]
pub struct LayoutArgs {
    /// JSON file holding a list of canvas actions
    pub script: PathBuf,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: String,

    /// Let drops bubble up to the nearest accepting container (overrides config)
    #[arg(long)]
    pub nearest_ancestor: bool,
}

pub fn layout(args: LayoutArgs, cwd: &Path) -> Result<()> {
    let config = Config::load(cwd)?;
    let mut options = config.canvas_options();
    if args.nearest_ancestor {
        options.resolution = Resolution::NearestAncestor;
    }

    let script_path = cwd.join(&args.script);
    let raw = fs::read_to_string(&script_path)
        .with_context(|| format!("Cannot read script {}", script_path.display()))?;
    let actions: Vec<CanvasAction> = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid canvas script {}", script_path.display()))?;

    tracing::debug!("replaying {} canvas actions from {}", actions.len(), script_path.display());
    let mut canvas = Canvas::with_options(options);
    let results = canvas.replay(&actions)?;

    match args.format.as_str() {
        "json" => println!("{}", canvas.to_json()?),
        "text" => {
            for (step, result) in results.iter().enumerate() {
                if let Some(line) = describe(result) {
                    println!("  {:>3} {}", step + 1, line);
                }
            }
            println!();
            print!("{}", canvas.tree().outline());
            println!();
            println!(
                "{} {} elements on canvas",
                "✅".green(),
                canvas.tree().node_count()
            );
        }
        other => return Err(anyhow!("Unknown format: {}. Use: text or json", other)),
    }

    Ok(())
}

fn describe(result: &ActionResult) -> Option<String> {
    match result {
        ActionResult::Dropped(DropOutcome::Created { id, parent }) => {
            Some(format!("{} created #{} in {}", "✓".green(), id, parent))
        }
        ActionResult::Dropped(DropOutcome::Moved { id, parent }) => {
            Some(format!("{} moved #{} to {}", "✓".green(), id, parent))
        }
        ActionResult::Dropped(DropOutcome::Rejected(rejection)) => {
            Some(format!("{} {}", "✗".red(), rejection))
        }
        ActionResult::Deleted(id) => Some(format!("{} deleted #{}", "✓".green(), id)),
        _ => None,
    }
}
