use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tesseract_common::{InboundEvent, OutboundEvent, RecordingSink};
use tesseract_flow::{FlowAction, FlowEditor, UPDATE_FLOW_EVENT};

#[derive(Debug, Args)]
pub struct FlowArgs {
    /// JSON file holding a list of flow actions
    pub script: PathBuf,

    /// Starting graph, a JSON object with `nodes` and `edges`
    #[arg(short, long)]
    pub graph: Option<PathBuf>,

    /// Project slug used in page links
    #[arg(short, long, default_value = "")]
    pub project: String,
}

pub fn flow(args: FlowArgs, cwd: &Path) -> Result<()> {
    let sink = Arc::new(RecordingSink::new());
    let mut editor = FlowEditor::new(args.project.as_str(), sink.clone());

    if let Some(graph) = &args.graph {
        let payload: serde_json::Value = read_json(&cwd.join(graph))?;
        editor.handle_event(&InboundEvent::new(UPDATE_FLOW_EVENT, payload))?;
    }

    let actions: Vec<FlowAction> = read_json(&cwd.join(&args.script))?;
    tracing::debug!("replaying {} flow actions", actions.len());
    editor.replay(&actions)?;

    println!("{}", "📤 Intents".bright_blue().bold());
    for event in sink.events() {
        println!("  {}", format_intent(&event));
    }

    println!();
    for page in editor.pages() {
        println!("  {} {}", page.label.bright_white(), editor.page_url(page).dimmed());
    }
    let stats = editor.stats();
    println!();
    println!(
        "{} {} pages, {} connections",
        "✅".green(),
        stats.pages,
        stats.connections
    );

    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Cannot read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Invalid JSON in {}", path.display()))
}

fn format_intent(event: &OutboundEvent) -> String {
    format!("{} {}", event.name.cyan(), event.payload)
}
