use crate::config::Config;
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tesseract_common::RecordingSink;
use tesseract_content::{ContentEditor, EMPTY_PLACEHOLDER};

#[derive(Debug, Args)]
pub struct ContentArgs {
    /// Rich-text document (JSON)
    pub document: PathBuf,

    /// Print the `save_content` event the editor would push
    #[arg(long)]
    pub save: bool,
}

pub fn content(args: ContentArgs, cwd: &Path) -> Result<()> {
    let config = Config::load(cwd)?;
    let path = cwd.join(&args.document);
    let raw = fs::read_to_string(&path)
        .with_context(|| format!("Cannot read {}", path.display()))?;

    let sink = Arc::new(RecordingSink::new());
    let mut editor = ContentEditor::mount(Some(&raw), false, sink.clone(), config.autosave_period())?;

    let doc = editor.document();
    if doc.is_blank() {
        println!("{}", EMPTY_PLACEHOLDER.dimmed());
    } else {
        println!("{}", doc.plain_text());
    }
    println!();
    println!("{} {} words", "📄".bright_blue(), doc.word_count());

    if args.save {
        editor.save_now()?;
        for event in sink.events() {
            println!("{} {}", event.name.cyan(), event.payload);
        }
    }

    Ok(())
}
