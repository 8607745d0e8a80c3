use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::Path;
use tesseract_canvas::Resolution;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Let drops bubble up to the nearest accepting container
    #[arg(long)]
    pub nearest_ancestor: bool,

    /// Prefix for generated element ids
    #[arg(long)]
    pub id_prefix: Option<String>,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &Path) -> Result<()> {
    let config_path = Config::path_in(cwd);

    // Check if config already exists
    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!("{}", "📝 Initializing Tesseract project...".bright_blue().bold());

    let mut config = Config::default();
    if args.nearest_ancestor {
        config.resolution = Resolution::NearestAncestor;
    }
    if let Some(prefix) = args.id_prefix {
        config.id_prefix = prefix;
    }

    let config_json = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, config_json)?;

    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    println!();
    println!("{}", "✅ Project initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Record a layout script (a JSON list of canvas actions)");
    println!("  2. Run: tesseract layout <script.json>");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_writes_loadable_config() {
        let dir = tempfile::tempdir().unwrap();
        init(
            InitArgs {
                nearest_ancestor: true,
                id_prefix: Some("el".to_string()),
                force: false,
            },
            dir.path(),
        )
        .unwrap();

        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.resolution, Resolution::NearestAncestor);
        assert_eq!(config.id_prefix, "el");
    }

    #[test]
    fn test_init_keeps_existing_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = Config::path_in(dir.path());
        fs::write(&path, r#"{ "autosaveMs": 5 }"#).unwrap();

        init(
            InitArgs {
                nearest_ancestor: false,
                id_prefix: None,
                force: false,
            },
            dir.path(),
        )
        .unwrap();

        assert_eq!(Config::load(dir.path()).unwrap().autosave_ms, 5);
    }

    #[test]
    fn test_force_replaces_unreadable_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = Config::path_in(dir.path());
        fs::write(&path, r#"{ "resolution": "sideways" }"#).unwrap();
        assert!(Config::load(dir.path()).is_err());

        init(
            InitArgs {
                nearest_ancestor: false,
                id_prefix: None,
                force: true,
            },
            dir.path(),
        )
        .unwrap();

        assert_eq!(Config::load(dir.path()).unwrap(), Config::default());
    }
}
