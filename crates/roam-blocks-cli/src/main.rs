use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use roam_blocks_config::Config;
use roam_blocks_engine::{
    BlockOrder, BlockRow, ConvertOptions, OutlineItem, UidStrategy, assemble_page,
    convert_markdown, convert_outline, render_page,
};
use serde::de::DeserializeOwned;
use std::{
    io::{self, Read},
    path::{Path, PathBuf},
};

#[derive(Parser)]
#[command(name = "roam-blocks", version, about = "Convert markdown into Roam block batches")]
struct Cli {
    /// Config file to use instead of ~/.config/roam-blocks/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert markdown into a batch of create-block actions
    Convert(ConvertArgs),

    /// Convert a JSON outline (`[{"text", "level", "heading"?}]`) into a batch
    Outline(OutlineArgs),

    /// Render fetched block rows (JSON) as page markdown
    Render(RenderArgs),
}

#[derive(clap::Args)]
struct ConvertArgs {
    /// Markdown file to read; stdin when omitted
    file: Option<PathBuf>,

    /// Uid of the page or block the new blocks go under
    #[arg(long)]
    parent: String,

    /// Placement of top-level blocks: first, last or an index
    #[arg(long)]
    order: Option<BlockOrder>,

    /// Make the first line a heading of this size (1-3)
    #[arg(long)]
    heading: Option<u8>,

    /// Spaces per nesting level in the input
    #[arg(long)]
    indent: Option<usize>,

    /// How block uids are generated: sequential or random
    #[arg(long)]
    uid_strategy: Option<UidStrategy>,

    /// Fail when the input produces no blocks
    #[arg(long)]
    require_blocks: bool,
}

#[derive(clap::Args)]
struct OutlineArgs {
    /// JSON outline file to read; stdin when omitted
    file: Option<PathBuf>,

    /// Uid of the page or block the new blocks go under
    #[arg(long)]
    parent: String,

    /// Placement of top-level blocks: first, last or an index
    #[arg(long)]
    order: Option<BlockOrder>,
}

#[derive(clap::Args)]
struct RenderArgs {
    /// JSON block rows file to read; stdin when omitted
    file: Option<PathBuf>,

    /// Uid of the page the rows belong to
    #[arg(long)]
    page_uid: String,

    /// Page title, printed as the top heading
    #[arg(long)]
    title: String,
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    let output = match cli.command {
        Command::Convert(args) => run_convert(args, &config)?,
        Command::Outline(args) => run_outline(args, &config)?,
        Command::Render(args) => run_render(args)?,
    };
    println!("{output}");
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let config_path = match path {
        Some(path) => Config::expand_path(path),
        None => Config::config_path(),
    };
    log::debug!("Config path: {}", config_path.display());

    match Config::load_from_path(&config_path)? {
        Some(config) => Ok(config),
        None if path.is_some() => {
            anyhow::bail!("Config file not found: {}", config_path.display())
        }
        None => Ok(Config::default()),
    }
}

fn convert_options(args: &ConvertArgs, config: &Config) -> ConvertOptions {
    let defaults = config.convert_options();
    ConvertOptions {
        indent_width: args.indent.unwrap_or(defaults.indent_width),
        order: args.order.unwrap_or(defaults.order),
        heading: args.heading,
        uid_strategy: args.uid_strategy.unwrap_or(defaults.uid_strategy),
    }
}

fn run_convert(args: ConvertArgs, config: &Config) -> Result<String> {
    let text = read_input(args.file.as_deref())?;
    let options = convert_options(&args, config);

    let mut batch = convert_markdown(&text, &args.parent, &options)?;
    if args.require_blocks {
        batch = batch.ensure_not_empty()?;
    }
    log::info!("Converted input into {} blocks", batch.len());
    Ok(serde_json::to_string_pretty(&batch)?)
}

fn run_outline(args: OutlineArgs, config: &Config) -> Result<String> {
    let items: Vec<OutlineItem> = read_json(args.file.as_deref())?;
    let mut options = config.convert_options();
    if let Some(order) = args.order {
        options.order = order;
    }

    let batch = convert_outline(&items, &args.parent, &options)?;
    log::info!("Converted outline into {} blocks", batch.len());
    Ok(serde_json::to_string_pretty(&batch)?)
}

fn run_render(args: RenderArgs) -> Result<String> {
    let rows: Vec<BlockRow> = read_json(args.file.as_deref())?;
    let nodes = assemble_page(&args.page_uid, &rows);
    Ok(render_page(&args.title, &nodes))
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

fn read_json<T: DeserializeOwned>(file: Option<&Path>) -> Result<T> {
    let text = read_input(file)?;
    let source = file.map_or_else(|| "stdin".to_string(), |p| p.display().to_string());
    serde_json::from_str(&text).with_context(|| format!("Invalid JSON in {source}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("roam-blocks").chain(args.iter().copied())).unwrap()
    }

    fn convert_args(file: &Path, extra: &[&str]) -> ConvertArgs {
        let mut args = vec!["convert", file.to_str().unwrap(), "--parent", "p"];
        args.extend_from_slice(extra);
        let Command::Convert(args) = parse(&args).command else {
            panic!("expected convert");
        };
        args
    }

    #[test]
    fn flags_override_config() {
        let cli = parse(&[
            "convert",
            "--parent",
            "p",
            "--order",
            "2",
            "--indent",
            "4",
            "--uid-strategy",
            "random",
        ]);
        let Command::Convert(args) = cli.command else {
            panic!("expected convert");
        };
        let config = Config {
            order: BlockOrder::First,
            ..Config::default()
        };
        let options = convert_options(&args, &config);
        assert_eq!(options.order, BlockOrder::Index(2));
        assert_eq!(options.indent_width, 4);
        assert_eq!(options.uid_strategy, UidStrategy::Random);
    }

    #[test]
    fn config_fills_missing_flags() {
        let cli = parse(&["convert", "--parent", "p", "--heading", "2"]);
        let Command::Convert(args) = cli.command else {
            panic!("expected convert");
        };
        let config = Config {
            order: BlockOrder::First,
            indent_width: 3,
            ..Config::default()
        };
        let options = convert_options(&args, &config);
        assert_eq!(options.order, BlockOrder::First);
        assert_eq!(options.indent_width, 3);
        assert_eq!(options.heading, Some(2));
    }

    #[test]
    fn rejects_bad_order() {
        let result = Cli::try_parse_from([
            "roam-blocks",
            "convert",
            "--parent",
            "p",
            "--order",
            "middle",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn global_config_flag_after_subcommand() {
        let cli = parse(&[
            "render",
            "--page-uid",
            "u",
            "--title",
            "T",
            "--config",
            "/tmp/c.toml",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/c.toml")));
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent.toml");
        let err = load_config(Some(path.as_path())).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn explicit_config_is_loaded() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "order = \"first\"\nindent_width = 4\n").unwrap();
        let config = load_config(Some(path.as_path())).unwrap();
        assert_eq!(config.order, BlockOrder::First);
        assert_eq!(config.indent_width, 4);
    }

    #[test]
    fn require_blocks_rejects_blank_input() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("blank.md");
        std::fs::write(&file, "  \n\n").unwrap();

        let err = run_convert(convert_args(&file, &["--require-blocks"]), &Config::default())
            .unwrap_err();
        assert!(err.to_string().contains("no blocks"));

        let output = run_convert(convert_args(&file, &[]), &Config::default()).unwrap();
        assert!(output.contains("batch-actions"));
    }

    #[test]
    fn converts_markdown_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("notes.md");
        std::fs::write(&file, "# Notes\n- *one*\n").unwrap();

        let output = run_convert(convert_args(&file, &[]), &Config::default()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        let actions = json["actions"].as_array().unwrap();
        assert_eq!(actions.len(), 2);
        assert_eq!(actions[1]["block"]["string"], "__one__");
    }
}
