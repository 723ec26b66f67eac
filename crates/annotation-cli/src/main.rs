// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `amf-annotations`: inspect annotations in AMF JSON-LD models.
//!
//! # Usage
//! ```text
//! amf-annotations list <model.json>
//! amf-annotations show <model.json> --shape <name|@id> [--format text|json|html]
//! ```
//!
//! Extraction options come from the stored config (see `--config-dir`) and
//! can be overridden per invocation; `--save-config` persists the result.
//! The CLI exits with code `0` on success and non-zero when the model cannot
//! be read or the shape does not exist.

// The CLI is expected to print to stdout/stderr.
#![allow(clippy::print_stdout, clippy::print_stderr)]

use amf_vocab::{declares, find_by_id, find_declared, shape_name, AmfContext};
use annotation_config_fs::FsConfigStore;
use annotation_core::config::ConfigService;
use annotation_core::{EmptyPolicy, ExtractOptions, Extractor, NameSource, NameTerm};
use annotation_view::{display_items, present, DisplayValue, HtmlView};
use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use comfy_table::{presets::UTF8_FULL, Table};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "amf-annotations",
    version,
    about = "Inspect annotations (custom domain properties) in AMF models",
    disable_help_subcommand = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Where the annotation name is read from.
    #[arg(long, value_enum, global = true)]
    name_source: Option<NameSourceArg>,

    /// Vocabulary term holding the annotation name.
    #[arg(long, value_enum, global = true)]
    name_term: Option<NameTermArg>,

    /// Drop annotations that have neither a name nor a value.
    #[arg(long, global = true)]
    drop_empty: bool,

    /// Directory holding stored options (defaults to the platform config dir).
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,

    /// Persist the effective options.
    #[arg(long, global = true)]
    save_config: bool,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List declared types with their annotation counts.
    List {
        /// Path to an AMF JSON-LD model.
        model: PathBuf,
    },
    /// Show the annotations of one shape.
    Show {
        /// Path to an AMF JSON-LD model.
        model: PathBuf,
        /// Declared type name or node `@id`.
        #[arg(long)]
        shape: String,
        /// Output format.
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum NameSourceArg {
    Reference,
    Property,
}

impl From<NameSourceArg> for NameSource {
    fn from(arg: NameSourceArg) -> Self {
        match arg {
            NameSourceArg::Reference => Self::Reference,
            NameSourceArg::Property => Self::Property,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum NameTermArg {
    Extension,
    Legacy,
    Either,
}

impl From<NameTermArg> for NameTerm {
    fn from(arg: NameTermArg) -> Self {
        match arg {
            NameTermArg::Extension => Self::Extension,
            NameTermArg::Legacy => Self::Legacy,
            NameTermArg::Either => Self::Either,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
    Html,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let options = effective_options(&cli)?;
    debug!(?options, "extraction options");

    match &cli.command {
        Commands::List { model } => run_list(model, options),
        Commands::Show {
            model,
            shape,
            format,
        } => run_show(model, shape, *format, options),
    }
}

fn init_tracing(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.parse()?))
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn open_store(dir: Option<&Path>) -> Result<FsConfigStore> {
    let store = match dir {
        Some(dir) => FsConfigStore::at(dir),
        None => FsConfigStore::new(),
    };
    store.context("failed to open config store")
}

/// Stored options overlaid with command-line flags.
fn effective_options(cli: &Cli) -> Result<ExtractOptions> {
    let service = match open_store(cli.config_dir.as_deref()) {
        Ok(store) => Some(ConfigService::new(store)),
        Err(err) if !cli.save_config => {
            warn!(error = %err, "config store unavailable; using defaults");
            None
        }
        Err(err) => return Err(err),
    };
    let mut options = service
        .as_ref()
        .map(ConfigService::load_options)
        .unwrap_or_default();
    apply_overrides(&mut options, cli);

    if cli.save_config {
        if let Some(service) = &service {
            service
                .save_options(&options)
                .context("failed to save options")?;
            info!("options saved");
        }
    }
    Ok(options)
}

fn apply_overrides(options: &mut ExtractOptions, cli: &Cli) {
    if let Some(source) = cli.name_source {
        options.name_source = source.into();
    }
    if let Some(term) = cli.name_term {
        options.name_term = term.into();
    }
    if cli.drop_empty {
        options.empty_policy = EmptyPolicy::DropEmpty;
    }
}

fn load_model(path: &Path) -> Result<Value> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read model {}", path.display()))?;
    let model: Value = serde_json::from_str(&raw)
        .with_context(|| format!("model {} is not valid JSON", path.display()))?;
    info!(path = %path.display(), "model loaded");
    Ok(model)
}

fn run_list(path: &Path, options: ExtractOptions) -> Result<()> {
    let model = load_model(path)?;
    let ctx = AmfContext::from_model(&model);
    let extractor = Extractor::with_options(&ctx, options);

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Name", "@id", "Annotations"]);
    for shape in declares(&ctx, &model) {
        let name = shape_name(&ctx, shape).unwrap_or_else(|| "-".to_owned());
        let id = shape.get("@id").and_then(Value::as_str).unwrap_or("-");
        let count = extractor.references(shape).len();
        table.add_row(vec![name, id.to_owned(), count.to_string()]);
    }
    println!("{table}");
    Ok(())
}

fn run_show(path: &Path, selector: &str, format: Format, options: ExtractOptions) -> Result<()> {
    let model = load_model(path)?;
    let ctx = AmfContext::from_model(&model);
    let shape = find_declared(&ctx, &model, selector)
        .or_else(|_| find_by_id(&ctx, &model, selector))
        .with_context(|| format!("shape `{selector}` not found in {}", path.display()))?
        .clone();

    let mut document = annotation_core::AnnotationDocument::with_options(&ctx, options);
    document.set_shape(Some(Arc::new(shape)));

    match format {
        Format::Json => {
            println!("{}", serde_json::to_string_pretty(document.custom_list())?);
        }
        Format::Html => {
            let mut view = HtmlView::new();
            present(&document, &mut view);
            println!("{}", view.to_html());
        }
        Format::Text => {
            if !document.has_custom_properties() {
                println!("{selector} has no annotations");
                return Ok(());
            }
            print!("{}", render_text(&display_items(document.custom_list())));
        }
    }
    Ok(())
}

fn render_text(items: &[annotation_view::DisplayItem]) -> String {
    let mut out = String::new();
    for item in items {
        let name = item.name.as_deref().unwrap_or("(unnamed)");
        match &item.value {
            DisplayValue::None => out.push_str(&format!("{name}\n")),
            DisplayValue::Scalar(value) => out.push_str(&format!("{name}: {value}\n")),
            DisplayValue::Pairs(pairs) => {
                out.push_str(&format!("{name}\n"));
                for (label, value) in pairs {
                    out.push_str(&format!("  {label}: {value}\n"));
                }
            }
        }
    }
    out
}
