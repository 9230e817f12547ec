//! Generate command implementation.
//!
//! Reads quotes from a text file and writes one wallpaper per non-empty
//! line as `1.jpg`, `2.jpg`, … in the output directory.

use std::fs;
use std::path::{Path, PathBuf};

use clap::builder::RangedU64ValueParser;
use clap::Args;

use crate::config::{Config, Settings, MAX_DIMENSION};
use crate::error::{QuotewallError, Result};
use crate::output::{display_path, plural, Printer};
use crate::render::{FontLoader, Renderer, Typeface};
use crate::text::TextCase;

/// Generate wallpapers from a text file (the default command)
#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Input text file, one quote per line [default: texts.txt]
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output directory [default: output]
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Image width in pixels [default: 1920]
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=MAX_DIMENSION as i64))]
    pub width: Option<u32>,

    /// Image height in pixels [default: 1080]
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=MAX_DIMENSION as i64))]
    pub height: Option<u32>,

    /// Background colour, named or #RRGGBB [default: black]
    #[arg(long = "bg", visible_alias = "background", value_name = "COLOR")]
    pub background: Option<String>,

    /// Text colour, named or #RRGGBB [default: white]
    #[arg(long = "fg", visible_alias = "foreground", value_name = "COLOR")]
    pub foreground: Option<String>,

    /// Font file to use instead of searching system fonts
    #[arg(long, value_name = "FILE")]
    pub font: Option<PathBuf>,

    /// Font size in pixels [default: 30]
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub font_size: Option<u32>,

    /// Maximum characters per line [default: 30]
    #[arg(long, value_name = "CHARS", value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pub text_width: Option<usize>,

    /// Spacing between lines in pixels [default: 15]
    #[arg(long, value_name = "PX")]
    pub line_spacing: Option<u32>,

    /// Text case transformation [default: uppercase]
    #[arg(long, value_enum)]
    pub text_case: Option<TextCase>,

    /// Settings file [default: quotewall.yaml when present]
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl GenerateArgs {
    /// The command-line layer of configuration.
    pub fn overrides(&self) -> Settings {
        Settings {
            input: self.input.clone(),
            output: self.output.clone(),
            width: self.width,
            height: self.height,
            background: self.background.clone(),
            foreground: self.foreground.clone(),
            font: self.font.clone(),
            fonts: None,
            font_size: self.font_size,
            text_width: self.text_width,
            line_spacing: self.line_spacing,
            text_case: self.text_case,
        }
    }

    /// Build the run configuration: defaults, then settings file, then flags.
    pub fn resolve_config(&self, dir: &Path) -> Result<Config> {
        let settings = Settings::discover(self.config.as_deref(), dir)?;
        Config::default()
            .merge(&settings)
            .merge(&self.overrides())
            .validate()
    }
}

/// Result of rendering one quote.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemOutcome {
    Generated { index: usize, path: PathBuf },
    Failed { index: usize, reason: String },
}

impl ItemOutcome {
    pub fn is_generated(&self) -> bool {
        matches!(self, ItemOutcome::Generated { .. })
    }
}

/// Per-item outcomes of a run, in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    pub outcomes: Vec<ItemOutcome>,
}

impl Summary {
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_generated()).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.succeeded()
    }

    /// `Ok` when every item was generated.
    pub fn into_result(self) -> Result<()> {
        match self.failed() {
            0 => Ok(()),
            failed => Err(QuotewallError::Incomplete {
                failed,
                total: self.total(),
            }),
        }
    }
}

pub fn run(args: GenerateArgs, printer: &Printer) -> Result<()> {
    let config = args.resolve_config(Path::new("."))?;

    check_input(&config.input)?;
    prepare_output(&config.output)?;
    printer.info("Output", &display_path(&absolute(&config.output)));

    let font = FontLoader::from_config(&config).load(config.font_size)?;
    printer.status(
        "Loaded",
        &format!("font {} ({}px)", display_path(font.path()), font.size()),
    );

    let quotes = read_quotes(&config.input)?;
    printer.info(
        "Generating",
        &format!(
            "{} at {}x{}, {} on {}",
            plural(quotes.len(), "wallpaper", "wallpapers"),
            config.width,
            config.height,
            config.foreground,
            config.background
        ),
    );

    let summary = generate_all(&config, &font, &quotes, printer);

    let done = format!(
        "{}/{} wallpapers in {}",
        summary.succeeded(),
        summary.total(),
        display_path(&absolute(&config.output))
    );
    if summary.failed() == 0 {
        printer.success("Finished", &done);
    } else {
        printer.warning("Finished", &done);
    }

    summary.into_result()
}

/// Fail unless the input file exists.
pub fn check_input(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(QuotewallError::InputMissing {
            path: path.to_path_buf(),
        })
    }
}

/// Create the output directory (and parents) if needed.
pub fn prepare_output(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        return Ok(());
    }

    fs::create_dir_all(dir).map_err(|e| QuotewallError::Io {
        path: dir.to_path_buf(),
        message: format!("Could not create output directory: {}", e),
    })
}

/// Read the input file and keep its trimmed, non-empty lines.
pub fn read_quotes(path: &Path) -> Result<Vec<String>> {
    let source = fs::read_to_string(path).map_err(|e| QuotewallError::Io {
        path: path.to_path_buf(),
        message: format!("Could not read input file: {}", e),
    })?;

    let quotes: Vec<String> = source
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect();

    if quotes.is_empty() {
        return Err(QuotewallError::EmptyInput {
            path: path.to_path_buf(),
        });
    }

    Ok(quotes)
}

/// Render every quote in order, recording each outcome.
///
/// A failed item is reported and skipped; it never stops the run.
pub fn generate_all<T: Typeface + ?Sized>(
    config: &Config,
    typeface: &T,
    quotes: &[String],
    printer: &Printer,
) -> Summary {
    let renderer = Renderer::new(config, typeface);
    let total = quotes.len();
    let mut summary = Summary::default();

    for (i, quote) in quotes.iter().enumerate() {
        let index = i + 1;
        let path = config.output.join(format!("{}.jpg", index));

        let outcome = match renderer.render_to(quote, &path) {
            Ok(()) => {
                tracing::debug!(index, path = %path.display(), "generated wallpaper");
                ItemOutcome::Generated { index, path }
            }
            Err(e) => {
                printer.warning("Failed", &format!("image {}: {}", index, e));
                ItemOutcome::Failed {
                    index,
                    reason: e.to_string(),
                }
            }
        };

        summary.outcomes.push(outcome);
        printer.progress(index, total);
    }

    summary
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
