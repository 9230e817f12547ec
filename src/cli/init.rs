//! Init command implementation.
//!
//! Writes a `quotewall.yaml` holding the built-in defaults, ready to edit.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::config::{Config, SETTINGS_FILENAME};
use crate::error::{QuotewallError, Result};
use crate::output::{display_path, Printer};

/// Write a default quotewall.yaml settings file
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to write the settings file into
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// Overwrite an existing quotewall.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let settings_path = args.path.join(SETTINGS_FILENAME);

    if settings_path.exists() && !args.force {
        return Err(QuotewallError::Config {
            message: format!("{} already exists", SETTINGS_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    fs::write(&settings_path, template(&Config::default())).map_err(|e| QuotewallError::Io {
        path: settings_path.clone(),
        message: format!("Failed to write settings: {}", e),
    })?;

    printer.success("Created", &display_path(&settings_path));

    Ok(())
}

/// Settings file contents describing `config`.
pub fn template(config: &Config) -> String {
    let mut yaml = String::new();

    yaml.push_str("# quotewall settings; command-line flags take precedence.\n");
    yaml.push_str(&format!("input: {}\n", config.input.display()));
    yaml.push_str(&format!("output: {}\n", config.output.display()));
    yaml.push_str(&format!("width: {}\n", config.width));
    yaml.push_str(&format!("height: {}\n", config.height));
    yaml.push_str(&format!("background: \"{}\"\n", config.background));
    yaml.push_str(&format!("foreground: \"{}\"\n", config.foreground));
    yaml.push_str(&format!("font-size: {}\n", config.font_size));
    yaml.push_str(&format!("text-width: {}\n", config.text_width));
    yaml.push_str(&format!("line-spacing: {}\n", config.line_spacing));
    yaml.push_str(&format!("text-case: {}\n", config.text_case));

    yaml.push_str("\n# Use one font file:\n");
    yaml.push_str("# font: path/to/font.ttf\n");
    yaml.push_str("# Or replace the search list:\n");
    yaml.push_str("# fonts:\n");
    for candidate in &config.font_candidates {
        yaml.push_str(&format!("#   - \"{}\"\n", candidate.display()));
    }

    yaml
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use tempfile::tempdir;

    #[test]
    fn test_template_snapshot() {
        let config = Config {
            font_candidates: vec![PathBuf::from("PTMono.ttc"), PathBuf::from("/fonts/mono.ttf")],
            ..Config::default()
        };

        insta::assert_snapshot!(template(&config), @r###"
        # quotewall settings; command-line flags take precedence.
        input: texts.txt
        output: output
        width: 1920
        height: 1080
        background: "black"
        foreground: "white"
        font-size: 30
        text-width: 30
        line-spacing: 15
        text-case: uppercase

        # Use one font file:
        # font: path/to/font.ttf
        # Or replace the search list:
        # fonts:
        #   - "PTMono.ttc"
        #   - "/fonts/mono.ttf"
        "###);
    }

    #[test]
    fn test_template_parses_back_to_defaults() {
        let config = Config::default();
        let settings = Settings::parse(&template(&config)).unwrap();

        assert_eq!(Config::default().merge(&settings), config);
    }

    #[test]
    fn test_init_creates_settings() {
        let dir = tempdir().unwrap();
        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: false,
        };

        run(args, &Printer::plain()).unwrap();

        let written = fs::read_to_string(dir.path().join(SETTINGS_FILENAME)).unwrap();
        assert!(written.contains("width: 1920"));
    }

    #[test]
    fn test_init_refuses_overwrite() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(SETTINGS_FILENAME), "width: 10\n").unwrap();

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: false,
        };
        assert!(run(args, &Printer::plain()).is_err());

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: true,
        };
        run(args, &Printer::plain()).unwrap();

        let written = fs::read_to_string(dir.path().join(SETTINGS_FILENAME)).unwrap();
        assert!(written.contains("width: 1920"));
    }
}
