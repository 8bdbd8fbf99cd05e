//! Command execution.

use std::io::Write;

use anyhow::{bail, Context, Result};
use global_styles::{
    ColorTokens, CoreDefaults, FileStore, GlobalStyles, GlobalStylesConfig, ThemeLayer,
    TypographyTokens,
};
use tracing::debug;

use crate::cli::{Cli, ColorArgs, Command, Format, TypographyArgs};

/// Runs `cli`, writing command output to `out`.
pub fn run<W: Write>(cli: Cli, out: &mut W) -> Result<()> {
    let styles = open(&cli)?;
    debug!(
        record = %styles.user().id(),
        theme_support = styles.has_theme_support(),
        "context ready"
    );

    match cli.command {
        Command::Resolve { format } => resolve(&styles, format, out),
        Command::SetColor(args) => set_color(&styles, args, out),
        Command::SetTypography(args) => set_typography(&styles, args, out),
        Command::Init => {
            let id = styles.user().ensure_record()?;
            writeln!(out, "{}", id)?;
            Ok(())
        }
    }
}

fn open(cli: &Cli) -> Result<GlobalStyles<FileStore>> {
    let mut config = match &cli.config {
        Some(path) => GlobalStylesConfig::from_file(path)
            .with_context(|| format!("loading configuration {}", path.display()))?,
        None => GlobalStylesConfig::default(),
    };
    if let Some(domain) = &cli.text_domain {
        config.text_domain = domain.clone();
    }

    let core = match &cli.core {
        Some(path) => CoreDefaults::from_file(path)?,
        None => CoreDefaults::bundled()?,
    };
    let theme = cli
        .theme_dir
        .as_deref()
        .and_then(|dir| ThemeLayer::discover(dir, &config.theme_file_name));

    Ok(GlobalStyles::new(config, core, theme, FileStore::new(&cli.store)))
}

fn resolve<W: Write>(styles: &GlobalStyles<FileStore>, format: Format, out: &mut W) -> Result<()> {
    let resolved = styles.resolve()?;
    match format {
        Format::Css => {
            if let Some(css) = styles.one_shot_sink().render(&resolved.stylesheet) {
                writeln!(out, "{}", css)?;
            }
        }
        Format::Tag => {
            if let Some(tag) = styles.one_shot_sink().render_tag(&resolved.stylesheet) {
                writeln!(out, "{}", tag)?;
            }
        }
        Format::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(&resolved.tree)?)?;
        }
        Format::Yaml => {
            write!(out, "{}", serde_yaml::to_string(&resolved.tree)?)?;
        }
    }
    Ok(())
}

fn set_color<W: Write>(styles: &GlobalStyles<FileStore>, args: ColorArgs, out: &mut W) -> Result<()> {
    let colors = ColorTokens {
        text: args.text,
        background: args.background,
        primary: args.primary,
    };
    if colors.is_empty() {
        bail!("nothing to set: pass --text, --background or --primary");
    }
    let saved = styles.user().set_color(&colors)?;
    writeln!(out, "{}", serde_json::to_string_pretty(&saved)?)?;
    Ok(())
}

fn set_typography<W: Write>(
    styles: &GlobalStyles<FileStore>,
    args: TypographyArgs,
    out: &mut W,
) -> Result<()> {
    let typography = TypographyTokens {
        font_size: args.font_size,
        font_scale: args.font_scale,
        line_height: args.line_height,
        font_weight: args.font_weight,
    };
    if typography.is_empty() {
        bail!("nothing to set: pass at least one typography value");
    }
    let saved = styles.user().set_typography(&typography)?;
    writeln!(out, "{}", serde_json::to_string_pretty(&saved)?)?;
    Ok(())
}
