//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "global-styles", version, about = "Resolve and edit theme global styles")]
pub struct Cli {
    /// YAML configuration file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Core defaults JSON, instead of the bundled ones
    #[arg(long, global = true, value_name = "FILE")]
    pub core: Option<PathBuf>,

    /// Directory of the active theme
    #[arg(long, global = true, value_name = "DIR")]
    pub theme_dir: Option<PathBuf>,

    /// Directory holding user style records
    #[arg(long, global = true, value_name = "DIR", default_value = ".global-styles")]
    pub store: PathBuf,

    /// Theme text domain, overriding the configuration
    #[arg(long, global = true, value_name = "NAME")]
    pub text_domain: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the resolved styles
    Resolve {
        #[arg(long, value_enum, default_value_t = Format::Css)]
        format: Format,
    },
    /// Save color edits to the user record
    SetColor(ColorArgs),
    /// Save typography edits to the user record
    SetTypography(TypographyArgs),
    /// Create the user record if missing and print its id
    Init,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// `:root { ... }` custom properties
    Css,
    /// The CSS inside a `<style>` element
    Tag,
    /// The resolved tree as JSON
    Json,
    /// The resolved tree as YAML
    Yaml,
}

#[derive(Args, Debug)]
pub struct ColorArgs {
    #[arg(long)]
    pub text: Option<String>,
    #[arg(long)]
    pub background: Option<String>,
    #[arg(long)]
    pub primary: Option<String>,
}

#[derive(Args, Debug)]
pub struct TypographyArgs {
    /// Base font size in pixels
    #[arg(long)]
    pub font_size: Option<f64>,
    /// Ratio between heading levels
    #[arg(long)]
    pub font_scale: Option<f64>,
    #[arg(long)]
    pub line_height: Option<f64>,
    #[arg(long)]
    pub font_weight: Option<f64>,
}
