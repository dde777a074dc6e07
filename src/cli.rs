use clap::{Args, Parser, Subcommand};
use gradtensor_assets::config::DEFAULT_CONFIG_PATH;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Overwrite an existing configuration file
    #[clap(long)]
    pub force: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Renders the wordmark, then the syllabus (the default)
    All,
    /// Renders the wordmark PNG
    Wordmark,
    /// Renders the syllabus PDF
    Syllabus,
    /// Writes the default configuration file
    Config(ConfigArgs),
    /// Prints the built-in curriculum as TOML, ready to be edited
    Curriculum,
}

#[derive(Parser, Debug)]
#[clap(author, version, about)]
pub struct Cli {
    /// Configuration file; missing fields and a missing file fall back to defaults
    #[clap(short, long, env = "GRADTENSOR_ASSETS_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Log debug output
    #[clap(short, long)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Option<Commands>,
}
