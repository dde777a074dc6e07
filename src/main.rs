use anyhow::{Context, Result};
use cli::{Cli, Commands};
use gradtensor_assets::config::Configuration;
use gradtensor_assets::syllabus::{Syllabus, SyllabusConfig};
use gradtensor_assets::wordmark::WordmarkConfig;
use indicatif::{ProgressBar, ProgressStyle};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;

fn main() -> ExitCode {
    if let Err(e) = try_main() {
        eprintln!("{}: {e:#}", console::style("Error").red());
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn try_main() -> Result<()> {
    use clap::Parser;
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match &cli.command {
        Some(Commands::Config(args)) => {
            Configuration::write_default(&cli.config, args.force)?;
            println!("{} written!", cli.config.display());
            Ok(())
        }
        Some(Commands::Curriculum) => {
            print!("{}", Syllabus::default().to_toml()?);
            Ok(())
        }
        Some(Commands::Wordmark) => {
            let config = Configuration::load(&cli.config)?;
            render_wordmark(&config.wordmark)
        }
        Some(Commands::Syllabus) => {
            let config = Configuration::load(&cli.config)?;
            render_syllabus(&config.syllabus)
        }
        None | Some(Commands::All) => {
            let Configuration { wordmark, syllabus } = Configuration::load(&cli.config)?;
            render_wordmark(&wordmark)?;
            render_syllabus(&syllabus)
        }
    }
}

fn init_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "gradtensor_assets=debug,warn"
        } else {
            "warn"
        })
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn render_wordmark(config: &WordmarkConfig) -> Result<()> {
    let stats = config
        .render()
        .with_context(|| "Failed to render wordmark")?;
    println!("{}", stats.report(&config.outfile));
    Ok(())
}

fn render_syllabus(config: &SyllabusConfig) -> Result<()> {
    let progress = ProgressBar::new(0);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .expect("can parse progress style")
            .progress_chars("#>-"),
    );
    progress.set_message("Laying out syllabus...");

    let stats = config
        .render(&progress)
        .with_context(|| "Failed to render PDF")?;

    let file_size = byte_unit::Byte::from_u64(stats.file_size)
        .get_appropriate_unit(byte_unit::UnitType::Binary);
    println!("PDF generated: {}", config.outfile.display());
    println!("  Pages: {}", stats.page_count);
    println!("  Size:  {file_size:.1}");
    Ok(())
}
