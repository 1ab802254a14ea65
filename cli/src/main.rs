//! CLI entrypoint for petmatch
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use petmatch_application::{
    BrowseCatalogUseCase, ClassifierChoice, GalleryError, GalleryNotifier, ManageFavoritesUseCase,
    NewFavorite, VoteError,
};
use petmatch_domain::{FilterQuery, OutputFormat, PetRecord, ViewMode};
use petmatch_infrastructure::{
    ConfigLoader, ConfiguredClassifier, FileConfig, FileLoggingConfig, HttpCatalogService,
};
use petmatch_presentation::{
    Cli, Command, NoticeOnly, OutputConfig, OutputFormatter, ProgressReporter, QuizRepl,
    formatter_for,
};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.show_config {
        for line in ConfigLoader::describe_sources(cli.config.as_deref()) {
            println!("{}", line);
        }
        return Ok(ExitCode::SUCCESS);
    }

    let mut file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("failed to load configuration: {}", e))?
    };

    if let Some(base_url) = &cli.base_url {
        file_config.api.base_url = base_url.clone();
    }

    let _log_guard = init_logging(cli.verbose, &file_config.logging)?;
    info!("Starting petmatch");

    for issue in file_config.ensure_valid()? {
        warn!("{}", issue.message);
    }

    let output = output_config(&file_config, &cli);
    output.apply_color();
    let formatter = formatter_for(output.format, output.description_width);

    // === Dependency Injection ===
    let api = file_config.api.to_api_config();
    info!("Catalog service at {}", api.base_url);
    let service = Arc::new(HttpCatalogService::new(api)?);

    let notifier: Box<dyn GalleryNotifier> = if cli.quiet {
        Box::new(NoticeOnly)
    } else {
        Box::new(ProgressReporter::new())
    };

    let browse = BrowseCatalogUseCase::new(Arc::clone(&service));
    let favorites = ManageFavoritesUseCase::new(Arc::clone(&service));

    match cli.command() {
        Command::List(args) => {
            let view = browse.load_with_progress(ViewMode::Home, notifier.as_ref()).await?;
            println!("{}", formatter.format_listing(&view, &args.to_query()));
        }
        Command::Favorites(args) => {
            let view = browse
                .load_with_progress(ViewMode::Favorites, notifier.as_ref())
                .await?;
            println!("{}", formatter.format_listing(&view, &args.to_query()));
        }
        Command::Categories { favorites } => {
            let mode = if favorites {
                ViewMode::Favorites
            } else {
                ViewMode::Home
            };
            let view = browse.load_with_progress(mode, notifier.as_ref()).await?;
            println!("{}", formatter.format_categories(&view.category_options()));
        }
        Command::Favorite {
            image_url,
            category,
            comment,
        } => {
            let mut favorite = NewFavorite::new(image_url, category);
            if let Some(comment) = comment {
                favorite = favorite.with_comment(comment);
            }
            match favorites.add_with_notifier(favorite, notifier.as_ref()).await {
                Ok(record) => print_record(&output, formatter.as_ref(), &record),
                // Already saved: nothing changed, the notice says so
                Err(GalleryError::Conflict(_)) => {}
                Err(_) => return Ok(ExitCode::FAILURE),
            }
        }
        Command::Vote { id, direction } => {
            match favorites.vote(&id, direction, notifier.as_ref()).await {
                Ok(record) => print_record(&output, formatter.as_ref(), &record),
                Err(VoteError::Invalid(e)) => bail!(e),
                Err(VoteError::Gallery(_)) => return Ok(ExitCode::FAILURE),
            }
        }
        Command::Quiz { local } => {
            let choice = if local {
                ClassifierChoice::Local
            } else {
                file_config.quiz.parse_classifier().0
            };
            info!("Quiz classifier: {}", choice.as_str());
            let classifier = Arc::new(ConfiguredClassifier::from_choice(
                choice,
                service.as_ref().clone(),
            ));

            let repl = QuizRepl::new(Arc::clone(&service), classifier)
                .with_progress(!cli.quiet)
                .with_description_width(output.description_width);

            if let Some(next) = repl.run().await? {
                let view = browse.load_with_progress(next, notifier.as_ref()).await?;
                println!(
                    "{}",
                    formatter.format_listing(&view, &FilterQuery::everything())
                );
            }
        }
        Command::Adopt => {
            println!("{}", formatter.format_adoption());
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Resolve output settings: `-o` beats `[output] format`
fn output_config(file_config: &FileConfig, cli: &Cli) -> OutputConfig {
    OutputConfig {
        format: file_config.output.format.unwrap_or_default(),
        color: file_config.output.color,
        description_width: file_config.output.description_width,
    }
    .with_format_override(cli.output.map(Into::into))
}

/// Action results go to stdout only as JSON; the notice already covers the table case
fn print_record(
    output: &OutputConfig,
    formatter: &dyn OutputFormatter,
    record: &PetRecord,
) {
    if output.format == OutputFormat::Json {
        println!("{}", formatter.format_record(record));
    }
}

/// Initialize logging based on verbosity level and the `[logging]` section
///
/// The returned guard flushes the log file on drop.
fn init_logging(verbose: u8, logging: &FileLoggingConfig) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let directive = match (&logging.filter, verbose) {
        (Some(filter), 0) => filter.as_str(),
        _ => level,
    };
    let filter = EnvFilter::try_new(directive)
        .with_context(|| format!("invalid log filter '{}'", directive))?;

    let (file_layer, guard) = match &logging.file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let name = path
                .file_name()
                .ok_or_else(|| anyhow!("log file has no file name: {}", path.display()))?;
            std::fs::create_dir_all(dir)
                .with_context(|| format!("cannot create log directory {}", dir.display()))?;

            let (writer, guard) =
                tracing_appender::non_blocking(tracing_appender::rolling::never(dir, name));
            let layer = fmt::layer().with_writer(writer).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(file_layer)
        .init();

    Ok(guard)
}
