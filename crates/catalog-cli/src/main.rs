//! CLI entry point - the composition root.
//!
//! Command dispatch routes to handlers which delegate to `CatalogCore`.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use catalog_cli::handlers::serve::ServeArgs;
use catalog_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = CliConfig::resolve(cli.backend, cli.data_dir.as_deref())?;

    match command {
        Commands::Serve {
            port,
            front_urls,
            cors_allow_all,
            max_upload_bytes,
        } => {
            let args = ServeArgs {
                port,
                front_urls,
                cors_allow_all,
                max_upload_bytes,
            };
            handlers::serve::execute(&config, args).await?;
        }
        Commands::Paths => {
            handlers::paths::execute(&config)?;
        }
        Commands::List => {
            let ctx = bootstrap(config).await?;
            handlers::list::execute(&ctx).await?;
        }
        Commands::Show { id } => {
            let ctx = bootstrap(config).await?;
            handlers::show::execute(&ctx, id).await?;
        }
        Commands::Add {
            name,
            category,
            image,
        } => {
            let ctx = bootstrap(config).await?;
            handlers::add::execute(&ctx, &name, &category, image.as_deref()).await?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    // Load environment variables before anything reads them
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {err:#}");
        let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
        std::process::exit(code);
    }
}
