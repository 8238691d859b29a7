//! CLI entry point for pressroom

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pressroom::commands::new::PostArgs;

#[derive(Parser)]
#[command(name = "pressroom")]
#[command(version)]
#[command(about = "A file-backed blog content store with an administration CLI", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new site
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// List site content
    #[command(alias = "ls")]
    List {
        /// Type of content to list (post, tag, featured)
        #[arg(default_value = "post")]
        r#type: String,

        /// Page to show
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// Posts per page (defaults to the configured page size)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Only list posts carrying this tag
        #[arg(short, long)]
        tag: Option<String>,
    },

    /// Show a single post by slug
    Show {
        /// Post slug
        slug: String,
    },

    /// Create a new post
    New {
        #[command(flatten)]
        args: PostArgs,
    },

    /// Edit an existing post
    Edit {
        /// Post id
        id: u64,

        #[command(flatten)]
        args: PostArgs,
    },

    /// Delete a post by id
    #[command(alias = "rm")]
    Delete {
        /// Post id
        id: u64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "pressroom=debug,info"
    } else {
        "pressroom=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = cli.cwd.unwrap_or_else(|| std::env::current_dir().unwrap());

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing site in {:?}", target_dir);
            pressroom::commands::init::run(&target_dir)?;
        }

        Commands::List {
            r#type,
            page,
            limit,
            tag,
        } => {
            let app = pressroom::Pressroom::new(&base_dir)?;
            let limit = limit.unwrap_or(app.config.per_page);
            if limit == 0 {
                anyhow::bail!("--limit must be at least 1");
            }
            pressroom::commands::list::run(&app, &r#type, page, limit, tag.as_deref())?;
        }

        Commands::Show { slug } => {
            let app = pressroom::Pressroom::new(&base_dir)?;
            pressroom::commands::show::run(&app, &slug)?;
        }

        Commands::New { args } => {
            let app = pressroom::Pressroom::new(&base_dir)?;
            tracing::info!("Creating new post");
            pressroom::commands::new::run(&app, &args)?;
        }

        Commands::Edit { id, args } => {
            let app = pressroom::Pressroom::new(&base_dir)?;
            pressroom::commands::edit::run(&app, id, &args)?;
        }

        Commands::Delete { id } => {
            let app = pressroom::Pressroom::new(&base_dir)?;
            pressroom::commands::delete::run(&app, id)?;
        }
    }

    Ok(())
}
