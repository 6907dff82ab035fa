mod config;
mod logging;
mod ui;

use std::path::PathBuf;
use std::process::ExitCode;
use std::rc::Rc;

use clap::{Parser, Subcommand};
use config::AppConfig;
use template_picker_adapters::{
    present_cell_row, present_gallery_json, present_overlay, present_selection,
    SqliteSelectionStore, WalkdirCatalogProvider,
};
use template_picker_application::{ApplicationError, GalleryController};
use template_picker_domain::TemplateId;
use tracing::error;

#[derive(Debug, Parser)]
#[command(name = "template-picker", about = "Choose a template from a gallery of images")]
struct Cli {
    /// TOML file overriding the default settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Folder holding the template images
    #[arg(long, global = true)]
    assets: Option<PathBuf>,

    /// Sqlite file storing the selected template
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
enum Command {
    /// Open the gallery window
    Ui,
    /// Print every template, marking the selected one
    List {
        #[arg(long)]
        json: bool,
    },
    /// Make a template the selected one
    Select { template_id: u32 },
    /// Print the preview caption and image of a template
    Preview { template_id: u32 },
    /// Print the selected template
    Current,
}

#[derive(Debug, Clone)]
enum CommandError {
    Usage(String),
    Runtime(String),
}

impl CommandError {
    fn from_application(context: &str, error: ApplicationError) -> Self {
        match error {
            ApplicationError::Domain(_) | ApplicationError::InvalidInput(_) => {
                Self::Usage(format!("{context}: {error}"))
            }
            other => Self::Runtime(format!("{context}: {other}")),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("failed to load config: {error}");
            return ExitCode::from(2);
        }
    };
    logging::init_logging(&config.log_filter);

    match run_command(cli.command.unwrap_or(Command::Ui), &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CommandError::Usage(msg)) => {
            eprintln!("{msg}");
            ExitCode::from(2)
        }
        Err(CommandError::Runtime(msg)) => {
            error!("{msg}");
            eprintln!("{msg}");
            ExitCode::from(1)
        }
    }
}

fn load_config(cli: &Cli) -> Result<AppConfig, ApplicationError> {
    let base = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    Ok(base.with_overrides(cli.assets.clone(), cli.db.clone()))
}

fn build_store(config: &AppConfig) -> Result<Rc<SqliteSelectionStore>, CommandError> {
    let store = SqliteSelectionStore::new(config.selection_db_path.clone());
    store
        .initialize()
        .map_err(|error| CommandError::from_application("failed to open selection store", error))?;
    Ok(Rc::new(store))
}

fn build_controller(
    config: &AppConfig,
    store: Rc<SqliteSelectionStore>,
) -> Result<GalleryController, CommandError> {
    let provider = WalkdirCatalogProvider::new(config.assets_dir.clone());
    GalleryController::new(&provider, store)
        .map_err(|error| CommandError::from_application("failed to load templates", error))
}

fn parse_template_id(value: u32) -> Result<TemplateId, CommandError> {
    TemplateId::new(value)
        .map_err(|error| CommandError::Usage(format!("invalid template id: {error}")))
}

fn run_command(command: Command, config: &AppConfig) -> Result<(), CommandError> {
    let store = build_store(config)?;
    let mut controller = build_controller(config, Rc::clone(&store))?;

    match command {
        Command::Ui => ui::launch_window(controller, store, config).map_err(CommandError::Runtime),
        Command::List { json } => {
            let view = controller.render();
            if json {
                let text = present_gallery_json(&view)
                    .map_err(|error| CommandError::from_application("list failed", error))?;
                println!("{text}");
                return Ok(());
            }
            if view.cells.is_empty() {
                println!("no templates in {}", config.assets_dir.display());
                return Ok(());
            }
            for cell in &view.cells {
                println!("{}", present_cell_row(cell));
            }
            Ok(())
        }
        Command::Select { template_id } => {
            let id = parse_template_id(template_id)?;
            controller
                .select_template(id)
                .map_err(|error| CommandError::from_application("select failed", error))?;
            let stored = store
                .load()
                .map_err(|error| CommandError::from_application("select failed", error))?;
            if stored != Some(id) {
                return Err(CommandError::Runtime(format!(
                    "select failed: {} was not persisted",
                    id.label()
                )));
            }
            println!("{}", present_selection(stored));
            Ok(())
        }
        Command::Preview { template_id } => {
            let id = parse_template_id(template_id)?;
            let index = controller
                .catalog()
                .index_for(id)
                .map_err(|error| CommandError::Usage(format!("preview failed: {error}")))?;
            controller
                .on_thumbnail_activate(index)
                .map_err(|error| CommandError::from_application("preview failed", error))?;
            if let Some(overlay) = controller.render().overlay {
                println!("{}", present_overlay(&overlay));
            }
            Ok(())
        }
        Command::Current => {
            let selection = store
                .load()
                .map_err(|error| CommandError::from_application("current failed", error))?;
            println!("{}", present_selection(selection));
            Ok(())
        }
    }
}
