mod config;
mod observer;
mod state;
mod ui;

use clap::Parser;
use eframe::egui;
use snake3d_common::games::snake::{GameSession, SessionRunner};
use snake3d_common::log;
use snake3d_common::logger;
use snake3d_common::persistence::{BestScoreStore, FileBestScoreStore, InMemoryBestScoreStore};

use config::{get_config_manager, Config};
use observer::UiObserver;
use state::SharedState;
use ui::SnakeApp;

#[derive(Parser)]
#[command(name = "snake3d")]
struct Args {
    /// Path to the YAML config file. Defaults to snake3d_config.yaml next to the executable.
    #[arg(long)]
    config: Option<String>,

    /// Overrides the best score file from the config.
    #[arg(long)]
    best_score_file: Option<String>,

    /// Fixed seed for food placement.
    #[arg(long)]
    seed: Option<u64>,

    /// Keep the best score in memory only.
    #[arg(long)]
    session_only: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

fn load_config(args: &Args) -> Config {
    let mut config = match get_config_manager(args.config.as_deref()).get_config() {
        Ok(config) => config,
        Err(e) => {
            log!("Failed to load config, using defaults: {}", e);
            Config::default()
        }
    };

    if let Some(file) = &args.best_score_file {
        config.best_score.file = file.clone();
    }
    if args.seed.is_some() {
        config.snake.seed = args.seed;
    }
    if args.session_only {
        config.best_score.persist = false;
    }
    config
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Snake3D".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = load_config(&args);

    let store: Box<dyn BestScoreStore> = if config.best_score.persist {
        log!("Best score file: {}", config.best_score.file);
        Box::new(FileBestScoreStore::new(&config.best_score.file))
    } else {
        Box::new(InMemoryBestScoreStore::default())
    };

    let shared_state = SharedState::new();
    let session = GameSession::new(
        config.snake.clone(),
        store,
        UiObserver::new(shared_state.clone()),
    )?;
    let (runner, handle) = SessionRunner::new(session);

    let session_thread = std::thread::spawn(move || {
        let rt = match tokio::runtime::Builder::new_current_thread().enable_time().build() {
            Ok(rt) => rt,
            Err(e) => {
                log!("Failed to start session runtime: {}", e);
                return;
            }
        };
        let session = rt.block_on(runner.run());
        log!("Session finished, best score {}", session.best_score());
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_title("Snake 3D"),
        ..Default::default()
    };

    let ui_state = shared_state.clone();
    let ui_handle = handle.clone();
    let result = eframe::run_native(
        "Snake 3D",
        options,
        Box::new(move |cc| {
            ui_state.set_context(cc.egui_ctx.clone());
            Ok(Box::new(SnakeApp::new(ui_state, ui_handle)))
        }),
    );

    handle.shutdown();
    if session_thread.join().is_err() {
        log!("Session thread panicked");
    }

    result?;
    Ok(())
}
