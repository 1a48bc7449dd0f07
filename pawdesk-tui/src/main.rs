mod app;
mod error;
mod paths;
mod records;
mod settings;
mod terminal;

use std::fs::{self, File};
use std::io;

use simplelog::{Config, LevelFilter, WriteLogger};

use app::Dashboard;
use error::AppError;
use terminal::Terminal;

const SAMPLE_WALKERS: usize = 137;

fn main() {
    paths::rotate_logs();
    if let Err(e) = init_logging() {
        eprintln!("Logging disabled: {}", e);
    }

    if let Err(e) = run() {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging() -> io::Result<()> {
    let Some(path) = paths::log_file() else {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            "no cache directory for logs",
        ));
    };
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let file = File::create(&path)?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), file).map_err(io::Error::other)
}

fn run() -> Result<(), AppError> {
    let config = settings::load_table_config()?;
    let mut dashboard = Dashboard::new(records::sample_walkers(SAMPLE_WALKERS), config);

    // Dropping the terminal restores the screen before errors are printed
    let mut terminal = Terminal::new()?;
    dashboard.run(&mut terminal)?;
    drop(terminal);

    let page = dashboard.table().page_state();
    log::info!(
        "closed on page {} of {} walkers",
        page.current_page,
        page.total_items
    );
    Ok(())
}
