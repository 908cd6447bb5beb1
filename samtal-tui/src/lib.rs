pub mod app;
pub mod events;
pub mod theme;
pub mod ui;

pub use app::App;

use std::io;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use samtal_core::SamtalConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Launcher overrides layered on top of the loaded configuration.
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    pub scenario: Option<usize>,
    pub autopilot: Option<bool>,
    pub theme: Option<String>,
}

/// Load config, take over the terminal, run the demo, hand it back.
pub fn run(options: LaunchOptions) -> Result<()> {
    let mut config = SamtalConfig::load()?;
    if let Some(scenario) = options.scenario {
        config.demo.start_scenario = scenario;
    }
    if let Some(autopilot) = options.autopilot {
        config.demo.autopilot = autopilot;
    }
    if let Some(theme) = options.theme {
        config.tui.theme = theme;
    }

    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, config);
    restore_terminal(&mut terminal)?;
    result
}

/// Logs go to stderr so they never tear the alternate screen.
pub fn setup_logging(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .init();
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: SamtalConfig,
) -> Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async {
        let mut app = App::new(config).await?;
        app.run(terminal).await
    })
}
