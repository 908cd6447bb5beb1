use anyhow::Result;

use samtal_tui::{run, setup_logging, LaunchOptions};

fn main() -> Result<()> {
    setup_logging("samtal=warn");

    if let Err(e) = run(LaunchOptions::default()) {
        eprintln!("Application error: {e}");
        return Err(e);
    }

    Ok(())
}
