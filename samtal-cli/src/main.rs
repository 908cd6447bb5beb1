use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use samtal_tui::{run, setup_logging, LaunchOptions};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "samtal")]
#[command(version = VERSION)]
#[command(about = "Samtal - animerad chatbot-demo med bokningsflöde")]
#[command(long_about = r#"
Samtal spelar upp skriptade kundkonversationer i terminalen och öppnar ett
bokningsflöde med kalender, tider och kontaktformulär. Demon kör helt
automatiskt; ta över bokningsmodalen med tangentbordet när du vill.
"#)]
struct Cli {
    /// Börja med ett visst scenario (0-baserat index)
    #[arg(short, long)]
    scenario: Option<usize>,

    /// Låt bokningsmodalen vänta på manuell inmatning
    #[arg(long)]
    no_autopilot: bool,

    /// Tema (studio, midnatt)
    #[arg(short, long)]
    theme: Option<String>,

    /// Mer loggning på stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(if cli.verbose {
        "samtal=debug"
    } else {
        "samtal=warn"
    });

    print_banner();

    let options = LaunchOptions {
        scenario: cli.scenario,
        autopilot: cli.no_autopilot.then_some(false),
        theme: cli.theme,
    };

    match run(options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e:#}", "❌ Kunde inte starta demon:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn print_banner() {
    println!("{}", "🚀 Startar Svea Studio AI Chatbot Demo...".bold());
    println!("{}", "=".repeat(50));
    println!("Funktioner:");
    println!("• Flera konversationsscenarier");
    println!("• Avancerad bokningsmodal med kalender och tider");
    println!("• Automatisk demoloop");
    println!("• Teman och tangentbordsstyrning");
    println!("{}", "=".repeat(50));
}
