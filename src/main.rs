use clap::Parser;
use std::path::PathBuf;

use ccmhub::views::dashboard::DashboardModel;
use ccmhub::{DEFAULT_SESSION_FILE, SessionDb};

#[derive(Parser)]
#[command(name = "ccmhub")]
#[command(about = "Outlet management hub backed by a local session file")]
struct Cli {
    /// Path to the session file (used directly by --summary; preselects
    /// the session when launching the app)
    #[arg(value_name = "SESSION_FILE")]
    session_file: Option<PathBuf>,

    /// Print a dashboard summary instead of launching the app
    #[arg(long)]
    summary: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    // One print serves both the summary and the GUI launch path
    if args.verbose {
        match &args.session_file {
            Some(path) => println!("Session file: {:?}", path),
            None => println!("Session file: {DEFAULT_SESSION_FILE:?} (default)"),
        }
    }

    if args.summary || cfg!(not(feature = "gui")) {
        let path = args
            .session_file
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SESSION_FILE));
        print_summary(&SessionDb::open(&path));
        return Ok(());
    }

    run_gui(args.session_file)
}

#[cfg(feature = "gui")]
fn run_gui(session_file: Option<PathBuf>) -> anyhow::Result<()> {
    ccmhub::gui::run(session_file)?;
    Ok(())
}

#[cfg(not(feature = "gui"))]
fn run_gui(_session_file: Option<PathBuf>) -> anyhow::Result<()> {
    unreachable!("built without the gui feature; --summary is implied")
}

fn print_summary(session: &SessionDb) {
    let state = session.state();
    let dashboard = DashboardModel::project(state);

    println!("\n=== {} ===", dashboard.hero_title);
    println!("{}", dashboard.hero_subtitle);
    println!("\nUser: {} <{}>", state.user.name, state.user.email);
    println!("Outlets: {}", dashboard.outlet_count);
    println!(
        "Calculations: {} ({} articles total)",
        dashboard.calculation_count, dashboard.total_articles
    );

    if dashboard.recent_outlets.is_empty() {
        println!("\nNo outlets yet.");
    } else {
        println!("\nRecent outlets:");
        for outlet in &dashboard.recent_outlets {
            println!(
                "  {} - {} [{}]",
                outlet.name, outlet.address, outlet.campaign
            );
        }
    }
}
