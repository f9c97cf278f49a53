mod demos;
mod theme;
mod ui;

use std::thread;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use demos::Demo;
use theme::Theme;

/// Interactive terminal lab walking an audience through five hashing
/// concepts: bucketing, collisions, the avalanche effect, slow password
/// hashing, and rainbow table attacks.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Disable colored output (for plain projector setups or transcripts).
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Jump straight into a single demo instead of the menu.
    Demo {
        #[arg(value_enum)]
        which: Demo,
    },

    /// List the available demos in presentation order.
    List,
}

fn banner(theme: &Theme) {
    println!();
    println!("  {}", theme.accent("╔═══════════════════════════════════════════════╗"));
    println!("  {}", theme.accent("║                                               ║"));
    println!("  {}", theme.accent("║        HASHING  CONCEPTS  LAB                 ║"));
    println!("  {}", theme.accent("║        Interactive Teaching Demo              ║"));
    println!("  {}", theme.accent("║                                               ║"));
    println!("  {}", theme.accent("╚═══════════════════════════════════════════════╝"));
    println!();
    println!("  {}", theme.dim("Guided discovery mode — one presenter, one room"));
    println!();
}

fn menu_loop(theme: &Theme) -> Result<()> {
    loop {
        ui::clear_screen()?;
        banner(theme);
        println!(
            "  {}",
            theme.dim("Each demo builds on the last. Recommended order: 1 → 5")
        );
        println!();

        for (number, demo) in Demo::ALL.iter().enumerate() {
            println!(
                "    {}.  {}",
                theme.bold(&(number + 1).to_string()),
                theme.accent(demo.title())
            );
            println!("        {}", theme.dim(demo.subtitle()));
        }
        println!();
        println!("    {}.  Quit", theme.bold("Q"));
        println!();

        let choice = ui::prompt(theme, "Select a demo")?;
        if choice.eq_ignore_ascii_case("q") {
            ui::clear_screen()?;
            println!("\n  {}\n", theme.bold(&theme.good("Thanks for attending! 🔐")));
            return Ok(());
        }

        match choice.parse::<usize>() {
            Ok(number) if (1..=Demo::ALL.len()).contains(&number) => {
                Demo::ALL[number - 1].run(theme)?;
            }
            _ => {
                ui::warn(theme, &format!("Please enter a number 1–{} or Q.", Demo::ALL.len()));
                thread::sleep(Duration::from_secs(1));
            }
        }
    }
}

fn main() -> Result<()> {
    // Silent unless the presenter opts in via RUST_LOG; log lines on a
    // projector would wreck the demos.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let theme = Theme::new(!cli.no_color);

    match cli.command {
        Some(Command::Demo { which }) => which.run(&theme),
        Some(Command::List) => {
            for (number, demo) in Demo::ALL.iter().enumerate() {
                println!("{}. {} — {}", number + 1, demo.title(), demo.subtitle());
            }
            Ok(())
        }
        None => menu_loop(&theme),
    }
}
