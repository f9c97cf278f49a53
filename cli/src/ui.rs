//! Shared output helpers enforcing one look across every demo.
//!
//! Each demo follows the same three-part teaching pattern: a setup block
//! ("what we are about to see"), the live demonstration, and a takeaway
//! ("what this means"). Pauses between the parts are the pacing mechanism
//! for live presentations; the presenter talks, then presses Enter.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use anyhow::Result;
use crossterm::{cursor, execute, terminal};

use crate::theme::Theme;

pub fn clear_screen() -> Result<()> {
    execute!(
        io::stdout(),
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )?;
    Ok(())
}

/// Clears the screen and prints a prominent demo header.
pub fn header(theme: &Theme, title: &str) -> Result<()> {
    clear_screen()?;
    let rule = "━".repeat(title.len().max(42) + 6);
    println!();
    println!("  {}", theme.heading(&rule));
    println!("  {}", theme.heading(&format!("┃  {}", title.to_uppercase())));
    println!("  {}", theme.heading(&rule));
    println!();
    Ok(())
}

/// The "what we are about to see" block that opens every demo.
pub fn setup_text(theme: &Theme, text: &str) {
    println!("  {}", theme.bold(&theme.accent("▸ What we are about to see")));
    for line in text.trim().lines() {
        println!("    {}", theme.accent(line.trim()));
    }
    println!();
}

/// The "what this means" block that closes every demo.
pub fn takeaway(theme: &Theme, text: &str) {
    println!();
    println!("  {}", theme.bold(&theme.good("✓ What this means")));
    for line in text.trim().lines() {
        println!("    {}", theme.good(line.trim()));
    }
}

/// A bold step heading inside a demo, e.g. "Step 2 — Modulo".
pub fn label(theme: &Theme, text: &str) {
    println!();
    println!("  {}", theme.bold(text));
}

pub fn info(theme: &Theme, text: &str) {
    println!("    {}", theme.dim(text));
}

pub fn good(theme: &Theme, text: &str) {
    println!("    {}", theme.good(text));
}

pub fn warn(theme: &Theme, text: &str) {
    println!("    {}", theme.warn(text));
}

pub fn bad(theme: &Theme, text: &str) {
    println!("    {}", theme.bad(text));
}

/// Blocks until the presenter presses Enter.
pub fn pause(theme: &Theme, action: &str) -> Result<()> {
    print!(
        "\n  {}",
        theme.dim(&format!("↵  Press Enter to {action}..."))
    );
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(())
}

/// Asks for input and returns the trimmed response.
pub fn prompt(theme: &Theme, text: &str) -> Result<String> {
    print!("  {}", theme.warn(&format!("▸ {text}: ")));
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_owned())
}

/// Asks for input, falling back to `default` on an empty response.
pub fn prompt_or(theme: &Theme, text: &str, default: &str) -> Result<String> {
    let response = prompt(theme, &format!("{text}  (Enter for '{default}')"))?;
    if response.is_empty() {
        Ok(default.to_owned())
    } else {
        Ok(response)
    }
}

/// Prints `text` followed by three slow dots, for dramatic table searches.
pub fn searching(text: &str) -> Result<()> {
    print!("    {text}");
    io::stdout().flush()?;
    for _ in 0..3 {
        thread::sleep(Duration::from_millis(300));
        print!(".");
        io::stdout().flush()?;
    }
    Ok(())
}
