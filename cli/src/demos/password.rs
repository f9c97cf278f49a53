//! Demo 4: fast versus slow password hashing.
//!
//! The same password goes through SHA-256 (near-instant) and PBKDF2 at
//! 600 000 iterations (perceptibly slow). The measured PBKDF2 wall time is
//! replayed as a progress bar so the audience feels the delay, then a
//! side-by-side table summarizes the tradeoff.

use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use comfy_table::{presets::UTF8_BORDERS_ONLY, Cell, Table};
use hashlab_core::{stretched_digest, HashFunction, Salt, DEFAULT_PBKDF2_ROUNDS};
use indicatif::{ProgressBar, ProgressStyle};

use crate::theme::Theme;
use crate::ui;

const SETUP: &str = "
    First, the most important question: WHY hash passwords at all?
    Why not just store them directly in a database?

    Because databases get stolen. Every year, attackers break into
    companies and download their entire user tables. If passwords
    are stored in plain text, the attacker instantly has every
    user's password — and since most people reuse passwords, the
    damage spreads far beyond that one site.

    Hashing is the defense: the server stores the HASH of the
    password and compares hashes at login. Even a stolen database
    only yields hashes — and as Demo 3 showed, a hash is ONE-WAY.

    But there is a catch. Fast hash functions like SHA-256 can
    process billions of guesses per second on a GPU. If each guess
    takes a billionth of a second, even a strong 8-character
    password can be cracked in minutes.

    Password hash functions solve this by being intentionally SLOW.
    They run the underlying hash thousands of times in a loop so
    each single guess becomes expensive. This technique is called
    KEY STRETCHING.

    We will hash the same password with both approaches and FEEL
    the difference in real time.
";

/// Replays the measured hashing time as a filling progress bar.
fn replay_progress(elapsed: Duration) {
    const TICKS: u32 = 100;

    let bar = ProgressBar::new(TICKS as u64);
    bar.set_style(
        ProgressStyle::with_template("    {msg} [{bar:30.green}] {percent:>3}%")
            .expect("static template")
            .progress_chars("█░ "),
    );
    bar.set_message("Hashing");

    for _ in 0..TICKS {
        thread::sleep(elapsed / TICKS);
        bar.inc(1);
    }
    bar.finish();
}

pub fn run(theme: &Theme) -> Result<()> {
    ui::header(theme, "Demo 4 — Password Hashing: Fast vs. Slow")?;
    ui::setup_text(theme, SETUP);
    ui::pause(theme, "start the demo")?;

    let password = ui::prompt_or(theme, "Enter a password to hash", "hunter2")?;

    // Round 1: the fast hash.
    ui::label(theme, "Round 1 — Fast Hash  (SHA-256)");
    ui::info(theme, "SHA-256 computes a unique 256-bit fingerprint in a single pass.");
    ui::info(theme, "It was designed for speed — ideal for files, NOT passwords.");
    ui::pause(theme, "compute the fast hash")?;

    let start = Instant::now();
    let fast = HashFunction::Sha2_256.digest(&password, None);
    let elapsed_fast = start.elapsed();

    println!("    Password : {}", theme.bold(&password));
    println!("    Hash     : {}", theme.accent(&fast.to_hex()));
    println!("    Time     : {}", theme.alarm("< 0.001 seconds  ⚡"));
    println!();
    ui::bad(theme, "At this speed, an attacker with a modern GPU could try");
    ui::bad(theme, "roughly 10 BILLION SHA-256 hashes per second.");
    ui::info(theme, "At that rate, every possible 6-character password");
    ui::info(theme, "(letters + digits) could be exhausted in under one second.");
    ui::pause(theme, "see the slow hash")?;

    // Round 2: the slow hash.
    let rounds = DEFAULT_PBKDF2_ROUNDS;
    ui::label(
        theme,
        &format!("Round 2 — Slow Hash  (PBKDF2  ×{rounds} iterations)"),
    );
    ui::info(theme, "PBKDF2 = Password-Based Key Derivation Function 2.");
    ui::info(theme, "It runs SHA-256 in a loop, feeding each output back in as");
    ui::info(theme, "the next input, so a SINGLE guess costs 600,000× more work.");
    ui::info(theme, "It also mixes in a random SALT, a unique value per user,");
    ui::info(theme, "so the same password never produces the same hash.");
    ui::pause(theme, "compute the slow hash  (watch the progress bar)")?;

    let salt = Salt::random(16);
    let start = Instant::now();
    let slow = stretched_digest(&password, &salt, rounds);
    let elapsed_slow = start.elapsed();

    replay_progress(elapsed_slow);

    println!("    Password : {}", theme.bold(&password));
    println!("    Salt     : {}", theme.dim(&salt.to_hex()));
    println!("    Hash     : {}", theme.good(&slow.to_hex()));
    println!(
        "    Time     : {}",
        theme.bold(&theme.good(&format!("{:.2} seconds  🐢", elapsed_slow.as_secs_f64())))
    );

    // Side-by-side comparison.
    ui::label(theme, "Side-by-Side Comparison");
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["", "FAST (SHA-256)", "SLOW (PBKDF2)"]);
    table.add_row(vec![
        Cell::new("Speed"),
        Cell::new("< 0.001 s"),
        Cell::new(format!("{:.2} s", elapsed_slow.as_secs_f64())),
    ]);
    table.add_row(vec![Cell::new("Iterations"), Cell::new("1"), Cell::new(rounds)]);
    table.add_row(vec![Cell::new("Has salt"), Cell::new("No"), Cell::new("Yes")]);
    table.add_row(vec![
        Cell::new("Attacker cost"),
        Cell::new("Trivial"),
        Cell::new("Enormous"),
    ]);
    table.add_row(vec![
        Cell::new("Good for"),
        Cell::new("Files / data"),
        Cell::new("Passwords"),
    ]);
    for line in table.to_string().lines() {
        println!("    {line}");
    }

    let ratio = elapsed_slow.as_secs_f64() / elapsed_fast.as_secs_f64().max(1e-7);
    let years = elapsed_slow.as_secs_f64() * 1e9 / 3.154e7;
    ui::takeaway(
        theme,
        &format!(
            "The slow hash took {:.2} seconds — roughly {ratio:.0}× slower
            than a single SHA-256.

            Why does that matter? Arithmetic:
              • If one guess takes {:.2}s, one BILLION guesses would take
                approximately {years:.0} years.
              • Meanwhile, one billion SHA-256 guesses take about 0.1
                seconds on a modern GPU.

            This deliberate slowness is the ENTIRE defense. It does not
            make passwords impossible to crack, but it makes the cost so
            high that attackers move on to easier targets.

            Production-grade alternatives to PBKDF2 include bcrypt,
            scrypt, and Argon2. Those also require lots of MEMORY per
            guess, so attackers cannot simply buy more GPUs — this is
            called memory-hardness.",
            elapsed_slow.as_secs_f64(),
            elapsed_slow.as_secs_f64(),
        ),
    );
    ui::pause(theme, "return to menu")?;
    Ok(())
}
