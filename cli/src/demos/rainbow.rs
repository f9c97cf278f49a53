//! Demo 5: the rainbow table attack, and the salt that defeats it.
//!
//! Three acts plus an epilogue: show the attacker's precomputed table,
//! crack an unsalted hash with a single lookup, watch the same lookup fail
//! against salted hashes, then pay the full per-salt brute-force price to
//! drive home what the salt actually bought.

use std::time::Instant;

use anyhow::Result;
use comfy_table::{presets::UTF8_BORDERS_ONLY, Cell, Color, Table};
use hashlab_core::{
    attempt_salted, crack_unsalted, AttackResult, Corpus, HashFunction, RainbowTable, Salt,
};

use crate::theme::Theme;
use crate::ui;

/// The primitive this demo runs on, end to end.
const HASH: HashFunction = HashFunction::Sha2_256;

/// How many corpus rows the table preview shows.
const PREVIEW_ROWS: usize = 10;

const SETUP: &str = "
    Imagine an attacker has stolen a database of password hashes.
    Instead of guessing passwords one at a time, the attacker uses
    a RAINBOW TABLE — a giant precomputed dictionary that maps
    known hash values back to their original passwords.

    How it works:
      1. BEFORE the breach, the attacker hashes millions of common
         passwords and stores them in a lookup table:
             hash(\"password\") → \"password\"
             hash(\"dragon\")   → \"dragon\"
             … billions more …

      2. AFTER stealing a database, the attacker simply looks up
         each victim's hash in the table. If it matches, the
         password is instantly revealed — no computation needed.

    This attack works ONLY when the database stores plain,
    unsalted hashes. We will first see the attack succeed, then
    see how adding a SALT defeats it completely.
";

fn render_preview(corpus: &Corpus) {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Password", "SHA-256 hash"]);

    for candidate in corpus.candidates().take(PREVIEW_ROWS) {
        let digest = HASH.digest(candidate, None);
        let shortened = format!("{}…", &digest.to_hex()[..32]);
        table.add_row(vec![
            Cell::new(candidate),
            Cell::new(shortened).fg(Color::Grey),
        ]);
    }

    for line in table.to_string().lines() {
        println!("    {line}");
    }
}

pub fn run(theme: &Theme) -> Result<()> {
    let corpus = Corpus::common();
    // Built once; reused for every lookup in this session.
    let table = RainbowTable::build(HASH, &corpus);

    ui::header(theme, "Demo 5 — Rainbow Table Attack")?;
    ui::setup_text(theme, SETUP);
    ui::pause(theme, "see the rainbow table")?;

    // Act 1: the precomputed table.
    ui::label(
        theme,
        &format!("The Attacker's Rainbow Table  (showing {PREVIEW_ROWS} of {} entries)", table.len()),
    );
    ui::info(theme, "Each row is a password and its SHA-256 hash, computed in advance.");
    println!();
    render_preview(&corpus);
    println!();
    ui::info(theme, "Real rainbow tables contain BILLIONS of entries and can occupy");
    ui::info(theme, "terabytes of disk space. They are freely downloadable online.");
    ui::pause(theme, "simulate the attack")?;

    // Act 2: the attack.
    ui::label(theme, "Attack Simulation");
    ui::info(theme, "Pretend a company stored their passwords as plain SHA-256 hashes.");
    ui::info(theme, "The attacker has stolen the hash database.");
    println!();
    let victim = ui::prompt_or(theme, "Pick a victim password", "dragon")?;
    let stolen = HASH.digest(&victim, None);

    println!("\n    Stolen hash : {}", theme.accent(&stolen.to_hex()));
    ui::searching("Searching rainbow table")?;

    let start = Instant::now();
    let result = crack_unsalted(&stolen, &table);
    let lookup_time = start.elapsed();

    match result {
        AttackResult::Cracked(password) => {
            println!("\n\n    {}", theme.alarm("CRACKED!"));
            println!("    The password is: {}", theme.alarm(&password));
            println!();
            ui::bad(
                theme,
                &format!("The lookup took {} µs — no brute-forcing required.", lookup_time.as_micros()),
            );
            ui::bad(theme, "Every user with this password is compromised in one step.");
        }
        AttackResult::NotFound => {
            println!("\n\n    {}", theme.good(&format!("Not found in this {}-entry demo table.", table.len())));
            ui::info(theme, "A real table with billions of entries might still crack it.");
        }
    }
    ui::pause(theme, "see how SALT defeats this attack")?;

    // Act 3: the defense.
    ui::label(theme, "Defense — Adding a Salt");
    ui::info(theme, "A SALT is a random value generated uniquely for each user and");
    ui::info(theme, "mixed into the password before hashing:");
    ui::info(theme, "");
    ui::info(theme, "    hash( salt + password )  →  stored hash");
    ui::info(theme, "");
    ui::info(theme, "The salt is stored in the clear alongside the hash — it does");
    ui::info(theme, "NOT need to be secret. Its job is not to hide anything but to");
    ui::info(theme, "make every hash UNIQUE, so no single precomputed table works");
    ui::info(theme, "against anyone.");
    println!();

    let salt_a = Salt::random(Salt::DEMO_LEN);
    let salt_b = Salt::random(Salt::DEMO_LEN);
    let salted_a = HASH.digest(&victim, Some(&salt_a));
    let salted_b = HASH.digest(&victim, Some(&salt_b));

    println!("    Same password : {}", theme.bold(&victim));
    println!();
    println!("    User A  salt  : {}", theme.dim(&salt_a.to_hex()));
    println!("    User A  hash  : {}", theme.good(&salted_a.to_hex()));
    println!();
    println!("    User B  salt  : {}", theme.dim(&salt_b.to_hex()));
    println!("    User B  hash  : {}", theme.good(&salted_b.to_hex()));
    ui::pause(theme, "attempt the rainbow lookup on salted hashes")?;

    for (user, salted) in [("User A", &salted_a), ("User B", &salted_b)] {
        ui::searching(&format!("Rainbow lookup for {user} hash"))?;
        match crack_unsalted(salted, &table) {
            AttackResult::NotFound => println!(" {}", theme.bold(&theme.good("NOT FOUND ✓"))),
            AttackResult::Cracked(password) => {
                // Only reachable if a salted digest collides with an
                // unsalted corpus digest, which a 256-bit primitive makes
                // vanishingly unlikely.
                println!(" {}", theme.alarm(&format!("CRACKED: {password}")))
            }
        }
    }
    println!();
    ui::info(theme, "The rainbow table was built for UNSALTED hashes. With a salt");
    ui::info(theme, "mixed in, the resulting hash matches nothing in the table.");
    ui::pause(theme, "see what the attacker must do instead")?;

    // Epilogue: the per-salt price.
    ui::label(theme, "The Attacker's Only Option — Recompute Per Salt");
    ui::info(theme, "Knowing User A's salt, the attacker must re-hash the ENTIRE");
    ui::info(theme, "corpus under that one salt. And then again for User B's salt.");
    ui::info(theme, "All precomputed work is worthless.");
    println!();

    let attack = attempt_salted(&salted_a, &salt_a, HASH, &corpus);
    match attack.result {
        AttackResult::Cracked(password) => {
            println!(
                "    Brute-forcing with User A's salt: {} after {} fresh hashes",
                theme.alarm(&format!("cracked '{password}'")),
                attack.candidates_tried
            );
        }
        AttackResult::NotFound => {
            println!(
                "    Brute-forcing with User A's salt: {} after {} fresh hashes",
                theme.good("not found"),
                attack.candidates_tried
            );
        }
    }

    let wrong = attempt_salted(&salted_a, &salt_b, HASH, &corpus);
    println!(
        "    Same digest, User B's salt:       {} — {} hashes wasted",
        theme.good("not found"),
        wrong.candidates_tried
    );
    println!();
    ui::info(
        theme,
        &format!(
            "One stolen database with 1,000 distinct salts costs 1,000 × {} fresh hashes.",
            corpus.len()
        ),
    );
    ui::info(theme, "With a slow hash from Demo 4 on top, each of those gets expensive.");

    ui::takeaway(
        theme,
        "Without a salt, identical passwords produce identical hashes,
        and an attacker cracks them all at once with a single table
        lookup — no computation required.

        A random salt makes every hash unique. The attacker would need
        a separate rainbow table for every possible salt value: a
        12-byte salt has 2^96 possibilities, a 29-digit number. Building
        a table for each one is physically impossible.

        \"If the attacker can see the salt, why can't they just use
        it?\" They CAN — but only to check ONE guess at a time, which is
        exactly the slow brute-force from Demo 4. The salt's power is
        that it destroys the attacker's ability to reuse precomputed
        work.

        This is why every modern password scheme — bcrypt, scrypt,
        Argon2, PBKDF2 — generates a unique salt automatically. Salt
        plus key stretching is the industry-standard defense for
        password storage.",
    );
    ui::pause(theme, "return to menu")?;
    Ok(())
}
