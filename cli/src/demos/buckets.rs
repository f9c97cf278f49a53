//! Demo 1: the toy hash.
//!
//! Establishes the mental model every later demo builds on:
//! input → deterministic math → fixed-size number.

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};
use hashlab_core::bucket::{BucketBoard, Placement};

use crate::theme::Theme;
use crate::ui;

const BUCKET_COUNT: usize = 8;

const SETUP: &str = "
    A hash function is a formula that takes ANY input — a word, a
    file, an entire novel — and converts it into a fixed-size
    number. The same input ALWAYS produces the same number.

    Why is this useful? Imagine a library with millions of books.
    Instead of searching every shelf, the librarian uses a formula
    to calculate exactly which shelf a book belongs on. That is
    what a hash function does — it turns data into an address.

    Our toy formula works like this:
      1. Convert each letter to its ASCII number ('A' = 65,
         'a' = 97, and so on — every computer agrees on these).
      2. Add all the numbers together.
      3. Divide by the number of slots and keep only the
         remainder (the modulo operation).

    We call each slot a BUCKET — a numbered storage container
    where we place items based on their hash value.
    Type words and watch which bucket they land in!
";

const TAKEAWAY: &str = "
    A hash function always gives the same output for the same input.
    That makes it perfect for organizing and finding data quickly —
    just like our librarian calculating exactly which shelf to check
    instead of searching every book in the building.

    When two DIFFERENT inputs produce the same output, we call that a
    COLLISION. Collisions are unavoidable because we are squeezing
    infinite possible inputs into a limited number of buckets.

    In the real world, this same idea powers everything from the way
    your computer quickly finds files, to how websites verify that a
    download was not corrupted. The next demos will show how hashing
    also plays a critical role in security.
";

/// Renders the bucket board as a bordered table, optionally coloring one
/// bucket's index green (clean placement) or red (collision).
pub(super) fn render_board(board: &BucketBoard, highlight: Option<Placement>) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Bucket", "Contents"]);

    for (index, bucket) in board.buckets().enumerate() {
        let index_cell = match highlight {
            Some(placement) if placement.bucket == index && placement.collision => {
                Cell::new(index).fg(Color::Red)
            }
            Some(placement) if placement.bucket == index => Cell::new(index).fg(Color::Green),
            _ => Cell::new(index).fg(Color::Cyan),
        };

        let contents = if bucket.is_empty() {
            Cell::new("empty").fg(Color::Grey)
        } else {
            Cell::new(bucket.join(", "))
        };

        table.add_row(vec![index_cell, contents]);
    }

    for line in table.to_string().lines() {
        println!("    {line}");
    }
}

pub fn run(theme: &Theme) -> Result<()> {
    let mut board = BucketBoard::new(BUCKET_COUNT);

    ui::header(theme, "Demo 1 — Toy Hash Mapping")?;
    ui::setup_text(theme, SETUP);
    ui::pause(theme, "start the demo")?;

    loop {
        ui::header(theme, "Demo 1 — Toy Hash Mapping")?;
        render_board(&board, None);
        println!();

        let word = ui::prompt(theme, "Type a word to hash  (q = back to menu)")?;
        if word.is_empty() || word.eq_ignore_ascii_case("q") {
            break;
        }

        ui::label(theme, "Step 1 — Convert each letter to its ASCII number");
        let parts: Vec<String> = word
            .bytes()
            .map(|byte| format!("'{}'={}", char::from(byte), byte))
            .collect();
        let sum = hashlab_core::bucket::byte_sum(&word);
        println!("    {}", parts.join(" + "));
        println!("    Sum = {}", theme.bold(&sum.to_string()));

        let placement = board.place(&word);
        ui::label(theme, &format!("Step 2 — Modulo  (fit into {BUCKET_COUNT} buckets)"));
        ui::info(theme, "The modulo operator (%) divides and keeps only the remainder.");
        ui::info(
            theme,
            &format!("It guarantees the result is always between 0 and {}.", BUCKET_COUNT - 1),
        );
        println!(
            "    {sum} % {BUCKET_COUNT} = {}",
            theme.bold(&theme.accent(&placement.bucket.to_string()))
        );

        if placement.collision {
            ui::label(theme, "Result — Collision!");
            // The word is already in the bucket, so everything before it
            // was there first.
            let occupants = &board.bucket(placement.bucket)[..board.bucket(placement.bucket).len() - 1];
            ui::bad(
                theme,
                &format!("Bucket {} already contains: {}", placement.bucket, occupants.join(", ")),
            );
            ui::info(
                theme,
                &format!("'{word}' maps to the SAME bucket. This is called a COLLISION."),
            );
            ui::info(theme, "Collisions are not errors — they are a normal consequence of");
            ui::info(theme, "squeezing infinite inputs into a limited number of slots.");
            ui::info(theme, "We will explore this in Demo 2.");
        } else {
            ui::label(theme, "Result");
            ui::good(
                theme,
                &format!("Bucket {} was empty — '{word}' placed there now.", placement.bucket),
            );
        }

        ui::pause(theme, "hash another word")?;
    }

    ui::takeaway(theme, TAKEAWAY);
    ui::pause(theme, "return to menu")?;
    Ok(())
}
