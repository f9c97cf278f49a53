//! Demo 2: the collision challenge.
//!
//! Demo 1 said collisions can happen; this one proves they must. Five
//! buckets make the pigeonhole principle bite by the sixth word at the
//! latest, and the birthday paradox usually makes it bite sooner.

use anyhow::Result;
use hashlab_core::bucket::{toy_hash, BucketBoard};

use super::buckets::render_board;
use crate::theme::Theme;
use crate::ui;

const BUCKET_COUNT: usize = 5;

const SETUP: &str = "
    In Demo 1 we saw that collisions CAN happen.
    Now we will prove that collisions MUST happen.

    This is because of the Pigeonhole Principle, a simple but
    powerful idea from mathematics:

        \"If you have more pigeons than pigeonholes,
         at least one hole must contain more than one pigeon.\"

    We have only 5 buckets this time. Your challenge is to
    cause a collision — type words until two of them land in
    the same bucket.

    Hint: with 5 buckets, a collision is GUARANTEED by word #6.
    Once 5 words are placed, every bucket could be occupied, and
    the 6th word has nowhere new to go. In practice it usually
    happens even sooner.
";

pub fn run(theme: &Theme) -> Result<()> {
    ui::header(theme, "Demo 2 — Collision Challenge")?;
    ui::setup_text(theme, SETUP);
    ui::pause(theme, "start the challenge")?;

    let mut board = BucketBoard::new(BUCKET_COUNT);

    loop {
        ui::header(theme, "Demo 2 — Collision Challenge")?;
        println!(
            "    {}",
            theme.dim(&format!(
                "Buckets: {BUCKET_COUNT}   │   Words entered: {}",
                board.words_placed()
            ))
        );
        println!();
        render_board(&board, None);
        println!();

        let word = ui::prompt(theme, "Enter a word  (q = back to menu)")?;
        if word.is_empty() || word.eq_ignore_ascii_case("q") {
            break;
        }

        let sum = hashlab_core::bucket::byte_sum(&word);
        let bucket = toy_hash(&word, BUCKET_COUNT);
        println!(
            "\n    hash('{word}') = {sum} mod {BUCKET_COUNT} = {}",
            theme.bold(&bucket.to_string())
        );

        let occupants = board.bucket(bucket).to_vec();
        let placement = board.place(&word);

        if placement.collision {
            ui::bad(
                theme,
                &format!(
                    "COLLISION in bucket {bucket}!  '{word}' crashed into [{}]",
                    occupants.join(", ")
                ),
            );
            println!();
            render_board(&board, Some(placement));

            let attempts = board.words_placed();
            ui::takeaway(
                theme,
                &format!(
                    "It took {attempts} word(s) to produce a collision in {BUCKET_COUNT} buckets.

                    The Pigeonhole Principle guarantees a shared bucket after
                    {} entries — there are simply not enough slots for everyone
                    to have their own. Randomness makes it happen even sooner:
                    this is the same math as the \"Birthday Paradox\", where a
                    group of just 23 people has a 50% chance of a shared
                    birthday.

                    Our toy hash only has {BUCKET_COUNT} buckets, so collisions are trivial.
                    Real hash functions use enormous output spaces to make
                    collisions practically impossible to find. SHA-256, which
                    we meet in Demo 3, has 2^256 possible outputs — more than
                    there are atoms in the observable universe. Nobody has ever
                    found two inputs with the same SHA-256 result. That
                    property is called COLLISION RESISTANCE.",
                    BUCKET_COUNT + 1
                ),
            );
            ui::pause(theme, "return to menu")?;
            return Ok(());
        }

        ui::good(theme, &format!("No collision yet. '{word}' placed in bucket {bucket}."));
        ui::pause(theme, "try again")?;
    }

    Ok(())
}
