//! Demo 3: the avalanche effect.
//!
//! Transition point of the lab: hashes stop being a bucket tool and start
//! being a security tool. Two near-identical inputs go through SHA-256 and
//! the outputs are compared character by character and bit by bit.

use anyhow::Result;
use hashlab_core::avalanche::{char_differences, compare};
use hashlab_core::{HashDigest, HashFunction};

use crate::theme::Theme;
use crate::ui;

/// How many leading bits of the digests the binary view shows.
const SHOW_BITS: usize = 64;

const SETUP: &str = "
    So far we have used a simple toy hash that just adds letters
    together. That works for sorting items into buckets, but an
    attacker could easily reverse it or predict the output.

    A CRYPTOGRAPHIC hash function is designed to be:
      • Unpredictable — you cannot guess the output, even if the
        input changes by only one character.
      • Irreversible  — given the output, you CANNOT work backward
        to recover the input (the ONE-WAY property).
      • Pattern-free  — the output looks like total randomness.

    SHA-256 (\"Secure Hash Algorithm, 256-bit\") is a widely used
    cryptographic hash. One of its key properties is the
    AVALANCHE EFFECT:

        Changing even a SINGLE character in the input should flip
        roughly HALF of the bits in the output.

    Why half? If the output were truly random, each bit would have
    a 50/50 chance of flipping. Significantly fewer changed bits
    would mean patterns remain for an attacker to exploit — and if
    100% of bits always flipped, that itself would be a pattern!

    Enter two similar strings and we will compare their SHA-256
    hashes character by character AND bit by bit.
";

/// Builds the `·`/`^` marker line under a pair of equal-length strings.
fn marker_line(theme: &Theme, a: &str, b: &str) -> String {
    a.chars()
        .zip(b.chars())
        .map(|(char_a, char_b)| {
            if char_a == char_b {
                theme.dim("·")
            } else {
                theme.bad("^")
            }
        })
        .collect()
}

/// Renders the first `SHOW_BITS` bits of both digests, grouped into bytes,
/// with changed bits highlighted and a marker line underneath.
fn render_binary_view(theme: &Theme, a: &HashDigest, b: &HashDigest) {
    let bits_a: Vec<bool> = a.bits().take(SHOW_BITS).collect();
    let bits_b: Vec<bool> = b.bits().take(SHOW_BITS).collect();

    let mut line_a = String::new();
    let mut line_b = String::new();
    let mut markers = String::new();

    for (index, (bit_a, bit_b)) in bits_a.iter().zip(&bits_b).enumerate() {
        let char_a = if *bit_a { "1" } else { "0" };
        let char_b = if *bit_b { "1" } else { "0" };

        if bit_a == bit_b {
            line_a.push_str(&theme.dim(char_a));
            line_b.push_str(&theme.dim(char_b));
            markers.push_str(&theme.dim("·"));
        } else {
            line_a.push_str(&theme.bold(&theme.accent(char_a)));
            line_b.push_str(&theme.bold(&theme.bad(char_b)));
            markers.push_str(&theme.bad("^"));
        }

        // Byte grouping keeps the stream readable on a projector.
        if (index + 1) % 8 == 0 && index + 1 < SHOW_BITS {
            line_a.push(' ');
            line_b.push(' ');
            markers.push(' ');
        }
    }

    println!("    A: {line_a}");
    println!("    B: {line_b}");
    println!("       {markers}");
}

pub fn run(theme: &Theme) -> Result<()> {
    ui::header(theme, "Demo 3 — The Avalanche Effect")?;
    ui::setup_text(theme, SETUP);
    ui::pause(theme, "start the demo")?;

    let input_a = ui::prompt_or(theme, "String 1", "password")?;
    let input_b = ui::prompt_or(theme, "String 2", "passwore")?;

    let digest_a = HashFunction::Sha2_256.digest(&input_a, None);
    let digest_b = HashFunction::Sha2_256.digest(&input_b, None);
    let diff = compare(&digest_a, &digest_b);
    let char_diffs = char_differences(&input_a, &input_b);

    // Part 1: the inputs themselves.
    ui::label(theme, "Inputs");
    let width = input_a.chars().count().max(input_b.chars().count());
    let padded_a: String = format!("{input_a:<width$}");
    let padded_b: String = format!("{input_b:<width$}");
    println!("    A: \"{}\"", theme.bold(&input_a));
    println!("    B: \"{}\"", theme.bold(&input_b));
    println!("        {}", marker_line(theme, &padded_a, &padded_b));
    ui::info(theme, &format!("The two inputs differ by {char_diffs} character(s)."));
    ui::info(theme, "The '^' markers show exactly which character(s) changed.");
    ui::pause(theme, "see the resulting hashes")?;

    // Part 2: hex view.
    ui::label(theme, "SHA-256 Output — Hexadecimal  (64 characters)");
    ui::info(theme, "Each hex character represents 4 bits; 64 characters = 256 bits.");
    println!();
    let hex_a = digest_a.to_hex();
    let hex_b = digest_b.to_hex();
    println!("    A: {}", theme.accent(&hex_a));
    println!("    B: {}", theme.accent(&hex_b));
    println!("       {}", marker_line(theme, &hex_a, &hex_b));
    println!();
    ui::info(
        theme,
        &format!(
            "{} of {} hex characters are different ({:.0}%).",
            diff.hex_flips,
            diff.hex_total,
            diff.hex_flips as f64 / diff.hex_total as f64 * 100.0
        ),
    );
    ui::pause(theme, "see the binary (bit-level) view")?;

    // Part 3: binary view.
    ui::label(theme, &format!("Binary View — first {SHOW_BITS} of {} bits", diff.bit_total));
    ui::info(theme, "Bits are the actual 0s and 1s the computer stores,");
    ui::info(theme, "shown here grouped into bytes (8 bits each).");
    println!();
    render_binary_view(theme, &digest_a, &digest_b);
    println!();

    let percent = diff.bit_percent();
    ui::info(
        theme,
        &format!("{} of {} total bits flipped ({percent:.0}%).", diff.bit_flips, diff.bit_total),
    );
    ui::info(theme, "The ideal is 50% (128 bits) — the hallmark of total randomness.");
    if percent > 40.0 {
        ui::info(theme, "This result is strong: SHA-256 is behaving like a good scrambler.");
    }

    ui::takeaway(
        theme,
        &format!(
            "Changing just {char_diffs} character(s) in the input flipped
            {} out of {} bits — that is {percent:.0}% of the output.

            This is the Avalanche Effect. It is what separates a
            cryptographic hash from our toy hash:
              • ONE-WAY — you cannot recover the input from the hash,
                just as you cannot un-bake a cake to get the eggs back.
              • UNPREDICTABLE — two nearly identical inputs produce
                wildly different hashes.
              • NO SHORTCUT — the only way to find an input matching a
                given hash is to try every possibility.

            These properties let hashing protect passwords (Demo 4) and
            defend against pre-built attack tables (Demo 5).",
            diff.bit_flips, diff.bit_total
        ),
    );
    ui::pause(theme, "return to menu")?;
    Ok(())
}
