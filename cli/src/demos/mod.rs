//! The demo registry.
//!
//! Every demo is a variant of [`Demo`] with a title, a one-line subtitle and
//! a `run` entry point. The menu and the `demo` subcommand both dispatch
//! through this enum, so adding a demo means adding a variant and wiring it
//! into the three methods below.

mod avalanche;
mod buckets;
mod collisions;
mod password;
mod rainbow;

use anyhow::Result;
use clap::ValueEnum;

use crate::theme::Theme;

/// The five demos, in narrative order. Each builds on the previous one.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Demo {
    Buckets,
    Collisions,
    Avalanche,
    Password,
    Rainbow,
}

impl Demo {
    pub const ALL: [Demo; 5] = [
        Demo::Buckets,
        Demo::Collisions,
        Demo::Avalanche,
        Demo::Password,
        Demo::Rainbow,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Demo::Buckets => "Toy Hash Mapping",
            Demo::Collisions => "Collision Challenge",
            Demo::Avalanche => "Avalanche Effect",
            Demo::Password => "Password Hashing",
            Demo::Rainbow => "Rainbow Table Attack",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            Demo::Buckets => "See how text maps to numbered buckets — and discover collisions",
            Demo::Collisions => {
                "Try to force two words into the same bucket — and learn why it always works"
            }
            Demo::Avalanche => "Change one character and watch the entire output scramble",
            Demo::Password => "See why websites don't store your actual password",
            Demo::Rainbow => "Crack a stolen password instantly — then learn the defense",
        }
    }

    pub fn run(self, theme: &Theme) -> Result<()> {
        match self {
            Demo::Buckets => buckets::run(theme),
            Demo::Collisions => collisions::run(theme),
            Demo::Avalanche => avalanche::run(theme),
            Demo::Password => password::run(theme),
            Demo::Rainbow => rainbow::run(theme),
        }
    }
}
