//! Extract the version from a release string and export it to an env file.
//!
//! Takes a tag or release name (e.g., "v1.2.3"), extracts everything from
//! the first digit onward, prints it, and writes it to `.env` as
//! `export major="1.2.3"` for a later build step to source.
//!
//! Replaces ad-hoc version extraction snippets in CI pipelines and bash
//! scripts.

use anyhow::Result;
use clap::Parser;
use version_env::commands;
use version_env::commands::ExtractArgs;

fn main() -> Result<()> {
    let args = ExtractArgs::parse();
    commands::extract(args)
}
