//! Extract a version from a release string and export it to an env file.
//!
//! This is the tool's single operation: search the input for its first
//! digit, take everything from there to the end of the string, print it,
//! and write it to `.env` as a shell-sourceable export line.
//!
//! # Examples
//!
//! ```bash
//! # Print "Current Version: 1.2.3" and write export major="1.2.3" to .env
//! version-env v1.2.3
//!
//! # Write to a different file, under a different variable name
//! version-env --env-file build/.env --var release v1.2.3
//!
//! # Get JSON output
//! version-env --format json v1.2.3
//!
//! # Use in GitHub Actions (writes major=1.2.3 to GITHUB_OUTPUT)
//! version-env --format github-actions v1.2.3
//! ```

use std::path::PathBuf;

use anyhow::{
    Context,
    Result,
};
use clap::Parser;

use crate::version::{
    extract_major,
    format_export,
};

/// Arguments for the `extract` operation.
#[derive(Parser, Debug)]
pub struct ExtractArgs {
    /// Raw version text to extract from (e.g., a tag or release name).
    ///
    /// Everything from the first digit onward is taken as the version.
    /// An input with no digits is a silent no-op.
    pub version: String,

    /// Path of the env file to write.
    ///
    /// Created or truncated on every successful match.
    #[arg(long, default_value = ".env")]
    pub env_file: PathBuf,

    /// Variable name used in the export line.
    #[arg(long, default_value = "major")]
    pub var: String,

    /// Output format for the extracted version.
    ///
    /// - `text`: Print "Current Version: <value>"
    /// - `json`: Print JSON with the variable name as the field
    /// - `github-actions`: Write to GITHUB_OUTPUT file in GitHub Actions
    ///   format
    #[arg(long, default_value = "text")]
    pub format: String,

    /// Path to GitHub Actions output file.
    ///
    /// Only used when `--format github-actions` is specified.
    /// Defaults to the `GITHUB_OUTPUT` environment variable or stdout.
    #[arg(long, env = "GITHUB_OUTPUT")]
    pub github_output: Option<String>,

    /// Print the version without writing the env file.
    #[arg(long)]
    pub skip_env_file: bool,
}

/// Extract the version from the input and export it.
///
/// On a match, prints the extracted value in the selected format and then
/// writes `export <var>="<value>"` to the env file, replacing any previous
/// contents. When the input contains no digit, nothing is printed, nothing
/// is written, and the call succeeds.
///
/// # Errors
///
/// Returns an error if:
/// - The format is not one of `text`, `json`, or `github-actions`
/// - The env file or GitHub Actions output file cannot be written
///
/// # Examples
///
/// ```no_run
/// use version_env::commands::{
///     ExtractArgs,
///     extract,
/// };
///
/// let args = ExtractArgs {
///     version: "v1.2.3".to_string(),
///     env_file: ".env".into(),
///     var: "major".to_string(),
///     format: "text".to_string(),
///     github_output: None,
///     skip_env_file: false,
/// };
/// extract(args)?; // Prints "Current Version: 1.2.3", writes .env
/// # Ok::<(), anyhow::Error>(())
/// ```
///
/// # Example Output
///
/// With `--format text`:
/// ```text
/// Current Version: 1.2.3
/// ```
///
/// With `--format json`:
/// ```json
/// {"major":"1.2.3"}
/// ```
///
/// With `--format github-actions` (writes to GITHUB_OUTPUT):
/// ```text
/// major=1.2.3
/// ```
pub fn extract(args: ExtractArgs) -> Result<()> {
    // Expected non-match: no digit in the input. Not an error.
    let Some(major) = extract_major(&args.version) else {
        return Ok(());
    };

    match args.format.as_str() {
        "text" => println!("Current Version: {}", major),
        "json" => println!("{{\"{}\":\"{}\"}}", args.var, major),
        "github-actions" => {
            let output_file = args.github_output.as_deref().unwrap_or("/dev/stdout");
            let output = format!("{}={}\n", args.var, major);
            std::fs::write(output_file, output)
                .with_context(|| format!("Failed to write to {}", output_file))?;
        }
        _ => anyhow::bail!("Invalid format: {}", args.format),
    }

    if !args.skip_env_file {
        std::fs::write(&args.env_file, format_export(&args.var, major))
            .with_context(|| format!("Failed to write {}", args.env_file.display()))?;
    }

    Ok(())
}
