use anyhow::Result;
use clap::{Parser, Subcommand};
use xshell::{cmd, Shell};

#[derive(Debug, Parser)]
struct Xtask {
    #[clap(subcommand)]
    cmd: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Format, lint, and test the crate, with and without the standard library.
    Ci,

    /// Format the code.
    Format,

    /// Run clippy over all targets.
    Clippy,

    /// Run the test suite.
    Test,

    /// Build the crate without the `std` feature.
    NoStd,

    /// Run the benchmarks.
    Bench {
        /// Only run benchmarks matching this filter.
        filter: Option<String>,
    },
}

fn main() -> Result<()> {
    let xtask = Xtask::parse();

    let sh = Shell::new()?;
    sh.change_dir(project_root());

    match xtask.cmd.unwrap_or(Command::Ci) {
        Command::Ci => ci(&sh),
        Command::Format => format(&sh),
        Command::Clippy => clippy(&sh),
        Command::Test => test(&sh),
        Command::NoStd => no_std(&sh),
        Command::Bench { filter } => bench(&sh, filter),
    }
}

fn ci(sh: &Shell) -> Result<()> {
    cmd!(sh, "cargo fmt --all --check").run()?;
    clippy(sh)?;
    test(sh)?;
    no_std(sh)
}

fn format(sh: &Shell) -> Result<()> {
    cmd!(sh, "cargo fmt --all").run()?;
    Ok(())
}

fn clippy(sh: &Shell) -> Result<()> {
    cmd!(sh, "cargo clippy --all-features --all-targets -- -D warnings").run()?;
    Ok(())
}

fn test(sh: &Shell) -> Result<()> {
    cmd!(sh, "cargo test --all-features").run()?;
    cmd!(sh, "cargo test --no-default-features --lib").run()?;
    Ok(())
}

fn no_std(sh: &Shell) -> Result<()> {
    cmd!(sh, "cargo build --no-default-features --lib").run()?;
    Ok(())
}

fn bench(sh: &Shell, filter: Option<String>) -> Result<()> {
    let filter = filter.into_iter();
    cmd!(sh, "cargo bench --bench benchmarks -- {filter...}").run()?;
    Ok(())
}

fn project_root() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(1)
        .map(std::path::Path::to_path_buf)
        .unwrap_or_default()
}
