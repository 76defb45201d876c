//! Build automation tasks for Alien Game
//!
//! Usage:
//!   cargo run -p xtask -- package            # Release build into dist/
//!   cargo run -p xtask -- package --zip      # ...and zip it

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::Command;

const BINARY: &str = "alien-game";

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation for Alien Game")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a release binary and copy it with content/ and config.ron into dist/
    Package {
        /// Also create dist/alien-game.zip
        #[arg(long)]
        zip: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Package { zip } => package(zip),
    }
}

/// Get the project root directory
fn project_root() -> Result<PathBuf> {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .context("xtask has no parent directory")
}

/// Run a command and check for success
fn run_cmd(cmd: &mut Command) -> Result<()> {
    let status = cmd.status().context("Failed to execute command")?;
    if !status.success() {
        anyhow::bail!("Command failed with status: {}", status);
    }
    Ok(())
}

/// Copy directory recursively
fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<()> {
    std::fs::create_dir_all(dst)?;
    for entry in std::fs::read_dir(src).with_context(|| format!("Reading {}", src.display()))? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

fn binary_name() -> String {
    if cfg!(target_os = "windows") {
        format!("{}.exe", BINARY)
    } else {
        BINARY.to_string()
    }
}

fn package(zip: bool) -> Result<()> {
    let root = project_root()?;
    let dist = root.join("dist").join(BINARY);

    println!("Building native release...");
    run_cmd(
        Command::new("cargo")
            .current_dir(&root)
            .args(["build", "--release", "--bin", BINARY]),
    )?;

    // Clean and create dist folder
    if dist.exists() {
        std::fs::remove_dir_all(&dist)?;
    }
    std::fs::create_dir_all(&dist)?;

    let binary = binary_name();
    std::fs::copy(root.join("target/release").join(&binary), dist.join(&binary))
        .with_context(|| format!("Copying {}", binary))?;

    let content = root.join("content");
    if content.exists() {
        copy_dir_recursive(&content, &dist.join("content"))?;
    } else {
        println!("No content/ directory, skipping");
    }

    let config = root.join("config.ron");
    if config.exists() {
        std::fs::copy(&config, dist.join("config.ron"))?;
    }

    if zip {
        let zip_path = root.join("dist").join(format!("{}.zip", BINARY));
        if zip_path.exists() {
            std::fs::remove_file(&zip_path)?;
        }
        println!("Creating zip...");
        run_cmd(
            Command::new("zip")
                .current_dir(root.join("dist"))
                .args(["-r", &format!("{}.zip", BINARY), BINARY]),
        )?;
        println!("Zip ready: dist/{}.zip", BINARY);
    }

    println!("Package complete: dist/{}/", BINARY);
    Ok(())
}
