//! Build automation tasks for Road Rush
//!
//! Usage:
//!   cargo xtask build-web         # Build WASM for web deployment
//!   cargo xtask package-itch      # Create zip for itch.io upload
//!   cargo xtask package-native    # Build a native release with assets

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Binary/wasm name produced by cargo
const BIN_NAME: &str = "roadrush";

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation for Road Rush")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build WASM for web deployment
    BuildWeb,
    /// Create zip file ready for itch.io upload
    PackageItch,
    /// Build a native release next to a copy of the assets
    PackageNative {
        /// Target platform name used for the output folder: windows, macos, linux
        #[arg(long)]
        platform: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::BuildWeb => build_web(),
        Commands::PackageItch => package_itch(),
        Commands::PackageNative { platform } => package_native(platform),
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

/// Download a file from URL to destination
fn download_file(url: &str, dest: &Path) -> Result<()> {
    println!("Downloading {}...", url);
    run_cmd(
        Command::new("curl")
            .args(["-L", "-o"])
            .arg(dest)
            .arg(url),
    )
}

/// Copy directory recursively
fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<()> {
    std::fs::create_dir_all(dst)?;
    for entry in std::fs::read_dir(src)? {
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

/// Copy the assets folder and the config file (when present) into `dist`
fn copy_game_files(root: &Path, dist: &Path) -> Result<()> {
    let assets = root.join("assets");
    if assets.exists() {
        copy_dir_recursive(&assets, &dist.join("assets"))?;
    } else {
        println!("No assets/ folder found; the game will draw placeholders");
    }
    let config = root.join("roadrush.ron");
    if config.exists() {
        std::fs::copy(&config, dist.join("roadrush.ron"))?;
    }
    Ok(())
}

/// Minimal page that boots the wasm through macroquad's JS loader
fn index_html() -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Road Rush</title>
    <style>html, body, canvas {{ margin: 0; padding: 0; width: 100%; height: 100%; overflow: hidden; background: black; }}</style>
</head>
<body>
    <canvas id="glcanvas" tabindex="1"></canvas>
    <script src="mq_js_bundle.js"></script>
    <script>load("{}.wasm");</script>
</body>
</html>
"#,
        BIN_NAME
    )
}

/// Build WASM for web deployment
fn build_web() -> Result<()> {
    let root = project_root()?;
    let dist = root.join("dist/web");

    println!("Building WASM...");
    run_cmd(
        Command::new("cargo")
            .current_dir(&root)
            .args(["build", "--release", "--target", "wasm32-unknown-unknown"]),
    )?;

    // Clean and create dist folder
    if dist.exists() {
        std::fs::remove_dir_all(&dist)?;
    }
    std::fs::create_dir_all(&dist)?;

    println!("Copying files to dist/web...");
    let wasm = format!("{}.wasm", BIN_NAME);
    std::fs::copy(
        root.join("target/wasm32-unknown-unknown/release").join(&wasm),
        dist.join(&wasm),
    )?;
    std::fs::write(dist.join("index.html"), index_html())?;

    // Download macroquad JS bundle
    download_file(
        "https://raw.githubusercontent.com/not-fl3/macroquad/v0.4.14/js/mq_js_bundle.js",
        &dist.join("mq_js_bundle.js"),
    )?;

    copy_game_files(&root, &dist)?;

    println!("Web build complete: dist/web/");
    Ok(())
}

/// Create zip for itch.io
fn package_itch() -> Result<()> {
    // First build web
    build_web()?;

    let root = project_root()?;
    let dist = root.join("dist");
    let zip_name = format!("{}-itch.zip", BIN_NAME);
    let zip_path = dist.join(&zip_name);

    // Remove old zip if exists
    if zip_path.exists() {
        std::fs::remove_file(&zip_path)?;
    }

    println!("Creating itch.io zip...");
    run_cmd(
        Command::new("zip")
            .current_dir(dist.join("web"))
            .arg("-r")
            .arg(format!("../{}", zip_name))
            .arg("."),
    )?;

    println!("itch.io package ready: dist/{}", zip_name);
    Ok(())
}

/// Build a native release
fn package_native(platform: Option<String>) -> Result<()> {
    let root = project_root()?;
    let platform = platform.unwrap_or_else(|| {
        if cfg!(target_os = "windows") {
            "windows".to_string()
        } else if cfg!(target_os = "macos") {
            "macos".to_string()
        } else {
            "linux".to_string()
        }
    });

    let dist = root.join(format!("dist/native/{}", platform));

    println!("Building native release for {}...", platform);

    // Clean and create dist folder
    if dist.exists() {
        std::fs::remove_dir_all(&dist)?;
    }
    std::fs::create_dir_all(&dist)?;

    run_cmd(
        Command::new("cargo")
            .current_dir(&root)
            .args(["build", "--release"]),
    )?;

    let binary_name = if platform == "windows" {
        format!("{}.exe", BIN_NAME)
    } else {
        BIN_NAME.to_string()
    };

    std::fs::copy(
        root.join("target/release").join(&binary_name),
        dist.join(&binary_name),
    )?;

    copy_game_files(&root, &dist)?;

    println!("Native build complete: dist/native/{}/", platform);
    Ok(())
}
