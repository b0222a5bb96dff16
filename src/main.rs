// SPDX-License-Identifier: GPL-3.0-only

use clap::{Parser, Subcommand};

mod cli;

#[derive(Parser)]
#[command(name = "camera-controls")]
#[command(about = "On-screen control widgets for camera applications")]
#[command(version)]
#[command(subcommand_required = false)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Trace an orientation transition without a UI
    Spin {
        /// Starting orientation in degrees
        #[arg(short, long, default_value = "0")]
        from: i32,

        /// Target orientation in degrees
        #[arg(short, long, default_value = "90")]
        to: i32,

        /// Sample rate in frames per second
        #[arg(long, default_value = "60")]
        fps: u32,
    },

    /// Play the sound effect for a camera action
    Play {
        /// Action name (shutter, focus, video-start, video-pause,
        /// video-stop, burst-start, burst-loop, burst-end, panorama)
        action: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    // Set RUST_LOG environment variable to control log level
    // Examples: RUST_LOG=debug, RUST_LOG=camera_controls=debug, RUST_LOG=info
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(true)
        .with_level(true)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Spin { from, to, fps }) => cli::spin(from, to, fps),
        Some(Commands::Play { action }) => cli::play(&action),
        None => camera_controls::terminal::run(),
    }
}
