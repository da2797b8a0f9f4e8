use backdrop_common::PointerState;
use backdrop_render::{ParallaxCamera, Renderer, TextFrameRenderer};
use backdrop_scene::{CancelToken, Director, Scene};
use backdrop_tools::SceneInspector;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "backdrop-cli", about = "Headless host for the backdrop scene")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print engine version and crate info
    Info,
    /// Inspect a freshly built scene
    Inspect {
        /// Starfield seed
        #[arg(short, long, default_value = "42")]
        seed: u64,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Drive the scene for a number of ticks with a held pointer offset
    Run {
        /// Number of ticks to run
        #[arg(short, long, default_value = "300")]
        ticks: u64,
        /// Ticks per second of synthesized clock time
        #[arg(long, default_value = "60", value_parser = clap::value_parser!(u32).range(1..))]
        rate: u32,
        /// Starfield seed
        #[arg(short, long, default_value = "42")]
        seed: u64,
        /// Held pointer offset from viewport center, pixels
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        pointer_x: f32,
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        pointer_y: f32,
        /// Print a text frame every N ticks (0 = final frame only)
        #[arg(long, default_value = "60")]
        every: u64,
    },
    /// Show camera convergence toward a held pointer target
    Converge {
        /// Number of ticks to simulate
        #[arg(short, long, default_value = "60")]
        ticks: u64,
        #[arg(long, default_value = "300", allow_hyphen_values = true)]
        pointer_x: f32,
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        pointer_y: f32,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("backdrop-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("scene: entities={}", Scene::build(0).entity_count());
            println!("render: {}", backdrop_render::crate_info());
            println!("input: {}", backdrop_input::crate_info());
            println!("tools: {}", backdrop_tools::crate_info());
        }
        Commands::Inspect { seed, json } => {
            let scene = Scene::build(seed);
            if json {
                let reports = SceneInspector::list(&scene);
                println!("{}", serde_json::to_string_pretty(&reports)?);
            } else {
                println!("{}", SceneInspector::summary(&scene));
                for report in SceneInspector::list(&scene) {
                    println!("  {report}");
                }
            }
        }
        Commands::Run {
            ticks,
            rate,
            seed,
            pointer_x,
            pointer_y,
            every,
        } => {
            let mut scene = Scene::build(seed);
            let mut camera = ParallaxCamera::default();
            let pointer = PointerState {
                raw_x: pointer_x,
                raw_y: pointer_y,
            };
            let token = CancelToken::new();
            let text = TextFrameRenderer::new();

            tracing::info!(ticks, rate, seed, "headless run starting");
            let director = Director::new(1.0 / rate as f32);
            let ran = director.run(&mut scene, pointer, &token, Some(ticks), |s| {
                camera.follow(pointer);
                if every > 0 && s.tick() % every == 0 {
                    println!("{}", text.render(s, &camera));
                }
            });
            if every == 0 {
                println!("{}", text.render(&scene, &camera));
            }
            println!("Ran {ran} ticks; {}", SceneInspector::summary(&scene));
        }
        Commands::Converge {
            ticks,
            pointer_x,
            pointer_y,
        } => {
            let mut camera = ParallaxCamera::default();
            let pointer = PointerState {
                raw_x: pointer_x,
                raw_y: pointer_y,
            };
            let (target_yaw, target_pitch) = ParallaxCamera::target_for(pointer);
            println!("Target: yaw={target_yaw:+.5} pitch={target_pitch:+.5}");

            let initial_error = (target_yaw - camera.yaw).abs().max(1e-12);
            for tick in 1..=ticks {
                camera.follow(pointer);
                if tick % 10 == 0 || tick == ticks {
                    let residual = (target_yaw - camera.yaw).abs() / initial_error;
                    println!(
                        "tick {tick:4}: yaw={:+.5} residual={residual:.5} bound={:.5}",
                        camera.yaw,
                        0.95_f32.powi(tick as i32)
                    );
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_rate_is_rejected() {
        let parsed = Cli::try_parse_from(["backdrop-cli", "run", "--rate", "0"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn positive_rate_parses() {
        let parsed = Cli::try_parse_from(["backdrop-cli", "run", "--rate", "30"]);
        assert!(parsed.is_ok());
    }
}
