use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use pixcast::core::dashboard::{dashboard_commands, sample_series, GraphSeries};
use pixcast::core::{animation_states_for, render, CommandDocument};
use pixcast::gfx::{Color, FontSize, Size};
use pixcast::renderer::DisplayMode;
use pixcast::sync::SystemClock;
use pixcast::ui::{run_preview, PreviewOptions};
use pixcast::utils::config::RenderConfig;
use pixcast::utils::{file_utils, logger};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// `{ size, data: { red, green, blue } }`
    Rgb,
    /// `{ size, data: [u16] }`
    Packed565,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a command file once and print the bitmap as JSON
    Render {
        #[arg(short, long)]
        commands: PathBuf,
        #[arg(long)]
        width: Option<u32>,
        #[arg(long)]
        height: Option<u32>,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Rgb)]
        format: OutputFormat,
    },
    /// Replay a command file in the terminal
    Preview {
        #[arg(short, long)]
        commands: PathBuf,
        #[arg(long)]
        width: Option<u32>,
        #[arg(long)]
        height: Option<u32>,
        #[arg(short, long, help = "Milliseconds between passes (defaults to the document's animationDelay)")]
        tick_ms: Option<u64>,
        #[arg(short, long, value_enum)]
        mode: Option<DisplayMode>,
    },
    /// Preview the sample dashboard
    Demo {
        #[arg(short, long, value_delimiter = ',', help = "Graph these values instead of the built-in series")]
        samples: Vec<f64>,
        #[arg(long)]
        width: Option<u32>,
        #[arg(long)]
        height: Option<u32>,
        #[arg(short, long)]
        tick_ms: Option<u64>,
        #[arg(short, long, value_enum)]
        mode: Option<DisplayMode>,
    },
    /// Print the font presets as JSON
    Fonts,
}

fn canvas_size(config: &RenderConfig, width: Option<u32>, height: Option<u32>) -> Result<Size> {
    let size = Size::new(width.unwrap_or(config.width), height.unwrap_or(config.height));
    if size.width == 0 || size.height == 0 {
        bail!("canvas must be at least 1x1, got {}x{}", size.width, size.height);
    }
    Ok(size)
}

fn load_document(path: &Path) -> Result<CommandDocument> {
    let json = file_utils::read_to_string(path)?;
    CommandDocument::from_json(&json).with_context(|| format!("Invalid command document: {:?}", path))
}

fn main() -> Result<()> {
    logger::init();

    let cli = Cli::parse();
    let config = RenderConfig::load()?;

    match cli.command {
        Commands::Render {
            commands,
            width,
            height,
            format,
        } => {
            let size = canvas_size(&config, width, height)?;
            let document = load_document(&commands)?;
            let mut states = animation_states_for(&document.commands);
            let bitmap = render(size, &document.commands, &mut states, &SystemClock)?;

            let json = match format {
                OutputFormat::Rgb => serde_json::to_string(&bitmap)?,
                OutputFormat::Packed565 => serde_json::to_string(&bitmap.to_packed_565())?,
            };
            println!("{}", json);
        }
        Commands::Preview {
            commands,
            width,
            height,
            tick_ms,
            mode,
        } => {
            let size = canvas_size(&config, width, height)?;
            let document = load_document(&commands)?;
            let tick = Duration::from_millis(tick_ms.unwrap_or(document.config.animation_delay).max(1));

            logger::info(&format!(
                "Previewing {} commands from {:?} every {:?}",
                document.commands.len(),
                commands,
                tick
            ));
            run_preview(
                Arc::new(document.commands),
                PreviewOptions {
                    size,
                    tick,
                    mode: mode.unwrap_or(config.mode),
                },
            )?;
        }
        Commands::Demo {
            samples,
            width,
            height,
            tick_ms,
            mode,
        } => {
            let size = canvas_size(&config, width, height)?;
            let tick = tick_ms.map(Duration::from_millis).unwrap_or(config.tick).max(Duration::from_millis(1));

            let series = if samples.is_empty() {
                sample_series()
            } else {
                vec![GraphSeries::new("Data", samples, Color::new(80, 200, 120))]
            };
            let commands = dashboard_commands(size, &series, tick.as_millis() as u64, &SystemClock)?;

            run_preview(
                Arc::new(commands),
                PreviewOptions {
                    size,
                    tick,
                    mode: mode.unwrap_or(config.mode),
                },
            )?;
        }
        Commands::Fonts => {
            let presets: Vec<_> = FontSize::ALL.iter().map(|f| f.details()).collect();
            println!("{}", serde_json::to_string_pretty(&presets)?);
        }
    }

    Ok(())
}
