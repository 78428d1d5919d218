mod logging;
mod terminal;

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use huecycle_config::Config;
use huecycle_core::{AnimationSpeed, Color, FrameView, HueCycle, HueState, Input, Surface};

use crate::terminal::TerminalSurface;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let mut config =
        Config::load(cli.config.as_deref()).wrap_err("failed to load configuration")?;
    cli.apply(&mut config);
    config.validate()?;

    if cli.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }
    if cli.write_config {
        let path = match &cli.config {
            Some(path) => path.clone(),
            None => Config::default_path()?,
        };
        config.save(&path)?;
        println!("wrote {}", path.display());
        return Ok(());
    }

    logging::init(cli.log_file.as_deref());
    tracing::info!(
        speed = %config.speed,
        saturation = config.saturation,
        lightness = config.lightness,
        interval_ms = config.frame_interval_ms,
        "starting hue cycle"
    );

    let terminal = ratatui::init();
    let result = TerminalSurface::new(terminal, config.mouse_quit)
        .wrap_err("failed to set up the terminal")
        .and_then(|surface| App::new(surface, &config).run());
    ratatui::restore();

    let state = result?;
    tracing::info!(hue = state.degrees(), "stopped");
    Ok(())
}

#[derive(Parser, Debug, Default)]
#[command(author, version, about = "Cycle the terminal through the hue spectrum", long_about = None)]
struct Cli {
    /// Config file to use instead of the default location.
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Hue step preset: slow, normal, fast or turbo.
    #[arg(short, long)]
    speed: Option<AnimationSpeed>,
    /// HSL saturation (0-100).
    #[arg(long, allow_negative_numbers = true)]
    saturation: Option<f32>,
    /// HSL lightness (0-100).
    #[arg(long, allow_negative_numbers = true)]
    lightness: Option<f32>,
    /// Delay between frames in milliseconds.
    #[arg(long)]
    interval_ms: Option<u64>,
    /// Travel the hue wheel backwards.
    #[arg(short, long)]
    reverse: bool,
    /// Start with the readout and key help hidden.
    #[arg(long)]
    no_help: bool,
    /// Do not quit on mouse clicks.
    #[arg(long)]
    no_mouse: bool,
    /// Print the effective configuration as TOML and exit.
    #[arg(long, conflicts_with = "write_config")]
    print_config: bool,
    /// Save the effective configuration to the config file and exit.
    #[arg(long)]
    write_config: bool,
    /// Log file (defaults to huecycle.log in the local data directory).
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    /// Apply command line overrides on top of the loaded config.
    fn apply(&self, config: &mut Config) {
        if let Some(speed) = self.speed {
            config.speed = speed;
        }
        if let Some(saturation) = self.saturation {
            config.saturation = saturation;
        }
        if let Some(lightness) = self.lightness {
            config.lightness = lightness;
        }
        if let Some(interval_ms) = self.interval_ms {
            config.frame_interval_ms = interval_ms;
        }
        if self.reverse {
            config.reversed = true;
        }
        if self.no_help {
            config.show_help = false;
        }
        if self.no_mouse {
            config.mouse_quit = false;
        }
    }
}

/// The main application which holds the animation state and the surface it
/// draws on.
#[derive(Debug)]
pub struct App<S> {
    /// Where frames are presented and input comes from.
    surface: S,
    /// Hue animation; owns the current hue.
    cycle: HueCycle,
    /// Time to wait for input between frames.
    frame_interval: Duration,
    /// Is the application running?
    running: bool,
    /// Is the hue frozen?
    paused: bool,
    /// Draw the readout and key help.
    show_help: bool,
}

impl<S> App<S>
where
    S: Surface,
    S::Error: std::error::Error + Send + Sync + 'static,
{
    /// Construct a new instance of [`App`].
    pub fn new(surface: S, config: &Config) -> Self {
        Self {
            surface,
            cycle: config.hue_cycle(),
            frame_interval: config.frame_interval(),
            running: false,
            paused: false,
            show_help: config.show_help,
        }
    }

    /// Run the application's main loop and return the final hue.
    pub fn run(mut self) -> color_eyre::Result<HueState> {
        self.running = true;
        while self.running {
            let color = if self.paused {
                self.cycle.current()
            } else {
                self.cycle.advance()
            };
            self.surface.present(&self.view(color))?;

            if let Some(input) = self.surface.poll_input(self.frame_interval)? {
                self.on_input(input);
            }
        }
        Ok(self.cycle.state())
    }

    fn view(&self, color: Color) -> FrameView {
        FrameView {
            color,
            hue: self.cycle.state().degrees(),
            speed: self.cycle.speed(),
            reversed: self.cycle.is_reversed(),
            paused: self.paused,
            show_help: self.show_help,
        }
    }

    /// Handles user input and updates the state of [`App`].
    fn on_input(&mut self, input: Input) {
        tracing::debug!(?input, "input");
        match input {
            Input::Quit => self.quit(),
            Input::TogglePause => self.paused = !self.paused,
            Input::Faster => self.cycle.set_speed(self.cycle.speed().next()),
            Input::Slower => self.cycle.set_speed(self.cycle.speed().prev()),
            Input::Reverse => self.cycle.reverse(),
            Input::ToggleHelp => self.show_help = !self.show_help,
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
