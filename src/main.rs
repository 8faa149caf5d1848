//! Terminal falling-block game (default binary).
//!
//! Runs a fixed-rate frame loop: drain input, advance the descent timer,
//! render, sleep out the rest of the frame. While paused or after game over
//! the loop blocks on the next terminal event instead of spinning.

use std::fs::File;
use std::ops::ControlFlow;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use log::{debug, error, info};

use fallgrid::config::{ColorConfig, Config, ConfigSource};
use fallgrid::core::Game;
use fallgrid::input::{handle_event, should_quit};
use fallgrid::term::{FrameBuffer, GameView, Palette, Rgb, TerminalRenderer, ViewLayout};

#[derive(Debug, Parser)]
#[command(name = "fallgrid", version, about = "Falling-block puzzle game for the terminal")]
struct Cli {
    /// Config file (overrides FALLGRID_CONFIG and the default location)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Seed for the piece sequence
    #[arg(long)]
    seed: Option<u32>,

    /// Board width in columns
    #[arg(long)]
    width: Option<u16>,

    /// Board height in rows
    #[arg(long)]
    height: Option<u16>,

    /// Log file; the terminal itself is used for drawing
    #[arg(long, value_name = "PATH", default_value = "fallgrid.log")]
    log_file: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_file)?;

    let (mut config, source) = Config::discover(cli.config.as_deref())?;
    match &source {
        ConfigSource::Defaults => info!("using default configuration"),
        ConfigSource::File(path) => info!("loaded configuration from {}", path.display()),
    }
    if cli.width.is_some() {
        config.board.width = cli.width;
    }
    if cli.height.is_some() {
        config.board.height = cli.height;
    }
    config.validate()?;

    let seed = cli.seed.unwrap_or_else(seed_from_clock);

    let mut term = TerminalRenderer::new();
    let result = term.enter().and_then(|()| run(&mut term, &config, seed));

    // Always try to restore terminal state.
    if let Err(err) = term.exit() {
        error!("failed to restore terminal: {err:#}");
    }
    if let Err(err) = &result {
        error!("{err:#}");
    }
    result
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn seed_from_clock() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn palette(colors: &ColorConfig) -> Palette {
    Palette {
        background: Rgb::from(colors.background),
        grid: Rgb::from(colors.grid),
        border: Rgb::from(colors.border),
        board: Rgb::from(colors.board),
        piece: Rgb::from(colors.piece),
        text: Rgb::from(colors.text),
        button: Rgb::from(colors.button),
        button_text: Rgb::from(colors.button_text),
    }
}

fn run(term: &mut TerminalRenderer, config: &Config, seed: u32) -> Result<()> {
    let view = GameView::default().with_palette(palette(&config.colors));
    let viewport = term.viewport()?;
    let game_config = config.game_config(view.fit_board(viewport))?;
    info!(
        "starting {}x{} board, seed {}",
        game_config.board_width, game_config.board_height, seed
    );

    let mut game = Game::new(game_config, seed);
    let mut snap = game.snapshot();
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);
    let mut layout = ViewLayout::default();
    let frame = config.frame_duration();
    let mut last_tick = Instant::now();

    loop {
        let frame_start = Instant::now();

        // Input.
        while event::poll(Duration::ZERO)? {
            let event = event::read()?;
            if dispatch(&mut game, &event, &layout, term).is_break() {
                return Ok(());
            }
        }

        // Gravity.
        let now = Instant::now();
        let elapsed = u32::try_from(now.duration_since(last_tick).as_millis()).unwrap_or(u32::MAX);
        last_tick = now;
        game.tick(elapsed);

        // Render.
        let viewport = term.viewport()?;
        game.snapshot_into(&mut snap);
        layout = view.render_into(&snap, viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        if game.status().shows_overlay() {
            let event = event::read()?;
            if dispatch(&mut game, &event, &layout, term).is_break() {
                return Ok(());
            }
            // Time spent waiting does not count toward the descent timer.
            last_tick = Instant::now();
            continue;
        }

        if let Some(rest) = frame.checked_sub(frame_start.elapsed()) {
            std::thread::sleep(rest);
        }
    }
}

/// Route one terminal event to the game.
fn dispatch(
    game: &mut Game,
    event: &Event,
    layout: &ViewLayout,
    term: &mut TerminalRenderer,
) -> ControlFlow<()> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press && should_quit(*key) => {
            info!("quit requested");
            return ControlFlow::Break(());
        }
        Event::Resize(width, height) => {
            debug!("terminal resized to {width}x{height}");
            term.invalidate();
        }
        _ => {}
    }

    if let Some(action) = handle_event(event, layout.restart_button) {
        if game.apply_action(action) {
            debug!("applied {}", action.as_str());
        }
    }
    ControlFlow::Continue(())
}
