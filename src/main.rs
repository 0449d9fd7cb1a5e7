mod display;
mod keyboard;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use witch_shooter::entities::FRAME_RATE;
use witch_shooter::game::Game;
use witch_shooter::platform::{
    Clock, FrameBuffer, FrameGate, FramePacer, InputFrame, InputSource, RandomSource,
};
use witch_shooter::screen::Bitmap;

use display::TerminalScreen;
use keyboard::Keyboard;

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "witch_shooter", about = "Witch Shooter, played in the terminal")]
struct Args {
    /// Frames per second.
    #[arg(long, default_value_t = FRAME_RATE)]
    fps: u32,

    /// Fixed RNG seed, for repeatable runs.
    #[arg(long)]
    seed: Option<u64>,

    /// Where log output goes (the terminal itself is busy drawing).
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(path: &Path) -> std::io::Result<()> {
    let file = File::create(path)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

// ── Terminal platform ─────────────────────────────────────────────────────────

/// The terminal standing in for the handheld: keyboard in, half-block
/// pixels out, wall-clock time and a seeded RNG.
struct Console<W: Write> {
    screen: TerminalScreen<W>,
    keys: Keyboard,
    pacer: FramePacer,
    started: Instant,
    rng: StdRng,
}

impl<W: Write> FrameGate for Console<W> {
    /// Sleeps out the rest of the frame period when called early.
    fn next_frame(&mut self) -> bool {
        let now = self.millis();
        if self.pacer.poll(now) {
            return true;
        }
        thread::sleep(Duration::from_millis(self.pacer.remaining(now)));
        false
    }
}

impl<W: Write> InputSource for Console<W> {
    fn poll(&mut self) -> InputFrame {
        let now = self.millis();
        self.keys.poll(now)
    }
}

impl<W: Write> Clock for Console<W> {
    fn millis(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }
}

impl<W: Write> RandomSource for Console<W> {
    fn random(&mut self, n: u32) -> u32 {
        self.rng.random(n)
    }
}

impl<W: Write> FrameBuffer for Console<W> {
    fn clear(&mut self) {
        self.screen.clear();
    }

    fn draw_bitmap(&mut self, x: i32, y: i32, bitmap: &Bitmap) {
        self.screen.draw_bitmap(x, y, bitmap);
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str) {
        self.screen.draw_text(x, y, text);
    }

    fn display(&mut self) -> std::io::Result<()> {
        self.screen.display()
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    let log_path = args
        .log_file
        .clone()
        .unwrap_or_else(|| std::env::temp_dir().join("witch_shooter.log"));
    init_logging(&log_path)?;

    let seed = args.seed.unwrap_or_else(rand::random);
    info!("starting at {} fps, seed {}", args.fps, seed);

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Ghostty / kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let mut console = Console {
        screen: TerminalScreen::new(out),
        keys: Keyboard::new(rx),
        pacer: FramePacer::new(args.fps),
        started: Instant::now(),
        rng: StdRng::seed_from_u64(seed),
    };

    let result = run(&mut console);

    // Always restore the terminal
    let out = console.screen.writer();
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Err(err) = &result {
        log::error!("terminal error: {}", err);
    }
    result
}

fn run<W: Write>(console: &mut Console<W>) -> std::io::Result<()> {
    let mut game = Game::new();
    while !console.keys.quit_requested() {
        game.frame(console)?;
    }
    info!("quit with score {}", game.world.score);
    Ok(())
}
