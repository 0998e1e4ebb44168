use std::io::stdout;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use tipsy::app::{App, describe_config};
use tipsy::config::{AlignTo, Offset, TooltipOptions, load_config, load_config_from_path};

/// How long to wait for input before advancing timers and fades
const POLL_INTERVAL: Duration = Duration::from_millis(16);

/// Tooltip playground for the terminal
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Config file to use instead of ~/.config/tipsy/config.toml
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Position tips next to the element or next to the pointer
    #[arg(short, long, value_name = "element|cursor")]
    align_to: Option<AlignTo>,

    /// Milliseconds between hover and show
    #[arg(short, long, value_name = "MS")]
    delay: Option<u64>,

    /// Horizontal and vertical offset, e.g. "0,-1"
    #[arg(short, long, value_name = "DX,DY", allow_hyphen_values = true)]
    offset: Option<Offset>,

    /// Print the effective settings and exit
    #[arg(long)]
    print_config: bool,
}

impl Args {
    fn overrides(&self) -> TooltipOptions {
        let mut options = TooltipOptions::new();
        if let Some(align_to) = self.align_to {
            options = options.align_to(align_to);
        }
        if let Some(delay) = self.delay {
            options = options.delay(delay);
        }
        if let Some(offset) = self.offset {
            options = options.offset(offset.dx, offset.dy);
        }
        options
    }
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => load_config_from_path(path)?,
        None => load_config()?,
    };
    let overrides = args.overrides();

    if args.print_config {
        print!("{}", describe_config(&config, &overrides));
        return Ok(());
    }

    #[cfg(debug_assertions)]
    init_debug_logging();

    let (width, height) = crossterm::terminal::size()?;
    let app = App::new(width, height, &config, &overrides)?;

    let terminal = ratatui::init();
    execute!(stdout(), EnableMouseCapture)?;

    let result = run(terminal, app);

    execute!(stdout(), DisableMouseCapture)?;
    ratatui::restore();

    result
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(POLL_INTERVAL)? {
            app.handle_event(event::read()?, Instant::now())?;
        }
        app.tick(Instant::now())?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// Debug builds log to ~/.config/tipsy/debug.log, filtered by RUST_LOG
#[cfg(debug_assertions)]
fn init_debug_logging() {
    let Some(dir) = dirs::home_dir().map(|home| home.join(".config").join(tipsy::config::CONFIG_DIR)) else {
        return;
    };
    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = std::fs::File::create(dir.join("debug.log")) else {
        return;
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init();
}

