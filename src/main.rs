use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{
    self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use crossterm::terminal::supports_keyboard_enhancement;
use ratatui::DefaultTerminal;

use place_suggest::app::App;
use place_suggest::config::load_config;

const LOG_FILE: &str = "place-suggest.log";
const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(16);

/// City and airport autocomplete for a travel search form
///
/// Pick a departure and a destination, then press Ctrl+S (or Enter with
/// nothing highlighted) to print the chosen places as JSON.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file to use instead of <config dir>/place-suggest/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Initial text of the From field
    #[arg(long)]
    from: Option<String>,

    /// Initial text of the To field
    #[arg(long)]
    to: Option<String>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();
    initialize_logger();

    // Load before touching the terminal so config errors print normally
    let config = load_config(args.config.as_deref())?;

    let mut app = App::new(&config);
    if let Some(text) = &args.from {
        app.prefill(0, text);
    }
    if let Some(text) = &args.to {
        app.prefill(1, text);
    }

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    let keyboard_enhanced = matches!(supports_keyboard_enhancement(), Ok(true));
    let result = enable_input_features(keyboard_enhanced)
        .map_err(color_eyre::Report::from)
        .and_then(|()| run(terminal, &mut app));

    disable_input_features(keyboard_enhanced);
    ratatui::restore();
    result?;

    if let Some(output) = app.output() {
        println!("{}", output);
    }

    Ok(())
}

/// Mouse capture, bracketed paste and, where the terminal supports it,
/// disambiguated key codes so Shift+Enter keeps its modifier
///
/// Without keyboard enhancement Shift+Enter arrives as plain Enter; Alt+Enter
/// is the refine binding that works everywhere.
fn enable_input_features(keyboard_enhanced: bool) -> io::Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, EnableMouseCapture, EnableBracketedPaste)?;
    if keyboard_enhanced {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
    }
    Ok(())
}

fn disable_input_features(keyboard_enhanced: bool) {
    let mut stdout = io::stdout();
    if keyboard_enhanced {
        let _ = execute!(stdout, PopKeyboardEnhancementFlags);
    }
    let _ = execute!(stdout, DisableMouseCapture, DisableBracketedPaste);
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        app.tick(Instant::now());

        terminal.draw(|frame| app.render(frame))?;

        if event::poll(EVENT_POLL_INTERVAL)? {
            app.handle_event(event::read()?);
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// Send logs to a file in the cache directory; the terminal belongs to the UI
fn initialize_logger() {
    let Some(dir) = dirs::cache_dir().map(|dir| dir.join("place-suggest")) else {
        return;
    };
    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE))
    else {
        return;
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}: {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
