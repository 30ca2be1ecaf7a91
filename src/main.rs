use folio::app::App;
use folio::carousel::Direction;
use folio::events::AppEvent;
use folio::layout::Viewport;
use folio::manifest::{self, Portfolio};
use folio::terminal::{enter_tui_mode, leave_tui_mode, setup_panic_hook};
use folio::ui;

use color_eyre::Result;
use crossterm::event::{
    Event, EventStream, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> Result<()> {
    if std::env::args().any(|arg| arg == "--version") {
        println!("folio {}", VERSION);
        std::process::exit(0);
    }

    color_eyre::install()?;
    setup_panic_hook();
    init_tracing();

    let manifest_arg = std::env::args()
        .skip(1)
        .find(|arg| !arg.starts_with("--"))
        .map(PathBuf::from);
    let portfolio = resolve_portfolio(manifest_arg)?;

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run_tui(portfolio))
}

/// Resolution order: explicit path argument, then the user config
/// directory, then the built-in sample portfolio.
fn resolve_portfolio(arg: Option<PathBuf>) -> Result<Portfolio> {
    if let Some(path) = arg {
        return Ok(Portfolio::load(&path)?);
    }
    if let Some(path) = manifest::default_manifest_path() {
        if path.exists() {
            return Ok(Portfolio::load(&path)?);
        }
    }
    Ok(Portfolio::sample())
}

/// Structured logging to a file under the cache directory, enabled by the
/// `FOLIO_LOG` env filter. Never writes to stdout: the TUI owns it.
fn init_tracing() {
    let Ok(filter) = std::env::var("FOLIO_LOG") else {
        return;
    };
    let Some(cache) = dirs::cache_dir() else {
        return;
    };
    let dir = cache.join("folio");
    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = std::fs::File::create(dir.join("folio.log")) else {
        return;
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .try_init();
}

/// Pixel width reported by the terminal, when it exposes one.
fn window_pixel_width() -> Option<u32> {
    crossterm::terminal::window_size()
        .ok()
        .and_then(|ws| (ws.width > 0).then_some(ws.width as u32))
}

async fn run_tui(portfolio: Portfolio) -> Result<()> {
    let mut stdout = io::stdout();
    enter_tui_mode(&mut stdout)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (cols, rows) = crossterm::terminal::size()?;
    let mut app = App::new(portfolio, Viewport::new(cols, rows, window_pixel_width()));

    let result = run_app(&mut terminal, &mut app).await;

    leave_tui_mode(terminal.backend_mut());
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, &mut *app))?;
            app.needs_redraw = false;
        }

        let timeout = tokio::time::sleep(std::time::Duration::from_millis(50));

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                if let Some(Ok(event)) = event_result {
                    dispatch_terminal_event(app, event);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Translate a raw terminal event into an [`AppEvent`] (or a hit-area
/// click) and hand it to the app.
fn dispatch_terminal_event(app: &mut App, event: Event) {
    match event {
        Event::Resize(cols, rows) => {
            app.handle_event(AppEvent::Resize {
                cols,
                rows,
                width_px: window_pixel_width(),
            });
        }

        Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.handle_event(AppEvent::Quit);
            }
            KeyCode::Char('q') => app.handle_event(AppEvent::Quit),
            KeyCode::Esc => app.handle_event(AppEvent::Escape),
            KeyCode::Char('x') => app.handle_event(AppEvent::CloseModal),
            KeyCode::Char('o') => app.handle_event(AppEvent::OpenExternal),
            KeyCode::Left | KeyCode::Char('h') => nav_active(app, Direction::Prev),
            KeyCode::Right | KeyCode::Char('l') => nav_active(app, Direction::Next),
            KeyCode::Up | KeyCode::Char('k') => app.handle_event(AppEvent::ScrollBy(-2)),
            KeyCode::Down | KeyCode::Char('j') => app.handle_event(AppEvent::ScrollBy(2)),
            KeyCode::PageUp => {
                app.handle_event(AppEvent::ScrollBy(-(folio::layout::SECTION_ROWS as i16)));
            }
            KeyCode::PageDown => {
                app.handle_event(AppEvent::ScrollBy(folio::layout::SECTION_ROWS as i16));
            }
            KeyCode::Home => app.handle_event(AppEvent::JumpToSection(0)),
            KeyCode::Enter => activate_active(app),
            KeyCode::Char(c) if c.is_ascii_digit() && c != '0' => {
                app.handle_event(AppEvent::JumpToSection(c as usize - '1' as usize));
            }
            _ => {}
        },

        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(action) = app.hit_areas.hit_test(mouse.column, mouse.row).cloned() {
                    app.handle_click(action);
                }
            }
            MouseEventKind::ScrollUp => app.handle_event(AppEvent::ScrollBy(-2)),
            MouseEventKind::ScrollDown => app.handle_event(AppEvent::ScrollBy(2)),
            _ => {}
        },

        _ => {}
    }
}

/// Page the carousel under the active navigation entry.
fn nav_active(app: &mut App, direction: Direction) {
    if let Some(carousel) = app.active_carousel_id() {
        app.handle_event(AppEvent::Nav {
            carousel,
            direction,
        });
    }
}

/// Open the first visible item of the active section's carousel.
fn activate_active(app: &mut App) {
    if let Some(carousel) = app.active_carousel_id() {
        let index = app.carousels.offset(&carousel).unwrap_or(0);
        app.handle_event(AppEvent::Activate { carousel, index });
    }
}
