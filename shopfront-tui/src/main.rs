//! Shopfront — terminal storefront catalog browser.
//!
//! Browse a product catalog, narrow it with a mouse-draggable dual-thumb
//! price slider plus vendor/stock facets, shortlist pieces to compare, and
//! keep a recently-viewed trail across sessions.

use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use shopfront_core::settings;

use shopfront_tui::app::AppState;
use shopfront_tui::{data_loader, input, mouse, persistence, ui};

#[derive(Parser)]
#[command(name = "shopfront", about = "Shopfront — storefront catalog browser")]
struct Cli {
    /// Product catalog CSV. Falls back to built-in sample data.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Shop settings TOML (currency symbol, money format).
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Persisted state file. Defaults to the user config directory.
    #[arg(long)]
    state_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen, DisableMouseCapture);
        default_hook(info);
    }));

    // Paths
    let config_dir = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("shopfront");
    let state_path = cli
        .state_file
        .unwrap_or_else(|| config_dir.join("state.json"));
    let settings_path = cli
        .settings
        .unwrap_or_else(|| config_dir.join("settings.toml"));

    // Bootstrap: settings, catalog, persisted state.
    let shop_settings = settings::load(&settings_path);
    let (catalog, catalog_warning) = data_loader::load_catalog(cli.catalog.as_deref());
    let persisted = persistence::load(&state_path);

    let mut app = AppState::new(catalog, shop_settings, state_path.clone());
    persistence::apply(&mut app, persisted);
    if let Some(warning) = catalog_warning {
        app.set_warning(warning);
    }

    // Setup terminal. Mouse capture keeps drag events routed to us for the
    // slider, wherever the cursor goes.
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the main event loop
    let result = run_app(&mut terminal, &mut app);

    // Save state before exit
    let persisted = persistence::extract(&app);
    let _ = persistence::save(&state_path, &persisted);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Expire toasts, flush settled state changes
        app.toasts.tick();
        if app.save_pending.ready() {
            let _ = persistence::save(&app.state_path, &persistence::extract(app));
        }

        // 3. Poll for input events (50ms timeout for ~20 FPS tick)
        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) => input::handle_key(app, key),
                Event::Mouse(ev) => mouse::handle_mouse(app, ev),
                // A resize moves the track, invalidating a gesture's cached
                // rect; tear the drag down rather than drag a ghost.
                Event::Resize(_, _) => app.abort_gesture(),
                _ => {}
            }
        }

        // 4. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}
