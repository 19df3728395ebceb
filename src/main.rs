use std::io;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use life_counter::core::SessionConfig;
use life_counter::tui::{ui, App};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    life_counter::logging::init();

    let config = if std::env::args().skip(1).any(|arg| arg == "--duel") {
        SessionConfig::duel()
    } else {
        SessionConfig::multiplayer()
    };
    log::info!(
        "life-counter v{} starting ({:?})",
        life_counter::VERSION,
        config.variant
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, App::new(config));

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> io::Result<()> {
    while !app.should_quit() {
        if app.take_redraw() {
            terminal.draw(|frame| ui::render(frame, &app))?;
        }

        match event::read()? {
            Event::Key(key) => app.handle_key(key),
            Event::Resize(..) => app.request_redraw(),
            _ => {}
        }
    }

    log::info!("exiting");
    Ok(())
}
