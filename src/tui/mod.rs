pub mod app;
pub mod event;
pub mod theme;
pub mod ui;

pub use app::App;
pub use event::Action;
pub use theme::{resolve_theme, ThemeColors};

use std::io::{self, Stderr};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

use crossterm::cursor::{Hide, Show};
use crossterm::event::{Event, EventStream};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use futures::{Stream, StreamExt};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;

use crate::config::ThemeMode;
use crate::error::AppError;
use crate::github::types::Record;

/// Anything that lets the user pick one record out of a list
#[allow(async_fn_in_trait)]
pub trait Picker {
    /// Returns the chosen record's URL, or `None` when the user backed out
    async fn pick(&self, records: Vec<Record>, label: &str) -> Result<Option<String>, AppError>;
}

/// Interactive picker drawn on stderr
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPicker {
    theme: ThemeMode,
}

impl TerminalPicker {
    pub fn new(theme: ThemeMode) -> Self {
        Self { theme }
    }
}

impl Picker for TerminalPicker {
    async fn pick(&self, records: Vec<Record>, label: &str) -> Result<Option<String>, AppError> {
        // Resolved here so the terminal is only queried when the picker is shown
        let theme = resolve_theme(self.theme);
        run_selection(records, label, theme).await
    }
}

/// Owns the terminal while the picker runs.
///
/// The UI goes to stderr so stdout stays clean for the caller. Raw mode and
/// the alternate screen are undone in `Drop`, which covers every way out of
/// the loop including `?` and panics.
pub struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stderr>>,
}

impl TerminalGuard {
    pub fn acquire() -> io::Result<Self> {
        enable_raw_mode()?;

        let mut stderr = io::stderr();
        if let Err(e) = execute!(stderr, EnterAlternateScreen, Hide) {
            restore_terminal();
            return Err(e);
        }

        let terminal = match Terminal::new(CrosstermBackend::new(stderr)) {
            Ok(terminal) => terminal,
            Err(e) => {
                restore_terminal();
                return Err(e);
            }
        };

        TERMINAL_ACTIVE.store(true, Ordering::SeqCst);
        install_panic_hook();
        Ok(Self { terminal })
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<Stderr>> {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        release_terminal();
    }
}

/// Set while a `TerminalGuard` holds the terminal
static TERMINAL_ACTIVE: AtomicBool = AtomicBool::new(false);

/// Restore the terminal once; later calls are no-ops until it is acquired again
fn release_terminal() -> bool {
    let was_active = TERMINAL_ACTIVE.swap(false, Ordering::SeqCst);
    if was_active {
        restore_terminal();
    }
    was_active
}

fn restore_terminal() {
    let mut stderr = io::stderr();
    let _ = disable_raw_mode();
    let _ = execute!(stderr, LeaveAlternateScreen, Show);
}

fn install_panic_hook() {
    static HOOK: OnceLock<()> = OnceLock::new();
    HOOK.get_or_init(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            release_terminal();
            previous(info);
        }));
    });
}

/// Run the picker on the real terminal and return the chosen URL.
///
/// An empty `records` list still shows the picker; confirming on it chooses nothing.
pub async fn run_selection(
    records: Vec<Record>,
    label: &str,
    theme: ThemeColors,
) -> Result<Option<String>, AppError> {
    let mut app = App::new(records, label).with_theme(theme);

    let mut guard = TerminalGuard::acquire().map_err(AppError::UiLaunch)?;
    let mut events = EventStream::new();
    let result = run_loop(guard.terminal_mut(), &mut events, &mut app).await;

    // Restore terminal before anything else gets printed
    drop(guard);

    result.map_err(AppError::UiLaunch)?;
    Ok(app.into_chosen())
}

/// Draw, wait for one event, apply it, repeat until the session ends.
///
/// The stream running dry counts as a cancel.
pub async fn run_loop<B, S>(
    terminal: &mut Terminal<B>,
    events: &mut S,
    app: &mut App,
) -> io::Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
    S: Stream<Item = io::Result<Event>> + Unpin,
{
    loop {
        terminal
            .draw(|frame| ui::draw(frame, app))
            .map_err(io::Error::other)?;

        if app.is_terminated() {
            return Ok(());
        }

        match events.next().await {
            Some(Ok(event)) => app.apply(event::action_for_event(&event)),
            Some(Err(e)) => return Err(e),
            None => app.apply(Action::Cancel),
        }
    }
}
