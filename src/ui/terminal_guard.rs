use crossterm::cursor::{Hide, Show};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear as TermClear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use parking_lot::Mutex;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::Arc;

type Restore = Box<dyn FnOnce() + Send + 'static>;
type RestoreSlot = Arc<Mutex<Option<Restore>>>;

/// Puts the terminal back the way it was, on drop or on panic, exactly once.
pub struct TerminalGuard {
    slot: RestoreSlot,
}

impl TerminalGuard {
    fn arm(restore: impl FnOnce() + Send + 'static) -> Self {
        let slot: RestoreSlot = Arc::new(Mutex::new(Some(Box::new(restore))));

        let hook_slot = Arc::clone(&slot);
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            run_restore(&hook_slot);
            previous(info);
        }));

        Self { slot }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        run_restore(&self.slot);
    }
}

fn run_restore(slot: &RestoreSlot) {
    // Taken before running so the lock is not held during terminal I/O.
    let restore = slot.lock().take();
    if let Some(restore) = restore {
        restore();
    }
}

/// Raw mode plus alternate screen, with the cursor hidden.
pub fn setup_terminal() -> io::Result<(Terminal<CrosstermBackend<Stdout>>, TerminalGuard)> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(TermClear(ClearType::All))?;
    stdout.execute(Hide)?;

    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    let guard = TerminalGuard::arm(|| {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = stdout.execute(LeaveAlternateScreen);
        let _ = stdout.execute(Show);
    });

    Ok((terminal, guard))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn restore_runs_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let slot: RestoreSlot = Arc::new(Mutex::new(Some(Box::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }))));

        run_restore(&slot);
        run_restore(&slot);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
