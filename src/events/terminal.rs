use crate::config::hotkeys::{get_action_for_event, get_action_for_search};
use crate::config::HotkeyAction;
use crate::state::{Focus, State, View};
use crate::error::{AppError, AppResult};
use clipboard::{ClipboardContext, ClipboardProvider};
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    _tx: mpsc::Sender<Event<KeyEvent>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || loop {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            match event::poll(tick_rate) {
                Ok(true) => {
                    if let Ok(CrosstermEvent::Key(key)) = event::read() {
                        if tx_clone.send(Event::Input(key)).is_err() {
                            break;
                        }
                    }
                }
                Ok(false) => (),
                Err(e) => {
                    error!("Failed to poll terminal events: {}", e);
                    break;
                }
            }
            if tx_clone.send(Event::Tick).is_err() {
                break;
            }
        });
        Handler { rx, _tx: tx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> AppResult<bool> {
        let event = self
            .rx
            .recv()
            .map_err(|e| AppError::Terminal(format!("input channel closed: {}", e)))?;
        match event {
            Event::Input(key) => Ok(handle_key(state, key)),
            Event::Tick => {
                if state.get_fetch_state().is_loading() {
                    state.advance_spinner_index();
                }
                Ok(true)
            }
        }
    }
}

/// Apply a key press to state. Returns false if exit was requested.
///
pub fn handle_key(state: &mut State, key: KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return true;
    }
    if let KeyEvent {
        code: KeyCode::Char('c'),
        modifiers: KeyModifiers::CONTROL,
        ..
    } = key
    {
        debug!("Processing exit terminal event '{:?}'...", key);
        return false;
    }

    if state.is_search_mode() {
        match get_action_for_search(&key, state.get_hotkeys()) {
            Some(HotkeyAction::SearchSubmit) => {
                if let Err(e) = state.submit_search() {
                    warn!("Company search not applied: {}", e);
                }
            }
            Some(HotkeyAction::SearchCancel) => {
                state.exit_search_mode();
            }
            _ => {
                state.search_input(key);
            }
        }
        return true;
    }

    match get_action_for_event(&key, state.current_view(), state.get_hotkeys()) {
        Some(action) => {
            debug!("Processing {:?} for terminal event '{:?}'...", action, key);
            handle_action(state, action)
        }
        None => true,
    }
}

/// Apply a bound action to state. Returns false if exit was requested.
///
fn handle_action(state: &mut State, action: HotkeyAction) -> bool {
    match action {
        HotkeyAction::Quit => return false,
        HotkeyAction::NavigateNext => match state.current_focus() {
            Focus::Categories => {
                state.next_category();
            }
            _ => {
                state.next_job();
            }
        },
        HotkeyAction::NavigatePrev => match state.current_focus() {
            Focus::Categories => {
                state.previous_category();
            }
            _ => {
                state.previous_job();
            }
        },
        HotkeyAction::SwitchFocus => {
            state.switch_focus();
        }
        HotkeyAction::Select => {
            let result = match state.current_focus() {
                Focus::Categories => state.select_current_category(),
                _ => state.open_selected_job(),
            };
            if let Err(e) = result {
                debug!("Nothing to select: {}", e);
            }
        }
        HotkeyAction::NextPage => {
            if let Err(e) = state.next_page() {
                debug!("Staying on page {}: {}", state.get_page(), e);
            }
        }
        HotkeyAction::PreviousPage => {
            if let Err(e) = state.previous_page() {
                debug!("Staying on page {}: {}", state.get_page(), e);
            }
        }
        HotkeyAction::EnterSearch => {
            state.enter_search_mode();
        }
        HotkeyAction::ClearFilter => {
            state.clear_filter();
        }
        HotkeyAction::Refresh => match state.current_view() {
            View::JobList => {
                state.refresh();
            }
            View::JobDetail => {
                if let Err(e) = state.refresh_job_detail() {
                    warn!("Unable to refresh job details: {}", e);
                }
            }
        },
        HotkeyAction::ToggleTheme => {
            state.toggle_theme();
        }
        HotkeyAction::ToggleLog => {
            state.toggle_log();
        }
        HotkeyAction::ScrollDown => {
            state.scroll_detail_down();
        }
        HotkeyAction::ScrollUp => {
            state.scroll_detail_up();
        }
        HotkeyAction::CopyApplyUrl => copy_apply_url(state),
        HotkeyAction::Back => {
            state.close_job_detail();
        }
        HotkeyAction::SearchSubmit | HotkeyAction::SearchCancel => (),
    }
    true
}

/// Copy the open job's application link to the clipboard.
///
fn copy_apply_url(state: &State) {
    let link = match state.get_job_detail().and_then(|job| job.application_link()) {
        Some(link) => link.to_string(),
        None => {
            warn!("Open job has no application link to copy");
            return;
        }
    };
    match ClipboardContext::new() {
        Ok(mut ctx) => match ctx.set_contents(link) {
            Ok(_) => {
                info!("Application link copied to clipboard");
            }
            Err(e) => {
                warn!("Failed to copy to clipboard: {}", e);
            }
        },
        Err(e) => {
            warn!("Failed to initialize clipboard: {}", e);
        }
    }
}
