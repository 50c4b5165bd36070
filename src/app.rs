use crate::api::JobBank;
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::events::network::{Event as NetworkEvent, Handler as NetworkEventHandler};
use crate::events::terminal::Handler as TerminalEventHandler;
use crate::logger::{CustomLogger, LogBuffer};
use crate::state::{ambient_preference, State, ThemePreference, ThemeStore};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io::stdout;
use std::sync::Arc;
use tokio::sync::Mutex;

pub type NetworkEventSender = std::sync::mpsc::Sender<NetworkEvent>;
type NetworkEventReceiver = std::sync::mpsc::Receiver<NetworkEvent>;

/// Oversees event processing, state management, and terminal output.
///
pub struct App {
    state: Arc<Mutex<State>>,
    job_bank: JobBank,
}

impl App {
    /// Start a new application according to the given configuration, storing
    /// theme changes through the given preference. Returns the result of the
    /// application execution.
    ///
    pub async fn start(config: Config, theme_preference: Box<dyn ThemePreference>) -> AppResult<()> {
        let log_buffer = LogBuffer::default();
        CustomLogger::new(LevelFilter::Debug, log_buffer.clone())
            .init()
            .map_err(|e| AppError::Logger(e.to_string()))?;

        info!("Starting application...");
        let job_bank = JobBank::new(&config.api_url, config.request_timeout())?;
        let (tx, rx) = std::sync::mpsc::channel::<NetworkEvent>();
        let theme = ThemeStore::restore(theme_preference, ambient_preference());
        let app = App {
            state: Arc::new(Mutex::new(State::new(
                tx,
                config.page_size,
                theme,
                config.hotkeys.clone(),
                log_buffer,
            ))),
            job_bank,
        };
        app.start_network(rx);
        app.start_ui().await?;

        info!("Exiting application...");
        Ok(())
    }

    /// Start a separate thread for asynchronous state mutations. Every event
    /// is handled on its own task so a newer fetch never queues behind an
    /// older one.
    ///
    fn start_network(&self, net_receiver: NetworkEventReceiver) {
        debug!("Creating new thread for asynchronous networking...");
        let handler = NetworkEventHandler::new(&self.state, self.job_bank.clone());
        std::thread::spawn(move || {
            let runtime = match tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime,
                Err(e) => {
                    error!("Failed to create network runtime: {}", e);
                    return;
                }
            };
            runtime.block_on(async move {
                while let Ok(network_event) = net_receiver.recv() {
                    let handler = handler.clone();
                    tokio::spawn(async move {
                        if let Err(e) = handler.handle(network_event).await {
                            error!("Failed to handle network event: {}", e);
                        }
                    });
                }
            })
        });
    }

    /// Begin the terminal event poll on a separate thread before starting the
    /// render loop on the main thread. The terminal is restored whether the
    /// loop ends by exit request or by error.
    ///
    async fn start_ui(&self) -> AppResult<()> {
        debug!("Starting user interface on main thread...");
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        enable_raw_mode()?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;

        let result = self.render_loop(&mut terminal).await;

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    async fn render_loop<B: Backend>(&self, terminal: &mut Terminal<B>) -> AppResult<()> {
        self.state.lock().await.start();

        let terminal_event_handler = TerminalEventHandler::new();
        loop {
            let mut state = self.state.lock().await;
            if let Ok(size) = terminal.size() {
                state.set_terminal_size(size);
            };
            terminal.draw(|frame| crate::ui::render(frame, &mut state))?;
            if !terminal_event_handler.handle_next(&mut state)? {
                debug!("Received application exit request.");
                break;
            }
        }
        Ok(())
    }
}
