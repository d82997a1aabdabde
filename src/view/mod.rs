//! Terminal demo (impure shell)
//!
//! Renders the demo list with ratatui and drives it with crossterm key
//! events. The list area is every row but the last, which holds a status line.

pub mod demo_adapter;
pub mod surface;

pub use demo_adapter::{DemoAdapter, DemoOverlay};
pub use surface::{band_style, fit_to_width, BufferSurface};

use crate::config::ResolvedConfig;
use crate::decoration::HeaderDecoration;
use crate::model::{Level, Viewport};
use crate::view_state::ListState;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    Terminal,
};
use std::io::{self, Stdout};
use thiserror::Error;
use tracing::{debug, info};

/// Margin used by the `m` toggle when none was configured.
pub const DEFAULT_TOGGLE_MARGIN: i32 = 2;

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Demo application
///
/// Generic over backend to support testing with TestBackend
pub struct DemoApp<B>
where
    B: Backend,
{
    terminal: Terminal<B>,
    decoration: HeaderDecoration<DemoAdapter>,
    list: ListState,
    /// Margin restored by the `m` toggle.
    toggle_margin: i32,
}

impl DemoApp<CrosstermBackend<Stdout>> {
    /// Create the demo on the real terminal.
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(config: &ResolvedConfig) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self::with_terminal(terminal, config))
    }

    /// Run the event loop until the user quits.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if self.handle_key(key) {
                        return Ok(());
                    }
                    self.draw()?;
                }
                Event::Resize(width, height) => {
                    self.handle_resize(width, height);
                    self.draw()?;
                }
                _ => {}
            }
        }
    }
}

impl<B> DemoApp<B>
where
    B: Backend,
{
    /// Create the demo over an already initialized terminal.
    pub fn with_terminal(terminal: Terminal<B>, config: &ResolvedConfig) -> Self {
        let decoration = HeaderDecoration::with_config(
            DemoAdapter::new(config.double_headers),
            config.decoration_config(),
        );
        let mut app = Self {
            terminal,
            decoration,
            list: ListState::new(config.item_count, 1),
            toggle_margin: config.margin_top.unwrap_or(DEFAULT_TOGGLE_MARGIN),
        };
        app.relayout();
        app
    }

    /// The decoration.
    pub fn decoration(&self) -> &HeaderDecoration<DemoAdapter> {
        &self.decoration
    }

    /// The list state.
    pub fn list(&self) -> &ListState {
        &self.list
    }

    /// The terminal.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    fn viewport(&self) -> Viewport {
        let (width, height) = match self.terminal.size() {
            Ok(size) => (size.width, size.height),
            Err(_) => (80, 24),
        };
        list_viewport(Rect::new(0, 0, width, height))
    }

    fn relayout(&mut self) {
        let viewport = self.viewport();
        self.list.relayout(&mut self.decoration, viewport);
    }

    /// Handle one key press. Returns true when the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let page = i64::from(self.viewport().height.max(1));
        let height = self.viewport().height;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return true,
            KeyCode::Char('j') | KeyCode::Down => self.list.scroll_by(1, height),
            KeyCode::Char('k') | KeyCode::Up => self.list.scroll_by(-1, height),
            KeyCode::PageDown => self.list.scroll_by(page, height),
            KeyCode::PageUp => self.list.scroll_by(-page, height),
            KeyCode::Char('g') | KeyCode::Home => self.list.scroll_to_top(),
            KeyCode::Char('G') | KeyCode::End => self.list.scroll_to_bottom(height),
            KeyCode::Char('c') => {
                self.decoration.clear_cache();
                self.relayout();
            }
            KeyCode::Char('m') => {
                if self.decoration.has_margin_top() {
                    self.decoration.clear_margin_top();
                } else {
                    self.decoration.set_margin_top(self.toggle_margin);
                }
                debug!(margin_top = self.decoration.margin_top(), "Toggled margin");
            }
            KeyCode::Char('i') => {
                let inline = !self.decoration.render_inline();
                self.decoration.set_render_inline(inline);
                self.relayout();
                debug!(inline, "Toggled inline rendering");
            }
            _ => {}
        }
        false
    }

    fn handle_resize(&mut self, width: u16, height: u16) {
        debug!("Handling resize to {}x{}", width, height);
        // Bands were measured against the old constraints.
        self.decoration.clear_cache();
        self.relayout();
    }

    /// Render the current frame.
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let decoration = &mut self.decoration;
        let list = &self.list;
        self.terminal.draw(|frame| {
            let area = frame.area();
            render_demo(frame.buffer_mut(), area, decoration, list);
        })?;
        Ok(())
    }
}

/// Viewport of the list part of `area` (everything above the status line).
pub fn list_viewport(area: Rect) -> Viewport {
    Viewport::new(
        i32::from(area.width),
        i32::from(area.height.saturating_sub(1)),
    )
}

/// Draw item rows, then the pinned bands, then the status line.
pub fn render_demo(
    buffer: &mut Buffer,
    area: Rect,
    decoration: &mut HeaderDecoration<DemoAdapter>,
    list: &ListState,
) {
    let viewport = list_viewport(area);
    let list_area = Rect::new(area.x, area.y, area.width, viewport.height as u16);
    let items = list.visible_items(viewport.height);

    let mut surface = BufferSurface::new(buffer, list_area);
    for item in &items {
        if let Some(position) = item.position {
            surface.draw_row(
                item.left,
                item.animated_top(),
                &DemoAdapter::item_label(position),
                Style::default(),
            );
        }
    }
    decoration.paint(&mut surface, &items, viewport);

    if area.height > 0 {
        let status = status_line(decoration, list);
        buffer.set_string(
            area.x,
            area.y + area.height - 1,
            fit_to_width(&status, usize::from(area.width)),
            Style::default().add_modifier(Modifier::REVERSED),
        );
    }
}

fn status_line(decoration: &HeaderDecoration<DemoAdapter>, list: &ListState) -> String {
    let margin = if decoration.has_margin_top() {
        format!("margin {}", decoration.margin_top())
    } else {
        "margin off".to_string()
    };
    let inline = if decoration.render_inline() {
        "inline"
    } else {
        "reserved"
    };
    format!(
        "{}/{} | {} | {} | cached {}+{}",
        list.offset(),
        list.total_height(),
        margin,
        inline,
        decoration.cache_len(Level::Header),
        decoration.cache_len(Level::SubHeader),
    )
}

/// Initialize the terminal, run the demo and restore the terminal.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_demo(config: &ResolvedConfig) -> Result<(), TuiError> {
    let mut app = DemoApp::new(config)?;
    info!(items = app.list().item_count(), "Demo started");

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod tests;
