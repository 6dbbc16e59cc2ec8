use std::io;
use std::ops::ControlFlow;
use std::path::PathBuf;
use std::sync::mpsc::Receiver;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use crossterm::terminal;

use fastfm::commands::Cmd;
use fastfm::config::AppConfig;
use fastfm::effects::Effects;
use fastfm::keymap::modifiers_from_crossterm;
use fastfm::messages::Msg;
use fastfm::model::{AppModel, FocusRegion};
use fastfm::update::{startup, update};

use crate::view::geometry::Layout;
use crate::view::hit_test::{hit_test, HitTarget};
use crate::view::Renderer;

use super::input::key_msg;
use super::terminal::TerminalGuard;

/// How long to wait for terminal input before checking worker results
const POLL_INTERVAL: Duration = Duration::from_millis(30);

pub struct App {
    model: AppModel,
    effects: Effects,
    msg_rx: Receiver<Msg>,
    layout: Layout,
    needs_redraw: bool,
}

impl App {
    pub fn new(config: AppConfig, config_path: Option<PathBuf>, search_root: PathBuf) -> Self {
        let (effects, msg_rx) = Effects::channel(config_path);
        Self {
            model: AppModel::new(config, search_root),
            effects,
            msg_rx,
            layout: Layout::default(),
            needs_redraw: true,
        }
    }

    /// Run the event loop until the user quits
    pub fn run(mut self, start_dir: Option<PathBuf>) -> Result<()> {
        let _guard = TerminalGuard::enter()?;
        let mut renderer = Renderer::new(io::stdout());

        let cmd = startup(&mut self.model, start_dir);
        if self.process_cmd(cmd).is_break() {
            return Ok(());
        }

        loop {
            // Results posted by worker threads
            while let Ok(msg) = self.msg_rx.try_recv() {
                if self.dispatch(msg).is_break() {
                    return Ok(());
                }
            }

            if self.needs_redraw {
                let (width, height) = terminal::size()?;
                self.layout = Layout::compute(width, height, self.model.ui.preview.is_some());
                renderer.draw(&self.model, &self.layout)?;
                self.needs_redraw = false;
            }

            if !event::poll(POLL_INTERVAL)? {
                continue;
            }
            let msg = match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    key_msg(&key, self.model.ui.prompt.is_some())
                }
                Event::Mouse(mouse) => self.mouse_msg(&mouse),
                Event::Resize(_, _) => {
                    self.needs_redraw = true;
                    None
                }
                _ => None,
            };
            if let Some(msg) = msg {
                if self.dispatch(msg).is_break() {
                    return Ok(());
                }
            }
        }
    }

    fn dispatch(&mut self, msg: Msg) -> ControlFlow<()> {
        match update(&mut self.model, msg) {
            Some(cmd) => self.process_cmd(cmd),
            None => ControlFlow::Continue(()),
        }
    }

    fn process_cmd(&mut self, cmd: Cmd) -> ControlFlow<()> {
        if cmd.needs_redraw() {
            self.needs_redraw = true;
        }
        self.effects.process(cmd)
    }

    fn mouse_msg(&self, mouse: &MouseEvent) -> Option<Msg> {
        let target = hit_test(&self.layout, &self.model, mouse.column, mouse.row)?;
        match (mouse.kind, target) {
            (MouseEventKind::Moved, HitTarget::Item { region, index }) => {
                Some(Msg::hover(region, index))
            }
            (MouseEventKind::Down(MouseButton::Left), HitTarget::Item { region, index }) => Some(
                Msg::click(region, index, modifiers_from_crossterm(mouse.modifiers)),
            ),
            (MouseEventKind::Down(MouseButton::Left), HitTarget::SearchBox) => Some(Msg::click(
                FocusRegion::Search,
                0,
                modifiers_from_crossterm(mouse.modifiers),
            )),
            _ => None,
        }
    }
}
