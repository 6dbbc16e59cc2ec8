//! Command executor
//!
//! Runs each side-effecting `Cmd` on its own worker thread and posts the
//! result back to the event loop as a `Msg`. The model is never touched
//! from a worker.

use std::ops::ControlFlow;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};

use crate::commands::Cmd;
use crate::config::AppConfig;
use crate::fs::{self, FsError};
use crate::messages::{BatchOp, ConfigMsg, CreateFailure, FsMsg, Msg};

/// Executes commands, sending results over `tx`
#[derive(Debug, Clone)]
pub struct Effects {
    tx: Sender<Msg>,
    /// Config file override; the platform default is used when `None`
    config_path: Option<PathBuf>,
}

impl Effects {
    pub fn new(tx: Sender<Msg>, config_path: Option<PathBuf>) -> Self {
        Self { tx, config_path }
    }

    /// Executor plus the receiving end of its result channel
    pub fn channel(config_path: Option<PathBuf>) -> (Self, Receiver<Msg>) {
        let (tx, rx) = mpsc::channel();
        (Self::new(tx, config_path), rx)
    }

    fn config_path(&self) -> Option<PathBuf> {
        self.config_path
            .clone()
            .or_else(crate::config_paths::config_file)
    }

    /// Run on a worker thread and post the produced message
    fn spawn<F>(&self, job: F)
    where
        F: FnOnce() -> Msg + Send + 'static,
    {
        let tx = self.tx.clone();
        std::thread::spawn(move || {
            // The receiver is gone only when the app is shutting down
            let _ = tx.send(job());
        });
    }

    /// Execute a command. Returns `Break` when the app should exit.
    pub fn process(&self, cmd: Cmd) -> ControlFlow<()> {
        match cmd {
            Cmd::None | Cmd::Redraw => {}
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process(cmd)?;
                }
            }
            Cmd::Quit => return ControlFlow::Break(()),

            Cmd::LoadDrives => self.spawn(|| Msg::Fs(FsMsg::DrivesLoaded(fs::list_drives()))),

            Cmd::ListDirectory {
                request,
                path,
                options,
            } => self.spawn(move || {
                let result = fs::list_directory(&path, &options).map_err(|e| e.to_string());
                Msg::Fs(FsMsg::DirectoryListed {
                    request,
                    path,
                    result,
                })
            }),

            Cmd::Search {
                request,
                root,
                keyword,
                cancel,
            } => self.spawn(move || {
                let result =
                    fs::search_with_cancel(&root, &keyword, &cancel).map_err(|e| e.to_string());
                Msg::Fs(FsMsg::SearchCompleted {
                    request,
                    keyword,
                    result,
                })
            }),

            Cmd::OpenFile { path } => self.spawn(move || {
                let result = fs::open_path(&path).map_err(|e| e.to_string());
                Msg::Fs(FsMsg::Opened { path, result })
            }),

            Cmd::OpenInExplorer { path } => self.spawn(move || {
                let result = fs::open_in_explorer(&path).map_err(|e| e.to_string());
                Msg::Fs(FsMsg::Opened { path, result })
            }),

            Cmd::PreviewFile { path } => self.spawn(move || {
                let result = fs::preview_file(&path).map_err(|e| e.to_string());
                Msg::Fs(FsMsg::Previewed { path, result })
            }),

            Cmd::CopyFiles { sources, target } => self.spawn(move || {
                let outcome = fs::copy_files(&sources, &target);
                Msg::Fs(FsMsg::BatchCompleted {
                    op: BatchOp::Copy,
                    outcome,
                })
            }),

            Cmd::MoveFiles { sources, target } => self.spawn(move || {
                let outcome = fs::move_files(&sources, &target);
                Msg::Fs(FsMsg::BatchCompleted {
                    op: BatchOp::Move,
                    outcome,
                })
            }),

            Cmd::CreateFile { path } => self.spawn(move || {
                let result = fs::create_file(&path).map_err(create_failure);
                Msg::Fs(FsMsg::Created {
                    path,
                    kind: fs::EntryKind::File,
                    result,
                })
            }),

            Cmd::CreateDirectory { path } => self.spawn(move || {
                let result = fs::create_directory(&path).map_err(create_failure);
                Msg::Fs(FsMsg::Created {
                    path,
                    kind: fs::EntryKind::Directory,
                    result,
                })
            }),

            Cmd::LoadConfig => {
                let path = self.config_path();
                self.spawn(move || {
                    let config = match path {
                        Some(path) => AppConfig::load_from(&path),
                        None => AppConfig::default(),
                    };
                    Msg::Config(ConfigMsg::Loaded(config))
                })
            }

            Cmd::SaveConfig(config) => {
                let path = self.config_path();
                self.spawn(move || {
                    let result = match path {
                        Some(path) => config.save_to(&path).map(|()| path),
                        None => Err(crate::config::ConfigError::NoConfigDir),
                    };
                    Msg::Config(ConfigMsg::Saved(result.map_err(|e| e.to_string())))
                })
            }

            Cmd::ResetConfig => {
                let path = self.config_path();
                self.spawn(move || {
                    let result = match path {
                        Some(path) => AppConfig::reset(&path),
                        None => Err(crate::config::ConfigError::NoConfigDir),
                    };
                    match result {
                        Ok(config) => Msg::Config(ConfigMsg::Loaded(config)),
                        Err(e) => Msg::Config(ConfigMsg::Saved(Err(e.to_string()))),
                    }
                })
            }
        }

        ControlFlow::Continue(())
    }
}

fn create_failure(error: FsError) -> CreateFailure {
    match error {
        FsError::AlreadyExists(_) => CreateFailure::AlreadyExists,
        other => CreateFailure::Io(other.to_string()),
    }
}
