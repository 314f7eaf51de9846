//! Scripted processes and launchers for engine tests.

use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use tokio::runtime::{Handle, Runtime};
use tokio::sync::watch;

use crate::process::{ChildProcess, LaunchCommand, Launcher, ProcessHandle};

const FIRST_PID: u32 = 4000;

/// Multi-thread runtime for background tasks, driven from a plain `#[test]`
/// thread that plays the UI thread.
pub(crate) struct TestRuntime {
    rt: Runtime,
}

impl TestRuntime {
    pub(crate) fn new() -> Self {
        let rt = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .unwrap();
        Self { rt }
    }

    pub(crate) fn handle(&self) -> Handle {
        self.rt.handle().clone()
    }
}

#[derive(Default)]
struct LauncherLog {
    commands: Vec<LaunchCommand>,
    kills: Vec<u32>,
    exits: HashMap<u32, watch::Sender<bool>>,
    fail_next: bool,
    fail_kills: bool,
}

/// Records launches and hands out children whose exit the test controls.
#[derive(Clone, Default)]
pub(crate) struct ScriptedLauncher {
    log: Arc<Mutex<LauncherLog>>,
}

impl ScriptedLauncher {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn log(&self) -> MutexGuard<'_, LauncherLog> {
        self.log.lock().unwrap()
    }

    pub(crate) fn fail_next_launch(&self) {
        self.log().fail_next = true;
    }

    pub(crate) fn fail_kills(&self) {
        self.log().fail_kills = true;
    }

    /// Pid the next successful launch will report.
    pub(crate) fn next_pid(&self) -> u32 {
        FIRST_PID + self.log().exits.len() as u32
    }

    pub(crate) fn commands(&self) -> Vec<LaunchCommand> {
        self.log().commands.clone()
    }

    pub(crate) fn kills(&self) -> Vec<u32> {
        self.log().kills.clone()
    }

    /// Make process `pid` exit on its own.
    pub(crate) fn exit(&self, pid: u32) {
        if let Some(tx) = self.log().exits.get(&pid) {
            let _ = tx.send(true);
        }
    }
}

impl Launcher for ScriptedLauncher {
    fn launch(&self, command: &LaunchCommand) -> io::Result<Box<dyn ChildProcess>> {
        let mut log = self.log();
        log.commands.push(command.clone());
        if std::mem::take(&mut log.fail_next) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "launch refused"));
        }
        let pid = FIRST_PID + log.exits.len() as u32;
        let (tx, rx) = watch::channel(false);
        log.exits.insert(pid, tx);
        Ok(Box::new(ScriptedChild {
            pid,
            exit: rx,
            log: self.log.clone(),
        }))
    }
}

struct ScriptedChild {
    pid: u32,
    exit: watch::Receiver<bool>,
    log: Arc<Mutex<LauncherLog>>,
}

#[async_trait]
impl ChildProcess for ScriptedChild {
    fn id(&self) -> u32 {
        self.pid
    }

    async fn wait(&mut self) -> io::Result<()> {
        let _ = self.exit.wait_for(|exited| *exited).await;
        Ok(())
    }

    async fn kill(&mut self) -> io::Result<()> {
        let mut log = self.log.lock().unwrap();
        log.kills.push(self.pid);
        if log.fail_kills {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "access denied"))
        } else {
            Ok(())
        }
    }
}

/// A live process handle whose child never exits on its own.
pub(crate) fn scripted_process(rt: &TestRuntime) -> ProcessHandle {
    let launcher = ScriptedLauncher::new();
    let child = launcher
        .launch(&LaunchCommand {
            program: "viewer.exe".into(),
            args: Vec::new(),
            working_dir: None,
        })
        .unwrap();
    ProcessHandle::spawn_watcher(&rt.handle(), child, || {})
}
