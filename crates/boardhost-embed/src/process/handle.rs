//! Session-owned process handle and its exit watcher.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use super::ChildProcess;

/// Owning reference to a launched viewer.
///
/// A background watcher owns the OS child. It raises `exited` when the process
/// ends and calls the exit callback only for natural exits, never for kills
/// requested through [`ProcessHandle::terminate`]. Dropping the handle leaves
/// the process running.
pub struct ProcessHandle {
    pid: u32,
    exited: Arc<AtomicBool>,
    kill: CancellationToken,
    watcher: Option<JoinHandle<()>>,
}

impl ProcessHandle {
    pub fn spawn_watcher<F>(runtime: &Handle, child: Box<dyn ChildProcess>, on_exit: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let pid = child.id();
        let exited = Arc::new(AtomicBool::new(false));
        let kill = CancellationToken::new();
        let watcher = runtime.spawn(watch_child(child, exited.clone(), kill.clone(), on_exit));
        Self {
            pid,
            exited,
            kill,
            watcher: Some(watcher),
        }
    }

    pub fn pid(&self) -> u32 {
        self.pid
    }

    pub fn has_exited(&self) -> bool {
        self.exited.load(Ordering::SeqCst)
    }

    /// Shared exit flag for pollers running off the UI thread.
    pub fn exit_flag(&self) -> Arc<AtomicBool> {
        self.exited.clone()
    }

    /// Kill the process and wait up to `timeout` for it to be reaped.
    /// Returns `false` when the wait timed out.
    pub async fn terminate(mut self, timeout: Duration) -> bool {
        self.kill.cancel();
        let Some(watcher) = self.watcher.take() else {
            return true;
        };
        match tokio::time::timeout(timeout, watcher).await {
            Ok(_) => true,
            Err(_) => {
                tracing::warn!(pid = self.pid, ?timeout, "viewer did not terminate in time");
                false
            }
        }
    }
}

impl std::fmt::Debug for ProcessHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProcessHandle")
            .field("pid", &self.pid)
            .field("exited", &self.has_exited())
            .finish()
    }
}

async fn watch_child<F>(
    mut child: Box<dyn ChildProcess>,
    exited: Arc<AtomicBool>,
    kill: CancellationToken,
    on_exit: F,
) where
    F: FnOnce() + Send + 'static,
{
    let pid = child.id();
    tokio::select! {
        status = child.wait() => {
            exited.store(true, Ordering::SeqCst);
            if let Err(e) = status {
                tracing::debug!(pid, "wait on viewer failed: {e}");
            }
            tracing::info!(pid, "viewer process exited");
            on_exit();
        }
        _ = kill.cancelled() => {
            if let Err(e) = child.kill().await {
                tracing::debug!(pid, "kill failed: {e}");
            }
            exited.store(true, Ordering::SeqCst);
            tracing::debug!(pid, "viewer process terminated");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::io;
    use std::sync::atomic::AtomicUsize;
    use tokio::sync::watch;

    struct ScriptedChild {
        pid: u32,
        exit: watch::Receiver<bool>,
        kills: Arc<AtomicUsize>,
        kill_fails: bool,
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
            self.kills.fetch_add(1, Ordering::SeqCst);
            if self.kill_fails {
                Err(io::Error::other("access denied"))
            } else {
                Ok(())
            }
        }
    }

    fn scripted(kill_fails: bool) -> (Box<dyn ChildProcess>, watch::Sender<bool>, Arc<AtomicUsize>) {
        let (tx, rx) = watch::channel(false);
        let kills = Arc::new(AtomicUsize::new(0));
        let child = ScriptedChild {
            pid: 77,
            exit: rx,
            kills: kills.clone(),
            kill_fails,
        };
        (Box::new(child), tx, kills)
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn natural_exit_runs_callback() {
        let (child, exit, _) = scripted(false);
        let (tx, rx) = std::sync::mpsc::channel();
        let handle = ProcessHandle::spawn_watcher(&Handle::current(), child, move || {
            let _ = tx.send(());
        });
        assert_eq!(handle.pid(), 77);
        assert!(!handle.has_exited());

        exit.send(true).unwrap();
        tokio::task::spawn_blocking(move || rx.recv_timeout(Duration::from_secs(2)))
            .await
            .unwrap()
            .unwrap();
        assert!(handle.has_exited());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn terminate_kills_without_exit_callback() {
        let (child, _exit, kills) = scripted(false);
        let (tx, rx) = std::sync::mpsc::channel::<()>();
        let handle = ProcessHandle::spawn_watcher(&Handle::current(), child, move || {
            let _ = tx.send(());
        });
        let flag = handle.exit_flag();

        assert!(handle.terminate(Duration::from_secs(1)).await);
        assert_eq!(kills.load(Ordering::SeqCst), 1);
        assert!(flag.load(Ordering::SeqCst));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn failed_kill_still_completes() {
        let (child, _exit, kills) = scripted(true);
        let handle = ProcessHandle::spawn_watcher(&Handle::current(), child, || {});
        assert!(handle.terminate(Duration::from_secs(1)).await);
        assert_eq!(kills.load(Ordering::SeqCst), 1);
    }
}
