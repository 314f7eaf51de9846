//! Starting viewer executables.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use boardhost_platform::WindowHandle;
use tokio::runtime::Handle;

use crate::viewer::{LaunchStyle, ViewerProfile};

/// A fully resolved command line for one viewer launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCommand {
    pub program: PathBuf,
    pub args: Vec<String>,
    /// Always the executable's own directory.
    pub working_dir: Option<PathBuf>,
}

impl LaunchCommand {
    /// Build the command line `profile` expects for opening `file`.
    ///
    /// The file travels as one argument; the platform quotes it when it
    /// contains spaces.
    pub fn for_viewer(
        profile: &ViewerProfile,
        program: &Path,
        file: &Path,
        surface: WindowHandle,
    ) -> Self {
        let file = file.to_string_lossy().into_owned();
        let args = match profile.launch {
            LaunchStyle::FileArgument => vec![file],
            LaunchStyle::PluginHost => vec!["-plugin".to_string(), surface.0.to_string(), file],
        };
        Self {
            program: program.to_path_buf(),
            args,
            working_dir: program.parent().map(Path::to_path_buf),
        }
    }
}

/// A running viewer process. Only exited / not exited matters; exit codes are ignored.
#[async_trait]
pub trait ChildProcess: Send {
    fn id(&self) -> u32;
    /// Resolve once the process has exited.
    async fn wait(&mut self) -> io::Result<()>;
    /// Force the process to end and reap it.
    async fn kill(&mut self) -> io::Result<()>;
}

pub trait Launcher: Send + Sync {
    fn launch(&self, command: &LaunchCommand) -> io::Result<Box<dyn ChildProcess>>;
}

/// Launches real processes through `tokio::process`.
pub struct TokioLauncher {
    runtime: Handle,
}

impl TokioLauncher {
    pub fn new(runtime: Handle) -> Self {
        Self { runtime }
    }
}

impl Launcher for TokioLauncher {
    fn launch(&self, command: &LaunchCommand) -> io::Result<Box<dyn ChildProcess>> {
        // Child reaping is driven by the runtime's reactor.
        let _guard = self.runtime.enter();

        let mut cmd = tokio::process::Command::new(&command.program);
        cmd.args(&command.args);
        if let Some(dir) = &command.working_dir {
            cmd.current_dir(dir);
        }
        let child = cmd.spawn()?;
        let pid = child
            .id()
            .ok_or_else(|| io::Error::other("process exited before reporting its id"))?;

        tracing::info!(pid, program = %command.program.display(), "viewer process started");
        Ok(Box::new(TokioChild { pid, child }))
    }
}

struct TokioChild {
    pid: u32,
    child: tokio::process::Child,
}

#[async_trait]
impl ChildProcess for TokioChild {
    fn id(&self) -> u32 {
        self.pid
    }

    async fn wait(&mut self) -> io::Result<()> {
        self.child.wait().await.map(|_| ())
    }

    async fn kill(&mut self) -> io::Result<()> {
        self.child.kill().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewer::ViewerKind;

    #[test]
    fn file_argument_command() {
        let program = Path::new("/opt/viewers/BoardViewer/BoardViewer.exe");
        let cmd = LaunchCommand::for_viewer(
            ViewerKind::BoardViewer.profile(),
            program,
            Path::new("/boards/My Board.brd"),
            WindowHandle(0x42),
        );
        assert_eq!(cmd.args, vec!["/boards/My Board.brd".to_string()]);
        assert_eq!(
            cmd.working_dir.as_deref(),
            Some(Path::new("/opt/viewers/BoardViewer"))
        );
    }

    #[test]
    fn plugin_command_passes_surface_in_decimal() {
        let cmd = LaunchCommand::for_viewer(
            ViewerKind::SumatraPdf.profile(),
            Path::new("/opt/SumatraPDF.exe"),
            Path::new("/docs/schematic.pdf"),
            WindowHandle(0x1f4),
        );
        assert_eq!(cmd.args, vec!["-plugin", "500", "/docs/schematic.pdf"]);
    }

    #[test]
    fn launching_a_missing_program_fails() {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let launcher = TokioLauncher::new(rt.handle().clone());
        let cmd = LaunchCommand {
            program: PathBuf::from("/definitely/not/here/viewer.exe"),
            args: Vec::new(),
            working_dir: None,
        };
        assert!(launcher.launch(&cmd).is_err());
    }
}
