// ABOUTME: Session gateway over the tmux command line
// Every operation is one blocking tmux invocation; attach replaces the current process

use std::convert::Infallible;
use std::ffi::CString;
use std::fmt;
use std::os::unix::ffi::OsStrExt;
use std::process::{Command, Output};
use std::sync::Arc;

use tracing::{info, warn};

use crate::tmux::error::TmuxError;

/// Substrings tmux prints when there is nothing to list. These are not errors.
const NO_SERVER_MARKERS: [&str; 2] = ["no server running", "no sessions"];

/// Session operations the menu relies on.
///
/// Implementations hold no state between calls. `attach_session` only ever
/// returns on failure: on success the calling process has become the tmux
/// client.
pub trait SessionGateway {
    fn create_session(&self, name: &str) -> Result<(), TmuxError>;
    fn list_sessions(&self) -> Result<Vec<String>, TmuxError>;
    fn kill_session(&self, name: &str) -> Result<(), TmuxError>;
    fn attach_session(&self, name: &str) -> Result<Infallible, TmuxError>;
}

type PreExecHook = Arc<dyn Fn() + Send + Sync>;

/// Gateway that shells out to the tmux binary.
#[derive(Clone)]
pub struct TmuxGateway {
    program: String,
    pre_exec: Option<PreExecHook>,
}

impl fmt::Debug for TmuxGateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TmuxGateway")
            .field("program", &self.program)
            .field("pre_exec", &self.pre_exec.is_some())
            .finish()
    }
}

impl Default for TmuxGateway {
    fn default() -> Self {
        Self::new("tmux")
    }
}

impl TmuxGateway {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            pre_exec: None,
        }
    }

    /// Run `hook` right before the process image is replaced on attach.
    #[must_use]
    pub fn with_pre_exec(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.pre_exec = Some(Arc::new(hook));
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn run(&self, action: &'static str, args: &[&str]) -> Result<Output, TmuxError> {
        info!("Running {} {}", self.program, args.join(" "));
        Command::new(&self.program)
            .args(args)
            .output()
            .map_err(|e| TmuxError::execution(action, e.to_string()))
    }

    fn run_checked(&self, action: &'static str, args: &[&str]) -> Result<(), TmuxError> {
        let output = self.run(action, args)?;
        if output.status.success() {
            Ok(())
        } else {
            let reason = failure_reason(&output);
            warn!("{} exited unsuccessfully: {}", action, reason);
            Err(TmuxError::execution(action, reason))
        }
    }
}

impl SessionGateway for TmuxGateway {
    fn create_session(&self, name: &str) -> Result<(), TmuxError> {
        self.run_checked("new-session", &["new-session", "-d", "-s", name])
    }

    fn list_sessions(&self) -> Result<Vec<String>, TmuxError> {
        let output = self.run("list-sessions", &["list-sessions", "-F", "#S"])?;
        parse_session_list(&output)
    }

    fn kill_session(&self, name: &str) -> Result<(), TmuxError> {
        self.run_checked("kill-session", &["kill-session", "-t", name])
    }

    fn attach_session(&self, name: &str) -> Result<Infallible, TmuxError> {
        let sessions = self.list_sessions()?;
        if !sessions.iter().any(|session| session == name) {
            return Err(TmuxError::SessionNotFound(name.to_string()));
        }

        let binary = which::which(&self.program)
            .map_err(|_| TmuxError::TmuxNotInstalled(self.program.clone()))?;

        let path = CString::new(binary.as_os_str().as_bytes())
            .map_err(|e| TmuxError::execution("attach-session", e.to_string()))?;
        let argv = [self.program.as_str(), "attach-session", "-t", name]
            .into_iter()
            .map(CString::new)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| TmuxError::execution("attach-session", e.to_string()))?;

        info!("Replacing process with {} attach-session -t {}", binary.display(), name);
        if let Some(hook) = &self.pre_exec {
            hook();
        }

        nix::unistd::execv(&path, &argv)
            .map_err(|errno| TmuxError::execution("attach-session", errno.desc()))
    }
}

/// Turn the output of `list-sessions -F "#S"` into session names.
fn parse_session_list(output: &Output) -> Result<Vec<String>, TmuxError> {
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        if NO_SERVER_MARKERS.iter().any(|marker| stderr.contains(marker)) {
            return Ok(Vec::new());
        }
        return Err(TmuxError::execution("list-sessions", failure_reason(output)));
    }

    Ok(session_names(&String::from_utf8_lossy(&output.stdout)))
}

/// One name per line. `lines` drops the `\r\n` endings; the names themselves are
/// returned exactly as tmux printed them.
fn session_names(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(String::from)
        .collect()
}

fn failure_reason(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stderr = stderr.trim();
    if stderr.is_empty() {
        output.status.to_string()
    } else {
        stderr.to_string()
    }
}
