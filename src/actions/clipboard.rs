use std::{
    io::Write,
    process::{Child, Command, ExitStatus, Stdio},
    thread,
    time::{Duration, Instant},
};

use crate::app::models::app_error::AppError;

/// Destination of the "copy prompt" action.
pub trait ClipboardWriter: Send + Sync {
    fn write_text(&self, text: &str) -> Result<(), AppError>;
}

/// Pipes the text into a clipboard program such as `pbcopy` or
/// `xclip -selection clipboard`.
#[derive(Debug, Clone)]
pub struct CommandClipboard {
    program: String,
    args: Vec<String>,
    timeout: Duration,
}

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);
const POLL_INTERVAL: Duration = Duration::from_millis(20);

impl CommandClipboard {
    pub fn new(command: &str) -> Option<Self> {
        let mut parts = command.split_whitespace().map(str::to_string);
        let program = parts.next()?;

        Some(Self {
            program,
            args: parts.collect(),
            timeout: DEFAULT_TIMEOUT,
        })
    }

    pub fn system_default() -> Self {
        let (program, args): (&str, &[&str]) = if cfg!(target_os = "macos") {
            ("pbcopy", &[])
        } else if cfg!(target_os = "windows") {
            ("clip", &[])
        } else {
            ("xclip", &["-selection", "clipboard"])
        };

        Self {
            program: program.to_string(),
            args: args.iter().map(|arg| arg.to_string()).collect(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// How long the program may run after its stdin is closed.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn wait_with_timeout(&self, child: &mut Child) -> Result<ExitStatus, AppError> {
        let deadline = Instant::now() + self.timeout;
        loop {
            match child.try_wait() {
                Ok(Some(status)) => return Ok(status),
                Ok(None) if Instant::now() >= deadline => {
                    kill(child);
                    return Err(AppError::new(format!(
                        "{} did not exit within {:?}",
                        self.program, self.timeout
                    )));
                }
                Ok(None) => thread::sleep(POLL_INTERVAL),
                Err(e) => {
                    kill(child);
                    return Err(AppError::new(format!(
                        "failed to wait for {}: {}",
                        self.program, e
                    )));
                }
            }
        }
    }
}

impl ClipboardWriter for CommandClipboard {
    fn write_text(&self, text: &str) -> Result<(), AppError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| AppError::new(format!("failed to spawn {}: {}", self.program, e)))?;

        let Some(mut stdin) = child.stdin.take() else {
            kill(&mut child);
            return Err(AppError::new(format!("{} has no stdin", self.program)));
        };
        if let Err(e) = stdin.write_all(text.as_bytes()) {
            drop(stdin);
            kill(&mut child);
            return Err(AppError::new(format!(
                "failed to write to {}: {}",
                self.program, e
            )));
        }
        drop(stdin);

        let status = self.wait_with_timeout(&mut child)?;
        if !status.success() {
            return Err(AppError::new(format!("{} exited with {}", self.program, status)));
        }

        Ok(())
    }
}

// Reaps the child so a failed copy never leaves a zombie behind.
fn kill(child: &mut Child) {
    if let Err(e) = child.kill() {
        tracing::debug!("kill clipboard child: {}", e);
    }
    let _ = child.wait();
}
