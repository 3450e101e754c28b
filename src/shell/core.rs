//! Shell core functionality
//!
//! Runs the interactive session loop: read a line, parse it into an
//! action, dispatch it against the session, print the result, and
//! re-render the current screen.

use log::info;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Stdout};

use crate::error::FlowError;
use crate::flow::{ActionStatus, FormSession, handle_action, parse_action};
use crate::shell::render::render_session;

const GREETING: &str = "Welcome! Type an action to drive the form (QUIT to exit).\n";
const PROMPT: &str = "> ";
const MAX_ACTION_LENGTH: usize = 512;

/// Console front end over a form session.
pub struct Shell {
    session: FormSession,
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

impl Shell {
    pub fn new() -> Self {
        Self {
            session: FormSession::new(),
        }
    }

    /// Returns the underlying session state.
    pub fn session(&self) -> &FormSession {
        &self.session
    }

    /// Runs the session loop until QUIT or end of input.
    pub async fn run(&mut self) -> Result<(), FlowError> {
        let mut reader = BufReader::new(tokio::io::stdin());
        let mut stdout = tokio::io::stdout();
        let mut line = String::new();

        stdout.write_all(GREETING.as_bytes()).await?;
        self.render_screen(&mut stdout).await?;

        loop {
            line.clear();
            let n = reader.read_line(&mut line).await?;
            if n == 0 {
                info!("Input closed, ending session");
                break;
            }

            // Enforce input length limit before parsing
            if line.len() > MAX_ACTION_LENGTH {
                stdout.write_all(b"input too long\n").await?;
                self.render_prompt(&mut stdout).await?;
                continue;
            }

            let action = parse_action(line.trim_end_matches(['\r', '\n']));
            info!("Received action {}", action.label());

            let result = handle_action(&mut self.session, &action);

            if let ActionStatus::CloseSession = result.status {
                if let Some(msg) = result.message {
                    stdout.write_all(msg.as_bytes()).await?;
                    stdout.write_all(b"\n").await?;
                }
                info!("Session closed by user");
                break;
            }

            if let Some(msg) = &result.message {
                stdout.write_all(msg.as_bytes()).await?;
                stdout.write_all(b"\n").await?;
            }

            self.render_screen(&mut stdout).await?;
        }

        stdout.flush().await?;
        Ok(())
    }

    async fn render_screen(&self, stdout: &mut Stdout) -> Result<(), FlowError> {
        stdout
            .write_all(render_session(&self.session).as_bytes())
            .await?;
        self.render_prompt(stdout).await
    }

    async fn render_prompt(&self, stdout: &mut Stdout) -> Result<(), FlowError> {
        stdout.write_all(PROMPT.as_bytes()).await?;
        stdout.flush().await?;
        Ok(())
    }
}
