//! Line-oriented terminal front end for the session.

mod command;

pub use command::*;

use std::time::Duration;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::app_system::AppError;
use crate::clients::SessionClient;
use crate::permissions::PermissionNotice;

/// How long a shell that is closing waits for the startup permission answer.
const NOTICE_GRACE: Duration = Duration::from_secs(1);

async fn render<W: AsyncWrite + Unpin>(client: &SessionClient, output: &mut W) -> Result<(), AppError> {
    let snapshot = client.snapshot().await?;
    let text = format!("\n{}\n> ", snapshot.view);
    output.write_all(text.as_bytes()).await?;
    output.flush().await?;
    Ok(())
}

async fn write_notice<W: AsyncWrite + Unpin>(notice: PermissionNotice, output: &mut W) -> Result<(), AppError> {
    output.write_all(format!("[notice] {}\n", notice).as_bytes()).await?;
    Ok(())
}

/// Prints whatever notice has already arrived. Returns true once the
/// permission task is done, whether or not it produced a notice.
async fn drain_notices<W: AsyncWrite + Unpin>(
    notices: &mut mpsc::Receiver<PermissionNotice>,
    output: &mut W,
) -> Result<bool, AppError> {
    loop {
        match notices.try_recv() {
            Ok(notice) => write_notice(notice, output).await?,
            Err(mpsc::error::TryRecvError::Empty) => return Ok(false),
            Err(mpsc::error::TryRecvError::Disconnected) => return Ok(true),
        }
    }
}

/// Reads one line as raw bytes. `None` at end of input, `Some(None)` when
/// the line is not valid UTF-8.
async fn read_line<R: AsyncBufRead + Unpin>(
    input: &mut R,
    buffer: &mut Vec<u8>,
) -> Result<Option<Option<String>>, AppError> {
    buffer.clear();
    if input.read_until(b'\n', buffer).await? == 0 {
        return Ok(None);
    }
    while matches!(buffer.last(), Some(b'\n' | b'\r')) {
        buffer.pop();
    }
    Ok(Some(String::from_utf8(buffer.clone()).ok()))
}

/// Reads commands until `quit` or end of input, printing the current screen
/// after each one.
///
/// The startup permission notice is printed as soon as it arrives, and at
/// the latest before the shell returns.
pub async fn run_shell<R, W>(
    client: &SessionClient,
    notices: &mut mpsc::Receiver<PermissionNotice>,
    mut input: R,
    mut output: W,
) -> Result<(), AppError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut notices_done = drain_notices(notices, &mut output).await?;
    render(client, &mut output).await?;

    let mut buffer = Vec::new();
    while let Some(line) = read_line(&mut input, &mut buffer).await? {
        if !notices_done {
            notices_done = drain_notices(notices, &mut output).await?;
        }
        let Some(line) = line else {
            warn!("Discarded input that is not valid UTF-8");
            output.write_all(b"! input is not valid UTF-8 (type 'help')\n").await?;
            render(client, &mut output).await?;
            continue;
        };
        match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => output.write_all(format!("{}\n", HELP).as_bytes()).await?,
            Ok(Command::Show) => {}
            Ok(Command::Action(action)) => {
                let outcome = client.perform(action).await?;
                debug!(%outcome, "Command applied");
                if outcome.is_ignored() {
                    output.write_all(format!("! {}\n", outcome).as_bytes()).await?;
                }
            }
            Err(CommandError::Empty) => {}
            Err(e) => {
                output.write_all(format!("! {} (type 'help')\n", e).as_bytes()).await?;
            }
        }
        render(client, &mut output).await?;
    }

    if !notices_done {
        match tokio::time::timeout(NOTICE_GRACE, notices.recv()).await {
            Ok(Some(notice)) => write_notice(notice, &mut output).await?,
            Ok(None) => {}
            Err(_) => warn!("Permission answer did not arrive before the shell closed"),
        }
    }

    info!("Shell closed");
    output.flush().await?;
    Ok(())
}
