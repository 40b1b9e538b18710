//! Console command loop

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use bridge_common::AppError;
use bridge_service::{
    CommandReply, ServiceContext, ServiceError, WhitelistRequest, WhitelistService,
};

use crate::command::{Command, CommandParseError, HELP};

/// Run one command and render its reply
pub async fn execute(ctx: &ServiceContext, command: Command) -> String {
    let service = WhitelistService::new(ctx);

    let reply = match command {
        Command::Whitelist {
            member_id,
            display_name,
            account_name,
        } => {
            let request = WhitelistRequest::new(member_id, display_name, account_name);
            match service.toggle(&request).await {
                Ok(receipt) => CommandReply::from(&receipt),
                Err(e) => reply_for_error(&e),
            }
        }
        Command::Status { member_id } => match service.status(member_id).await {
            Ok(status) => CommandReply::from(&status),
            Err(e) => reply_for_error(&e),
        },
        Command::Help => return HELP.to_string(),
        Command::Quit => return String::new(),
    };

    reply.to_string()
}

fn reply_for_error(err: &ServiceError) -> CommandReply {
    match err {
        ServiceError::Validation(_) | ServiceError::ResolutionFailed(_) => {
            debug!(code = err.error_code(), error = %err, "Command rejected");
        }
        _ => warn!(code = err.error_code(), error = %err, "Command failed"),
    }
    CommandReply::from(err)
}

/// Read commands until EOF, `quit`, or Ctrl-C.
///
/// Each command runs on its own task; replies are written as they complete,
/// so two slow commands do not hold each other up.
pub async fn run_console<R, W>(ctx: ServiceContext, reader: R, mut writer: W) -> Result<(), AppError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let (reply_tx, mut reply_rx) = mpsc::unbounded_channel::<String>();
    let mut lines = reader.lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.map_err(AppError::internal)? else {
                    debug!("Console input closed");
                    break;
                };
                match line.parse::<Command>() {
                    Ok(Command::Quit) => break,
                    Ok(command) => {
                        let ctx = ctx.clone();
                        let reply_tx = reply_tx.clone();
                        tokio::spawn(async move {
                            let reply = execute(&ctx, command).await;
                            let _ = reply_tx.send(reply);
                        });
                    }
                    Err(CommandParseError::Empty) => {}
                    Err(e) => write_line(&mut writer, &e.to_string()).await?,
                }
            }
            Some(reply) = reply_rx.recv() => write_line(&mut writer, &reply).await?,
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted");
                break;
            }
        }
    }

    // Let in-flight commands finish and print their replies
    drop(reply_tx);
    while let Some(reply) = reply_rx.recv().await {
        write_line(&mut writer, &reply).await?;
    }

    Ok(())
}

async fn write_line<W: AsyncWrite + Unpin>(writer: &mut W, text: &str) -> Result<(), AppError> {
    writer.write_all(text.as_bytes()).await.map_err(AppError::internal)?;
    writer.write_all(b"\n").await.map_err(AppError::internal)?;
    writer.flush().await.map_err(AppError::internal)
}
