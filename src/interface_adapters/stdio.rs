// Stdio adapter: landmark frames in as JSON lines, world updates out as JSON lines.

use crate::interface_adapters::protocol::{FrameDto, HostMessage, WorldUpdateDto};
use crate::use_cases::{FrameInput, WorldUpdate};
use std::fmt;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

#[derive(Debug)]
pub enum HostError {
    // Categorizes stdio failures so the runtime can decide policy.
    Io(std::io::Error),
    Decode(serde_json::Error),
    InputClosed,
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostError::Io(e) => write!(f, "i/o error: {e}"),
            HostError::Decode(e) => write!(f, "invalid frame: {e}"),
            HostError::InputClosed => write!(f, "world task stopped accepting frames"),
        }
    }
}

impl std::error::Error for HostError {}

impl From<std::io::Error> for HostError {
    fn from(e: std::io::Error) -> Self {
        HostError::Io(e)
    }
}

impl From<serde_json::Error> for HostError {
    fn from(e: serde_json::Error) -> Self {
        HostError::Decode(e)
    }
}

impl From<HostError> for std::io::Error {
    fn from(e: HostError) -> Self {
        match e {
            HostError::Io(e) => e,
            other => std::io::Error::other(other.to_string()),
        }
    }
}

/// Parses one input line. Blank lines are skipped.
pub fn decode_frame(line: &str) -> Result<Option<FrameInput>, HostError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let dto: FrameDto = serde_json::from_str(line)?;
    Ok(Some(FrameInput::from(dto)))
}

/// Reads frames until EOF and hands them to the world task.
///
/// A line that fails to decode still counts as a frame, with no hand in it.
/// Returns the number of frames forwarded.
pub async fn frame_reader<R>(reader: R, frame_tx: mpsc::Sender<FrameInput>) -> Result<u64, HostError>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    let mut line_no: u64 = 0;
    let mut forwarded: u64 = 0;

    while let Some(line) = lines.next_line().await? {
        line_no += 1;
        let frame = match decode_frame(&line) {
            Ok(Some(frame)) => frame,
            Ok(None) => continue,
            Err(e) => {
                warn!(line_no, error = %e, "dropping malformed frame; treating as no hand");
                FrameInput::default()
            }
        };

        if frame_tx.send(frame).await.is_err() {
            // World task has finished (tick limit or shutdown).
            debug!(line_no, "world task gone; stopping reader");
            return Err(HostError::InputClosed);
        }
        forwarded += 1;
    }

    info!(frames = forwarded, "input exhausted");
    Ok(forwarded)
}

pub async fn world_update_serializer(
    mut world_rx: mpsc::Receiver<WorldUpdate>,
    out_tx: mpsc::Sender<String>,
) -> u64 {
    // Serialize each world update once and queue the line for the writer.
    let mut written = 0;
    while let Some(update) = world_rx.recv().await {
        let msg = HostMessage::WorldUpdate(WorldUpdateDto::from(update));
        let txt = match serde_json::to_string(&msg) {
            Ok(txt) => txt,
            Err(e) => {
                error!(error = ?e, "failed to serialize world update");
                continue;
            }
        };
        if out_tx.send(txt).await.is_err() {
            warn!("output closed; serializer exiting");
            return written;
        }
        written += 1;
    }
    debug!(written, "world updates closed; serializer exiting");
    written
}

/// Writes queued lines until every sender is gone, then hands the writer back.
pub async fn line_writer<W>(mut writer: W, mut out_rx: mpsc::Receiver<String>) -> Result<W, HostError>
where
    W: AsyncWrite + Unpin,
{
    while let Some(line) = out_rx.recv().await {
        writer.write_all(line.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        // Downstream consumers read line by line.
        writer.flush().await?;
    }
    writer.flush().await?;
    Ok(writer)
}
