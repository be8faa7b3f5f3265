/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/8/26
******************************************************************************/

//! Per-session sequential processing lanes.
//!
//! A [`SessionLane`] runs one [`Pipeline`] on a single tokio task fed by a
//! bounded channel, so messages for a session are processed strictly in
//! submission order even when producers are concurrent. Reject and reply
//! bytes come back on an outbound channel ready for the transport.

use crate::pipeline::{Disposition, Pipeline};
use bytes::Bytes;
use fixgate_dispatch::Outcome;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// Error returned when submitting to a lane that no longer accepts input.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("session lane is closed")]
pub struct LaneClosed;

/// Handle for feeding messages into a running lane.
#[derive(Debug)]
pub struct LaneHandle {
    tx: mpsc::Sender<Bytes>,
    task: JoinHandle<()>,
}

impl LaneHandle {
    /// Submits one raw inbound frame for in-order processing.
    ///
    /// # Errors
    /// Returns [`LaneClosed`] once the lane task has stopped receiving.
    pub async fn submit(&self, raw: Bytes) -> Result<(), LaneClosed> {
        self.tx.send(raw).await.map_err(|_| LaneClosed)
    }

    /// Returns true once the lane no longer accepts submissions.
    ///
    /// The lane stops receiving when the outbound side is dropped, so a
    /// handle can observe the shutdown without a failed submit.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }

    /// Closes the lane, draining messages already submitted.
    ///
    /// Messages queued before the close are still processed; the call
    /// returns once the lane task has finished with them.
    pub async fn close(self) {
        drop(self.tx);
        let _ = self.task.await;
    }
}

/// A per-session processing lane.
pub struct SessionLane;

impl SessionLane {
    /// Spawns a lane for the given pipeline.
    ///
    /// Returns the submission handle and the outbound channel carrying
    /// reply and reject bytes in processing order.
    #[must_use]
    pub fn spawn(pipeline: Pipeline, capacity: usize) -> (LaneHandle, mpsc::Receiver<Bytes>) {
        let (tx, mut rx) = mpsc::channel::<Bytes>(capacity);
        let (out_tx, out_rx) = mpsc::channel::<Bytes>(capacity);

        let task = tokio::spawn(async move {
            debug!("session lane started");
            while let Some(raw) = rx.recv().await {
                match pipeline.process(&raw).await {
                    Disposition::Handled(Outcome::Reply(reply)) => {
                        if out_tx.send(reply).await.is_err() {
                            break;
                        }
                    }
                    Disposition::Rejected(response) => {
                        if out_tx.send(response).await.is_err() {
                            break;
                        }
                    }
                    Disposition::Handled(Outcome::Done)
                    | Disposition::Unhandled
                    | Disposition::Garbled(_) => {}
                }
            }
            info!("session lane drained");
        });

        (LaneHandle { tx, task }, out_rx)
    }
}
