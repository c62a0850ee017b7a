//! Bounded channel carrying captured log records into the event loop.
//!
//! The sending side runs inside the logger, on whatever thread logged, so it
//! must never block: a full queue drops the message. The event loop polls the
//! receiving side once per cycle without waiting.

use std::sync::mpsc::{self, Receiver, SyncSender, TrySendError};

use crate::core::log_buffer::LogMsg;

pub fn channel(capacity: usize) -> (LogSender, LogReceiver) {
    let (tx, rx) = mpsc::sync_channel(capacity);
    (LogSender { tx }, LogReceiver { rx })
}

#[derive(Clone)]
pub struct LogSender {
    tx: SyncSender<LogMsg>,
}

impl LogSender {
    /// Queues `msg` if there is room. Returns false when it was dropped.
    pub fn send(&self, msg: LogMsg) -> bool {
        match self.tx.try_send(msg) {
            Ok(()) => true,
            Err(TrySendError::Full(_)) | Err(TrySendError::Disconnected(_)) => false,
        }
    }
}

pub struct LogReceiver {
    rx: Receiver<LogMsg>,
}

impl LogReceiver {
    /// Next queued message, or `None` right away if there is none.
    pub fn poll(&self) -> Option<LogMsg> {
        self.rx.try_recv().ok()
    }
}
