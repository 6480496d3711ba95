//! Channel-based feeding of samples from other threads.
//!
//! The store itself is single-threaded. Producers on other threads hold a
//! [`LogSink`] and send commands; the thread that owns the
//! [`GraphLogger`](crate::GraphLogger) applies them in send order with
//! [`GraphLogger::drain`](crate::GraphLogger::drain), typically once per frame.

use std::sync::mpsc::{Receiver, SendError, Sender};

use crate::data::traces::SampleValue;
use crate::logger::DEFAULT_SERIES;

/// Messages applied to the logger by `drain`.
#[derive(Debug, Clone, PartialEq)]
pub enum LogCommand {
    /// Record a sample at an explicit tick.
    Record {
        name: String,
        value: SampleValue,
        tick: i64,
    },
    /// Record a sample at whatever frame the logger is on when it drains.
    Point { name: String, value: SampleValue },
}

/// Cloneable, `Send` handle for feeding samples into a logger.
#[derive(Clone)]
pub struct LogSink {
    tx: Sender<LogCommand>,
}

impl LogSink {
    /// Send a sample for `name` at `tick`.
    pub fn record<S, V>(&self, name: S, value: V, tick: i64) -> Result<(), SendError<LogCommand>>
    where
        S: Into<String>,
        V: Into<SampleValue>,
    {
        self.tx.send(LogCommand::Record {
            name: name.into(),
            value: value.into(),
            tick,
        })
    }

    /// Send a sample for `name`, stamped with the logger's frame at drain time.
    pub fn add_point<S, V>(&self, name: S, value: V) -> Result<(), SendError<LogCommand>>
    where
        S: Into<String>,
        V: Into<SampleValue>,
    {
        self.tx.send(LogCommand::Point {
            name: name.into(),
            value: value.into(),
        })
    }

    /// Send a sample for the `"default"` series.
    #[inline]
    pub fn add_default<V: Into<SampleValue>>(&self, value: V) -> Result<(), SendError<LogCommand>> {
        self.add_point(DEFAULT_SERIES, value)
    }
}

/// Create a new channel pair for logging: `(LogSink, Receiver<LogCommand>)`.
pub fn channel_log() -> (LogSink, Receiver<LogCommand>) {
    let (tx, rx) = std::sync::mpsc::channel();
    (LogSink { tx }, rx)
}
