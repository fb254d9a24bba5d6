// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Qbitel Inc.

//! Diagnostic logging for the identity props core
//!
//! Components report through the [`DiagnosticSink`] trait. [`LogBuffer`] is a
//! fixed-size circular buffer that hosts drain into their own logger;
//! [`NullSink`] discards everything. Logging never influences control flow.
//!
//! # Security
//!
//! - Only package names, attribute names and values already visible to apps
//!   are logged
//! - Debug records are produced only when decision tracing is enabled

use core::fmt::{self, Write};
use heapless::String;

use crate::config::HookConfig;

/// Maximum log message length
pub const MAX_LOG_MESSAGE_LEN: usize = 128;

/// Log buffer size (number of entries)
pub const LOG_BUFFER_SIZE: usize = 32;

/// Log level enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum LogLevel {
    /// Errors that require attention
    Error = 0,
    /// Warnings about potential issues
    Warn = 1,
    /// Informational messages
    Info = 2,
    /// Per-decision debug messages
    Debug = 3,
    /// Trace messages (very verbose)
    Trace = 4,
}

impl LogLevel {
    /// Get the log level name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            Self::Warn => "WARN",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
            Self::Trace => "TRACE",
        }
    }

    /// Get a short prefix for the log level
    #[must_use]
    pub const fn prefix(&self) -> char {
        match self {
            Self::Error => 'E',
            Self::Warn => 'W',
            Self::Info => 'I',
            Self::Debug => 'D',
            Self::Trace => 'T',
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for LogLevel {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{}", self.as_str());
    }
}

/// Destination for diagnostic records
pub trait DiagnosticSink {
    /// Record a formatted message
    fn record(&mut self, level: LogLevel, module: &'static str, args: fmt::Arguments<'_>);

    /// Check whether records at `level` are kept
    ///
    /// Callers may skip formatting work when this returns `false`.
    fn enabled(&self, level: LogLevel) -> bool {
        let _ = level;
        true
    }
}

/// Sink that drops every record
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn record(&mut self, _level: LogLevel, _module: &'static str, _args: fmt::Arguments<'_>) {}

    fn enabled(&self, _level: LogLevel) -> bool {
        false
    }
}

/// Log entry structure
#[derive(Clone)]
pub struct LogEntry {
    /// Log level
    pub level: LogLevel,
    /// Sequence number assigned by the buffer
    pub sequence: u32,
    /// Component name
    pub module: &'static str,
    /// Log message (truncated to capacity)
    pub message: String<MAX_LOG_MESSAGE_LEN>,
}

impl LogEntry {
    /// Create a new log entry
    #[must_use]
    pub fn new(level: LogLevel, sequence: u32, module: &'static str, message: &str) -> Self {
        let mut msg = String::new();
        for ch in message.chars() {
            if msg.push(ch).is_err() {
                break;
            }
        }

        Self {
            level,
            sequence,
            module,
            message: msg,
        }
    }
}

impl fmt::Debug for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:08X}] {} [{}] {}",
            self.sequence,
            self.level.prefix(),
            self.module,
            self.message
        )
    }
}

/// Writer that silently truncates at capacity
struct Truncating<'a>(&'a mut String<MAX_LOG_MESSAGE_LEN>);

impl Write for Truncating<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for ch in s.chars() {
            if self.0.push(ch).is_err() {
                break;
            }
        }
        Ok(())
    }
}

/// Circular log buffer
pub struct LogBuffer {
    entries: [Option<LogEntry>; LOG_BUFFER_SIZE],
    write_index: usize,
    count: usize,
    next_sequence: u32,
    min_level: LogLevel,
}

impl LogBuffer {
    /// Create a new empty log buffer
    #[must_use]
    pub const fn new() -> Self {
        Self::with_min_level(LogLevel::Info)
    }

    /// Create a new empty log buffer keeping records up to `min_level`
    #[must_use]
    pub const fn with_min_level(min_level: LogLevel) -> Self {
        const NONE: Option<LogEntry> = None;
        Self {
            entries: [NONE; LOG_BUFFER_SIZE],
            write_index: 0,
            count: 0,
            next_sequence: 0,
            min_level,
        }
    }

    /// Create a new empty log buffer at the level `config` asks for
    #[must_use]
    pub const fn from_config(config: &HookConfig) -> Self {
        Self::with_min_level(config.min_log_level)
    }

    /// Set the minimum log level
    pub fn set_min_level(&mut self, level: LogLevel) {
        self.min_level = level;
    }

    /// Get the minimum log level
    #[must_use]
    pub const fn min_level(&self) -> LogLevel {
        self.min_level
    }

    /// Check if a log level should be recorded
    #[must_use]
    pub const fn should_log(&self, level: LogLevel) -> bool {
        (level as u8) <= (self.min_level as u8)
    }

    /// Write a log entry
    pub fn write(&mut self, entry: LogEntry) {
        if !self.should_log(entry.level) {
            return;
        }

        self.entries[self.write_index] = Some(entry);
        self.write_index = (self.write_index + 1) % LOG_BUFFER_SIZE;
        if self.count < LOG_BUFFER_SIZE {
            self.count += 1;
        }
    }

    /// Log with format arguments
    pub fn log(&mut self, level: LogLevel, module: &'static str, args: fmt::Arguments<'_>) {
        if !self.should_log(level) {
            return;
        }

        let mut message = String::<MAX_LOG_MESSAGE_LEN>::new();
        let _ = Truncating(&mut message).write_fmt(args);

        let sequence = self.next_sequence;
        self.next_sequence = self.next_sequence.wrapping_add(1);

        self.write(LogEntry {
            level,
            sequence,
            module,
            message,
        });
    }

    /// Get the number of entries
    #[must_use]
    pub const fn len(&self) -> usize {
        self.count
    }

    /// Check if buffer is empty
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Clear all entries
    pub fn clear(&mut self) {
        for entry in &mut self.entries {
            *entry = None;
        }
        self.write_index = 0;
        self.count = 0;
    }

    /// Iterate over entries (oldest first)
    pub fn iter(&self) -> LogBufferIter<'_> {
        LogBufferIter {
            buffer: self,
            index: 0,
            remaining: self.count,
        }
    }
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticSink for LogBuffer {
    fn record(&mut self, level: LogLevel, module: &'static str, args: fmt::Arguments<'_>) {
        self.log(level, module, args);
    }

    fn enabled(&self, level: LogLevel) -> bool {
        self.should_log(level)
    }
}

/// Iterator over log buffer entries
pub struct LogBufferIter<'a> {
    buffer: &'a LogBuffer,
    index: usize,
    remaining: usize,
}

impl<'a> Iterator for LogBufferIter<'a> {
    type Item = &'a LogEntry;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let start_index = if self.buffer.count < LOG_BUFFER_SIZE {
            0
        } else {
            self.buffer.write_index
        };

        let actual_index = (start_index + self.index) % LOG_BUFFER_SIZE;
        self.index += 1;
        self.remaining -= 1;

        self.buffer.entries[actual_index].as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

/// Record an error message
#[macro_export]
macro_rules! log_error {
    ($sink:expr, $module:expr, $($arg:tt)*) => {
        $crate::log::DiagnosticSink::record(
            &mut *$sink, $crate::log::LogLevel::Error, $module, format_args!($($arg)*)
        )
    };
}

/// Record a warning message
#[macro_export]
macro_rules! log_warn {
    ($sink:expr, $module:expr, $($arg:tt)*) => {
        $crate::log::DiagnosticSink::record(
            &mut *$sink, $crate::log::LogLevel::Warn, $module, format_args!($($arg)*)
        )
    };
}

/// Record an informational message
#[macro_export]
macro_rules! log_info {
    ($sink:expr, $module:expr, $($arg:tt)*) => {
        $crate::log::DiagnosticSink::record(
            &mut *$sink, $crate::log::LogLevel::Info, $module, format_args!($($arg)*)
        )
    };
}

/// Record a debug message
#[macro_export]
macro_rules! log_debug {
    ($sink:expr, $module:expr, $($arg:tt)*) => {
        $crate::log::DiagnosticSink::record(
            &mut *$sink, $crate::log::LogLevel::Debug, $module, format_args!($($arg)*)
        )
    };
}

/// Record a trace-level message
#[macro_export]
macro_rules! log_trace {
    ($sink:expr, $module:expr, $($arg:tt)*) => {
        $crate::log::DiagnosticSink::record(
            &mut *$sink, $crate::log::LogLevel::Trace, $module, format_args!($($arg)*)
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_filtering() {
        let mut buffer = LogBuffer::with_min_level(LogLevel::Warn);
        log_error!(&mut buffer, "test", "kept {}", 1);
        log_debug!(&mut buffer, "test", "dropped {}", 2);
        assert_eq!(buffer.len(), 1);
        assert!(!buffer.enabled(LogLevel::Debug));
    }

    #[test]
    fn test_wraps_oldest_first() {
        let mut buffer = LogBuffer::new();
        for i in 0..(LOG_BUFFER_SIZE + 3) {
            log_info!(&mut buffer, "test", "entry {}", i);
        }
        assert_eq!(buffer.len(), LOG_BUFFER_SIZE);
        let first = buffer.iter().next().map(|e| e.sequence);
        assert_eq!(first, Some(3));
    }

    #[test]
    fn test_long_message_is_truncated() {
        let mut buffer = LogBuffer::new();
        log_info!(&mut buffer, "test", "{:x<256}", "");
        let entry = buffer.iter().next().map(|e| e.message.len());
        assert_eq!(entry, Some(MAX_LOG_MESSAGE_LEN));
    }
}
