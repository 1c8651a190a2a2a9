//! Clipboard backends.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::error::{EnhanceError, Result};

/// A clipboard the page can write to.
///
/// The page is single-threaded by contract, so backends need no locking.
pub trait Clipboard: fmt::Debug {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

// =============================================================================
// In-memory backend
// =============================================================================

/// In-memory clipboard recording every write.
///
/// Clones share the same backing store, so a test can keep a handle while
/// the page owns the boxed backend.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    writes: Rc<RefCell<Vec<String>>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent write, if any.
    pub fn last(&self) -> Option<String> {
        self.writes.borrow().last().cloned()
    }

    /// All writes, oldest first.
    pub fn writes(&self) -> Vec<String> {
        self.writes.borrow().clone()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.writes.borrow_mut().push(text.to_string());
        Ok(())
    }
}

// =============================================================================
// OS-command backend
// =============================================================================

/// Clipboard backed by the platform's clipboard command.
/// - macOS: uses pbcopy
/// - Linux: uses xclip or xsel
/// - Windows: uses clip.exe
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        copy_to_system(text)
    }
}

#[cfg(target_os = "macos")]
fn copy_to_system(text: &str) -> Result<()> {
    spawn_and_write("pbcopy", &[], text)
}

#[cfg(target_os = "linux")]
fn copy_to_system(text: &str) -> Result<()> {
    // Try xclip first, then xsel
    match spawn_and_write("xclip", &["-selection", "clipboard"], text) {
        Ok(()) => Ok(()),
        Err(_) => spawn_and_write("xsel", &["--clipboard", "--input"], text),
    }
}

#[cfg(target_os = "windows")]
fn copy_to_system(text: &str) -> Result<()> {
    spawn_and_write("clip", &[], text)
}

#[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
fn copy_to_system(_text: &str) -> Result<()> {
    Err(EnhanceError::Clipboard(
        "no clipboard command on this platform".to_string(),
    ))
}

#[allow(dead_code)] // Unused on platforms without a clipboard command
fn spawn_and_write(command: &str, args: &[&str], text: &str) -> Result<()> {
    use std::io::Write;
    use std::process::{Command, Stdio};

    let mut child = Command::new(command)
        .args(args)
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|e| EnhanceError::Clipboard(format!("failed to spawn {command}: {e}")))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| EnhanceError::Clipboard(format!("failed to write to {command}: {e}")))?;
    }

    let status = child
        .wait()
        .map_err(|e| EnhanceError::Clipboard(format!("failed to wait for {command}: {e}")))?;

    if status.success() {
        Ok(())
    } else {
        Err(EnhanceError::Clipboard(format!(
            "{command} exited with error"
        )))
    }
}
