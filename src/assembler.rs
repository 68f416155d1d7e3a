//! # Line Assembler
//!
//! Turns a byte stream into complete lines, one byte at a time, using a pair
//! of fixed buffers: one being filled, one holding the last complete line.

/// Default line capacity in bytes; a line keeps at most `N - 1` bytes.
pub const MAX_LINE_LENGTH: usize = 120;

/// Assembles NMEA lines from single bytes.
///
/// - `$` restarts the line being filled, so a sentence always starts at
///   position 0.
/// - `\n` completes the line: the buffers swap roles, the completed one
///   becomes the ready line, and the `\n` itself becomes the first byte of
///   the next (it is discarded by the next `$`).
/// - Every other byte is appended. Once a line holds `N - 1` bytes, further
///   bytes are dropped and the line is marked truncated.
///
/// The ready line is a single-slot mailbox: a line completed before the
/// previous one was taken replaces it.
///
/// # Examples
///
/// ```rust
/// use nmea0183_fix::LineAssembler;
///
/// let mut assembler: LineAssembler = LineAssembler::new();
/// for &byte in b"$GPGGA,123519*5D\r\n$GPRMC" {
///     assembler.ingest(byte);
/// }
///
/// assert!(assembler.has_new_line());
/// assert_eq!(assembler.take_last_line(), b"$GPGGA,123519*5D\r");
/// assert!(!assembler.has_new_line());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineAssembler<const N: usize = MAX_LINE_LENGTH> {
    lines: [heapless::Vec<u8, N>; 2],
    truncated: [bool; 2],
    filling: usize,
    ready: bool,
    paused: bool,
    truncated_lines: u32,
    overwritten_lines: u32,
}

impl<const N: usize> Default for LineAssembler<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> LineAssembler<N> {
    pub fn new() -> Self {
        const { assert!(N >= 2, "a line needs room for at least one byte") };

        Self {
            lines: [heapless::Vec::new(), heapless::Vec::new()],
            truncated: [false; 2],
            filling: 0,
            ready: false,
            paused: false,
            truncated_lines: 0,
            overwritten_lines: 0,
        }
    }

    /// Feeds one byte. Does nothing while paused.
    pub fn ingest(&mut self, byte: u8) {
        if self.paused {
            return;
        }

        match byte {
            b'$' => self.restart(),
            b'\n' => self.complete(),
            _ => {}
        }

        let line = &mut self.lines[self.filling];
        if line.len() + 1 >= N || line.push(byte).is_err() {
            self.truncated[self.filling] = true;
        }
    }

    fn restart(&mut self) {
        self.lines[self.filling].clear();
        self.truncated[self.filling] = false;
    }

    fn complete(&mut self) {
        let done = self.filling;

        if self.truncated[done] {
            self.truncated_lines = self.truncated_lines.wrapping_add(1);
            log::debug!("line truncated to {} bytes", self.lines[done].len());
        }
        if self.ready {
            self.overwritten_lines = self.overwritten_lines.wrapping_add(1);
            log::debug!("unread line overwritten");
        }
        log::trace!("line complete ({} bytes)", self.lines[done].len());

        self.filling = done ^ 1;
        self.restart();
        self.ready = true;
    }

    /// Returns `true` if a complete line is waiting to be taken.
    pub fn has_new_line(&self) -> bool {
        self.ready
    }

    /// Takes the last complete line, clearing the ready flag.
    ///
    /// The line stays valid until the next `\n` is ingested; it is empty
    /// before the first line completes. A `\r` preceding the `\n` is kept.
    pub fn take_last_line(&mut self) -> &[u8] {
        self.ready = false;
        self.last_line()
    }

    /// Returns the last complete line without clearing the ready flag.
    pub fn last_line(&self) -> &[u8] {
        &self.lines[self.filling ^ 1]
    }

    /// Returns `true` if the last complete line lost bytes to truncation.
    pub fn last_line_truncated(&self) -> bool {
        self.truncated[self.filling ^ 1]
    }

    /// Suspends or resumes ingestion.
    ///
    /// While paused, [`ingest`](Self::ingest) leaves every buffer and flag
    /// untouched; callers should stop reading from their source so that no
    /// bytes are lost.
    pub fn pause(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Number of completed lines that were truncated.
    pub fn truncated_lines(&self) -> u32 {
        self.truncated_lines
    }

    /// Number of completed lines that replaced a line nobody had taken.
    pub fn overwritten_lines(&self) -> u32 {
        self.overwritten_lines
    }

    /// The line capacity, `N`.
    pub const fn capacity(&self) -> usize {
        N
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn feed<const N: usize>(assembler: &mut LineAssembler<N>, bytes: &[u8]) {
        for &byte in bytes {
            assembler.ingest(byte);
        }
    }

    #[test]
    fn test_empty() {
        let mut assembler: LineAssembler = LineAssembler::new();
        assert!(!assembler.has_new_line());
        assert_eq!(assembler.take_last_line(), b"");
        assert!(!assembler.last_line_truncated());
    }

    #[test]
    fn test_line_starts_at_dollar() {
        let mut assembler: LineAssembler = LineAssembler::new();
        feed(&mut assembler, b"garbage$GPGGA,1\r\n");
        assert_eq!(assembler.take_last_line(), b"$GPGGA,1\r");
    }

    #[test]
    fn test_newline_starts_next_buffer() {
        let mut assembler: LineAssembler = LineAssembler::new();
        feed(&mut assembler, b"$A\nB\n");
        assert_eq!(assembler.take_last_line(), b"\nB");
    }

    #[test]
    fn test_mailbox_overwrite() {
        let mut assembler: LineAssembler = LineAssembler::new();
        feed(&mut assembler, b"$FIRST\r\n$SECOND\r\n");

        assert!(assembler.has_new_line());
        assert_eq!(assembler.overwritten_lines(), 1);
        assert_eq!(assembler.take_last_line(), b"$SECOND\r");
        assert!(!assembler.has_new_line());
    }

    #[test]
    fn test_last_line_does_not_clear() {
        let mut assembler: LineAssembler = LineAssembler::new();
        feed(&mut assembler, b"$A\r\n");
        assert_eq!(assembler.last_line(), b"$A\r");
        assert!(assembler.has_new_line());
    }

    #[test]
    fn test_truncation() {
        let mut assembler = LineAssembler::<8>::new();
        feed(&mut assembler, b"$0123456789\n");

        assert_eq!(assembler.take_last_line(), b"$012345");
        assert!(assembler.last_line_truncated());
        assert_eq!(assembler.truncated_lines(), 1);

        feed(&mut assembler, b"$0123\n");
        assert_eq!(assembler.take_last_line(), b"$0123");
        assert!(!assembler.last_line_truncated());
        assert_eq!(assembler.truncated_lines(), 1);
    }

    #[test]
    fn test_dollar_abandons_truncated_line() {
        let mut assembler = LineAssembler::<4>::new();
        feed(&mut assembler, b"$ABCDEF$G\n");
        assert_eq!(assembler.take_last_line(), b"$G");
        assert!(!assembler.last_line_truncated());
        assert_eq!(assembler.truncated_lines(), 0);
    }

    #[test]
    fn test_pause() {
        let mut assembler: LineAssembler = LineAssembler::new();
        feed(&mut assembler, b"$GPGGA");

        assembler.pause(true);
        assert!(assembler.is_paused());
        feed(&mut assembler, b"\n$\n\n");
        assert!(!assembler.has_new_line());

        assembler.pause(false);
        feed(&mut assembler, b",1\n");
        assert_eq!(assembler.take_last_line(), b"$GPGGA,1");
    }
}
