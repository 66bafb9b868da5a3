//! Progress reporting hooks for the generation pipeline.

/// Receives progress notifications while files are encoded.
///
/// All methods default to doing nothing, so implementors only override what
/// they display. `()` is the silent observer.
pub trait ProgressObserver {
    /// A file is about to be encoded.
    fn file_started(&mut self, key: &str, size: u64) {
        let _ = (key, size);
    }

    /// `bytes` more bytes of the current file were encoded.
    fn chunk_processed(&mut self, bytes: usize) {
        let _ = bytes;
    }

    /// The current file is fully encoded.
    fn file_finished(&mut self, key: &str) {
        let _ = key;
    }
}

impl ProgressObserver for () {}

impl<T: ProgressObserver + ?Sized> ProgressObserver for &mut T {
    fn file_started(&mut self, key: &str, size: u64) {
        (**self).file_started(key, size);
    }

    fn chunk_processed(&mut self, bytes: usize) {
        (**self).chunk_processed(bytes);
    }

    fn file_finished(&mut self, key: &str) {
        (**self).file_finished(key);
    }
}
