//! Polyphonic mixing of voice buffers.
//!
//! All voices are summed sample-by-sample into a floating point accumulator
//! as long as the longest voice, averaged by the voice count, and clamped
//! back to the signed 16-bit range.

#[allow(clippy::module_inception)]
mod mixer;

#[cfg(test)]
mod tests_mixing;

// Re-export public API
pub use mixer::{mix_voices, Mixer};
