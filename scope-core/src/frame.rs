//! # Frame Accumulation Module
//!
//! Capture callbacks deliver chunks of whatever size the host hands out,
//! while the analysis side wants fixed-size blocks. This module
//! accumulates incoming chunks and yields complete blocks, leaving the
//! remainder buffered for the next callback. It owns no device or
//! thread; the caller drives it from whatever context captures audio.

use anyhow::{Result, bail};

/// Default number of samples per analysis block.
///
/// Larger blocks give the tracker more context but add latency;
/// 1024 samples is roughly 23 ms at 44.1 kHz.
pub const DEFAULT_BLOCK_SIZE: usize = 1024;

/// Accumulates capture chunks into fixed-size sample blocks.
#[derive(Debug)]
pub struct FrameChunker {
    block_size: usize,
    buffer: Vec<f32>,
}

impl FrameChunker {
    /// Creates a chunker emitting blocks of `block_size` samples.
    ///
    /// # Errors
    /// Fails if `block_size` is zero; a zero-sample block can never be
    /// filled and would make `pop_block` spin.
    pub fn new(block_size: usize) -> Result<Self> {
        if block_size == 0 {
            bail!("block size must be a positive number of samples");
        }
        Ok(Self {
            block_size,
            buffer: Vec::with_capacity(block_size * 2),
        })
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Number of buffered samples not yet emitted as a block.
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }

    /// Appends one capture chunk to the accumulation buffer.
    pub fn push(&mut self, chunk: &[f32]) {
        self.buffer.extend_from_slice(chunk);
    }

    /// Takes the next complete block off the front of the buffer.
    ///
    /// Returns `None` until enough samples have accumulated. Call in a
    /// loop after each `push`; one large chunk can yield several blocks.
    pub fn pop_block(&mut self) -> Option<Vec<f32>> {
        if self.buffer.len() < self.block_size {
            return None;
        }
        let block = self.buffer[..self.block_size].to_vec();
        self.buffer.drain(..self.block_size);
        Some(block)
    }
}

impl Default for FrameChunker {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
            buffer: Vec::with_capacity(DEFAULT_BLOCK_SIZE * 2),
        }
    }
}
