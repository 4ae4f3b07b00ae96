//! Pseudorandom functions that exercise the derivation loop without real cryptography.

use std::cell::Cell;
use std::io;

use crate::{Error, PseudoRandomFunction};

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct CallStats {
    pub keyed: usize,
    pub resets: usize,
    pub finishes: usize,
    /// computations that were not started by a reset
    pub dirty_finishes: usize,
}

thread_local! {
    static STATS: Cell<CallStats> = Cell::new(CallStats::default());
}

fn record<F>(change: F) where F: FnOnce(&mut CallStats) {
    STATS.with(|stats| {
        let mut current = stats.get();
        change(&mut current);
        stats.set(current);
    })
}

/// An 8 byte FNV-1a style mixer that counts how it is driven.
pub struct CountingPrf {
    key: u64,
    state: u64,
    finished: bool,
}

impl CountingPrf {
    pub fn clear() {
        STATS.with(|stats| stats.set(CallStats::default()))
    }

    pub fn stats() -> CallStats {
        STATS.with(|stats| stats.get())
    }
}

impl PseudoRandomFunction for CountingPrf {
    const OUTPUT_SIZE: usize = 8;

    fn init_keyed(key: &[u8]) -> Result<Self, Error> {
        record(|stats| stats.keyed += 1);

        let key = key.iter().fold(0xcbf2_9ce4_8422_2325u64, |h, b| (h ^ u64::from(*b)).wrapping_mul(0x100_0000_01b3));
        Ok(CountingPrf { key, state: key, finished: false })
    }

    fn update_prf(&mut self, input: &[u8]) {
        for b in input {
            self.state = (self.state ^ u64::from(*b)).wrapping_mul(0x100_0000_01b3);
        }
    }

    fn finish_into(&mut self, out: &mut [u8]) {
        let finished = self.finished;
        record(|stats| {
            stats.finishes += 1;
            if finished {
                stats.dirty_finishes += 1;
            }
        });

        out.copy_from_slice(&self.state.to_be_bytes());
        self.finished = true;
    }

    fn reset_prf(&mut self) {
        record(|stats| stats.resets += 1);

        self.state = self.key;
        self.finished = false;
    }
}

/// A PRF without output.
pub struct NullPrf;

impl PseudoRandomFunction for NullPrf {
    const OUTPUT_SIZE: usize = 0;

    fn init_keyed(_key: &[u8]) -> Result<Self, Error> {
        Ok(NullPrf)
    }

    fn update_prf(&mut self, _input: &[u8]) {}

    fn finish_into(&mut self, _out: &mut [u8]) {}

    fn reset_prf(&mut self) {}
}

/// A PRF that rejects every key.
pub struct FailingPrf;

impl PseudoRandomFunction for FailingPrf {
    const OUTPUT_SIZE: usize = 16;

    fn init_keyed(_key: &[u8]) -> Result<Self, Error> {
        Err(Error::primitive(io::Error::new(io::ErrorKind::Other, "refusing key")))
    }

    fn update_prf(&mut self, _input: &[u8]) {
        unreachable!()
    }

    fn finish_into(&mut self, _out: &mut [u8]) {
        unreachable!()
    }

    fn reset_prf(&mut self) {
        unreachable!()
    }
}
