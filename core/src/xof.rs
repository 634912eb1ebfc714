//! Thin streaming adapter over the SHA-3 extendable-output functions.
//!
//! Every absorb … finalize … squeeze sequence corresponds to one fresh XOF
//! instance; [`Xof::reset`] returns an instance to the fresh state so hot
//! loops reuse it instead of reallocating.

use sha3::{
    digest::{ExtendableOutput, Update, XofReader},
    Shake128, Shake256,
};

/// Streaming XOF with an explicit absorb/finalize/squeeze lifecycle.
#[derive(Default)]
pub struct Xof<H: Default + Update + ExtendableOutput> {
    state: H,
    reader: Option<H::Reader>,
}

pub type Shake128Xof = Xof<Shake128>;
pub type Shake256Xof = Xof<Shake256>;

impl<H: Default + Update + ExtendableOutput> Xof<H> {
    pub fn new() -> Self {
        Self {
            state: H::default(),
            reader: None,
        }
    }

    /// Feed input bytes; only valid before [`finalize`](Self::finalize).
    pub fn absorb(&mut self, data: &[u8]) {
        debug_assert!(self.reader.is_none(), "absorb after finalize");
        self.state.update(data);
    }

    /// Switch from absorbing to squeezing.
    pub fn finalize(&mut self) {
        let state = std::mem::take(&mut self.state);
        self.reader = Some(state.finalize_xof());
    }

    /// Read the next `out.len()` output bytes, finalizing implicitly on
    /// first use. Successive calls continue the same output stream.
    pub fn squeeze(&mut self, out: &mut [u8]) {
        if self.reader.is_none() {
            self.finalize();
        }
        if let Some(reader) = &mut self.reader {
            reader.read(out);
        }
    }

    /// Return to the fresh (absorbing) state.
    pub fn reset(&mut self) {
        self.state = H::default();
        self.reader = None;
    }
}

/// One-shot SHAKE-128.
pub fn shake128(out_len: usize, input: &[u8]) -> Vec<u8> {
    let mut xof = Shake128Xof::new();
    xof.absorb(input);
    let mut out = vec![0u8; out_len];
    xof.squeeze(&mut out);
    out
}

/// One-shot SHAKE-256.
pub fn shake256(out_len: usize, input: &[u8]) -> Vec<u8> {
    let mut xof = Shake256Xof::new();
    xof.absorb(input);
    let mut out = vec![0u8; out_len];
    xof.squeeze(&mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! xof_smoke_tests {
        ($modname:ident, $f:path) => {
            mod $modname {
                #[test]
                fn deterministic_and_length() {
                    let m = b"determinism";
                    let a = $f(64, m);
                    let b = $f(64, m);
                    assert_eq!(a.len(), 64);
                    assert_eq!(b.len(), 64);
                    assert_eq!(a, b);
                }
                #[test]
                fn prefix_property() {
                    let m = b"prefix test";
                    let a = $f(64, m);
                    let b = $f(128, m);
                    assert_eq!(&b[..64], &a[..]);
                }
                #[test]
                fn input_sensitivity() {
                    let a = $f(48, b"abc");
                    let b = $f(48, b"abd");
                    assert_ne!(a, b);
                }
                #[test]
                fn empty_message_is_ok() {
                    let out = $f(32, b"");
                    assert_eq!(out.len(), 32);
                }
            }
        };
    }

    xof_smoke_tests!(shake128_suite, crate::xof::shake128);
    xof_smoke_tests!(shake256_suite, crate::xof::shake256);

    #[test]
    fn split_absorbs_match_a_single_absorb() {
        let mut split = Shake256Xof::new();
        split.absorb(b"hello, ");
        split.absorb(b"world");
        let mut a = [0u8; 32];
        split.squeeze(&mut a);

        let b = shake256(32, b"hello, world");
        assert_eq!(a.as_slice(), b.as_slice());
    }

    #[test]
    fn incremental_squeezes_continue_one_stream() {
        let mut xof = Shake256Xof::new();
        xof.absorb(b"stream");
        let mut first = [0u8; 16];
        let mut second = [0u8; 16];
        xof.squeeze(&mut first);
        xof.squeeze(&mut second);

        let combined = shake256(32, b"stream");
        assert_eq!(&combined[..16], first.as_slice());
        assert_eq!(&combined[16..], second.as_slice());
    }

    #[test]
    fn reset_restores_the_fresh_state() {
        let mut xof = Shake128Xof::new();
        xof.absorb(b"first use");
        let mut scratch = [0u8; 8];
        xof.squeeze(&mut scratch);

        xof.reset();
        xof.absorb(b"second use");
        let mut a = [0u8; 32];
        xof.squeeze(&mut a);

        assert_eq!(a.to_vec(), shake128(32, b"second use"));
    }

    #[test]
    fn explicit_finalize_matches_lazy_finalize() {
        let mut explicit = Shake256Xof::new();
        explicit.absorb(b"finalize");
        explicit.finalize();
        let mut a = [0u8; 24];
        explicit.squeeze(&mut a);

        let mut lazy = Shake256Xof::new();
        lazy.absorb(b"finalize");
        let mut b = [0u8; 24];
        lazy.squeeze(&mut b);

        assert_eq!(a, b);
    }
}
