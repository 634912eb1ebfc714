//! Key generation and the key objects wrapping the canonical encodings.

use std::fmt;

use rand::RngCore;
use zeroize::Zeroize;

use crate::encoding::pack_vec_into;
use crate::error::{DilithiumError, DilithiumResult};
use crate::params::SecurityLevel;
use crate::rounding::power2round_vec;
use crate::sampling::{expand_a, expand_s};
use crate::sign::{sign_internal, verify_internal};
use crate::xof::{shake256, Shake256Xof};

/// Public/secret key pair in the canonical byte layout.
#[derive(Clone, Debug)]
pub struct Keypair {
    pub public: PublicKey,
    pub secret: SecretKey,
}

impl Keypair {
    /// Deterministic key generation from a 32-byte seed.
    pub fn generate(level: SecurityLevel, seed: &[u8; 32]) -> Self {
        let (pk, sk) = keygen(level, seed);
        Self {
            public: PublicKey { level, bytes: pk },
            secret: SecretKey { level, bytes: sk },
        }
    }

    /// Key generation from a fresh OS-random seed.
    pub fn random(level: SecurityLevel) -> Self {
        let mut seed = [0u8; 32];
        rand::rng().fill_bytes(&mut seed);
        let pair = Self::generate(level, &seed);
        seed.zeroize();
        pair
    }
}

/// Canonical public key: ρ ‖ pack(t1, 10).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey {
    level: SecurityLevel,
    bytes: Vec<u8>,
}

impl PublicKey {
    /// Wrap canonical bytes, checking the length for `level`.
    pub fn from_bytes(
        level: SecurityLevel,
        bytes: &[u8],
    ) -> DilithiumResult<Self> {
        let expected = level.config().public_key_len();
        if bytes.len() != expected {
            return Err(DilithiumError::PublicKeyLength {
                expected,
                actual: bytes.len(),
            });
        }
        Ok(Self {
            level,
            bytes: bytes.to_vec(),
        })
    }

    pub fn level(&self) -> SecurityLevel {
        self.level
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Check `sig` over `msg` under this key.
    pub fn verify(&self, msg: &[u8], sig: &[u8]) -> bool {
        verify_internal(self.level, &self.bytes, msg, sig)
    }
}

/// Canonical secret key:
/// ρ ‖ K ‖ tr ‖ pack(η − s1) ‖ pack(η − s2) ‖ pack(2^(d−1) − t0).
///
/// The byte buffer is wiped when the key is dropped.
#[derive(Clone)]
pub struct SecretKey {
    level: SecurityLevel,
    bytes: Vec<u8>,
}

impl SecretKey {
    /// Wrap canonical bytes, checking the length for `level`.
    pub fn from_bytes(
        level: SecurityLevel,
        bytes: &[u8],
    ) -> DilithiumResult<Self> {
        let expected = level.config().secret_key_len();
        if bytes.len() != expected {
            return Err(DilithiumError::SecretKeyLength {
                expected,
                actual: bytes.len(),
            });
        }
        Ok(Self {
            level,
            bytes: bytes.to_vec(),
        })
    }

    pub fn level(&self) -> SecurityLevel {
        self.level
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Deterministic signature over `msg`.
    pub fn sign(&self, msg: &[u8]) -> Vec<u8> {
        sign_internal(self.level, &self.bytes, msg, None)
    }

    /// Randomized signature; `seed` is the external 64-byte randomness.
    pub fn sign_randomized(&self, msg: &[u8], seed: &[u8; 64]) -> Vec<u8> {
        sign_internal(self.level, &self.bytes, msg, Some(seed))
    }
}

impl Drop for SecretKey {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey")
            .field("level", &self.level)
            .finish_non_exhaustive()
    }
}

/// Byte-level key generation from a 32-byte seed.
///
/// Returns `(public_key, secret_key)` in the canonical layout; lengths are
/// `public_key_len()` and `secret_key_len()` of the level's config.
pub fn keygen(level: SecurityLevel, seed: &[u8; 32]) -> (Vec<u8>, Vec<u8>) {
    let config = level.config();
    debug_assert!(config.validate());

    let mut expanded = [0u8; 128];
    let mut xof = Shake256Xof::new();
    xof.absorb(seed);
    xof.squeeze(&mut expanded);

    let (rho, rest) = expanded.split_at(32);
    let (rho_prime, key) = rest.split_at(64);

    let a = expand_a(rho, config.k, config.l);
    let s1 = expand_s(rho_prime, config.eta, config.l, 0);
    let s2 = expand_s(rho_prime, config.eta, config.k, config.l);

    let mut s1_hat = s1.clone();
    s1_hat.ntt_in_place();
    let mut t = a.mul_vec(&s1_hat);
    t.intt_in_place();
    let t = t + s2.clone();

    let (t1, t0) = power2round_vec(&t, config.d);

    let mut pk = Vec::with_capacity(config.public_key_len());
    pk.extend_from_slice(rho);
    pack_vec_into(&t1, config.t1_bits(), &mut pk);

    let tr = shake256(32, &pk);

    let mut sk = Vec::with_capacity(config.secret_key_len());
    sk.extend_from_slice(rho);
    sk.extend_from_slice(key);
    sk.extend_from_slice(&tr);

    let mut s1 = s1;
    s1.sub_from(config.eta);
    pack_vec_into(&s1, config.eta_bits(), &mut sk);

    let mut s2 = s2;
    s2.sub_from(config.eta);
    pack_vec_into(&s2, config.eta_bits(), &mut sk);

    let mut t0 = t0;
    t0.sub_from(1 << (config.d - 1));
    pack_vec_into(&t0, config.d as usize, &mut sk);

    expanded.zeroize();

    debug_assert_eq!(pk.len(), config.public_key_len());
    debug_assert_eq!(sk.len(), config.secret_key_len());
    (pk, sk)
}
