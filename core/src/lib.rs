//! CRYSTALS-Dilithium (Round 3) digital signatures.
//!
//! Key generation, signing, and verification over the polynomial ring
//! R_q = ℤ_q[X]/(X^256 + 1) with q = 8380417, at the three security levels
//! of table 2 of the round-3 specification. All keys and signatures use the
//! canonical byte layout, so they interoperate with other round-3
//! implementations.
//!
//! ```
//! use dilithium_core::{Keypair, SecurityLevel};
//!
//! let pair = Keypair::generate(SecurityLevel::Level2, &[0u8; 32]);
//! let sig = pair.secret.sign(b"attack at dawn");
//! assert!(pair.public.verify(b"attack at dawn", &sig));
//! ```

pub mod encoding;
pub mod error;
pub mod keys;
pub mod params;
pub mod rounding;
pub mod sampling;
pub mod sign;
pub mod xof;

pub use error::{DilithiumError, DilithiumResult};
pub use keys::{keygen, Keypair, PublicKey, SecretKey};
pub use params::{DilithiumConfig, SecurityLevel};
pub use sign::{sign_det, sign_rand, verify};
