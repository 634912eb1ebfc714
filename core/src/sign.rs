//! Signing and verification.

use zeroize::Zeroize;

use crate::encoding::{
    decode_hints, encode_hints, pack_vec, pack_vec_into, unpack_vec,
};
use crate::error::{DilithiumError, DilithiumResult};
use crate::params::SecurityLevel;
use crate::rounding::{highbits_vec, lowbits_vec, make_hint_vec, use_hint_vec};
use crate::sampling::{expand_a, expand_mask, sample_in_ball};
use crate::xof::{shake256, Shake256Xof};

/// Deterministic signature; `sk` must be the canonical encoding for `level`.
pub fn sign_det(
    level: SecurityLevel,
    sk: &[u8],
    msg: &[u8],
) -> DilithiumResult<Vec<u8>> {
    check_sk_len(level, sk)?;
    Ok(sign_internal(level, sk, msg, None))
}

/// Randomized signature driven by an external 64-byte seed.
pub fn sign_rand(
    level: SecurityLevel,
    sk: &[u8],
    msg: &[u8],
    rand: &[u8; 64],
) -> DilithiumResult<Vec<u8>> {
    check_sk_len(level, sk)?;
    Ok(sign_internal(level, sk, msg, Some(rand)))
}

/// Check a signature; malformed inputs of any kind verify as `false`.
pub fn verify(
    level: SecurityLevel,
    pk: &[u8],
    msg: &[u8],
    sig: &[u8],
) -> bool {
    verify_internal(level, pk, msg, sig)
}

fn check_sk_len(level: SecurityLevel, sk: &[u8]) -> DilithiumResult<()> {
    let expected = level.config().secret_key_len();
    if sk.len() != expected {
        return Err(DilithiumError::SecretKeyLength {
            expected,
            actual: sk.len(),
        });
    }
    Ok(())
}

/// The signing loop. `external_seed` switches ρ′ from the derived
/// deterministic value to caller-provided randomness.
pub(crate) fn sign_internal(
    level: SecurityLevel,
    sk: &[u8],
    msg: &[u8],
    external_seed: Option<&[u8; 64]>,
) -> Vec<u8> {
    let config = level.config();
    let eta_bits = config.eta_bits();
    let d_bits = config.d as usize;

    let (rho, rest) = sk.split_at(32);
    let (key, rest) = rest.split_at(32);
    let (tr, rest) = rest.split_at(32);
    let (s1_bytes, rest) = rest.split_at(32 * eta_bits * config.l);
    let (s2_bytes, t0_bytes) = rest.split_at(32 * eta_bits * config.k);

    let mut s1 = unpack_vec(s1_bytes, eta_bits, config.l);
    s1.sub_from(config.eta);
    let mut s2 = unpack_vec(s2_bytes, eta_bits, config.k);
    s2.sub_from(config.eta);
    let mut t0 = unpack_vec(t0_bytes, d_bits, config.k);
    t0.sub_from(1 << (config.d - 1));

    let a = expand_a(rho, config.k, config.l);

    let mut mu = [0u8; 64];
    let mut xof = Shake256Xof::new();
    xof.absorb(tr);
    xof.absorb(msg);
    xof.squeeze(&mut mu);

    let mut rho_prime = [0u8; 64];
    match external_seed {
        Some(seed) => rho_prime.copy_from_slice(seed),
        None => {
            xof.reset();
            xof.absorb(key);
            xof.absorb(&mu);
            xof.squeeze(&mut rho_prime);
        }
    }

    s1.ntt_in_place();
    s2.ntt_in_place();
    t0.ntt_in_place();

    let alpha = config.alpha();
    let mut kappa: u16 = 0;

    // Rejection loop: every candidate is recomputed from scratch because
    // c̃ depends on w1, which depends on the fresh mask y.
    loop {
        let y = expand_mask(
            &rho_prime,
            kappa,
            config.l,
            config.gamma1,
            config.gamma1_bits(),
        );
        kappa += config.l as u16;

        let mut y_hat = y.clone();
        y_hat.ntt_in_place();
        let mut w = a.mul_vec(&y_hat);
        w.intt_in_place();

        let w1 = highbits_vec(&w, alpha);

        let mut c_tilde = [0u8; 32];
        xof.reset();
        xof.absorb(&mu);
        xof.absorb(&pack_vec(&w1, config.w1_bits()));
        xof.squeeze(&mut c_tilde);

        let mut c_hat = sample_in_ball(&c_tilde, config.tau);
        c_hat.ntt();

        let mut cs1 = s1.pointwise_poly(&c_hat);
        cs1.intt_in_place();
        let z = y + cs1;
        if z.norm_infinity() >= config.gamma1 - config.beta {
            continue;
        }

        let mut cs2 = s2.pointwise_poly(&c_hat);
        cs2.intt_in_place();
        let w_minus_cs2 = w - cs2;
        let r0 = lowbits_vec(&w_minus_cs2, alpha);
        if r0.norm_infinity() >= config.gamma2 - config.beta {
            continue;
        }

        let mut ct0 = t0.pointwise_poly(&c_hat);
        ct0.intt_in_place();
        if ct0.norm_infinity() >= config.gamma2 {
            continue;
        }

        let minus_ct0 = -ct0.clone();
        let h = make_hint_vec(&minus_ct0, &(w_minus_cs2 + ct0), alpha);
        if h.count_ones() > config.omega {
            continue;
        }

        let mut sig = Vec::with_capacity(config.signature_len());
        sig.extend_from_slice(&c_tilde);
        let mut z = z;
        z.sub_from(config.gamma1);
        pack_vec_into(&z, config.gamma1_bits(), &mut sig);
        sig.extend_from_slice(&encode_hints(&h, config.omega));

        rho_prime.zeroize();
        debug_assert_eq!(sig.len(), config.signature_len());
        return sig;
    }
}

pub(crate) fn verify_internal(
    level: SecurityLevel,
    pk: &[u8],
    msg: &[u8],
    sig: &[u8],
) -> bool {
    let config = level.config();
    if pk.len() != config.public_key_len()
        || sig.len() != config.signature_len()
    {
        return false;
    }

    let (rho, t1_bytes) = pk.split_at(32);
    let (c_tilde, rest) = sig.split_at(32);
    let (z_bytes, hint_bytes) =
        rest.split_at(32 * config.gamma1_bits() * config.l);

    // A malformed hint section sinks the signature before any of the
    // acceptance predicates run.
    let h = match decode_hints(hint_bytes, config.k, config.omega) {
        Some(h) => h,
        None => return false,
    };

    let mut z = unpack_vec(z_bytes, config.gamma1_bits(), config.l);
    z.sub_from(config.gamma1);
    if z.norm_infinity() >= config.gamma1 - config.beta {
        return false;
    }
    if h.count_ones() > config.omega {
        return false;
    }

    let a = expand_a(rho, config.k, config.l);
    let mut t1 = unpack_vec(t1_bytes, config.t1_bits(), config.k);

    let tr = shake256(32, pk);
    let mut mu = [0u8; 64];
    let mut xof = Shake256Xof::new();
    xof.absorb(&tr);
    xof.absorb(msg);
    xof.squeeze(&mut mu);

    let mut c_hat = sample_in_ball(c_tilde, config.tau);
    c_hat.ntt();

    let mut z_hat = z;
    z_hat.ntt_in_place();
    let az = a.mul_vec(&z_hat);

    t1.shl(config.d);
    t1.ntt_in_place();
    let ct1 = t1.pointwise_poly(&c_hat);

    let mut w_approx = az - ct1;
    w_approx.intt_in_place();

    let w1 = use_hint_vec(&h, &w_approx, config.alpha());

    let mut expected = [0u8; 32];
    xof.reset();
    xof.absorb(&mu);
    xof.absorb(&pack_vec(&w1, config.w1_bits()));
    xof.squeeze(&mut expected);

    expected.as_slice() == c_tilde
}
