use math::prelude::Q;

use crate::error::DilithiumError;

/// Supported Dilithium security levels from table 2 of the round-3
/// specification.
pub const SUPPORTED_SECURITY_LEVELS: [SecurityLevel; 3] = [
    SecurityLevel::Level2,
    SecurityLevel::Level3,
    SecurityLevel::Level5,
];

/// Enumerates the supported Dilithium security levels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum SecurityLevel {
    Level2 = 2,
    Level3 = 3,
    Level5 = 5,
}

impl SecurityLevel {
    /// Return the numeric identifier used by the Dilithium specification.
    #[inline]
    pub const fn as_usize(self) -> usize {
        self as usize
    }

    /// Retrieve the parameter set associated with this security level.
    #[inline]
    pub const fn config(self) -> DilithiumConfig {
        match self {
            SecurityLevel::Level2 => DILITHIUM2,
            SecurityLevel::Level3 => DILITHIUM3,
            SecurityLevel::Level5 => DILITHIUM5,
        }
    }
}

impl TryFrom<usize> for SecurityLevel {
    type Error = DilithiumError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(SecurityLevel::Level2),
            3 => Ok(SecurityLevel::Level3),
            5 => Ok(SecurityLevel::Level5),
            other => Err(DilithiumError::UnsupportedLevel(other)),
        }
    }
}

/// Dilithium parameter collection for one security level.
///
/// All byte lengths and packed bit widths derive from these fields; nothing
/// on the signing path is sized any other way.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DilithiumConfig {
    pub n: usize,
    pub k: usize,
    pub l: usize,
    pub d: u32,
    pub eta: u32,
    pub gamma1: u32,
    pub gamma2: u32,
    pub tau: u32,
    pub beta: u32,
    pub omega: usize,
}

impl DilithiumConfig {
    /// Return the parameter set for a given [`SecurityLevel`].
    #[inline]
    pub const fn for_level(level: SecurityLevel) -> Self {
        level.config()
    }

    /// Decomposition granularity α = 2γ2.
    #[inline]
    pub const fn alpha(&self) -> u32 {
        2 * self.gamma2
    }

    /// Bits per encoded secret coefficient, which lives in [0, 2η].
    #[inline]
    pub const fn eta_bits(&self) -> usize {
        bit_width(2 * self.eta)
    }

    /// Bits per packed z/y coefficient: ⌊log2 γ1⌋ + 1.
    #[inline]
    pub const fn gamma1_bits(&self) -> usize {
        bit_width(self.gamma1)
    }

    /// Bits per packed w1 coefficient.
    #[inline]
    pub const fn w1_bits(&self) -> usize {
        bit_width((Q - 1) / self.alpha() - 1)
    }

    /// Bits per packed t1 coefficient: ⌈log2 q⌉ − d.
    #[inline]
    pub const fn t1_bits(&self) -> usize {
        bit_width(Q) - self.d as usize
    }

    /// ρ ‖ pack(t1).
    pub const fn public_key_len(&self) -> usize {
        32 + 32 * self.t1_bits() * self.k
    }

    /// ρ ‖ K ‖ tr ‖ pack(s1) ‖ pack(s2) ‖ pack(t0).
    pub const fn secret_key_len(&self) -> usize {
        96 + 32 * (self.eta_bits() * (self.k + self.l) + self.k * self.d as usize)
    }

    /// c̃ ‖ pack(z) ‖ hint bytes.
    pub const fn signature_len(&self) -> usize {
        32 + 32 * self.l * self.gamma1_bits() + self.omega + self.k
    }

    /// Check the structural relations every recognised set satisfies.
    pub const fn validate(&self) -> bool {
        self.n == 256
            && self.d == 13
            && self.k > 0
            && self.l > 0
            && self.beta == self.tau * self.eta
            && (self.gamma2 == (Q - 1) / 88 || self.gamma2 == (Q - 1) / 32)
            && self.omega > 0
    }
}

impl Default for DilithiumConfig {
    fn default() -> Self {
        SecurityLevel::Level2.config()
    }
}

#[inline]
const fn bit_width(x: u32) -> usize {
    (u32::BITS - x.leading_zeros()) as usize
}

/// Round-3 Dilithium2 parameter set.
const DILITHIUM2: DilithiumConfig = DilithiumConfig {
    n: 256,
    k: 4,
    l: 4,
    d: 13,
    eta: 2,
    gamma1: 1 << 17,
    gamma2: (Q - 1) / 88,
    tau: 39,
    beta: 78,
    omega: 80,
};

/// Round-3 Dilithium3 parameter set.
const DILITHIUM3: DilithiumConfig = DilithiumConfig {
    n: 256,
    k: 6,
    l: 5,
    d: 13,
    eta: 4,
    gamma1: 1 << 19,
    gamma2: (Q - 1) / 32,
    tau: 49,
    beta: 196,
    omega: 55,
};

/// Round-3 Dilithium5 parameter set.
const DILITHIUM5: DilithiumConfig = DilithiumConfig {
    n: 256,
    k: 8,
    l: 7,
    d: 13,
    eta: 2,
    gamma1: 1 << 19,
    gamma2: (Q - 1) / 32,
    tau: 60,
    beta: 120,
    omega: 75,
};
