//! A lane is one 128-bit value flowing through the [state](super::state)
//! array. This module gathers the handful of operations the cipher performs
//! on a lane: load, store, xor, zero, a single [AES round](aes_round), and a
//! constant-time comparison.
//!
//! [`aes_round`] is the only operation worth specializing per architecture:
//! it dominates the cost of every phase of the cipher, and x86 and ARM both
//! expose a dedicated instruction for it. The other operations are plain byte
//! shuffles that the compiler already turns into the obvious SIMD
//! instructions, so they stay as ordinary array code on every target.

#[cfg(target_arch = "x86_64")]
mod x86;

#[cfg(target_arch = "aarch64")]
mod aarch64;

mod portable;

use subtle::ConstantTimeEq;

/// A single 128-bit value: one of the eight lanes of the cipher state, or one
/// half of a 256-bit message block.
pub(crate) type Lane = [u8; 16];

pub(crate) fn load(src: &[u8]) -> Lane {
    src[..16].try_into().expect("Infallible: caller guarantees at least 16 bytes")
}

pub(crate) fn store(dst: &mut [u8], lane: Lane) {
    dst[..16].copy_from_slice(&lane);
}

pub(crate) fn xor(a: Lane, b: Lane) -> Lane {
    let mut out = [0u8; 16];
    for i in 0..16 {
        out[i] = a[i] ^ b[i];
    }
    out
}

pub(crate) fn zero() -> Lane {
    [0u8; 16]
}

/// One AES round: `MixColumns(ShiftRows(SubBytes(input))) ^ round_key`, bit-exact
/// with the x86 `AESENC` instruction and the ARMv8 `AESE`/`AESMC` pair.
///
/// Dispatches to a hardware implementation when the running CPU advertises
/// AES support, falling back to [`portable::aes_round`] otherwise. The
/// feature check runs once per process and is cached.
pub(crate) fn aes_round(input: Lane, round_key: Lane) -> Lane {
    #[cfg(target_arch = "x86_64")]
    {
        if x86::available() {
            // Safety: `available()` only returns true when the CPU has
            // reported support for the `aes` and `sse2` features that
            // `aes_round` is gated on.
            return unsafe { x86::aes_round(input, round_key) };
        }
    }
    #[cfg(target_arch = "aarch64")]
    {
        if aarch64::available() {
            // Safety: `available()` only returns true when the CPU has
            // reported support for the `aes` feature that `aes_round` is
            // gated on.
            return unsafe { aarch64::aes_round(input, round_key) };
        }
    }
    portable::aes_round(input, round_key)
}

/// Constant-time equality check on two lanes, used to compare the computed
/// tag against the one supplied by the caller without leaking the position
/// of the first differing byte through timing.
pub(crate) fn ct_eq(a: Lane, b: Lane) -> bool {
    a[..].ct_eq(&b[..]).into()
}
