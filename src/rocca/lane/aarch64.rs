//! ARMv8 Cryptography Extension backed [`aes_round`](super::aes_round),
//! mirroring the original `vaeseq_u8`/`vaesmcq_u8` based backend.
//!
//! Unlike x86's single-instruction `AESENC`, ARMv8 splits the round into
//! `AESE` (XOR-with-zero, then SubBytes, then ShiftRows) and `AESMC`
//! (MixColumns); the round key is XORed in separately afterwards so that the
//! result matches `AESENC` exactly.

use {
    super::Lane,
    std::{
        arch::aarch64::{vaeseq_u8, vaesmcq_u8, vdupq_n_u8, veorq_u8, vld1q_u8, vst1q_u8},
        sync::OnceLock,
    },
};

pub(super) fn available() -> bool {
    static AVAILABLE: OnceLock<bool> = OnceLock::new();
    *AVAILABLE.get_or_init(|| std::arch::is_aarch64_feature_detected!("aes"))
}

/// # Safety
///
/// The caller must ensure the CPU supports the `aes` target feature, e.g. by
/// only calling this after [`available`] returns `true`.
#[target_feature(enable = "aes")]
pub(super) unsafe fn aes_round(input: Lane, round_key: Lane) -> Lane {
    let input = vld1q_u8(input.as_ptr());
    let round_key = vld1q_u8(round_key.as_ptr());
    let x = vaeseq_u8(vdupq_n_u8(0), input);
    let x = vaesmcq_u8(x);
    let x = veorq_u8(x, round_key);
    let mut dst = [0u8; 16];
    vst1q_u8(dst.as_mut_ptr(), x);
    dst
}
