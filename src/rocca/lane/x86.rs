//! AES-NI backed [`aes_round`](super::aes_round), mirroring the original
//! `_mm_aesenc_si128` based backend.

use {
    super::Lane,
    std::{
        arch::x86_64::{__m128i, _mm_aesenc_si128, _mm_loadu_si128, _mm_storeu_si128},
        sync::OnceLock,
    },
};

/// Whether the running CPU supports the instructions `aes_round` uses.
/// Checked once per process; `is_x86_feature_detected!` re-reads CPUID on
/// every call, which is wasted work for a function called once per cipher
/// block.
pub(super) fn available() -> bool {
    static AVAILABLE: OnceLock<bool> = OnceLock::new();
    *AVAILABLE.get_or_init(|| is_x86_feature_detected!("aes") && is_x86_feature_detected!("sse2"))
}

/// # Safety
///
/// The caller must ensure the CPU supports the `aes` and `sse2` target
/// features, e.g. by only calling this after [`available`] returns `true`.
#[target_feature(enable = "aes,sse2")]
pub(super) unsafe fn aes_round(input: Lane, round_key: Lane) -> Lane {
    let input = _mm_loadu_si128(input.as_ptr().cast::<__m128i>());
    let round_key = _mm_loadu_si128(round_key.as_ptr().cast::<__m128i>());
    let out = _mm_aesenc_si128(input, round_key);
    let mut dst = [0u8; 16];
    _mm_storeu_si128(dst.as_mut_ptr().cast::<__m128i>(), out);
    dst
}
