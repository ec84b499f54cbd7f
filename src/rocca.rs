//! Rocca is an authenticated cipher: [`seal`] encrypts a plaintext and
//! authenticates it together with associated data that is carried in the
//! clear, and [`open`] reverses the process, refusing to release any
//! plaintext unless the ciphertext and associated data are unmodified.
//!
//! The construction updates an eight-lane 128-bit state with a round
//! function built on a single AES round ([`lane::aes_round`]); see
//! [`state::State`] for the round function itself and [`lane`] for the
//! underlying word operations and their hardware/portable dispatch.

mod lane;
mod state;


use {state::State, std::fmt, zeroize::Zeroize};

/// Size in bytes of a Rocca key.
pub const KEY_SIZE: usize = 32;
/// Size in bytes of a Rocca nonce.
pub const NONCE_SIZE: usize = 16;
/// Size in bytes of the authentication tag [`seal`] appends to its output.
pub const TAG_SIZE: usize = 16;
/// Size difference in bytes between a plaintext and its ciphertext; an alias
/// for [`TAG_SIZE`] kept distinct because the two constants answer different
/// questions (the size of the tag vs. how much bigger the ciphertext is).
pub const OVERHEAD: usize = TAG_SIZE;

/// Returned by [`seal`] on an invalid argument, and by [`open`] on an
/// invalid argument or a failed authentication check.
///
/// The two failure classes are deliberately indistinguishable: a caller that
/// could tell "your key was the wrong length" apart from "the tag didn't
/// match" would have an oracle to probe the authentication check with
/// malformed ciphertexts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Error;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("rocca: invalid arguments or failed authentication")
    }
}

impl std::error::Error for Error {}

/// Encrypts and authenticates `plaintext`, authenticates `ad` without
/// encrypting it, and writes `plaintext.len() + OVERHEAD` bytes to `dst`.
///
/// `dst` must be at least `plaintext.len() + OVERHEAD` bytes long. `key`
/// must be exactly [`KEY_SIZE`] bytes and `nonce` exactly [`NONCE_SIZE`]
/// bytes.
///
/// `(key, nonce)` must never repeat across calls; this function has no way
/// to detect or prevent reuse and the security of every message sealed under
/// a repeated pair is lost.
///
/// On any error, every byte of `dst` is overwritten with zero before
/// returning, so a caller can't accidentally read a partially produced
/// ciphertext.
pub fn seal(dst: &mut [u8], key: &[u8], nonce: &[u8], plaintext: &[u8], ad: &[u8]) -> Result<(), Error> {
    let ct_len = match plaintext.len().checked_add(OVERHEAD) {
        Some(n) => n,
        None => {
            dst.zeroize();
            return Err(Error);
        }
    };
    if key.len() != KEY_SIZE || nonce.len() != NONCE_SIZE || dst.len() < ct_len {
        dst.zeroize();
        return Err(Error);
    }

    let mut state = State::new(key, nonce);
    state.absorb(ad);
    state.encrypt(&mut dst[..plaintext.len()], plaintext);
    let tag = state.finalize(ad.len() as u64, plaintext.len() as u64);
    dst[plaintext.len()..ct_len].copy_from_slice(&tag);

    Ok(())
}

/// Verifies and decrypts `ciphertext` (which must include its trailing
/// [`TAG_SIZE`]-byte tag), authenticating `ad` in the process, and writes
/// `ciphertext.len() - OVERHEAD` bytes of recovered plaintext to `dst`.
///
/// `dst` must be at least `ciphertext.len() - OVERHEAD` bytes long.
/// `ciphertext` must be at least [`OVERHEAD`] bytes long. `key` and `nonce`
/// have the same length requirements as in [`seal`].
///
/// On any error — malformed arguments or a tag mismatch — every byte of
/// `dst` is overwritten with zero before returning.
pub fn open(dst: &mut [u8], key: &[u8], nonce: &[u8], ciphertext: &[u8], ad: &[u8]) -> Result<(), Error> {
    if ciphertext.len() < OVERHEAD || key.len() != KEY_SIZE || nonce.len() != NONCE_SIZE {
        dst.zeroize();
        return Err(Error);
    }
    let pt_len = ciphertext.len() - OVERHEAD;
    if dst.len() < pt_len {
        dst.zeroize();
        return Err(Error);
    }

    let tag: [u8; TAG_SIZE] = ciphertext[pt_len..]
        .try_into()
        .expect("Infallible: ciphertext.len() - pt_len == OVERHEAD == TAG_SIZE");

    let mut state = State::new(key, nonce);
    state.absorb(ad);
    state.decrypt(&mut dst[..pt_len], &ciphertext[..pt_len]);
    let expected = state.finalize(ad.len() as u64, pt_len as u64);

    if !lane::ct_eq(tag, expected) {
        dst.zeroize();
        return Err(Error);
    }
    Ok(())
}
