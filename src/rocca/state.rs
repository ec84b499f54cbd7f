//! The eight-lane internal state and the round function built around
//! [`lane::aes_round`].

use {
    super::lane::{self, Lane},
    zeroize::{Zeroize, ZeroizeOnDrop},
};

/// Z0: a constant block defined as `Z0 = 428a2f98d728ae227137449123ef65cd`.
const Z0: Lane = [
    0xcd, 0x65, 0xef, 0x23, 0x91, 0x44, 0x37, 0x71, 0x22, 0xae, 0x28, 0xd7, 0x98, 0x2f, 0x8a, 0x42,
];

/// Z1: a constant block defined as `Z1 = b5c0fbcfec4d3b2fe9b5dba58189dbbc`.
const Z1: Lane = [
    0xbc, 0xdb, 0x89, 0x81, 0xa5, 0xdb, 0xb5, 0xe9, 0x2f, 0x3b, 0x4d, 0xec, 0xcf, 0xfb, 0xc0, 0xb5,
];

/// Number of state-update rounds performed during initialization and
/// finalization.
const ROUNDS: usize = 20;

/// The 256-bit block this cipher absorbs and produces one unit at a time.
const BLOCK_SIZE: usize = 32;

/// The eight 128-bit lanes `S[0..7]` mutated by every round. Zeroized on
/// drop so a state that held key material never lingers on the stack past
/// the end of the call that created it.
#[derive(Zeroize, ZeroizeOnDrop)]
pub(super) struct State([Lane; 8]);

impl State {
    /// Loads `(K0, K1, N)` into the state and applies `R(S, Z0, Z1)` twenty
    /// times, per the initialization schedule.
    pub(super) fn new(key: &[u8], nonce: &[u8]) -> Self {
        debug_assert_eq!(key.len(), super::KEY_SIZE);
        debug_assert_eq!(nonce.len(), super::NONCE_SIZE);

        let k0 = lane::load(&key[0..16]);
        let k1 = lane::load(&key[16..32]);
        let n = lane::load(nonce);

        let mut s = State([
            k1,
            n,
            Z0,
            Z1,
            lane::xor(n, k1),
            lane::zero(),
            k0,
            lane::zero(),
        ]);
        for _ in 0..ROUNDS {
            s.update(Z0, Z1);
        }
        s
    }

    /// The round function `R(S, X0, X1)`: every new lane is derived from the
    /// *old* state, so all eight reads happen before any write.
    fn update(&mut self, x0: Lane, x1: Lane) {
        let s = &self.0;
        let t0 = lane::xor(s[7], x0);
        let t1 = lane::aes_round(s[0], s[7]);
        let t2 = lane::xor(s[1], s[6]);
        let t3 = lane::aes_round(s[2], s[1]);
        let t4 = lane::xor(s[3], x1);
        let t5 = lane::aes_round(s[4], s[3]);
        let t6 = lane::aes_round(s[5], s[4]);
        let t7 = lane::xor(s[0], s[6]);
        self.0 = [t0, t1, t2, t3, t4, t5, t6, t7];
    }

    /// Absorbs every full 32-byte block of `data`, then a zero-padded
    /// partial block if `data`'s length isn't a multiple of 32. Used for
    /// both associated-data absorption and is reused nowhere else: the
    /// message itself is absorbed as a side effect of [`encrypt_block`] and
    /// [`decrypt_block`].
    pub(super) fn absorb(&mut self, data: &[u8]) {
        let mut chunks = data.chunks_exact(BLOCK_SIZE);
        for block in &mut chunks {
            self.update(lane::load(&block[0..16]), lane::load(&block[16..32]));
        }
        let remainder = chunks.remainder();
        if !remainder.is_empty() {
            let mut padded = [0u8; BLOCK_SIZE];
            padded[..remainder.len()].copy_from_slice(remainder);
            self.update(lane::load(&padded[0..16]), lane::load(&padded[16..32]));
            padded.zeroize();
        }
    }

    /// `Ci0 = AES(S1, S5) ^ Mi0`, `Ci1 = AES(S0 ^ S4, S2) ^ Mi1`, then
    /// `R(S, Mi0, Mi1)`. Operates on exactly one 32-byte block.
    fn encrypt_full_block(&mut self, dst: &mut [u8], src: &[u8]) {
        let m0 = lane::load(&src[0..16]);
        let m1 = lane::load(&src[16..32]);

        let c0 = lane::xor(lane::aes_round(self.0[1], self.0[5]), m0);
        let c1 = lane::xor(
            lane::aes_round(lane::xor(self.0[0], self.0[4]), self.0[2]),
            m1,
        );

        lane::store(&mut dst[0..16], c0);
        lane::store(&mut dst[16..32], c1);

        self.update(m0, m1);
    }

    /// Symmetric counterpart of [`encrypt_full_block`](Self::encrypt_full_block):
    /// the keystream formula is identical, only the role of source and
    /// destination is swapped.
    fn decrypt_full_block(&mut self, dst: &mut [u8], src: &[u8]) {
        let c0 = lane::load(&src[0..16]);
        let c1 = lane::load(&src[16..32]);

        let m0 = lane::xor(lane::aes_round(self.0[1], self.0[5]), c0);
        let m1 = lane::xor(
            lane::aes_round(lane::xor(self.0[0], self.0[4]), self.0[2]),
            c1,
        );

        lane::store(&mut dst[0..16], m0);
        lane::store(&mut dst[16..32], m1);

        self.update(m0, m1);
    }

    /// Encrypts `plaintext` into `dst` (both must be the same length),
    /// handling a trailing partial block by padding it with zeroes before
    /// running it through the same block formula and truncating the output.
    pub(super) fn encrypt(&mut self, dst: &mut [u8], plaintext: &[u8]) {
        let mut chunks = plaintext.chunks_exact(BLOCK_SIZE);
        let mut dst_chunks = dst.chunks_exact_mut(BLOCK_SIZE);
        for (src, dst) in (&mut chunks).zip(&mut dst_chunks) {
            self.encrypt_full_block(dst, src);
        }
        let remainder = chunks.remainder();
        if !remainder.is_empty() {
            let mut padded = [0u8; BLOCK_SIZE];
            padded[..remainder.len()].copy_from_slice(remainder);
            let mut out = [0u8; BLOCK_SIZE];
            self.encrypt_full_block(&mut out, &padded);
            dst[dst.len() - remainder.len()..].copy_from_slice(&out[..remainder.len()]);
            padded.zeroize();
            out.zeroize();
        }
    }

    /// Decrypts `ciphertext` into `dst`. A trailing partial block is the
    /// subtle case: the state must be updated with the *zero-padded*
    /// recovered plaintext, not the raw decrypted scratch bytes, so this
    /// mirrors the reference implementation's two-step
    /// decrypt-then-re-derive-then-absorb sequence exactly rather than
    /// reusing [`decrypt_full_block`](Self::decrypt_full_block) directly.
    pub(super) fn decrypt(&mut self, dst: &mut [u8], ciphertext: &[u8]) {
        let mut chunks = ciphertext.chunks_exact(BLOCK_SIZE);
        let mut dst_chunks = dst.chunks_exact_mut(BLOCK_SIZE);
        for (src, dst) in (&mut chunks).zip(&mut dst_chunks) {
            self.decrypt_full_block(dst, src);
        }
        let remainder = chunks.remainder();
        if !remainder.is_empty() {
            let mut padded = [0u8; BLOCK_SIZE];
            padded[..remainder.len()].copy_from_slice(remainder);

            let c0 = lane::load(&padded[0..16]);
            let c1 = lane::load(&padded[16..32]);
            let m0 = lane::xor(lane::aes_round(self.0[1], self.0[5]), c0);
            let m1 = lane::xor(
                lane::aes_round(lane::xor(self.0[0], self.0[4]), self.0[2]),
                c1,
            );

            let mut out = [0u8; BLOCK_SIZE];
            lane::store(&mut out[0..16], m0);
            lane::store(&mut out[16..32], m1);
            out[remainder.len()..].fill(0);
            dst[dst.len() - remainder.len()..].copy_from_slice(&out[..remainder.len()]);

            let p0 = lane::load(&out[0..16]);
            let p1 = lane::load(&out[16..32]);
            self.update(p0, p1);

            padded.zeroize();
            out.zeroize();
        }
    }

    /// `for i in 0..20 { R(S, |AD| * 8, |M| * 8) }`, then folds all eight
    /// lanes together with XOR to produce the 128-bit tag.
    pub(super) fn finalize(&mut self, ad_len: u64, msg_len: u64) -> Lane {
        let mut ad_bits = [0u8; 16];
        ad_bits[..8].copy_from_slice(&(ad_len * 8).to_le_bytes());
        let mut msg_bits = [0u8; 16];
        msg_bits[..8].copy_from_slice(&(msg_len * 8).to_le_bytes());

        for _ in 0..ROUNDS {
            self.update(ad_bits, msg_bits);
        }

        let mut tag = self.0[0];
        for l in &self.0[1..] {
            tag = lane::xor(tag, *l);
        }
        tag
    }
}
