//! The published test vectors, reproduced byte-for-byte from the reference
//! implementation's own test suite. These are the compliance oracle: any
//! implementation of this cipher must reproduce every one of these
//! ciphertexts exactly.

pub(super) struct Vector {
    pub(super) key: &'static [u8],
    pub(super) nonce: &'static [u8],
    pub(super) ad: &'static [u8],
    pub(super) plaintext: &'static [u8],
    pub(super) ciphertext: &'static [u8],
}

/// Empty plaintext, empty associated data, all-zero key and nonce. Kept
/// separate from [`VECTORS`] because the reference suite also keeps it as
/// its own dedicated test rather than folding it into the vector table.
pub(super) const ZERO: Vector = Vector {
    key: &[0u8; 32],
    nonce: &[0u8; 16],
    ad: &[],
    plaintext: &[],
    ciphertext: &[
        0x2e, 0xe3, 0x7e, 0x01, 0x41, 0x57, 0xfa, 0x6a, 0x24, 0xc8, 0x0f, 0x13, 0x99, 0x6c, 0x77,
        0xbb,
    ],
};

pub(super) const VECTORS: &[Vector] = &[
    // All-zero key, nonce, 32-byte AD, 64-byte plaintext.
    Vector {
        key: &[0u8; 32],
        nonce: &[0u8; 16],
        ad: &[0u8; 32],
        plaintext: &[0u8; 64],
        ciphertext: &[
            0x15, 0x89, 0x2f, 0x85, 0x55, 0xad, 0x2d, 0xb4, 0x74, 0x9b, 0x90, 0x92, 0x65, 0x71,
            0xc4, 0xb8, 0xc2, 0x8b, 0x43, 0x4f, 0x27, 0x77, 0x93, 0xc5, 0x38, 0x33, 0xcb, 0x6e,
            0x41, 0xa8, 0x55, 0x29, 0x17, 0x84, 0xa2, 0xc7, 0xfe, 0x37, 0x4b, 0x34, 0xd8, 0x75,
            0xfd, 0xcb, 0xe8, 0x4f, 0x5b, 0x88, 0xbf, 0x3f, 0x38, 0x6f, 0x22, 0x18, 0xf0, 0x46,
            0xa8, 0x43, 0x18, 0x56, 0x50, 0x26, 0xd7, 0x55, 0xcc, 0x72, 0x8c, 0x8b, 0xae, 0xdd,
            0x36, 0xf1, 0x4c, 0xf8, 0x93, 0x8e, 0x9e, 0x07, 0x19, 0xbf,
        ],
    },
    // All-0x01 key, nonce, AD. 64-byte zero plaintext.
    Vector {
        key: &[0x01u8; 32],
        nonce: &[0x01u8; 16],
        ad: &[0x01u8; 32],
        plaintext: &[0u8; 64],
        ciphertext: &[
            0xf9, 0x31, 0xa8, 0x73, 0x0b, 0x2e, 0x8a, 0x3a, 0xf3, 0x41, 0xc8, 0x3a, 0x29, 0xc3,
            0x05, 0x25, 0x32, 0x5c, 0x17, 0x03, 0x26, 0xc2, 0x9d, 0x91, 0xb2, 0x4d, 0x71, 0x4f,
            0xec, 0xf3, 0x85, 0xfd, 0x88, 0xe6, 0x50, 0xef, 0x2e, 0x2c, 0x02, 0xb3, 0x7b, 0x19,
            0xe7, 0x0b, 0xb9, 0x3f, 0xf8, 0x2a, 0xa9, 0x6d, 0x50, 0xc9, 0xfd, 0xf0, 0x53, 0x43,
            0xf6, 0xe3, 0x6b, 0x66, 0xee, 0x7b, 0xda, 0x69, 0xba, 0xd0, 0xa5, 0x36, 0x16, 0x59,
            0x9b, 0xfd, 0xb5, 0x53, 0x78, 0x8f, 0xda, 0xab, 0xad, 0x78,
        ],
    },
    // Key, nonce, AD all the repeating pattern `01 23 45 67 89 ab cd ef`. 64-byte zero plaintext.
    Vector {
        key: &[
            0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef, 0x01, 0x23, 0x45, 0x67, 0x89, 0xab,
            0xcd, 0xef, 0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef, 0x01, 0x23, 0x45, 0x67,
            0x89, 0xab, 0xcd, 0xef,
        ],
        nonce: &[
            0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef, 0x01, 0x23, 0x45, 0x67, 0x89, 0xab,
            0xcd, 0xef,
        ],
        ad: &[
            0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef, 0x01, 0x23, 0x45, 0x67, 0x89, 0xab,
            0xcd, 0xef, 0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef, 0x01, 0x23, 0x45, 0x67,
            0x89, 0xab, 0xcd, 0xef,
        ],
        plaintext: &[0u8; 64],
        ciphertext: &[
            0x26, 0x5b, 0x7e, 0x31, 0x41, 0x41, 0xfd, 0x14, 0x82, 0x35, 0xa5, 0x30, 0x5b, 0x21,
            0x7a, 0xb2, 0x91, 0xa2, 0xa7, 0xae, 0xff, 0x91, 0xef, 0xd3, 0xac, 0x60, 0x3b, 0x28,
            0xe0, 0x57, 0x61, 0x09, 0x72, 0x34, 0x22, 0xef, 0x3f, 0x55, 0x3b, 0x0b, 0x07, 0xce,
            0x72, 0x63, 0xf6, 0x35, 0x02, 0xa0, 0x05, 0x91, 0xde, 0x64, 0x8f, 0x3e, 0xe3, 0xb0,
            0x54, 0x41, 0xd8, 0x31, 0x3b, 0x13, 0x8b, 0x5a, 0x66, 0x72, 0x53, 0x4a, 0x8b, 0x57,
            0xc2, 0x87, 0xbc, 0xf5, 0x68, 0x23, 0xcd, 0x1c, 0xdb, 0x5a,
        ],
    },
    // Distinct key halves, distinct nonce, 18-byte AD, 64-byte sequential plaintext: the
    // only vector with non-zero plaintext.
    Vector {
        key: &[
            0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11,
            0x11, 0x11, 0x22, 0x22, 0x22, 0x22, 0x22, 0x22, 0x22, 0x22, 0x22, 0x22, 0x22, 0x22,
            0x22, 0x22, 0x22, 0x22,
        ],
        nonce: &[0x44u8; 16],
        ad: &[
            0x80, 0x81, 0x82, 0x83, 0x84, 0x85, 0x86, 0x87, 0x88, 0x89, 0x8a, 0x8b, 0x8c, 0x8d,
            0x8e, 0x8f, 0x90, 0x91,
        ],
        plaintext: &[
            0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d,
            0x0e, 0x0f, 0x10, 0x11, 0x12, 0x13, 0x14, 0x15, 0x16, 0x17, 0x18, 0x19, 0x1a, 0x1b,
            0x1c, 0x1d, 0x1e, 0x1f, 0x20, 0x21, 0x22, 0x23, 0x24, 0x25, 0x26, 0x27, 0x28, 0x29,
            0x2a, 0x2b, 0x2c, 0x2d, 0x2e, 0x2f, 0x30, 0x31, 0x32, 0x33, 0x34, 0x35, 0x36, 0x37,
            0x38, 0x39, 0x3a, 0x3b, 0x3c, 0x3d, 0x3e, 0x3f,
        ],
        ciphertext: &[
            0x34, 0x8b, 0x6f, 0x6e, 0xfa, 0xd8, 0x07, 0xd2, 0x46, 0xeb, 0xf3, 0x45, 0xe7, 0x30,
            0xd8, 0x3e, 0x59, 0x63, 0xbd, 0x6d, 0x29, 0xee, 0xdc, 0x49, 0xa1, 0x35, 0x40, 0x54,
            0x5a, 0xe2, 0x32, 0xa7, 0x03, 0x4e, 0xd4, 0xef, 0x19, 0x8a, 0x1e, 0xb1, 0xf8, 0xb1,
            0x16, 0xa1, 0x76, 0x03, 0x54, 0xb7, 0x72, 0x60, 0xd6, 0xf2, 0xcc, 0xa4, 0x6e, 0xfc,
            0xad, 0xfc, 0x47, 0x65, 0xff, 0xfe, 0x9f, 0x09, 0xa9, 0xf2, 0x06, 0x94, 0x56, 0x55,
            0x9d, 0xe3, 0xe6, 0x9d, 0x23, 0x3e, 0x15, 0x4b, 0xa0, 0x5e,
        ],
    },
];
