//! Script opcodes used by the P2PKH and P2WPKH templates.

/// Pushes an empty array; also the witness version 0 marker.
pub const OP_0: u8 = 0;
/// Offset for pushing n bytes (n: 1-75), e.g. `OP_PUSH + 20`.
pub const OP_PUSH: u8 = 0;
/// Duplicates the top stack item.
pub const OP_DUP: u8 = 118;
/// Same as OP_EQUAL, but runs OP_VERIFY afterward.
pub const OP_EQUALVERIFY: u8 = 136;
/// Hashes the top item with SHA256 then RIPEMD160.
pub const OP_HASH160: u8 = 169;
/// Checks a signature against the public key and sighash.
pub const OP_CHECKSIG: u8 = 172;
