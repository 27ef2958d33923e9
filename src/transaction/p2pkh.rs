//! Pay-to-Public-Key-Hash templates and the BIP143 script code derived from them.
//!
//! A P2WPKH input is signed as if it spent the equivalent P2PKH output, so the
//! 20-byte key hash is lifted out of the witness program and re-wrapped.
use crate::script::Script;
use crate::script::op_codes::{OP_0, OP_CHECKSIG, OP_DUP, OP_EQUALVERIFY, OP_HASH160, OP_PUSH};
use crate::util::{Error, Result, var_int};

/// Length of a version 0 key-hash witness program (`OP_0 <push 20> <hash>`).
pub const WITNESS_PROGRAM_LEN: usize = 22;

/// Creates P2PKH lock script (DUP HASH160 [hash] EQUALVERIFY CHECKSIG).
#[must_use]
#[inline]
pub fn create_lock_script(hash160: &[u8; 20]) -> Script {
    let mut script = Script::new();
    script.append(OP_DUP);
    script.append(OP_HASH160);
    script.append(OP_PUSH + 20);
    script.append_slice(hash160);
    script.append(OP_EQUALVERIFY);
    script.append(OP_CHECKSIG);
    script
}

/// Creates the P2WPKH witness program (`OP_0 <push 20> <hash>`).
#[must_use]
#[inline]
pub fn create_witness_program(hash160: &[u8; 20]) -> Script {
    let mut script = Script::new();
    script.append(OP_0);
    script.append(OP_PUSH + 20);
    script.append_slice(hash160);
    script
}

/// Builds the length-prefixed script code committed by the sighash.
///
/// Bytes 2..22 of `placeholder` are taken as the key hash. The placeholder
/// is otherwise unchecked, so any script of at least 22 bytes is accepted.
///
/// # Errors
/// `Error::MalformedPlaceholder` if `placeholder` is shorter than 22 bytes.
pub fn script_code(placeholder: &[u8]) -> Result<Vec<u8>> {
    let hash160: &[u8; 20] = placeholder
        .get(2..WITNESS_PROGRAM_LEN)
        .and_then(|h| h.try_into().ok())
        .ok_or(Error::MalformedPlaceholder(placeholder.len()))?;
    let lock_script = create_lock_script(hash160);
    let mut code = Vec::with_capacity(var_int::bytes_size(&lock_script.0));
    var_int::write_bytes(&lock_script.0, &mut code)?;
    Ok(code)
}
