//! BIP143 signature hash for version 0 witness key-hash inputs.
//!
//! The digest commits to: version | hash_prevouts | hash_sequence | outpoint |
//! script code | amount | sequence | hash_outputs | lock time | sighash type.
//! Each sub-hash is either computed or replaced by 32 zero bytes depending on
//! the sighash type. Every call builds its own buffers; nothing is cached.
use crate::messages::{Tx, TxIn, TxOut};
use crate::transaction::p2pkh;
use crate::util::{Error, Hash256, Result, Serializable, sha256d};
use byteorder::{LittleEndian, WriteBytesExt};
use std::fmt;
use std::str::FromStr;

/// Base type 0, treated as ALL.
pub const SIGHASH_DEFAULT: u8 = 0x00;
/// Signs all outputs.
pub const SIGHASH_ALL: u8 = 0x01;
/// Signs no outputs.
pub const SIGHASH_NONE: u8 = 0x02;
/// Signs only the output at the same index as the input.
pub const SIGHASH_SINGLE: u8 = 0x03;
/// Signs only this input; others may be added.
pub const SIGHASH_ANYONECANPAY: u8 = 0x80;

/// Base part of a sighash type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseType {
    /// Implicit ALL (0x00).
    Default,
    /// SIGHASH_ALL (0x01).
    All,
    /// SIGHASH_NONE (0x02).
    None,
    /// SIGHASH_SINGLE (0x03).
    Single,
}

impl BaseType {
    fn to_u8(self) -> u8 {
        match self {
            BaseType::Default => SIGHASH_DEFAULT,
            BaseType::All => SIGHASH_ALL,
            BaseType::None => SIGHASH_NONE,
            BaseType::Single => SIGHASH_SINGLE,
        }
    }
}

/// Sighash type byte: a base type optionally combined with ANYONECANPAY.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SighashType(u8);

impl SighashType {
    /// SIGHASH_ALL
    pub const ALL: SighashType = SighashType(SIGHASH_ALL);
    /// SIGHASH_NONE
    pub const NONE: SighashType = SighashType(SIGHASH_NONE);
    /// SIGHASH_SINGLE
    pub const SINGLE: SighashType = SighashType(SIGHASH_SINGLE);
    /// Implicit ALL
    pub const DEFAULT: SighashType = SighashType(SIGHASH_DEFAULT);

    /// Combines a base type with the ANYONECANPAY modifier.
    #[must_use]
    pub fn new(base: BaseType, anyone_can_pay: bool) -> SighashType {
        let modifier = if anyone_can_pay { SIGHASH_ANYONECANPAY } else { 0 };
        SighashType(base.to_u8() | modifier)
    }

    /// Parses a raw sighash byte.
    ///
    /// # Errors
    /// `Error::Unsupported` for anything other than a base type 0-3 with an
    /// optional ANYONECANPAY bit.
    pub fn from_u8(byte: u8) -> Result<SighashType> {
        if byte & !SIGHASH_ANYONECANPAY > SIGHASH_SINGLE {
            return Err(Error::Unsupported(format!("sighash type 0x{:02x}", byte)));
        }
        Ok(SighashType(byte))
    }

    /// Returns the same base type with ANYONECANPAY set.
    #[must_use]
    pub fn with_anyone_can_pay(self) -> SighashType {
        SighashType(self.0 | SIGHASH_ANYONECANPAY)
    }

    /// The base type, without the modifier.
    #[must_use]
    pub fn base(self) -> BaseType {
        match self.0 & !SIGHASH_ANYONECANPAY {
            SIGHASH_ALL => BaseType::All,
            SIGHASH_NONE => BaseType::None,
            SIGHASH_SINGLE => BaseType::Single,
            _ => BaseType::Default,
        }
    }

    /// Whether the ANYONECANPAY bit is set.
    #[must_use]
    pub fn anyone_can_pay(self) -> bool {
        self.0 & SIGHASH_ANYONECANPAY != 0
    }

    /// The raw byte.
    #[must_use]
    pub fn to_u8(self) -> u8 {
        self.0
    }

    /// The byte widened to the 4 bytes committed at the end of the preimage.
    #[must_use]
    pub fn to_u32(self) -> u32 {
        u32::from(self.0)
    }
}

impl TryFrom<u8> for SighashType {
    type Error = Error;

    fn try_from(byte: u8) -> Result<SighashType> {
        SighashType::from_u8(byte)
    }
}

impl FromStr for SighashType {
    type Err = Error;

    /// Accepts `ALL`, `NONE`, `SINGLE` or `DEFAULT`, optionally followed by
    /// `|ANYONECANPAY`. Case-insensitive.
    fn from_str(s: &str) -> Result<SighashType> {
        let upper = s.trim().to_ascii_uppercase();
        let (base, anyone_can_pay) = match upper.split_once('|') {
            Some((base, "ANYONECANPAY")) => (base, true),
            Some(_) => return Err(Error::BadArgument(format!("sighash type {}", s))),
            None => (upper.as_str(), false),
        };
        let base = match base {
            "ALL" => BaseType::All,
            "NONE" => BaseType::None,
            "SINGLE" => BaseType::Single,
            "DEFAULT" => BaseType::Default,
            _ => return Err(Error::BadArgument(format!("sighash type {}", s))),
        };
        Ok(SighashType::new(base, anyone_can_pay))
    }
}

impl fmt::Debug for SighashType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let base = match self.base() {
            BaseType::Default => "DEFAULT",
            BaseType::All => "ALL",
            BaseType::None => "NONE",
            BaseType::Single => "SINGLE",
        };
        if self.anyone_can_pay() {
            write!(f, "{}|ANYONECANPAY", base)
        } else {
            write!(f, "{}", base)
        }
    }
}

/// How SIGHASH_SINGLE decides whether the matching output exists.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SingleOutputRule {
    /// Zero when `index >= outputs`, otherwise hash `outputs[index]`.
    #[default]
    Bip143,
    /// Zero when `index <= outputs`. Any larger index names an output that
    /// does not exist and is an error. Matches signers that compared the
    /// index against the output count with `<=`.
    Literal,
}

/// The three aggregate hashes of the preimage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubHash {
    /// Outpoints of all inputs.
    PrevOuts,
    /// Sequence numbers of all inputs.
    Sequence,
    /// All outputs, or the single matching one.
    Outputs,
}

/// Whether `sighash_type` commits to `sub_hash` at all. When false the
/// preimage carries 32 zero bytes instead.
///
/// For [`SubHash::Outputs`] with SINGLE this only says the outputs are
/// covered. Whether the matching output exists is decided by [`hash_outputs`].
#[must_use]
pub fn commits(sighash_type: SighashType, sub_hash: SubHash) -> bool {
    let base = sighash_type.base();
    match sub_hash {
        SubHash::PrevOuts => !sighash_type.anyone_can_pay(),
        SubHash::Sequence => {
            !sighash_type.anyone_can_pay() && matches!(base, BaseType::All | BaseType::Default)
        }
        SubHash::Outputs => base != BaseType::None,
    }
}

/// Double hash of every input's outpoint, in order.
pub fn hash_prevouts(inputs: &[TxIn], sighash_type: SighashType) -> Result<Hash256> {
    if !commits(sighash_type, SubHash::PrevOuts) {
        return Ok(Hash256::ZERO);
    }
    let mut prevouts = Vec::with_capacity(36 * inputs.len());
    for input in inputs {
        input.prev_output.write(&mut prevouts)?;
    }
    log::trace!("hash_prevouts preimage: {}", hex::encode(&prevouts));
    Ok(sha256d(&prevouts))
}

/// Double hash of every input's little-endian sequence number, in order.
pub fn hash_sequence(inputs: &[TxIn], sighash_type: SighashType) -> Result<Hash256> {
    if !commits(sighash_type, SubHash::Sequence) {
        return Ok(Hash256::ZERO);
    }
    let mut sequences = Vec::with_capacity(4 * inputs.len());
    for input in inputs {
        sequences.write_u32::<LittleEndian>(input.sequence)?;
    }
    log::trace!("hash_sequence preimage: {}", hex::encode(&sequences));
    Ok(sha256d(&sequences))
}

/// Double hash of the serialized outputs.
///
/// # Errors
/// `Error::OutputIndexOutOfRange` when the literal SINGLE rule selects an
/// output past the end.
pub fn hash_outputs(
    outputs: &[TxOut],
    n_input: usize,
    sighash_type: SighashType,
    rule: SingleOutputRule,
) -> Result<Hash256> {
    if !commits(sighash_type, SubHash::Outputs) {
        return Ok(Hash256::ZERO);
    }
    if sighash_type.base() == BaseType::Single {
        let single = match rule {
            SingleOutputRule::Bip143 => outputs.get(n_input),
            SingleOutputRule::Literal if n_input <= outputs.len() => None,
            SingleOutputRule::Literal => {
                return Err(Error::OutputIndexOutOfRange {
                    index: n_input,
                    outputs: outputs.len(),
                });
            }
        };
        return match single {
            Some(out) => {
                let mut single_out = Vec::with_capacity(out.size());
                out.write(&mut single_out)?;
                log::trace!("hash_outputs preimage: {}", hex::encode(&single_out));
                Ok(sha256d(&single_out))
            }
            None => Ok(Hash256::ZERO),
        };
    }
    let outputs_size = outputs.iter().map(TxOut::size).sum::<usize>();
    let mut serialized = Vec::with_capacity(outputs_size);
    for out in outputs {
        out.write(&mut serialized)?;
    }
    log::trace!("hash_outputs preimage: {}", hex::encode(&serialized));
    Ok(sha256d(&serialized))
}

/// Assembles the BIP143 preimage for input `n_input` spending `satoshis`.
///
/// The input's unlock script must hold the 22-byte witness program of the
/// output being spent; the key hash for the script code is read from it.
///
/// # Errors
/// `Error::InputIndexOutOfRange` if `n_input` is not an input of `tx`,
/// `Error::MalformedPlaceholder` if its unlock script is under 22 bytes, and
/// `Error::OutputIndexOutOfRange` from [`hash_outputs`].
pub fn sighash_preimage(
    tx: &Tx,
    sighash_type: SighashType,
    n_input: usize,
    satoshis: i64,
    rule: SingleOutputRule,
) -> Result<Vec<u8>> {
    let input = tx.inputs.get(n_input).ok_or(Error::InputIndexOutOfRange {
        index: n_input,
        inputs: tx.inputs.len(),
    })?;
    let hash_prevouts = hash_prevouts(&tx.inputs, sighash_type)?;
    let hash_sequence = hash_sequence(&tx.inputs, sighash_type)?;
    let hash_outputs = hash_outputs(&tx.outputs, n_input, sighash_type, rule)?;
    let script_code = p2pkh::script_code(&input.unlock_script.0)?;

    let mut s = Vec::with_capacity(156 + script_code.len());
    // 1. nVersion
    s.write_u32::<LittleEndian>(tx.version)?;
    // 2. hashPrevouts
    s.extend_from_slice(&hash_prevouts.0);
    // 3. hashSequence
    s.extend_from_slice(&hash_sequence.0);
    // 4. outpoint
    input.prev_output.write(&mut s)?;
    // 5. scriptCode
    s.extend_from_slice(&script_code);
    // 6. value
    s.write_i64::<LittleEndian>(satoshis)?;
    // 7. nSequence
    s.write_u32::<LittleEndian>(input.sequence)?;
    // 8. hashOutputs
    s.extend_from_slice(&hash_outputs.0);
    // 9. nLockTime
    s.write_u32::<LittleEndian>(tx.lock_time)?;
    // 10. sighash type, 4 bytes
    s.write_u32::<LittleEndian>(sighash_type.to_u32())?;
    log::trace!("sighash preimage: {}", hex::encode(&s));
    Ok(s)
}

/// Computes the BIP143 sighash with the standard SINGLE rule.
///
/// # Examples
/// ```
/// use sighash143::messages::{OutPoint, Tx, TxIn, TxOut};
/// use sighash143::transaction::p2pkh::create_witness_program;
/// use sighash143::transaction::sighash::{compute_sighash, SighashType};
///
/// let tx = Tx {
///     version: 1,
///     inputs: vec![TxIn {
///         prev_output: OutPoint::default(),
///         unlock_script: create_witness_program(&[7; 20]),
///         sequence: 0xffffffff,
///     }],
///     outputs: vec![TxOut::default()],
///     lock_time: 0,
/// };
/// let digest = compute_sighash(&tx, SighashType::ALL, 0, 1000).unwrap();
/// assert_eq!(digest.0.len(), 32);
/// ```
pub fn compute_sighash(
    tx: &Tx,
    sighash_type: SighashType,
    n_input: usize,
    satoshis: i64,
) -> Result<Hash256> {
    compute_sighash_with_rule(tx, sighash_type, n_input, satoshis, SingleOutputRule::default())
}

/// Computes the BIP143 sighash, choosing how SIGHASH_SINGLE treats the output index.
pub fn compute_sighash_with_rule(
    tx: &Tx,
    sighash_type: SighashType,
    n_input: usize,
    satoshis: i64,
    rule: SingleOutputRule,
) -> Result<Hash256> {
    let preimage = sighash_preimage(tx, sighash_type, n_input, satoshis, rule)?;
    let digest = sha256d(&preimage);
    log::debug!(
        "sighash input={} type={:?} rule={:?}: {}",
        n_input,
        sighash_type,
        rule,
        digest.to_hex()
    );
    Ok(digest)
}
