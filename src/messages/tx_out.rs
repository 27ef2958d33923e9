//! Transaction output.

use crate::script::Script;
use crate::util::{Error, Result, Serializable, var_int};
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io;
use std::io::{Read, Write};

/// Maximum lock script length accepted when reading.
const MAX_LOCK_SCRIPT_LEN: u64 = 10_000;

/// Transaction output.
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone)]
pub struct TxOut {
    /// Number of satoshis to spend.
    pub satoshis: i64,
    /// Public key script to claim the output.
    pub lock_script: Script,
}

impl TxOut {
    /// Returns the size of the transaction output in bytes.
    #[must_use]
    #[inline]
    pub fn size(&self) -> usize {
        8 + var_int::bytes_size(&self.lock_script.0)
    }
}

impl Serializable<TxOut> for TxOut {
    fn read(reader: &mut dyn Read) -> Result<TxOut> {
        let satoshis = reader.read_i64::<LittleEndian>()?;
        let script_len = var_int::read(reader)?;
        if script_len > MAX_LOCK_SCRIPT_LEN {
            return Err(Error::BadData(format!("Lock script too long: {}", script_len)));
        }
        let script_len = usize::try_from(script_len)
            .map_err(|_| Error::BadData(format!("Lock script too long: {}", script_len)))?;
        let mut lock_script = vec![0; script_len];
        reader.read_exact(&mut lock_script)?;
        Ok(TxOut {
            satoshis,
            lock_script: Script(lock_script),
        })
    }

    /// Amount as 8 little-endian bytes, then the length-prefixed lock script.
    fn write(&self, writer: &mut dyn Write) -> io::Result<()> {
        writer.write_i64::<LittleEndian>(self.satoshis)?;
        var_int::write_bytes(&self.lock_script.0, writer)
    }
}
