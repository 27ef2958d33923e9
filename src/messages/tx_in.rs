//! Transaction input.
use crate::messages::out_point::OutPoint;
use crate::script::Script;
use crate::util::{Error, Result, Serializable, var_int};
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io;
use std::io::{Read, Write};

/// Maximum unlock script length accepted when reading.
const MAX_UNLOCK_SCRIPT_LEN: u64 = 10_000;

/// Transaction input.
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone)]
pub struct TxIn {
    /// The previous output transaction reference.
    pub prev_output: OutPoint,
    /// Unlocking script. Before signing a P2WPKH input it holds the
    /// 22-byte witness program of the output being spent.
    pub unlock_script: Script,
    /// Sequence number, used for relative lock time and replacement.
    pub sequence: u32,
}

impl TxIn {
    /// Returns the size of the transaction input in bytes.
    #[must_use]
    #[inline]
    pub fn size(&self) -> usize {
        OutPoint::SIZE + var_int::bytes_size(&self.unlock_script.0) + 4
    }
}

impl Serializable<TxIn> for TxIn {
    fn read(reader: &mut dyn Read) -> Result<TxIn> {
        let prev_output = OutPoint::read(reader)?;
        let script_len = var_int::read(reader)?;
        if script_len > MAX_UNLOCK_SCRIPT_LEN {
            return Err(Error::BadData(format!("Unlock script too long: {}", script_len)));
        }
        let script_len = usize::try_from(script_len)
            .map_err(|_| Error::BadData(format!("Unlock script too long: {}", script_len)))?;
        let mut unlock_script = vec![0; script_len];
        reader.read_exact(&mut unlock_script)?;
        let sequence = reader.read_u32::<LittleEndian>()?;
        Ok(TxIn {
            prev_output,
            unlock_script: Script(unlock_script),
            sequence,
        })
    }

    fn write(&self, writer: &mut dyn Write) -> io::Result<()> {
        self.prev_output.write(writer)?;
        var_int::write_bytes(&self.unlock_script.0, writer)?;
        writer.write_u32::<LittleEndian>(self.sequence)
    }
}
