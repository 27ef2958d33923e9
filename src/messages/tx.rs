//! Transaction in the legacy (non-witness) wire format.

use crate::messages::{TxIn, TxOut};
use crate::script::Script;
use crate::util::{Error, Hash256, Result, Serializable, sha256d, var_int};
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::fmt;
use std::io;
use std::io::{Cursor, Read, Write};

/// Maximum number of inputs/outputs accepted when reading.
const MAX_INPUTS: u64 = 100_000;
const MAX_OUTPUTS: u64 = 100_000;

/// Bitcoin transaction.
#[derive(Default, PartialEq, Eq, Hash, Clone)]
pub struct Tx {
    /// Transaction version.
    pub version: u32,
    /// Transaction inputs.
    pub inputs: Vec<TxIn>,
    /// Transaction outputs.
    pub outputs: Vec<TxOut>,
    /// The block number or timestamp at which this transaction is unlocked.
    pub lock_time: u32,
}

impl Tx {
    /// Parses a hex-encoded transaction. Surrounding whitespace is ignored
    /// and every byte must be consumed.
    pub fn from_hex(s: &str) -> Result<Tx> {
        let bytes = hex::decode(s.trim())?;
        let mut cursor = Cursor::new(bytes.as_slice());
        let tx = Tx::read(&mut cursor)?;
        let consumed = cursor.position() as usize;
        if consumed != bytes.len() {
            return Err(Error::BadData(format!(
                "{} trailing bytes after transaction",
                bytes.len() - consumed
            )));
        }
        Ok(tx)
    }

    /// Calculates the hash of the transaction (txid).
    pub fn hash(&self) -> Result<Hash256> {
        let mut b = Vec::with_capacity(self.size());
        self.write(&mut b)?;
        Ok(sha256d(&b))
    }

    /// Returns the serialized size in bytes.
    #[must_use]
    pub fn size(&self) -> usize {
        8 + var_int::size(self.inputs.len() as u64)
            + self.inputs.iter().map(TxIn::size).sum::<usize>()
            + var_int::size(self.outputs.len() as u64)
            + self.outputs.iter().map(TxOut::size).sum::<usize>()
    }

    /// Replaces each input's unlock script with the lock script of the
    /// output it spends, one script per input in order.
    ///
    /// This is the form the sighash expects before signing P2WPKH inputs.
    ///
    /// # Errors
    /// `Error::BadArgument` if the number of scripts differs from the number of inputs.
    pub fn set_spent_scripts(&mut self, scripts: Vec<Script>) -> Result<()> {
        if scripts.len() != self.inputs.len() {
            return Err(Error::BadArgument(format!(
                "{} spent scripts for {} inputs",
                scripts.len(),
                self.inputs.len()
            )));
        }
        for (input, script) in self.inputs.iter_mut().zip(scripts) {
            input.unlock_script = script;
        }
        Ok(())
    }
}

impl Serializable<Tx> for Tx {
    fn read(reader: &mut dyn Read) -> Result<Tx> {
        let version = reader.read_u32::<LittleEndian>()?;
        let n_inputs = var_int::read(reader)?;
        if n_inputs == 0 {
            // Zero inputs is the segwit marker byte
            return Err(Error::Unsupported("witness serialization".to_string()));
        }
        if n_inputs > MAX_INPUTS {
            return Err(Error::BadData(format!("Too many inputs: {}", n_inputs)));
        }
        let mut inputs = Vec::with_capacity(n_inputs as usize);
        for _ in 0..n_inputs {
            inputs.push(TxIn::read(reader)?);
        }
        let n_outputs = var_int::read(reader)?;
        if n_outputs > MAX_OUTPUTS {
            return Err(Error::BadData(format!("Too many outputs: {}", n_outputs)));
        }
        let mut outputs = Vec::with_capacity(n_outputs as usize);
        for _ in 0..n_outputs {
            outputs.push(TxOut::read(reader)?);
        }
        let lock_time = reader.read_u32::<LittleEndian>()?;
        Ok(Tx {
            version,
            inputs,
            outputs,
            lock_time,
        })
    }

    fn write(&self, writer: &mut dyn Write) -> io::Result<()> {
        writer.write_u32::<LittleEndian>(self.version)?;
        var_int::write(self.inputs.len() as u64, writer)?;
        for tx_in in &self.inputs {
            tx_in.write(writer)?;
        }
        var_int::write(self.outputs.len() as u64, writer)?;
        for tx_out in &self.outputs {
            tx_out.write(writer)?;
        }
        writer.write_u32::<LittleEndian>(self.lock_time)
    }
}

impl fmt::Debug for Tx {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let inputs_str = format!("[<{} inputs>]", self.inputs.len());
        let outputs_str = format!("[<{} outputs>]", self.outputs.len());
        f.debug_struct("Tx")
            .field("version", &self.version)
            .field("inputs", if self.inputs.len() <= 3 { &self.inputs } else { &inputs_str })
            .field("outputs", if self.outputs.len() <= 3 { &self.outputs } else { &outputs_str })
            .field("lock_time", &self.lock_time)
            .finish()
    }
}
