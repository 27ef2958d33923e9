//! 32-byte double-SHA256 digest.
//!
//! Bytes are kept in the order the hash function emits them. Only the hex
//! helpers reverse them, to match the usual txid display order.
use crate::util::{Error, Result, Serializable};
use bitcoin_hashes::{Hash as _, sha256d as bh_sha256d};
use std::fmt;
use std::io;
use std::io::{Read, Write};

/// 256-bit digest for transactions and sighashes.
#[derive(Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hash256(pub [u8; 32]);

impl Hash256 {
    /// All-zero digest committed in place of a skipped sub-hash.
    pub const ZERO: Hash256 = Hash256([0; 32]);

    /// Converts the hash into a hex string in display (reversed) order.
    #[must_use]
    pub fn encode(&self) -> String {
        let mut r = self.0;
        r.reverse();
        hex::encode(r)
    }

    /// Converts a string of 64 hex characters in display order into a hash.
    pub fn decode(s: &str) -> Result<Hash256> {
        let mut hash = Self::from_hex(s)?;
        hash.0.reverse();
        Ok(hash)
    }

    /// Parses 64 hex characters as raw bytes, without reversing.
    pub fn from_hex(s: &str) -> Result<Hash256> {
        let decoded = hex::decode(s)?;
        let bytes: [u8; 32] = decoded
            .as_slice()
            .try_into()
            .map_err(|_| Error::BadArgument(format!("Length {} of decoded bytes", decoded.len())))?;
        Ok(Hash256(bytes))
    }

    /// Raw bytes as hex, without reversing.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl Serializable<Hash256> for Hash256 {
    fn read(reader: &mut dyn Read) -> Result<Hash256> {
        let mut bytes = [0; 32];
        reader.read_exact(&mut bytes)?;
        Ok(Hash256(bytes))
    }

    fn write(&self, writer: &mut dyn Write) -> io::Result<()> {
        writer.write_all(&self.0)
    }
}

/// Hashes a data array twice using SHA256.
#[must_use]
#[inline]
pub fn sha256d(data: &[u8]) -> Hash256 {
    Hash256(bh_sha256d::Hash::hash(data).to_byte_array())
}

impl fmt::Debug for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    #[test]
    fn sha256d_test() {
        let x = hex::decode("0123456789abcdef").unwrap();
        assert_eq!(
            sha256d(&x).to_hex(),
            "137ad663f79da06e282ed0abbec4d70523ced5ff8e39d5c2e5641d978c5925aa"
        );
    }

    #[test]
    fn hash_decode() {
        let s1 = "0000000000000000000000000000000000000000000000000000000000000000";
        let s2 = "abcdef0000112233445566778899abcdef000011223344556677889912345678";
        assert_eq!(Hash256::decode(s1).unwrap(), Hash256::ZERO);
        assert!(Hash256::decode(s2).is_ok());
        // Wrong length or bad digits
        assert!(Hash256::decode(&s1[1..]).is_err());
        assert!(Hash256::decode(&format!("{}00", s1)).is_err());
        assert!(Hash256::decode(&format!("{}g", &s1[1..])).is_err());
    }

    #[test]
    fn display_order_is_reversed() {
        let h = Hash256::from_hex("0100000000000000000000000000000000000000000000000000000000000000")
            .unwrap();
        assert_eq!(h.0[0], 1);
        assert_eq!(
            h.encode(),
            "0000000000000000000000000000000000000000000000000000000000000001"
        );
        assert_eq!(Hash256::decode(&h.encode()).unwrap(), h);
    }

    #[test]
    fn write_read() {
        let h = Hash256([7; 32]);
        let mut v = Vec::new();
        h.write(&mut v).unwrap();
        assert_eq!(Hash256::read(&mut Cursor::new(v)).unwrap(), h);
        assert!(Hash256::read(&mut Cursor::new(vec![0; 31])).is_err());
    }
}
