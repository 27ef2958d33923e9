//! Signature hashing for P2WPKH inputs.
//!
//! # Examples
//!
//! ```
//! use sighash143::messages::Tx;
//! use sighash143::script::Script;
//! use sighash143::transaction::sighash::{compute_sighash, SighashType};
//!
//! let mut tx = Tx::from_hex("0100000002fff7f7881a8099afa6940d42d1e7f6362bec38171ea3edf433541db4e4ad969f0000000000eeffffffef51e1b804cc89d182d279655c3aa89e815b1b309fe287d9b2b55d57b90ec68a0100000000ffffffff02202cb206000000001976a9148280b37df378db99f66f85c95a783a76ac7a6d5988ac9093510d000000001976a9143bde42dbee7e4dbe6a21b2d50ce2f0167faa815988ac11000000").unwrap();
//! tx.set_spent_scripts(vec![
//!     Script::from_hex("2103c9f4836b9a4f77fc0d81f7bcb01b7f1b35916864b9476c241ce9fc198bd25432ac").unwrap(),
//!     Script::from_hex("00141d0f172a0ecb48aee1be1f2687d2963ae33f71a1").unwrap(),
//! ]).unwrap();
//! let digest = compute_sighash(&tx, SighashType::ALL, 1, 600000000).unwrap();
//! assert_eq!(digest.to_hex(), "c37af31116d1b27caf68aae9e3ac82f1477929014d5b917657d0eb49478cb670");
//! ```
pub mod p2pkh;
pub mod sighash;

pub use self::sighash::{
    BaseType, SighashType, SingleOutputRule, SubHash, compute_sighash, compute_sighash_with_rule,
};
