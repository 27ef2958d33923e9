#![deny(missing_docs)]
#![deny(unsafe_code)]

/*! # sighash143

BIP143 signature hashes for spending version 0 witness key-hash (P2WPKH) outputs.

Given an unsigned transaction whose input unlock scripts have been filled with the
witness programs they spend, computes the 32-byte digest a signature for one
input must commit to. Supports ALL, NONE, SINGLE and the implicit default, each
with or without ANYONECANPAY.

## Usage
```
use sighash143::messages::{OutPoint, Tx, TxIn, TxOut};
use sighash143::transaction::p2pkh::create_witness_program;
use sighash143::transaction::{compute_sighash, SighashType};

let tx = Tx {
    version: 2,
    inputs: vec![TxIn {
        prev_output: OutPoint::default(),
        unlock_script: create_witness_program(&[1; 20]),
        sequence: 0xfffffffe,
    }],
    outputs: vec![TxOut::default()],
    lock_time: 0,
};
let a = compute_sighash(&tx, SighashType::ALL, 0, 5000).unwrap();
let b = compute_sighash(&tx, SighashType::ALL, 0, 5000).unwrap();
assert_eq!(a, b);
```

## Byte order
Digests are returned exactly as the double SHA256 emits them. Reverse them only
for display, see [`util::Hash256::encode`].

## Logging
Preimages are logged at `trace` and digests at `debug` through the `log` facade.
*/

pub mod messages;
pub mod script;
pub mod transaction;
pub mod util;
