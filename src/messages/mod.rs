//! Transaction wire types.

mod out_point;
mod tx;
mod tx_in;
mod tx_out;

pub use self::out_point::OutPoint;
pub use self::tx::Tx;
pub use self::tx_in::TxIn;
pub use self::tx_out::TxOut;
