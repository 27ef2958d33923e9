use proptest::prelude::*;

use sighash143::messages::{OutPoint, Tx, TxIn, TxOut};
use sighash143::script::Script;
use sighash143::transaction::sighash::{hash_outputs, hash_prevouts, hash_sequence};
use sighash143::transaction::{SighashType, SingleOutputRule, compute_sighash};
use sighash143::util::{Error, Hash256, var_int};

fn arb_tx_in() -> impl Strategy<Value = TxIn> {
    (
        any::<[u8; 32]>(),
        any::<u32>(),
        prop::collection::vec(any::<u8>(), 22..40),
        any::<u32>(),
    )
        .prop_map(|(hash, index, script, sequence)| TxIn {
            prev_output: OutPoint {
                hash: Hash256(hash),
                index,
            },
            unlock_script: Script(script),
            sequence,
        })
}

fn arb_tx_out() -> impl Strategy<Value = TxOut> {
    (any::<i64>(), prop::collection::vec(any::<u8>(), 0..300))
        .prop_map(|(satoshis, script)| TxOut {
            satoshis,
            lock_script: Script(script),
        })
}

fn arb_tx() -> impl Strategy<Value = Tx> {
    (
        any::<u32>(),
        prop::collection::vec(arb_tx_in(), 1..6),
        prop::collection::vec(arb_tx_out(), 0..6),
        any::<u32>(),
    )
        .prop_map(|(version, inputs, outputs, lock_time)| Tx {
            version,
            inputs,
            outputs,
            lock_time,
        })
}

fn arb_sighash_type() -> impl Strategy<Value = SighashType> {
    (0u8..4, any::<bool>()).prop_map(|(base, acp)| {
        let byte = if acp { base | 0x80 } else { base };
        SighashType::from_u8(byte).unwrap()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn deterministic(tx in arb_tx(), t in arb_sighash_type(), amount in any::<i64>(), pick in any::<prop::sample::Index>()) {
        let n = pick.index(tx.inputs.len());
        let a = compute_sighash(&tx, t, n, amount).unwrap();
        let b = compute_sighash(&tx.clone(), t, n, amount).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn anyone_can_pay_zeroes_input_hashes(tx in arb_tx(), base in 0u8..4) {
        let t = SighashType::from_u8(base | 0x80).unwrap();
        prop_assert_eq!(hash_prevouts(&tx.inputs, t).unwrap(), Hash256::ZERO);
        prop_assert_eq!(hash_sequence(&tx.inputs, t).unwrap(), Hash256::ZERO);
    }

    #[test]
    fn none_zeroes_outputs(outputs in prop::collection::vec(arb_tx_out(), 0..6), n in 0usize..8, acp in any::<bool>()) {
        let t = if acp { SighashType::NONE.with_anyone_can_pay() } else { SighashType::NONE };
        for rule in [SingleOutputRule::Bip143, SingleOutputRule::Literal] {
            prop_assert_eq!(hash_outputs(&outputs, n, t, rule).unwrap(), Hash256::ZERO);
        }
    }

    #[test]
    fn single_depends_only_on_matching_output(
        outputs in prop::collection::vec(arb_tx_out(), 1..6),
        other in arb_tx_out(),
        pick in any::<prop::sample::Index>(),
        victim in any::<prop::sample::Index>(),
    ) {
        let n = pick.index(outputs.len());
        let v = victim.index(outputs.len());
        prop_assume!(v != n);
        let mut changed = outputs.clone();
        changed[v] = other;
        let rule = SingleOutputRule::Bip143;
        let before = hash_outputs(&outputs, n, SighashType::SINGLE, rule).unwrap();
        let after = hash_outputs(&changed, n, SighashType::SINGLE, rule).unwrap();
        prop_assert_eq!(before, after);
        prop_assert_ne!(before, Hash256::ZERO);
        // Same result when the matching output is the only one
        let alone = hash_outputs(&outputs[n..=n], 0, SighashType::SINGLE, rule).unwrap();
        prop_assert_eq!(before, alone);
    }

    #[test]
    fn single_past_last_output_is_zero(outputs in prop::collection::vec(arb_tx_out(), 0..4), extra in 0usize..4) {
        let n = outputs.len() + extra;
        let t = SighashType::SINGLE;
        prop_assert_eq!(hash_outputs(&outputs, n, t, SingleOutputRule::Bip143).unwrap(), Hash256::ZERO);
    }

    #[test]
    fn input_index_out_of_range_is_error(tx in arb_tx(), extra in 0usize..4) {
        let n = tx.inputs.len() + extra;
        let inputs = tx.inputs.len();
        let err = compute_sighash(&tx, SighashType::ALL, n, 0).unwrap_err();
        prop_assert!(
            matches!(err, Error::InputIndexOutOfRange { index, inputs: len } if index == n && len == inputs),
            "unexpected error: {}", err
        );
    }

    #[test]
    fn varint_length_class(n in any::<u64>()) {
        let mut v = Vec::new();
        var_int::write(n, &mut v).unwrap();
        let expected = match n {
            0..=0xfc => 1,
            0xfd..=0xffff => 3,
            0x1_0000..=0xffff_ffff => 5,
            _ => 9,
        };
        prop_assert_eq!(v.len(), expected);
        prop_assert_eq!(var_int::read(&mut v.as_slice()).unwrap(), n);
    }
}
