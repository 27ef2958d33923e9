//! Computes the BIP143 sighash of one input of a hex-encoded transaction.
use clap::Parser;
use sighash143::messages::Tx;
use sighash143::script::Script;
use sighash143::transaction::{SighashType, SingleOutputRule, compute_sighash_with_rule};
use sighash143::util::Result;
use std::fs;
use std::io::{self, Write};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File holding the unsigned transaction as hex
    #[arg(short, long, value_name = "FILE", default_value_t = String::from("tx.hex"))]
    tx: String,

    /// Lock script of the output spent by each input, as hex, in input order
    #[arg(short, long = "spent-script", value_name = "HEX", required = true)]
    spent_scripts: Vec<String>,

    /// Index of the input to sign
    #[arg(short, long)]
    input: usize,

    /// Amount of the output being spent, in satoshis
    #[arg(short, long)]
    amount: i64,

    /// ALL, NONE, SINGLE or DEFAULT, optionally with |ANYONECANPAY
    #[arg(long, default_value = "ALL")]
    sighash_type: SighashType,

    /// Zero the SINGLE outputs hash whenever index <= outputs, as older tools did
    #[arg(long)]
    literal_single: bool,
}

fn run(args: Args, out: &mut dyn Write) -> Result<()> {
    let tx_hex = fs::read_to_string(&args.tx)?;
    let mut tx = Tx::from_hex(&tx_hex)?;
    log::info!("Loaded {} byte transaction from {}.", tx.size(), args.tx);

    let scripts = args
        .spent_scripts
        .iter()
        .map(|s| Script::from_hex(s))
        .collect::<Result<Vec<_>>>()?;
    tx.set_spent_scripts(scripts)?;
    log::debug!("{:#?}", tx);

    let rule = if args.literal_single {
        SingleOutputRule::Literal
    } else {
        SingleOutputRule::Bip143
    };
    let digest = compute_sighash_with_rule(&tx, args.sighash_type, args.input, args.amount, rule)?;
    writeln!(out, "{}", digest.to_hex())?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    match run(args, &mut io::stdout()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sighash143::util::Error;
    use std::path::PathBuf;

    const UNSIGNED_TX: &str = "0100000002fff7f7881a8099afa6940d42d1e7f6362bec38171ea3edf433541db4e4ad969f0000000000eeffffffef51e1b804cc89d182d279655c3aa89e815b1b309fe287d9b2b55d57b90ec68a0100000000ffffffff02202cb206000000001976a9148280b37df378db99f66f85c95a783a76ac7a6d5988ac9093510d000000001976a9143bde42dbee7e4dbe6a21b2d50ce2f0167faa815988ac11000000";
    const SPENT_SCRIPT_0: &str = "2103c9f4836b9a4f77fc0d81f7bcb01b7f1b35916864b9476c241ce9fc198bd25432ac";
    const SPENT_SCRIPT_1: &str = "00141d0f172a0ecb48aee1be1f2687d2963ae33f71a1";

    fn tx_file(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("sighash143-{}-{}.hex", name, std::process::id()));
        fs::write(&path, format!("{}\n", UNSIGNED_TX)).unwrap();
        path
    }

    fn run_with(path: &PathBuf, input: &str, extra: &[&str]) -> Result<String> {
        let mut argv = vec![
            "sighash143",
            "--tx",
            path.to_str().unwrap(),
            "-s",
            SPENT_SCRIPT_0,
            "-s",
            SPENT_SCRIPT_1,
            "--input",
            input,
            "--amount",
            "600000000",
        ];
        argv.extend_from_slice(extra);
        let mut out = Vec::new();
        run(Args::parse_from(argv), &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn prints_digest() {
        let path = tx_file("all");
        let printed = run_with(&path, "1", &[]).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(printed, "c37af31116d1b27caf68aae9e3ac82f1477929014d5b917657d0eb49478cb670\n");
    }

    #[test]
    fn literal_single_flag() {
        let path = tx_file("single");
        let printed = run_with(&path, "1", &["--sighash-type", "SINGLE", "--literal-single"]).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(printed, "471a6e7963aa0c328ee12392fb1a345148edf326b4223660e1a770fdc2826435\n");
    }

    #[test]
    fn input_out_of_range() {
        let path = tx_file("range");
        let err = run_with(&path, "2", &[]).unwrap_err();
        fs::remove_file(&path).unwrap();
        assert!(matches!(err, Error::InputIndexOutOfRange { index: 2, inputs: 2 }));
    }

    #[test]
    fn missing_file() {
        let path = std::env::temp_dir().join("sighash143-does-not-exist.hex");
        assert!(matches!(run_with(&path, "1", &[]), Err(Error::IOError(_))));
    }
}
