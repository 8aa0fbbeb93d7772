use anyhow::Result;
use clap::Parser;
use hwscreen::{Calldata, LedgerFlex, ScreenFormat, TrezorSafe5};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hwscreen")]
#[command(about = "Preview how ABI-encoded calldata appears on hardware wallet screens")]
struct Args {
    /// An ABI-encoded hex string of data
    calldata: String,

    /// Format for Ledger Flex
    #[arg(long, visible_alias = "lf")]
    ledger_flex: bool,

    /// Format for Trezor Safe 5
    #[arg(long, visible_alias = "ts5")]
    trezor_safe_5: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("hwscreen=info".parse()?))
        .init();

    let args = Args::parse();

    if !args.ledger_flex && !args.trezor_safe_5 {
        eprintln!("Specify at least one of --ledger-flex or --trezor-safe-5");
        std::process::exit(1);
    }

    let calldata = Calldata::parse(&args.calldata)?;
    debug!("Parsed {} bytes of calldata", calldata.byte_count());

    if args.ledger_flex {
        print_report(&LedgerFlex, &calldata);
    }
    if args.trezor_safe_5 {
        print_report(&TrezorSafe5, &calldata);
    }

    Ok(())
}

fn print_report(format: &dyn ScreenFormat, calldata: &Calldata) {
    debug!("Rendering {} report", format.device_name());
    println!("{}", format.render(calldata));
}
