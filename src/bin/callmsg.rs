use clap::{Args, Parser, Subcommand};
use eyre::OptionExt;
use zksync_callmsg::{
    Address, BlockRange, Builder, CallMsg, Fees, TransferCallMsg, WithdrawalCallMsg, Word,
};

// cargo run --bin callmsg -- transfer --from 0x.. --to 0x.. --amount 1000 --token 0x..
// L2_BRIDGE=0x.. cargo run --bin callmsg -- withdraw --from 0x.. --to 0x.. --amount 1000 --token 0x..
// cargo run --bin callmsg -- range '["0x1","0xa"]'

#[derive(Parser)]
#[command(about = "Build zkSync call messages and print them as JSON call objects")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transfer ETH or an ERC20 token on L2.
    Transfer {
        #[command(flatten)]
        common: Common,
    },
    /// Withdraw ETH or a bridged token from L2 to L1.
    Withdraw {
        #[command(flatten)]
        common: Common,
        /// Bridge to use instead of the default one.
        #[arg(long, value_parser = parse_address)]
        bridge: Option<Address>,
        /// Default L2 bridge for token withdrawals.
        #[arg(long, env = "L2_BRIDGE", value_parser = parse_address)]
        default_bridge: Option<Address>,
    },
    /// Parse a block range as returned by `zks_getL1BatchBlockRange`.
    Range { json: String },
}

#[derive(Args)]
struct Common {
    #[arg(long, value_parser = parse_address)]
    from: Address,
    #[arg(long, value_parser = parse_address)]
    to: Address,
    /// Decimal or 0x-prefixed hex.
    #[arg(long, value_parser = parse_word)]
    amount: Word,
    /// Token address; ETH when omitted.
    #[arg(long, value_parser = parse_address)]
    token: Option<Address>,
    #[arg(long, default_value = "0")]
    gas: u64,
    #[arg(long, value_parser = parse_word, conflicts_with_all = ["max_fee", "max_priority_fee"])]
    gas_price: Option<Word>,
    #[arg(long, value_parser = parse_word, requires = "max_priority_fee")]
    max_fee: Option<Word>,
    #[arg(long, value_parser = parse_word, requires = "max_fee")]
    max_priority_fee: Option<Word>,
}

impl Common {
    fn fees(&self) -> Option<Fees> {
        match (self.gas_price, self.max_fee, self.max_priority_fee) {
            (Some(gas_price), _, _) => Some(Fees::Legacy { gas_price }),
            (None, Some(max_fee), Some(max_priority_fee)) => Some(Fees::Eip1559 {
                max_fee,
                max_priority_fee,
            }),
            _ => None,
        }
    }

    fn apply<B: Builder>(&self, builder: B) -> B {
        let builder = builder.with_sender(self.from).with_gas(self.gas);
        match self.fees() {
            Some(fees) => builder.with_fees(fees),
            None => builder,
        }
    }
}

fn parse_address(s: &str) -> Result<Address, String> {
    Address::try_from(s).map_err(|e| e.to_string())
}

fn parse_word(s: &str) -> Result<Word, String> {
    s.parse::<Word>().map_err(|e| e.to_string())
}

/// Bridge handed to the withdrawal builder. Only token withdrawals that
/// carry no bridge of their own need a configured default.
fn resolve_default_bridge(
    msg: &WithdrawalCallMsg,
    default_bridge: Option<Address>,
) -> eyre::Result<Address> {
    if msg.token.is_eth() || msg.bridge.is_some() {
        Ok(default_bridge.unwrap_or_default())
    } else {
        default_bridge.ok_or_eyre("token withdrawal needs --bridge or L2_BRIDGE")
    }
}

fn run(command: Command) -> eyre::Result<String> {
    let out = match command {
        Command::Transfer { common } => {
            let mut msg = common.apply(TransferCallMsg::new(common.to, common.amount));
            if let Some(token) = common.token {
                msg = msg.with_token(token);
            }
            let call: CallMsg = msg.to_call_msg()?;
            serde_json::to_string_pretty(&call)?
        }
        Command::Withdraw {
            common,
            bridge,
            default_bridge,
        } => {
            let mut msg = common.apply(WithdrawalCallMsg::new(common.to, common.amount));
            if let Some(token) = common.token {
                msg = msg.with_token(token);
            }
            if let Some(bridge) = bridge {
                msg = msg.with_bridge(bridge);
            }
            let default_bridge = resolve_default_bridge(&msg, default_bridge)?;
            let call = msg.to_call_msg(default_bridge)?;
            serde_json::to_string_pretty(&call)?
        }
        Command::Range { json } => {
            let range = BlockRange::from_json(&json)?;
            format!("{}..={}", range.beginning, range.end)
        }
    };
    Ok(out)
}

fn main() -> eyre::Result<()> {
    dotenv::dotenv().ok();
    #[cfg(feature = "tracing-subscriber")]
    {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .try_init();
    }

    let cli = Cli::parse();
    println!("{}", run(cli.command)?);
    Ok(())
}
