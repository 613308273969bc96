mod chain;
mod variants;

use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use clap::Parser;
use sei::{clap::SeiOpt, Codec, Coins};

/// Command line tool for inspecting Sei messages and transactions
#[derive(clap::Parser)]
struct Cmd {
    #[clap(flatten)]
    opt: Opt,
    #[clap(subcommand)]
    subcommand: Subcommand,
}

#[derive(clap::Parser)]
struct Opt {
    #[clap(flatten)]
    network_opt: SeiOpt,
    /// Turn on verbose output
    #[clap(long, short, global = true)]
    verbose: bool,
}

impl Opt {
    fn init_logger(&self) {
        let default = if self.verbose {
            format!("{}=debug,sei=debug,info", env!("CARGO_CRATE_NAME"))
        } else {
            "info".to_owned()
        };
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Where to read a JSON document from.
#[derive(clap::Parser)]
pub(crate) struct JsonInput {
    /// Inline JSON. Omit to use --file, or pass - to read stdin
    json: Option<String>,
    /// Read the JSON from this file instead
    #[clap(long)]
    file: Option<PathBuf>,
}

impl JsonInput {
    pub(crate) fn load(self) -> Result<serde_json::Value> {
        let raw = match (self.json, self.file) {
            (Some(_), Some(_)) => anyhow::bail!("Provide either inline JSON or --file, not both"),
            (Some(json), None) if json == "-" => std::io::read_to_string(std::io::stdin())
                .context("Unable to read JSON from stdin")?,
            (Some(json), None) => json,
            (None, Some(file)) => fs_err::read_to_string(file)?,
            (None, None) => anyhow::bail!("No JSON provided"),
        };
        serde_json::from_str(&raw).with_context(|| format!("Invalid JSON: {raw}"))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cmd = Cmd::parse();
    cmd.opt.init_logger();

    cmd.subcommand.go(cmd.opt).await
}

#[derive(clap::Parser)]
enum Subcommand {
    /// Print every registered message and proposal content type
    ListVariants {
        /// Only print proposal content types
        #[clap(long)]
        content: bool,
    },
    /// Decode a message from amino JSON or an @type object
    DecodeMsg {
        #[clap(flatten)]
        input: JsonInput,
    },
    /// Decode proposal content from amino JSON or an @type object
    DecodeContent {
        #[clap(flatten)]
        input: JsonInput,
    },
    /// Decode a protobuf Any payload
    DecodeAny {
        #[clap(flatten)]
        opt: variants::DecodeAnyOpt,
    },
    /// Encode a message to protobuf Any bytes
    EncodeMsg {
        #[clap(flatten)]
        input: JsonInput,
        /// Print the bytes as hex instead of base64
        #[clap(long)]
        hex: bool,
    },
    /// Parse and normalize a coin list, e.g. 100usei,5uatom
    ParseCoins { coins: Coins },
    /// Show a single transaction with its decoded messages
    ShowTx {
        /// Transaction hash
        txhash: String,
    },
    /// Search for transactions by event
    SearchTxs {
        #[clap(flatten)]
        opt: chain::SearchOpt,
    },
    /// Show all transactions in a block
    TxsAtHeight { height: u64 },
}

impl Subcommand {
    pub(crate) async fn go(self, opt: Opt) -> Result<()> {
        let codec = Arc::new(Codec::new()?);
        match self {
            Subcommand::ListVariants { content } => variants::list(&codec, content),
            Subcommand::DecodeMsg { input } => variants::decode_msg(&codec, input.load()?)?,
            Subcommand::DecodeContent { input } => {
                variants::decode_content(&codec, input.load()?)?
            }
            Subcommand::DecodeAny { opt } => variants::decode_any(&codec, opt)?,
            Subcommand::EncodeMsg { input, hex } => {
                variants::encode_msg(&codec, input.load()?, hex)?
            }
            Subcommand::ParseCoins { coins } => {
                for coin in coins.iter() {
                    println!("{coin}");
                }
                if coins.is_empty() {
                    println!("0");
                }
            }
            Subcommand::ShowTx { txhash } => {
                let lcd = opt.network_opt.build(codec.clone())?;
                chain::show_tx(&lcd, &txhash).await?
            }
            Subcommand::SearchTxs { opt: search } => {
                let lcd = opt.network_opt.build(codec.clone())?;
                chain::search_txs(&lcd, search).await?
            }
            Subcommand::TxsAtHeight { height } => {
                let lcd = opt.network_opt.build(codec.clone())?;
                for tx in lcd.tx_infos_by_height(height).await? {
                    chain::print_tx(&lcd, &tx)?;
                }
            }
        }

        Ok(())
    }
}
