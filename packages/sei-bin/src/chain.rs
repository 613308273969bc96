use anyhow::{Context, Result};
use sei::{LcdClient, PaginationOptions, TxInfo};

#[derive(clap::Parser)]
pub(crate) struct SearchOpt {
    /// Event filter in key=value form, e.g. message.sender=sei1...
    #[clap(long = "event", required = true)]
    events: Vec<String>,
    /// Maximum number of transactions to return
    #[clap(long)]
    limit: Option<u64>,
    /// Continue from a previous page's next key
    #[clap(long)]
    key: Option<String>,
    /// Ask the node to count all matches
    #[clap(long)]
    count_total: bool,
    /// Newest first
    #[clap(long)]
    reverse: bool,
}

pub(crate) fn print_tx(lcd: &LcdClient, tx: &TxInfo) -> Result<()> {
    println!("{tx}");
    if let Some(timestamp) = tx.timestamp {
        println!("Timestamp: {timestamp}");
    }
    println!("Gas used: {}/{}", tx.gas_used, tx.gas_wanted);
    if !tx.memo.is_empty() {
        println!("Memo: {}", tx.memo);
    }
    for msg in &tx.msgs {
        let envelope = lcd.codec().encode_msg(msg)?;
        println!("{}", serde_json::to_string_pretty(&envelope)?);
    }
    Ok(())
}

pub(crate) async fn show_tx(lcd: &LcdClient, txhash: &str) -> Result<()> {
    let tx = lcd.tx_info(txhash).await?;
    print_tx(lcd, &tx)
}

pub(crate) async fn search_txs(
    lcd: &LcdClient,
    SearchOpt {
        events,
        limit,
        key,
        count_total,
        reverse,
    }: SearchOpt,
) -> Result<()> {
    let events = events
        .iter()
        .map(|event| {
            event
                .split_once('=')
                .with_context(|| format!("Event filter must be key=value, got {event:?}"))
        })
        .collect::<Result<Vec<_>>>()?;
    let pagination = PaginationOptions {
        key,
        offset: None,
        limit,
        count_total: count_total.then_some(true),
        reverse: reverse.then_some(true),
    };
    let res = lcd.search(&events, Some(pagination)).await?;
    for tx in &res.txs {
        print_tx(lcd, tx)?;
    }
    if count_total {
        println!("Total: {}", res.total);
    }
    if let Some(next_key) = res.next_key {
        println!("Next key: {next_key}");
    }
    Ok(())
}
