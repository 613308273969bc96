//! Transaction queries against a Sei LCD (REST) endpoint.

use std::{fmt::Display, sync::Arc};

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Value;

use crate::{error::LcdError, Codec, LcdBuilder, Msg};

/// Paging controls accepted by LCD list endpoints.
///
/// Only set fields are sent. `key` and `offset` are mutually exclusive on
/// the chain side.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PaginationOptions {
    /// Opaque `next_key` from a previous page, base64 encoded
    pub key: Option<String>,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
    /// Ask the node to fill in [TxSearchResult::total]
    pub count_total: Option<bool>,
    pub reverse: Option<bool>,
}

impl PaginationOptions {
    pub fn with_limit(limit: u64) -> Self {
        PaginationOptions {
            limit: Some(limit),
            ..PaginationOptions::default()
        }
    }

    fn to_query(&self) -> Vec<(String, String)> {
        let mut query = vec![];
        let mut push = |name: &str, value: Option<String>| {
            if let Some(value) = value {
                query.push((format!("pagination.{name}"), value));
            }
        };
        push("key", self.key.clone());
        push("offset", self.offset.map(|x| x.to_string()));
        push("limit", self.limit.map(|x| x.to_string()));
        push("count_total", self.count_total.map(|x| x.to_string()));
        push("reverse", self.reverse.map(|x| x.to_string()));
        query
    }
}

/// A transaction as reported by the LCD, with its messages decoded.
#[derive(Clone, Debug, PartialEq)]
pub struct TxInfo {
    pub height: u64,
    pub txhash: String,
    /// Zero on success
    pub code: u32,
    pub codespace: String,
    pub gas_wanted: i64,
    pub gas_used: i64,
    /// Block time, absent for transactions the node has not indexed with one
    pub timestamp: Option<DateTime<Utc>>,
    pub memo: String,
    pub timeout_height: u64,
    pub raw_log: String,
    pub msgs: Vec<Msg>,
}

impl TxInfo {
    pub fn is_success(&self) -> bool {
        self.code == 0
    }
}

impl Display for TxInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Transaction {} at height {}", self.txhash, self.height)?;
        if !self.is_success() {
            write!(f, " (failed, {} code {})", self.codespace, self.code)?;
        }
        for msg in &self.msgs {
            write!(f, "\n  {msg}")?;
        }
        Ok(())
    }
}

/// One page of a transaction search.
#[derive(Clone, Debug, PartialEq)]
pub struct TxSearchResult {
    pub txs: Vec<TxInfo>,
    /// Pass back through [PaginationOptions::key] to fetch the next page
    pub next_key: Option<String>,
    /// Only filled in when `count_total` was requested
    pub total: u64,
}

#[derive(Deserialize)]
struct RawTxResponse {
    #[serde(with = "crate::json::string_u64")]
    height: u64,
    txhash: String,
    #[serde(default)]
    code: u32,
    #[serde(default)]
    codespace: String,
    #[serde(default, with = "crate::json::string_i64")]
    gas_wanted: i64,
    #[serde(default, with = "crate::json::string_i64")]
    gas_used: i64,
    #[serde(default)]
    timestamp: String,
    #[serde(default)]
    raw_log: String,
    tx: RawTx,
}

#[derive(Deserialize)]
struct RawTx {
    body: RawTxBody,
}

#[derive(Deserialize)]
struct RawTxBody {
    messages: Vec<Value>,
    #[serde(default)]
    memo: String,
    #[serde(default, with = "crate::json::string_u64")]
    timeout_height: u64,
}

#[derive(Deserialize)]
struct GetTxResponse {
    tx_response: RawTxResponse,
}

#[derive(Deserialize)]
struct SearchTxsResponse {
    #[serde(default)]
    tx_responses: Vec<RawTxResponse>,
    pagination: Option<RawPagination>,
    #[serde(default, with = "crate::json::option_string_u64")]
    total: Option<u64>,
}

#[derive(Deserialize)]
struct RawPagination {
    next_key: Option<String>,
    #[serde(default, with = "crate::json::option_string_u64")]
    total: Option<u64>,
}

fn parse_timestamp(timestamp: &str) -> anyhow::Result<Option<DateTime<Utc>>> {
    if timestamp.is_empty() {
        return Ok(None);
    }
    DateTime::parse_from_rfc3339(timestamp)
        .map(|x| Some(x.with_timezone(&Utc)))
        .with_context(|| format!("Invalid transaction timestamp {timestamp:?}"))
}

fn decode_tx_response(codec: &Codec, url: &str, raw: RawTxResponse) -> Result<TxInfo, LcdError> {
    let RawTxResponse {
        height,
        txhash,
        code,
        codespace,
        gas_wanted,
        gas_used,
        timestamp,
        raw_log,
        tx: RawTx { body },
    } = raw;
    let timestamp = parse_timestamp(&timestamp).map_err(|source| LcdError::Response {
        url: url.to_owned(),
        source,
    })?;
    let msgs = body
        .messages
        .into_iter()
        .enumerate()
        .map(|(index, msg)| {
            codec
                .decode_msg_proto_json(msg)
                .map_err(|source| LcdError::MessageDecode {
                    txhash: txhash.clone(),
                    index,
                    source,
                })
        })
        .collect::<Result<_, _>>()?;
    Ok(TxInfo {
        height,
        txhash,
        code,
        codespace,
        gas_wanted,
        gas_used,
        timestamp,
        memo: body.memo,
        timeout_height: body.timeout_height,
        raw_log,
        msgs,
    })
}

fn parse_json<T: DeserializeOwned>(url: &str, body: &str) -> Result<T, LcdError> {
    serde_json::from_str(body)
        .with_context(|| format!("Unable to parse JSON response: {body}"))
        .map_err(|source| LcdError::Response {
            url: url.to_owned(),
            source,
        })
}

fn parse_tx_info(codec: &Codec, url: &str, body: &str) -> Result<TxInfo, LcdError> {
    let GetTxResponse { tx_response } = parse_json(url, body)?;
    decode_tx_response(codec, url, tx_response)
}

fn parse_search(codec: &Codec, url: &str, body: &str) -> Result<TxSearchResult, LcdError> {
    let SearchTxsResponse {
        tx_responses,
        pagination,
        total,
    } = parse_json(url, body)?;
    let txs = tx_responses
        .into_iter()
        .map(|raw| decode_tx_response(codec, url, raw))
        .collect::<Result<_, _>>()?;
    let (next_key, page_total) = match pagination {
        Some(RawPagination { next_key, total }) => (next_key.filter(|x| !x.is_empty()), total),
        None => (None, None),
    };
    Ok(TxSearchResult {
        txs,
        next_key,
        total: total.or(page_total).unwrap_or_default(),
    })
}

/// Render a `(key, value)` event filter the way the LCD expects it.
///
/// Heights are matched numerically. Every other value is single-quoted, and
/// the query language has no escape for a quote inside one.
fn event_query(key: &str, value: &str) -> Result<String, LcdError> {
    let invalid = |reason: &'static str| LcdError::InvalidEvent {
        key: key.to_owned(),
        value: value.to_owned(),
        reason,
    };
    if key.is_empty()
        || !key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
    {
        return Err(invalid("event keys may only contain letters, digits, '.', '_' and '-'"));
    }
    if key == "tx.height" {
        value
            .parse::<u64>()
            .map_err(|_| invalid("tx.height must be an integer"))?;
        Ok(format!("{key}={value}"))
    } else if value.contains('\'') {
        Err(invalid("values cannot contain a single quote"))
    } else {
        Ok(format!("{key}='{value}'"))
    }
}

/// Read-only client for the LCD transaction endpoints.
///
/// Each method issues exactly one HTTP request. There is no retry logic.
#[derive(Clone)]
pub struct LcdClient {
    builder: Arc<LcdBuilder>,
    client: reqwest::Client,
    codec: Arc<Codec>,
}

impl std::fmt::Debug for LcdClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LcdClient")
            .field("chain_id", &self.builder.chain_id())
            .field("lcd_url", &self.builder.lcd_url())
            .finish()
    }
}

impl LcdClient {
    pub(crate) fn new(builder: LcdBuilder, client: reqwest::Client, codec: Arc<Codec>) -> Self {
        LcdClient {
            builder: Arc::new(builder),
            client,
            codec,
        }
    }

    pub fn get_config(&self) -> &LcdBuilder {
        &self.builder
    }

    pub fn codec(&self) -> &Codec {
        &self.codec
    }

    /// Returns the full URL along with the response body.
    async fn get_text(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<(String, String), LcdError> {
        let url = format!("{}{path}", self.builder.lcd_url());
        tracing::debug!("LCD request: {url} {query:?}");
        let res = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|source| LcdError::Request {
                url: url.clone(),
                source,
            })?;
        let status = res.status();
        let body = res.text().await.map_err(|source| LcdError::Request {
            url: url.clone(),
            source,
        })?;
        if !status.is_success() {
            tracing::warn!("LCD request to {url} failed with {status}");
            return Err(LcdError::Status { url, status, body });
        }
        Ok((url, body))
    }

    /// Look up a single transaction by hash.
    pub async fn tx_info(&self, txhash: &str) -> Result<TxInfo, LcdError> {
        let path = format!("/cosmos/tx/v1beta1/txs/{txhash}");
        let (url, body) = self.get_text(&path, &[]).await?;
        parse_tx_info(&self.codec, &url, &body)
    }

    /// Search transactions matching all of the given events, e.g.
    /// `[("message.sender", "sei1..."), ("tx.height", "7442303")]`.
    pub async fn search(
        &self,
        events: &[(&str, &str)],
        pagination: Option<PaginationOptions>,
    ) -> Result<TxSearchResult, LcdError> {
        let mut query = events
            .iter()
            .map(|(key, value)| Ok(("events".to_owned(), event_query(key, value)?)))
            .collect::<Result<Vec<_>, LcdError>>()?;
        if let Some(pagination) = pagination {
            query.extend(pagination.to_query());
        }
        let (url, body) = self.get_text("/cosmos/tx/v1beta1/txs", &query).await?;
        parse_search(&self.codec, &url, &body)
    }

    /// All transactions included in the block at `height`.
    ///
    /// This is a single search request. Blocks with more transactions than
    /// the node's default page size need [Self::search] with pagination.
    pub async fn tx_infos_by_height(&self, height: u64) -> Result<Vec<TxInfo>, LcdError> {
        let height = height.to_string();
        self.search(&[("tx.height", &height)], None)
            .await
            .map(|res| res.txs)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{msgs::bank::MsgSend, Coin, RegistryError};

    const URL: &str = "http://localhost:1317/cosmos/tx/v1beta1/txs";

    fn tx_response(txhash: &str, messages: Value) -> Value {
        json!({
            "height": "7442303",
            "txhash": txhash,
            "codespace": "",
            "code": 0,
            "raw_log": "[]",
            "gas_wanted": "200000",
            "gas_used": "81234",
            "timestamp": "2023-08-01T12:00:00Z",
            "tx": {
                "@type": "/cosmos.tx.v1beta1.Tx",
                "body": {
                    "messages": messages,
                    "memo": "hello",
                    "timeout_height": "0",
                    "extension_options": [],
                    "non_critical_extension_options": []
                },
                "auth_info": {},
                "signatures": []
            }
        })
    }

    fn send_json() -> Value {
        json!({
            "@type": "/cosmos.bank.v1beta1.MsgSend",
            "from_address": "sei1abc",
            "to_address": "sei1xyz",
            "amount": [{"denom": "usei", "amount": "100"}]
        })
    }

    #[test]
    fn parses_single_tx() {
        let codec = Codec::new().unwrap();
        let body = json!({
            "tx": {},
            "tx_response": tx_response("ABCDEF", json!([send_json()])),
        })
        .to_string();
        let info = parse_tx_info(&codec, URL, &body).unwrap();
        assert_eq!(info.txhash, "ABCDEF");
        assert_eq!(info.height, 7442303);
        assert_eq!(info.gas_used, 81234);
        assert_eq!(info.memo, "hello");
        assert!(info.is_success());
        assert_eq!(
            info.timestamp.unwrap().to_rfc3339(),
            "2023-08-01T12:00:00+00:00"
        );
        assert_eq!(
            info.msgs,
            vec![Msg::from(MsgSend {
                from_address: "sei1abc".to_owned(),
                to_address: "sei1xyz".to_owned(),
                amount: vec![Coin::new("usei", 100)],
            })]
        );
    }

    #[test]
    fn parses_search_page() {
        let codec = Codec::new().unwrap();
        let body = json!({
            "txs": [],
            "tx_responses": [
                tx_response("AAAA", json!([send_json()])),
                tx_response("BBBB", json!([send_json(), send_json()])),
            ],
            "pagination": {"next_key": "a2V5", "total": "5"},
        })
        .to_string();
        let res = parse_search(&codec, URL, &body).unwrap();
        assert_eq!(res.txs.len(), 2);
        assert_eq!(res.txs[1].msgs.len(), 2);
        assert_eq!(res.next_key.as_deref(), Some("a2V5"));
        assert_eq!(res.total, 5);
    }

    #[test]
    fn empty_search_page() {
        let codec = Codec::new().unwrap();
        let body = json!({"txs": [], "tx_responses": [], "pagination": null, "total": "0"});
        let res = parse_search(&codec, URL, &body.to_string()).unwrap();
        assert!(res.txs.is_empty());
        assert_eq!(res.next_key, None);
        assert_eq!(res.total, 0);
    }

    #[test]
    fn unknown_message_is_a_hard_error() {
        let codec = Codec::new().unwrap();
        let bogus = json!({"@type": "/bogus.v1.MsgNotReal"});
        let body = json!({"tx_response": tx_response("CCCC", json!([send_json(), bogus]))});
        match parse_tx_info(&codec, URL, &body.to_string()).unwrap_err() {
            LcdError::MessageDecode {
                txhash,
                index,
                source: RegistryError::UnknownVariant { discriminator, .. },
            } => {
                assert_eq!(txhash, "CCCC");
                assert_eq!(index, 1);
                assert_eq!(discriminator, "/bogus.v1.MsgNotReal");
            }
            e => panic!("Unexpected error: {e}"),
        }
    }

    #[test]
    fn garbage_response_is_reported() {
        let codec = Codec::new().unwrap();
        let err = parse_tx_info(&codec, URL, "<html>gateway timeout</html>").unwrap_err();
        assert!(matches!(err, LcdError::Response { .. }));
    }

    #[test]
    fn event_quoting() {
        assert_eq!(
            event_query("tx.height", "7442303").unwrap(),
            "tx.height=7442303"
        );
        assert_eq!(
            event_query("message.sender", "sei1abc").unwrap(),
            "message.sender='sei1abc'"
        );
    }

    #[test]
    fn event_filters_cannot_inject_conditions() {
        for (key, value) in [
            ("message.sender", "sei1abc' OR message.action='send"),
            ("tx.height", "1 OR tx.height>0"),
            ("message.sender='x' OR a", "sei1abc"),
            ("", "sei1abc"),
        ] {
            assert!(matches!(
                event_query(key, value),
                Err(LcdError::InvalidEvent { .. })
            ));
        }
    }

    #[test]
    fn pagination_query() {
        let opts = PaginationOptions {
            limit: Some(2),
            count_total: Some(true),
            ..PaginationOptions::default()
        };
        assert_eq!(
            opts.to_query(),
            vec![
                ("pagination.limit".to_owned(), "2".to_owned()),
                ("pagination.count_total".to_owned(), "true".to_owned()),
            ]
        );
        assert!(PaginationOptions::default().to_query().is_empty());
    }
}
