use std::{fmt::Display, str::FromStr, sync::Arc, time::Duration};

use serde::de::Visitor;

use crate::{error::LcdError, Codec, LcdClient};

/// A preset Sei network with a known chain ID and public LCD endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SeiNetwork {
    Pacific1,
    Atlantic2,
    Arctic1,
    LocalSei,
}

impl SeiNetwork {
    pub fn all() -> [SeiNetwork; 4] {
        [
            SeiNetwork::Pacific1,
            SeiNetwork::Atlantic2,
            SeiNetwork::Arctic1,
            SeiNetwork::LocalSei,
        ]
    }

    fn as_str(self) -> &'static str {
        match self {
            SeiNetwork::Pacific1 => "pacific-1",
            SeiNetwork::Atlantic2 => "atlantic-2",
            SeiNetwork::Arctic1 => "arctic-1",
            SeiNetwork::LocalSei => "localsei",
        }
    }

    /// Chain ID used in signed transactions on this network.
    pub fn chain_id(self) -> &'static str {
        match self {
            SeiNetwork::LocalSei => "sei-chain",
            network => network.as_str(),
        }
    }

    pub fn lcd_url(self) -> &'static str {
        match self {
            SeiNetwork::Pacific1 => "https://rest.sei-apis.com",
            SeiNetwork::Atlantic2 => "https://rest-testnet.sei-apis.com",
            SeiNetwork::Arctic1 => "https://rest-arctic-1.sei-apis.com",
            SeiNetwork::LocalSei => "http://localhost:1317",
        }
    }

    /// A builder preloaded with this network's settings.
    pub fn builder(self) -> LcdBuilder {
        LcdBuilder::new(self.chain_id(), self.lcd_url())
    }
}

impl Display for SeiNetwork {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeiNetwork {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SeiNetwork::all()
            .into_iter()
            .find(|network| network.as_str() == s)
            .ok_or_else(|| anyhow::anyhow!("Unknown network: {s}"))
    }
}

impl serde::Serialize for SeiNetwork {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::Deserialize<'de> for SeiNetwork {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(SeiNetworkVisitor)
    }
}

struct SeiNetworkVisitor;

impl<'de> Visitor<'de> for SeiNetworkVisitor {
    type Value = SeiNetwork;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("SeiNetwork")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        SeiNetwork::from_str(v).map_err(E::custom)
    }
}

/// Used to build a [LcdClient].
#[derive(Clone, Debug)]
pub struct LcdBuilder {
    chain_id: String,
    lcd_url: String,
    request_timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl LcdBuilder {
    pub fn new(chain_id: impl Into<String>, lcd_url: impl Into<String>) -> Self {
        LcdBuilder {
            chain_id: chain_id.into(),
            lcd_url: lcd_url.into(),
            request_timeout: None,
            user_agent: None,
        }
    }

    pub fn chain_id(&self) -> &str {
        &self.chain_id
    }

    pub fn set_chain_id(&mut self, chain_id: String) {
        self.chain_id = chain_id;
    }

    /// Base URL of the LCD REST endpoint, without a trailing slash.
    pub fn lcd_url(&self) -> &str {
        self.lcd_url.trim_end_matches('/')
    }

    /// See [Self::lcd_url]
    pub fn set_lcd_url(&mut self, lcd_url: String) {
        self.lcd_url = lcd_url;
    }

    /// How long to wait for a single LCD response.
    ///
    /// Default: 30 seconds
    pub fn request_timeout(&self) -> Duration {
        self.request_timeout.unwrap_or(Duration::from_secs(30))
    }

    /// See [Self::request_timeout]
    pub fn set_request_timeout(&mut self, request_timeout: Option<Duration>) {
        self.request_timeout = request_timeout;
    }

    /// User agent sent with each request.
    ///
    /// Default: `sei-rs/<crate version>`
    pub fn user_agent(&self) -> String {
        self.user_agent
            .clone()
            .unwrap_or_else(|| concat!("sei-rs/", env!("CARGO_PKG_VERSION")).to_owned())
    }

    /// See [Self::user_agent]
    pub fn set_user_agent(&mut self, user_agent: Option<String>) {
        self.user_agent = user_agent;
    }

    /// Build the client. Decoding of transaction messages goes through `codec`.
    pub fn build(self, codec: Arc<Codec>) -> Result<LcdClient, LcdError> {
        if !(self.lcd_url.starts_with("http://") || self.lcd_url.starts_with("https://")) {
            return Err(LcdError::Config(format!(
                "LCD URL must be http or https, got {:?}",
                self.lcd_url
            )));
        }
        let client = reqwest::Client::builder()
            .timeout(self.request_timeout())
            .user_agent(self.user_agent())
            .build()
            .map_err(|e| LcdError::Config(format!("Unable to build HTTP client: {e}")))?;
        Ok(LcdClient::new(self, client, codec))
    }
}
