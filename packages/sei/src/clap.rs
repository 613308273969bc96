use std::sync::Arc;

use anyhow::{Context, Result};

use crate::{Codec, LcdBuilder, LcdClient, SeiNetwork};

/// Command line options for connecting to a Sei LCD endpoint
#[derive(clap::Parser, Clone, Debug)]
pub struct SeiOpt {
    /// Which Sei network to connect to
    #[clap(long, env = "SEI_NETWORK", global = true)]
    pub network: Option<SeiNetwork>,
    /// Optional LCD endpoint override
    #[clap(long, env = "SEI_LCD_URL", global = true)]
    pub lcd_url: Option<String>,
    /// Optional chain ID override
    #[clap(long, env = "SEI_CHAIN_ID", global = true)]
    pub chain_id: Option<String>,
}

impl SeiOpt {
    pub fn builder(&self) -> Result<LcdBuilder> {
        self.clone().into_builder()
    }

    pub fn into_builder(self) -> Result<LcdBuilder> {
        let SeiOpt {
            network,
            lcd_url,
            chain_id,
        } = self;

        let mut builder = match (network, &lcd_url) {
            (Some(network), _) => network.builder(),
            // A bare URL is enough for read-only queries.
            (None, Some(lcd_url)) => {
                LcdBuilder::new(chain_id.clone().unwrap_or_default(), lcd_url.clone())
            }
            (None, None) => anyhow::bail!(
                "No network specified, either provide the SEI_NETWORK env var or --network option"
            ),
        };
        if let Some(lcd_url) = lcd_url {
            builder.set_lcd_url(lcd_url);
        }
        if let Some(chain_id) = chain_id {
            builder.set_chain_id(chain_id);
        }

        Ok(builder)
    }

    pub fn build(&self, codec: Arc<Codec>) -> Result<LcdClient> {
        self.builder()?
            .build(codec)
            .context("Unable to construct LCD client")
    }
}
