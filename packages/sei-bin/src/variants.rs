use anyhow::{Context, Result};
use base64::Engine;
use sei::{Codec, Descriptor, Family};
use serde_json::Value;

fn print_descriptors<F: Family>(descriptors: &[Descriptor<F>]) {
    for desc in descriptors {
        println!("{}\t{}\t{}", desc.variant_name(), desc.type_amino(), desc.type_url());
    }
}

pub(crate) fn list(codec: &Codec, content: bool) {
    if content {
        print_descriptors(codec.contents().descriptors());
    } else {
        print_descriptors(codec.msgs().descriptors());
    }
}

pub(crate) fn decode_msg(codec: &Codec, value: Value) -> Result<()> {
    let msg = codec.decode_msg_tagged(value)?;
    println!("{msg:#?}");
    println!("{}", serde_json::to_string_pretty(&codec.encode_msg(&msg)?)?);
    Ok(())
}

pub(crate) fn decode_content(codec: &Codec, value: Value) -> Result<()> {
    let content = codec.decode_content_tagged(value)?;
    println!("{content:#?}");
    println!(
        "{}",
        serde_json::to_string_pretty(&codec.encode_content(&content)?)?
    );
    Ok(())
}

#[derive(clap::Parser)]
pub(crate) struct DecodeAnyOpt {
    /// Type URL, e.g. /cosmos.bank.v1beta1.MsgSend
    type_url: String,
    /// Encoded payload, base64 unless --hex is given
    payload: String,
    /// The payload is hex encoded
    #[clap(long)]
    hex: bool,
    /// Decode as proposal content instead of a message
    #[clap(long)]
    content: bool,
}

pub(crate) fn decode_any(
    codec: &Codec,
    DecodeAnyOpt {
        type_url,
        payload,
        hex,
        content,
    }: DecodeAnyOpt,
) -> Result<()> {
    let bytes = if hex {
        hex::decode(&payload).context("Invalid hex payload")?
    } else {
        base64::engine::general_purpose::STANDARD
            .decode(&payload)
            .context("Invalid base64 payload")?
    };
    let envelope = if content {
        let content = codec.decode_content_any(&type_url, &bytes)?;
        println!("{content:#?}");
        codec.encode_content(&content)?
    } else {
        let msg = codec.decode_msg_any(&type_url, &bytes)?;
        println!("{msg:#?}");
        codec.encode_msg(&msg)?
    };
    println!("{}", serde_json::to_string_pretty(&envelope)?);
    Ok(())
}

pub(crate) fn encode_msg(codec: &Codec, value: Value, hex: bool) -> Result<()> {
    let msg = codec.decode_msg_tagged(value)?;
    let any = codec.pack_msg(&msg)?;
    println!("{}", any.type_url);
    if hex {
        println!("{}", hex::encode(&any.value));
    } else {
        println!(
            "{}",
            base64::engine::general_purpose::STANDARD.encode(&any.value)
        );
    }
    Ok(())
}
