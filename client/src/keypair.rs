//! Reads keypair files in either of the two formats the board's tooling produces: the Solana CLI
//! format (a JSON array of the 64 secret key bytes) or a web3.js `Keypair` serialized with
//! `JSON.stringify`, whose secret key is an object keyed by byte index.

use std::{
    collections::BTreeMap,
    fs,
    path::Path,
};

use anyhow::{
    bail,
    Context,
};
use serde::Deserialize;
use solana_sdk::signature::Keypair;

const SECRET_KEY_LEN: usize = 64;

#[derive(Deserialize)]
#[serde(untagged)]
enum KeypairFile {
    Bytes(Vec<u8>),
    Web3 {
        #[serde(rename = "_keypair")]
        keypair: Web3Keypair,
    },
}

#[derive(Deserialize)]
struct Web3Keypair {
    /// Keyed by byte index. Untagged enums buffer map keys as strings, so they're parsed here.
    #[serde(rename = "secretKey")]
    secret_key: BTreeMap<String, u8>,
}

impl Web3Keypair {
    fn into_bytes(self) -> anyhow::Result<Vec<u8>> {
        let indexed = self
            .secret_key
            .into_iter()
            .map(|(index, byte)| {
                index
                    .parse::<usize>()
                    .map(|index| (index, byte))
                    .with_context(|| format!("Invalid secret key index `{index}`"))
            })
            .collect::<anyhow::Result<BTreeMap<usize, u8>>>()?;

        // Indices must be exactly 0..len for the values to be the secret key in order.
        if !indexed.keys().copied().eq(0..indexed.len()) {
            bail!("Secret key indices aren't contiguous");
        }
        Ok(indexed.into_values().collect())
    }
}

pub fn read_keypair_file(path: impl AsRef<Path>) -> anyhow::Result<Keypair> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)
        .with_context(|| format!("Couldn't read keypair file {}", path.display()))?;
    keypair_from_json(&json).with_context(|| format!("Invalid keypair file {}", path.display()))
}

pub fn keypair_from_json(json: &str) -> anyhow::Result<Keypair> {
    let bytes = match serde_json::from_str(json).context("Unrecognized keypair format")? {
        KeypairFile::Bytes(bytes) => bytes,
        KeypairFile::Web3 { keypair } => keypair.into_bytes()?,
    };

    if bytes.len() != SECRET_KEY_LEN {
        bail!(
            "Expected {SECRET_KEY_LEN} secret key bytes, found {}",
            bytes.len()
        );
    }

    Keypair::try_from(bytes.as_slice()).map_err(|e| anyhow::anyhow!("Invalid secret key: {e}"))
}
