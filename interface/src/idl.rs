//! Loads the program's interface description (an Anchor IDL) and checks that it describes the
//! program this client knows how to talk to.

use std::str::FromStr;

use serde::Deserialize;
use serde_json::Value;
use solana_sdk::pubkey::Pubkey;

use crate::{
    discriminator::{
        self,
        Discriminator,
    },
    error::IdlError,
};

pub const INITIALIZE_INSTRUCTION: &str = "startStuffOff";
pub const APPEND_INSTRUCTION: &str = "addGif";
pub const BOARD_ACCOUNT: &str = "BaseAccount";

#[derive(Debug, Clone, Deserialize)]
pub struct Idl {
    pub version: Option<String>,
    pub name: String,
    #[serde(default)]
    pub instructions: Vec<IdlInstruction>,
    #[serde(default)]
    pub accounts: Vec<IdlTypeDef>,
    #[serde(default)]
    pub types: Vec<IdlTypeDef>,
    pub metadata: Option<IdlMetadata>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IdlInstruction {
    pub name: String,
    #[serde(default)]
    pub accounts: Vec<IdlAccountItem>,
    #[serde(default)]
    pub args: Vec<IdlField>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdlAccountItem {
    pub name: String,
    #[serde(default)]
    pub is_mut: bool,
    #[serde(default)]
    pub is_signer: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IdlField {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Value,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IdlTypeDef {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Value,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IdlMetadata {
    pub address: Option<String>,
}

impl Idl {
    pub fn from_json(json: &str) -> Result<Self, IdlError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn instruction(&self, name: &str) -> Option<&IdlInstruction> {
        self.instructions.iter().find(|ix| ix.name == name)
    }

    pub fn account(&self, name: &str) -> Option<&IdlTypeDef> {
        self.accounts.iter().find(|acc| acc.name == name)
    }
}

/// The validated subset of the IDL the client relies on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSchema {
    /// The on-chain program's name, e.g. `myepicproject`.
    pub name: String,
    pub program_id: Pubkey,
    pub initialize_discriminator: Discriminator,
    pub append_discriminator: Discriminator,
    pub account_discriminator: Discriminator,
}

impl BoardSchema {
    pub fn from_json(json: &str) -> Result<Self, IdlError> {
        Self::try_from(Idl::from_json(json)?)
    }
}

impl TryFrom<Idl> for BoardSchema {
    type Error = IdlError;

    fn try_from(idl: Idl) -> Result<Self, Self::Error> {
        let address = idl
            .metadata
            .as_ref()
            .and_then(|metadata| metadata.address.as_deref())
            .ok_or(IdlError::MissingProgramAddress)?;
        let program_id = Pubkey::from_str(address)
            .map_err(|_| IdlError::InvalidProgramAddress(address.to_string()))?;

        let initialize = idl
            .instruction(INITIALIZE_INSTRUCTION)
            .ok_or(IdlError::MissingInstruction(INITIALIZE_INSTRUCTION))?;
        if !initialize.args.is_empty() {
            return Err(IdlError::UnexpectedArguments(INITIALIZE_INSTRUCTION));
        }

        let append = idl
            .instruction(APPEND_INSTRUCTION)
            .ok_or(IdlError::MissingInstruction(APPEND_INSTRUCTION))?;
        match append.args.as_slice() {
            [arg] if arg.ty == Value::String("string".into()) => {}
            _ => return Err(IdlError::UnexpectedArguments(APPEND_INSTRUCTION)),
        }

        idl.account(BOARD_ACCOUNT)
            .ok_or(IdlError::MissingAccount(BOARD_ACCOUNT))?;

        Ok(Self {
            name: idl.name,
            program_id,
            initialize_discriminator: discriminator::instruction(INITIALIZE_INSTRUCTION),
            append_discriminator: discriminator::instruction(APPEND_INSTRUCTION),
            account_discriminator: discriminator::account(BOARD_ACCOUNT),
        })
    }
}
