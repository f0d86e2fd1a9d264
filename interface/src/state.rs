//! Layout of the board account: an 8 byte discriminator followed by the borsh encoded
//! [`BaseAccount`]. The account is allocated with spare room, so trailing bytes are ignored.

use borsh::{
    BorshDeserialize,
    BorshSerialize,
};
use solana_sdk::pubkey::Pubkey;

use crate::{
    discriminator::DISCRIMINATOR_LEN,
    error::AccountDecodeError,
    BoardSchema,
};

/// Bytes allocated for the board account when it is initialized.
pub const BASE_ACCOUNT_SPACE: usize = 9000;

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct BaseAccount {
    pub total_gifs: u64,
    pub gif_list: Vec<ItemStruct>,
}

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct ItemStruct {
    pub gif_link: String,
    pub user_address: [u8; 32],
}

impl ItemStruct {
    pub fn user(&self) -> Pubkey {
        Pubkey::new_from_array(self.user_address)
    }
}

impl BaseAccount {
    /// Decodes the board account from raw account fields, checking the owner and discriminator.
    pub fn try_from_owner_and_data(
        schema: &BoardSchema,
        owner: &Pubkey,
        data: &[u8],
    ) -> Result<Self, AccountDecodeError> {
        if *owner != schema.program_id {
            return Err(AccountDecodeError::InvalidOwner);
        }

        if data.len() < DISCRIMINATOR_LEN {
            return Err(AccountDecodeError::InsufficientByteLength);
        }
        if data.len() > BASE_ACCOUNT_SPACE {
            return Err(AccountDecodeError::ExcessByteLength);
        }

        let (discriminator, mut body) = data.split_at(DISCRIMINATOR_LEN);
        if discriminator != schema.account_discriminator {
            return Err(AccountDecodeError::InvalidAccountDiscriminant);
        }

        BaseAccount::deserialize(&mut body)
            .map_err(|e| AccountDecodeError::MalformedData(e.to_string()))
    }

    /// Encodes the account the way the program stores it, without the trailing allocation.
    pub fn to_account_data(&self, schema: &BoardSchema) -> Vec<u8> {
        let mut data = schema.account_discriminator.to_vec();
        // Writing into a `Vec` can't fail.
        let _ = self.serialize(&mut data);
        data
    }
}
