//! Builders for the two instructions the board program exposes.

use borsh::BorshSerialize;
use solana_instruction::{
    AccountMeta,
    Instruction,
};
use solana_sdk::pubkey::Pubkey;

use crate::{
    discriminator::DISCRIMINATOR_LEN,
    BoardSchema,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "snake_case")]
pub enum GifBoardInstruction {
    /// Creates and initializes the board account. Both the board account and the user sign.
    StartStuffOff,
    /// Appends a link to the board, recording the signing user as its submitter.
    AddGif,
}

impl GifBoardInstruction {
    pub fn discriminator(&self, schema: &BoardSchema) -> [u8; DISCRIMINATOR_LEN] {
        match self {
            Self::StartStuffOff => schema.initialize_discriminator,
            Self::AddGif => schema.append_discriminator,
        }
    }
}

#[derive(BorshSerialize)]
struct AddGifArgs<'a> {
    gif_link: &'a str,
}

pub fn start_stuff_off(schema: &BoardSchema, base_account: &Pubkey, user: &Pubkey) -> Instruction {
    Instruction::new_with_bytes(
        schema.program_id,
        &GifBoardInstruction::StartStuffOff.discriminator(schema),
        vec![
            AccountMeta::new(*base_account, true),
            AccountMeta::new(*user, true),
            AccountMeta::new_readonly(solana_system_interface::program::ID, false),
        ],
    )
}

pub fn add_gif(
    schema: &BoardSchema,
    base_account: &Pubkey,
    user: &Pubkey,
    gif_link: &str,
) -> Instruction {
    let mut data = GifBoardInstruction::AddGif.discriminator(schema).to_vec();
    // Writing into a `Vec` can't fail.
    let _ = AddGifArgs { gif_link }.serialize(&mut data);

    Instruction::new_with_bytes(
        schema.program_id,
        &data,
        vec![
            AccountMeta::new(*base_account, false),
            AccountMeta::new_readonly(*user, true),
        ],
    )
}
