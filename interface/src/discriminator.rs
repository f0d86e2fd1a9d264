//! Anchor-style 8 byte discriminators.

use sha2::{
    Digest,
    Sha256,
};

pub const DISCRIMINATOR_LEN: usize = 8;

pub type Discriminator = [u8; DISCRIMINATOR_LEN];

/// The discriminator prefixed to an instruction's data, derived from its snake_case name.
pub fn instruction(name: &str) -> Discriminator {
    hashed("global", &to_snake_case(name))
}

/// The discriminator at the start of an account's data, derived from its type name verbatim.
pub fn account(name: &str) -> Discriminator {
    hashed("account", name)
}

fn hashed(namespace: &str, name: &str) -> Discriminator {
    let digest = Sha256::digest(format!("{namespace}:{name}").as_bytes());
    let mut discriminator = [0u8; DISCRIMINATOR_LEN];
    discriminator.copy_from_slice(&digest[..DISCRIMINATOR_LEN]);
    discriminator
}

/// Converts an IDL (camelCase) identifier to the snake_case name the program was compiled with.
pub fn to_snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i != 0 && !out.ends_with('_') {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snake_case_names() {
        assert_eq!(to_snake_case("startStuffOff"), "start_stuff_off");
        assert_eq!(to_snake_case("addGif"), "add_gif");
        assert_eq!(to_snake_case("add_gif"), "add_gif");
        assert_eq!(to_snake_case("BaseAccount"), "base_account");
    }

    #[test]
    #[rustfmt::skip]
    fn known_discriminators() {
        assert_eq!(instruction("startStuffOff"), [0x7e, 0x36, 0x55, 0x21, 0xe2, 0x20, 0xc3, 0x20]);
        assert_eq!(instruction("start_stuff_off"), instruction("startStuffOff"));
        assert_eq!(instruction("addGif"), [0xab, 0x4a, 0x8d, 0x64, 0x21, 0x46, 0x57, 0x9b]);
        assert_eq!(account("BaseAccount"), [0x10, 0x5a, 0x82, 0xf2, 0x9f, 0x0a, 0xe8, 0x85]);
    }
}
