use std::fmt;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AccountDecodeError {
    InvalidOwner,
    InsufficientByteLength,
    ExcessByteLength,
    InvalidAccountDiscriminant,
    MalformedData(String),
}

impl From<&AccountDecodeError> for &'static str {
    fn from(value: &AccountDecodeError) -> Self {
        match value {
            AccountDecodeError::InvalidOwner => "Account isn't owned by the gif board program",
            AccountDecodeError::InsufficientByteLength => "Account data is too short",
            AccountDecodeError::ExcessByteLength => "Account data is larger than a board account",
            AccountDecodeError::InvalidAccountDiscriminant => "Invalid account discriminant",
            AccountDecodeError::MalformedData(_) => "Account data couldn't be deserialized",
        }
    }
}

impl fmt::Display for AccountDecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg: &'static str = self.into();
        match self {
            Self::MalformedData(reason) => write!(f, "{msg}: {reason}"),
            _ => f.write_str(msg),
        }
    }
}

impl std::error::Error for AccountDecodeError {}

#[derive(Debug)]
pub enum IdlError {
    Parse(serde_json::Error),
    MissingProgramAddress,
    InvalidProgramAddress(String),
    MissingInstruction(&'static str),
    MissingAccount(&'static str),
    UnexpectedArguments(&'static str),
}

impl fmt::Display for IdlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "Couldn't parse the IDL: {e}"),
            Self::MissingProgramAddress => f.write_str("IDL has no `metadata.address`"),
            Self::InvalidProgramAddress(address) => {
                write!(f, "IDL program address `{address}` isn't a valid pubkey")
            }
            Self::MissingInstruction(name) => write!(f, "IDL has no `{name}` instruction"),
            Self::MissingAccount(name) => write!(f, "IDL has no `{name}` account"),
            Self::UnexpectedArguments(name) => {
                write!(f, "IDL instruction `{name}` has unexpected arguments")
            }
        }
    }
}

impl std::error::Error for IdlError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for IdlError {
    fn from(e: serde_json::Error) -> Self {
        IdlError::Parse(e)
    }
}
