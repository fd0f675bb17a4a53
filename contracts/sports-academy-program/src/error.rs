use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum SportsAcademyError {
    NotAdmin = 1,
    InvalidAmount = 2,
    InsufficientVaultBalance = 3,
    PlayerNotRegistered = 4,
    PlayerAlreadySold = 5,
    DuplicateReference = 6,
    PurchaseNotFound = 7,
    PurchaseAlreadyApproved = 8,
    PlayerMismatch = 9,
    AmountMismatch = 10,
    NotInitialized = 11,
    IdentifierTooLong = 12,
    Overflow = 13,
}

impl SportsAcademyError {
    /// Human-readable text for the error, as shown to clients.
    pub const fn message(&self) -> &'static str {
        match self {
            Self::NotAdmin => "Only the admin can call this function",
            Self::InvalidAmount => "Amount must be positive",
            Self::InsufficientVaultBalance => "Insufficient funds in the vault",
            Self::PlayerNotRegistered => "Player is not registered",
            Self::PlayerAlreadySold => "Player has already been sold",
            Self::DuplicateReference => "Reference number already in use",
            Self::PurchaseNotFound => "Player purchase not found",
            Self::PurchaseAlreadyApproved => "Player purchase already approved",
            Self::PlayerMismatch => "Player does not match the purchase",
            Self::AmountMismatch => "Deposit must equal the purchase amount",
            Self::NotInitialized => "Contract not initialized",
            Self::IdentifierTooLong => "Identifier must be at most 31 bytes",
            Self::Overflow => "Arithmetic overflow",
        }
    }
}
