use bs58;
use solana_sdk::pubkey::Pubkey;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    #[error("Invalid Solana address format: {0}")]
    InvalidSolanaAddress(String),
}

pub fn validate_solana_address(address: &str) -> Result<(), ValidationError> {
    // Check if address is empty
    if address.trim().is_empty() {
        return Err(ValidationError::MissingParameter("address".to_string()));
    }

    // Decode base58 string
    let decoded = match bs58::decode(address).into_vec() {
        Ok(bytes) => bytes,
        Err(_) => return Err(ValidationError::InvalidSolanaAddress(address.to_string())),
    };

    // Validate length (Solana addresses are 32 bytes)
    if decoded.len() != 32 {
        return Err(ValidationError::InvalidSolanaAddress(address.to_string()));
    }

    Ok(())
}

/// A monitored account address, validated once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address(Pubkey);

impl Address {
    pub fn parse(address: &str) -> Result<Self, ValidationError> {
        validate_solana_address(address)?;

        let pubkey = Pubkey::from_str(address)
            .map_err(|_| ValidationError::InvalidSolanaAddress(address.to_string()))?;

        Ok(Self(pubkey))
    }

    pub fn pubkey(&self) -> &Pubkey {
        &self.0
    }
}

impl FromStr for Address {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_ADDRESSES: [&str; 4] = [
        "9xQeWvG816bUx9EPjHmaT23yvVM2ZWbrrpZb9PusVFin",
        "9ii1FEiWSgDzXAbwj2oTmJXzkfCw78mnHwPQv9WQ5iTn",
        "AhAkbf3cGD6HkFod2rBEE8mie8ks9p7vuss6WGkUFAM9",
        "11111111111111111111111111111111",
    ];

    #[test]
    fn valid_addresses_round_trip() {
        for raw in VALID_ADDRESSES {
            let address = Address::parse(raw).expect("address should parse");
            assert_eq!(address.to_string(), raw);

            let reparsed: Address = address.to_string().parse().unwrap();
            assert_eq!(reparsed, address);
        }
    }

    #[test]
    fn empty_address_is_missing() {
        assert_eq!(
            Address::parse("   "),
            Err(ValidationError::MissingParameter("address".to_string()))
        );
    }

    #[test]
    fn malformed_addresses_are_rejected() {
        for raw in [
            "not-a-key",
            "0OIl0OIl0OIl0OIl0OIl0OIl0OIl0OIl", // characters outside the base58 alphabet
            "9xQeWvG816bUx9EPjHmaT23yvVM2ZWbrrpZb9Pus", // too short
            "9xQeWvG816bUx9EPjHmaT23yvVM2ZWbrrpZb9PusVFin9xQe", // too long
        ] {
            assert!(
                matches!(Address::parse(raw), Err(ValidationError::InvalidSolanaAddress(_))),
                "{raw} should be rejected"
            );
        }
    }
}
