//! The networks an opBNB node may be tracking.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::L1ChainId;

/// Network identified by its chain ID.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Network {
    /// BNB Smart Chain mainnet.
    BscMainnet,
    /// BNB Smart Chain testnet (Chapel).
    BscTestnet,
    /// opBNB mainnet.
    OpBnbMainnet,
    /// opBNB testnet.
    OpBnbTestnet,
    /// Unknown network type.
    Unknown,
}

impl FromStr for Network {
    type Err = String;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        Ok(match string {
            "bscMainnet" => Self::BscMainnet,
            "bscTestnet" => Self::BscTestnet,
            "opBnbMainnet" => Self::OpBnbMainnet,
            "opBnbTestnet" => Self::OpBnbTestnet,
            another => return Err(another.to_owned()),
        })
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BscMainnet => write!(f, "bscMainnet"),
            Self::BscTestnet => write!(f, "bscTestnet"),
            Self::OpBnbMainnet => write!(f, "opBnbMainnet"),
            Self::OpBnbTestnet => write!(f, "opBnbTestnet"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

impl Network {
    /// Returns the network for the given chain ID.
    pub fn from_chain_id(chain_id: L1ChainId) -> Self {
        match *chain_id {
            56 => Self::BscMainnet,
            97 => Self::BscTestnet,
            204 => Self::OpBnbMainnet,
            5611 => Self::OpBnbTestnet,
            _ => Self::Unknown,
        }
    }

    /// Returns the chain ID of the network, if it is known.
    pub fn chain_id(self) -> Option<L1ChainId> {
        match self {
            Self::BscMainnet => Some(L1ChainId(56)),
            Self::BscTestnet => Some(L1ChainId(97)),
            Self::OpBnbMainnet => Some(L1ChainId(204)),
            Self::OpBnbTestnet => Some(L1ChainId(5611)),
            Self::Unknown => None,
        }
    }
}
