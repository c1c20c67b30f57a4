//! Chains the dashboard can filter by.

use serde::Serialize;

/// Display metadata for a supported chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChainInfo {
    /// DexScreener chain id.
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    /// GeckoTerminal network slug.
    pub gecko_network: &'static str,
}

pub const SUPPORTED_CHAINS: &[ChainInfo] = &[
    ChainInfo {
        id: "ethereum",
        name: "Ethereum",
        icon: "/chains/ethereum.svg",
        gecko_network: "eth",
    },
    ChainInfo {
        id: "solana",
        name: "Solana",
        icon: "/chains/solana.svg",
        gecko_network: "solana",
    },
    ChainInfo {
        id: "base",
        name: "Base",
        icon: "/chains/base.svg",
        gecko_network: "base",
    },
    ChainInfo {
        id: "pulsechain",
        name: "PulseChain",
        icon: "/chains/pulsechain.svg",
        gecko_network: "pulsechain",
    },
    ChainInfo {
        id: "quai",
        name: "Quai",
        icon: "/chains/quai.svg",
        gecko_network: "quai",
    },
    ChainInfo {
        id: "arbitrum",
        name: "Arbitrum",
        icon: "/chains/arbitrum.svg",
        gecko_network: "arbitrum",
    },
    ChainInfo {
        id: "polygon",
        name: "Polygon",
        icon: "/chains/polygon.svg",
        gecko_network: "polygon_pos",
    },
    ChainInfo {
        id: "bsc",
        name: "BSC",
        icon: "/chains/bsc.svg",
        gecko_network: "bsc",
    },
    ChainInfo {
        id: "avalanche",
        name: "Avalanche",
        icon: "/chains/avalanche.svg",
        gecko_network: "avax",
    },
    ChainInfo {
        id: "optimism",
        name: "Optimism",
        icon: "/chains/optimism.svg",
        gecko_network: "optimism",
    },
];

pub fn chain_info(id: &str) -> Option<&'static ChainInfo> {
    SUPPORTED_CHAINS.iter().find(|c| c.id == id)
}

pub fn is_supported_chain(id: &str) -> bool {
    chain_info(id).is_some()
}

/// GeckoTerminal network slug for a DexScreener chain id. Unknown ids pass through.
pub fn gecko_network(id: &str) -> &str {
    chain_info(id).map_or(id, |c| c.gecko_network)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_lookup() {
        let info = chain_info("bsc").unwrap();
        assert_eq!(info.name, "BSC");
        assert!(chain_info("Ethereum").is_none());
    }

    #[test]
    fn test_gecko_network_slugs() {
        assert_eq!(gecko_network("ethereum"), "eth");
        assert_eq!(gecko_network("polygon"), "polygon_pos");
        assert_eq!(gecko_network("avalanche"), "avax");
        assert_eq!(gecko_network("solana"), "solana");
        assert_eq!(gecko_network("zksync"), "zksync");
    }

    #[test]
    fn test_chain_ids_unique() {
        for (i, a) in SUPPORTED_CHAINS.iter().enumerate() {
            assert!(SUPPORTED_CHAINS[i + 1..].iter().all(|b| b.id != a.id));
        }
    }
}
