use clap::ValueEnum;

/// Network whose bundled seed endpoints bootstrap the registry when no
/// explicit seed is configured.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Network {
    Mainnet,
    Testnet,
}

impl Network {
    pub fn default_seeds(self) -> Vec<String> {
        let seeds: &[&str] = match self {
            Network::Mainnet => &[
                "seed1.mainnet.example.com:8545",
                "seed2.mainnet.example.com:8545",
            ],
            Network::Testnet => &["seed1.testnet.example.com:8545"],
        };
        seeds.iter().map(|s| s.to_string()).collect()
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Network::Mainnet => f.write_str("mainnet"),
            Network::Testnet => f.write_str("testnet"),
        }
    }
}
