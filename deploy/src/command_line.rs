use anyhow::{anyhow, Result};

use crate::args::{self, ArgMap, ArgValue};
use crate::deploy::Deploy;
use crate::migrate;

const DEFAULT_RPC: &str = "http://127.0.0.1:8545";

/// Deployment settings derived from the argument map. Unrecognized keys stay in
/// the map and are ignored; extraction never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub rpc: String,
    pub sk: Option<String>,
    pub muon_address: Option<String>,
    pub deploy_muon: bool,
}

impl Settings {
    pub fn from_args(args: &ArgMap) -> Self {
        let text = |key: &str| {
            args.get(key)
                .and_then(ArgValue::as_text)
                .map(str::to_string)
        };

        Self {
            rpc: text("rpc").unwrap_or_else(|| DEFAULT_RPC.to_string()),
            sk: text("sk"),
            muon_address: text("muonAddress"),
            deploy_muon: args.contains_key("deployMuon"),
        }
    }
}

#[derive(Debug)]
pub struct CommandLine {
    args: ArgMap,
}

impl CommandLine {
    pub fn parse_from<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            args: args::parse(tokens),
        }
    }

    pub async fn execute(self) -> Result<()> {
        let settings = Settings::from_args(&self.args);
        let sk = settings
            .sk
            .as_deref()
            .ok_or_else(|| anyhow!("missing --sk=<hex signing key>"))?;

        let deployer = Deploy::new(&settings.rpc, sk).await?;
        migrate::migrate(&settings, &deployer).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(tokens: &[&str]) -> Settings {
        Settings::from_args(&args::parse(tokens.iter().copied()))
    }

    #[test]
    fn defaults_with_empty_map() {
        let settings = settings(&[]);

        assert_eq!(settings.rpc, DEFAULT_RPC);
        assert_eq!(settings.sk, None);
        assert_eq!(settings.muon_address, None);
        assert!(!settings.deploy_muon);
    }

    #[test]
    fn reads_known_options() {
        let settings = settings(&[
            "--rpc=http://node:8545",
            "--sk=0xabcd",
            "--muonAddress=0x1111111111111111111111111111111111111111",
        ]);

        assert_eq!(settings.rpc, "http://node:8545");
        assert_eq!(settings.sk.as_deref(), Some("0xabcd"));
        assert_eq!(
            settings.muon_address.as_deref(),
            Some("0x1111111111111111111111111111111111111111")
        );
    }

    #[test]
    fn bare_muon_address_flag_is_treated_as_unset() {
        let settings = settings(&["--muonAddress"]);
        assert_eq!(settings.muon_address, None);
    }

    #[test]
    fn deploy_muon_is_set_by_presence() {
        assert!(settings(&["--deployMuon"]).deploy_muon);
        assert!(!settings(&[]).deploy_muon);
    }

    #[test]
    fn unrecognized_options_are_ignored() {
        assert_eq!(settings(&["--network=mumbai", "--reset"]), settings(&[]));
    }
}
