use anyhow::Result;
use ethers::types::H160;

use crate::command_line::Settings;
use crate::deploy::Deployer;

/// Runs the migration once: resolve the optional Muon dependency address, then
/// deploy the feargame contract and return its address.
pub async fn migrate<D: Deployer + Sync>(settings: &Settings, deployer: &D) -> Result<H160> {
    if let Some(muon_address) = resolve_muon_address(settings, deployer).await? {
        println!("MuonV01 address:{}", muon_address);
    }

    let feargame_address = deployer.deploy_feargame().await?;
    println!("MuonFeargame address:{:?}", feargame_address);

    Ok(feargame_address)
}

/// A supplied `--muonAddress` is used as-is; `--deployMuon` deploys the MuonV01
/// contract first and takes its address. With neither option the dependency is
/// left unresolved and only the feargame contract is deployed.
async fn resolve_muon_address<D: Deployer + Sync>(
    settings: &Settings,
    deployer: &D,
) -> Result<Option<String>> {
    if let Some(address) = &settings.muon_address {
        return Ok(Some(address.clone()));
    }

    if settings.deploy_muon {
        let deployed = deployer.deploy_muon().await?;
        return Ok(Some(format!("{:?}", deployed)));
    }

    Ok(None)
}
