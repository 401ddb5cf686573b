use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use ethers::{
    middleware::SignerMiddleware,
    providers::{Http, Middleware, Provider},
    signers::{LocalWallet, Signer},
    types::H160,
    utils::hex,
};

use crate::contracts::{MuonFeargame, MuonV01};

/// The slice of the deployment framework this tool consumes: submit one
/// contract-creation transaction per artifact and wait for its address.
#[async_trait]
pub trait Deployer {
    async fn deploy_feargame(&self) -> Result<H160>;
    async fn deploy_muon(&self) -> Result<H160>;
}

pub struct Deploy {
    client: Arc<SignerMiddleware<Provider<Http>, LocalWallet>>,
}

impl Deploy {
    pub async fn new(rpc: &str, sk: &str) -> Result<Self> {
        let wallet = LocalWallet::from_bytes(&hex::decode(sk.strip_prefix("0x").unwrap_or(sk))?)?;
        let provider = Provider::<Http>::try_from(rpc)?;

        let chain_id = provider.get_chainid().await?.as_u64();
        log::info!("rpc:{} chain id:{}", rpc, chain_id);

        let client = Arc::new(SignerMiddleware::new(
            provider,
            wallet.with_chain_id(chain_id),
        ));

        Ok(Self { client })
    }
}

#[async_trait]
impl Deployer for Deploy {
    async fn deploy_feargame(&self) -> Result<H160> {
        let contract = MuonFeargame::deploy(self.client.clone(), ())?
            .legacy()
            .send()
            .await?;

        Ok(contract.address())
    }

    async fn deploy_muon(&self) -> Result<H160> {
        let contract = MuonV01::deploy(self.client.clone(), ())?
            .legacy()
            .send()
            .await?;

        Ok(contract.address())
    }
}
