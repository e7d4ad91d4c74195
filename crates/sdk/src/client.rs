//! The SDK facade.

use crate::config::SdkConfig;
use crate::error::SdkError;
use francium_data::providers::CoinGeckoProvider;
use francium_data::{PriceProvider, load_registry};
use francium_domain::entities::{
    AmmReserves, FarmPoolSnapshot, LendingPoolSnapshot, PoolDescriptor, UserLendingSnapshot,
};
use francium_domain::metrics::{
    self, FarmPoolTvl, LendingPoolTvl, PoolTvl, UserFarmPosition, UserLendingPosition,
};
use francium_domain::registry::PoolRegistry;
use francium_domain::value_objects::PriceMap;
use francium_protocols::rpc::RpcProvider;
use francium_protocols::{ChainReader, Pubkey, SolanaChainReader};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Aggregates pool and user metrics from chain state and price quotes.
///
/// Pools are read one after another; a chain error on any pool aborts the
/// whole call. A missing price never does: the affected value is zero.
#[derive(Clone)]
pub struct FranciumSdk {
    reader: Arc<dyn ChainReader>,
    prices: Arc<dyn PriceProvider>,
    registry: Arc<PoolRegistry>,
}

impl FranciumSdk {
    pub fn new(
        reader: Arc<dyn ChainReader>,
        prices: Arc<dyn PriceProvider>,
        registry: PoolRegistry,
    ) -> Self {
        Self {
            reader,
            prices,
            registry: Arc::new(registry),
        }
    }

    /// Connects to Solana RPC and CoinGecko as configured.
    ///
    /// # Errors
    /// Returns [`SdkError::Config`] if no registry path is set or the
    /// commitment is unknown, and [`SdkError::Registry`] if the registry
    /// cannot be loaded.
    pub fn from_config(config: &SdkConfig) -> Result<Self, SdkError> {
        let path = config
            .registry_path
            .as_deref()
            .ok_or_else(|| SdkError::Config("registry path is not set".to_string()))?;
        let registry = load_registry(path)?;

        let provider = Arc::new(RpcProvider::new(config.rpc_config()?));
        let reader = SolanaChainReader::new(provider, &registry.programs)?;
        let prices = CoinGeckoProvider::new(config.price_api_url.as_str(), config.timeout())?;
        info!(rpc = %config.rpc_url, commitment = %config.commitment, "Francium SDK ready");

        Ok(Self::new(Arc::new(reader), Arc::new(prices), registry))
    }

    /// Replaces the price source.
    pub fn with_price_provider(mut self, prices: Arc<dyn PriceProvider>) -> Self {
        self.prices = prices;
        self
    }

    pub fn registry(&self) -> &PoolRegistry {
        &self.registry
    }

    /// Current token quotes, keyed by symbol.
    ///
    /// # Errors
    /// Returns [`SdkError::Price`] if the provider fails.
    pub async fn token_prices(&self) -> Result<PriceMap, SdkError> {
        let prices = self.prices.token_prices().await?;
        debug!(quoted = prices.len(), "Fetched token prices");
        Ok(prices)
    }

    /// Snapshots of every registered lending pool, in registry order.
    ///
    /// # Errors
    /// Returns [`SdkError::Chain`] on the first failed read.
    pub async fn lending_pool_info(&self) -> Result<Vec<LendingPoolSnapshot>, SdkError> {
        let mut snapshots = Vec::with_capacity(self.registry.lending_pools().len());
        for pool in self.registry.lending_pools() {
            snapshots.push(self.reader.lending_pool(pool).await?);
        }
        Ok(snapshots)
    }

    /// Snapshots of every active farm, in registry order.
    ///
    /// # Errors
    /// Returns [`SdkError::Chain`] on the first failed read.
    pub async fn farm_pool_info(&self) -> Result<Vec<FarmPoolSnapshot>, SdkError> {
        let farms = self.registry.active_farm_pools();
        let mut snapshots = Vec::with_capacity(farms.len());
        for farm in farms {
            snapshots.push(self.reader.farm_pool(farm).await?);
        }
        Ok(snapshots)
    }

    /// LP token prices of every active farm's AMM, keyed by price key.
    ///
    /// AMMs with no LP supply are left out.
    ///
    /// # Errors
    /// Returns [`SdkError::Chain`] if reserves cannot be read.
    pub async fn farm_lp_prices(&self, prices: &PriceMap) -> Result<PriceMap, SdkError> {
        let mut lp_prices = PriceMap::new();
        for farm in self.registry.active_farm_pools() {
            if lp_prices.contains(&farm.amm.price_key()) {
                continue;
            }
            let reserves = self.reader.amm_reserves(&farm.amm).await?;
            insert_lp_price(&mut lp_prices, &reserves, prices)?;
        }
        Ok(lp_prices)
    }

    /// TVL, utilization and rates of every lending pool.
    ///
    /// # Errors
    /// Returns [`SdkError::Chain`] or [`SdkError::Price`] if a read fails.
    pub async fn lending_pool_tvl(&self) -> Result<Vec<LendingPoolTvl>, SdkError> {
        let prices = self.token_prices().await?;
        let mut tvls = Vec::new();
        for snapshot in self.lending_pool_info().await? {
            tvls.push(lending_tvl(&snapshot, &prices)?);
        }
        info!(pools = tvls.len(), "Computed lending pool TVL");
        Ok(tvls)
    }

    /// TVL of every active farm.
    ///
    /// # Errors
    /// Returns [`SdkError::Chain`] or [`SdkError::Price`] if a read fails.
    pub async fn farm_pool_tvl(&self) -> Result<Vec<FarmPoolTvl>, SdkError> {
        let prices = self.token_prices().await?;
        let lp_prices = self.farm_lp_prices(&prices).await?;
        let mut tvls = Vec::new();
        for snapshot in self.farm_pool_info().await? {
            tvls.push(metrics::farm_pool_tvl(&snapshot, &lp_prices)?);
        }
        info!(farms = tvls.len(), "Computed farm pool TVL");
        Ok(tvls)
    }

    /// `owner`'s deposits in every lending pool, empty ones included.
    ///
    /// # Errors
    /// Returns [`SdkError::Chain`] or [`SdkError::Price`] if a read fails.
    pub async fn user_lending_positions(
        &self,
        owner: &Pubkey,
    ) -> Result<Vec<UserLendingPosition>, SdkError> {
        let prices = self.token_prices().await?;
        let mut positions = Vec::new();
        for pool in self.registry.lending_pools() {
            let snapshot = self.reader.lending_pool(pool).await?;
            let user = self.reader.user_lending(pool, &snapshot, owner).await?;
            if holds_unpriced_shares(&user, &prices) {
                warn!(pool = %user.pool, "No price quote for held shares, valuing at zero");
            }
            positions.push(metrics::user_lending_position(&snapshot, &user, &prices)?);
        }
        info!(owner = %owner, pools = positions.len(), "Computed user lending positions");
        Ok(positions)
    }

    /// `owner`'s position in every active farm, `None` where there is none.
    ///
    /// # Errors
    /// Returns [`SdkError::Chain`] or [`SdkError::Price`] if a read fails.
    pub async fn user_farm_positions(
        &self,
        owner: &Pubkey,
    ) -> Result<Vec<Option<UserFarmPosition>>, SdkError> {
        let prices = self.token_prices().await?;
        let mut lp_prices = PriceMap::new();
        let mut positions = Vec::new();
        for farm in self.registry.active_farm_pools() {
            let Some(user) = self.reader.user_farm(farm, owner).await? else {
                debug!(farm = %farm.id, owner = %owner, "No farm position");
                positions.push(None);
                continue;
            };
            let snapshot = self.reader.farm_pool(farm).await?;
            let reserves = self.reader.amm_reserves(&farm.amm).await?;
            if !lp_prices.contains(&reserves.price_key) {
                insert_lp_price(&mut lp_prices, &reserves, &prices)?;
            }
            positions.push(Some(metrics::user_farm_position(
                &snapshot, &reserves, &user, &lp_prices, &prices,
            )?));
        }
        let open = positions.iter().flatten().count();
        info!(owner = %owner, farms = positions.len(), open, "Computed user farm positions");
        Ok(positions)
    }

    /// TVL of a single pool by id.
    ///
    /// # Errors
    /// Returns [`SdkError::Domain`] if no lending pool or active farm has
    /// this id.
    pub async fn pool_tvl(&self, id: &str) -> Result<PoolTvl, SdkError> {
        let prices = self.token_prices().await?;
        match self.registry.find(id)? {
            PoolDescriptor::Lending(pool) => {
                let snapshot = self.reader.lending_pool(&pool).await?;
                Ok(PoolTvl::Lending(lending_tvl(&snapshot, &prices)?))
            }
            PoolDescriptor::Farm(farm) => {
                let snapshot = self.reader.farm_pool(&farm).await?;
                let reserves = self.reader.amm_reserves(&farm.amm).await?;
                let mut lp_prices = PriceMap::new();
                insert_lp_price(&mut lp_prices, &reserves, &prices)?;
                Ok(PoolTvl::Farm(metrics::farm_pool_tvl(&snapshot, &lp_prices)?))
            }
        }
    }
}

fn lending_tvl(snapshot: &LendingPoolSnapshot, prices: &PriceMap) -> Result<LendingPoolTvl, SdkError> {
    warn_if_unpriced(prices, &snapshot.pool);
    let tvl = metrics::lending_pool_tvl(snapshot, prices)?;
    debug!(
        pool = %tvl.id,
        utilization = %tvl.utilization,
        apr = %tvl.apr,
        tvl = %tvl.liquidity_locked,
        "Lending pool TVL"
    );
    Ok(tvl)
}

fn insert_lp_price(
    lp_prices: &mut PriceMap,
    reserves: &AmmReserves,
    prices: &PriceMap,
) -> Result<(), SdkError> {
    warn_if_unpriced(prices, &reserves.token_a);
    warn_if_unpriced(prices, &reserves.token_b);
    match metrics::lp_price(reserves, prices)? {
        Some(price) => {
            debug!(amm = %reserves.price_key, %price, "LP price");
            lp_prices.insert(reserves.price_key.as_str(), price);
        }
        None => warn!(amm = %reserves.price_key, "No LP supply, LP tokens valued at zero"),
    }
    Ok(())
}

fn holds_unpriced_shares(user: &UserLendingSnapshot, prices: &PriceMap) -> bool {
    !user.total_shares().is_zero() && !prices.contains(&user.pool)
}

fn warn_if_unpriced(prices: &PriceMap, symbol: &str) {
    if !prices.contains(symbol) {
        warn!(symbol, "No price quote, valuing at zero");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use francium_data::providers::FixedPriceProvider;
    use francium_domain::DomainError;
    use francium_domain::entities::{
        AmmDescriptor, FarmPoolDescriptor, LendingPoolDescriptor, UserFarmSnapshot,
    };
    use francium_domain::enums::AmmKind;
    use francium_domain::registry::ProgramIds;
    use francium_domain::value_objects::Amount;
    use francium_protocols::ChainError;
    use primitive_types::U256;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;

    /// Chain state held in memory. Only `owner` has user accounts.
    struct MemoryChain {
        owner: Pubkey,
        lending: HashMap<String, LendingPoolSnapshot>,
        farms: HashMap<String, FarmPoolSnapshot>,
        reserves: HashMap<String, AmmReserves>,
        user_lending: HashMap<String, UserLendingSnapshot>,
        user_farms: HashMap<String, UserFarmSnapshot>,
    }

    #[async_trait]
    impl ChainReader for MemoryChain {
        async fn lending_pool(
            &self,
            pool: &LendingPoolDescriptor,
        ) -> Result<LendingPoolSnapshot, ChainError> {
            self.lending
                .get(&pool.id)
                .cloned()
                .ok_or_else(|| ChainError::AccountNotFound(pool.address.clone()))
        }

        async fn farm_pool(
            &self,
            farm: &FarmPoolDescriptor,
        ) -> Result<FarmPoolSnapshot, ChainError> {
            self.farms
                .get(&farm.id)
                .cloned()
                .ok_or_else(|| ChainError::AccountNotFound(farm.strategy.clone()))
        }

        async fn amm_reserves(&self, amm: &AmmDescriptor) -> Result<AmmReserves, ChainError> {
            self.reserves
                .get(&amm.price_key())
                .cloned()
                .ok_or_else(|| ChainError::AccountNotFound(amm.lp_mint.clone()))
        }

        async fn user_lending(
            &self,
            pool: &LendingPoolDescriptor,
            _snapshot: &LendingPoolSnapshot,
            owner: &Pubkey,
        ) -> Result<UserLendingSnapshot, ChainError> {
            Ok(self
                .user_lending
                .get(&pool.id)
                .filter(|_| *owner == self.owner)
                .cloned()
                .unwrap_or_else(|| UserLendingSnapshot::empty(&pool.id)))
        }

        async fn user_farm(
            &self,
            farm: &FarmPoolDescriptor,
            owner: &Pubkey,
        ) -> Result<Option<UserFarmSnapshot>, ChainError> {
            Ok(self
                .user_farms
                .get(&farm.id)
                .filter(|_| *owner == self.owner)
                .cloned())
        }
    }

    fn lending(id: &str) -> LendingPoolDescriptor {
        LendingPoolDescriptor {
            id: id.into(),
            address: format!("{id}Pool"),
            reward_pool: None,
        }
    }

    fn orca_farm(id: &str, version: u8) -> FarmPoolDescriptor {
        FarmPoolDescriptor {
            id: id.into(),
            version,
            strategy: format!("{id}Strategy"),
            lp_decimals: 6,
            amm: AmmDescriptor {
                kind: AmmKind::Orca,
                lp_mint: format!("{id}Lp"),
                token_a: "SOL".into(),
                token_b: "USDC".into(),
                vault_a: "SolVault".into(),
                vault_b: "UsdcVault".into(),
            },
        }
    }

    fn registry() -> PoolRegistry {
        PoolRegistry::new(ProgramIds {
            lending: "LendingProgram".into(),
            lending_reward: "RewardProgram".into(),
            farm: "FarmProgram".into(),
        })
        .with_lending_pool(lending("USDC"))
        .with_lending_pool(lending("SOL"))
        .with_farm_pool(orca_farm("SOL-USDC", 3))
        .with_farm_pool(orca_farm("SOL-USDC-V2", 2))
    }

    fn chain(owner: Pubkey) -> MemoryChain {
        let lending = [
            LendingPoolSnapshot {
                pool: "USDC".into(),
                scale: 6,
                // 600 available, 400 borrowed, 800 shares
                available: U256::from(600_000_000u64),
                borrowed: U256::from(400_000_000u64),
                share_mint: "UsdcShares".into(),
                total_share_supply: U256::from(800_000_000u64),
            },
            LendingPoolSnapshot {
                pool: "SOL".into(),
                scale: 9,
                available: U256::from(10_000_000_000u64),
                borrowed: U256::zero(),
                share_mint: "SolShares".into(),
                total_share_supply: U256::from(10_000_000_000u64),
            },
        ];
        let farm = FarmPoolSnapshot {
            id: "SOL-USDC".into(),
            price_key: "orca-SOL-USDC".into(),
            lp_decimals: 6,
            total_lp: U256::from(1_000_000_000u64),
            total_shares: U256::from(2_000_000_000u64),
        };
        let reserves = AmmReserves {
            price_key: "orca-SOL-USDC".into(),
            token_a: "SOL".into(),
            token_b: "USDC".into(),
            reserve_a: Amount::new(100_000_000_000u64, 9),
            reserve_b: Amount::new(15_000_000_000u64, 6),
            lp_supply: Amount::new(1_000_000_000u64, 6),
        };
        let user_lending = UserLendingSnapshot {
            pool: "USDC".into(),
            reward_shares: U256::from(80_000_000u64),
            balance_shares: U256::from(20_000_000u64),
        };
        let user_farm = UserFarmSnapshot {
            farm: "SOL-USDC".into(),
            lp_shares: U256::from(200_000_000u64),
            borrowed_a: U256::from(10_000_000_000u64),
            borrowed_b: U256::zero(),
        };

        MemoryChain {
            owner,
            lending: lending.into_iter().map(|s| (s.pool.clone(), s)).collect(),
            farms: HashMap::from([(farm.id.clone(), farm)]),
            reserves: HashMap::from([(reserves.price_key.clone(), reserves)]),
            user_lending: HashMap::from([("USDC".to_string(), user_lending)]),
            user_farms: HashMap::from([("SOL-USDC".to_string(), user_farm)]),
        }
    }

    fn prices(quotes: &[(&str, Decimal)]) -> Arc<FixedPriceProvider> {
        Arc::new(FixedPriceProvider::new(
            quotes.iter().map(|(symbol, price)| (symbol.to_string(), *price)).collect(),
        ))
    }

    fn sdk(owner: Pubkey, quotes: &[(&str, Decimal)]) -> FranciumSdk {
        FranciumSdk::new(Arc::new(chain(owner)), prices(quotes), registry())
    }

    #[tokio::test]
    async fn test_lending_pool_tvl_values_unpriced_pool_at_zero() {
        let sdk = sdk(Pubkey::new_unique(), &[("USDC", dec!(1))]);
        let tvls = sdk.lending_pool_tvl().await.unwrap();

        assert_eq!(tvls.len(), 2);
        let usdc = &tvls[0];
        assert_eq!(usdc.id, "USDC");
        assert_eq!(usdc.liquidity_locked, dec!(1000));
        assert_eq!(usdc.available, dec!(600));
        assert_eq!(usdc.utilization, dec!(0.4));
        assert_eq!(usdc.apr, dec!(0.1));
        assert!(usdc.apy > dec!(10.51) && usdc.apy < dec!(10.52));

        let sol = &tvls[1];
        assert_eq!(sol.id, "SOL");
        assert_eq!(sol.liquidity_locked, Decimal::ZERO);
        assert_eq!(sol.apr, Decimal::ZERO);
        assert_eq!(sol.apy, Decimal::ZERO);
    }

    #[tokio::test]
    async fn test_farm_tvl_skips_retired_farms() {
        let sdk = sdk(Pubkey::new_unique(), &[("SOL", dec!(150)), ("USDC", dec!(1))]);

        let lp_prices = sdk.farm_lp_prices(&sdk.token_prices().await.unwrap()).await.unwrap();
        assert_eq!(lp_prices.get("orca-SOL-USDC"), Some(dec!(30)));

        let tvls = sdk.farm_pool_tvl().await.unwrap();
        assert_eq!(tvls.len(), 1);
        assert_eq!(tvls[0].id, "SOL-USDC");
        assert_eq!(tvls[0].lp_amount, dec!(1000));
        assert_eq!(tvls[0].liquidity_locked, dec!(30000));
    }

    #[tokio::test]
    async fn test_user_lending_positions_cover_every_pool() {
        let owner = Pubkey::new_unique();
        let sdk = sdk(owner, &[("USDC", dec!(1))]);
        let positions = sdk.user_lending_positions(&owner).await.unwrap();

        assert_eq!(positions.len(), 2);
        let usdc = &positions[0];
        assert_eq!(usdc.reward_position, dec!(80));
        assert_eq!(usdc.balance_position, dec!(20));
        assert_eq!(usdc.share_price, Some(dec!(1.25)));
        assert_eq!(usdc.total_amount, dec!(125));
        assert_eq!(usdc.value, dec!(125));

        assert_eq!(positions[1].pool, "SOL");
        assert_eq!(positions[1].total_position, Decimal::ZERO);
        assert_eq!(positions[1].value, Decimal::ZERO);
    }

    #[tokio::test]
    async fn test_user_farm_positions() {
        let owner = Pubkey::new_unique();
        let sdk = sdk(owner, &[("SOL", dec!(150)), ("USDC", dec!(1))]);

        let positions = sdk.user_farm_positions(&owner).await.unwrap();
        assert_eq!(positions.len(), 1);
        let position = positions[0].as_ref().unwrap();
        assert_eq!(position.lp_amount, dec!(100));
        assert_eq!(position.position_value, dec!(3000));
        assert_eq!(position.debt_value, dec!(1500));
        assert_eq!(position.equity_value, dec!(1500));
        assert_eq!(position.leverage, Some(dec!(2)));

        let stranger = sdk.user_farm_positions(&Pubkey::new_unique()).await.unwrap();
        assert_eq!(stranger, vec![None]);
    }

    #[tokio::test]
    async fn test_pool_tvl_by_id() {
        let sdk = sdk(Pubkey::new_unique(), &[("SOL", dec!(150)), ("USDC", dec!(1))]);

        match sdk.pool_tvl("SOL").await.unwrap() {
            PoolTvl::Lending(tvl) => assert_eq!(tvl.liquidity_locked, dec!(1500)),
            other => panic!("expected lending TVL, got {other:?}"),
        }
        match sdk.pool_tvl("SOL-USDC").await.unwrap() {
            PoolTvl::Farm(tvl) => assert_eq!(tvl.liquidity_locked, dec!(30000)),
            other => panic!("expected farm TVL, got {other:?}"),
        }
        assert!(matches!(
            sdk.pool_tvl("SOL-USDC-V2").await,
            Err(SdkError::Domain(DomainError::UnknownPool(_)))
        ));
    }

    #[tokio::test]
    async fn test_chain_errors_are_surfaced() {
        let sdk = FranciumSdk::new(
            Arc::new(chain(Pubkey::new_unique())),
            prices(&[]),
            registry().with_lending_pool(lending("RAY")),
        );
        assert!(matches!(
            sdk.lending_pool_tvl().await,
            Err(SdkError::Chain(ChainError::AccountNotFound(_)))
        ));
    }

    #[tokio::test]
    async fn test_price_provider_can_be_replaced() {
        let sdk = sdk(Pubkey::new_unique(), &[]).with_price_provider(prices(&[("SOL", dec!(2))]));
        let quotes = sdk.token_prices().await.unwrap();
        assert_eq!(quotes.get("SOL"), Some(dec!(2)));
    }

    #[test]
    fn test_only_held_shares_need_a_price() {
        let prices: PriceMap = [("USDC".to_string(), dec!(1))].into_iter().collect();
        let held = UserLendingSnapshot {
            pool: "SOL".into(),
            reward_shares: U256::zero(),
            balance_shares: U256::from(5u64),
        };

        assert!(holds_unpriced_shares(&held, &prices));
        assert!(!holds_unpriced_shares(&UserLendingSnapshot::empty("SOL"), &prices));
        assert!(!holds_unpriced_shares(
            &UserLendingSnapshot {
                pool: "USDC".into(),
                ..held
            },
            &prices
        ));
    }

    #[test]
    fn test_from_config_requires_registry() {
        assert!(matches!(
            FranciumSdk::from_config(&SdkConfig::default()),
            Err(SdkError::Config(_))
        ));
    }
}
