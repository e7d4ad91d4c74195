pub mod pool;
pub mod position;
pub mod token;

// Re-export for easier access
pub use pool::{
    AmmDescriptor, AmmReserves, FarmPoolDescriptor, FarmPoolSnapshot, LendingPoolDescriptor,
    LendingPoolSnapshot, PoolDescriptor,
};
pub use position::{UserFarmSnapshot, UserLendingSnapshot};
pub use token::Token;
