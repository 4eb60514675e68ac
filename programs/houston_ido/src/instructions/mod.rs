pub mod capability;
pub mod claim;
pub mod create_launch;
pub mod deposit;
pub mod vesting_settings;
pub mod view;
pub mod withdraw;

pub use capability::*;
pub use claim::*;
pub use create_launch::*;
pub use deposit::*;
pub use vesting_settings::*;
pub use view::*;
pub use withdraw::*;
