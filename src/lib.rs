pub mod config;
pub mod engine;
pub mod errors;
pub mod input;
pub mod points;
pub mod projection;
pub mod report;
pub mod tiers;
pub mod types;

// re-export key types
pub use config::{RulesetConfig, RulesetVersion};
pub use engine::AccrualEngine;
pub use errors::{AccrualError, Result};
pub use input::{InputRecord, DEFAULT_TARGET_LSP};
pub use points::{Miles, Points, Yen, MAN_YEN};
pub use projection::TargetProjection;
pub use tiers::{TierTable, DOMESTIC_DEPOSIT, FOREIGN_DEPOSIT};
pub use types::{AccrualResult, Category, CategoryBreakdown};

// re-export external dependencies that users will need
pub use rust_decimal::Decimal;
