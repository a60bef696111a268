//! Feed-agnostic domain logic: path lookup, odds types, output rows.

pub mod odds;
pub mod path;
pub mod record;

pub use odds::{EventContext, MarketGroup, MarketKind, OddsTriple, OfferGrouping};
pub use path::PathExpression;
pub use record::OutputRecord;
