//! Base traits for indexes.

use ir_currencies::Currency;

/// Any market index.
pub trait Index: std::fmt::Debug + Send + Sync {
    /// Unique name (e.g. `"EUR-Euribor-6M"`).
    fn name(&self) -> &str;

    /// Currency of the index.
    fn currency(&self) -> Currency;
}

/// An index fixing on deposits (Ibor or overnight), i.e. one whose forward
/// over `[start, end]` comes from a forward curve.
pub trait IndexDeposit: Index + Clone + PartialEq {}
