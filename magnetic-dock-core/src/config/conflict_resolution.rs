use crate::models::{DockPosition, Xyhw};
use serde::{Deserialize, Serialize};

/// How to pick between two positions that match on the same axis, e.g.
/// `InsideLeft` and `OutsideLeft` at once.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ConflictResolution {
    /// Inside beats outside, then the closer edge, then evaluation order.
    #[default]
    Innermost,
    /// The last match in evaluation order wins.
    LastMatch,
}

impl ConflictResolution {
    /// Choose one of `matches`, which are given in evaluation order.
    pub fn pick<I>(self, matches: I, host: &Xyhw, child: &Xyhw) -> Option<DockPosition>
    where
        I: IntoIterator<Item = DockPosition>,
    {
        let matches = matches.into_iter();
        match self {
            Self::LastMatch => matches.last(),
            Self::Innermost => matches.min_by(|a, b| {
                b.is_inside().cmp(&a.is_inside()).then_with(|| {
                    a.edge_distance(host, child)
                        .total_cmp(&b.edge_distance(host, child))
                })
            }),
        }
    }
}
