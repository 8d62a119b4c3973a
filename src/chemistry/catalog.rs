//! Fixed startup rule set
//!
//! Rule sets are fixed at startup; there is no authoring surface. This
//! catalog grows chains from the seeded strip and closes loose ends into
//! small membranes.

use crate::chemistry::reaction::Reaction;
use crate::core::error::Result;

/// The default chemistry, in match order
pub fn default_reactions() -> Result<Vec<Reaction>> {
    Ok(vec![
        // an activated seed head (e8) recruits raw material into a chain
        Reaction::new('e', 8, false, 'e', 0, 8, true, 1)?,
        // a chain link extends the chain with the next raw e cell
        Reaction::new('e', 1, false, 'e', 0, 2, true, 1)?,
        // a membrane anchor (f1) grabs any adjacent raw cell
        Reaction::new('f', 1, false, 'y', 0, 1, true, 1)?,
        // two saturated links of the same kind pair up, closing loops
        Reaction::new('x', 2, false, 'x', 2, 3, true, 3)?,
        // over-saturated pairs release each other and relax
        Reaction::new('x', 3, true, 'y', 3, 4, false, 4)?,
    ])
}
