//! Card system: definitions, cards in play, and the registry.
//!
//! ## Key Types
//!
//! - `DefinitionId` / `CardDefinition`: printed card stats
//! - `CardId` / `Card`: a specific card in a match, with mutable hp and
//!   tick bookkeeping
//! - `CardRegistry`: definition lookup, standard catalog, deck generation

pub mod definition;
pub mod instance;
pub mod registry;

pub use definition::{CardClass, CardDefinition, DefinitionId, HoldBonus};
pub use instance::{Card, CardId, StackPosition};
pub use registry::{CardRegistry, DeckRecipe};
