pub mod aggregate;
pub mod callouts;
pub mod colors;
pub mod config;
pub mod customer;
pub mod engine;
pub mod error;
pub mod events;
pub mod interaction;
pub mod pins;
pub mod selection;
pub mod states;
pub mod stories;

pub use aggregate::{StateCounts, aggregate};
pub use colors::{Color, ColorPolicy, HoverState, Palette};
pub use config::WidgetConfig;
pub use customer::{CustomerRecord, RecordId, parse_customers};
pub use engine::{MapEngine, RenderTargets};
pub use error::*;
pub use events::*;
pub use interaction::{Effect, ElementKind, InteractionController, PointerInput};
pub use pins::{PinMarker, Projector};
pub use states::{StateDirectory, StateIdentity};
