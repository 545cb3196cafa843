pub mod grid;
pub mod primitives;
pub mod shoe_card;
pub mod ssr;
pub mod text;
pub mod theme;
pub mod variant;

pub use grid::ShoeGrid;
pub use shoe_card::ShoeCard;
pub use ssr::{render_card, render_grid};
pub use variant::CardVariant;
