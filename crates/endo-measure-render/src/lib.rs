//! Overlay rendering and burned-in artifacts.
//!
//! Two render paths share the same primitives:
//! - the live overlay, redrawn after every operator action, with zoom-aware
//!   marker sizing, the pending point, and the guide circles;
//! - the burned-in artifact saved next to the original image, which carries
//!   confirmed sites only.
//!
//! Everything draws into plain `image::RgbImage` buffers; no GPU, no UI
//! toolkit.

mod draw;
mod font;
mod overlay;

pub use draw::{draw_circle_outline, draw_cross, draw_disc, draw_line};
pub use font::{draw_text, text_height, text_width};
pub use overlay::{burn_in, render_overlay, PENDING_COLOR, SITE_COLOR};
