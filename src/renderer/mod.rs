//! Drawing boundary
//!
//! The simulation never owns a graphics backend. The host implements
//! [`Surface`] over whatever 2D canvas it has; [`DrawList`] records the
//! calls instead, for headless runs and tests.

pub mod draw_list;
pub mod surface;

pub use draw_list::{DrawCommand, DrawList};
pub use surface::{Rgba, Surface};
