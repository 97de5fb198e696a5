//! Items: depletable pool resources, their fragments, and pool generation.

pub mod catalog;
pub mod item;

pub use catalog::{catalog_name, draw_pool};
pub use item::{Fragment, Item};
