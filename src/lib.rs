//! An ordered map implemented using an avl tree, along with a word frequency counter built on
//! top of it.

mod entry;
pub mod avl_tree;
pub mod error;
pub mod word_count;

pub use crate::error::{Error, Result};
