//! Content-block data model: the unit of generated display content and the
//! lenient payload shapes templates consume.

pub mod block;
pub mod content;
pub mod payload;

pub use block::ContentBlock;
