pub mod assets;
pub mod ctx;
pub mod vector;

pub use assets::{AssetSource, DirSource, Fetch, MemorySource};
pub use ctx::Ctx;
pub use vector::VectorDoc;
