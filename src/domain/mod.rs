//! Domain model, repository contracts and use cases.

mod model;
mod repository;
mod usecase;

pub use model::{LoginResponse, WaifuImage};
pub use repository::{LoginRepository, WaifuRepository};
pub use usecase::{GetPortraitWaifus, DEFAULT_PAGE_SIZE};
