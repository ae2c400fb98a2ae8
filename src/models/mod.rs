/// Signed drawing coordinates and list cell views
pub mod position;
/// Change regions and grid events
pub mod region;

pub use position::{CellView, Position};
pub use region::{GridEvent, Region};
