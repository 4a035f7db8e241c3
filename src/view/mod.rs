mod coordinator;
mod popup;
mod surfaces;

pub use coordinator::{Phase, ViewCoordinator};
pub use popup::popup_content;
pub use surfaces::{LocationBar, MapSurface, StatusUi};
