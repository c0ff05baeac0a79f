pub mod model;
pub mod ui;
pub mod view_model;

pub use ui::PicklistButtons;
pub use view_model::PicklistFieldVm;
