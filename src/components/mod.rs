//! UI Components

mod category_bar;
mod sweet_card;
mod sweet_form;

pub use category_bar::CategoryBar;
pub use sweet_card::SweetCard;
pub use sweet_form::SweetForm;
