pub mod category_card;
pub mod footer;
pub mod headers;
pub mod icons;
pub mod logo;
pub mod support;
pub mod toast;
