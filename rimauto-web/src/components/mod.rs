pub mod bottom_nav;
pub mod car_card;
pub mod city_selector;
pub mod field;
pub mod loading;
pub mod login_widget;
pub mod navbar;
pub mod pagination;
pub mod rating;

pub use bottom_nav::BottomNav;
pub use car_card::CarCard;
pub use city_selector::CitySelector;
pub use field::{SelectField, TextAreaField, TextField};
pub use loading::Loading;
pub use login_widget::TelegramLoginWidget;
pub use navbar::Navbar;
pub use pagination::Pagination;
pub use rating::{RatingPicker, RatingStars};
