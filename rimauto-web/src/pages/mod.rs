pub mod about;
pub mod admin;
pub mod auth_debug;
pub mod car;
pub mod catalog;
pub mod coming_soon;
pub mod credit;
pub mod favorites;
pub mod guarantee;
pub mod insurance;
pub mod leasing;
pub mod menu;
pub mod order;
pub mod reviews;
pub mod services_market;

pub use about::AboutPage;
pub use admin::AdminPage;
pub use auth_debug::AuthDebugPage;
pub use car::CarPage;
pub use catalog::CatalogPage;
pub use coming_soon::ComingSoonPage;
pub use credit::{CreditPage, RenesansCreditPage};
pub use favorites::FavoritesPage;
pub use guarantee::{GuaranteeCompanyPage, GuaranteePage};
pub use insurance::{InsuranceCompanyPage, InsurancePage};
pub use leasing::{LeasingCompanyPage, LeasingPage};
pub use menu::MenuPage;
pub use order::OrderPage;
pub use reviews::ReviewsPage;
pub use services_market::{
    DetailingPage, HelpPage, StoPage, TirePage, WashPage,
};
