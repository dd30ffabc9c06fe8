pub mod account_menu;
pub mod avatar;
pub mod compact_nav;
pub mod full_nav;
pub mod icons;
pub mod sidebar;
