// src/ui/widgets/mod.rs

// One module per screen element. Pages are composed from these in `ui::render`.

pub mod contact;
pub mod disclaimer_popup;
pub mod drop_zone;
pub mod flash;
pub mod footer;
pub mod home;
pub mod input;
pub mod nav;
pub mod register;
pub mod scan_page;
pub mod verdict_view;
