pub mod nav;
pub mod typing_title;
