pub mod artwork_card;
pub mod blurhash_canvas;
pub mod feed;
pub mod gallery;
pub mod image_uploader;
pub mod login_form;
pub mod navbar;
pub mod profile_form;
pub mod protected;
pub mod sentinel;
pub mod signup_form;
