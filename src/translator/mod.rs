pub mod interface;
pub mod client;
pub mod factory;

pub use interface::{TranslatorError, TranslatorInterface};
pub use client::GoogleTranslateClient;
pub use factory::TranslatorFactory;
