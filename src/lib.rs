pub mod models {
    pub mod conversion;
    pub mod error;
}

pub mod service {
    pub mod config_service;
    pub mod format;
    pub mod parse;
    pub mod text;
    pub mod traits {
        pub mod i_service;
    }
}

pub mod facade {
    pub mod conversion_facade;
    pub mod traits {
        pub mod i_conversion;
    }
}

pub mod config {
    pub mod config;
    pub mod ports;
}

pub mod action {
    pub mod cli;
    pub mod interactive;
}

pub mod utils {
    pub mod convert;
    pub mod utils;
}

pub use facade::conversion_facade::{convert, ConversionFacade};
pub use models::conversion::{ConversionRequest, ConversionResponse, Format};
pub use models::error::ConversionError;
