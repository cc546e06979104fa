//! Speech service provider implementations

pub mod google_translate;
