pub mod annotation;
pub mod builder;
pub mod config;
pub mod dispatch;
pub mod domain;
pub mod error;
pub mod identifiers;
pub mod output;
pub mod warning;
