#![doc = include_str!("../README.md")]

extern crate alloc;

mod config;
mod globals;
pub mod html;
pub mod text;
pub mod utility;
pub mod value;

pub use self::{
    config::*,
    globals::Globals,
    html::{
        AttributeMap, AttributeValue, Attributes, HtmlBuilder, Inner, StrictAttributes,
        StrictValue, TagSelector,
    },
};
