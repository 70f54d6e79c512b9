use maud::{html, Markup, Render};

use crate::data::*;

pub mod components;
pub mod pages;
mod wrappers;
