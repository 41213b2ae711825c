#![allow(dead_code)]

pub mod contracts;
pub mod helper;
