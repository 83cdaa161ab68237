#![allow(dead_code)]

pub mod objects;
