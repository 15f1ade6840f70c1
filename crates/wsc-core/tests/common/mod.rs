#![allow(dead_code)]

pub mod license_server;
