#![allow(dead_code)]

pub mod newscheck_env;
pub mod predict_server;
