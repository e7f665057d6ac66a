//! Offers is a service for keeping and comparing vacation offers.
//! This crate is for running the service from `offers_lib`. See
//! `offers_lib` for details.

extern crate env_logger;
extern crate offers_lib;

fn main() {
    // Prepare logger
    env_logger::init();

    let config = offers_lib::config::Config::new().expect("Can't load app config!");

    offers_lib::start_server(config, &None, || ());
}
