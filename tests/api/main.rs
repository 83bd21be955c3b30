mod config;
mod guides;
mod requests;
