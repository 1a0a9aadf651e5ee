mod business;
mod server;
mod user;
