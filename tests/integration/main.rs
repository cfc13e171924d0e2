mod common;
mod session;
mod startup;
