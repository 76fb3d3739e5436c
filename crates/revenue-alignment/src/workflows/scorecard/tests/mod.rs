mod common;
mod copy;
mod scoring;
