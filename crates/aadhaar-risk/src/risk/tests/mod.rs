mod banding;
mod common;
