mod support;

mod export;
mod scan;
