//! Entry point for the WASM application

pub fn main() {
    image_combiner::start();
}
