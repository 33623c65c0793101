//! Entry point for generating `PushKit`'s foreign-language bindings.

fn main() {
    uniffi::uniffi_bindgen_main();
}
