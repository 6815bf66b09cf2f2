fn main() {
    // Emit ESP-IDF linker/env metadata only for firmware builds; host-target
    // test builds have no IDF toolchain to probe.
    if std::env::var_os("CARGO_FEATURE_ESPIDF").is_some() {
        embuild::espidf::sysenv::output();
    }
}
