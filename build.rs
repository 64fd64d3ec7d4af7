fn main() {
    // Exposes package, target and compiler information to the CLI
    // through `build_info::version_string`.
    built::write_built_file().expect("Failed to acquire build-time information");
}
