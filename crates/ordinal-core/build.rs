fn main() {
    // Validate embedded TOML files at compile time.
    validate_toml(
        "src/nato/default_nato_aliases.toml",
        include_str!("src/nato/default_nato_aliases.toml"),
    );
}

fn validate_toml(path: &str, content: &str) {
    if content.parse::<toml::Value>().is_err() {
        panic!("{path} contains invalid TOML");
    }
}
