use std::fs;

fn main() {
    println!("cargo:rerun-if-changed=Cargo.toml");
    let Ok(cargo_toml) = fs::read_to_string("Cargo.toml") else {
        return;
    };
    let Ok(cargo) = cargo_toml.parse::<toml::Value>() else {
        return;
    };
    let package = match cargo.get("package") {
        Some(package) => package,
        None => return,
    };

    for (key, var) in [
        ("name", "CHARGILY_PKG_NAME"),
        ("version", "CHARGILY_PKG_VERSION"),
        ("description", "CHARGILY_PKG_DESCRIPTION"),
    ] {
        if let Some(value) = package.get(key).and_then(|v| v.as_str()) {
            println!("cargo:rustc-env={}={}", var, value);
        }
    }
}
