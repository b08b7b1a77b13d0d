// File: crates/ticker-chart-core/build.rs
// Summary: Build script to link the Windows system libraries Skia text shaping (ICU) needs.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // Needed for RegOpenKeyExW, RegQueryInfoKeyW, etc.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
