// File: crates/meridian-render-skia/build.rs
// Summary: Platform link flags required by the prebuilt Skia binaries.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // Skia's font manager reads the registry (RegOpenKeyExW and friends).
        println!("cargo:rustc-link-lib=advapi32");
    }
}
