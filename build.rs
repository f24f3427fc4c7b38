// build.rs — Inject version + build timestamp.
//
// On every compile:
// 1. Reads Version.toml (major, minor, build)
// 2. Emits cargo:rustc-env directives so src/ can use env!() macros
//
// Env vars injected:
//   MIE_VERSION_STRING  e.g. "0.1.0"
//   MIE_BUILD_TIMESTAMP e.g. "Oct 16 2026 14:30"

use std::fs;
use std::path::Path;
use chrono::Local;





////////////////////////////////////////////////////////////////////////////////

struct Version {
    major: u32,
    minor: u32,
    build: u32,
}





////////////////////////////////////////////////////////////////////////////////
//
//  impl Display for Version
//
//  Formats the version as "major.minor.build".
//
////////////////////////////////////////////////////////////////////////////////

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.build)
    }
}





////////////////////////////////////////////////////////////////////////////////
//
//  read_version
//
//  Reads major, minor, and build numbers from Version.toml.  A missing
//  file yields 0.0.0 rather than failing the build.
//
////////////////////////////////////////////////////////////////////////////////

fn read_version(path: &Path) -> Version {
    let contents = fs::read_to_string(path).unwrap_or_default();
    let mut version = Version { major: 0, minor: 0, build: 0 };



    for line in contents.lines() {
        let line = line.trim();

        if line.starts_with('#') || line.is_empty() {
            continue;
        }

        if let Some((key, value)) = line.split_once('=') {
            let val = value.trim().parse().unwrap_or(0);

            match key.trim() {
                "major" => version.major = val,
                "minor" => version.minor = val,
                "build" => version.build = val,
                _ => {}
            }
        }
    }

    version
}





////////////////////////////////////////////////////////////////////////////////
//
//  main
//
//  Entry point: reads the version and emits env vars.
//
////////////////////////////////////////////////////////////////////////////////

fn main() {
    let version   = read_version(Path::new("Version.toml"));
    let timestamp = Local::now().format("%b %e %Y %H:%M").to_string();

    println!("cargo:rerun-if-changed=Version.toml");
    println!("cargo:rustc-env=MIE_VERSION_STRING={version}");
    println!("cargo:rustc-env=MIE_BUILD_TIMESTAMP={timestamp}");
}
