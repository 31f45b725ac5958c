use std::{
    env, fs,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};

fn main() {
    // 1) Handle memory.x when building for the RP2040
    let target = env::var("TARGET").unwrap();
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    if target.starts_with("thumbv6m") {
        let memory_x = fs::read_to_string("memory.x").expect("Failed to read memory.x");
        let dest = out_dir.join("memory.x");
        fs::write(&dest, memory_x).expect("Failed to write memory.x");
        println!("cargo:rustc-link-search={}", out_dir.display());
        println!("cargo:rerun-if-changed=memory.x");
    }

    // 2) Capture the build instant so the firmware can set the RTC to it at
    //    startup, the same role __DATE__/__TIME__ played in C firmware.
    let build_unix_seconds = env::var("SOURCE_DATE_EPOCH").unwrap_or_else(|_| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system clock before Unix epoch")
            .as_secs()
            .to_string()
    });
    println!("cargo:rustc-env=BUILD_UNIX_SECONDS={build_unix_seconds}");
    println!("cargo:rerun-if-env-changed=SOURCE_DATE_EPOCH");
}
