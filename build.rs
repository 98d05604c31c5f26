use std::process::Command;

fn main() {
    // Git commit hash（短）
    let commit = run(&["git", "rev-parse", "--short", "HEAD"]);
    // 构建时间（UTC），不引入 chrono，直接调用 date
    let build_time = run(&["date", "-u", "+%Y-%m-%dT%H:%M:%SZ"]);
    let target = std::env::var("TARGET").unwrap_or_else(|_| "unknown".to_string());
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "unknown".to_string());

    println!("cargo:rustc-env=SMART_TRIM_GIT_COMMIT={commit}");
    println!("cargo:rustc-env=SMART_TRIM_BUILD_TIME={build_time}");
    println!("cargo:rustc-env=SMART_TRIM_BUILD_TARGET={target}");
    println!("cargo:rustc-env=SMART_TRIM_BUILD_PROFILE={profile}");

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/");
}

/// 执行命令并取其输出，失败时返回 "unknown"
fn run(args: &[&str]) -> String {
    Command::new(args[0])
        .args(&args[1..])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .map(|o| String::from_utf8_lossy(&o.stdout).trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
