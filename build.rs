fn main() {
    // Embed `git describe` output so `tourdesk --version` can report the
    // exact commit a binary was built from. Absent git metadata (e.g. a
    // crates.io build) the env var is simply not set.
    let output = std::process::Command::new("git")
        .args(["describe", "--always", "--tags", "--long", "--dirty"])
        .output()
        .ok();
    let git_info = output
        .as_ref()
        .and_then(|o| std::str::from_utf8(&o.stdout).ok().map(str::trim))
        .filter(|s| !s.is_empty());

    if let Some(git_info) = git_info {
        println!("cargo:rustc-env=_GIT_INFO={git_info}");
    }
    println!("cargo:rerun-if-changed=.git/HEAD");
}
