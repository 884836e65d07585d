fn main() {
    let git_dir = std::process::Command::new("git")
        .args(["rev-parse", "--git-dir"])
        .output()
        .ok()
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|dir| dir.trim().to_string())
        .filter(|dir| !dir.is_empty());

    // Rerun when HEAD moves.
    if let Some(git_dir) = git_dir {
        let git_path = std::path::Path::new(&git_dir);
        for file in ["HEAD", "packed-refs", "refs/heads", "refs/tags"] {
            if git_path.join(file).exists() {
                println!("cargo:rerun-if-changed={git_dir}/{file}");
            }
        }
    }

    let describe = std::process::Command::new("git")
        .args(["describe", "--always", "--tags", "--long", "--dirty"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok());

    if let Some(describe) = describe {
        println!("cargo:rustc-env=COMPOSER_GIT_INFO={}", describe.trim());
    }
}
